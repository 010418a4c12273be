use std::io;
use std::path;

use anyhow::bail;
use anyhow::Result;
use clap::value_parser;
use clap::Arg;
use clap::ArgAction;
use clap::Command;
use clap_complete::generate;
use clap_complete::Generator;
use clap_complete::Shell;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use yansi::Paint;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::services::actions::help_text;
use crate::domain::services::Store;

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
    std::process::exit(0);
}

async fn create_config_file() -> Result<()> {
    let config_file_path_str = Config::default(ConfigKey::ConfigFile);
    let config_file_path = path::PathBuf::from(&config_file_path_str);
    if config_file_path.exists() {
        bail!(format!(
            "Config file already exists at {config_file_path_str}"
        ));
    }

    if !config_file_path.parent().unwrap().exists() {
        fs::create_dir_all(config_file_path.parent().unwrap()).await?;
    }

    let mut file = fs::File::create(config_file_path.clone()).await?;
    file.write_all(Config::serialize_default(build()).as_bytes())
        .await?;

    let config_path_display = config_file_path.as_os_str().to_str().unwrap();
    println!("Created default config file at {config_path_display}");
    return Ok(());
}

async fn print_profile() -> Result<()> {
    let store = Store::default();
    let Some(session) = store.session().await? else {
        println!("No profile is logged in.");
        return Ok(());
    };

    println!("Name: {}", session.name);
    println!("Contact: {}", session.contact);
    println!("Last login: {}", session.last_login);

    return Ok(());
}

fn subcommand_completions() -> Command {
    return Command::new("completions")
        .about("Generates shell completions.")
        .arg(
            clap::Arg::new("shell")
                .short('s')
                .long("shell")
                .help("Which shell to generate completions for.")
                .action(ArgAction::Set)
                .value_parser(value_parser!(Shell))
                .required(true),
        );
}

fn subcommand_config() -> Command {
    return Command::new("config")
        .about("Configuration file options.")
        .subcommand(
            Command::new("create").about("Saves the default config file to the configuration file path. This command will fail if the file exists already.")
        )
        .subcommand(
            Command::new("default").about("Outputs the default configuration file to stdout.")
        )
        .subcommand(
            Command::new("path").about("Returns the default path for the configuration file.")
        );
}

fn subcommand_profile() -> Command {
    return Command::new("profile")
        .about("Manage the stored profile and preferences.")
        .arg_required_else_help(true)
        .subcommand(Command::new("dir").about("Print the data directory path."))
        .subcommand(Command::new("show").about("Show the logged in profile."))
        .subcommand(Command::new("clear").about("Log out by clearing the stored session."));
}

pub fn build() -> Command {
    let commands_text = help_text()
        .split('\n')
        .map(|line| {
            if line.starts_with('-') {
                return format!("  {line}");
            }
            if line.starts_with("COMMANDS:") || line.starts_with("HOTKEYS:") {
                return Paint::new(format!("DASHBOARD {line}"))
                    .underline()
                    .bold()
                    .to_string();
            }
            return line.to_string();
        })
        .collect::<Vec<String>>()
        .join("\n");

    let about = format!(
        "{}\n\nVersion: {}",
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION"),
    );

    return Command::new("drizzle")
        .about(about)
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .after_help(commands_text)
        .arg_required_else_help(false)
        .subcommand(subcommand_completions())
        .subcommand(subcommand_config())
        .subcommand(subcommand_profile())
        .arg(
            Arg::new(ConfigKey::ConfigFile.to_string())
                .short('c')
                .long(ConfigKey::ConfigFile.to_string())
                .env("DRIZZLE_CONFIG_FILE")
                .num_args(1)
                .help(format!(
                    "Path to configuration file [default: {}]",
                    Config::default(ConfigKey::ConfigFile)
                ))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::DataDir.to_string())
                .short('d')
                .long(ConfigKey::DataDir.to_string())
                .env("DRIZZLE_DATA_DIR")
                .num_args(1)
                .help("Directory holding the profile, favorites, and history. Defaults to the platform data directory.")
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::GeocodingURL.to_string())
                .long(ConfigKey::GeocodingURL.to_string())
                .env("DRIZZLE_GEOCODING_URL")
                .num_args(1)
                .help(format!(
                    "Open-Meteo geocoding API URL. [default: {}]",
                    Config::default(ConfigKey::GeocodingURL)
                ))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::ForecastURL.to_string())
                .long(ConfigKey::ForecastURL.to_string())
                .env("DRIZZLE_FORECAST_URL")
                .num_args(1)
                .help(format!(
                    "Open-Meteo forecast API URL. [default: {}]",
                    Config::default(ConfigKey::ForecastURL)
                ))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::AirQualityURL.to_string())
                .long(ConfigKey::AirQualityURL.to_string())
                .env("DRIZZLE_AIR_QUALITY_URL")
                .num_args(1)
                .help(format!(
                    "Open-Meteo air quality API URL. [default: {}]",
                    Config::default(ConfigKey::AirQualityURL)
                ))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::Latitude.to_string())
                .long(ConfigKey::Latitude.to_string())
                .env("DRIZZLE_LATITUDE")
                .num_args(1)
                .help("Latitude used by the /locate command.")
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::Longitude.to_string())
                .long(ConfigKey::Longitude.to_string())
                .env("DRIZZLE_LONGITUDE")
                .num_args(1)
                .help("Longitude used by the /locate command.")
                .global(true),
        );
}

pub async fn parse() -> Result<bool> {
    let matches = build().get_matches();

    match matches.subcommand() {
        Some(("completions", subcmd_matches)) => {
            if let Some(completions) = subcmd_matches.get_one::<Shell>("shell").copied() {
                let mut app = build();
                print_completions(completions, &mut app);
            }
        }
        Some(("config", subcmd_matches)) => match subcmd_matches.subcommand() {
            Some(("create", _)) => {
                create_config_file().await?;
                return Ok(false);
            }
            Some(("default", _)) => {
                println!("{}", Config::serialize_default(build()));
                return Ok(false);
            }
            Some(("path", _)) => {
                println!("{}", Config::default(ConfigKey::ConfigFile));
                return Ok(false);
            }
            _ => {
                subcommand_config().print_long_help()?;
                return Ok(false);
            }
        },
        Some(("profile", subcmd_matches)) => {
            Config::load(build(), vec![&matches, subcmd_matches]).await?;

            match subcmd_matches.subcommand() {
                Some(("dir", _)) => {
                    let dir = Store::default().dir().to_string_lossy().to_string();
                    println!("{dir}");
                }
                Some(("show", _)) => {
                    print_profile().await?;
                }
                Some(("clear", _)) => {
                    Store::default().clear_session().await?;
                    println!("Cleared the stored session.");
                }
                _ => {
                    subcommand_profile().print_long_help()?;
                }
            }

            return Ok(false);
        }
        _ => {
            Config::load(build(), vec![&matches]).await?;
        }
    }

    return Ok(true);
}
