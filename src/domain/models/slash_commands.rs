#[cfg(test)]
#[path = "slash_commands_test.rs"]
mod tests;

pub struct SlashCommand {
    command: String,
    pub args: Vec<String>,
}

impl SlashCommand {
    pub fn parse(text: &str) -> Option<SlashCommand> {
        let mut args = text
            .trim()
            .split(' ')
            .map(|e| return e.to_string())
            .collect::<Vec<String>>();
        let prefix = args[0].to_string();
        args.remove(0);

        let cmd = SlashCommand {
            command: prefix,
            args,
        };
        if cmd.is_quit()
            || cmd.is_unit_toggle()
            || cmd.is_theme_toggle()
            || cmd.is_favorite_toggle()
            || cmd.is_clear_favorites()
            || cmd.is_clear_history()
            || cmd.is_locate()
            || cmd.is_voice()
            || cmd.is_name_set()
            || cmd.is_logout()
            || cmd.is_help()
        {
            return Some(cmd);
        }

        return None;
    }

    pub fn is_quit(&self) -> bool {
        return ["/q", "/quit", "/exit"].contains(&self.command.as_str());
    }

    pub fn is_unit_toggle(&self) -> bool {
        return ["/u", "/unit"].contains(&self.command.as_str());
    }

    pub fn is_theme_toggle(&self) -> bool {
        return ["/t", "/theme"].contains(&self.command.as_str());
    }

    pub fn is_favorite_toggle(&self) -> bool {
        return ["/f", "/fav", "/favorite"].contains(&self.command.as_str());
    }

    pub fn is_clear_favorites(&self) -> bool {
        return ["/fc", "/favclear"].contains(&self.command.as_str());
    }

    pub fn is_clear_history(&self) -> bool {
        return ["/hc", "/histclear"].contains(&self.command.as_str());
    }

    pub fn is_locate(&self) -> bool {
        return ["/l", "/locate"].contains(&self.command.as_str());
    }

    pub fn is_voice(&self) -> bool {
        return ["/v", "/voice"].contains(&self.command.as_str());
    }

    pub fn is_name_set(&self) -> bool {
        return ["/n", "/name"].contains(&self.command.as_str());
    }

    pub fn is_logout(&self) -> bool {
        return ["/logout"].contains(&self.command.as_str());
    }

    pub fn is_help(&self) -> bool {
        return ["/h", "/help"].contains(&self.command.as_str());
    }
}
