use std::io;

use anyhow::Result;
use chrono::Local;
use chrono::Timelike;
use crossterm::cursor;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::CrosstermBackend;
use ratatui::prelude::*;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::List;
use ratatui::widgets::ListItem;
use ratatui::widgets::ListState;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Wrap;
use tokio::sync::mpsc;

use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::Loading;
use crate::domain::models::SlashCommand;
use crate::domain::models::TextArea;
use crate::domain::models::Theme;
use crate::domain::services::aqi;
use crate::domain::services::dashboard;
use crate::domain::services::weather_code;
use crate::domain::services::weather_code::Background;
use crate::domain::services::AppState;
use crate::domain::services::Debouncer;
use crate::domain::services::EventsService;
use crate::domain::services::Screen;
use crate::domain::services::Store;

fn scene_color(background: Background) -> Color {
    return match background {
        Background::Sunny => Color::Yellow,
        Background::NightClear => Color::Blue,
        Background::Cloudy => Color::DarkGray,
        Background::Rainy => Color::Cyan,
        Background::Snowy => Color::White,
    };
}

fn text_line(textarea: &tui_textarea::TextArea<'_>) -> String {
    return textarea.lines().join(" ").trim().to_string();
}

fn focus_cursor(textarea: &mut tui_textarea::TextArea<'_>, focused: bool) {
    if focused {
        textarea.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
    } else {
        textarea.set_cursor_style(Style::default());
    }
}

fn render_login<B: Backend>(
    frame: &mut Frame<'_, B>,
    app_state: &AppState,
    name_textarea: &tui_textarea::TextArea<'_>,
    contact_textarea: &tui_textarea::TextArea<'_>,
) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Max(2),
            Constraint::Max(3),
            Constraint::Max(3),
            Constraint::Max(1),
            Constraint::Min(1),
        ])
        .split(frame.size());

    frame.render_widget(
        Paragraph::new("Welcome to Drizzle. Log in to check the weather.")
            .alignment(Alignment::Center),
        layout[0],
    );
    frame.render_widget(name_textarea.widget(), layout[1]);
    frame.render_widget(contact_textarea.widget(), layout[2]);

    if let Some(toast) = &app_state.toast {
        frame.render_widget(
            Paragraph::new(toast.text.as_str()).style(Style::default().fg(Color::Yellow)),
            layout[3],
        );
    }

    frame.render_widget(
        Paragraph::new("Tab switches fields. Enter logs in. CTRL+C exits.")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray)),
        layout[4],
    );
}

fn render_dashboard<B: Backend>(
    frame: &mut Frame<'_, B>,
    app_state: &AppState,
    search_textarea: &tui_textarea::TextArea<'_>,
    loading: &Loading,
) {
    if app_state.theme == Theme::Dark {
        frame.render_widget(
            Block::default().style(Style::default().bg(Color::Black).fg(Color::White)),
            frame.size(),
        );
    }

    let mut suggestions_height = 0;
    if !app_state.suggestions.is_empty() {
        suggestions_height = app_state.suggestions.len() as u16 + 2;
    }

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Max(3),
            Constraint::Max(suggestions_height),
            Constraint::Max(1),
            Constraint::Min(1),
        ])
        .split(frame.size());

    frame.render_widget(search_textarea.widget(), layout[0]);

    if !app_state.suggestions.is_empty() {
        let items = app_state
            .suggestions
            .iter()
            .map(|candidate| return ListItem::new(candidate.label()))
            .collect::<Vec<ListItem<'_>>>();
        let mut list_state = ListState::default();
        list_state.select(app_state.selected_suggestion);

        frame.render_stateful_widget(
            List::new(items)
                .block(Block::default().borders(Borders::ALL).title("Suggestions"))
                .highlight_style(Style::default().add_modifier(Modifier::REVERSED)),
            layout[1],
            &mut list_state,
        );
    }

    if let Some(toast) = &app_state.toast {
        frame.render_widget(
            Paragraph::new(toast.text.as_str()).style(Style::default().fg(Color::Yellow)),
            layout[2],
        );
    }

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(layout[3]);

    render_weather_panes(frame, app_state, loading, body[0]);
    render_sidebar(frame, app_state, body[1]);
}

fn render_weather_panes<B: Backend>(
    frame: &mut Frame<'_, B>,
    app_state: &AppState,
    loading: &Loading,
    rect: Rect,
) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Max(2),
            Constraint::Max(11),
            Constraint::Max(5),
            Constraint::Min(1),
        ])
        .split(rect);

    if app_state.waiting_for_weather {
        loading.render(frame, layout[1]);
        return;
    }

    let Some(snapshot) = &app_state.snapshot else {
        frame.render_widget(
            Paragraph::new("Search for a city to see the weather. Type /help for commands.")
                .alignment(Alignment::Center),
            layout[1],
        );
        return;
    };

    if let Some(displayed) = &app_state.displayed {
        let mut title = dashboard::header_lines(
            &displayed.name,
            &displayed.country,
            Local::now().date_naive(),
        );
        if app_state.is_favorite(&displayed.name) {
            title[0] = format!("♥ {}", title[0]);
        }
        frame.render_widget(
            Paragraph::new(
                title
                    .into_iter()
                    .map(Line::from)
                    .collect::<Vec<Line<'_>>>(),
            ),
            layout[0],
        );
    }

    let border_color = scene_color(weather_code::background_for(
        snapshot.current.weather_code,
        snapshot.current.is_day == 1,
    ));

    let mut current = dashboard::current_lines(snapshot, app_state.unit)
        .into_iter()
        .map(Line::from)
        .collect::<Vec<Line<'_>>>();
    if let Some(last) = current.last_mut() {
        last.patch_style(Style::default().fg(aqi::color(snapshot.us_aqi)));
    }
    frame.render_widget(
        Paragraph::new(current).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(border_color))
                .title("Current"),
        ),
        layout[1],
    );

    let start_hour = Local::now().hour() as usize;
    frame.render_widget(
        Paragraph::new(dashboard::hourly_entries(&snapshot.hourly, start_hour).join("  |  "))
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("Next 24 hours")),
        layout[2],
    );

    frame.render_widget(
        Paragraph::new(
            dashboard::daily_entries(&snapshot.daily)
                .into_iter()
                .map(Line::from)
                .collect::<Vec<Line<'_>>>(),
        )
        .block(Block::default().borders(Borders::ALL).title("7 day outlook")),
        layout[3],
    );
}

fn render_sidebar<B: Backend>(frame: &mut Frame<'_, B>, app_state: &AppState, rect: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Max(1),
            Constraint::Percentage(50),
            Constraint::Min(1),
        ])
        .split(rect);

    if let Some(session) = &app_state.session {
        frame.render_widget(
            Paragraph::new(format!("Profile: {}", session.name)),
            layout[0],
        );
    }

    let mut favorites = app_state
        .favorites
        .iter()
        .map(|item| return ListItem::new(item.as_str()))
        .collect::<Vec<ListItem<'_>>>();
    if favorites.is_empty() {
        favorites = vec![ListItem::new("No favorites added yet.")
            .style(Style::default().fg(Color::DarkGray))];
    }
    frame.render_widget(
        List::new(favorites).block(Block::default().borders(Borders::ALL).title("Favorites")),
        layout[1],
    );

    let mut history = app_state
        .history
        .iter()
        .map(|item| return ListItem::new(item.as_str()))
        .collect::<Vec<ListItem<'_>>>();
    if history.is_empty() {
        history = vec![
            ListItem::new("No recent searches").style(Style::default().fg(Color::DarkGray))
        ];
    }
    frame.render_widget(
        List::new(history).block(Block::default().borders(Borders::ALL).title("History")),
        layout[2],
    );
}

async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: &mut AppState,
    tx: mpsc::UnboundedSender<Action>,
    events: &mut EventsService,
) -> Result<()> {
    let mut name_textarea = TextArea::login("Name");
    let mut contact_textarea = TextArea::login("Contact");
    let mut search_textarea = TextArea::search();
    let mut login_focus_on_name = true;
    let mut debouncer = Debouncer::new(tx.clone());
    let loading = Loading::default();

    focus_cursor(&mut name_textarea, true);
    focus_cursor(&mut contact_textarea, false);

    if let Some(action) = app_state.startup_action() {
        app_state.waiting_for_weather = true;
        tx.send(action)?;
    }

    loop {
        terminal.draw(|frame| {
            if app_state.screen == Screen::Login {
                render_login(frame, app_state, &name_textarea, &contact_textarea);
            } else {
                render_dashboard(frame, app_state, &search_textarea, &loading);
            }
        })?;

        match events.next().await? {
            Event::KeyboardCTRLC() => {
                break;
            }
            Event::UITick() => {
                app_state.tick();
            }
            Event::Notice(text) => {
                app_state.waiting_for_weather = false;
                app_state.notice(&text);
            }
            Event::Suggestions(candidates) => {
                if app_state.screen == Screen::Dashboard {
                    app_state.handle_suggestions(candidates);
                }
            }
            Event::SuggestionDown() => {
                app_state.suggestion_down();
            }
            Event::SuggestionUp() => {
                app_state.suggestion_up();
            }
            Event::WeatherReady(report) => {
                app_state.handle_weather_ready(report).await?;
            }
            Event::KeyboardTab() => {
                if app_state.screen == Screen::Login {
                    login_focus_on_name = !login_focus_on_name;
                    focus_cursor(&mut name_textarea, login_focus_on_name);
                    focus_cursor(&mut contact_textarea, !login_focus_on_name);
                }
            }
            Event::KeyboardEsc() => {
                debouncer.cancel();
                app_state.clear_suggestions();
            }
            Event::KeyboardPaste(text) => {
                if app_state.screen == Screen::Login {
                    if login_focus_on_name {
                        name_textarea.insert_str(&text);
                    } else {
                        contact_textarea.insert_str(&text);
                    }
                } else {
                    search_textarea.insert_str(&text);
                    let query = text_line(&search_textarea);
                    if query.chars().count() < 3 {
                        app_state.clear_suggestions();
                    }
                    debouncer.input_changed(&query);
                }
            }
            Event::KeyboardCharInput(input) => {
                if app_state.screen == Screen::Login {
                    if login_focus_on_name {
                        name_textarea.input(input);
                    } else {
                        contact_textarea.input(input);
                    }
                } else {
                    search_textarea.input(input);
                    let query = text_line(&search_textarea);
                    if query.chars().count() < 3 {
                        app_state.clear_suggestions();
                    }
                    debouncer.input_changed(&query);
                }
            }
            Event::KeyboardEnter() => {
                if app_state.screen == Screen::Login {
                    let action = app_state
                        .login(&text_line(&name_textarea), &text_line(&contact_textarea))
                        .await?;
                    if let Some(action) = action {
                        app_state.waiting_for_weather = true;
                        tx.send(action)?;
                    }
                    continue;
                }

                debouncer.cancel();

                if let Some(idx) = app_state.selected_suggestion {
                    let candidate = app_state.suggestions[idx].clone();
                    search_textarea = TextArea::search();
                    search_textarea.insert_str(&candidate.name);
                    app_state.clear_suggestions();
                    app_state.waiting_for_weather = true;
                    tx.send(Action::Search(candidate.name))?;
                    continue;
                }

                let input_str = text_line(&search_textarea);
                if input_str.is_empty() {
                    continue;
                }

                if let Some(command) = SlashCommand::parse(&input_str) {
                    search_textarea = TextArea::search();
                    if app_state.handle_slash_command(command, &tx).await? {
                        break;
                    }
                    continue;
                }

                app_state.clear_suggestions();
                app_state.waiting_for_weather = true;
                tx.send(Action::Search(input_str))?;
            }
        }
    }

    return Ok(());
}

pub fn destruct_terminal_for_panic() {
    disable_raw_mode().unwrap();
    crossterm::execute!(io::stdout(), LeaveAlternateScreen).unwrap();
    crossterm::execute!(io::stdout(), cursor::Show).unwrap();
}

pub async fn start(
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    enable_raw_mode()?;
    crossterm::execute!(stdout, EnterAlternateScreen)?;
    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;

    let mut app_state = AppState::new(Store::default()).await?;
    let mut events = EventsService::new(rx);

    start_loop(&mut terminal, &mut app_state, tx, &mut events).await?;

    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    return Ok(());
}
