use std::io::stdout;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};

use crate::{
    model::region::REGIONS,
    service::{config::ApiConfig, data_manager::DataManager},
    ui::{views::*, Controller, Query, RenderContext},
};

use super::ReplError;

enum AppState {
    Form,
    ViewingOutput(Box<dyn RenderableView>),
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum FormFocus {
    PlayerName,
    Region,
    ApiKey,
}

#[derive(Clone, Copy)]
enum ViewKind {
    Analysis,
    MatchHistory,
    Diagnostics,
}

struct App {
    config: ApiConfig,
    player_name: String,
    api_key_input: String,
    region_index: usize,
    focus: FormFocus,
    status: Option<String>,
    state: AppState,
    current_view: Option<ViewKind>,
    scroll_offset: u16,
    should_quit: bool,
}

impl App {
    fn new(config: ApiConfig) -> Self {
        Self {
            config,
            player_name: String::new(),
            api_key_input: String::new(),
            region_index: 0,
            focus: FormFocus::PlayerName,
            status: None,
            state: AppState::Form,
            current_view: None,
            scroll_offset: 0,
            should_quit: false,
        }
    }

    fn is_in_form(&self) -> bool {
        matches!(self.state, AppState::Form)
    }

    fn next_focus(&mut self) {
        self.focus = match self.focus {
            FormFocus::PlayerName => FormFocus::Region,
            FormFocus::Region => FormFocus::ApiKey,
            FormFocus::ApiKey => FormFocus::PlayerName,
        };
    }

    fn cycle_region(&mut self, forward: bool) {
        let len = REGIONS.len();
        self.region_index = if forward {
            (self.region_index + 1) % len
        } else {
            (self.region_index + len - 1) % len
        };
    }

    fn push_char(&mut self, c: char) {
        match self.focus {
            FormFocus::PlayerName => self.player_name.push(c),
            FormFocus::ApiKey => self.api_key_input.push(c),
            FormFocus::Region => {}
        }
    }

    fn pop_char(&mut self) {
        match self.focus {
            FormFocus::PlayerName => {
                self.player_name.pop();
            }
            FormFocus::ApiKey => {
                self.api_key_input.pop();
            }
            FormFocus::Region => {}
        }
    }

    /// Applies a pending key edit. Rejection keeps the prior key and only
    /// leaves a status message.
    fn apply_api_key(&mut self) {
        if self.api_key_input.is_empty() {
            return;
        }
        match self.config.set_api_key(&self.api_key_input) {
            Ok(()) => {
                self.api_key_input.clear();
                self.status = Some("API key updated".to_string());
            }
            Err(err) => {
                self.status = Some(format!("API key unchanged: {}", err));
                self.api_key_input.clear();
            }
        }
    }

    /// Builds the requested view. The manager is constructed per query from
    /// the current config and dropped afterwards; the view keeps only its
    /// rendered lines. The fetch blocks this thread, so a second query
    /// cannot start while one is running.
    fn open_view(&mut self, kind: ViewKind) {
        self.apply_api_key();

        if self.player_name.trim().is_empty() && !matches!(kind, ViewKind::Diagnostics) {
            self.status = Some("Enter a player name first".to_string());
            return;
        }

        let manager = match DataManager::new(&self.config) {
            Ok(manager) => manager,
            Err(err) => {
                self.status = Some(format!("{}", err));
                return;
            }
        };

        let query = Query {
            player_name: self.player_name.trim().to_string(),
            region: &REGIONS[self.region_index],
        };
        let ctrl = Controller {
            manager: &manager,
            config: &self.config,
            query: &query,
        };

        let view: Box<dyn RenderableView> = match kind {
            ViewKind::Analysis => Box::new(AnalysisView::new(&ctrl)),
            ViewKind::MatchHistory => Box::new(MatchHistoryView::new(&ctrl)),
            ViewKind::Diagnostics => Box::new(DiagnosticsView::new(&ctrl)),
        };

        self.state = AppState::ViewingOutput(view);
        self.current_view = Some(kind);
        self.scroll_offset = 0;
        self.status = None;
    }

    fn refresh_view(&mut self) {
        if let Some(kind) = self.current_view {
            self.open_view(kind);
        }
    }

    fn render_form(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(2),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        frame.render_widget(
            self.input_widget("Player Name", &self.input_display(FormFocus::PlayerName), FormFocus::PlayerName),
            chunks[0],
        );

        let region = &REGIONS[self.region_index];
        let region_text = format!("< {} ({}) >", region.name, region.code);
        frame.render_widget(self.input_widget("Region", &region_text, FormFocus::Region), chunks[1]);

        frame.render_widget(
            self.input_widget("API Key", &self.input_display(FormFocus::ApiKey), FormFocus::ApiKey),
            chunks[2],
        );

        if let Some(status) = &self.status {
            let status_widget = Paragraph::new(format!(" {}", status)).style(Style::default().fg(Color::Yellow));
            frame.render_widget(status_widget, chunks[3]);
        }

        let footer = Paragraph::new("Analyze: Enter    Diagnostics: F2    Match History: F3    Quit: Esc")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::NONE));
        frame.render_widget(footer, chunks[5]);
    }

    fn input_display(&self, field: FormFocus) -> String {
        let (value, focused) = match field {
            FormFocus::PlayerName => (self.player_name.clone(), self.focus == FormFocus::PlayerName),
            FormFocus::ApiKey => {
                let focused = self.focus == FormFocus::ApiKey;
                let value = if self.api_key_input.is_empty() && !focused {
                    redacted_key(&self.config)
                } else {
                    self.api_key_input.clone()
                };
                (value, focused)
            }
            FormFocus::Region => (String::new(), false),
        };

        if focused {
            format!("{}_", value)
        } else {
            value
        }
    }

    fn input_widget(&self, title: &'static str, text: &str, field: FormFocus) -> Paragraph<'static> {
        let border_color = if self.focus == field { Color::Cyan } else { Color::DarkGray };
        Paragraph::new(format!(" {}", text)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color))
                .title(title)
                .title_style(Style::default().fg(border_color).add_modifier(Modifier::BOLD)),
        )
    }

    fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<(), ReplError> {
        loop {
            terminal.draw(|f| {
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Length(3), Constraint::Min(0)])
                    .split(f.size());

                let title = Paragraph::new(" Analyze strengths and weaknesses of LoL players")
                    .style(Style::default().add_modifier(Modifier::BOLD))
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .border_style(Style::default().fg(Color::Cyan))
                            .title("RiftScout - Player Statistics")
                            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
                    );
                f.render_widget(title, chunks[0]);

                match &self.state {
                    AppState::Form => {
                        self.render_form(f, chunks[1]);
                    }
                    AppState::ViewingOutput(view) => {
                        let block = Block::default()
                            .borders(Borders::ALL)
                            .padding(ratatui::widgets::Padding::horizontal(1))
                            .title(format!(
                                "{} (↑/↓ or PgUp/PgDown to scroll, F5 to refresh, Esc/q to return)",
                                view.title()
                            ))
                            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                            .border_style(Style::default().fg(Color::Cyan));

                        let rc = RenderContext {
                            frame: f,
                            area: chunks[1],
                            scroll_offset: self.scroll_offset,
                            block,
                        };
                        let _ = view.render(rc);
                    }
                }
            })?;

            if event::poll(std::time::Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }

                    match key.code {
                        KeyCode::Esc if self.is_in_form() => {
                            self.should_quit = true;
                        }
                        KeyCode::Esc | KeyCode::Char('q') if !self.is_in_form() => {
                            self.state = AppState::Form;
                            self.scroll_offset = 0;
                        }
                        KeyCode::Enter if self.is_in_form() => self.open_view(ViewKind::Analysis),
                        KeyCode::F(2) if self.is_in_form() => self.open_view(ViewKind::Diagnostics),
                        KeyCode::F(3) if self.is_in_form() => self.open_view(ViewKind::MatchHistory),
                        KeyCode::F(5) => self.refresh_view(),
                        KeyCode::Tab if self.is_in_form() => self.next_focus(),
                        KeyCode::Left if self.is_in_form() && self.focus == FormFocus::Region => {
                            self.cycle_region(false)
                        }
                        KeyCode::Right if self.is_in_form() && self.focus == FormFocus::Region => {
                            self.cycle_region(true)
                        }
                        KeyCode::Backspace if self.is_in_form() => self.pop_char(),
                        KeyCode::Char(c) if self.is_in_form() => self.push_char(c),
                        KeyCode::Up if !self.is_in_form() => {
                            self.scroll_offset = self.scroll_offset.saturating_sub(1)
                        }
                        KeyCode::Down if !self.is_in_form() => {
                            self.scroll_offset = self.scroll_offset.saturating_add(1)
                        }
                        KeyCode::PageUp if !self.is_in_form() => {
                            self.scroll_offset = self.scroll_offset.saturating_sub(10)
                        }
                        KeyCode::PageDown if !self.is_in_form() => {
                            self.scroll_offset = self.scroll_offset.saturating_add(10)
                        }
                        _ => {}
                    }
                }
            }

            if self.should_quit {
                return Ok(());
            }
        }
    }
}

fn redacted_key(config: &ApiConfig) -> String {
    let key = config.api_key();
    if key.is_empty() {
        return "(not set)".to_string();
    }
    format!("{}...", key.get(..10).unwrap_or(key))
}

pub fn run(config: ApiConfig) -> Result<(), ReplError> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    let result = app.run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        eprintln!("Error: {}", err);
    }

    result
}
