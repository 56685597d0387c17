//! TUI application state and logic

use crate::config::GameConfig;
use crate::core::Code;
use crate::core::candidates::{CODE_SPACE, count_consistent};
use crate::game::{Session, SessionState, Turn};
use crate::output::{Tone, turn_lines};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::num::NonZeroUsize;
use tracing::debug;

/// Application state
pub struct App {
    pub session: Session,
    pub max_attempts: NonZeroUsize,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub candidates_count: usize,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub tone: Tone,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub attempts_in_wins: usize,
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }

    /// Mean valid guesses per won game
    #[must_use]
    pub fn average_attempts(&self) -> Option<f64> {
        (self.games_won > 0).then(|| self.attempts_in_wins as f64 / self.games_won as f64)
    }
}

impl App {
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            session: config.session(),
            max_attempts: config.max_attempts,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: crate::output::formatters::BANNER.to_string(),
                    tone: Tone::Info,
                },
                Message {
                    text: "Type 4 distinct digits from 0-8 and press Enter.".to_string(),
                    tone: Tone::Info,
                },
            ],
            stats: Statistics::default(),
            candidates_count: CODE_SPACE,
            should_quit: false,
        }
    }

    /// Append a digit to the guess being typed
    pub fn push_digit(&mut self, c: char) {
        if !self.session.is_finished()
            && c.is_ascii_digit()
            && self.input_buffer.chars().count() < crate::core::CODE_LENGTH
        {
            self.input_buffer.push(c);
        }
    }

    /// Submit the typed guess
    pub fn submit_input(&mut self) {
        let line = std::mem::take(&mut self.input_buffer);
        self.submit(Some(&line));
    }

    /// Signal end of input to the session
    pub fn end_input(&mut self) {
        self.input_buffer.clear();
        self.submit(None);
    }

    fn submit(&mut self, line: Option<&str>) {
        match self.session.submit(line) {
            Ok(turn) => self.handle_turn(&turn),
            Err(err) => self.add_message(&err.to_string(), Tone::Failure),
        }
    }

    fn handle_turn(&mut self, turn: &Turn) {
        for (tone, text) in turn_lines(turn) {
            if !text.is_empty() {
                self.add_message(&text, tone);
            }
        }

        if !matches!(turn, Turn::Rejected(_)) {
            self.candidates_count = count_consistent(self.session.history());
        }

        match self.session.state() {
            SessionState::AwaitingGuess => {}
            SessionState::Won => {
                self.stats.total_games += 1;
                self.stats.games_won += 1;
                self.stats.attempts_in_wins += self.session.valid_attempts();
                self.add_message("Press 'n' for new game or 'q' to quit.", Tone::Info);
            }
            SessionState::AttemptsExhausted | SessionState::InputTerminated => {
                self.stats.total_games += 1;
                self.add_message("Press 'n' for new game or 'q' to quit.", Tone::Info);
            }
        }
    }

    /// Start over with a fresh random code and the same budget
    ///
    /// Ignored while a game is still in progress.
    pub fn new_game(&mut self) {
        if !self.session.is_finished() {
            return;
        }
        self.new_game_with(Code::generate());
    }

    pub(crate) fn new_game_with(&mut self, code: Code) {
        self.session = Session::new(code, self.max_attempts);
        self.input_buffer.clear();
        self.messages.clear();
        self.candidates_count = CODE_SPACE;
        debug!("New game started");
        self.add_message("New game started! A fresh code is hidden.", Tone::Info);
    }

    pub fn add_message(&mut self, text: &str, tone: Tone) {
        self.messages.push(Message {
            text: text.to_string(),
            tone,
        });

        // Keep only last 6 messages
        if self.messages.len() > 6 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
            match key.code {
                KeyCode::Char('c') if ctrl => app.should_quit = true,
                KeyCode::Char('d') if ctrl => {
                    if !app.session.is_finished() {
                        app.end_input();
                    }
                }
                KeyCode::Esc | KeyCode::Char('q') => app.should_quit = true,
                KeyCode::Char('n') => app.new_game(),
                KeyCode::Char(c) => app.push_digit(c),
                KeyCode::Backspace => {
                    app.input_buffer.pop();
                }
                KeyCode::Enter => {
                    if !app.session.is_finished() {
                        app.submit_input();
                    }
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
