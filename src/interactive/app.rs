//! TUI application state and event loop

use crate::core::{GamePhase, GameState, MAX_ATTEMPTS};
use crate::wordlists::{LoadError, WordLists};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use ratatui::{Terminal, backend::CrosstermBackend};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::time::{Duration, Instant};

/// How long a rejected-guess notice stays on screen
const NOTICE_TTL: Duration = Duration::from_millis(600);

/// Redraw cadence while waiting for input, so expired notices disappear
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// A short user-facing message
///
/// Transient notices (rejected guesses) carry an expiry and clear themselves;
/// end-of-round notices persist until the next round starts.
#[derive(Debug, Clone)]
pub struct Notice {
    pub text: String,
    pub style: NoticeStyle,
    expires_at: Option<Instant>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub guess_distribution: [usize; 7],
}

/// Application state
pub struct App {
    lists: Option<WordLists>,
    game: GameState,
    rng: StdRng,
    notice: Option<Notice>,
    pub stats: Statistics,
    pub should_quit: bool,
}

impl App {
    /// Build the app from the startup load result
    ///
    /// On success the first round starts immediately; on failure the game
    /// enters its terminal `Failed` phase with the load error as the
    /// user-visible message.
    #[must_use]
    pub fn new(lists: Result<WordLists, LoadError>, rng: StdRng) -> Self {
        let mut app = Self {
            lists: None,
            game: GameState::loading(),
            rng,
            notice: None,
            stats: Statistics::default(),
            should_quit: false,
        };

        match lists {
            Ok(lists) => {
                app.lists = Some(lists);
                app.new_game();
            }
            Err(err) => {
                app.game.fail(err.to_string());
            }
        }

        app
    }

    #[inline]
    #[must_use]
    pub const fn game(&self) -> &GameState {
        &self.game
    }

    #[inline]
    #[must_use]
    pub const fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Start a new round using the already-loaded answers (no re-load)
    pub fn new_game(&mut self) {
        if let Some(lists) = &self.lists {
            let target = lists.pick_target(&mut self.rng);
            self.game.start(target);
            self.notice = None;
            debug!("new round started, attempt 1/{MAX_ATTEMPTS}");
        }
    }

    /// Drop the notice once its expiry has passed
    pub fn tick(&mut self) {
        if let Some(notice) = &self.notice
            && let Some(expires_at) = notice.expires_at
            && Instant::now() >= expires_at
        {
            self.notice = None;
        }
    }

    fn set_notice(&mut self, text: impl Into<String>, style: NoticeStyle, ttl: Option<Duration>) {
        self.notice = Some(Notice {
            text: text.into(),
            style,
            expires_at: ttl.map(|ttl| Instant::now() + ttl),
        });
    }

    fn submit_guess(&mut self) {
        let Some(lists) = &self.lists else { return };

        match self.game.submit(lists.valid_guesses()) {
            Ok(_) => match self.game.phase() {
                GamePhase::Won => {
                    let attempts = self.game.records().len();
                    self.stats.total_games += 1;
                    self.stats.games_won += 1;
                    if attempts < self.stats.guess_distribution.len() {
                        self.stats.guess_distribution[attempts] += 1;
                    }

                    let praise = match attempts {
                        1 => "Genius!",
                        2 => "Magnificent!",
                        3 => "Impressive!",
                        4 => "Splendid!",
                        5 => "Great!",
                        _ => "Phew!",
                    };
                    self.set_notice(
                        format!("{praise} Got it in {attempts}/{MAX_ATTEMPTS}."),
                        NoticeStyle::Success,
                        None,
                    );
                }
                GamePhase::Lost => {
                    self.stats.total_games += 1;
                    let target = self
                        .game
                        .target()
                        .map_or_else(String::new, |w| w.text().to_string());
                    self.set_notice(
                        format!("Out of guesses. The word was {target}."),
                        NoticeStyle::Error,
                        None,
                    );
                }
                _ => self.notice = None,
            },
            Err(err) => {
                // Recoverable rejection: shake cue, auto-cleared shortly after
                self.set_notice(err.to_string(), NoticeStyle::Error, Some(NOTICE_TTL));
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        // Ctrl-C quits in every phase
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.game.phase() {
            GamePhase::Playing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) => self.game.push_letter(c),
                KeyCode::Backspace => self.game.delete_letter(),
                KeyCode::Enter => self.submit_guess(),
                _ => {}
            },
            GamePhase::Won | GamePhase::Lost => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') | KeyCode::Enter => self.new_game(),
                _ => {}
            },
            // Loading never reaches the event loop; Failed only quits
            GamePhase::Loading | GamePhase::Failed(_) => match key.code {
                KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter => self.should_quit = true,
                _ => {}
            },
        }
    }

    /// Emoji share grid for the finished round
    #[must_use]
    pub fn share_grid(&self) -> String {
        self.game
            .records()
            .iter()
            .map(crate::core::GuessRecord::emoji)
            .collect::<Vec<_>>()
            .join("\n")
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
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        app.tick();
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                app.handle_key(key);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
