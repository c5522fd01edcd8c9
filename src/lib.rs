//! # gift-quiz
//!
//! A terminal promotional mini-game: answer five quiz questions in a row,
//! shake the gift box open, and show the staff the redemption code the
//! issuer hands back.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use gift_quiz::{Game, GameConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), gift_quiz::GameError> {
//!     // No endpoint configured: runs offline with bundled data.
//!     let game = Game::load(GameConfig::default()).await?;
//!     game.run().await
//! }
//! ```

mod app;
mod client;
mod data;
mod game;
mod models;
mod protocol;
pub mod terminal;
mod ui;

use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub use app::{App, FEEDBACK_DELAY};
pub use client::SheetClient;
pub use data::{load_gifts_from_json, load_questions_from_json, LoadError};
pub use game::{
    pick_gift, AnswerOutcome, Feedback, QuizEngine, Screen, Session, SessionEvent, ShakeMeter,
    STREAK_TARGET,
};
pub use models::{ClaimOutcome, Gift, LogAction, Question, UserLogEvent};

/// How long the event loop waits for a key before ticking.
const TICK_RATE: Duration = Duration::from_millis(50);

/// Error type for game operations.
#[derive(Debug)]
pub enum GameError {
    /// Error loading or validating game data.
    Load(LoadError),
    /// IO error during game execution.
    Io(io::Error),
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::Load(e) => write!(f, "Failed to load game data: {}", e),
            GameError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Load(e) => Some(e),
            GameError::Io(e) => Some(e),
        }
    }
}

impl From<LoadError> for GameError {
    fn from(err: LoadError) -> Self {
        GameError::Load(err)
    }
}

impl From<io::Error> for GameError {
    fn from(err: io::Error) -> Self {
        GameError::Io(err)
    }
}

/// Where the game gets its data.
#[derive(Debug, Clone, Default)]
pub struct GameConfig {
    /// Issuer endpoint URL. `None` runs offline with bundled data.
    pub base_url: Option<String>,
    /// Local question file; overrides the endpoint and fails loudly.
    pub questions_path: Option<PathBuf>,
    /// Local gift inventory file; overrides the endpoint and fails loudly.
    pub gifts_path: Option<PathBuf>,
}

/// A loaded game ready to run in the terminal.
pub struct Game {
    app: App,
}

impl Game {
    /// Fetch questions and gifts (concurrently when remote), shuffle, and
    /// build the session.
    ///
    /// Remote failures degrade to bundled fixtures; a broken local file is
    /// an operator mistake and aborts startup instead.
    pub async fn load(config: GameConfig) -> Result<Self, GameError> {
        let client = SheetClient::new(config.base_url);
        let mut rng = StdRng::from_os_rng();

        let (questions, gifts) = futures_util::future::join(
            load_question_set(&client, config.questions_path.as_deref()),
            load_gift_set(&client, config.gifts_path.as_deref()),
        )
        .await;
        let mut questions = questions?;
        let gifts = gifts?;

        data::shuffle_questions(&mut questions, &mut rng);
        let engine = QuizEngine::new(questions)?;

        Ok(Self {
            app: App::new(client, engine, gifts, rng),
        })
    }

    /// Take over the terminal and run until the user quits.
    pub async fn run(mut self) -> Result<(), GameError> {
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app).await;
        terminal::restore()?;
        result
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

async fn load_question_set(
    client: &SheetClient,
    path: Option<&Path>,
) -> Result<Vec<Question>, LoadError> {
    match path {
        Some(path) => load_questions_from_json(path),
        None => Ok(client.fetch_questions().await),
    }
}

async fn load_gift_set(client: &SheetClient, path: Option<&Path>) -> Result<Vec<Gift>, LoadError> {
    match path {
        Some(path) => load_gifts_from_json(path),
        None => Ok(client.fetch_gifts().await),
    }
}

async fn run_event_loop(
    terminal: &mut terminal::GameTerminal,
    app: &mut App,
) -> Result<(), GameError> {
    loop {
        app.tick();
        terminal.draw(|frame| ui::render(frame, app))?;

        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                if handle_input(app, key.code) {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    match app.screen() {
        Screen::Welcome => handle_welcome_input(app, key),
        Screen::Quiz => handle_quiz_input(app, key),
        Screen::Shake => handle_shake_input(app, key),
        Screen::Redeem => handle_redeem_input(app, key),
    }
}

fn handle_welcome_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Enter => {
            app.start();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> bool {
    if app.engine().feedback() == Some(Feedback::Wrong) {
        return match key {
            KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => {
                app.retry();
                false
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => true,
            _ => false,
        };
    }

    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.select_previous_option();
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.select_next_option();
            false
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.submit_current();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_shake_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char(' ') | KeyCode::Enter => {
            app.shake_impulse();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_redeem_input(_app: &mut App, key: KeyCode) -> bool {
    matches!(
        key,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    )
}
