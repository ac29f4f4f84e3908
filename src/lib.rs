// Library surface for headless/integration tests and reuse.
// The terminal front end lives in main.rs and ui.rs.
pub mod app_dirs;
pub mod config;
pub mod game;
pub mod logging;
pub mod random;
pub mod runtime;
pub mod session;
pub mod words;

pub use game::{Game, GameError, GameEvent, GameState, GuessOutcome, PassOutcome, Rules};
pub use session::Session;
pub use words::{WordEntry, WordList, WordPool};
