//! Letter-guessing game engine
//!
//! Session state, scoring, and target word selection. No I/O happens here; the
//! interactive loop lives in `commands::play`.

mod picker;
mod session;

pub use picker::{RandomPicker, WordPicker};
pub use session::{EXIT_SIGNAL, GameConfig, GuessOutcome, Round, Session, SessionState};
