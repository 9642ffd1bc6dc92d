//! Single-game state machine
//!
//! A [`Game`] owns one round: the hidden target, the ordered guess history and
//! the terminal state. It never touches timers or other sessions.
//!
//! ```text
//! InProgress ──win──▶ Won
//!     │ ▲
//!     │ └── continue / duplicate / illegal / wrong length
//!     └──────loss──▶ Lost
//! ```

mod board;
mod engine;
mod hint;
mod outcome;

pub use board::{Board, Cell};
pub use engine::{Game, GameState};
pub use hint::{HINT_PLACEHOLDER, Hint};
pub use outcome::{GuessOutcome, Reveal, Summary};
