//! Logical core of the game: session flow, quiz streaks, the weighted gift
//! draw and the shake accumulator. Nothing in here renders or does IO.

mod engine;
mod selector;
mod session;
mod shake;

pub use engine::{AnswerOutcome, Feedback, QuizEngine, STREAK_TARGET};
pub use selector::pick_gift;
pub use session::{Screen, Session, SessionEvent};
pub use shake::{ShakeMeter, KEY_IMPULSE, SHAKE_THRESHOLD};
