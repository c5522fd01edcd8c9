mod claim;
mod gift;
mod log;
mod question;

pub use claim::ClaimOutcome;
pub use gift::Gift;
pub use log::{LogAction, UserLogEvent};
pub use question::Question;
