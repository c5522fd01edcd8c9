use serde::Serialize;

/// Action kinds recorded against the issuer's log sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogAction {
    Start,
    AnswerCorrect,
    AnswerWrong,
    WinGame,
    RedeemGift,
}

/// A write-only user activity record.
///
/// Sent fire-and-forget; never read back. The timestamp is local diagnostics
/// only; the wire format carries just the action, user id and details.
#[derive(Debug, Clone)]
pub struct UserLogEvent {
    pub user_id: String,
    pub timestamp: String,
    pub action: LogAction,
    pub details: Option<String>,
}

impl UserLogEvent {
    pub fn new(user_id: String, action: LogAction, details: Option<String>) -> Self {
        Self {
            user_id,
            timestamp: chrono::Utc::now().to_rfc3339(),
            action,
            details,
        }
    }
}
