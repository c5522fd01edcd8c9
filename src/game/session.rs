//! Session state machine.
//!
//! Screens only ever move forward: WELCOME → QUIZ → SHAKE → REDEEM. The
//! guards in [`Session::apply`] turn skipped or reversed transitions into
//! no-ops, so no caller can corrupt the flow.

use uuid::Uuid;

use crate::models::{ClaimOutcome, Gift, LogAction, UserLogEvent};

/// The screen currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Screen {
    Welcome,
    Quiz,
    Shake,
    Redeem,
}

/// Events that drive screen transitions.
#[derive(Debug)]
pub enum SessionEvent {
    /// The user pressed start on the welcome screen.
    Start,
    /// The quiz engine reported the streak target reached.
    StreakComplete,
    /// The shake finished and the claim resolved; carries the revealed gift
    /// and whatever the issuer said.
    GiftClaimed { gift: Gift, code: ClaimOutcome },
}

/// One user's visit, from welcome to ticket.
///
/// The user id is generated once and never changes; gift and code are each
/// set exactly once, on entering REDEEM.
#[derive(Debug)]
pub struct Session {
    user_id: String,
    screen: Screen,
    gift: Option<Gift>,
    code: Option<ClaimOutcome>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            user_id: format!("user-{}", Uuid::new_v4()),
            screen: Screen::Welcome,
            gift: None,
            code: None,
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn gift(&self) -> Option<&Gift> {
        self.gift.as_ref()
    }

    pub fn code(&self) -> Option<&ClaimOutcome> {
        self.code.as_ref()
    }

    /// Apply a transition event. Returns whether the session changed; an
    /// event arriving on the wrong screen changes nothing.
    pub fn apply(&mut self, event: SessionEvent) -> bool {
        match event {
            SessionEvent::Start => {
                if self.screen != Screen::Welcome {
                    return false;
                }
                self.screen = Screen::Quiz;
                true
            }
            SessionEvent::StreakComplete => {
                if self.screen != Screen::Quiz {
                    return false;
                }
                self.screen = Screen::Shake;
                true
            }
            SessionEvent::GiftClaimed { gift, code } => {
                if self.screen != Screen::Shake || self.gift.is_some() {
                    return false;
                }
                self.gift = Some(gift);
                self.code = Some(code);
                self.screen = Screen::Redeem;
                true
            }
        }
    }

    /// Build a log event tagged with this session's user id.
    pub fn log_event(&self, action: LogAction, details: Option<String>) -> UserLogEvent {
        UserLogEvent::new(self.user_id.clone(), action, details)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gift() -> Gift {
        Gift {
            id: "g1".to_string(),
            name: "Tote Bag".to_string(),
            image: String::new(),
            remaining_stock: 3,
            color: "red".to_string(),
        }
    }

    fn claimed() -> SessionEvent {
        SessionEvent::GiftClaimed {
            gift: gift(),
            code: ClaimOutcome::Issued("WIN-1234".to_string()),
        }
    }

    #[test]
    fn happy_path_walks_every_screen_once() {
        let mut session = Session::new();
        assert_eq!(session.screen(), Screen::Welcome);

        assert!(session.apply(SessionEvent::Start));
        assert_eq!(session.screen(), Screen::Quiz);

        assert!(session.apply(SessionEvent::StreakComplete));
        assert_eq!(session.screen(), Screen::Shake);

        assert!(session.apply(claimed()));
        assert_eq!(session.screen(), Screen::Redeem);
        assert_eq!(session.gift().unwrap().id, "g1");
        assert!(session.code().unwrap().is_issued());
    }

    #[test]
    fn transitions_cannot_be_skipped() {
        let mut session = Session::new();
        assert!(!session.apply(SessionEvent::StreakComplete));
        assert!(!session.apply(claimed()));
        assert_eq!(session.screen(), Screen::Welcome);
    }

    #[test]
    fn transitions_cannot_be_reversed_or_repeated() {
        let mut session = Session::new();
        session.apply(SessionEvent::Start);
        session.apply(SessionEvent::StreakComplete);
        session.apply(claimed());

        assert!(!session.apply(SessionEvent::Start));
        assert!(!session.apply(SessionEvent::StreakComplete));
        assert!(!session.apply(claimed()));
        assert_eq!(session.screen(), Screen::Redeem);
        assert_eq!(
            session.code().unwrap().display_token(),
            "WIN-1234",
            "the first claim outcome must stick"
        );
    }

    #[test]
    fn user_ids_differ_between_sessions() {
        let a = Session::new();
        let b = Session::new();
        assert_ne!(a.user_id(), b.user_id());
        assert!(a.user_id().starts_with("user-"));
    }

    #[test]
    fn log_events_carry_the_session_user_id() {
        let session = Session::new();
        let event = session.log_event(LogAction::Start, None);
        assert_eq!(event.user_id, session.user_id());
    }
}
