//! Application state: one user's run through the game.
//!
//! `App` owns the session, the quiz engine, the shake meter and the gift
//! snapshot. All mutation happens on the event loop thread; network
//! completions come back over an mpsc channel and are drained each tick.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use tokio::sync::mpsc;

use crate::client::SheetClient;
use crate::game::{
    pick_gift, AnswerOutcome, Feedback, QuizEngine, Screen, Session, SessionEvent, ShakeMeter,
    KEY_IMPULSE,
};
use crate::models::{ClaimOutcome, Gift, LogAction};

/// How long correct-answer feedback stays on screen before the next
/// question. Presentation only; the advance itself is deterministic.
pub const FEEDBACK_DELAY: Duration = Duration::from_millis(1200);

pub struct App {
    session: Session,
    engine: QuizEngine,
    shake: ShakeMeter,
    gifts: Vec<Gift>,
    client: SheetClient,
    rng: StdRng,

    selected_option: usize,
    feedback_deadline: Option<Instant>,
    revealed_gift: Option<Gift>,
    claim_pending: bool,
    out_of_stock: bool,

    claim_tx: mpsc::UnboundedSender<ClaimOutcome>,
    claim_rx: mpsc::UnboundedReceiver<ClaimOutcome>,
}

impl App {
    /// Build the app and record the session start.
    pub fn new(client: SheetClient, engine: QuizEngine, gifts: Vec<Gift>, rng: StdRng) -> Self {
        let session = Session::new();
        let (claim_tx, claim_rx) = mpsc::unbounded_channel();

        let app = Self {
            session,
            engine,
            shake: ShakeMeter::new(),
            gifts,
            client,
            rng,
            selected_option: 0,
            feedback_deadline: None,
            revealed_gift: None,
            claim_pending: false,
            out_of_stock: false,
            claim_tx,
            claim_rx,
        };
        app.log(LogAction::Start, None);
        app
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn screen(&self) -> Screen {
        self.session.screen()
    }

    pub fn engine(&self) -> &QuizEngine {
        &self.engine
    }

    pub fn gifts(&self) -> &[Gift] {
        &self.gifts
    }

    pub fn selected_option(&self) -> usize {
        self.selected_option
    }

    pub fn shake_percent(&self) -> u32 {
        self.shake.percent()
    }

    pub fn is_claim_pending(&self) -> bool {
        self.claim_pending
    }

    pub fn is_out_of_stock(&self) -> bool {
        self.out_of_stock
    }

    /// Advance wall-clock driven state and drain finished network calls.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    pub(crate) fn tick_at(&mut self, now: Instant) {
        if let Some(deadline) = self.feedback_deadline {
            if now >= deadline {
                self.feedback_deadline = None;
                self.engine.advance();
                self.selected_option = 0;
            }
        }

        if let Ok(outcome) = self.claim_rx.try_recv() {
            self.finish_claim(outcome);
        }
    }

    /// WELCOME → QUIZ.
    pub fn start(&mut self) {
        self.session.apply(SessionEvent::Start);
    }

    pub fn select_next_option(&mut self) {
        if self.engine.feedback().is_some() || self.engine.is_won() {
            return;
        }
        let n = self.engine.current_question().options.len();
        self.selected_option = (self.selected_option + 1) % n;
    }

    pub fn select_previous_option(&mut self) {
        if self.engine.feedback().is_some() || self.engine.is_won() {
            return;
        }
        let n = self.engine.current_question().options.len();
        self.selected_option = (self.selected_option + n - 1) % n;
    }

    /// Submit the highlighted option for the current question.
    pub fn submit_current(&mut self) {
        if self.session.screen() != Screen::Quiz {
            return;
        }

        let question = self.engine.current_question();
        let Some(option) = question.options.get(self.selected_option).cloned() else {
            return;
        };
        let question_id = question.id.clone();
        let correct_answer = question.correct_answer.clone();

        match self.engine.submit(&option) {
            Some(AnswerOutcome::Won) => {
                self.log(
                    LogAction::AnswerCorrect,
                    Some(format!("QID:{}", question_id)),
                );
                if self.session.apply(SessionEvent::StreakComplete) {
                    self.log(LogAction::WinGame, Some("Streak 5 reached".to_string()));
                }
            }
            Some(AnswerOutcome::Correct) => {
                self.log(
                    LogAction::AnswerCorrect,
                    Some(format!("QID:{}", question_id)),
                );
                self.feedback_deadline = Some(Instant::now() + FEEDBACK_DELAY);
            }
            Some(AnswerOutcome::Wrong) => {
                self.log(
                    LogAction::AnswerWrong,
                    Some(format!(
                        "QID:{} | Answered:{} | Correct:{}",
                        question_id, option, correct_answer
                    )),
                );
            }
            None => {}
        }
    }

    /// Acknowledge a wrong answer and jump to another question.
    pub fn retry(&mut self) {
        if self.engine.feedback() != Some(Feedback::Wrong) {
            return;
        }
        self.engine.retry(&mut self.rng);
        self.selected_option = 0;
    }

    /// One shake impulse. On the threshold crossing, draw a gift and
    /// dispatch the claim.
    pub fn shake_impulse(&mut self) {
        if self.session.screen() != Screen::Shake || self.claim_pending || self.out_of_stock {
            return;
        }
        if self.shake.feed(KEY_IMPULSE) {
            self.complete_shake();
        }
    }

    fn complete_shake(&mut self) {
        match pick_gift(&self.gifts, &mut self.rng) {
            Some(gift) => {
                let gift = gift.clone();
                self.revealed_gift = Some(gift.clone());
                self.claim_pending = true;

                let client = self.client.clone();
                let user_id = self.session.user_id().to_string();
                let tx = self.claim_tx.clone();
                tokio::spawn(async move {
                    let outcome = client.claim_code(&gift.id, &user_id).await;
                    let _ = tx.send(outcome);
                });
            }
            None => {
                self.out_of_stock = true;
            }
        }
    }

    fn finish_claim(&mut self, outcome: ClaimOutcome) {
        self.claim_pending = false;
        let Some(gift) = self.revealed_gift.clone() else {
            return;
        };

        let detail = format!("GiftID:{} | Code:{}", gift.id, outcome.display_token());
        if self.session.apply(SessionEvent::GiftClaimed {
            gift,
            code: outcome,
        }) {
            self.log(LogAction::RedeemGift, Some(detail));
        }
    }

    fn log(&self, action: LogAction, details: Option<String>) {
        self.client.log_event(self.session.log_event(action, details));
    }
}
