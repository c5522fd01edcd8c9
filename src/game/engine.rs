//! Quiz engine: streak counting over a wrapping question sequence.

use rand::Rng;

use crate::data::LoadError;
use crate::models::Question;

/// Consecutive correct answers needed to win.
pub const STREAK_TARGET: u32 = 5;

/// What a submitted answer did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Streak advanced; the next question appears after the feedback delay.
    Correct,
    /// Streak target reached; the engine accepts no further answers.
    Won,
    /// Wrong; the question stays on screen until the caller retries.
    Wrong,
}

/// Feedback currently held on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    Wrong,
}

/// Drives one round of the streak quiz.
///
/// The question cursor wraps, so the sequence never exhausts. While feedback
/// is pending the engine ignores further submissions, which makes a double
/// submit a no-op.
pub struct QuizEngine {
    questions: Vec<Question>,
    cursor: usize,
    streak: u32,
    feedback: Option<Feedback>,
    won: bool,
}

impl QuizEngine {
    /// Build an engine over a non-empty question list.
    pub fn new(questions: Vec<Question>) -> Result<Self, LoadError> {
        if questions.is_empty() {
            return Err(LoadError::NoQuestions);
        }
        Ok(Self {
            questions,
            cursor: 0,
            streak: 0,
            feedback: None,
            won: false,
        })
    }

    pub fn current_question(&self) -> &Question {
        &self.questions[self.cursor % self.questions.len()]
    }

    pub fn current_index(&self) -> usize {
        self.cursor % self.questions.len()
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    /// Submit an answer for the current question.
    ///
    /// Returns `None` when the submission was ignored: feedback is still on
    /// screen, or the round is already won.
    pub fn submit(&mut self, answer: &str) -> Option<AnswerOutcome> {
        if self.won || self.feedback.is_some() {
            return None;
        }

        if answer == self.current_question().correct_answer {
            self.streak += 1;
            if self.streak >= STREAK_TARGET {
                self.won = true;
                Some(AnswerOutcome::Won)
            } else {
                self.feedback = Some(Feedback::Correct);
                Some(AnswerOutcome::Correct)
            }
        } else {
            self.feedback = Some(Feedback::Wrong);
            Some(AnswerOutcome::Wrong)
        }
    }

    /// Apply the deferred advance once the correct-answer feedback delay has
    /// elapsed. The advance itself is deterministic; only its timing is a
    /// presentation concern.
    pub fn advance(&mut self) {
        if self.feedback == Some(Feedback::Correct) {
            self.cursor += 1;
            self.feedback = None;
        }
    }

    /// Recover from a wrong answer: streak back to zero and the cursor jumps
    /// 1..=5 questions forward so the same question doesn't come straight
    /// back. Only valid while wrong-answer feedback is showing.
    pub fn retry<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.feedback != Some(Feedback::Wrong) {
            return;
        }
        self.streak = 0;
        self.feedback = None;

        let len = self.questions.len();
        let mut jump = rng.random_range(1..=5);
        if len > 1 && jump % len == 0 {
            jump += 1;
        }
        self.cursor += jump;
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn question(id: &str, correct: &str) -> Question {
        Question {
            id: id.to_string(),
            text: format!("prompt {}", id),
            options: vec![correct.to_string(), "other".to_string()],
            correct_answer: correct.to_string(),
        }
    }

    fn deck(n: usize) -> Vec<Question> {
        (0..n).map(|i| question(&format!("q{}", i), "yes")).collect()
    }

    #[test]
    fn empty_deck_is_rejected() {
        assert!(matches!(
            QuizEngine::new(Vec::new()),
            Err(LoadError::NoQuestions)
        ));
    }

    #[test]
    fn five_straight_correct_answers_win() {
        let mut engine = QuizEngine::new(deck(3)).unwrap();

        for round in 0..4u32 {
            assert_eq!(engine.submit("yes"), Some(AnswerOutcome::Correct));
            assert_eq!(engine.streak(), round + 1);
            engine.advance();
        }
        assert_eq!(engine.submit("yes"), Some(AnswerOutcome::Won));
        assert_eq!(engine.streak(), 5);
        assert!(engine.is_won());
    }

    #[test]
    fn won_engine_ignores_further_input() {
        let mut engine = QuizEngine::new(deck(1)).unwrap();
        for _ in 0..4 {
            engine.submit("yes");
            engine.advance();
        }
        assert_eq!(engine.submit("yes"), Some(AnswerOutcome::Won));
        assert_eq!(engine.submit("yes"), None);
        assert_eq!(engine.streak(), 5);
    }

    #[test]
    fn cursor_wraps_past_the_end() {
        let mut engine = QuizEngine::new(deck(2)).unwrap();
        engine.submit("yes");
        engine.advance();
        engine.submit("yes");
        engine.advance();
        assert_eq!(engine.current_index(), 0);
        assert_eq!(engine.current_question().id, "q0");
    }

    #[test]
    fn wrong_answer_keeps_question_and_streak() {
        let mut engine = QuizEngine::new(deck(4)).unwrap();
        engine.submit("yes");
        engine.advance();
        assert_eq!(engine.streak(), 1);

        let before = engine.current_index();
        assert_eq!(engine.submit("no"), Some(AnswerOutcome::Wrong));
        assert_eq!(engine.current_index(), before);
        assert_eq!(engine.streak(), 1, "streak only resets on retry");
        assert_eq!(engine.feedback(), Some(Feedback::Wrong));
    }

    #[test]
    fn retry_resets_streak_and_moves_to_another_question() {
        let mut rng = StdRng::seed_from_u64(11);
        for seed in 0..20u64 {
            let mut engine = QuizEngine::new(deck(4)).unwrap();
            engine.submit("no");
            let before = engine.current_index();

            let mut seeded = StdRng::seed_from_u64(seed);
            engine.retry(&mut seeded);
            assert_eq!(engine.streak(), 0);
            assert_eq!(engine.feedback(), None);
            assert_ne!(
                engine.current_index(),
                before,
                "retry must not land on the same question (seed {})",
                seed
            );
        }
        // And a deck whose length divides the maximum jump.
        let mut engine = QuizEngine::new(deck(5)).unwrap();
        engine.submit("no");
        let before = engine.current_index();
        engine.retry(&mut rng);
        assert_ne!(engine.current_index(), before);
    }

    #[test]
    fn double_submit_is_ignored_while_feedback_pending() {
        let mut engine = QuizEngine::new(deck(3)).unwrap();
        assert_eq!(engine.submit("yes"), Some(AnswerOutcome::Correct));
        assert_eq!(engine.submit("yes"), None);
        assert_eq!(engine.submit("no"), None);
        assert_eq!(engine.streak(), 1);

        engine.advance();
        assert_eq!(engine.submit("yes"), Some(AnswerOutcome::Correct));
        assert_eq!(engine.streak(), 2);
    }

    #[test]
    fn retry_without_wrong_feedback_is_a_noop() {
        let mut engine = QuizEngine::new(deck(3)).unwrap();
        engine.submit("yes");
        let mut rng = StdRng::seed_from_u64(1);
        engine.retry(&mut rng);
        assert_eq!(engine.streak(), 1);
        assert_eq!(engine.feedback(), Some(Feedback::Correct));
    }
}
