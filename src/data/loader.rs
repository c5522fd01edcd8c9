use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{Gift, Question};

/// Error loading or validating game data.
///
/// Integrity problems are caught here, at the load boundary, so the quiz can
/// refuse to start instead of failing mid-round.
#[derive(Debug)]
pub enum LoadError {
    /// File could not be read.
    Io(io::Error),
    /// Contents were not valid JSON for the expected shape.
    Parse(serde_json::Error),
    /// The question set was empty.
    NoQuestions,
    /// A question's correct answer is not among its own options.
    BadQuestion { id: String },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "failed to read data file: {}", e),
            LoadError::Parse(e) => write!(f, "failed to parse data file: {}", e),
            LoadError::NoQuestions => write!(f, "the question set is empty"),
            LoadError::BadQuestion { id } => {
                write!(f, "question {} has no matching option for its answer", id)
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        LoadError::Io(err)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Parse(err)
    }
}

/// Load and validate a question set from a JSON file.
pub fn load_questions_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Question>, LoadError> {
    let text = fs::read_to_string(path)?;
    let questions: Vec<Question> = serde_json::from_str(&text)?;
    validate_questions(&questions)?;
    Ok(questions)
}

/// Load a gift inventory from a JSON file.
pub fn load_gifts_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Gift>, LoadError> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Reject question sets the quiz cannot run on.
pub fn validate_questions(questions: &[Question]) -> Result<(), LoadError> {
    if questions.is_empty() {
        return Err(LoadError::NoQuestions);
    }
    for question in questions {
        if !question.is_well_formed() {
            return Err(LoadError::BadQuestion {
                id: question.id.clone(),
            });
        }
    }
    Ok(())
}

/// Shuffle question order and each question's option order.
pub fn shuffle_questions<R: Rng + ?Sized>(questions: &mut [Question], rng: &mut R) {
    questions.shuffle(rng);
    for question in questions.iter_mut() {
        question.options.shuffle(rng);
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn question(id: &str, options: &[&str], correct: &str) -> Question {
        Question {
            id: id.to_string(),
            text: format!("prompt {}", id),
            options: options.iter().map(|s| s.to_string()).collect(),
            correct_answer: correct.to_string(),
        }
    }

    #[test]
    fn empty_set_is_rejected() {
        assert!(matches!(
            validate_questions(&[]),
            Err(LoadError::NoQuestions)
        ));
    }

    #[test]
    fn answer_missing_from_options_is_rejected() {
        let questions = vec![question("q1", &["A", "B"], "C")];
        assert!(matches!(
            validate_questions(&questions),
            Err(LoadError::BadQuestion { .. })
        ));
    }

    #[test]
    fn valid_set_passes() {
        let questions = vec![
            question("q1", &["A", "B"], "A"),
            question("q2", &["X", "Y", "Z"], "Z"),
        ];
        assert!(validate_questions(&questions).is_ok());
    }

    #[test]
    fn shuffle_preserves_contents() {
        let mut questions = vec![
            question("q1", &["A", "B", "C"], "A"),
            question("q2", &["D", "E"], "E"),
            question("q3", &["F", "G"], "F"),
        ];
        let mut rng = StdRng::seed_from_u64(42);
        shuffle_questions(&mut questions, &mut rng);

        let mut ids: Vec<&str> = questions.iter().map(|q| q.id.as_str()).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec!["q1", "q2", "q3"]);

        for q in &questions {
            assert!(q.is_well_formed());
        }
    }
}
