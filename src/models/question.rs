use serde::Deserialize;

/// A single quiz question. Immutable once loaded.
///
/// Option order matters for rendering; the correct answer is identified by
/// string equality against one of the options.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    #[serde(rename = "questionText")]
    pub text: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

impl Question {
    /// Whether the correct answer is actually one of the options.
    pub fn is_well_formed(&self) -> bool {
        self.options.iter().any(|opt| opt == &self.correct_answer)
    }
}
