mod fixtures;
mod loader;

pub use fixtures::{fixture_gifts, fixture_questions};
pub use loader::{
    load_gifts_from_json, load_questions_from_json, shuffle_questions, validate_questions,
    LoadError,
};
