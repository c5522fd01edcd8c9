//! Bundled fallback data.
//!
//! Used when no issuer endpoint is configured and whenever a remote fetch
//! fails or returns something unusable, so the booth keeps running.

use crate::models::{Gift, Question};

fn question(id: &str, text: &str, options: &[&str], correct: &str) -> Question {
    Question {
        id: id.to_string(),
        text: text.to_string(),
        options: options.iter().map(|s| s.to_string()).collect(),
        correct_answer: correct.to_string(),
    }
}

/// Built-in question set mirroring the remote sheet's shape.
pub fn fixture_questions() -> Vec<Question> {
    vec![
        question(
            "q-1",
            "What is the first thing to do when you spot a workplace hazard?",
            &[
                "Report it to a supervisor",
                "Ignore it",
                "Fix it yourself",
                "Post a photo online",
            ],
            "Report it to a supervisor",
        ),
        question(
            "q-2",
            "Which of these is a core principle of occupational safety?",
            &[
                "Prevention over cure",
                "Handle accidents after they happen",
                "Ignore minor risks",
                "Efficiency above all",
            ],
            "Prevention over cure",
        ),
        question(
            "q-3",
            "How far should your eyes be from a computer screen?",
            &[
                "35-60 centimetres",
                "10-20 centimetres",
                "Over 100 centimetres",
                "As close as possible",
            ],
            "35-60 centimetres",
        ),
        question(
            "q-4",
            "What helps relieve fatigue after long hours at a desk?",
            &[
                "Gentle stretching",
                "Working through it",
                "Sugary drinks",
                "Shouting loudly",
            ],
            "Gentle stretching",
        ),
        question(
            "q-5",
            "When lifting a heavy box, you should bend at the",
            &["Knees", "Waist", "Neck", "Elbows"],
            "Knees",
        ),
    ]
}

/// Built-in gift inventory mirroring the remote sheet's shape.
pub fn fixture_gifts() -> Vec<Gift> {
    vec![
        Gift {
            id: "g1".to_string(),
            name: "Reusable Tote Bag".to_string(),
            image: String::new(),
            remaining_stock: 50,
            color: "red".to_string(),
        },
        Gift {
            id: "g2".to_string(),
            name: "Water Bottle".to_string(),
            image: String::new(),
            remaining_stock: 30,
            color: "blue".to_string(),
        },
        Gift {
            id: "g3".to_string(),
            name: "USB Desk Fan".to_string(),
            image: String::new(),
            remaining_stock: 20,
            color: "yellow".to_string(),
        },
        Gift {
            id: "g4".to_string(),
            name: "Supermarket Voucher".to_string(),
            image: String::new(),
            remaining_stock: 5,
            color: "green".to_string(),
        },
    ]
}
