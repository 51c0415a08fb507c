//! Question note value object

use serde::{Deserialize, Serialize};

/// Text shown when no question is set
pub const NO_QUESTION_PLACEHOLDER: &str = "No question set";

/// The question the current draw is answering, e.g. "Who presents first?"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionNote {
    text: Option<String>,
}

impl QuestionNote {
    /// Create a note from raw input; blank input means "no question"
    pub fn new(text: &str) -> Self {
        let mut note = Self::default();
        note.set(text);
        note
    }

    /// Replace the question with trimmed `text`, returning the stored value
    pub fn set(&mut self, text: &str) -> Option<&str> {
        let trimmed = text.trim();
        self.text = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self.text()
    }

    pub fn clear(&mut self) {
        self.text = None;
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn is_set(&self) -> bool {
        self.text.is_some()
    }

    /// Text to display: the question or the placeholder
    pub fn display(&self) -> &str {
        self.text().unwrap_or(NO_QUESTION_PLACEHOLDER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_trims() {
        let mut note = QuestionNote::default();
        assert_eq!(note.set("  Who goes first?  "), Some("Who goes first?"));
        assert_eq!(note.display(), "Who goes first?");
    }

    #[test]
    fn test_blank_means_unset() {
        let note = QuestionNote::new("   ");
        assert!(!note.is_set());
        assert_eq!(note.display(), NO_QUESTION_PLACEHOLDER);
    }

    #[test]
    fn test_clear() {
        let mut note = QuestionNote::new("Lunch?");
        note.clear();
        assert_eq!(note.text(), None);
    }
}
