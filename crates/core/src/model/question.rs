use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::content::{TextError, optional_text, require_text};
use crate::model::ids::QuestionId;

/// Shown wherever a question carries no reference citation.
pub const REFERENCE_NOT_AVAILABLE: &str = "N/A";

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("correct answer must be one of a, b or c, got {0:?}")]
    InvalidLetter(String),

    #[error(transparent)]
    Text(#[from] TextError),
}

//
// ─── OPTION LETTER ─────────────────────────────────────────────────────────────
//

/// One of the three answer slots of a multiple-choice question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionLetter {
    A,
    B,
    C,
}

impl OptionLetter {
    pub const ALL: [OptionLetter; 3] = [OptionLetter::A, OptionLetter::B, OptionLetter::C];

    #[must_use]
    pub fn index(self) -> usize {
        match self {
            OptionLetter::A => 0,
            OptionLetter::B => 1,
            OptionLetter::C => 2,
        }
    }
}

impl FromStr for OptionLetter {
    type Err = QuestionError;

    /// Accepts `a`, `b` or `c` in any case, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" => Ok(Self::A),
            "b" => Ok(Self::B),
            "c" => Ok(Self::C),
            _ => Err(QuestionError::InvalidLetter(s.to_string())),
        }
    }
}

impl fmt::Display for OptionLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            OptionLetter::A => "A",
            OptionLetter::B => "B",
            OptionLetter::C => "C",
        };
        f.write_str(letter)
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A multiple-choice question with three options and one correct letter.
///
/// Immutable once built; sessions hold their own copies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    text: String,
    options: [String; 3],
    correct: OptionLetter,
    reference: Option<String>,
}

impl Question {
    /// Build a validated question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::Text` if the question text or any option is blank.
    pub fn new(
        id: QuestionId,
        text: impl Into<String>,
        options: [String; 3],
        correct: OptionLetter,
        reference: Option<String>,
    ) -> Result<Self, QuestionError> {
        let text = require_text("question", text)?;
        let [a, b, c] = options;
        let options = [
            require_text("option_a", a)?,
            require_text("option_b", b)?,
            require_text("option_c", c)?,
        ];

        Ok(Self {
            id,
            text,
            options,
            correct,
            reference: optional_text(reference),
        })
    }

    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn options(&self) -> &[String; 3] {
        &self.options
    }

    #[must_use]
    pub fn option(&self, letter: OptionLetter) -> &str {
        &self.options[letter.index()]
    }

    #[must_use]
    pub fn correct_letter(&self) -> OptionLetter {
        self.correct
    }

    /// Text of the correct option.
    #[must_use]
    pub fn correct_text(&self) -> &str {
        self.option(self.correct)
    }

    /// Reference citation, or `"N/A"` when the source had none.
    #[must_use]
    pub fn reference(&self) -> &str {
        self.reference.as_deref().unwrap_or(REFERENCE_NOT_AVAILABLE)
    }

    /// Letter of the option whose text matches `selected` exactly.
    #[must_use]
    pub fn letter_of(&self, selected: &str) -> Option<OptionLetter> {
        OptionLetter::ALL
            .into_iter()
            .find(|letter| self.option(*letter) == selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts() -> [String; 3] {
        ["Rivet".into(), "Bolt".into(), "Screw".into()]
    }

    #[test]
    fn letter_parsing_trims_and_ignores_case() {
        assert_eq!(" B ".parse::<OptionLetter>().unwrap(), OptionLetter::B);
        assert_eq!("c\n".parse::<OptionLetter>().unwrap(), OptionLetter::C);
        let err = "d".parse::<OptionLetter>().unwrap_err();
        assert!(matches!(err, QuestionError::InvalidLetter(raw) if raw == "d"));
    }

    #[test]
    fn correct_letter_resolves_to_option_text() {
        let q = Question::new(QuestionId::new(0), "Which?", opts(), OptionLetter::B, None).unwrap();
        assert_eq!(q.correct_text(), "Bolt");
        assert_eq!(q.letter_of("Screw"), Some(OptionLetter::C));
        assert_eq!(q.letter_of("screw"), None);
    }

    #[test]
    fn missing_reference_uses_sentinel() {
        let q = Question::new(
            QuestionId::new(1),
            "Which?",
            opts(),
            OptionLetter::A,
            Some("  ".into()),
        )
        .unwrap();
        assert_eq!(q.reference(), REFERENCE_NOT_AVAILABLE);
    }

    #[test]
    fn blank_option_is_rejected() {
        let err = Question::new(
            QuestionId::new(2),
            "Which?",
            ["Rivet".into(), String::new(), "Screw".into()],
            OptionLetter::A,
            None,
        )
        .unwrap_err();
        assert_eq!(err, QuestionError::Text(TextError::Empty { field: "option_b" }));
    }
}
