use serde::Deserialize;
use std::borrow::Cow;
use study_core::model::{Essay, EssayId, OptionLetter, Question, QuestionId};

use crate::repository::StorageError;

/// One row of the question sheet.
#[derive(Debug, Deserialize)]
pub(crate) struct RawQuestion {
    question: String,
    option_a: String,
    option_b: String,
    option_c: String,
    correct_answer: String,
    #[serde(default)]
    reference: Option<String>,
}

/// One row of the essay sheet.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct RawEssay {
    title: String,
    question: String,
    #[serde(rename = "Version_1")]
    version_1: String,
    #[serde(rename = "Version_2")]
    version_2: String,
    #[serde(rename = "Version_3")]
    version_3: String,
    #[serde(default)]
    reference: Option<String>,
}

fn malformed<E: core::fmt::Display>(row: usize) -> impl FnOnce(E) -> StorageError {
    move |e| StorageError::Malformed {
        row,
        reason: e.to_string(),
    }
}

fn row_id(row: usize) -> u64 {
    u64::try_from(row).unwrap_or(u64::MAX)
}

impl RawQuestion {
    /// `row` is the 0-based data row and becomes the question identity.
    pub(crate) fn into_question(self, row: usize) -> Result<Question, StorageError> {
        let correct: OptionLetter = self.correct_answer.parse().map_err(malformed(row))?;
        Question::new(
            QuestionId::new(row_id(row)),
            self.question,
            [self.option_a, self.option_b, self.option_c],
            correct,
            self.reference,
        )
        .map_err(malformed(row))
    }
}

impl RawEssay {
    pub(crate) fn into_essay(self, row: usize) -> Result<Essay, StorageError> {
        Essay::new(
            EssayId::new(row_id(row)),
            self.title,
            self.question,
            [self.version_1, self.version_2, self.version_3],
            self.reference,
        )
        .map_err(malformed(row))
    }
}

/// UTF-8 when valid, otherwise each byte is read as a Latin-1 code point.
pub(crate) fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => Cow::Owned(bytes.iter().map(|&b| char::from(b)).collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latin1_bytes_are_decoded() {
        let bytes = b"Caf\xe9 \xb0C";
        assert_eq!(decode_text(bytes), "Café °C");
        assert!(matches!(decode_text("plain".as_bytes()), Cow::Borrowed("plain")));
    }

    #[test]
    fn unknown_letter_reports_row() {
        let raw = RawQuestion {
            question: "Q".into(),
            option_a: "a".into(),
            option_b: "b".into(),
            option_c: "c".into(),
            correct_answer: "d".into(),
            reference: None,
        };
        let err = raw.into_question(4).unwrap_err();
        assert!(matches!(err, StorageError::Malformed { row: 4, .. }));
    }
}
