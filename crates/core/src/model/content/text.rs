use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TextError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },
}

/// Validates that a required text field carries something other than whitespace.
///
/// The original text is returned untouched; only emptiness is checked.
pub fn require_text(field: &'static str, value: impl Into<String>) -> Result<String, TextError> {
    let value = value.into();
    if value.trim().is_empty() {
        return Err(TextError::Empty { field });
    }
    Ok(value)
}

/// Normalizes an optional text field: blank becomes `None`.
#[must_use]
pub fn optional_text(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_required_text_is_rejected() {
        let err = require_text("question", "   ").unwrap_err();
        assert_eq!(err, TextError::Empty { field: "question" });
    }

    #[test]
    fn required_text_is_kept_verbatim() {
        assert_eq!(require_text("title", " Tools ").unwrap(), " Tools ");
    }

    #[test]
    fn blank_optional_text_collapses_to_none() {
        assert_eq!(optional_text(Some(" \t".into())), None);
        assert_eq!(optional_text(Some("CAR M.901".into())), Some("CAR M.901".into()));
    }
}
