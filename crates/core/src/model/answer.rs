use crate::model::ids::QuestionId;
use crate::model::question::Question;

/// Record of one answered question, written once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    position: usize,
    question_id: QuestionId,
    question: String,
    selected: String,
    correct: String,
    reference: String,
}

impl AnswerRecord {
    /// `position` is the 0-based index of the question within its session.
    #[must_use]
    pub fn new(position: usize, question: &Question, selected: impl Into<String>) -> Self {
        Self {
            position,
            question_id: question.id(),
            question: question.text().to_owned(),
            selected: selected.into(),
            correct: question.correct_text().to_owned(),
            reference: question.reference().to_owned(),
        }
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn question_id(&self) -> QuestionId {
        self.question_id
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn selected(&self) -> &str {
        &self.selected
    }

    #[must_use]
    pub fn correct(&self) -> &str {
        &self.correct
    }

    #[must_use]
    pub fn reference(&self) -> &str {
        &self.reference
    }

    /// Exact string comparison between the chosen and the correct option.
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.selected == self.correct
    }
}
