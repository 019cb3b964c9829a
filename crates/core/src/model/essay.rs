use std::collections::BTreeSet;

use thiserror::Error;

use crate::model::content::{TextError, optional_text, require_text};
use crate::model::ids::EssayId;
use crate::model::reveal::StepReveal;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EssayReviewError {
    #[error("no essay is open")]
    NotViewing,

    #[error("reveal all versions before returning to the menu")]
    RevealIncomplete,

    #[error(transparent)]
    Text(#[from] TextError),
}

/// One of the three progressively detailed model answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EssayVersion {
    pub heading: &'static str,
    pub body: String,
}

const VERSION_HEADINGS: [&str; 3] = [
    "Version 1 (Student Draft Style)",
    "Version 2 (Mid-Level Answer)",
    "Version 3 (Full Answer with Reference)",
];

/// An essay topic with three model answers of increasing depth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Essay {
    id: EssayId,
    title: String,
    question: String,
    versions: [String; 3],
    reference: Option<String>,
}

impl Essay {
    /// # Errors
    ///
    /// Returns `EssayReviewError::Text` if the title, question or any version is blank.
    pub fn new(
        id: EssayId,
        title: impl Into<String>,
        question: impl Into<String>,
        versions: [String; 3],
        reference: Option<String>,
    ) -> Result<Self, EssayReviewError> {
        let [v1, v2, v3] = versions;
        Ok(Self {
            id,
            title: require_text("Title", title)?,
            question: require_text("Question", question)?,
            versions: [
                require_text("Version_1", v1)?,
                require_text("Version_2", v2)?,
                require_text("Version_3", v3)?,
            ],
            reference: optional_text(reference),
        })
    }

    #[must_use]
    pub fn id(&self) -> EssayId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn versions(&self) -> &[String; 3] {
        &self.versions
    }

    #[must_use]
    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    /// The three versions as a step reveal, draft first.
    #[must_use]
    pub fn reveal(&self) -> StepReveal<EssayVersion> {
        let steps = VERSION_HEADINGS
            .into_iter()
            .zip(self.versions.iter())
            .map(|(heading, body)| EssayVersion {
                heading,
                body: body.clone(),
            })
            .collect();
        StepReveal::new(steps)
    }
}

/// Screen the essay review is on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EssayReviewMode {
    Menu,
    Viewing {
        essay: Essay,
        reveal: StepReveal<EssayVersion>,
    },
}

/// Menu/view state machine for the essay review, plus which topics are done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EssayReview {
    mode: EssayReviewMode,
    reviewed: BTreeSet<EssayId>,
}

impl EssayReview {
    #[must_use]
    pub fn new() -> Self {
        Self {
            mode: EssayReviewMode::Menu,
            reviewed: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn mode(&self) -> &EssayReviewMode {
        &self.mode
    }

    #[must_use]
    pub fn is_reviewed(&self, id: EssayId) -> bool {
        self.reviewed.contains(&id)
    }

    #[must_use]
    pub fn reviewed_count(&self) -> usize {
        self.reviewed.len()
    }

    /// Open an essay at its first version. Replaces any essay already open.
    pub fn open(&mut self, essay: Essay) {
        let reveal = essay.reveal();
        self.mode = EssayReviewMode::Viewing { essay, reveal };
    }

    /// Reveal the next version of the open essay.
    ///
    /// # Errors
    ///
    /// Returns `EssayReviewError::NotViewing` on the menu.
    pub fn continue_reveal(&mut self) -> Result<usize, EssayReviewError> {
        match &mut self.mode {
            EssayReviewMode::Viewing { reveal, .. } => {
                reveal.advance();
                Ok(reveal.step())
            }
            EssayReviewMode::Menu => Err(EssayReviewError::NotViewing),
        }
    }

    /// Leave the open essay, marking it reviewed.
    ///
    /// # Errors
    ///
    /// Returns `EssayReviewError::NotViewing` on the menu, or
    /// `EssayReviewError::RevealIncomplete` before the last version is shown.
    pub fn return_to_menu(&mut self) -> Result<EssayId, EssayReviewError> {
        let id = match &self.mode {
            EssayReviewMode::Menu => return Err(EssayReviewError::NotViewing),
            EssayReviewMode::Viewing { reveal, .. } if !reveal.is_complete() => {
                return Err(EssayReviewError::RevealIncomplete);
            }
            EssayReviewMode::Viewing { essay, .. } => essay.id(),
        };
        self.reviewed.insert(id);
        self.mode = EssayReviewMode::Menu;
        Ok(id)
    }
}

impl Default for EssayReview {
    fn default() -> Self {
        Self::new()
    }
}
