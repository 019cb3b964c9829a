use services::EssayTopic;
use study_core::model::{EssayId, EssayReview, EssayReviewMode};

use crate::vm::markdown_vm::markdown_to_html;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EssayTopicVm {
    pub id: EssayId,
    pub label: String,
}

impl From<&EssayTopic> for EssayTopicVm {
    fn from(topic: &EssayTopic) -> Self {
        let label = if topic.reviewed {
            format!("✅ {}", topic.title)
        } else {
            topic.title.clone()
        };
        Self { id: topic.id, label }
    }
}

#[must_use]
pub fn map_essay_topics(topics: &[EssayTopic]) -> Vec<EssayTopicVm> {
    topics.iter().map(EssayTopicVm::from).collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EssayVersionVm {
    pub heading: String,
    pub body_html: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EssayPageVm {
    pub question: String,
    pub versions: Vec<EssayVersionVm>,
    /// Label of the button uncovering the next version, if any remain.
    pub continue_label: Option<String>,
    pub reference: Option<String>,
    pub can_return: bool,
}

/// The open essay, or `None` while the menu is showing.
#[must_use]
pub fn project_essay(review: &EssayReview) -> Option<EssayPageVm> {
    let EssayReviewMode::Viewing { essay, reveal } = review.mode() else {
        return None;
    };

    let versions = reveal
        .visible()
        .iter()
        .enumerate()
        .map(|(idx, version)| {
            let marker = if idx + 1 == reveal.total() { "✅" } else { "✏️" };
            EssayVersionVm {
                heading: format!("{marker} {}", version.heading),
                body_html: markdown_to_html(&version.body),
            }
        })
        .collect();

    let complete = reveal.is_complete();
    Some(EssayPageVm {
        question: format!("✍️ {}", essay.question()),
        versions,
        continue_label: (!complete).then(|| format!("➡️ Continue to Version {}", reveal.step() + 1)),
        reference: complete.then(|| essay.reference().map(str::to_owned)).flatten(),
        can_return: complete,
    })
}
