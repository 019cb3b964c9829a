/// MIME type of the Word documents shipped as study guides.
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// A downloadable study-guide document with a short summary of its advice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuideDocument {
    title: String,
    file_name: String,
    mime: &'static str,
    summary_heading: String,
    summary: Vec<String>,
}

impl GuideDocument {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        file_name: impl Into<String>,
        summary_heading: impl Into<String>,
        summary: Vec<String>,
    ) -> Self {
        Self {
            title: title.into(),
            file_name: file_name.into(),
            mime: DOCX_MIME,
            summary_heading: summary_heading.into(),
            summary,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// File name inside the guides directory, also used for the saved copy.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    #[must_use]
    pub fn mime(&self) -> &'static str {
        self.mime
    }

    #[must_use]
    pub fn summary_heading(&self) -> &str {
        &self.summary_heading
    }

    #[must_use]
    pub fn summary(&self) -> &[String] {
        &self.summary
    }
}

fn points(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// The essay-exam guidance documents offered on the study guide page.
#[must_use]
pub fn study_guide() -> Vec<GuideDocument> {
    vec![
        GuideDocument::new(
            "GCAA Module 10 Essay Exam Guidance",
            "GCAA Module 10 Essay Exam guidance.docx",
            "Summary of Key Guidance",
            points(&[
                "Answer the question that was asked, not what you wish was asked.",
                "Structure your essay like an engineer: Introduction, bullet point body, conclusion.",
                "Always cite the regulation (e.g. CAR M.901, CAR 145.55).",
                "Write like a certifying staff member, not a student.",
                "Understand and explain. Don't just remember.",
            ]),
        ),
        GuideDocument::new(
            "Writing a GCAA Module 10 Essay",
            "Writing a GCAA Module 10 Essay.docx",
            "Summary of Writing Advice",
            points(&[
                "You have 20 minutes total for 2 essays.",
                "Use your time: 30s to understand the question, 1m to plan, 8m to write, 30s to check.",
                "Include what, who, when, and under what regulation.",
                "Write clearly, use technical language, and avoid guessing.",
            ]),
        ),
    ]
}
