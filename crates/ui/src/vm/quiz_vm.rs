use chrono::Duration;
use study_core::model::{QuizSession, QuizSettings, QuizStep, StepReveal, TerminalReason};

use crate::vm::time_fmt::format_countdown;

/// Notes shown above every quiz screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizHeaderVm {
    pub timer_label: String,
    pub time_note: String,
    pub pass_note: String,
}

impl QuizHeaderVm {
    /// `total` is the length of the session on screen, which may be below the sample size.
    #[must_use]
    pub fn new(settings: &QuizSettings, total: u32, remaining: Duration) -> Self {
        let minutes = settings.time_limit_secs() / 60;
        Self {
            timer_label: format!("⏳ Time Remaining: {}", format_countdown(remaining)),
            time_note: format!(
                "🕒 Note: You have {minutes} minutes only to complete this MCQ exam"
            ),
            pass_note: format!(
                "✅ Pass Mark: You must score at least {}% ({} out of {total}) to pass this exam",
                settings.pass_mark_percent(),
                settings.pass_score(total),
            ),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    /// Cursor position; used to guard against a second submission.
    pub cursor: usize,
    pub heading: String,
    pub options: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WrongAnswerVm {
    pub heading: String,
    pub selected: String,
    pub correct: String,
    pub reference: String,
}

/// Sections of the results screen, uncovered one at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResultStep {
    Score,
    WrongAnswers,
}

#[must_use]
pub fn results_reveal() -> StepReveal<ResultStep> {
    StepReveal::new(vec![ResultStep::Score, ResultStep::WrongAnswers])
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub expired: bool,
    pub passed: bool,
    pub score_line: String,
    pub wrong: Vec<WrongAnswerVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizScreenVm {
    Question(QuestionVm),
    Results(ResultsVm),
}

/// Project the session at `step` into what the quiz page shows.
#[must_use]
pub fn project_quiz(session: &QuizSession, step: QuizStep<'_>) -> QuizScreenVm {
    match step {
        QuizStep::Question { index, question } => QuizScreenVm::Question(QuestionVm {
            cursor: index,
            heading: format!("Q{}: {}", index + 1, question.text()),
            options: question.options().to_vec(),
        }),
        QuizStep::Terminal(reason) => QuizScreenVm::Results(project_results(session, reason)),
    }
}

fn project_results(session: &QuizSession, reason: TerminalReason) -> ResultsVm {
    let wrong = session
        .wrong_answers()
        .map(|record| WrongAnswerVm {
            heading: format!("Q{}: {}", record.position() + 1, record.question()),
            selected: record.selected().to_owned(),
            correct: record.correct().to_owned(),
            reference: record.reference().to_owned(),
        })
        .collect();

    ResultsVm {
        expired: reason == TerminalReason::Expired,
        passed: session.status().is_pass(),
        score_line: format!("🎉 You scored {} out of {}", session.score(), session.len()),
        wrong,
    }
}
