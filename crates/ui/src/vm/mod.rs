mod essay_vm;
mod history_vm;
mod markdown_vm;
mod quiz_vm;
mod time_fmt;

pub use essay_vm::{EssayPageVm, EssayTopicVm, EssayVersionVm, map_essay_topics, project_essay};
pub use history_vm::{HistoryRowVm, map_history_rows, status_label};
pub use markdown_vm::{markdown_to_html, sanitize_html};
pub use quiz_vm::{
    QuestionVm, QuizHeaderVm, QuizScreenVm, ResultStep, ResultsVm, WrongAnswerVm, project_quiz,
    results_reveal,
};
pub use time_fmt::{format_countdown, format_datetime};
