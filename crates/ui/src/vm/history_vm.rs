use study_core::model::{HistoryEntry, QuizStatus};

use crate::vm::time_fmt::format_datetime;

/// One row of the results table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryRowVm {
    pub date: String,
    pub score: String,
    pub status: &'static str,
}

impl From<&HistoryEntry> for HistoryRowVm {
    fn from(entry: &HistoryEntry) -> Self {
        Self {
            date: format_datetime(entry.completed_at()),
            score: entry.score_label(),
            status: status_label(entry.status()),
        }
    }
}

#[must_use]
pub fn status_label(status: QuizStatus) -> &'static str {
    match status {
        QuizStatus::Pass => "✅ Pass",
        QuizStatus::Fail => "❌ Fail",
    }
}

#[must_use]
pub fn map_history_rows(entries: &[HistoryEntry]) -> Vec<HistoryRowVm> {
    entries.iter().map(HistoryRowVm::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use study_core::model::SessionId;
    use study_core::time::fixed_now;

    #[test]
    fn rows_follow_history_order() {
        let entries = vec![
            HistoryEntry::new(SessionId::random(), fixed_now(), 15, 20, QuizStatus::Pass),
            HistoryEntry::new(SessionId::random(), fixed_now(), 9, 20, QuizStatus::Fail),
        ];

        let rows = map_history_rows(&entries);

        assert_eq!(rows[0].date, "2023-11-14 22:13");
        assert_eq!(rows[0].score, "15 / 20");
        assert_eq!(rows[0].status, "✅ Pass");
        assert_eq!(rows[1].score, "9 / 20");
        assert_eq!(rows[1].status, "❌ Fail");
    }
}
