use crate::{pagination::cursor::Cursor, records::outcome::BatchOutcome};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Totals accumulated over a whole run, folded page by page.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub started_at: DateTime<Utc>,
    /// Pages fetched, the final empty one included.
    pub pages: u64,
    /// Source records read.
    pub records: u64,
    pub matched: u64,
    pub modified: u64,
    /// Update operations the server rejected individually.
    pub failed_operations: u64,
    /// Cursor after the last non-empty page, `start` if none was fetched.
    pub last_cursor: Cursor,
}

impl RunReport {
    pub fn new(started_at: DateTime<Utc>) -> Self {
        RunReport {
            started_at,
            pages: 0,
            records: 0,
            matched: 0,
            modified: 0,
            failed_operations: 0,
            last_cursor: Cursor::Start,
        }
    }

    /// Folds one applied batch into the totals.
    pub fn absorb(&mut self, records_in_page: usize, outcome: &BatchOutcome) {
        self.records += records_in_page as u64;
        self.matched += outcome.matched;
        self.modified += outcome.modified;
        self.failed_operations += outcome.failures.len() as u64;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::outcome::FailureDetail;

    #[test]
    fn absorb_accumulates_counts() {
        let mut report = RunReport::new(Utc::now());
        report.absorb(
            2,
            &BatchOutcome {
                matched: 3,
                modified: 2,
                failures: vec![],
            },
        );
        report.absorb(
            1,
            &BatchOutcome {
                matched: 0,
                modified: 0,
                failures: vec![FailureDetail {
                    operation_index: 0,
                    source_id: None,
                    code: None,
                    message: "boom".into(),
                }],
            },
        );

        assert_eq!(report.records, 3);
        assert_eq!(report.matched, 3);
        assert_eq!(report.modified, 2);
        assert_eq!(report.failed_operations, 1);
    }
}
