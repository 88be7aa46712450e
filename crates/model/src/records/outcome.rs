use bson::oid::ObjectId;
use serde::Serialize;

/// Reduction of one submitted batch: totals across every update operation,
/// plus the operations the server rejected individually.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchOutcome {
    /// Operations whose filter matched at least one target document,
    /// summed over the batch.
    pub matched: u64,
    /// Target documents actually changed, summed over the batch.
    pub modified: u64,
    /// Per-operation failures, ordered by operation index. A non-empty list
    /// does not make the batch an error: the remaining operations were
    /// still executed.
    pub failures: Vec<FailureDetail>,
}

/// One update operation the server rejected inside an otherwise-submitted
/// batch.
#[derive(Debug, Clone, Serialize)]
pub struct FailureDetail {
    /// Position of the operation within the batch, which is also the
    /// position of the source record within its page.
    pub operation_index: usize,
    /// `_id` of the source record the operation was built from, when the
    /// index maps back into the page.
    pub source_id: Option<ObjectId>,
    /// Server error code, if one was reported.
    pub code: Option<i32>,
    pub message: String,
}

impl BatchOutcome {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_without_failures_is_clean() {
        let outcome = BatchOutcome {
            matched: 4,
            modified: 3,
            failures: vec![],
        };
        assert!(!outcome.has_failures());
    }

    #[test]
    fn outcome_with_failures_is_flagged() {
        let outcome = BatchOutcome {
            matched: 1,
            modified: 1,
            failures: vec![FailureDetail {
                operation_index: 2,
                source_id: Some(ObjectId::new()),
                code: Some(11000),
                message: "duplicate key".into(),
            }],
        };
        assert!(outcome.has_failures());
    }
}
