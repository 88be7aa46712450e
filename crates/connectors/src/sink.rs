use async_trait::async_trait;
use model::{
    execution::errors::SubmissionError,
    records::{account::SourceAccount, outcome::BatchOutcome},
};

/// Applies one page of source records to the target collection as a single
/// non-atomic batch.
#[async_trait]
pub trait BatchSink: Send + Sync {
    /// Submits one update per record and reduces the per-operation results.
    /// Individual operation failures land in the outcome, not in `Err`;
    /// only a failure of the submission as a whole is an error.
    async fn apply(&self, records: &[SourceAccount]) -> Result<BatchOutcome, SubmissionError>;
}
