use model::execution::errors::{RetrievalError, SubmissionError};
use thiserror::Error;

/// Terminal failure of a run. Per-operation failures inside a batch are not
/// errors; they are accounted in the run report.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("page retrieval failed: {0}")]
    Retrieval(#[from] RetrievalError),

    #[error("batch submission failed: {0}")]
    Submission(#[from] SubmissionError),

    /// Shutdown was requested between pages. The cursor is not persisted;
    /// the next invocation starts from the beginning.
    #[error("run cancelled before completion")]
    Cancelled,
}
