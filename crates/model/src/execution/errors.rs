use crate::pagination::cursor::Cursor;
use thiserror::Error;

type BoxedError = Box<dyn std::error::Error + Send + Sync>;

/// A page fetch against the source collection failed. Fatal to the run once
/// the retry policy is exhausted.
#[derive(Debug, Error)]
pub enum RetrievalError {
    /// The fetch failed in transit (network, timeout, server selection).
    /// Retryable.
    #[error("fetch from '{collection}' failed at cursor {cursor}: {source}")]
    Transport {
        collection: String,
        cursor: Cursor,
        #[source]
        source: BoxedError,
    },

    /// The server rejected the query or a document failed to decode.
    /// Retrying would fail the same way.
    #[error("query against '{collection}' failed at cursor {cursor}: {source}")]
    Query {
        collection: String,
        cursor: Cursor,
        #[source]
        source: BoxedError,
    },
}

/// The batch submission against the target collection failed as a whole.
/// Individual operation failures are not errors; they are carried in the
/// batch outcome instead.
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// The submission failed in transit. Retryable; the batch may or may
    /// not have been applied, which `$set` updates tolerate.
    #[error("bulk update against '{collection}' failed in transit: {source}")]
    Transport {
        collection: String,
        #[source]
        source: BoxedError,
    },

    /// The server rejected the batch outright (authorization, malformed
    /// command). Retrying would fail the same way.
    #[error("bulk update against '{collection}' was rejected: {source}")]
    Rejected {
        collection: String,
        #[source]
        source: BoxedError,
    },
}

impl RetrievalError {
    pub fn is_transient(&self) -> bool {
        matches!(self, RetrievalError::Transport { .. })
    }

    pub fn cursor(&self) -> Cursor {
        match self {
            RetrievalError::Transport { cursor, .. } | RetrievalError::Query { cursor, .. } => {
                *cursor
            }
        }
    }
}

impl SubmissionError {
    pub fn is_transient(&self) -> bool {
        matches!(self, SubmissionError::Transport { .. })
    }
}
