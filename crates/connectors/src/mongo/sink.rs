use crate::{error::is_transient, sink::BatchSink};
use async_trait::async_trait;
use model::{
    execution::errors::SubmissionError,
    records::{
        account::SourceAccount,
        outcome::{BatchOutcome, FailureDetail},
    },
};
use mongodb::{
    Client, Namespace,
    bson::{Document, doc},
    error::{BulkWriteError, ErrorKind, PartialBulkWriteResult},
    options::{UpdateManyModel, WriteModel},
};
use tracing::warn;

/// Applies account pages to the target collection with one unordered bulk
/// write per page.
///
/// One update-many per source record, filtered on the foreign key. Pages
/// arrive in ascending `_id` order and operations run in record order, so
/// when several account documents share an `account_id` the newest one
/// (highest `_id`) provides the final embedded value.
pub struct TransactionSink {
    client: Client,
    namespace: Namespace,
}

impl TransactionSink {
    pub fn new(client: Client, namespace: Namespace) -> Self {
        TransactionSink { client, namespace }
    }

    pub fn for_collection(client: &Client, database: &str, collection: &str) -> Self {
        let namespace = client
            .database(database)
            .collection::<Document>(collection)
            .namespace();
        Self::new(client.clone(), namespace)
    }

    fn update_model(&self, record: &SourceAccount) -> WriteModel {
        let (filter, update) = update_spec(record);
        WriteModel::UpdateMany(
            UpdateManyModel::builder()
                .namespace(self.namespace.clone())
                .filter(filter)
                .update(update)
                .build(),
        )
    }

    fn submission_error(&self, err: mongodb::error::Error) -> SubmissionError {
        let collection = self.namespace.coll.clone();
        if is_transient(&err) {
            SubmissionError::Transport {
                collection,
                source: Box::new(err),
            }
        } else {
            SubmissionError::Rejected {
                collection,
                source: Box::new(err),
            }
        }
    }
}

#[async_trait]
impl BatchSink for TransactionSink {
    async fn apply(&self, records: &[SourceAccount]) -> Result<BatchOutcome, SubmissionError> {
        if records.is_empty() {
            return Ok(BatchOutcome::default());
        }

        let models: Vec<WriteModel> = records.iter().map(|rec| self.update_model(rec)).collect();

        // The driver defaults to ordered execution, which stops at the first
        // failed operation. This job wants the rest of the page applied, so
        // unordered is set explicitly.
        match self.client.bulk_write(models).ordered(false).await {
            Ok(summary) => Ok(BatchOutcome {
                matched: summary.matched_count as u64,
                modified: summary.modified_count as u64,
                failures: Vec::new(),
            }),
            // A bulk-write error still carries the executed part of the
            // batch; anything else failed the submission as a whole.
            Err(err) if matches!(err.kind.as_ref(), ErrorKind::BulkWrite(_)) => {
                let ErrorKind::BulkWrite(bulk_err) = *err.kind else {
                    unreachable!()
                };
                Ok(reduce_partial_failure(bulk_err, records, &self.namespace.coll))
            }
            Err(err) => Err(self.submission_error(err)),
        }
    }
}

/// Filter and update documents for one source record: match every target
/// document carrying the record's foreign key, replace the embedded field
/// wholesale.
pub fn update_spec(record: &SourceAccount) -> (Document, Document) {
    (
        doc! { "account_id": record.account_id },
        doc! { "$set": { "account": record.embedded_doc() } },
    )
}

/// Reduces a bulk-write error that still executed operations: counts from
/// the partial result, one `FailureDetail` per rejected operation.
fn reduce_partial_failure(
    err: BulkWriteError,
    records: &[SourceAccount],
    collection: &str,
) -> BatchOutcome {
    for wc_err in &err.write_concern_errors {
        warn!(collection, error = ?wc_err, "write concern error on bulk update");
    }

    // Verbose results are never requested, so the partial result is the
    // summary shape.
    let (matched, modified) = match &err.partial_result {
        Some(PartialBulkWriteResult::Summary(summary)) => {
            (summary.matched_count as u64, summary.modified_count as u64)
        }
        _ => (0, 0),
    };

    let failures = collect_failures(
        err.write_errors
            .into_iter()
            .map(|(index, write_err)| (index, Some(write_err.code), write_err.message)),
        records,
    );

    BatchOutcome {
        matched,
        modified,
        failures,
    }
}

/// Maps per-operation errors back onto the page, ordered by operation index.
fn collect_failures(
    errors: impl IntoIterator<Item = (usize, Option<i32>, String)>,
    records: &[SourceAccount],
) -> Vec<FailureDetail> {
    let mut failures: Vec<FailureDetail> = errors
        .into_iter()
        .map(|(operation_index, code, message)| FailureDetail {
            operation_index,
            source_id: records.get(operation_index).map(|rec| rec.id),
            code,
            message,
        })
        .collect();
    failures.sort_by_key(|failure| failure.operation_index);
    failures
}
