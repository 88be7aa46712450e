use crate::{error::SyncError, retry::RetryPolicy};
use chrono::Utc;
use connectors::{sink::BatchSink, source::PageSource};
use model::{execution::report::RunReport, pagination::cursor::Cursor};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Drives the fetch → apply → advance loop to completion.
///
/// The loop is strictly sequential: a page is fetched only after the
/// previous page's batch has fully resolved (successfully or not), so the
/// cursor never advances past unconfirmed work. Per-operation failures are
/// folded into the report and logged; retrieval and submission failures end
/// the run.
pub struct SyncRunner<S, K> {
    source: S,
    sink: K,
    retry: RetryPolicy,
    cancel: CancellationToken,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunState {
    Running,
    Done,
}

impl<S: PageSource, K: BatchSink> SyncRunner<S, K> {
    pub fn new(source: S, sink: K) -> Self {
        SyncRunner {
            source,
            sink,
            retry: RetryPolicy::once(),
            cancel: CancellationToken::new(),
        }
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub async fn run(&self) -> Result<RunReport, SyncError> {
        let mut report = RunReport::new(Utc::now());
        let mut cursor = Cursor::Start;
        let mut state = RunState::Running;

        while state == RunState::Running {
            // Checked only between iterations: a submitted batch always
            // resolves before the run reacts to anything.
            if self.cancel.is_cancelled() {
                warn!(pages = report.pages, cursor = %cursor, "cancellation requested, stopping");
                return Err(SyncError::Cancelled);
            }

            let page = self
                .retry
                .run("fetch page", || self.source.next_page(cursor))
                .await?;
            report.pages += 1;

            if page.is_last() {
                state = RunState::Done;
                continue;
            }

            let outcome = self
                .retry
                .run("submit batch", || self.sink.apply(&page.records))
                .await?;

            for failure in &outcome.failures {
                warn!(
                    operation_index = failure.operation_index,
                    source_id = ?failure.source_id,
                    code = ?failure.code,
                    message = %failure.message,
                    "update operation rejected inside batch"
                );
            }

            report.absorb(page.len(), &outcome);
            cursor = page.next_cursor;
            report.last_cursor = cursor;

            info!(
                page = report.pages,
                fetched = page.len(),
                matched = outcome.matched,
                modified = outcome.modified,
                failed = outcome.failures.len(),
                cursor = %cursor,
                "page applied"
            );
        }

        info!(
            pages = report.pages,
            records = report.records,
            matched = report.matched,
            modified = report.modified,
            failed = report.failed_operations,
            "source exhausted, sync complete"
        );
        Ok(report)
    }
}
