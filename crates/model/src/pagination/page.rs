use crate::{pagination::cursor::Cursor, records::account::SourceAccount};

/// One bounded page of source documents, in ascending `_id` order, together
/// with the cursor to request the following page.
#[derive(Debug, Clone)]
pub struct Page {
    pub records: Vec<SourceAccount>,
    /// `_id` of the last record in the page; for an empty page this is the
    /// cursor the page was requested with, unchanged.
    pub next_cursor: Cursor,
}

impl Page {
    /// Builds a page from fetched records, deriving the next cursor from the
    /// last record (or keeping `requested` when the page is empty).
    pub fn advanced_from(requested: Cursor, records: Vec<SourceAccount>) -> Self {
        let next_cursor = records
            .last()
            .map(|rec| requested.advance(rec.id))
            .unwrap_or(requested);
        Page {
            records,
            next_cursor,
        }
    }

    /// An empty page terminates pagination.
    pub fn is_last(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
