use async_trait::async_trait;
use model::{
    execution::errors::RetrievalError,
    pagination::{cursor::Cursor, page::Page},
};

/// A paginated view over the source collection. Implementations own their
/// page size; callers only steer the cursor.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetches the page strictly after `cursor`, in ascending `_id` order.
    /// An empty page means the source is exhausted.
    async fn next_page(&self, cursor: Cursor) -> Result<Page, RetrievalError>;
}
