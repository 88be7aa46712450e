use crate::{error::is_transient, source::PageSource};
use async_trait::async_trait;
use futures_util::TryStreamExt;
use model::{
    execution::errors::RetrievalError,
    pagination::{cursor::Cursor, page::Page},
    records::account::SourceAccount,
};
use mongodb::{Collection, bson::doc};

/// Walks the source collection in bounded pages ordered by `_id`.
///
/// Pagination seeks by the last-seen key instead of skipping: the query cost
/// does not grow with how many pages were already consumed. Correctness
/// relies on `_id` being stable and strictly ascending in the sort; the
/// strict `$gt` bound guarantees no overlap between pages.
pub struct AccountSource {
    collection: Collection<SourceAccount>,
    page_size: usize,
}

impl AccountSource {
    /// `page_size` is fixed for the lifetime of the walker.
    pub fn new(collection: Collection<SourceAccount>, page_size: usize) -> Self {
        AccountSource {
            collection,
            page_size,
        }
    }

    pub fn for_collection(
        client: &mongodb::Client,
        database: &str,
        collection: &str,
        page_size: usize,
    ) -> Self {
        Self::new(client.database(database).collection(collection), page_size)
    }

    fn retrieval_error(&self, cursor: Cursor, err: mongodb::error::Error) -> RetrievalError {
        let collection = self.collection.name().to_string();
        if is_transient(&err) {
            RetrievalError::Transport {
                collection,
                cursor,
                source: Box::new(err),
            }
        } else {
            RetrievalError::Query {
                collection,
                cursor,
                source: Box::new(err),
            }
        }
    }
}

#[async_trait]
impl PageSource for AccountSource {
    async fn next_page(&self, cursor: Cursor) -> Result<Page, RetrievalError> {
        let filter = match cursor {
            Cursor::Start => doc! {},
            Cursor::After(id) => doc! { "_id": { "$gt": id } },
        };

        let mut docs = self
            .collection
            .find(filter)
            .sort(doc! { "_id": 1 })
            .limit(self.page_size as i64)
            .await
            .map_err(|err| self.retrieval_error(cursor, err))?;

        let mut records = Vec::with_capacity(self.page_size);
        while let Some(account) = docs
            .try_next()
            .await
            .map_err(|err| self.retrieval_error(cursor, err))?
        {
            records.push(account);
        }

        Ok(Page::advanced_from(cursor, records))
    }
}
