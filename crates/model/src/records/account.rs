use bson::{Document, doc, oid::ObjectId};
use serde::{Deserialize, Serialize};

/// A document from the source collection. Only the fields the sync reads are
/// typed; everything else is carried through `extra` untouched so decoding
/// never drops data the live store holds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceAccount {
    #[serde(rename = "_id")]
    pub id: ObjectId,

    /// Join key into the target collection. Not unique there: it may match
    /// zero, one, or many target documents.
    pub account_id: i64,

    #[serde(default)]
    pub products: Vec<String>,

    #[serde(flatten)]
    pub extra: Document,
}

impl SourceAccount {
    /// The projection embedded into each matching target document. Written
    /// wholesale with `$set`; never merged with a previous value.
    pub fn embedded_doc(&self) -> Document {
        doc! {
            "_id": self.id,
            "products": self.products.clone(),
        }
    }
}
