use anyhow::Result;
use mongodb::bson::doc;
use mongodb::options::FindOneOptions;
use mongodb::Database;
use serde::{de::DeserializeOwned, Serialize};

use personachat_common::CryptoHash;

/// An immutable, owner-scoped document. Every save inserts a fresh record;
/// nothing is ever updated in place or deleted, and reads always take the
/// single most recent record for an owner.
#[allow(async_fn_in_trait)]
pub trait UserRecord:
    Sized + Serialize + DeserializeOwned + Sync + Unpin + Send + Clone
{
    const COLLECTION_NAME: &'static str;

    fn id(&self) -> &CryptoHash;
    fn owner(&self) -> &CryptoHash;

    async fn save(&self, db: &Database) -> Result<CryptoHash> {
        let col = db.collection::<Self>(Self::COLLECTION_NAME);
        col.insert_one(self, None).await?;
        Ok(self.id().clone())
    }

    async fn latest_for(db: &Database, owner: &CryptoHash) -> Result<Option<Self>> {
        let col = db.collection::<Self>(Self::COLLECTION_NAME);
        let options = FindOneOptions::builder()
            .sort(doc! { "timestamp": -1 })
            .build();
        let record = col
            .find_one(doc! { "owner": owner.to_hex_string() }, options)
            .await?;
        Ok(record)
    }

    async fn count_for(db: &Database, owner: &CryptoHash) -> Result<u64> {
        let col = db.collection::<Self>(Self::COLLECTION_NAME);
        let count = col
            .count_documents(doc! { "owner": owner.to_hex_string() }, None)
            .await?;
        Ok(count)
    }
}
