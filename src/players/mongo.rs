use super::{PlayerStore, COLLECTION, SCORE_FIELD};
use crate::errors::StoreError;
use crate::models::{Player, PlayerDocument};
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::options::FindOptions;
use mongodb::{Collection, Database};
use std::time::Duration;
use tokio::time::{timeout_at, Instant};

/// Read-only view over the `players` collection.
#[derive(Clone)]
pub struct MongoPlayerStore {
    collection: Collection<PlayerDocument>,
}

impl MongoPlayerStore {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION),
        }
    }
}

/// Highest score first, on the stored field name.
fn sort_spec() -> Document {
    doc! { SCORE_FIELD: -1 }
}

fn find_options(limit: i64, timeout: Duration) -> FindOptions {
    FindOptions::builder()
        .sort(sort_spec())
        .limit(limit)
        .max_time(timeout)
        .build()
}

#[async_trait]
impl PlayerStore for MongoPlayerStore {
    async fn top_players(&self, limit: i64, timeout: Duration) -> Result<Vec<Player>, StoreError> {
        let deadline = Instant::now() + timeout;

        let find = self
            .collection
            .find(doc! {})
            .with_options(find_options(limit, timeout));

        let cursor = timeout_at(deadline, async { find.await })
            .await
            .map_err(|_| StoreError::QueryTimeout(timeout))?
            .map_err(StoreError::Query)?;

        // The cursor is dropped on every path out of here, which releases it
        // server-side.
        let docs: Vec<PlayerDocument> = timeout_at(deadline, cursor.try_collect::<Vec<_>>())
            .await
            .map_err(|_| StoreError::MaterializeTimeout(timeout))?
            .map_err(StoreError::Materialize)?;

        Ok(docs.into_iter().map(Player::from).collect())
    }
}
