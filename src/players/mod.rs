pub mod mongo;

#[cfg(test)]
pub mod memory;

use crate::errors::StoreError;
use crate::models::Player;
use async_trait::async_trait;
use std::time::Duration;

pub use mongo::MongoPlayerStore;

/// Name of the collection holding player documents.
pub const COLLECTION: &str = "players";

/// Stored name of the score field used for ranking.
pub const SCORE_FIELD: &str = "Lcoins";

/// Size of the leaderboard served by `/list-top/10`.
pub const TOP_LIMIT: i64 = 10;

/// Budget for a single leaderboard read, from issuing the query to the last
/// document.
pub const QUERY_TIMEOUT: Duration = Duration::from_secs(10);

#[async_trait]
pub trait PlayerStore: Send + Sync {
    /// Highest-scoring players, best first, at most `limit` of them.
    /// Must give up once `timeout` has elapsed.
    async fn top_players(&self, limit: i64, timeout: Duration) -> Result<Vec<Player>, StoreError>;
}
