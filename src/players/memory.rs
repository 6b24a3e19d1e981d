use super::PlayerStore;
use crate::errors::StoreError;
use crate::models::{Player, PlayerDocument};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Stand-in for the `players` collection. Ranks the way the database does:
/// score descending, insertion order among equal scores.
#[derive(Clone, Default)]
pub struct InMemoryPlayerStore {
    docs: Arc<Mutex<Vec<PlayerDocument>>>,
    unreachable: bool,
}

impl InMemoryPlayerStore {
    pub fn seeded(players: &[(&str, i64)]) -> Self {
        let store = Self::default();
        for (uuid, lcoins) in players {
            store.insert(uuid, *lcoins);
        }
        store
    }

    /// A store whose every query fails as if the server never answered.
    pub fn unreachable() -> Self {
        Self {
            unreachable: true,
            ..Self::default()
        }
    }

    pub fn insert(&self, uuid: &str, lcoins: i64) {
        self.docs.lock().unwrap().push(PlayerDocument {
            uuid: uuid.to_string(),
            lcoins,
        });
    }
}

#[async_trait]
impl PlayerStore for InMemoryPlayerStore {
    async fn top_players(&self, limit: i64, timeout: Duration) -> Result<Vec<Player>, StoreError> {
        if self.unreachable {
            return Err(StoreError::QueryTimeout(timeout));
        }

        let mut docs = self.docs.lock().unwrap().clone();
        docs.sort_by(|a, b| b.lcoins.cmp(&a.lcoins));
        docs.truncate(limit.max(0) as usize);

        Ok(docs.into_iter().map(Player::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::players::{QUERY_TIMEOUT, TOP_LIMIT};

    #[tokio::test]
    async fn keeps_only_the_best() {
        let store = InMemoryPlayerStore::default();
        for i in 0..15 {
            store.insert(&format!("p{i}"), i);
        }

        let top = store.top_players(TOP_LIMIT, QUERY_TIMEOUT).await.unwrap();
        let scores: Vec<i64> = top.iter().map(|p| p.lcoins).collect();
        assert_eq!(scores, (5..15).rev().collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn ties_keep_insertion_order() {
        let store = InMemoryPlayerStore::seeded(&[("x", 1), ("y", 3), ("z", 3)]);
        let top = store.top_players(TOP_LIMIT, QUERY_TIMEOUT).await.unwrap();
        let uuids: Vec<&str> = top.iter().map(|p| p.uuid.as_str()).collect();
        assert_eq!(uuids, ["y", "z", "x"]);
    }
}
