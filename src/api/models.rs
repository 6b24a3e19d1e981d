use crate::models::Player;
use serde::Serialize;

/// Response for GET /
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self { status: "ok" }
    }
}

/// Response for GET /list-top/10
#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct LeaderboardResponse {
    pub result: Vec<Player>,
}
