use anyhow::Context;
use axum::async_trait;
use serde_json::Value;

/// Read-only access to the third-party game catalog. Responses are relayed
/// as parsed JSON, never retried and never cached.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    async fn list_games(&self) -> anyhow::Result<Value>;
    async fn game_by_id(&self, id: &str) -> anyhow::Result<Value>;
}

pub struct FreeToGameClient {
    http: reqwest::Client,
    base_url: String,
}

impl FreeToGameClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl CatalogClient for FreeToGameClient {
    async fn list_games(&self) -> anyhow::Result<Value> {
        let games = self
            .http
            .get(format!("{}/games", self.base_url))
            .send()
            .await
            .context("request game list")?
            .error_for_status()
            .context("game list response")?
            .json()
            .await
            .context("decode game list")?;
        Ok(games)
    }

    async fn game_by_id(&self, id: &str) -> anyhow::Result<Value> {
        let game = self
            .http
            .get(format!("{}/game", self.base_url))
            .query(&[("id", id)])
            .send()
            .await
            .context("request game")?
            .error_for_status()
            .context("game response")?
            .json()
            .await
            .context("decode game")?;
        Ok(game)
    }
}
