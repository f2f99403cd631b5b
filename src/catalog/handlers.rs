use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde_json::Value;
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/f2p-games", get(list_games))
        .route("/f2p-games/:id", get(get_game))
}

#[instrument(skip(state))]
pub async fn list_games(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let games = state
        .catalog
        .list_games()
        .await
        .map_err(ApiError::Upstream)?;
    Ok(Json(games))
}

#[instrument(skip(state))]
pub async fn get_game(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let game = state
        .catalog
        .game_by_id(&id)
        .await
        .map_err(ApiError::Upstream)?;
    Ok(Json(game))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::catalog::CatalogClient;
    use crate::config::AppConfig;
    use crate::state::AppState;

    struct StubCatalog {
        games: Value,
    }

    #[async_trait]
    impl CatalogClient for StubCatalog {
        async fn list_games(&self) -> anyhow::Result<Value> {
            Ok(self.games.clone())
        }

        async fn game_by_id(&self, id: &str) -> anyhow::Result<Value> {
            Ok(json!({ "id": id, "title": "Stub Game" }))
        }
    }

    struct FailingCatalog;

    #[async_trait]
    impl CatalogClient for FailingCatalog {
        async fn list_games(&self) -> anyhow::Result<Value> {
            Err(anyhow::anyhow!("connection refused"))
        }

        async fn game_by_id(&self, _id: &str) -> anyhow::Result<Value> {
            Err(anyhow::anyhow!("connection refused"))
        }
    }

    async fn test_state(catalog: Arc<dyn CatalogClient>) -> AppState {
        // The driver connects lazily, so no database needs to be running.
        let client = mongodb::Client::with_uri_str("mongodb://localhost:27017")
            .await
            .expect("client");
        let config = Arc::new(AppConfig {
            mongodb_url: "mongodb://localhost:27017".into(),
            mongodb_db: "test".into(),
            catalog_base_url: "http://stub.invalid".into(),
        });
        AppState::from_parts(client.database("test"), config, catalog)
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn list_games_relays_upstream_json_unmodified() {
        let games = json!([{ "id": 1, "title": "Tarisland" }, { "id": 2, "title": "Enlisted" }]);
        let state = test_state(Arc::new(StubCatalog {
            games: games.clone(),
        }))
        .await;
        let app = crate::catalog::router().with_state(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/f2p-games")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, games);
    }

    #[tokio::test]
    async fn get_game_passes_the_path_id_through() {
        let state = test_state(Arc::new(StubCatalog { games: json!([]) })).await;
        let app = crate::catalog::router().with_state(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/f2p-games/452")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["id"], "452");
    }

    #[tokio::test]
    async fn upstream_failure_maps_to_server_error() {
        let state = test_state(Arc::new(FailingCatalog)).await;
        let app = crate::catalog::router().with_state(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/f2p-games")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Server error");
    }
}
