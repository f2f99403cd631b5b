mod client;
pub mod handlers;

pub use client::{CatalogClient, FreeToGameClient};

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::routes())
}
