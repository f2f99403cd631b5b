use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};

use crate::{
    error::ApiError,
    extract::{parse_object_id, ValidatedJson},
    state::AppState,
};

use super::dto::{CreateProductRequest, ProductResponse};
use super::repo;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/products", post(create_product).get(list_products))
        .route("/products/:id", get(get_product).delete(delete_product))
}

#[instrument(skip(state, body))]
pub async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<CreateProductRequest>,
) -> Result<(StatusCode, Json<ProductResponse>), ApiError> {
    let product = repo::insert(&state.db, body.name, body.about, body.price).await?;
    info!(product_id = %product.id, "product created");
    Ok((StatusCode::CREATED, Json(product.into())))
}

#[instrument(skip(state))]
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductResponse>>, ApiError> {
    let products = repo::find_all(&state.db).await?;
    Ok(Json(products.into_iter().map(ProductResponse::from).collect()))
}

#[instrument(skip(state))]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProductResponse>, ApiError> {
    let id = parse_object_id(&id)?;
    let product = repo::find_by_id(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("Product"))?;
    Ok(Json(product.into()))
}

#[instrument(skip(state))]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let id = parse_object_id(&id)?;
    if !repo::delete_by_id(&state.db, id).await? {
        return Err(ApiError::NotFound("Product"));
    }
    info!(product_id = %id, "product deleted");
    Ok(Json(serde_json::json!({ "message": "Product deleted" })))
}
