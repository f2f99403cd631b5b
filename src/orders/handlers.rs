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

use super::dto::{OrderPayload, OrderResponse};
use super::{pricing, repo};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/orders", post(create_order).get(list_orders))
        .route(
            "/orders/:id",
            get(get_order).put(update_order).delete(delete_order),
        )
}

#[instrument(skip(state, body))]
pub async fn create_order(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<OrderPayload>,
) -> Result<(StatusCode, Json<OrderResponse>), ApiError> {
    let total = pricing::total_for_products(&state.db, &body.product_ids).await?;
    let order = repo::insert(
        &state.db,
        body.user_id,
        body.product_ids,
        total,
        body.payment,
    )
    .await?;

    info!(order_id = %order.id, total, "order created");
    Ok((StatusCode::CREATED, Json(order.into())))
}

#[instrument(skip(state))]
pub async fn list_orders(
    State(state): State<AppState>,
) -> Result<Json<Vec<OrderResponse>>, ApiError> {
    let orders = repo::find_all(&state.db).await?;
    Ok(Json(orders.into_iter().map(OrderResponse::from).collect()))
}

#[instrument(skip(state))]
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<OrderResponse>, ApiError> {
    let id = parse_object_id(&id)?;
    let order = repo::find_by_id(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("Order"))?;
    Ok(Json(order.into()))
}

/// Full replace of userId/productIds/payment; the total is recomputed with
/// the same derivation as creation and updatedAt advances.
#[instrument(skip(state, body))]
pub async fn update_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(body): ValidatedJson<OrderPayload>,
) -> Result<Json<OrderResponse>, ApiError> {
    let id = parse_object_id(&id)?;
    let total = pricing::total_for_products(&state.db, &body.product_ids).await?;
    let order = repo::replace_fields(
        &state.db,
        id,
        &body.user_id,
        &body.product_ids,
        total,
        body.payment,
    )
    .await?
    .ok_or(ApiError::NotFound("Order"))?;

    info!(order_id = %order.id, total, "order updated");
    Ok(Json(order.into()))
}

#[instrument(skip(state))]
pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let id = parse_object_id(&id)?;
    if !repo::delete_by_id(&state.db, id).await? {
        return Err(ApiError::NotFound("Order"));
    }
    info!(order_id = %id, "order deleted");
    Ok(Json(serde_json::json!({ "message": "Order deleted" })))
}
