use axum::{
    extract::State,
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde_json::{json, Value};
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

use super::repo;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/insert-documents", post(insert_documents))
        .route("/find-documents", get(find_documents))
        .route("/find-documents-filtered", get(find_documents_filtered))
        .route("/update-document", put(update_document))
        .route("/delete-documents", delete(delete_documents))
        .route("/create-index", post(create_index))
}

#[instrument(skip(state))]
pub async fn insert_documents(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let result = repo::insert_demo_batch(&state.db).await?;

    let mut inserted: Vec<_> = result.inserted_ids.into_iter().collect();
    inserted.sort_by_key(|(index, _)| *index);
    let ids: Vec<String> = inserted
        .into_iter()
        .filter_map(|(_, id)| id.as_object_id().map(|oid| oid.to_hex()))
        .collect();

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Documents inserted", "insertedIds": ids })),
    ))
}

#[instrument(skip(state))]
pub async fn find_documents(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let documents = repo::find_all(&state.db).await?;
    Ok(Json(
        json!({ "message": "Documents found", "documents": documents }),
    ))
}

#[instrument(skip(state))]
pub async fn find_documents_filtered(
    State(state): State<AppState>,
) -> Result<Json<Value>, ApiError> {
    let documents = repo::find_filtered(&state.db).await?;
    Ok(Json(
        json!({ "message": "Filtered documents found", "documents": documents }),
    ))
}

#[instrument(skip(state))]
pub async fn update_document(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let result = repo::tag_matching(&state.db).await?;
    Ok(Json(json!({
        "message": "Document updated",
        "matchedCount": result.matched_count,
        "modifiedCount": result.modified_count,
    })))
}

#[instrument(skip(state))]
pub async fn delete_documents(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let result = repo::purge_matching(&state.db).await?;
    Ok(Json(json!({
        "message": "Documents deleted",
        "deletedCount": result.deleted_count,
    })))
}

#[instrument(skip(state))]
pub async fn create_index(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let result = repo::ensure_index(&state.db).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Index created", "indexName": result.index_name })),
    ))
}
