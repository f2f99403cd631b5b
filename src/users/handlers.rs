use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use tracing::{info, instrument};

use crate::{error::ApiError, extract::ValidatedJson, state::AppState};

use super::dto::{CreateUserRequest, CreatedUserResponse, PageQuery, UserResponse};
use super::{password, repo};

pub fn routes() -> Router<AppState> {
    Router::new().route("/users", post(create_user).get(list_users))
}

#[instrument(skip(state, body))]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<CreatedUserResponse>), ApiError> {
    let digest = password::hash_password(&body.password).map_err(ApiError::Internal)?;
    let id = repo::insert(&state.db, &body.username, &digest, &body.email).await?;

    info!(user_id = %id, "user created");
    Ok((
        StatusCode::CREATED,
        Json(CreatedUserResponse {
            message: "User created".into(),
            user: UserResponse {
                id: id.to_hex(),
                username: body.username,
                email: body.email,
            },
        }),
    ))
}

#[instrument(skip(state))]
pub async fn list_users(
    State(state): State<AppState>,
    Query(page): Query<PageQuery>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = repo::find_page(&state.db, page.skip(), page.limit()).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}
