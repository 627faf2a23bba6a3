//! User management endpoints
//!
//! Every handler opens one [`Session`]. Writes commit on success; any error
//! return drops the session and rolls it back. Reads never commit.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Serialize;

use crate::db::{Session, User};
use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, PathParam};
use crate::http::server::UserState;
use crate::models::{NewUser, UserPayload};

#[derive(Serialize)]
pub struct UserListResponse {
    pub users: Vec<User>,
}

#[derive(Serialize)]
pub struct UserResponse {
    pub user: User,
}

#[derive(Serialize)]
pub struct CreatedUserResponse {
    pub message: &'static str,
    pub user_id: i64,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// GET /viewuser
async fn list_users(
    State(state): State<Arc<UserState>>,
) -> Result<Json<UserListResponse>, ApiError> {
    let mut session = Session::begin(&state.pool).await?;
    let users = session.users().list().await?;
    Ok(Json(UserListResponse { users }))
}

/// GET /viewuser/{id}
async fn get_user(
    State(state): State<Arc<UserState>>,
    PathParam(id): PathParam<i64>,
) -> Result<Json<UserResponse>, ApiError> {
    let mut session = Session::begin(&state.pool).await?;
    let user = session.users().get(id).await?;
    Ok(Json(UserResponse { user }))
}

/// POST /create_user
async fn create_user(
    State(state): State<Arc<UserState>>,
    JsonBody(payload): JsonBody<UserPayload>,
) -> Result<(StatusCode, Json<CreatedUserResponse>), ApiError> {
    let user = NewUser::try_from(payload)?;

    let mut session = Session::begin(&state.pool).await?;
    let user_id = session.users().create(&user).await?;
    session.commit().await?;
    tracing::info!(user_id, "user created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedUserResponse {
            message: "User created successfully",
            user_id,
        }),
    ))
}

/// PUT /update_user/{id}
async fn update_user(
    State(state): State<Arc<UserState>>,
    PathParam(id): PathParam<i64>,
    JsonBody(payload): JsonBody<UserPayload>,
) -> Result<Json<MessageResponse>, ApiError> {
    let user = NewUser::try_from(payload)?;

    let mut session = Session::begin(&state.pool).await?;
    session.users().update(id, &user).await?;
    session.commit().await?;
    tracing::info!(user_id = id, "user updated");

    Ok(Json(MessageResponse {
        message: "User updated successfully",
    }))
}

/// DELETE /delete_user/{id}
async fn delete_user(
    State(state): State<Arc<UserState>>,
    PathParam(id): PathParam<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    let mut session = Session::begin(&state.pool).await?;
    session.users().delete(id).await?;
    session.commit().await?;
    tracing::info!(user_id = id, "user deleted");

    Ok(Json(MessageResponse {
        message: "User deleted successfully",
    }))
}

/// User routes
pub fn router() -> Router<Arc<UserState>> {
    Router::new()
        .route("/viewuser", get(list_users))
        .route("/viewuser/{id}", get(get_user))
        .route("/create_user", post(create_user))
        .route("/update_user/{id}", put(update_user))
        .route("/delete_user/{id}", delete(delete_user))
}
