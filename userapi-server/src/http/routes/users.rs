//! User endpoints
//!
//! - POST   /user        create
//! - GET    /users       list (query: limit, default 100)
//! - GET    /user/{id}   read
//! - PUT    /user/{id}   replace name and status
//! - DELETE /user/{id}   delete

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::db::Connector;
use crate::http::error::ApiError;
use crate::http::extractors::{ValidJson, ValidQuery};
use crate::http::server::AppState;
use crate::models::UserRecord;

/// Create/update request body
///
/// Any `id` sent by the client is ignored.
#[derive(Debug, Deserialize)]
pub struct UserPayload {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub status: String,
}

/// Query parameters for listing
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub limit: Option<u32>,
}

/// Confirmation body for update/delete
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// POST /user - create a user
async fn create_user<C: Connector>(
    State(state): State<Arc<AppState<C>>>,
    ValidJson(req): ValidJson<UserPayload>,
) -> Result<Json<UserRecord>, ApiError> {
    let user = state.users.create(&req.name, &req.status).await?;
    Ok(Json(user))
}

/// GET /users - list users
async fn list_users<C: Connector>(
    State(state): State<Arc<AppState<C>>>,
    ValidQuery(params): ValidQuery<ListParams>,
) -> Result<Json<Vec<UserRecord>>, ApiError> {
    let users = state.users.list(params.limit).await?;
    Ok(Json(users))
}

/// GET /user/{id} - get a single user
async fn get_user<C: Connector>(
    State(state): State<Arc<AppState<C>>>,
    Path(id): Path<String>,
) -> Result<Json<UserRecord>, ApiError> {
    let user = state.users.get(&id).await?;
    Ok(Json(user))
}

/// PUT /user/{id} - replace name and status
async fn update_user<C: Connector>(
    State(state): State<Arc<AppState<C>>>,
    Path(id): Path<String>,
    ValidJson(req): ValidJson<UserPayload>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.users.update(&id, &req.name, &req.status).await?;
    Ok(Json(MessageResponse {
        message: "User updated successfully",
    }))
}

/// DELETE /user/{id} - delete a user
async fn delete_user<C: Connector>(
    State(state): State<Arc<AppState<C>>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.users.delete(&id).await?;
    Ok(Json(MessageResponse {
        message: "User deleted successfully",
    }))
}

/// User routes
pub fn router<C: Connector>() -> Router<Arc<AppState<C>>> {
    Router::new()
        .route("/user", post(create_user::<C>))
        .route("/users", get(list_users::<C>))
        .route("/users/", get(list_users::<C>))
        .route(
            "/user/{id}",
            get(get_user::<C>)
                .put(update_user::<C>)
                .delete(delete_user::<C>),
        )
}
