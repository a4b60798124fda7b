use axum::{extract::State, routing::post, Json, Router};
use tracing::{debug, instrument, Span};

use super::dto::{
    CreateRequest, CreateResponse, DeleteRequest, Empty, GetRequest, GetResponse, UpdateRequest,
};
use crate::{error::ServiceError, state::AppState};

pub fn rpc_routes() -> Router<AppState> {
    Router::new()
        .route("/auth_v1/create", post(create))
        .route("/auth_v1/get", post(get))
        .route("/auth_v1/update", post(update))
        .route("/auth_v1/delete", post(delete))
}

#[instrument(skip(state, payload))]
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CreateRequest>,
) -> Result<Json<CreateResponse>, ServiceError> {
    debug!("create request");
    let id = state.users.create(payload.info).await?;
    Ok(Json(CreateResponse { id }))
}

#[instrument(skip(state, payload), fields(user_id))]
pub async fn get(
    State(state): State<AppState>,
    Json(payload): Json<GetRequest>,
) -> Result<Json<GetResponse>, ServiceError> {
    Span::current().record("user_id", payload.id);
    let user = state.users.get(payload.id).await?;
    Ok(Json(user.into()))
}

#[instrument(skip(state, payload), fields(user_id))]
pub async fn update(
    State(state): State<AppState>,
    Json(payload): Json<UpdateRequest>,
) -> Result<Json<Empty>, ServiceError> {
    let (id, patch) = payload.into_parts();
    Span::current().record("user_id", id);
    state.users.update(id, patch).await?;
    Ok(Json(Empty {}))
}

#[instrument(skip(state, payload), fields(user_id))]
pub async fn delete(
    State(state): State<AppState>,
    Json(payload): Json<DeleteRequest>,
) -> Result<Json<Empty>, ServiceError> {
    Span::current().record("user_id", payload.id);
    state.users.delete(payload.id).await?;
    Ok(Json(Empty {}))
}
