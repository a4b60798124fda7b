use crate::state::AppState;
use axum::Router;

pub mod clock;
pub mod dto;
pub mod handlers;
pub mod ids;
pub mod repo;
pub mod repo_types;
pub mod services;
pub mod store;
pub mod validation;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::rpc_routes())
}
