//! User-account service: create, fetch, update and delete user records over
//! a JSON RPC surface, backed by an in-memory map or Postgres.

pub mod app;
pub mod client;
pub mod config;
pub mod error;
pub mod state;
pub mod users;
