// src/lib.rs

//! HTTP API for club quizzes: secret-code gated quizzes, quiz takers and
//! their results, stored in PostgreSQL.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod messages;
pub mod models;
pub mod routes;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_utils;

pub use routes::create_router;
pub use state::AppState;
