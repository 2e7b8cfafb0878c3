//! Diet tracking HTTP API: session-cookie users, per-user meals and diet metrics.

pub mod app;
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod meals;
pub mod state;
pub mod validation;

pub use app::build_app;
pub use state::AppState;
