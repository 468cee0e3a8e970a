//! Paperlens server core: configuration, routing, and the relay that turns
//! model output into responses the browser extension can always use.

pub mod app;
pub mod config;
pub mod relay;
pub mod routes;

pub use app::{build_router, AppState};
pub use config::Config;
