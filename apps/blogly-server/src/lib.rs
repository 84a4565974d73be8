//! # Blogly Server
//!
//! Actix-web application serving HTML pages for users, posts and tags.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod state;
pub mod telemetry;
pub mod templates;
mod views;

pub use config::AppConfig;
pub use state::AppState;
