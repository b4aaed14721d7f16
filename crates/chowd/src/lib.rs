//! Chowd - restaurant catalog daemon.
//!
//! Collects listings from the bundled seed lists and the Chowdeck scrapers,
//! merges them through `chow_common` and serves the catalog over HTTP.

pub mod config;
pub mod error;
pub mod export;
pub mod routes;
pub mod server;
pub mod service;
pub mod sources;

pub use config::Config;
pub use error::ApiError;
pub use server::{router, AppState};
pub use service::RestaurantService;
