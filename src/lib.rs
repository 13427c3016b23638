//! # HBNB Web
//!
//! Server-rendered listing page and amenity-filter endpoint for the HBNB
//! real-estate application.
//!
//! ## Architecture
//!
//! - **domain**: Core entities (State, City, Amenity, Place) and errors
//! - **storage**: Storage facade trait plus the in-memory implementation
//! - **api**: Axum router, handlers, session teardown and Swagger docs
//! - **config**: TOML-backed application configuration

pub mod api;
pub mod config;
pub mod domain;
pub mod storage;

pub use api::{create_api_router, AppState};
pub use config::{default_config_path, AppConfig};
pub use storage::{InMemoryStorage, Storage};
