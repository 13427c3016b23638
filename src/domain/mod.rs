//! Core domain entities and types

pub mod error;
pub mod models;

pub use error::{DomainError, DomainResult};
pub use models::{Amenity, City, Place, State};
