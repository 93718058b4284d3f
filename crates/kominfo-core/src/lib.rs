//! # Kominfo Core
//!
//! Domain entities, derived-state algorithms, repository traits and domain
//! services of the Diskominfo portal.

pub mod domain;
pub mod services;
pub mod repositories;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use error::DomainError;
