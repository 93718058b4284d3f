//! # Kominfo API
//!
//! HTTP layer of the portal: JSON endpoints for the admin dashboard and the
//! public site, server rendered Informasi pages, and the router that ties
//! them to the core services.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod state;
pub mod views;

pub use error::{ApiError, ApiResult};
pub use routes::{build_router, RouterOptions};
pub use state::AppState;
pub use views::Views;
