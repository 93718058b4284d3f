//! # Kominfo Security
//!
//! Security utilities: JWT and password hashing for the admin dashboard.

pub mod jwt;
pub mod password;

pub use jwt::{Claims, JwtError, JwtService};
pub use password::{PasswordError, PasswordService};
