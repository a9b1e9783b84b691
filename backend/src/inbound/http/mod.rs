//! HTTP inbound adapter exposing REST endpoints.

pub mod directory;
pub mod error;
pub mod health;
pub mod recruitments;
pub mod state;
pub mod validation;

pub use error::ApiResult;
