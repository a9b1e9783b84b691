//! WorkMongolia backend library modules.
//!
//! The crate follows a hexagonal layout: domain types and ports in
//! [`domain`], HTTP adapters in [`inbound`], storage adapters in
//! [`outbound`], and wiring in [`server`].

pub mod doc;
pub mod domain;
#[cfg(feature = "example-data")]
pub mod example_data;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
/// Request tracing middleware attaching a trace id to every response.
pub use middleware::Trace;
