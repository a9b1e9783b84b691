//! Startup wiring for example data seeding.

mod config;
mod startup;

pub use config::ExampleDataSettings;
pub use startup::{ExampleDataBundle, ExampleDataError, build_example_data};
