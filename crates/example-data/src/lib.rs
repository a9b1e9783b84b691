//! Deterministic job-board fixture data for development and testing.
//!
//! This crate supplies the mock data the WorkMongolia backend serves while no
//! real data source exists. It is independent of backend domain types to avoid
//! circular dependencies; the backend converts fixtures into domain entities
//! at its own boundary.
//!
//! Fixture timestamps are derived from an explicit `now` argument rather than
//! being captured at module load, so equality-based tests stay reproducible:
//! freeze a `DateTime<Utc>` once and pass it everywhere.
//!
//! # Overview
//!
//! - Curated collections of users, companies, and recruitment records via
//!   [`fixture_users`], [`fixture_companies`], and [`fixture_recruitments`].
//! - Deterministic bulk candidate generation via [`generate_candidates`]:
//!   the same seed always produces identical output.
//! - Invariant checks over any fixture collection in [`validation`].
//!
//! # Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use example_data::{fixture_users, generate_candidates, validation};
//!
//! let now = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
//! let mut users = fixture_users(now);
//! users.extend(generate_candidates(42, 10, now));
//!
//! validation::validate_users(&users).expect("fixtures satisfy invariants");
//! ```

mod fixtures;
mod generator;
mod model;
pub mod validation;

pub use fixtures::{fixture_companies, fixture_recruitments, fixture_users};
pub use generator::generate_candidates;
pub use model::{CompanyFixture, CompanySize, RecruitmentFixture, UserFixture, UserRole};
