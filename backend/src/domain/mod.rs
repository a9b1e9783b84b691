//! Domain primitives and aggregates.
//!
//! Purpose: Define strongly typed domain entities used by the HTTP adapters
//! and storage ports. Keep types immutable and document invariants and
//! serialisation contracts (serde) in each type's Rustdoc.
//!
//! Public surface:
//! - `Error` / `ErrorCode` — transport-agnostic error payload.
//! - `User` / `UserRole` / `CandidateProfile` — user identity per role.
//! - `Company` / `CompanySize` — company directory entry.
//! - `Recruitment` / `RecruitmentDraft` — admin-managed job posting.
//! - `ports` — hexagonal boundary traits and fixture adapters.

pub mod company;
pub mod error;
pub mod ports;
pub mod recruitment;
pub mod user;

pub use self::company::{Company, CompanyDraft, CompanySize, CompanyValidationError};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::recruitment::{
    Recruitment, RecruitmentDraft, RecruitmentValidationError, TITLE_MAX,
};
pub use self::user::{CandidateProfile, User, UserDraft, UserRole, UserValidationError};

/// Response header carrying the request-scoped trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";
