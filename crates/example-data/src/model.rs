//! Fixture record shapes mirroring the backend wire format.
//!
//! These types intentionally keep the flat field layout used on the wire.
//! Invariants (candidate-only fields, timestamp ordering) are checked by
//! [`crate::validation`] rather than enforced structurally; the backend's
//! domain types make them unrepresentable on conversion.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which UI surface applies to a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// A job seeker; the only role carrying profile fields.
    Candidate,
    /// Represents a company and manages its postings.
    Employer,
    /// Operates the admin recruitment screen.
    Admin,
}

/// Company head-count bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompanySize {
    Small,
    Medium,
    Large,
}

/// A user record as served by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserFixture {
    pub id: u64,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    /// Candidate-only; must be `None` for employers and admins.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    /// Candidate-only; must be `None` for employers and admins.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    /// Candidate-only; must be `None` for employers and admins.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_years: Option<u8>,
    pub location: String,
    pub profile_picture: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A company record as served by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyFixture {
    pub id: u64,
    pub name: String,
    pub industry: String,
    pub size: CompanySize,
    pub location: String,
    pub description: String,
    pub logo_url: Option<String>,
    pub website_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An admin-managed job posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecruitmentFixture {
    pub id: u64,
    pub title: String,
    pub category: String,
    /// Optional reference to a [`CompanyFixture::id`]; informational only.
    pub company_id: Option<u64>,
    pub stack: Vec<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    //! Serialisation contract coverage for fixture shapes.

    use chrono::{TimeZone, Utc};
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn user_fixture_serialises_camel_case_and_omits_absent_profile() {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).single().expect("valid timestamp");
        let user = UserFixture {
            id: 7,
            email: "bold@workmongolia.mn".to_owned(),
            name: "Bold".to_owned(),
            role: UserRole::Employer,
            headline: None,
            skills: None,
            experience_years: None,
            location: "Ulaanbaatar".to_owned(),
            profile_picture: None,
            is_active: true,
            created_at: now,
            updated_at: now,
        };

        let value = serde_json::to_value(&user).expect("serialises");
        assert_eq!(value["role"], "employer");
        assert!(value.get("skills").is_none());
        assert!(value.get("experienceYears").is_none());
        assert_eq!(value["isActive"], true);
        assert!(value.get("profilePicture").expect("field present").is_null());
    }

    #[rstest]
    #[case(CompanySize::Small, "small")]
    #[case(CompanySize::Medium, "medium")]
    #[case(CompanySize::Large, "large")]
    fn company_size_uses_lowercase_wire_values(#[case] size: CompanySize, #[case] expected: &str) {
        let value = serde_json::to_value(size).expect("serialises");
        assert_eq!(value, expected);
    }
}
