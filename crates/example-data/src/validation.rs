//! Invariant checks over fixture collections.
//!
//! Mirrors the constraints the backend enforces on its domain types so fixture
//! regressions are caught before they reach a running service.

use std::collections::HashSet;

use crate::model::{CompanyFixture, RecruitmentFixture, UserFixture, UserRole};

/// A fixture record violating a documented invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FixtureInvariantError {
    /// Two records in one collection share an id.
    #[error("duplicate id {id} in fixture collection")]
    DuplicateId { id: u64 },
    /// Email is empty or not of the `local@domain` shape.
    #[error("user {id} has an invalid email address")]
    InvalidEmail { id: u64 },
    /// A required display field is blank.
    #[error("record {id} has a blank {field}")]
    BlankField { id: u64, field: &'static str },
    /// An employer or admin carries candidate-only profile fields.
    #[error("non-candidate user {id} carries candidate profile fields")]
    CandidateFieldsOnNonCandidate { id: u64 },
    /// `updated_at` precedes `created_at`.
    #[error("record {id} was updated before it was created")]
    TimestampOrder { id: u64 },
    /// A skills or stack list contains a blank entry.
    #[error("record {id} has a blank entry in {field}")]
    BlankListEntry { id: u64, field: &'static str },
}

fn check_unique<'a, I>(ids: I) -> Result<(), FixtureInvariantError>
where
    I: IntoIterator<Item = &'a u64>,
{
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(*id) {
            return Err(FixtureInvariantError::DuplicateId { id: *id });
        }
    }
    Ok(())
}

fn check_email(id: u64, email: &str) -> Result<(), FixtureInvariantError> {
    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();
    if local.is_empty() || domain.is_empty() {
        return Err(FixtureInvariantError::InvalidEmail { id });
    }
    Ok(())
}

fn check_non_blank(id: u64, field: &'static str, value: &str) -> Result<(), FixtureInvariantError> {
    if value.trim().is_empty() {
        return Err(FixtureInvariantError::BlankField { id, field });
    }
    Ok(())
}

fn check_list_entries(
    id: u64,
    field: &'static str,
    values: &[String],
) -> Result<(), FixtureInvariantError> {
    if values.iter().any(|entry| entry.trim().is_empty()) {
        return Err(FixtureInvariantError::BlankListEntry { id, field });
    }
    Ok(())
}

/// Validate a user collection against the data-model invariants.
///
/// # Errors
///
/// Returns the first violated invariant: duplicate ids, malformed emails,
/// blank names or locations, candidate-only fields on non-candidates, or
/// timestamps out of order.
pub fn validate_users(users: &[UserFixture]) -> Result<(), FixtureInvariantError> {
    check_unique(users.iter().map(|u| &u.id))?;
    for user in users {
        check_email(user.id, &user.email)?;
        check_non_blank(user.id, "name", &user.name)?;
        check_non_blank(user.id, "location", &user.location)?;
        if user.role != UserRole::Candidate
            && (user.headline.is_some() || user.skills.is_some() || user.experience_years.is_some())
        {
            return Err(FixtureInvariantError::CandidateFieldsOnNonCandidate { id: user.id });
        }
        if let Some(skills) = &user.skills {
            check_list_entries(user.id, "skills", skills)?;
        }
        if user.updated_at < user.created_at {
            return Err(FixtureInvariantError::TimestampOrder { id: user.id });
        }
    }
    Ok(())
}

/// Validate a company collection against the data-model invariants.
///
/// # Errors
///
/// Returns the first violated invariant: duplicate ids, blank names or
/// industries, or timestamps out of order.
pub fn validate_companies(companies: &[CompanyFixture]) -> Result<(), FixtureInvariantError> {
    check_unique(companies.iter().map(|c| &c.id))?;
    for company in companies {
        check_non_blank(company.id, "name", &company.name)?;
        check_non_blank(company.id, "industry", &company.industry)?;
        if company.updated_at < company.created_at {
            return Err(FixtureInvariantError::TimestampOrder { id: company.id });
        }
    }
    Ok(())
}

/// Validate a recruitment collection against the data-model invariants.
///
/// # Errors
///
/// Returns the first violated invariant: duplicate ids, blank titles or
/// categories, blank stack entries, or timestamps out of order.
pub fn validate_recruitments(
    records: &[RecruitmentFixture],
) -> Result<(), FixtureInvariantError> {
    check_unique(records.iter().map(|r| &r.id))?;
    for record in records {
        check_non_blank(record.id, "title", &record.title)?;
        check_non_blank(record.id, "category", &record.category)?;
        check_list_entries(record.id, "stack", &record.stack)?;
        if record.updated_at < record.created_at {
            return Err(FixtureInvariantError::TimestampOrder { id: record.id });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    //! Regression coverage for invariant checks.

    use chrono::{Duration, TimeZone, Utc};
    use rstest::rstest;

    use super::*;

    fn base_user() -> UserFixture {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).single().expect("valid timestamp");
        UserFixture {
            id: 1,
            email: "user@example.mn".to_owned(),
            name: "User".to_owned(),
            role: UserRole::Employer,
            headline: None,
            skills: None,
            experience_years: None,
            location: "Ulaanbaatar".to_owned(),
            profile_picture: None,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[rstest]
    #[case("missing-at-sign")]
    #[case("@nodomain")]
    #[case("nolocal@")]
    #[case("")]
    fn rejects_malformed_emails(#[case] email: &str) {
        let mut user = base_user();
        user.email = email.to_owned();
        assert_eq!(
            validate_users(&[user]),
            Err(FixtureInvariantError::InvalidEmail { id: 1 })
        );
    }

    #[rstest]
    fn rejects_candidate_fields_on_employer() {
        let mut user = base_user();
        user.skills = Some(vec!["Rust".to_owned()]);
        assert_eq!(
            validate_users(&[user]),
            Err(FixtureInvariantError::CandidateFieldsOnNonCandidate { id: 1 })
        );
    }

    #[rstest]
    fn rejects_updated_before_created() {
        let mut user = base_user();
        user.updated_at = user.created_at - Duration::seconds(1);
        assert_eq!(
            validate_users(&[user]),
            Err(FixtureInvariantError::TimestampOrder { id: 1 })
        );
    }

    #[rstest]
    fn rejects_duplicate_ids() {
        let user = base_user();
        let twin = base_user();
        assert_eq!(
            validate_users(&[user, twin]),
            Err(FixtureInvariantError::DuplicateId { id: 1 })
        );
    }

    #[rstest]
    fn accepts_a_valid_candidate() {
        let mut user = base_user();
        user.role = UserRole::Candidate;
        user.headline = Some("Engineer".to_owned());
        user.skills = Some(vec!["Rust".to_owned()]);
        user.experience_years = Some(4);
        validate_users(&[user]).expect("candidate with profile is valid");
    }
}
