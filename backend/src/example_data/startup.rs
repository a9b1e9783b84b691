//! Startup wiring turning fixture records into domain entities.
//!
//! The fixture crate is deliberately ignorant of domain types; this module
//! is the only place where its flat records cross into validated entities.
//! Conversion failures abort startup rather than serving bad data.

use chrono::{DateTime, Utc};
use example_data::validation::{
    FixtureInvariantError, validate_companies, validate_recruitments, validate_users,
};
use example_data::{
    CompanyFixture, RecruitmentFixture, UserFixture, fixture_companies, fixture_recruitments,
    fixture_users, generate_candidates,
};
use thiserror::Error;
use tracing::info;

use crate::domain::{
    CandidateProfile, Company, CompanyDraft, CompanySize, CompanyValidationError, Recruitment,
    RecruitmentDraft, RecruitmentValidationError, User, UserDraft, UserRole, UserValidationError,
};
use crate::example_data::config::ExampleDataSettings;

/// Errors raised while assembling the example data set.
#[derive(Debug, Error)]
pub enum ExampleDataError {
    /// A fixture collection violates a cross-record invariant.
    #[error("fixture collection invalid: {0}")]
    Invariant(#[from] FixtureInvariantError),
    /// A fixture user was rejected by the domain constructor.
    #[error("fixture user {id} rejected: {source}")]
    User {
        id: u64,
        #[source]
        source: UserValidationError,
    },
    /// A fixture company was rejected by the domain constructor.
    #[error("fixture company {id} rejected: {source}")]
    Company {
        id: u64,
        #[source]
        source: CompanyValidationError,
    },
    /// A fixture recruitment was rejected by the domain constructor.
    #[error("fixture recruitment {id} rejected: {source}")]
    Recruitment {
        id: u64,
        #[source]
        source: RecruitmentValidationError,
    },
}

/// Domain entities ready to seed the in-memory adapters.
pub struct ExampleDataBundle {
    pub users: Vec<User>,
    pub companies: Vec<Company>,
    pub recruitments: Vec<Recruitment>,
}

fn role_from_fixture(role: example_data::UserRole) -> UserRole {
    match role {
        example_data::UserRole::Candidate => UserRole::Candidate,
        example_data::UserRole::Employer => UserRole::Employer,
        example_data::UserRole::Admin => UserRole::Admin,
    }
}

fn size_from_fixture(size: example_data::CompanySize) -> CompanySize {
    match size {
        example_data::CompanySize::Small => CompanySize::Small,
        example_data::CompanySize::Medium => CompanySize::Medium,
        example_data::CompanySize::Large => CompanySize::Large,
    }
}

fn user_from_fixture(fixture: UserFixture) -> Result<User, ExampleDataError> {
    let id = fixture.id;
    let profile = if fixture.headline.is_some()
        || fixture.skills.is_some()
        || fixture.experience_years.is_some()
    {
        Some(CandidateProfile {
            headline: fixture.headline,
            skills: fixture.skills.unwrap_or_default(),
            experience_years: fixture.experience_years,
        })
    } else {
        None
    };
    User::new(UserDraft {
        id: fixture.id,
        email: fixture.email,
        name: fixture.name,
        role: role_from_fixture(fixture.role),
        profile,
        location: fixture.location,
        profile_picture: fixture.profile_picture,
        is_active: fixture.is_active,
        created_at: fixture.created_at,
        updated_at: fixture.updated_at,
    })
    .map_err(|source| ExampleDataError::User { id, source })
}

fn company_from_fixture(fixture: CompanyFixture) -> Result<Company, ExampleDataError> {
    let id = fixture.id;
    Company::new(CompanyDraft {
        id: fixture.id,
        name: fixture.name,
        industry: fixture.industry,
        size: size_from_fixture(fixture.size),
        location: fixture.location,
        description: fixture.description,
        logo_url: fixture.logo_url,
        website_url: fixture.website_url,
        created_at: fixture.created_at,
        updated_at: fixture.updated_at,
    })
    .map_err(|source| ExampleDataError::Company { id, source })
}

fn recruitment_from_fixture(fixture: RecruitmentFixture) -> Result<Recruitment, ExampleDataError> {
    let id = fixture.id;
    Recruitment::from_draft(
        fixture.id,
        RecruitmentDraft {
            title: fixture.title,
            category: fixture.category,
            company_id: fixture.company_id,
            stack: fixture.stack,
            is_active: fixture.is_active,
        },
        fixture.created_at,
        fixture.updated_at,
    )
    .map_err(|source| ExampleDataError::Recruitment { id, source })
}

/// Assemble the full example data set for the given settings.
///
/// Curated fixtures come first, followed by generated candidates. The same
/// settings and `now` always produce an identical bundle.
pub fn build_example_data(
    settings: &ExampleDataSettings,
    now: DateTime<Utc>,
) -> Result<ExampleDataBundle, ExampleDataError> {
    let mut user_fixtures = fixture_users(now);
    user_fixtures.extend(generate_candidates(
        settings.seed(),
        settings.candidate_count(),
        now,
    ));
    let company_fixtures = fixture_companies(now);
    let recruitment_fixtures = fixture_recruitments(now);

    validate_users(&user_fixtures)?;
    validate_companies(&company_fixtures)?;
    validate_recruitments(&recruitment_fixtures)?;

    let users = user_fixtures
        .into_iter()
        .map(user_from_fixture)
        .collect::<Result<Vec<_>, _>>()?;
    let companies = company_fixtures
        .into_iter()
        .map(company_from_fixture)
        .collect::<Result<Vec<_>, _>>()?;
    let recruitments = recruitment_fixtures
        .into_iter()
        .map(recruitment_from_fixture)
        .collect::<Result<Vec<_>, _>>()?;

    info!(
        users = users.len(),
        companies = companies.len(),
        recruitments = recruitments.len(),
        seed = settings.seed(),
        "example data assembled"
    );

    Ok(ExampleDataBundle {
        users,
        companies,
        recruitments,
    })
}

#[cfg(test)]
mod tests {
    //! Regression coverage for fixture conversion.

    use chrono::TimeZone;
    use rstest::rstest;

    use super::*;

    fn settings(seed: u64, candidate_count: usize) -> ExampleDataSettings {
        ExampleDataSettings {
            enabled: true,
            seed: Some(seed),
            candidate_count: Some(candidate_count),
        }
    }

    fn frozen_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0)
            .single()
            .expect("valid timestamp")
    }

    #[rstest]
    fn bundle_contains_curated_and_generated_records() {
        let bundle =
            build_example_data(&settings(42, 10), frozen_now()).expect("fixtures convert");
        assert!(bundle.users.len() >= 10);
        assert!(!bundle.companies.is_empty());
        assert!(!bundle.recruitments.is_empty());
    }

    #[rstest]
    fn bundle_is_deterministic_for_a_seed() {
        let now = frozen_now();
        let first = build_example_data(&settings(7, 5), now).expect("fixtures convert");
        let second = build_example_data(&settings(7, 5), now).expect("fixtures convert");
        assert_eq!(first.users, second.users);
        assert_eq!(first.recruitments, second.recruitments);
    }

    #[rstest]
    fn non_candidates_never_carry_a_profile() {
        let bundle =
            build_example_data(&settings(42, 10), frozen_now()).expect("fixtures convert");
        for user in &bundle.users {
            if user.role() != UserRole::Candidate {
                assert!(user.profile().is_none(), "user {} has a profile", user.id());
            }
        }
    }

    #[rstest]
    fn collections_pass_fixture_validation() {
        let now = frozen_now();
        let users = fixture_users(now);
        assert!(validate_users(&users).is_ok());
    }
}
