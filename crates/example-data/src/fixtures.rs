//! Curated fixture collections.
//!
//! Content is fixed; only timestamps vary, and those are derived from the
//! caller-supplied `now` minus per-record offsets. Collections are ordered by
//! id and are intended to be treated as read-only by consumers.

use chrono::{DateTime, Duration, Utc};

use crate::model::{CompanyFixture, CompanySize, RecruitmentFixture, UserFixture, UserRole};

fn stamped(now: DateTime<Utc>, created_days_ago: i64, updated_days_ago: i64) -> (DateTime<Utc>, DateTime<Utc>) {
    (
        now - Duration::days(created_days_ago),
        now - Duration::days(updated_days_ago),
    )
}

/// The canonical user collection consumed by candidate and employer pages.
///
/// Contains one admin, two employers, and three candidates. Candidate-only
/// fields are populated exclusively on candidate records.
#[must_use]
pub fn fixture_users(now: DateTime<Utc>) -> Vec<UserFixture> {
    let owned = |values: &[&str]| values.iter().map(|s| (*s).to_owned()).collect::<Vec<_>>();

    let (admin_created, admin_updated) = stamped(now, 400, 30);
    let (emp1_created, emp1_updated) = stamped(now, 320, 14);
    let (emp2_created, emp2_updated) = stamped(now, 250, 7);
    let (cand1_created, cand1_updated) = stamped(now, 180, 2);
    let (cand2_created, cand2_updated) = stamped(now, 90, 1);
    let (cand3_created, cand3_updated) = stamped(now, 45, 0);

    vec![
        UserFixture {
            id: 1,
            email: "admin@workmongolia.mn".to_owned(),
            name: "Enkhjargal Dorj".to_owned(),
            role: UserRole::Admin,
            headline: None,
            skills: None,
            experience_years: None,
            location: "Ulaanbaatar".to_owned(),
            profile_picture: None,
            is_active: true,
            created_at: admin_created,
            updated_at: admin_updated,
        },
        UserFixture {
            id: 2,
            email: "hr@khanbank.mn".to_owned(),
            name: "Sarnai Batbold".to_owned(),
            role: UserRole::Employer,
            headline: None,
            skills: None,
            experience_years: None,
            location: "Ulaanbaatar".to_owned(),
            profile_picture: Some("https://cdn.workmongolia.mn/avatars/sarnai.png".to_owned()),
            is_active: true,
            created_at: emp1_created,
            updated_at: emp1_updated,
        },
        UserFixture {
            id: 3,
            email: "recruiting@gobi.mn".to_owned(),
            name: "Ganbold Tseren".to_owned(),
            role: UserRole::Employer,
            headline: None,
            skills: None,
            experience_years: None,
            location: "Darkhan".to_owned(),
            profile_picture: None,
            is_active: true,
            created_at: emp2_created,
            updated_at: emp2_updated,
        },
        UserFixture {
            id: 4,
            email: "bat-erdene@example.mn".to_owned(),
            name: "Bat-Erdene Munkh".to_owned(),
            role: UserRole::Candidate,
            headline: Some("Backend engineer, distributed systems".to_owned()),
            skills: Some(owned(&["Rust", "PostgreSQL", "Kubernetes"])),
            experience_years: Some(6),
            location: "Ulaanbaatar".to_owned(),
            profile_picture: Some("https://cdn.workmongolia.mn/avatars/bat-erdene.png".to_owned()),
            is_active: true,
            created_at: cand1_created,
            updated_at: cand1_updated,
        },
        UserFixture {
            id: 5,
            email: "temuulen@example.mn".to_owned(),
            name: "Temuulen Gantulga".to_owned(),
            role: UserRole::Candidate,
            headline: Some("Mobile developer".to_owned()),
            skills: Some(owned(&["Kotlin", "Swift", "Flutter"])),
            experience_years: Some(3),
            location: "Erdenet".to_owned(),
            profile_picture: None,
            is_active: true,
            created_at: cand2_created,
            updated_at: cand2_updated,
        },
        UserFixture {
            id: 6,
            email: "oyunaa@example.mn".to_owned(),
            name: "Oyunaa Erdene".to_owned(),
            role: UserRole::Candidate,
            headline: Some("Junior data analyst".to_owned()),
            skills: Some(owned(&["SQL", "Python"])),
            experience_years: Some(1),
            location: "Ulaanbaatar".to_owned(),
            profile_picture: None,
            is_active: false,
            created_at: cand3_created,
            updated_at: cand3_updated,
        },
    ]
}

/// The canonical company collection.
#[must_use]
pub fn fixture_companies(now: DateTime<Utc>) -> Vec<CompanyFixture> {
    let (c1_created, c1_updated) = stamped(now, 500, 20);
    let (c2_created, c2_updated) = stamped(now, 430, 60);
    let (c3_created, c3_updated) = stamped(now, 365, 10);
    let (c4_created, c4_updated) = stamped(now, 120, 5);

    vec![
        CompanyFixture {
            id: 1,
            name: "Khan Bank".to_owned(),
            industry: "Finance".to_owned(),
            size: CompanySize::Large,
            location: "Ulaanbaatar".to_owned(),
            description: "The largest commercial bank in Mongolia.".to_owned(),
            logo_url: Some("https://cdn.workmongolia.mn/logos/khan-bank.svg".to_owned()),
            website_url: Some("https://www.khanbank.com".to_owned()),
            created_at: c1_created,
            updated_at: c1_updated,
        },
        CompanyFixture {
            id: 2,
            name: "Gobi Cashmere".to_owned(),
            industry: "Textiles".to_owned(),
            size: CompanySize::Medium,
            location: "Ulaanbaatar".to_owned(),
            description: "Cashmere manufacturer exporting worldwide.".to_owned(),
            logo_url: Some("https://cdn.workmongolia.mn/logos/gobi.svg".to_owned()),
            website_url: Some("https://www.gobi.mn".to_owned()),
            created_at: c2_created,
            updated_at: c2_updated,
        },
        CompanyFixture {
            id: 3,
            name: "Unitel".to_owned(),
            industry: "Telecommunications".to_owned(),
            size: CompanySize::Large,
            location: "Ulaanbaatar".to_owned(),
            description: "Mobile network operator and digital services group.".to_owned(),
            logo_url: None,
            website_url: Some("https://www.unitel.mn".to_owned()),
            created_at: c3_created,
            updated_at: c3_updated,
        },
        CompanyFixture {
            id: 4,
            name: "Nomadic Labs".to_owned(),
            industry: "Software".to_owned(),
            size: CompanySize::Small,
            location: "Darkhan".to_owned(),
            description: "Product studio building tools for logistics startups.".to_owned(),
            logo_url: None,
            website_url: None,
            created_at: c4_created,
            updated_at: c4_updated,
        },
    ]
}

/// The canonical recruitment collection backing the admin screen.
#[must_use]
pub fn fixture_recruitments(now: DateTime<Utc>) -> Vec<RecruitmentFixture> {
    let owned = |values: &[&str]| values.iter().map(|s| (*s).to_owned()).collect::<Vec<_>>();

    let (r1_created, r1_updated) = stamped(now, 30, 3);
    let (r2_created, r2_updated) = stamped(now, 21, 21);
    let (r3_created, r3_updated) = stamped(now, 14, 2);
    let (r4_created, r4_updated) = stamped(now, 10, 1);
    let (r5_created, r5_updated) = stamped(now, 4, 0);

    vec![
        RecruitmentFixture {
            id: 1,
            title: "Senior Backend Engineer".to_owned(),
            category: "Engineering".to_owned(),
            company_id: Some(1),
            stack: owned(&["Rust", "PostgreSQL"]),
            is_active: true,
            created_at: r1_created,
            updated_at: r1_updated,
        },
        RecruitmentFixture {
            id: 2,
            title: "Mobile Developer".to_owned(),
            category: "Engineering".to_owned(),
            company_id: Some(3),
            stack: owned(&["Kotlin", "Swift"]),
            is_active: true,
            created_at: r2_created,
            updated_at: r2_updated,
        },
        RecruitmentFixture {
            id: 3,
            title: "Data Analyst".to_owned(),
            category: "Data".to_owned(),
            company_id: Some(1),
            stack: owned(&["SQL", "Python"]),
            is_active: false,
            created_at: r3_created,
            updated_at: r3_updated,
        },
        RecruitmentFixture {
            id: 4,
            title: "Production Planner".to_owned(),
            category: "Operations".to_owned(),
            company_id: Some(2),
            stack: Vec::new(),
            is_active: true,
            created_at: r4_created,
            updated_at: r4_updated,
        },
        RecruitmentFixture {
            id: 5,
            title: "DevOps Engineer".to_owned(),
            category: "Engineering".to_owned(),
            company_id: None,
            stack: owned(&["Kubernetes", "Terraform"]),
            is_active: true,
            created_at: r5_created,
            updated_at: r5_updated,
        },
    ]
}

#[cfg(test)]
mod tests {
    //! Regression coverage for curated fixtures.

    use chrono::{TimeZone, Utc};
    use rstest::rstest;

    use super::*;
    use crate::validation::{validate_companies, validate_recruitments, validate_users};

    fn frozen_now() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).single().expect("valid timestamp")
    }

    #[rstest]
    fn users_satisfy_invariants() {
        validate_users(&fixture_users(frozen_now())).expect("curated users are valid");
    }

    #[rstest]
    fn companies_satisfy_invariants() {
        validate_companies(&fixture_companies(frozen_now())).expect("curated companies are valid");
    }

    #[rstest]
    fn recruitments_satisfy_invariants() {
        validate_recruitments(&fixture_recruitments(frozen_now()))
            .expect("curated recruitments are valid");
    }

    #[rstest]
    fn collections_are_deterministic_for_a_frozen_clock() {
        let now = frozen_now();
        assert_eq!(fixture_users(now), fixture_users(now));
        assert_eq!(fixture_companies(now), fixture_companies(now));
        assert_eq!(fixture_recruitments(now), fixture_recruitments(now));
    }

    #[rstest]
    fn non_candidates_carry_no_profile_fields() {
        for user in fixture_users(frozen_now()) {
            if user.role != crate::UserRole::Candidate {
                assert!(user.headline.is_none(), "user {} has a headline", user.id);
                assert!(user.skills.is_none(), "user {} has skills", user.id);
                assert!(user.experience_years.is_none(), "user {} has experience", user.id);
            }
        }
    }

    #[rstest]
    fn recruitment_id_three_exists_for_delete_scenarios() {
        assert!(fixture_recruitments(frozen_now()).iter().any(|r| r.id == 3));
    }
}
