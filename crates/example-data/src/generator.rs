//! Deterministic bulk candidate generation.
//!
//! Produces arbitrary-size candidate collections from a seeded RNG so load
//! and pagination testing does not depend on the small curated set. The same
//! seed always produces identical output.

use chrono::{DateTime, Duration, Utc};
use fake::Fake;
use fake::faker::name::raw::{FirstName, LastName};
use fake::locales::EN;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::model::{UserFixture, UserRole};

/// Generated candidate ids start above the curated range.
const GENERATED_ID_BASE: u64 = 1000;

/// Probability of a generated candidate being active (9 in 10).
const ACTIVE_NUMERATOR: u32 = 9;
const ACTIVE_DENOMINATOR: u32 = 10;

const MAX_SKILLS: usize = 4;
const MAX_EXPERIENCE_YEARS: u8 = 15;
const MAX_ACCOUNT_AGE_DAYS: i64 = 365;

const SKILL_POOL: &[&str] = &[
    "Rust",
    "Go",
    "TypeScript",
    "Python",
    "Kotlin",
    "Swift",
    "PostgreSQL",
    "Redis",
    "Kubernetes",
    "Terraform",
    "React",
    "SQL",
];

const HEADLINE_POOL: &[&str] = &[
    "Backend engineer",
    "Frontend developer",
    "Mobile developer",
    "Data analyst",
    "DevOps engineer",
    "QA engineer",
];

const LOCATION_POOL: &[&str] = &["Ulaanbaatar", "Darkhan", "Erdenet", "Choibalsan"];

/// Generate `count` candidate users deterministically from `seed`.
///
/// Timestamps are derived from the supplied `now`, so freezing the clock
/// freezes the whole collection. Ids are assigned sequentially from a base
/// above the curated fixtures to keep merged collections free of collisions.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use example_data::generate_candidates;
///
/// let now = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
/// let first = generate_candidates(42, 8, now);
/// let second = generate_candidates(42, 8, now);
/// assert_eq!(first, second);
/// ```
#[must_use]
pub fn generate_candidates(seed: u64, count: usize, now: DateTime<Utc>) -> Vec<UserFixture> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|index| generate_candidate(&mut rng, GENERATED_ID_BASE + index as u64, now))
        .collect()
}

fn generate_candidate(rng: &mut ChaCha8Rng, id: u64, now: DateTime<Utc>) -> UserFixture {
    let first: String = FirstName(EN).fake_with_rng(rng);
    let last: String = LastName(EN).fake_with_rng(rng);
    let name = format!("{first} {last}");
    let email = derive_email(&name, id);

    let skill_count = 1 + rng.random_range(0..MAX_SKILLS);
    let skills = pick_distinct(rng, SKILL_POOL, skill_count);

    let created_at = now - Duration::days(1 + rng.random_range(0..MAX_ACCOUNT_AGE_DAYS));
    let updated_days = rng.random_range(0..MAX_ACCOUNT_AGE_DAYS);
    let updated_at = (now - Duration::days(updated_days)).max(created_at);

    UserFixture {
        id,
        email,
        name,
        role: UserRole::Candidate,
        headline: Some(pick_one(rng, HEADLINE_POOL)),
        skills: Some(skills),
        experience_years: Some(rng.random_range(0..=MAX_EXPERIENCE_YEARS)),
        location: pick_one(rng, LOCATION_POOL),
        profile_picture: None,
        is_active: rng.random_ratio(ACTIVE_NUMERATOR, ACTIVE_DENOMINATOR),
        created_at,
        updated_at,
    }
}

/// Lowercase the name, keep alphanumerics, and suffix the id so generated
/// emails stay unique even when names collide.
fn derive_email(name: &str, id: u64) -> String {
    let local: String = name
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '.' })
        .collect();
    let local = local.trim_matches('.').replace("..", ".");
    format!("{local}.{id}@example.mn")
}

fn pick_one(rng: &mut ChaCha8Rng, pool: &[&str]) -> String {
    pool[rng.random_range(0..pool.len())].to_owned()
}

fn pick_distinct(rng: &mut ChaCha8Rng, pool: &[&str], count: usize) -> Vec<String> {
    let mut remaining: Vec<&str> = pool.to_vec();
    let mut chosen = Vec::with_capacity(count.min(remaining.len()));
    while chosen.len() < count && !remaining.is_empty() {
        let index = rng.random_range(0..remaining.len());
        chosen.push(remaining.swap_remove(index).to_owned());
    }
    chosen
}

#[cfg(test)]
mod tests {
    //! Regression coverage for deterministic generation.

    use chrono::{TimeZone, Utc};
    use rstest::rstest;

    use super::*;
    use crate::validation::validate_users;

    fn frozen_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).single().expect("valid timestamp")
    }

    #[rstest]
    fn same_seed_produces_identical_output() {
        let now = frozen_now();
        assert_eq!(generate_candidates(7, 20, now), generate_candidates(7, 20, now));
    }

    #[rstest]
    fn different_seeds_diverge() {
        let now = frozen_now();
        assert_ne!(generate_candidates(7, 20, now), generate_candidates(8, 20, now));
    }

    #[rstest]
    fn generated_candidates_satisfy_invariants() {
        let users = generate_candidates(42, 50, frozen_now());
        assert_eq!(users.len(), 50);
        validate_users(&users).expect("generated candidates are valid");
    }

    #[rstest]
    fn generated_ids_avoid_the_curated_range() {
        let users = generate_candidates(42, 5, frozen_now());
        assert!(users.iter().all(|u| u.id >= GENERATED_ID_BASE));
    }

    #[rstest]
    fn skills_are_distinct_per_candidate() {
        for user in generate_candidates(9, 30, frozen_now()) {
            let skills = user.skills.expect("candidates carry skills");
            let mut deduped = skills.clone();
            deduped.sort();
            deduped.dedup();
            assert_eq!(skills.len(), deduped.len());
        }
    }
}
