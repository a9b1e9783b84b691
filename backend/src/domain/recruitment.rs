//! Recruitment record model: the admin-managed job posting.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Maximum accepted title length in characters.
pub const TITLE_MAX: usize = 120;

/// Validation errors for [`RecruitmentDraft::validate`] and record construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecruitmentValidationError {
    EmptyTitle,
    TitleTooLong { max: usize },
    EmptyCategory,
    BlankStackEntry { index: usize },
    UpdatedBeforeCreated,
}

impl fmt::Display for RecruitmentValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "title must not be empty"),
            Self::TitleTooLong { max } => write!(f, "title must be at most {max} characters"),
            Self::EmptyCategory => write!(f, "category must not be empty"),
            Self::BlankStackEntry { index } => write!(f, "stack entry {index} must not be blank"),
            Self::UpdatedBeforeCreated => write!(f, "updatedAt must not precede createdAt"),
        }
    }
}

impl std::error::Error for RecruitmentValidationError {}

/// Client-supplied fields of a recruitment record.
///
/// This is the unit of schema validation: a draft is validated before any
/// store call is issued, and an invalid draft never reaches an adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecruitmentDraft {
    /// Non-blank, at most [`TITLE_MAX`] characters.
    pub title: String,
    /// Non-blank category label (e.g. `Engineering`).
    pub category: String,
    /// Optional reference to a company by id; informational only.
    pub company_id: Option<u64>,
    /// Ordered list of non-blank technology names.
    #[serde(default)]
    pub stack: Vec<String>,
    /// Whether the posting is visible to candidates.
    pub is_active: bool,
}

impl RecruitmentDraft {
    /// Check the draft against the declared schema.
    pub fn validate(&self) -> Result<(), RecruitmentValidationError> {
        if self.title.trim().is_empty() {
            return Err(RecruitmentValidationError::EmptyTitle);
        }
        if self.title.chars().count() > TITLE_MAX {
            return Err(RecruitmentValidationError::TitleTooLong { max: TITLE_MAX });
        }
        if self.category.trim().is_empty() {
            return Err(RecruitmentValidationError::EmptyCategory);
        }
        for (index, entry) in self.stack.iter().enumerate() {
            if entry.trim().is_empty() {
                return Err(RecruitmentValidationError::BlankStackEntry { index });
            }
        }
        Ok(())
    }
}

/// A stored recruitment record.
///
/// ## Invariants
/// - The draft portion satisfies [`RecruitmentDraft::validate`].
/// - `updated_at >= created_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(try_from = "RecruitmentDto", into = "RecruitmentDto")]
pub struct Recruitment {
    id: u64,
    title: String,
    category: String,
    company_id: Option<u64>,
    stack: Vec<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Recruitment {
    /// Assemble a record from a validated draft and store-assigned fields.
    pub fn from_draft(
        id: u64,
        draft: RecruitmentDraft,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Result<Self, RecruitmentValidationError> {
        draft.validate()?;
        if updated_at < created_at {
            return Err(RecruitmentValidationError::UpdatedBeforeCreated);
        }
        Ok(Self {
            id,
            title: draft.title,
            category: draft.category,
            company_id: draft.company_id,
            stack: draft.stack,
            is_active: draft.is_active,
            created_at,
            updated_at,
        })
    }

    /// Store-assigned numeric identifier.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Posting title.
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Category label.
    pub fn category(&self) -> &str {
        self.category.as_str()
    }

    /// Referenced company id, when the posting belongs to one.
    pub fn company_id(&self) -> Option<u64> {
        self.company_id
    }

    /// Technology stack named by the posting.
    pub fn stack(&self) -> &[String] {
        self.stack.as_slice()
    }

    /// Whether the posting is visible to candidates.
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Creation timestamp.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Last-modified timestamp; never precedes [`Self::created_at`].
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// The client-editable portion of the record.
    pub fn draft(&self) -> RecruitmentDraft {
        RecruitmentDraft {
            title: self.title.clone(),
            category: self.category.clone(),
            company_id: self.company_id,
            stack: self.stack.clone(),
            is_active: self.is_active,
        }
    }

    /// Case-insensitive match over title, category, and stack entries.
    pub fn matches(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.category.to_lowercase().contains(&needle)
            || self
                .stack
                .iter()
                .any(|entry| entry.to_lowercase().contains(&needle))
    }

    /// Return a copy with the active flag set and `updated_at` bumped.
    #[must_use]
    pub fn with_active(mut self, active: bool, updated_at: DateTime<Utc>) -> Self {
        self.is_active = active;
        self.updated_at = updated_at.max(self.created_at);
        self
    }

    /// Return a copy with the draft portion replaced and `updated_at` bumped.
    ///
    /// The caller must have validated the draft; `id` and `created_at` are
    /// preserved.
    #[must_use]
    pub fn with_draft(self, draft: RecruitmentDraft, updated_at: DateTime<Utc>) -> Self {
        Self {
            id: self.id,
            title: draft.title,
            category: draft.category,
            company_id: draft.company_id,
            stack: draft.stack,
            is_active: draft.is_active,
            created_at: self.created_at,
            updated_at: updated_at.max(self.created_at),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
struct RecruitmentDto {
    id: u64,
    title: String,
    category: String,
    company_id: Option<u64>,
    #[serde(default)]
    stack: Vec<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<Recruitment> for RecruitmentDto {
    fn from(value: Recruitment) -> Self {
        let Recruitment {
            id,
            title,
            category,
            company_id,
            stack,
            is_active,
            created_at,
            updated_at,
        } = value;
        Self {
            id,
            title,
            category,
            company_id,
            stack,
            is_active,
            created_at,
            updated_at,
        }
    }
}

impl TryFrom<RecruitmentDto> for Recruitment {
    type Error = RecruitmentValidationError;

    fn try_from(value: RecruitmentDto) -> Result<Self, Self::Error> {
        let RecruitmentDto {
            id,
            title,
            category,
            company_id,
            stack,
            is_active,
            created_at,
            updated_at,
        } = value;
        Recruitment::from_draft(
            id,
            RecruitmentDraft {
                title,
                category,
                company_id,
                stack,
                is_active,
            },
            created_at,
            updated_at,
        )
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for the recruitment model.

    use chrono::{Duration, TimeZone};
    use rstest::rstest;

    use super::*;

    fn frozen_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0)
            .single()
            .expect("valid timestamp")
    }

    fn draft() -> RecruitmentDraft {
        RecruitmentDraft {
            title: "Senior Backend Engineer".to_owned(),
            category: "Engineering".to_owned(),
            company_id: Some(1),
            stack: vec!["Rust".to_owned(), "PostgreSQL".to_owned()],
            is_active: true,
        }
    }

    #[rstest]
    fn accepts_a_valid_draft() {
        draft().validate().expect("valid draft");
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn rejects_blank_titles(#[case] title: &str) {
        let mut value = draft();
        value.title = title.to_owned();
        assert_eq!(value.validate(), Err(RecruitmentValidationError::EmptyTitle));
    }

    #[rstest]
    fn rejects_over_long_titles() {
        let mut value = draft();
        value.title = "x".repeat(TITLE_MAX + 1);
        assert_eq!(
            value.validate(),
            Err(RecruitmentValidationError::TitleTooLong { max: TITLE_MAX })
        );
    }

    #[rstest]
    fn rejects_blank_categories() {
        let mut value = draft();
        value.category = " ".to_owned();
        assert_eq!(value.validate(), Err(RecruitmentValidationError::EmptyCategory));
    }

    #[rstest]
    fn rejects_blank_stack_entries() {
        let mut value = draft();
        value.stack.push(String::new());
        assert_eq!(
            value.validate(),
            Err(RecruitmentValidationError::BlankStackEntry { index: 2 })
        );
    }

    #[rstest]
    fn from_draft_rejects_updated_before_created() {
        let now = frozen_now();
        assert_eq!(
            Recruitment::from_draft(1, draft(), now, now - Duration::seconds(1)),
            Err(RecruitmentValidationError::UpdatedBeforeCreated)
        );
    }

    #[rstest]
    #[case("rust", true)]
    #[case("BACKEND", true)]
    #[case("engineering", true)]
    #[case("postgres", true)]
    #[case("flutter", false)]
    fn search_matches_title_category_and_stack(#[case] needle: &str, #[case] expected: bool) {
        let now = frozen_now();
        let record = Recruitment::from_draft(1, draft(), now, now).expect("valid record");
        assert_eq!(record.matches(needle), expected);
    }

    #[rstest]
    fn with_active_flips_only_the_flag() {
        let now = frozen_now();
        let record = Recruitment::from_draft(1, draft(), now, now).expect("valid record");
        let later = now + Duration::minutes(5);
        let toggled = record.clone().with_active(false, later);
        assert!(!toggled.is_active());
        assert_eq!(toggled.title(), record.title());
        assert_eq!(toggled.created_at(), record.created_at());
        assert_eq!(toggled.updated_at(), later);
    }

    #[rstest]
    fn with_draft_preserves_id_and_created_at() {
        let now = frozen_now();
        let record = Recruitment::from_draft(7, draft(), now, now).expect("valid record");
        let mut replacement = draft();
        replacement.title = "Staff Engineer".to_owned();
        let later = now + Duration::hours(1);
        let updated = record.clone().with_draft(replacement, later);
        assert_eq!(updated.id(), 7);
        assert_eq!(updated.created_at(), now);
        assert_eq!(updated.title(), "Staff Engineer");
        assert_eq!(updated.updated_at(), later);
    }

    #[rstest]
    fn round_trips_through_json() {
        let now = frozen_now();
        let record = Recruitment::from_draft(3, draft(), now - Duration::days(2), now)
            .expect("valid record");
        let json = serde_json::to_string(&record).expect("serialises");
        let parsed: Recruitment = serde_json::from_str(&json).expect("deserialises");
        assert_eq!(parsed, record);
    }
}
