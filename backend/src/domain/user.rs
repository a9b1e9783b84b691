//! User data model.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Validation errors returned by [`User::new`] and the wire conversions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    InvalidEmail,
    EmptyName,
    EmptyLocation,
    /// Candidate-only profile fields supplied for an employer or admin.
    ProfileOnNonCandidate { role: UserRole },
    BlankSkill { index: usize },
    UpdatedBeforeCreated,
    UnknownRole { value: String },
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEmail => write!(f, "email must have the shape local@domain"),
            Self::EmptyName => write!(f, "name must not be empty"),
            Self::EmptyLocation => write!(f, "location must not be empty"),
            Self::ProfileOnNonCandidate { role } => {
                write!(f, "profile fields are not allowed for role {role}")
            }
            Self::BlankSkill { index } => write!(f, "skills entry {index} must not be blank"),
            Self::UpdatedBeforeCreated => {
                write!(f, "updatedAt must not precede createdAt")
            }
            Self::UnknownRole { value } => {
                write!(f, "role must be candidate, employer, or admin (got {value})")
            }
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Which UI surface applies to a user. Immutable in normal operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Candidate,
    Employer,
    Admin,
}

impl UserRole {
    /// Wire value for the role.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Candidate => "candidate",
            Self::Employer => "employer",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = UserValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "candidate" => Ok(Self::Candidate),
            "employer" => Ok(Self::Employer),
            "admin" => Ok(Self::Admin),
            other => Err(UserValidationError::UnknownRole {
                value: other.to_owned(),
            }),
        }
    }
}

/// Profile fields meaningful only for candidates.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CandidateProfile {
    pub headline: Option<String>,
    /// Ordered list of skill names; entries must be non-blank.
    pub skills: Vec<String>,
    pub experience_years: Option<u8>,
}

impl CandidateProfile {
    fn is_empty(&self) -> bool {
        self.headline.is_none() && self.skills.is_empty() && self.experience_years.is_none()
    }
}

/// Unvalidated field bundle accepted by [`User::new`].
#[derive(Debug, Clone)]
pub struct UserDraft {
    pub id: u64,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    /// Must be `None` unless `role` is [`UserRole::Candidate`].
    pub profile: Option<CandidateProfile>,
    pub location: String,
    pub profile_picture: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Application user.
///
/// ## Invariants
/// - `email` has the shape `local@domain` with both sides non-empty.
/// - `name` and `location` are non-blank.
/// - Only candidates carry a [`CandidateProfile`].
/// - `updated_at >= created_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "UserDto", into = "UserDto")]
pub struct User {
    id: u64,
    email: String,
    name: String,
    role: UserRole,
    profile: Option<CandidateProfile>,
    location: String,
    profile_picture: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

fn validate_email(email: &str) -> Result<(), UserValidationError> {
    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();
    if local.is_empty() || domain.is_empty() {
        return Err(UserValidationError::InvalidEmail);
    }
    Ok(())
}

impl User {
    /// Fallible constructor enforcing every documented invariant.
    pub fn new(draft: UserDraft) -> Result<Self, UserValidationError> {
        validate_email(&draft.email)?;
        if draft.name.trim().is_empty() {
            return Err(UserValidationError::EmptyName);
        }
        if draft.location.trim().is_empty() {
            return Err(UserValidationError::EmptyLocation);
        }
        if let Some(profile) = &draft.profile {
            if draft.role != UserRole::Candidate && !profile.is_empty() {
                return Err(UserValidationError::ProfileOnNonCandidate { role: draft.role });
            }
            for (index, skill) in profile.skills.iter().enumerate() {
                if skill.trim().is_empty() {
                    return Err(UserValidationError::BlankSkill { index });
                }
            }
        }
        if draft.updated_at < draft.created_at {
            return Err(UserValidationError::UpdatedBeforeCreated);
        }

        let profile = match draft.role {
            UserRole::Candidate => draft.profile,
            UserRole::Employer | UserRole::Admin => None,
        };

        Ok(Self {
            id: draft.id,
            email: draft.email,
            name: draft.name,
            role: draft.role,
            profile,
            location: draft.location,
            profile_picture: draft.profile_picture,
            is_active: draft.is_active,
            created_at: draft.created_at,
            updated_at: draft.updated_at,
        })
    }

    /// Stable numeric identifier, immutable after creation.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Unique email address.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Display name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Role determining which UI surface applies.
    pub fn role(&self) -> UserRole {
        self.role
    }

    /// Candidate profile; always `None` for employers and admins.
    pub fn profile(&self) -> Option<&CandidateProfile> {
        self.profile.as_ref()
    }

    /// City the user is based in.
    pub fn location(&self) -> &str {
        self.location.as_str()
    }

    /// Avatar URL, when one has been uploaded.
    pub fn profile_picture(&self) -> Option<&str> {
        self.profile_picture.as_deref()
    }

    /// Whether the account is active.
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
}

/// Flat wire shape. Candidate-only fields sit at the top level so clients see
/// the same layout whether or not a profile exists.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
struct UserDto {
    id: u64,
    email: String,
    name: String,
    role: UserRole,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    headline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    skills: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    experience_years: Option<u8>,
    location: String,
    profile_picture: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(value: User) -> Self {
        let User {
            id,
            email,
            name,
            role,
            profile,
            location,
            profile_picture,
            is_active,
            created_at,
            updated_at,
        } = value;
        let (headline, skills, experience_years) = match profile {
            Some(profile) => (
                profile.headline,
                Some(profile.skills),
                profile.experience_years,
            ),
            None => (None, None, None),
        };
        Self {
            id,
            email,
            name,
            role,
            headline,
            skills,
            experience_years,
            location,
            profile_picture,
            is_active,
            created_at,
            updated_at,
        }
    }
}

impl TryFrom<UserDto> for User {
    type Error = UserValidationError;

    fn try_from(value: UserDto) -> Result<Self, Self::Error> {
        let UserDto {
            id,
            email,
            name,
            role,
            headline,
            skills,
            experience_years,
            location,
            profile_picture,
            is_active,
            created_at,
            updated_at,
        } = value;

        let profile = if headline.is_some() || skills.is_some() || experience_years.is_some() {
            Some(CandidateProfile {
                headline,
                skills: skills.unwrap_or_default(),
                experience_years,
            })
        } else {
            None
        };

        User::new(UserDraft {
            id,
            email,
            name,
            role,
            profile,
            location,
            profile_picture,
            is_active,
            created_at,
            updated_at,
        })
    }
}

// The wire flattens the candidate profile, so the derived schema for the
// struct would misstate responses. Delegate to the DTO instead.
impl utoipa::PartialSchema for User {
    fn schema() -> utoipa::openapi::RefOr<utoipa::openapi::schema::Schema> {
        <UserDto as utoipa::PartialSchema>::schema()
    }
}

impl ToSchema for User {
    fn name() -> std::borrow::Cow<'static, str> {
        std::borrow::Cow::Borrowed("User")
    }

    fn schemas(
        schemas: &mut Vec<(
            String,
            utoipa::openapi::RefOr<utoipa::openapi::schema::Schema>,
        )>,
    ) {
        <UserDto as ToSchema>::schemas(schemas);
    }
}
