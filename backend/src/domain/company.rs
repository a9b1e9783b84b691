//! Company data model.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Validation errors returned by [`Company::new`] and the wire conversions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompanyValidationError {
    EmptyName,
    EmptyIndustry,
    UpdatedBeforeCreated,
    UnknownSize { value: String },
}

impl fmt::Display for CompanyValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "company name must not be empty"),
            Self::EmptyIndustry => write!(f, "industry must not be empty"),
            Self::UpdatedBeforeCreated => write!(f, "updatedAt must not precede createdAt"),
            Self::UnknownSize { value } => {
                write!(f, "size must be small, medium, or large (got {value})")
            }
        }
    }
}

impl std::error::Error for CompanyValidationError {}

/// Company head-count bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CompanySize {
    Small,
    Medium,
    Large,
}

impl CompanySize {
    /// Wire value for the size bracket.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

impl fmt::Display for CompanySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompanySize {
    type Err = CompanyValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small" => Ok(Self::Small),
            "medium" => Ok(Self::Medium),
            "large" => Ok(Self::Large),
            other => Err(CompanyValidationError::UnknownSize {
                value: other.to_owned(),
            }),
        }
    }
}

/// Unvalidated field bundle accepted by [`Company::new`].
#[derive(Debug, Clone)]
pub struct CompanyDraft {
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

/// A company posting jobs on the board.
///
/// ## Invariants
/// - `id` is stable once assigned.
/// - `name` and `industry` are non-blank.
/// - `updated_at >= created_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(try_from = "CompanyDto", into = "CompanyDto")]
pub struct Company {
    id: u64,
    name: String,
    industry: String,
    size: CompanySize,
    location: String,
    description: String,
    logo_url: Option<String>,
    website_url: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Company {
    /// Fallible constructor enforcing every documented invariant.
    pub fn new(draft: CompanyDraft) -> Result<Self, CompanyValidationError> {
        if draft.name.trim().is_empty() {
            return Err(CompanyValidationError::EmptyName);
        }
        if draft.industry.trim().is_empty() {
            return Err(CompanyValidationError::EmptyIndustry);
        }
        if draft.updated_at < draft.created_at {
            return Err(CompanyValidationError::UpdatedBeforeCreated);
        }
        Ok(Self {
            id: draft.id,
            name: draft.name,
            industry: draft.industry,
            size: draft.size,
            location: draft.location,
            description: draft.description,
            logo_url: draft.logo_url,
            website_url: draft.website_url,
            created_at: draft.created_at,
            updated_at: draft.updated_at,
        })
    }

    /// Stable numeric identifier.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Industry label.
    pub fn industry(&self) -> &str {
        self.industry.as_str()
    }

    /// Head-count bracket.
    pub fn size(&self) -> CompanySize {
        self.size
    }

    /// City of the main office.
    pub fn location(&self) -> &str {
        self.location.as_str()
    }

    /// Free-form description shown on the company page.
    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    /// Logo URL, when one exists.
    pub fn logo_url(&self) -> Option<&str> {
        self.logo_url.as_deref()
    }

    /// Company website, when known.
    pub fn website_url(&self) -> Option<&str> {
        self.website_url.as_deref()
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

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
struct CompanyDto {
    id: u64,
    name: String,
    industry: String,
    size: CompanySize,
    location: String,
    description: String,
    logo_url: Option<String>,
    website_url: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<Company> for CompanyDto {
    fn from(value: Company) -> Self {
        let Company {
            id,
            name,
            industry,
            size,
            location,
            description,
            logo_url,
            website_url,
            created_at,
            updated_at,
        } = value;
        Self {
            id,
            name,
            industry,
            size,
            location,
            description,
            logo_url,
            website_url,
            created_at,
            updated_at,
        }
    }
}

impl TryFrom<CompanyDto> for Company {
    type Error = CompanyValidationError;

    fn try_from(value: CompanyDto) -> Result<Self, Self::Error> {
        let CompanyDto {
            id,
            name,
            industry,
            size,
            location,
            description,
            logo_url,
            website_url,
            created_at,
            updated_at,
        } = value;
        Company::new(CompanyDraft {
            id,
            name,
            industry,
            size,
            location,
            description,
            logo_url,
            website_url,
            created_at,
            updated_at,
        })
    }
}
