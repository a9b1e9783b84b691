//! Read-only directory ports feeding candidate and employer pages.

use async_trait::async_trait;

use crate::domain::{Company, User};

/// Errors raised by directory query adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DirectoryError {
    /// The data source could not be reached or the call timed out.
    #[error("directory unavailable: {message}")]
    Unavailable { message: String },
}

impl DirectoryError {
    /// Construct a [`DirectoryError::Unavailable`].
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}

/// Ordered, read-only view over the user collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Return every known user in id order.
    async fn list_users(&self) -> Result<Vec<User>, DirectoryError>;
}

/// Ordered, read-only view over the company collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompaniesQuery: Send + Sync {
    /// Return every known company in id order.
    async fn list_companies(&self) -> Result<Vec<Company>, DirectoryError>;
}

/// Fixture implementation for tests that do not exercise the directory.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUsersQuery;

#[async_trait]
impl UsersQuery for FixtureUsersQuery {
    async fn list_users(&self) -> Result<Vec<User>, DirectoryError> {
        Ok(Vec::new())
    }
}

/// Fixture implementation for tests that do not exercise the directory.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCompaniesQuery;

#[async_trait]
impl CompaniesQuery for FixtureCompaniesQuery {
    async fn list_companies(&self) -> Result<Vec<Company>, DirectoryError> {
        Ok(Vec::new())
    }
}
