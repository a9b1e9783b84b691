//! Port abstraction for recruitment storage adapters and their errors.

use async_trait::async_trait;

use crate::domain::{Recruitment, RecruitmentDraft};

/// Storage errors raised by recruitment store adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecruitmentStoreError {
    /// The addressed record no longer exists (stale reference).
    #[error("recruitment {id} does not exist")]
    NotFound { id: u64 },
    /// The store could not be reached or the call timed out.
    #[error("recruitment store unavailable: {message}")]
    Unavailable { message: String },
    /// Query or mutation failed during execution.
    #[error("recruitment store query failed: {message}")]
    Query { message: String },
}

impl RecruitmentStoreError {
    /// Construct a [`RecruitmentStoreError::Unavailable`].
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Construct a [`RecruitmentStoreError::Query`].
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Injectable data source for recruitment records.
///
/// Drafts crossing this boundary are already validated; adapters assign ids
/// and timestamps. Mutations are last-write-wins between concurrent sessions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecruitmentStore: Send + Sync {
    /// Return the ordered record set, optionally filtered by a
    /// case-insensitive search over title, category, and stack.
    async fn list<'a>(
        &self,
        search: Option<&'a str>,
    ) -> Result<Vec<Recruitment>, RecruitmentStoreError>;

    /// Fetch a record by id.
    async fn find_by_id(&self, id: u64) -> Result<Option<Recruitment>, RecruitmentStoreError>;

    /// Persist a new record, assigning its id and timestamps.
    async fn create(&self, draft: RecruitmentDraft)
    -> Result<Recruitment, RecruitmentStoreError>;

    /// Replace the draft portion of an existing record.
    async fn update(
        &self,
        id: u64,
        draft: RecruitmentDraft,
    ) -> Result<Recruitment, RecruitmentStoreError>;

    /// Remove a record.
    async fn delete(&self, id: u64) -> Result<(), RecruitmentStoreError>;

    /// Flip exactly the addressed record's active flag.
    async fn set_active(&self, id: u64, active: bool)
    -> Result<Recruitment, RecruitmentStoreError>;
}

/// Fixture implementation for tests that do not exercise storage.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureRecruitmentStore;

#[async_trait]
impl RecruitmentStore for FixtureRecruitmentStore {
    async fn list<'a>(
        &self,
        _search: Option<&'a str>,
    ) -> Result<Vec<Recruitment>, RecruitmentStoreError> {
        Ok(Vec::new())
    }

    async fn find_by_id(&self, _id: u64) -> Result<Option<Recruitment>, RecruitmentStoreError> {
        Ok(None)
    }

    async fn create(
        &self,
        draft: RecruitmentDraft,
    ) -> Result<Recruitment, RecruitmentStoreError> {
        let epoch = chrono::DateTime::UNIX_EPOCH;
        Recruitment::from_draft(1, draft, epoch, epoch)
            .map_err(|err| RecruitmentStoreError::query(err.to_string()))
    }

    async fn update(
        &self,
        id: u64,
        _draft: RecruitmentDraft,
    ) -> Result<Recruitment, RecruitmentStoreError> {
        Err(RecruitmentStoreError::NotFound { id })
    }

    async fn delete(&self, id: u64) -> Result<(), RecruitmentStoreError> {
        Err(RecruitmentStoreError::NotFound { id })
    }

    async fn set_active(
        &self,
        id: u64,
        _active: bool,
    ) -> Result<Recruitment, RecruitmentStoreError> {
        Err(RecruitmentStoreError::NotFound { id })
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[tokio::test]
    async fn fixture_list_returns_empty() {
        let store = FixtureRecruitmentStore;
        let records = store.list(None).await.expect("fixture list succeeds");
        assert!(records.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_mutations_report_stale_targets() {
        let store = FixtureRecruitmentStore;
        assert_eq!(
            store.delete(3).await,
            Err(RecruitmentStoreError::NotFound { id: 3 })
        );
        assert_eq!(
            store.set_active(3, true).await.expect_err("no record"),
            RecruitmentStoreError::NotFound { id: 3 }
        );
    }
}
