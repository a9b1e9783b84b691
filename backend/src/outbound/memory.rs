//! In-memory adapters standing in for a real data source.
//!
//! The recruitment store keeps records behind an async `RwLock` and assigns
//! ids from a monotonic sequence. Timestamps come from an injected
//! [`Clock`] so tests can freeze time.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use mockable::Clock;
use tokio::sync::RwLock;

use crate::domain::ports::{
    CompaniesQuery, DirectoryError, RecruitmentStore, RecruitmentStoreError, UsersQuery,
};
use crate::domain::{Company, Recruitment, RecruitmentDraft, User};

/// RwLock-guarded recruitment store with a monotonic id sequence.
pub struct InMemoryRecruitmentStore {
    records: RwLock<Vec<Recruitment>>,
    next_id: AtomicU64,
    clock: Arc<dyn Clock>,
}

impl InMemoryRecruitmentStore {
    /// Create an empty store; ids start at 1.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
            clock,
        }
    }

    /// Create a store pre-populated with `records`.
    ///
    /// The id sequence continues above the highest seeded id.
    #[must_use]
    pub fn with_records(records: Vec<Recruitment>, clock: Arc<dyn Clock>) -> Self {
        let next = records.iter().map(Recruitment::id).max().unwrap_or(0) + 1;
        Self {
            records: RwLock::new(records),
            next_id: AtomicU64::new(next),
            clock,
        }
    }
}

#[async_trait]
impl RecruitmentStore for InMemoryRecruitmentStore {
    async fn list<'a>(
        &self,
        search: Option<&'a str>,
    ) -> Result<Vec<Recruitment>, RecruitmentStoreError> {
        let records = self.records.read().await;
        let filter = search.map(str::trim).filter(|s| !s.is_empty());
        Ok(records
            .iter()
            .filter(|record| filter.is_none_or(|needle| record.matches(needle)))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: u64) -> Result<Option<Recruitment>, RecruitmentStoreError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|record| record.id() == id).cloned())
    }

    async fn create(
        &self,
        draft: RecruitmentDraft,
    ) -> Result<Recruitment, RecruitmentStoreError> {
        let now = self.clock.utc();
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let record = Recruitment::from_draft(id, draft, now, now)
            .map_err(|err| RecruitmentStoreError::query(err.to_string()))?;
        let mut records = self.records.write().await;
        records.push(record.clone());
        Ok(record)
    }

    async fn update(
        &self,
        id: u64,
        draft: RecruitmentDraft,
    ) -> Result<Recruitment, RecruitmentStoreError> {
        let now = self.clock.utc();
        let mut records = self.records.write().await;
        let slot = records
            .iter_mut()
            .find(|record| record.id() == id)
            .ok_or(RecruitmentStoreError::NotFound { id })?;
        *slot = slot.clone().with_draft(draft, now);
        Ok(slot.clone())
    }

    async fn delete(&self, id: u64) -> Result<(), RecruitmentStoreError> {
        let mut records = self.records.write().await;
        let index = records
            .iter()
            .position(|record| record.id() == id)
            .ok_or(RecruitmentStoreError::NotFound { id })?;
        records.remove(index);
        Ok(())
    }

    async fn set_active(
        &self,
        id: u64,
        active: bool,
    ) -> Result<Recruitment, RecruitmentStoreError> {
        let now = self.clock.utc();
        let mut records = self.records.write().await;
        let slot = records
            .iter_mut()
            .find(|record| record.id() == id)
            .ok_or(RecruitmentStoreError::NotFound { id })?;
        *slot = slot.clone().with_active(active, now);
        Ok(slot.clone())
    }
}

/// Read-only directory over seeded user and company collections.
pub struct InMemoryDirectory {
    users: Vec<User>,
    companies: Vec<Company>,
}

impl InMemoryDirectory {
    /// Create a directory over the given collections.
    #[must_use]
    pub fn new(users: Vec<User>, companies: Vec<Company>) -> Self {
        Self { users, companies }
    }
}

#[async_trait]
impl UsersQuery for InMemoryDirectory {
    async fn list_users(&self) -> Result<Vec<User>, DirectoryError> {
        Ok(self.users.clone())
    }
}

#[async_trait]
impl CompaniesQuery for InMemoryDirectory {
    async fn list_companies(&self) -> Result<Vec<Company>, DirectoryError> {
        Ok(self.companies.clone())
    }
}
