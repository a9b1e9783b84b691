//! Domain ports and supporting types for the hexagonal boundary.

mod directory;
mod recruitment_store;

#[cfg(test)]
pub use directory::{MockCompaniesQuery, MockUsersQuery};
pub use directory::{
    CompaniesQuery, DirectoryError, FixtureCompaniesQuery, FixtureUsersQuery, UsersQuery,
};
#[cfg(test)]
pub use recruitment_store::MockRecruitmentStore;
pub use recruitment_store::{FixtureRecruitmentStore, RecruitmentStore, RecruitmentStoreError};
