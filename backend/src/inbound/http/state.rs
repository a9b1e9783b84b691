//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::ports::{CompaniesQuery, RecruitmentStore, UsersQuery};

/// Upper bound applied to every port call issued by a handler.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Parameter object bundling all port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub recruitments: Arc<dyn RecruitmentStore>,
    pub users: Arc<dyn UsersQuery>,
    pub companies: Arc<dyn CompaniesQuery>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub recruitments: Arc<dyn RecruitmentStore>,
    pub users: Arc<dyn UsersQuery>,
    pub companies: Arc<dyn CompaniesQuery>,
    request_timeout: Duration,
}

impl HttpState {
    /// Construct state from a ports bundle with the default request timeout.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use workmongolia_backend::domain::ports::{
    ///     FixtureCompaniesQuery, FixtureRecruitmentStore, FixtureUsersQuery,
    /// };
    /// use workmongolia_backend::inbound::http::state::{HttpState, HttpStatePorts};
    ///
    /// let state = HttpState::new(HttpStatePorts {
    ///     recruitments: Arc::new(FixtureRecruitmentStore),
    ///     users: Arc::new(FixtureUsersQuery),
    ///     companies: Arc::new(FixtureCompaniesQuery),
    /// });
    /// let _store = state.recruitments.clone();
    /// ```
    #[must_use]
    pub fn new(ports: HttpStatePorts) -> Self {
        Self::with_request_timeout(ports, DEFAULT_REQUEST_TIMEOUT)
    }

    /// Construct state with an explicit request timeout.
    #[must_use]
    pub fn with_request_timeout(ports: HttpStatePorts, request_timeout: Duration) -> Self {
        let HttpStatePorts {
            recruitments,
            users,
            companies,
        } = ports;
        Self {
            recruitments,
            users,
            companies,
            request_timeout,
        }
    }

    /// Budget applied to each outbound port call.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }
}
