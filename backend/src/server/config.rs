//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::inbound::http::state::DEFAULT_REQUEST_TIMEOUT;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Settings loaded from the environment, CLI, and configuration files.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "WORKMONGOLIA")]
pub struct ServerSettings {
    /// Socket address the server binds to.
    pub bind_addr: Option<String>,
    /// Budget in seconds applied to each outbound port call.
    pub request_timeout_secs: Option<u64>,
}

/// Errors raised while resolving settings into a [`ServerConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ServerConfigError {
    /// The bind address could not be parsed as `host:port`.
    #[error("invalid bind address {addr:?}: {source}")]
    InvalidBindAddr {
        addr: String,
        #[source]
        source: std::net::AddrParseError,
    },
    /// A zero timeout would fail every request.
    #[error("request timeout must be at least one second")]
    ZeroTimeout,
}

impl ServerSettings {
    /// Resolve the loaded settings into a validated configuration.
    pub fn into_config(self) -> Result<ServerConfig, ServerConfigError> {
        let addr = self
            .bind_addr
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_owned());
        let bind_addr: SocketAddr =
            addr.parse()
                .map_err(|source| ServerConfigError::InvalidBindAddr { addr, source })?;
        let request_timeout = match self.request_timeout_secs {
            None => DEFAULT_REQUEST_TIMEOUT,
            Some(0) => return Err(ServerConfigError::ZeroTimeout),
            Some(secs) => Duration::from_secs(secs),
        };
        Ok(ServerConfig {
            bind_addr,
            request_timeout,
        })
    }
}

/// Validated configuration for creating the HTTP server.
#[derive(Debug, Clone, Copy)]
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) request_timeout: Duration,
}

impl ServerConfig {
    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Return the per-call request timeout.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings resolution.

    use rstest::rstest;

    use super::*;

    fn settings(bind_addr: Option<&str>, timeout: Option<u64>) -> ServerSettings {
        ServerSettings {
            bind_addr: bind_addr.map(str::to_owned),
            request_timeout_secs: timeout,
        }
    }

    #[rstest]
    fn defaults_apply_when_nothing_is_set() {
        let config = settings(None, None).into_config().expect("valid config");
        assert_eq!(config.bind_addr().port(), 8080);
        assert_eq!(config.request_timeout(), DEFAULT_REQUEST_TIMEOUT);
    }

    #[rstest]
    fn explicit_values_are_honoured() {
        let config = settings(Some("127.0.0.1:9999"), Some(3))
            .into_config()
            .expect("valid config");
        assert_eq!(config.bind_addr().port(), 9999);
        assert_eq!(config.request_timeout(), Duration::from_secs(3));
    }

    #[rstest]
    fn malformed_bind_addr_is_rejected() {
        let err = settings(Some("not-an-addr"), None)
            .into_config()
            .expect_err("invalid addr");
        assert!(matches!(err, ServerConfigError::InvalidBindAddr { .. }));
    }

    #[rstest]
    fn zero_timeout_is_rejected() {
        let err = settings(None, Some(0)).into_config().expect_err("zero timeout");
        assert!(matches!(err, ServerConfigError::ZeroTimeout));
    }
}
