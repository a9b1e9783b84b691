//! Backend entry-point: wires REST endpoints, health probes, and OpenAPI docs.

use std::sync::Arc;

use actix_web::web;
use mockable::Clock;
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use workmongolia_backend::inbound::http::health::HealthState;
use workmongolia_backend::inbound::http::state::{HttpState, HttpStatePorts};
use workmongolia_backend::outbound::{InMemoryDirectory, InMemoryRecruitmentStore};
use workmongolia_backend::server::{ServerSettings, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = ServerSettings::load()
        .map_err(std::io::Error::other)?
        .into_config()
        .map_err(std::io::Error::other)?;

    let clock: Arc<dyn Clock> = Arc::new(mockable::DefaultClock);
    let ports = build_ports(clock)?;
    let state = HttpState::with_request_timeout(ports, config.request_timeout());

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config, state)?;
    server.await
}

#[cfg(feature = "example-data")]
fn build_ports(clock: Arc<dyn Clock>) -> std::io::Result<HttpStatePorts> {
    use workmongolia_backend::example_data::{ExampleDataSettings, build_example_data};

    let settings = ExampleDataSettings::load().map_err(std::io::Error::other)?;
    if !settings.enabled {
        return Ok(empty_ports(clock));
    }

    let bundle = build_example_data(&settings, clock.utc()).map_err(std::io::Error::other)?;
    let directory = Arc::new(InMemoryDirectory::new(bundle.users, bundle.companies));
    Ok(HttpStatePorts {
        recruitments: Arc::new(InMemoryRecruitmentStore::with_records(
            bundle.recruitments,
            clock,
        )),
        users: directory.clone(),
        companies: directory,
    })
}

#[cfg(not(feature = "example-data"))]
fn build_ports(clock: Arc<dyn Clock>) -> std::io::Result<HttpStatePorts> {
    Ok(empty_ports(clock))
}

fn empty_ports(clock: Arc<dyn Clock>) -> HttpStatePorts {
    let directory = Arc::new(InMemoryDirectory::new(Vec::new(), Vec::new()));
    HttpStatePorts {
        recruitments: Arc::new(InMemoryRecruitmentStore::new(clock)),
        users: directory.clone(),
        companies: directory,
    }
}
