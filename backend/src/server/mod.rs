//! Server construction and middleware wiring.

mod config;

pub use config::{ServerConfig, ServerConfigError, ServerSettings};

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::inbound::http::directory::{list_companies, list_users};
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::recruitments::{
    create_recruitment, delete_recruitment, get_recruitment, list_recruitments,
    set_recruitment_active, update_recruitment,
};
use crate::inbound::http::state::HttpState;
use crate::middleware::Trace;

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
    } = deps;

    let api = web::scope("/api/v1")
        .service(list_recruitments)
        .service(get_recruitment)
        .service(create_recruitment)
        .service(update_recruitment)
        .service(delete_recruitment)
        .service(set_recruitment_active)
        .service(list_users)
        .service(list_companies);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Construct an Actix HTTP server from the provided state and configuration.
///
/// The health state flips to ready once the listener is bound.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
    state: HttpState,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = web::Data::new(state);

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
        })
    })
    .bind(config.bind_addr())?
    .run();

    health_state.mark_ready();
    Ok(server)
}

#[cfg(test)]
mod tests {
    //! Smoke tests over the assembled application.

    use std::sync::Arc;

    use actix_web::test as actix_test;
    use rstest::rstest;

    use super::*;
    use crate::domain::TRACE_ID_HEADER;
    use crate::domain::ports::{
        FixtureCompaniesQuery, FixtureRecruitmentStore, FixtureUsersQuery,
    };
    use crate::inbound::http::state::HttpStatePorts;

    fn fixture_state() -> HttpState {
        HttpState::new(HttpStatePorts {
            recruitments: Arc::new(FixtureRecruitmentStore),
            users: Arc::new(FixtureUsersQuery),
            companies: Arc::new(FixtureCompaniesQuery),
        })
    }

    #[rstest]
    #[actix_web::test]
    async fn assembled_app_serves_recruitments_and_health() {
        let health_state = web::Data::new(HealthState::new());
        health_state.mark_ready();
        let app = actix_test::init_service(build_app(AppDependencies {
            health_state,
            http_state: web::Data::new(fixture_state()),
        }))
        .await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/recruitments")
                .to_request(),
        )
        .await;
        assert!(response.status().is_success());
        assert!(response.headers().contains_key(TRACE_ID_HEADER));

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/health/ready")
                .to_request(),
        )
        .await;
        assert!(response.status().is_success());
    }
}
