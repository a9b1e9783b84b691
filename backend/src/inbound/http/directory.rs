//! Directory API handlers for the seeded user and company collections.
//!
//! ```text
//! GET /api/v1/users
//! GET /api/v1/companies
//! ```

use actix_web::{get, web};
use tracing::error;

use crate::domain::ports::DirectoryError;
use crate::domain::{Company, Error, User};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

fn map_directory_error(err: DirectoryError) -> Error {
    let DirectoryError::Unavailable { message } = err;
    error!(%message, "directory unavailable");
    Error::service_unavailable("directory unavailable")
}

/// List known users.
#[utoipa::path(
    get,
    path = "/api/v1/users",
    responses(
        (status = 200, description = "Users", body = [User]),
        (status = 503, description = "Directory unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["directory"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    let users = tokio::time::timeout(state.request_timeout(), state.users.list_users())
        .await
        .map_err(|_| Error::service_unavailable("request timed out"))?
        .map_err(map_directory_error)?;
    Ok(web::Json(users))
}

/// List known companies.
#[utoipa::path(
    get,
    path = "/api/v1/companies",
    responses(
        (status = 200, description = "Companies", body = [Company]),
        (status = 503, description = "Directory unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["directory"],
    operation_id = "listCompanies"
)]
#[get("/companies")]
pub async fn list_companies(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Company>>> {
    let companies =
        tokio::time::timeout(state.request_timeout(), state.companies.list_companies())
            .await
            .map_err(|_| Error::service_unavailable("request timed out"))?
            .map_err(map_directory_error)?;
    Ok(web::Json(companies))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{App, test as actix_test, web};
    use chrono::{TimeZone, Utc};
    use rstest::rstest;
    use serde_json::Value;

    use super::*;
    use crate::domain::ports::FixtureRecruitmentStore;
    use crate::domain::{CompanyDraft, CompanySize, UserDraft, UserRole};
    use crate::inbound::http::state::HttpStatePorts;
    use crate::outbound::InMemoryDirectory;

    fn sample_directory() -> InMemoryDirectory {
        let now = Utc
            .with_ymd_and_hms(2026, 3, 1, 12, 0, 0)
            .single()
            .expect("valid timestamp");
        let user = User::new(UserDraft {
            id: 1,
            email: "bat-erdene@example.mn".to_owned(),
            name: "Bat-Erdene Tuvshin".to_owned(),
            role: UserRole::Candidate,
            profile: None,
            location: "Ulaanbaatar".to_owned(),
            profile_picture: None,
            is_active: true,
            created_at: now,
            updated_at: now,
        })
        .expect("valid user");
        let company = Company::new(CompanyDraft {
            id: 1,
            name: "Nomadic Labs".to_owned(),
            industry: "Software".to_owned(),
            size: CompanySize::Small,
            location: "Ulaanbaatar".to_owned(),
            description: "Product studio".to_owned(),
            logo_url: None,
            website_url: None,
            created_at: now,
            updated_at: now,
        })
        .expect("valid company");
        InMemoryDirectory::new(vec![user], vec![company])
    }

    fn test_app(
        directory: Arc<InMemoryDirectory>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let state = HttpState::new(HttpStatePorts {
            recruitments: Arc::new(FixtureRecruitmentStore),
            users: directory.clone(),
            companies: directory,
        });
        App::new().app_data(web::Data::new(state)).service(
            web::scope("/api/v1")
                .service(list_users)
                .service(list_companies),
        )
    }

    #[rstest]
    #[actix_web::test]
    async fn users_serialise_with_camel_case_fields() {
        let app = actix_test::init_service(test_app(Arc::new(sample_directory()))).await;

        let request = actix_test::TestRequest::get()
            .uri("/api/v1/users")
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert!(response.status().is_success());
        let body = actix_test::read_body(response).await;
        let value: Value = serde_json::from_slice(&body).expect("users JSON");
        let first = &value.as_array().expect("array")[0];
        assert_eq!(first["name"], "Bat-Erdene Tuvshin");
        assert!(first.get("isActive").is_some());
        assert!(first.get("is_active").is_none());
    }

    #[rstest]
    #[actix_web::test]
    async fn companies_include_their_size_band() {
        let app = actix_test::init_service(test_app(Arc::new(sample_directory()))).await;

        let request = actix_test::TestRequest::get()
            .uri("/api/v1/companies")
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert!(response.status().is_success());
        let body = actix_test::read_body(response).await;
        let value: Value = serde_json::from_slice(&body).expect("companies JSON");
        let first = &value.as_array().expect("array")[0];
        assert_eq!(first["size"], "small");
        assert_eq!(first["name"], "Nomadic Labs");
    }
}
