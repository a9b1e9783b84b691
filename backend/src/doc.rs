//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct generating the OpenAPI specification for
//! the REST API: recruitment CRUD, the directory listings, and the health
//! probes. The generated document backs Swagger UI in debug builds.

use utoipa::OpenApi;

use crate::domain::{
    Company, CompanySize, Error, ErrorCode, Recruitment, RecruitmentDraft, User, UserRole,
};
use crate::inbound::http::recruitments::ToggleActiveBody;

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "WorkMongolia backend API",
        description = "HTTP interface for the job-board data set and the admin recruitment screen."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::recruitments::list_recruitments,
        crate::inbound::http::recruitments::get_recruitment,
        crate::inbound::http::recruitments::create_recruitment,
        crate::inbound::http::recruitments::update_recruitment,
        crate::inbound::http::recruitments::delete_recruitment,
        crate::inbound::http::recruitments::set_recruitment_active,
        crate::inbound::http::directory::list_users,
        crate::inbound::http::directory::list_companies,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Recruitment,
        RecruitmentDraft,
        ToggleActiveBody,
        User,
        UserRole,
        Company,
        CompanySize,
        Error,
        ErrorCode,
    )),
    tags(
        (name = "recruitments", description = "Admin recruitment record management"),
        (name = "directory", description = "Seeded user and company listings"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying OpenAPI schema field structure.

    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    use super::*;

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[test]
    fn openapi_recruitment_schema_has_required_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let schema = schemas.get("Recruitment").expect("Recruitment schema");

        assert_object_schema_has_field(schema, "id");
        assert_object_schema_has_field(schema, "title");
        assert_object_schema_has_field(schema, "isActive");
    }

    #[test]
    fn openapi_error_schema_has_required_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let schema = schemas.get("Error").expect("Error schema");

        assert_object_schema_has_field(schema, "code");
        assert_object_schema_has_field(schema, "message");
    }

    #[test]
    fn openapi_lists_every_recruitment_path() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;
        assert!(paths.contains_key("/api/v1/recruitments"));
        assert!(paths.contains_key("/api/v1/recruitments/{id}"));
        assert!(paths.contains_key("/api/v1/recruitments/{id}/active"));
        assert!(paths.contains_key("/health/ready"));
    }
}
