//! Recruitment API handlers.
//!
//! ```text
//! GET    /api/v1/recruitments?search=rust
//! GET    /api/v1/recruitments/{id}
//! POST   /api/v1/recruitments
//! PUT    /api/v1/recruitments/{id}
//! DELETE /api/v1/recruitments/{id}
//! PATCH  /api/v1/recruitments/{id}/active
//! ```
//!
//! Drafts are validated before any store call so an invalid payload never
//! reaches an adapter. Every store call is bounded by the state's request
//! timeout.

use std::future::Future;

use actix_web::{HttpResponse, delete, get, patch, post, put, web};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::domain::ports::RecruitmentStoreError;
use crate::domain::{Error, Recruitment, RecruitmentDraft};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::map_recruitment_validation_error;

/// Query parameters for `GET /api/v1/recruitments`.
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
pub struct ListRecruitmentsQuery {
    /// Case-insensitive filter over title, category, and stack.
    pub search: Option<String>,
}

/// Request body for `PATCH /api/v1/recruitments/{id}/active`.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ToggleActiveBody {
    /// Desired visibility of the posting.
    pub is_active: bool,
}

/// Bound a store call by the configured request timeout.
async fn timed<T>(
    state: &HttpState,
    call: impl Future<Output = Result<T, RecruitmentStoreError>>,
) -> Result<T, Error> {
    match tokio::time::timeout(state.request_timeout(), call).await {
        Ok(result) => result.map_err(map_store_error),
        Err(_elapsed) => Err(Error::service_unavailable("request timed out")),
    }
}

fn map_store_error(err: RecruitmentStoreError) -> Error {
    match err {
        RecruitmentStoreError::NotFound { id } => {
            Error::not_found(format!("recruitment {id} does not exist"))
        }
        RecruitmentStoreError::Unavailable { message } => {
            error!(%message, "recruitment store unavailable");
            Error::service_unavailable("recruitment store unavailable")
        }
        RecruitmentStoreError::Query { message } => {
            error!(%message, "recruitment store query failed");
            Error::internal(message)
        }
    }
}

/// List recruitment records, optionally filtered by a search term.
#[utoipa::path(
    get,
    path = "/api/v1/recruitments",
    params(ListRecruitmentsQuery),
    responses(
        (status = 200, description = "Recruitment records", body = [Recruitment]),
        (status = 503, description = "Store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["recruitments"],
    operation_id = "listRecruitments"
)]
#[get("/recruitments")]
pub async fn list_recruitments(
    state: web::Data<HttpState>,
    query: web::Query<ListRecruitmentsQuery>,
) -> ApiResult<web::Json<Vec<Recruitment>>> {
    let records = timed(&state, state.recruitments.list(query.search.as_deref())).await?;
    Ok(web::Json(records))
}

/// Fetch a single recruitment record by id.
#[utoipa::path(
    get,
    path = "/api/v1/recruitments/{id}",
    params(("id" = u64, Path, description = "Record id")),
    responses(
        (status = 200, description = "Recruitment record", body = Recruitment),
        (status = 404, description = "No such record", body = Error),
        (status = 503, description = "Store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["recruitments"],
    operation_id = "getRecruitment"
)]
#[get("/recruitments/{id}")]
pub async fn get_recruitment(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
) -> ApiResult<web::Json<Recruitment>> {
    let id = path.into_inner();
    let record = timed(&state, state.recruitments.find_by_id(id))
        .await?
        .ok_or_else(|| Error::not_found(format!("recruitment {id} does not exist")))?;
    Ok(web::Json(record))
}

/// Create a recruitment record from a validated draft.
#[utoipa::path(
    post,
    path = "/api/v1/recruitments",
    request_body = RecruitmentDraft,
    responses(
        (status = 201, description = "Record created", body = Recruitment),
        (status = 400, description = "Invalid draft", body = Error),
        (status = 503, description = "Store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["recruitments"],
    operation_id = "createRecruitment"
)]
#[post("/recruitments")]
pub async fn create_recruitment(
    state: web::Data<HttpState>,
    payload: web::Json<RecruitmentDraft>,
) -> ApiResult<HttpResponse> {
    let draft = payload.into_inner();
    draft.validate().map_err(map_recruitment_validation_error)?;
    let record = timed(&state, state.recruitments.create(draft)).await?;
    Ok(HttpResponse::Created().json(record))
}

/// Replace the editable fields of an existing record.
#[utoipa::path(
    put,
    path = "/api/v1/recruitments/{id}",
    params(("id" = u64, Path, description = "Record id")),
    request_body = RecruitmentDraft,
    responses(
        (status = 200, description = "Record updated", body = Recruitment),
        (status = 400, description = "Invalid draft", body = Error),
        (status = 404, description = "No such record", body = Error),
        (status = 503, description = "Store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["recruitments"],
    operation_id = "updateRecruitment"
)]
#[put("/recruitments/{id}")]
pub async fn update_recruitment(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
    payload: web::Json<RecruitmentDraft>,
) -> ApiResult<web::Json<Recruitment>> {
    let id = path.into_inner();
    let draft = payload.into_inner();
    draft.validate().map_err(map_recruitment_validation_error)?;
    let record = timed(&state, state.recruitments.update(id, draft)).await?;
    Ok(web::Json(record))
}

/// Delete a recruitment record.
#[utoipa::path(
    delete,
    path = "/api/v1/recruitments/{id}",
    params(("id" = u64, Path, description = "Record id")),
    responses(
        (status = 204, description = "Record deleted"),
        (status = 404, description = "No such record", body = Error),
        (status = 503, description = "Store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["recruitments"],
    operation_id = "deleteRecruitment"
)]
#[delete("/recruitments/{id}")]
pub async fn delete_recruitment(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    timed(&state, state.recruitments.delete(id)).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Flip a record's visibility without touching its other fields.
#[utoipa::path(
    patch,
    path = "/api/v1/recruitments/{id}/active",
    params(("id" = u64, Path, description = "Record id")),
    request_body = ToggleActiveBody,
    responses(
        (status = 200, description = "Record updated", body = Recruitment),
        (status = 404, description = "No such record", body = Error),
        (status = 503, description = "Store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["recruitments"],
    operation_id = "setRecruitmentActive"
)]
#[patch("/recruitments/{id}/active")]
pub async fn set_recruitment_active(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
    payload: web::Json<ToggleActiveBody>,
) -> ApiResult<web::Json<Recruitment>> {
    let id = path.into_inner();
    let record = timed(&state, state.recruitments.set_active(id, payload.is_active)).await?;
    Ok(web::Json(record))
}
