//! Admin allow-list endpoints.
//!
//! ```text
//! GET  /api/admins        List admin employee ids
//! POST /api/assign_admin  Grant admin access
//! POST /api/remove_admin  Revoke admin access
//! ```
//!
//! All three require a logged-in admin session.

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};

use crate::domain::{EmployeeId, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Grant/revoke request body.
#[derive(Debug, Clone, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminMutationRequest {
    /// Target employee identifier.
    #[serde(default)]
    pub emp_id: String,
}

/// Mutation acknowledgement body.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct AdminMutationResponse {
    /// Always `true`; failures use the error envelope.
    pub success: bool,
}

/// Admin listing body.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct AdminListResponse {
    /// Current admin identifiers, sorted.
    #[schema(value_type = Vec<String>)]
    pub admins: Vec<EmployeeId>,
}

fn parse_target(raw: &str) -> Result<EmployeeId, Error> {
    EmployeeId::new(raw).map_err(|_| Error::invalid_request("Employee ID is required"))
}

/// List the current admin set.
#[utoipa::path(
    get,
    path = "/api/admins",
    responses(
        (status = 200, description = "Current admin identifiers", body = AdminListResponse),
        (status = 401, description = "Login required", body = crate::domain::Error)
    ),
    tags = ["admins"],
    operation_id = "listAdmins"
)]
#[get("/admins")]
pub async fn list_admins(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<HttpResponse> {
    session.require_admin()?;
    let admins = state.admins.list().await?;
    Ok(HttpResponse::Ok().json(AdminListResponse { admins }))
}

/// Grant admin access to another employee.
#[utoipa::path(
    post,
    path = "/api/assign_admin",
    request_body = AdminMutationRequest,
    responses(
        (status = 200, description = "Access granted", body = AdminMutationResponse),
        (status = 400, description = "Missing employee id", body = crate::domain::Error),
        (status = 401, description = "Login required", body = crate::domain::Error),
        (status = 404, description = "Employee not found", body = crate::domain::Error),
        (status = 408, description = "Directory timed out", body = crate::domain::Error)
    ),
    tags = ["admins"],
    operation_id = "assignAdmin"
)]
#[post("/assign_admin")]
pub async fn assign_admin(
    state: web::Data<HttpState>,
    session: SessionContext,
    body: web::Json<AdminMutationRequest>,
) -> ApiResult<HttpResponse> {
    let requester = session.require_admin()?.employee_id;
    let target = parse_target(&body.emp_id)?;
    state.admins.assign(&requester, &target).await?;
    Ok(HttpResponse::Ok().json(AdminMutationResponse { success: true }))
}

/// Revoke admin access from another employee.
#[utoipa::path(
    post,
    path = "/api/remove_admin",
    request_body = AdminMutationRequest,
    responses(
        (status = 200, description = "Access revoked", body = AdminMutationResponse),
        (status = 400, description = "Missing employee id", body = crate::domain::Error),
        (status = 401, description = "Login required", body = crate::domain::Error),
        (status = 403, description = "Self-removal refused", body = crate::domain::Error),
        (status = 404, description = "Employee is not an admin", body = crate::domain::Error)
    ),
    tags = ["admins"],
    operation_id = "removeAdmin"
)]
#[post("/remove_admin")]
pub async fn remove_admin(
    state: web::Data<HttpState>,
    session: SessionContext,
    body: web::Json<AdminMutationRequest>,
) -> ApiResult<HttpResponse> {
    let requester = session.require_admin()?.employee_id;
    let target = parse_target(&body.emp_id)?;
    state.admins.remove(&requester, &target).await?;
    Ok(HttpResponse::Ok().json(AdminMutationResponse { success: true }))
}
