//! Employee verification endpoint.
//!
//! ```text
//! GET /api/verify_employee  Verify an employee by id and phone suffix
//! ```
//!
//! Unauthenticated: mobile clients call it before any session exists. Failed verification is a `200` with `verified: false` so clients
//! branch on the body, not the status; only a missing credential pair is a
//! `400`.

use actix_web::{HttpRequest, HttpResponse, get, web};
use serde::{Deserialize, Serialize};

use crate::domain::{EmployeeProfile, LoginCredentials};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Header carrying the employee identifier.
pub const EMP_ID_HEADER: &str = "empId";
/// Header carrying the claimed last four phone digits.
pub const PHONE_LAST_FOUR_HEADER: &str = "phoneLastFour";

/// Verification outcome envelope.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VerificationResponse {
    /// Whether the claimed suffix matched the on-file number.
    pub verified: bool,
    /// Public failure reason, absent on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Profile summary, present only on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_data: Option<EmployeeProfile>,
}

impl VerificationResponse {
    fn verified(profile: EmployeeProfile) -> Self {
        Self {
            verified: true,
            error: None,
            user_data: Some(profile),
        }
    }

    fn refused(reason: &str) -> Self {
        Self {
            verified: false,
            error: Some(reason.to_owned()),
            user_data: None,
        }
    }
}

fn header_value<'r>(request: &'r HttpRequest, name: &str) -> Option<&'r str> {
    request
        .headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
}

/// Verify an employee's identity from the credential headers.
#[utoipa::path(
    get,
    path = "/api/verify_employee",
    security(),
    responses(
        (status = 200, description = "Verification decision", body = VerificationResponse),
        (status = 400, description = "Missing credential headers", body = VerificationResponse)
    ),
    params(
        ("empId" = String, Header, description = "Employee identifier"),
        ("phoneLastFour" = String, Header, description = "Claimed last four phone digits")
    ),
    tags = ["verification"],
    operation_id = "verifyEmployee"
)]
#[get("/verify_employee")]
pub async fn verify_employee(
    state: web::Data<HttpState>,
    request: HttpRequest,
) -> ApiResult<HttpResponse> {
    let emp_id = header_value(&request, EMP_ID_HEADER);
    let suffix = header_value(&request, PHONE_LAST_FOUR_HEADER);
    let (Some(emp_id), Some(suffix)) = (emp_id, suffix) else {
        return Ok(HttpResponse::BadRequest()
            .json(VerificationResponse::refused("Missing employee ID or phone number")));
    };

    let credentials = match LoginCredentials::try_from_parts(emp_id, suffix) {
        Ok(credentials) => credentials,
        Err(_) => {
            return Ok(HttpResponse::BadRequest()
                .json(VerificationResponse::refused("Missing employee ID or phone number")));
        }
    };

    match state.verifier.verify(&credentials).await {
        Ok(profile) => Ok(HttpResponse::Ok().json(VerificationResponse::verified(profile))),
        Err(err) => Ok(HttpResponse::Ok().json(VerificationResponse::refused(err.public_reason()))),
    }
}
