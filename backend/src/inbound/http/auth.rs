//! Admin session endpoints.
//!
//! ```text
//! GET  /        Dashboard (redirects to /login without a session)
//! GET  /login   Login form
//! POST /login   Establish a session from the form credentials
//! GET  /logout  Destroy the session
//! ```
//!
//! The form flow speaks HTML and redirects; the JSON error envelope is
//! reserved for the `/api` surface.

use actix_web::http::header;
use actix_web::{HttpResponse, get, post, web};
use serde::Deserialize;

use crate::domain::{ErrorCode, LoginCredentials};
use crate::inbound::http::ApiResult;
use crate::inbound::http::pages;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Login form fields. The suffix arrives under `password` so browsers treat
/// it as a credential.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub employee_id: String,
    #[serde(default)]
    pub password: String,
}

fn redirect_to(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

/// Dashboard page; session required.
#[get("/")]
pub async fn dashboard(session: SessionContext) -> ApiResult<HttpResponse> {
    match session.current_admin()? {
        Some(admin) => Ok(html(pages::dashboard_page(&admin.display_name))),
        None => Ok(redirect_to("/login")),
    }
}

/// Login form; an existing session skips straight to the dashboard.
#[get("/login")]
pub async fn login_form(session: SessionContext) -> ApiResult<HttpResponse> {
    if session.current_admin()?.is_some() {
        return Ok(redirect_to("/"));
    }
    Ok(html(pages::login_page(None)))
}

/// Establish an admin session from the submitted credentials.
///
/// Failures re-render the form with the public reason instead of answering
/// JSON; the browser stays on the login page.
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<LoginForm>,
) -> ApiResult<HttpResponse> {
    let form = form.into_inner();
    let credentials = match LoginCredentials::try_from_parts(&form.employee_id, &form.password) {
        Ok(credentials) => credentials,
        Err(_) => {
            return Ok(html(pages::login_page(Some(
                "Employee ID and password are required",
            ))));
        }
    };

    match state.login.login(&credentials).await {
        Ok(account) => {
            session.persist_admin(&account)?;
            Ok(redirect_to("/"))
        }
        Err(err) if err.code() == ErrorCode::InternalError => Err(err),
        Err(err) => Ok(html(pages::login_page(Some(err.message())))),
    }
}

/// Destroy the session and return to the login form.
#[get("/logout")]
pub async fn logout(session: SessionContext) -> HttpResponse {
    session.clear();
    redirect_to("/login")
}
