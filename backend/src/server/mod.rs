//! Server construction and middleware wiring.

mod config;

pub use config::{DirectoryConfig, ServerConfig};

use actix_session::{
    SessionMiddleware,
    config::{CookieContentSecurity, PersistentSession},
    storage::CookieSessionStore,
};
use actix_web::cookie::{Key, SameSite};
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpResponse, HttpServer, web};
use tracing::warn;
use utoipa::OpenApi;

use crate::ApiDoc;
use crate::Trace;
use crate::domain::ports::{FixtureHrDirectory, FixtureImageStore, HrDirectory};
use crate::domain::{AdminAccessService, AdminLoginService, AdminSet, DirectoryVerifier, NewsPostService};
use crate::inbound::http::admins::{assign_admin, list_admins, remove_admin};
use crate::inbound::http::auth::{dashboard, login, login_form, logout};
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::posts::{create_news, delete_news, edit_news, list_news};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::verification::verify_employee;
use crate::outbound::memory::InMemoryPostStore;
use crate::outbound::successfactors::SuccessFactorsDirectory;

use std::sync::Arc;

/// Wire the HTTP state against a concrete employee directory.
fn wire_state<D>(directory: Arc<D>, admins: Arc<AdminSet>) -> web::Data<HttpState>
where
    D: HrDirectory + 'static,
{
    let verifier = Arc::new(DirectoryVerifier::new(Arc::clone(&directory)));
    let login_service = Arc::new(AdminLoginService::new(
        Arc::clone(&verifier),
        Arc::clone(&admins),
    ));
    let admin_access = Arc::new(AdminAccessService::new(directory, admins));
    let posts = Arc::new(NewsPostService::new(
        Arc::new(InMemoryPostStore::new()),
        Arc::new(FixtureImageStore),
    ));
    web::Data::new(HttpState {
        verifier,
        login: login_service,
        admins: admin_access,
        posts,
    })
}

/// Build the shared HTTP state from the configured directory, falling back to
/// the fixture directory when no upstream credentials are present.
fn build_http_state(config: &ServerConfig) -> std::io::Result<web::Data<HttpState>> {
    let admins = Arc::new(AdminSet::seeded(config.admin_seed.iter().cloned()));
    match &config.directory {
        Some(directory) => {
            let adapter =
                SuccessFactorsDirectory::new(directory.base_url.clone(), directory.credentials.clone())
                    .map_err(|err| {
                        std::io::Error::other(format!("directory client construction failed: {err}"))
                    })?;
            Ok(wire_state(Arc::new(adapter), admins))
        }
        None if cfg!(debug_assertions) => {
            warn!("no directory credentials configured; serving the fixture employee directory");
            Ok(wire_state(Arc::new(FixtureHrDirectory::seeded()), admins))
        }
        None => Err(std::io::Error::other(
            "directory credentials are required outside debug builds",
        )),
    }
}

async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    key: Key,
    cookie_secure: bool,
    same_site: SameSite,
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
        key,
        cookie_secure,
        same_site,
    } = deps;

    let session = SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("session".into())
        .cookie_path("/".into())
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .cookie_content_security(CookieContentSecurity::Private)
        .cookie_same_site(same_site)
        .session_lifecycle(
            PersistentSession::default().session_ttl(actix_web::cookie::time::Duration::hours(2)),
        )
        .build();

    let api = web::scope("/api")
        .service(verify_employee)
        .service(list_admins)
        .service(assign_admin)
        .service(remove_admin)
        .service(list_news)
        .service(create_news)
        .service(edit_news)
        .service(delete_news);

    App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(session)
        .wrap(Trace)
        .service(api)
        .service(dashboard)
        .service(login_form)
        .service(login)
        .service(logout)
        .service(ready)
        .service(live)
        .route("/api-docs/openapi.json", web::get().to(openapi_json))
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when state construction, socket binding, or
/// server startup fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = build_http_state(&config)?;
    let ServerConfig {
        key,
        cookie_secure,
        same_site,
        bind_addr,
        admin_seed: _,
        directory: _,
    } = config;

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
            key: key.clone(),
            cookie_secure,
            same_site,
        })
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
