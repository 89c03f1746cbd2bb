//! Backend entry-point: wires the admin UI, verification API, and posts feed.

use actix_web::cookie::{Key, SameSite};
use actix_web::web;
use std::env;
use std::net::SocketAddr;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};
use url::Url;

use backend::domain::EmployeeId;
use backend::inbound::http::health::HealthState;
use backend::outbound::successfactors::SuccessFactorsCredentials;
use backend::server::{DirectoryConfig, ServerConfig, create_server};

const DEFAULT_DIRECTORY_BASE_URL: &str = "https://api44.sapsf.com/odata/v2/";
const DEFAULT_ADMIN_SEED: &str = "9025857,9025676,9023422";

fn load_session_key() -> std::io::Result<Key> {
    let key_path =
        env::var("SESSION_KEY_FILE").unwrap_or_else(|_| "/var/run/secrets/session_key".into());
    match std::fs::read(&key_path) {
        Ok(bytes) => Ok(Key::derive_from(&bytes)),
        Err(e) => {
            let allow_dev = env::var("SESSION_ALLOW_EPHEMERAL").ok().as_deref() == Some("1");
            if cfg!(debug_assertions) || allow_dev {
                warn!(path = %key_path, error = %e, "using temporary session key (dev only)");
                Ok(Key::generate())
            } else {
                Err(std::io::Error::other(format!(
                    "failed to read session key at {key_path}: {e}"
                )))
            }
        }
    }
}

/// Read upstream directory settings from the environment.
///
/// Both `SF_API_USERNAME` and `SF_API_PASSWORD` must be set to enable the
/// live directory; otherwise the server falls back to the fixture.
fn load_directory_config() -> std::io::Result<Option<DirectoryConfig>> {
    let (Ok(username), Ok(password)) = (env::var("SF_API_USERNAME"), env::var("SF_API_PASSWORD"))
    else {
        return Ok(None);
    };
    let base =
        env::var("SF_API_BASE_URL").unwrap_or_else(|_| DEFAULT_DIRECTORY_BASE_URL.to_owned());
    let base_url = Url::parse(&base)
        .map_err(|e| std::io::Error::other(format!("invalid SF_API_BASE_URL {base}: {e}")))?;
    Ok(Some(DirectoryConfig {
        base_url,
        credentials: SuccessFactorsCredentials { username, password },
    }))
}

fn load_admin_seed() -> std::io::Result<Vec<EmployeeId>> {
    let raw = env::var("ADMIN_SEED_IDS").unwrap_or_else(|_| DEFAULT_ADMIN_SEED.to_owned());
    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(|id| {
            EmployeeId::new(id)
                .map_err(|e| std::io::Error::other(format!("invalid ADMIN_SEED_IDS entry: {e}")))
        })
        .collect()
}

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

    let key = load_session_key()?;
    let cookie_secure = env::var("SESSION_COOKIE_SECURE")
        .map(|v| v != "0")
        .unwrap_or(true);
    let bind_addr: SocketAddr = env::var("BIND_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:8080".into())
        .parse()
        .map_err(|e| std::io::Error::other(format!("invalid BIND_ADDR: {e}")))?;

    let mut config = ServerConfig::new(key, cookie_secure, SameSite::Lax, bind_addr)
        .with_admin_seed(load_admin_seed()?);
    if let Some(directory) = load_directory_config()? {
        config = config.with_directory(directory);
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    server.await
}
