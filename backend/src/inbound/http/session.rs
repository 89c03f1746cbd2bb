//! Session helpers to keep HTTP handlers free of framework-specific logic.
//!
//! Provides a thin wrapper around Actix sessions so handlers only deal with
//! domain-friendly operations: persisting the logged-in admin, reading it
//! back, and clearing it on logout. Session content lives in a private
//! (encrypted) cookie; nothing server-side survives a restart.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;

use crate::domain::{AdminAccount, Error};

pub(crate) const ADMIN_KEY: &str = "admin";

/// Newtype wrapper that exposes higher-level session operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Construct a new wrapper from the underlying Actix session.
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Persist the authenticated admin in the session cookie.
    pub fn persist_admin(&self, account: &AdminAccount) -> Result<(), Error> {
        self.0
            .insert(ADMIN_KEY, account)
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    /// Fetch the current admin from the session, if one is logged in.
    pub fn current_admin(&self) -> Result<Option<AdminAccount>, Error> {
        self.0
            .get::<AdminAccount>(ADMIN_KEY)
            .map_err(|error| Error::internal(format!("failed to read session: {error}")))
    }

    /// Require a logged-in admin or return `401 Unauthorized`.
    pub fn require_admin(&self) -> Result<AdminAccount, Error> {
        self.current_admin()?
            .ok_or_else(|| Error::unauthorized("login required"))
    }

    /// Destroy the session.
    pub fn clear(&self) {
        self.0.purge();
    }
}

impl FromRequest for SessionContext {
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new).map_err(Error::from) })
    }
}
