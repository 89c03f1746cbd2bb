//! Reqwest-backed SuccessFactors directory adapter.
//!
//! This adapter owns transport details only: OData query construction, basic
//! authentication, timeout and HTTP error mapping, and JSON decoding into the
//! domain employee record.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::debug;

use super::dto::ODataEnvelopeDto;
use crate::domain::employee::{EmployeeId, EmployeeRecord};
use crate::domain::ports::{HrDirectory, HrDirectoryError};

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Basic-auth credentials for the SuccessFactors OData API.
#[derive(Debug, Clone)]
pub struct SuccessFactorsCredentials {
    /// API username.
    pub username: String,
    /// API password.
    pub password: String,
}

/// Directory adapter that queries the `EmpJob` entity set over HTTP.
pub struct SuccessFactorsDirectory {
    client: Client,
    base_url: Url,
    credentials: SuccessFactorsCredentials,
}

impl SuccessFactorsDirectory {
    /// Build an adapter with the default 30-second request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(
        base_url: Url,
        credentials: SuccessFactorsCredentials,
    ) -> Result<Self, reqwest::Error> {
        Self::with_timeout(base_url, credentials, DEFAULT_REQUEST_TIMEOUT)
    }

    /// Build an adapter with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn with_timeout(
        base_url: Url,
        credentials: SuccessFactorsCredentials,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url,
            credentials,
        })
    }

    async fn query(&self, url: Url) -> Result<ODataEnvelopeDto, HrDirectoryError> {
        debug!(url = %url, "querying employee directory");
        let response = self
            .client
            .get(url)
            .basic_auth(
                &self.credentials.username,
                Some(&self.credentials.password),
            )
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        serde_json::from_slice(body.as_ref()).map_err(|error| {
            HrDirectoryError::decode(format!("invalid OData JSON payload: {error}"))
        })
    }
}

#[async_trait]
impl HrDirectory for SuccessFactorsDirectory {
    async fn lookup(&self, id: &EmployeeId) -> Result<EmployeeRecord, HrDirectoryError> {
        let url = build_lookup_url(&self.base_url, id)?;
        let envelope = self.query(url).await?;
        envelope
            .d
            .results
            .into_iter()
            .next()
            .map(super::dto::EmpJobDto::into_record)
            .ok_or(HrDirectoryError::NotFound)
    }

    async fn exists(&self, id: &EmployeeId) -> Result<bool, HrDirectoryError> {
        let url = build_exists_url(&self.base_url, id)?;
        let envelope = self.query(url).await?;
        Ok(!envelope.d.results.is_empty())
    }
}

/// Full record query: one round trip expanding phone, name, department, and
/// location navs.
fn build_lookup_url(base_url: &Url, id: &EmployeeId) -> Result<Url, HrDirectoryError> {
    build_emp_job_url(
        base_url,
        id,
        &[
            (
                "$expand",
                "employmentNav/personNav/phoneNav,\
                 employmentNav/personNav/personalInfoNav,\
                 departmentNav,locationNav",
            ),
            (
                "$select",
                "userId,employmentNav/personNav/phoneNav/phoneNumber,\
                 employmentNav/personNav/personalInfoNav/firstName,\
                 employmentNav/personNav/personalInfoNav/lastName,\
                 departmentNav/name,locationNav/name",
            ),
        ],
    )
}

/// Existence-only query selecting just the identifier field.
fn build_exists_url(base_url: &Url, id: &EmployeeId) -> Result<Url, HrDirectoryError> {
    build_emp_job_url(base_url, id, &[("$select", "userId")])
}

fn build_emp_job_url(
    base_url: &Url,
    id: &EmployeeId,
    params: &[(&str, &str)],
) -> Result<Url, HrDirectoryError> {
    let mut url = base_url
        .join("EmpJob")
        .map_err(|error| HrDirectoryError::upstream(format!("invalid directory URL: {error}")))?;
    // OData string literals escape embedded quotes by doubling them.
    let filter = format!("userId eq '{}'", id.as_ref().replace('\'', "''"));
    {
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair("$filter", &filter);
        for (key, value) in params {
            pairs.append_pair(key, value);
        }
        pairs.append_pair("$format", "json");
    }
    Ok(url)
}

fn map_transport_error(error: reqwest::Error) -> HrDirectoryError {
    if error.is_timeout() {
        HrDirectoryError::timeout(error.to_string())
    } else {
        HrDirectoryError::upstream(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> HrDirectoryError {
    let body_preview = body_preview(body);
    let message = if body_preview.is_empty() {
        format!("status {}", status.as_u16())
    } else {
        format!("status {}: {}", status.as_u16(), body_preview)
    };

    match status {
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            HrDirectoryError::timeout(message)
        }
        _ => HrDirectoryError::upstream(message),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for non-network OData mapping helpers.

    use super::*;
    use rstest::rstest;

    fn base() -> Url {
        Url::parse("https://api.successfactors.invalid/odata/v2/").expect("valid base URL")
    }

    fn id(raw: &str) -> EmployeeId {
        EmployeeId::new(raw).expect("valid id")
    }

    #[test]
    fn lookup_url_filters_and_expands_navs() {
        let url = build_lookup_url(&base(), &id("9025857")).expect("URL should build");
        let query = url.query().expect("query string");

        assert!(url.path().ends_with("/EmpJob"));
        assert!(query.contains("%24filter=userId+eq+%279025857%27"));
        assert!(query.contains("employmentNav%2FpersonNav%2FphoneNav"));
        assert!(query.contains("%24format=json"));
    }

    #[test]
    fn exists_url_selects_only_the_identifier() {
        let url = build_exists_url(&base(), &id("9025857")).expect("URL should build");
        let query = url.query().expect("query string");

        assert!(query.contains("%24select=userId"));
        assert!(!query.contains("phoneNav"));
        assert!(query.contains("%24format=json"));
    }

    #[test]
    fn embedded_quotes_are_doubled_in_the_filter() {
        let url = build_lookup_url(&base(), &id("90'857")).expect("URL should build");
        let query = url.query().expect("query string");
        assert!(query.contains("%2790%27%27857%27"));
    }

    #[rstest]
    #[case::request_timeout(StatusCode::REQUEST_TIMEOUT, true)]
    #[case::gateway_timeout(StatusCode::GATEWAY_TIMEOUT, true)]
    #[case::unauthorized(StatusCode::UNAUTHORIZED, false)]
    #[case::server_error(StatusCode::INTERNAL_SERVER_ERROR, false)]
    fn maps_http_statuses_to_expected_failures(
        #[case] status: StatusCode,
        #[case] expect_timeout: bool,
    ) {
        let error = map_status_error(status, b"{\"error\":{\"message\":\"nope\"}}");
        assert_eq!(
            matches!(error, HrDirectoryError::Timeout { .. }),
            expect_timeout
        );
    }

    #[test]
    fn status_messages_carry_a_bounded_body_preview() {
        let long_body = "x".repeat(400);
        let error = map_status_error(StatusCode::INTERNAL_SERVER_ERROR, long_body.as_bytes());
        let HrDirectoryError::Upstream { message } = error else {
            panic!("5xx should map to upstream");
        };
        assert!(message.starts_with("status 500: "));
        assert!(message.ends_with("..."));
        assert!(message.len() < 200);
    }
}
