//! HTTP client for the platform REST API.

use std::time::Duration;

use reqwest::header::{self, HeaderValue};
use reqwest::{Client, Method, RequestBuilder};
use serde_json::{Value, json};
use url::Url;

use super::envelope::{ListPayload, envelope_message, normalize_list, normalize_record};
use super::error::ApiError;
use super::record::Record;
use super::resource::{ResourceSpec, WriteMethod};
use super::{ListQuery, ResourceClient};
use crate::error::{GavelError, Result};
use crate::profile::ProfileUpdate;
use crate::session::Session;

/// Path of the profile update endpoint; the user's email is appended.
const PROFILE_PATH: &str = "/api/auth/user/updateUserProfile";

/// `reqwest`-backed [`ResourceClient`].
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    timeout: Duration,
}

impl ApiClient {
    /// Create a client for `base_url` (e.g. `https://localhost:5000`).
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let parsed = Url::parse(trimmed).map_err(|_| ApiError::InvalidUrl(base_url.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::InvalidUrl(base_url.to_string()).into());
        }

        let http = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()
            .map_err(|e| GavelError::Other(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: trimmed.to_string(),
            timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Join the base URL with an absolute API path.
    fn endpoint(&self, path: &str) -> std::result::Result<Url, ApiError> {
        let raw = format!("{}{}", self.base_url, path);
        Url::parse(&raw).map_err(|_| ApiError::InvalidUrl(raw))
    }

    /// Endpoint with a record segment, percent-encoded, and an optional
    /// action segment after it.
    fn record_endpoint(
        &self,
        path: &str,
        id: &str,
        suffix: Option<&str>,
    ) -> std::result::Result<Url, ApiError> {
        let mut url = self.endpoint(path)?;
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .push(id)
            .extend(suffix);
        Ok(url)
    }

    fn request(&self, method: Method, url: &Url, session: &Session) -> Result<RequestBuilder> {
        let mut builder = self
            .http
            .request(method, url.clone())
            .header(header::ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(bearer) = session.bearer() {
            let mut value = HeaderValue::from_str(&bearer).map_err(|_| {
                GavelError::Config("session token contains invalid characters".to_string())
            })?;
            value.set_sensitive(true);
            builder = builder.header(header::AUTHORIZATION, value);
        }
        Ok(builder)
    }

    /// Send a request and decode the body as JSON.
    ///
    /// Non-2xx responses become [`ApiError::Status`] carrying the server's
    /// `message` when the body has one. An empty 2xx body decodes to `null`.
    async fn send(&self, builder: RequestBuilder, url: &Url) -> std::result::Result<Value, ApiError> {
        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::from_reqwest(&e, url.as_str(), self.timeout))?;

        let status = response.status();
        tracing::debug!(url = %url, status = %status, "response received");

        let text = response
            .text()
            .await
            .map_err(|e| ApiError::from_reqwest(&e, url.as_str(), self.timeout))?;

        if !status.is_success() {
            let message = serde_json::from_str::<Value>(&text)
                .ok()
                .and_then(|body| body.as_object().and_then(envelope_message));
            return Err(ApiError::status(status, message));
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(|e| ApiError::Malformed(format!("invalid JSON: {e}")))
    }
}

impl ResourceClient for ApiClient {
    async fn fetch_list(
        &self,
        spec: &'static ResourceSpec,
        query: ListQuery,
        session: &Session,
    ) -> Result<ListPayload> {
        let mut url = self.endpoint(&spec.list_path(session)?)?;
        if let (Some(page), Some(limit)) = (query.page, query.limit) {
            url.query_pairs_mut()
                .append_pair("page", &page.to_string())
                .append_pair("limit", &limit.to_string());
        }

        tracing::debug!(resource = spec.name, url = %url, "fetching list");
        let builder = self.request(Method::GET, &url, session)?;
        let body = self.send(builder, &url).await?;
        Ok(normalize_list(body, spec)?)
    }

    async fn update_status(
        &self,
        spec: &'static ResourceSpec,
        id: &str,
        status: &str,
        session: &Session,
    ) -> Result<Option<Record>> {
        let update = spec
            .status_update
            .as_ref()
            .ok_or(GavelError::StatusNotSupported {
                resource: spec.name,
            })?;
        let url = self.record_endpoint(update.path, id, update.suffix)?;

        tracing::debug!(resource = spec.name, url = %url, status, "updating status");
        let builder = self
            .request(update.method.as_reqwest(), &url, session)?
            .json(&json!({ "status": status }));
        let body = self.send(builder, &url).await?;
        Ok(normalize_record(body)?)
    }

    async fn mark_read(
        &self,
        spec: &'static ResourceSpec,
        id: &str,
        session: &Session,
    ) -> Result<Option<Record>> {
        let path = spec.read_receipt.ok_or(GavelError::ReadReceiptNotSupported {
            resource: spec.name,
        })?;
        let url = self.record_endpoint(path, id, None)?;

        tracing::debug!(resource = spec.name, url = %url, "marking read");
        let builder = self
            .request(WriteMethod::Patch.as_reqwest(), &url, session)?
            .json(&json!({ "read": true }));
        let body = self.send(builder, &url).await?;
        Ok(normalize_record(body)?)
    }

    async fn update_profile(
        &self,
        email: &str,
        changes: &ProfileUpdate,
        session: &Session,
    ) -> Result<Record> {
        let url = self.record_endpoint(PROFILE_PATH, email, None)?;

        tracing::debug!(url = %url, "updating profile");
        let builder = self.request(Method::PATCH, &url, session)?.json(changes);
        let body = self.send(builder, &url).await?;
        normalize_record(body)?.ok_or_else(|| {
            ApiError::Malformed("profile update response carried no user".to_string()).into()
        })
    }
}
