//! Timed requests shared by the controller and the dashboard.

use std::time::Duration;

use crate::api::{ApiError, ListPayload, ListQuery, Record, ResourceClient, ResourceSpec};
use crate::error::{GavelError, Result};
use crate::session::Session;

/// Fetch one list response, bounded by `timeout`.
///
/// A 404 on a resource whose endpoint answers 404 for "nothing yet" is an
/// empty list rather than an error.
pub async fn fetch_list<C: ResourceClient>(
    client: &C,
    spec: &'static ResourceSpec,
    query: ListQuery,
    session: &Session,
    timeout: Duration,
) -> Result<ListPayload> {
    spec.check_role(session.role())?;
    match tokio::time::timeout(timeout, client.fetch_list(spec, query, session)).await {
        Err(_) => Err(ApiError::Timeout(timeout).into()),
        Ok(Err(GavelError::Api(err))) if spec.not_found_is_empty && err.is_not_found() => {
            tracing::debug!(resource = spec.name, "not found treated as empty list");
            Ok(ListPayload::default())
        }
        Ok(result) => result,
    }
}

/// Write a status, bounded by `timeout`. No validation happens here.
pub async fn send_status<C: ResourceClient>(
    client: &C,
    spec: &'static ResourceSpec,
    id: &str,
    status: &str,
    session: &Session,
    timeout: Duration,
) -> Result<Option<Record>> {
    match tokio::time::timeout(timeout, client.update_status(spec, id, status, session)).await {
        Err(_) => Err(ApiError::Timeout(timeout).into()),
        Ok(result) => result,
    }
}

/// Send a read receipt, bounded by `timeout`.
pub async fn send_read<C: ResourceClient>(
    client: &C,
    spec: &'static ResourceSpec,
    id: &str,
    session: &Session,
    timeout: Duration,
) -> Result<Option<Record>> {
    match tokio::time::timeout(timeout, client.mark_read(spec, id, session)).await {
        Err(_) => Err(ApiError::Timeout(timeout).into()),
        Ok(result) => result,
    }
}

/// User-facing message for a failed list fetch.
pub fn fetch_failure(spec: &ResourceSpec, err: GavelError) -> GavelError {
    match err {
        err @ GavelError::FetchFailed { .. } => err,
        other => GavelError::FetchFailed {
            resource: spec.name,
            reason: other.to_string(),
        },
    }
}

/// User-facing message for a failed status write.
pub fn update_failure(spec: &ResourceSpec, err: GavelError) -> GavelError {
    match err {
        err @ GavelError::UpdateFailed { .. } => err,
        other => GavelError::UpdateFailed {
            resource: spec.name,
            reason: other.to_string(),
        },
    }
}
