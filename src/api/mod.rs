//! REST resource access.
//!
//! One HTTP client, one resource catalogue and one envelope adapter. The
//! [`ResourceClient`] trait is the seam between the list views and the
//! network; tests substitute a scripted implementation.

pub mod client;
pub mod envelope;
pub mod error;
pub mod record;
pub mod resource;

use crate::error::Result;
use crate::profile::ProfileUpdate;
use crate::session::Session;

pub use client::ApiClient;
pub use envelope::{ListPayload, normalize_list, normalize_record};
pub use error::ApiError;
pub use record::Record;
pub use resource::{
    Column, FieldFormat, PagingMode, Resource, ResourceSpec, StatusUpdate, WriteMethod,
};

/// Query parameters of a list request. Only server-paged resources send
/// `page` and `limit`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl ListQuery {
    /// Request the whole collection.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn page(page: u32, limit: u32) -> Self {
        Self {
            page: Some(page),
            limit: Some(limit),
        }
    }
}

/// Access to the platform API
pub trait ResourceClient: Send + Sync {
    /// Fetch a list endpoint and normalize its envelope
    fn fetch_list(
        &self,
        spec: &'static ResourceSpec,
        query: ListQuery,
        session: &Session,
    ) -> impl std::future::Future<Output = Result<ListPayload>> + Send;

    /// Write a new status, returning the server's copy of the record when
    /// the response carries one
    fn update_status(
        &self,
        spec: &'static ResourceSpec,
        id: &str,
        status: &str,
        session: &Session,
    ) -> impl std::future::Future<Output = Result<Option<Record>>> + Send;

    /// Tell the server a record has been read, returning its copy when the
    /// response carries one
    fn mark_read(
        &self,
        spec: &'static ResourceSpec,
        id: &str,
        session: &Session,
    ) -> impl std::future::Future<Output = Result<Option<Record>>> + Send;

    /// Update the profile of the user identified by `email`
    fn update_profile(
        &self,
        email: &str,
        changes: &ProfileUpdate,
        session: &Session,
    ) -> impl std::future::Future<Output = Result<Record>> + Send;
}
