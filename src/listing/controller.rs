//! Sequential driver for a [`ListState`].
//!
//! Every method takes `&mut self`, so at most one request per view is in
//! flight and responses always apply in order.

use std::time::Duration;

use crate::api::{ResourceClient, ResourceSpec};
use crate::error::{GavelError, Result};
use crate::session::Session;

use super::fetch::{fetch_failure, fetch_list, send_read, send_status, update_failure};
use super::state::ListState;

/// Result of [`ListController::load`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded { count: usize },
    Failed(String),
}

impl LoadOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadOutcome::Loaded { .. })
    }
}

pub struct ListController<'a, C> {
    client: &'a C,
    session: &'a Session,
    timeout: Duration,
    state: ListState,
}

impl<'a, C: ResourceClient> ListController<'a, C> {
    pub fn new(
        client: &'a C,
        session: &'a Session,
        spec: &'static ResourceSpec,
        page_size: u32,
        timeout: Duration,
    ) -> Self {
        Self {
            client,
            session,
            timeout,
            state: ListState::new(spec, page_size),
        }
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    /// Fetch the current page (or the whole collection). Issues exactly one
    /// request and never retries.
    pub async fn load(&mut self) -> LoadOutcome {
        let spec = self.state.spec();
        let ticket = self.state.begin_fetch();
        let result = fetch_list(
            self.client,
            spec,
            self.state.query(),
            self.session,
            self.timeout,
        )
        .await
        .map_err(|err| fetch_failure(spec, err).to_string());

        let outcome = match &result {
            Ok(payload) => LoadOutcome::Loaded {
                count: payload.items.len(),
            },
            Err(message) => LoadOutcome::Failed(message.clone()),
        };
        self.state.finish_fetch(ticket, result);
        outcome
    }

    /// Move to page `n`, fetching it when the server paginates. Returns
    /// `false` when `n` is out of range.
    pub async fn go_to_page(&mut self, n: u32) -> bool {
        if !self.state.go_to_page(n) {
            return false;
        }
        if self.state.fetches_pages() {
            self.load().await;
        }
        true
    }

    pub fn view(&mut self, id: &str) -> bool {
        self.state.view(id)
    }

    pub fn close(&mut self) {
        self.state.close();
    }

    /// Filter by status. Leaving a later server page re-fetches page 1.
    pub async fn set_status_filter(&mut self, status: Option<String>) {
        if self.state.set_status_filter(status) {
            self.load().await;
        }
    }

    pub async fn set_search(&mut self, query: Option<String>) {
        if self.state.set_search(query) {
            self.load().await;
        }
    }

    /// Confirmed-write status update.
    ///
    /// Validation failures (unsupported resource, unknown status, unknown
    /// id) return before any request is made. On a failed write the state
    /// is left as it was.
    pub async fn update_status(&mut self, id: &str, status: &str) -> Result<()> {
        let spec = self.state.spec();
        let status = spec.validate_status(status)?;
        if self.state.find(id).is_none() {
            return Err(GavelError::RecordNotFound(id.to_string()));
        }

        let server_record = send_status(self.client, spec, id, status, self.session, self.timeout)
            .await
            .map_err(|err| update_failure(spec, err))?;

        self.state.apply_status(id, status, server_record);
        tracing::info!(resource = spec.name, id, status, "status updated");
        Ok(())
    }

    /// Send a read receipt for `id` when the resource takes them and the
    /// record is still unread. Returns `true` when a receipt was sent.
    pub async fn mark_read(&mut self, id: &str) -> Result<bool> {
        let spec = self.state.spec();
        if spec.read_receipt.is_none() {
            return Ok(false);
        }
        let record = self
            .state
            .find(id)
            .ok_or_else(|| GavelError::RecordNotFound(id.to_string()))?;
        if record.is_read() {
            return Ok(false);
        }

        let server_record = send_read(self.client, spec, id, self.session, self.timeout)
            .await
            .map_err(|err| update_failure(spec, err))?;
        self.state.apply_read(id, server_record);
        tracing::debug!(resource = spec.name, id, "marked read");
        Ok(true)
    }
}
