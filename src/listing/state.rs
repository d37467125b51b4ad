//! Paginated list view state.
//!
//! `ListState` is a plain value: every transition is a synchronous method,
//! so the dashboard reducer and the sequential [`ListController`] drive the
//! same code. Network access lives elsewhere.
//!
//! [`ListController`]: super::ListController

use crate::api::{ListPayload, ListQuery, PagingMode, Record, ResourceSpec};

use super::filter::filter_records;

pub const DEFAULT_PAGE_SIZE: u32 = 5;

/// Ticket returned by [`ListState::begin_fetch`]. A result is only applied
/// when its ticket is still current.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// State of one list view.
#[derive(Debug, Clone)]
pub struct ListState {
    spec: &'static ResourceSpec,
    items: Vec<Record>,
    page: u32,
    page_size: u32,
    selected: Option<String>,
    loading: bool,
    error: Option<String>,
    server_total_pages: Option<u32>,
    status_filter: Option<String>,
    search: Option<String>,
    fetch_seq: u64,
}

impl ListState {
    /// Empty state on page 1. A zero page size falls back to the default.
    pub fn new(spec: &'static ResourceSpec, page_size: u32) -> Self {
        Self {
            spec,
            items: Vec::new(),
            page: 1,
            page_size: if page_size == 0 {
                DEFAULT_PAGE_SIZE
            } else {
                page_size
            },
            selected: None,
            loading: false,
            error: None,
            server_total_pages: None,
            status_filter: None,
            search: None,
            fetch_seq: 0,
        }
    }

    pub fn spec(&self) -> &'static ResourceSpec {
        self.spec
    }

    pub fn items(&self) -> &[Record] {
        &self.items
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn server_total_pages(&self) -> Option<u32> {
        self.server_total_pages
    }

    pub fn status_filter(&self) -> Option<&str> {
        self.status_filter.as_deref()
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub fn fetch_seq(&self) -> u64 {
        self.fetch_seq
    }

    /// True when the last response was paginated by the server, so moving
    /// between pages requires a new fetch.
    pub fn fetches_pages(&self) -> bool {
        self.server_total_pages.is_some()
    }

    /// Query for the next fetch of the current page.
    pub fn query(&self) -> ListQuery {
        match self.spec.paging {
            PagingMode::Server => ListQuery::page(self.page, self.page_size),
            PagingMode::Client => ListQuery::all(),
        }
    }

    // ========================================================================
    // Derived views
    // ========================================================================

    /// Items passing the status filter and search, in server order.
    pub fn visible(&self) -> Vec<&Record> {
        filter_records(
            &self.items,
            self.spec,
            self.status_filter.as_deref(),
            self.search.as_deref(),
        )
    }

    /// Number of pages, never less than 1.
    pub fn page_count(&self) -> u32 {
        if let Some(total) = self.server_total_pages {
            return total.max(1);
        }
        let visible = self.visible().len() as u32;
        visible.div_ceil(self.page_size).max(1)
    }

    /// Records on the current page.
    pub fn page_items(&self) -> Vec<&Record> {
        let visible = self.visible();
        if self.fetches_pages() {
            return visible;
        }
        let start = ((self.page - 1) * self.page_size) as usize;
        visible
            .into_iter()
            .skip(start)
            .take(self.page_size as usize)
            .collect()
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.page_count()
    }

    pub fn find(&self, id: &str) -> Option<&Record> {
        self.items.iter().find(|r| r.id() == id)
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// The record shown in the detail view.
    pub fn selected(&self) -> Option<&Record> {
        self.selected.as_deref().and_then(|id| self.find(id))
    }

    // ========================================================================
    // Transitions
    // ========================================================================

    /// Move to page `n`. Returns `false` and changes nothing when `n` is out
    /// of range. When [`fetches_pages`](Self::fetches_pages) is true the
    /// caller must fetch the new page.
    pub fn go_to_page(&mut self, n: u32) -> bool {
        if n < 1 || n > self.page_count() {
            return false;
        }
        self.page = n;
        true
    }

    /// Open the detail view for `id`. Returns `false` when no item has that
    /// id, leaving the selection unchanged.
    pub fn view(&mut self, id: &str) -> bool {
        if self.find(id).is_none() {
            return false;
        }
        self.selected = Some(id.to_string());
        true
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    /// Filter by status and go back to page 1. Returns `true` when the
    /// rows on screen belong to another server page, so the caller must
    /// fetch page 1.
    pub fn set_status_filter(&mut self, status: Option<String>) -> bool {
        self.status_filter = status.filter(|s| !s.trim().is_empty());
        self.rewind()
    }

    /// Search and go back to page 1. Same return value as
    /// [`set_status_filter`](Self::set_status_filter).
    pub fn set_search(&mut self, query: Option<String>) -> bool {
        self.search = query.filter(|q| !q.trim().is_empty());
        self.rewind()
    }

    fn rewind(&mut self) -> bool {
        let moved = self.page != 1;
        self.page = 1;
        moved && self.fetches_pages()
    }

    /// Start a fetch, superseding any fetch still in flight.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.fetch_seq += 1;
        self.loading = true;
        FetchTicket(self.fetch_seq)
    }

    /// Apply the result of a fetch. Returns `false` when `ticket` belongs
    /// to a superseded fetch; the result is then discarded.
    pub fn finish_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<ListPayload, String>,
    ) -> bool {
        if ticket.0 != self.fetch_seq {
            tracing::debug!(
                resource = self.spec.name,
                ticket = ticket.0,
                current = self.fetch_seq,
                "discarding stale list response"
            );
            return false;
        }

        self.loading = false;
        match result {
            Ok(payload) => {
                self.items = payload.items;
                self.server_total_pages = payload.total_pages;
                self.error = None;
                if self
                    .selected
                    .as_deref()
                    .is_some_and(|id| !self.items.iter().any(|r| r.id() == id))
                {
                    self.selected = None;
                }
                self.clamp_page();
            }
            Err(message) => {
                self.items.clear();
                self.server_total_pages = None;
                self.selected = None;
                self.error = Some(message);
                self.page = 1;
            }
        }
        true
    }

    /// Record a confirmed status change. The server's copy replaces the
    /// item when present, otherwise only the `status` field changes.
    /// Returns `false` when no item has that id.
    pub fn apply_status(&mut self, id: &str, status: &str, server_record: Option<Record>) -> bool {
        let Some(item) = self.items.iter_mut().find(|r| r.id() == id) else {
            return false;
        };
        match server_record {
            Some(record) if record.id() == id => *item = record,
            _ => item.set_status(status),
        }
        self.clamp_page();
        true
    }

    /// Record a confirmed read receipt. Returns `false` when no item has
    /// that id.
    pub fn apply_read(&mut self, id: &str, server_record: Option<Record>) -> bool {
        let Some(item) = self.items.iter_mut().find(|r| r.id() == id) else {
            return false;
        };
        if let Some(record) = server_record.filter(|r| r.id() == id) {
            *item = record;
        }
        item.mark_read();
        true
    }

    fn clamp_page(&mut self) {
        let count = self.page_count();
        if self.page > count {
            self.page = count;
        }
    }
}
