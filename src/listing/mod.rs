//! List-Detail-Paginate views.
//!
//! Every dashboard page is the same shape: fetch a collection, keep it in
//! state, show one page of it and optionally one selected record. The
//! shape is implemented once here and parameterized by a
//! [`ResourceSpec`](crate::api::ResourceSpec).

pub mod controller;
pub mod fetch;
pub mod filter;
pub mod state;

pub use controller::{ListController, LoadOutcome};
pub use fetch::{fetch_failure, fetch_list, send_read, send_status, update_failure};
pub use state::{DEFAULT_PAGE_SIZE, FetchTicket, ListState};
