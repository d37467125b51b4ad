//! Resource dashboard
//!
//! `model` holds the pure state machine, `view` the iocraft component that
//! drives it and `components` the pieces it renders.

pub mod components;
pub mod model;
pub mod view;

pub use model::{
    DashboardAction, DashboardEffect, DashboardState, DashboardViewModel,
    compute_dashboard_view_model, key_to_action, reduce_dashboard_state,
};
pub use view::{Dashboard, DashboardProps};
