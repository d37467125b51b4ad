//! Dashboard command (`gavel dashboard`)
//!
//! Full-screen TUI over every resource the session's role may see.

use iocraft::prelude::*;

use super::AppContext;
use crate::api::Resource;
use crate::error::{GavelError, Result};
use crate::logging::{self, LogTarget};
use crate::tui::Dashboard;

/// Launch the dashboard TUI
pub async fn cmd_dashboard(ctx: AppContext, resource: Option<Resource>) -> Result<()> {
    if let Some(resource) = resource {
        resource.spec().check_role(ctx.session.role())?;
    }
    // Log lines must not draw over the TUI
    logging::init(LogTarget::File);

    element!(Dashboard(context: Some(ctx), initial: resource))
        .fullscreen()
        .await
        .map_err(|e| GavelError::Other(format!("TUI error: {e}")))
}
