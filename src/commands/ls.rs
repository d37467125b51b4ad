use owo_colors::OwoColorize;
use serde_json::json;

use super::{AppContext, CommandOutput};
use crate::api::Resource;
use crate::cli::OutputOptions;
use crate::display::render_page;
use crate::error::{GavelError, Result};
use crate::listing::{ListController, LoadOutcome};

/// Show one page of a resource
pub async fn cmd_ls(
    ctx: &AppContext,
    resource: Resource,
    page: u32,
    page_size: Option<u32>,
    status: Option<String>,
    output: OutputOptions,
) -> Result<()> {
    let spec = resource.spec();
    let status = match status {
        Some(s) if spec.supports_status() => Some(spec.validate_status(&s)?.to_string()),
        other => other,
    };

    let mut controller = ListController::new(
        &ctx.client,
        &ctx.session,
        spec,
        page_size.unwrap_or(ctx.page_size),
        ctx.timeout,
    );

    if let LoadOutcome::Failed(message) = controller.load().await {
        return Err(GavelError::Other(message));
    }
    controller.set_status_filter(status).await;

    if page != 1 && !controller.go_to_page(page).await {
        return Err(GavelError::InvalidInput(format!(
            "page {page} is out of range (1-{})",
            controller.state().page_count()
        )));
    }
    if let Some(message) = controller.state().error() {
        return Err(GavelError::Other(message.to_string()));
    }

    let state = controller.state();
    let items = state.page_items();

    let json_output = json!({
        "resource": spec.name,
        "page": state.page(),
        "page_count": state.page_count(),
        "page_size": state.page_size(),
        "status_filter": state.status_filter(),
        "items": items,
    });

    let mut text = format!("{}\n{}", spec.title.bold(), render_page(state));
    if let Some(filter) = state.status_filter() {
        text.push_str(&format!(" {}", format!("(status: {filter})").dimmed()));
    }

    CommandOutput::new(json_output).with_text(text).print(output)
}
