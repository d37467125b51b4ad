use owo_colors::OwoColorize;
use serde_json::json;

use super::{AppContext, CommandOutput, find_record};
use crate::api::Resource;
use crate::cli::OutputOptions;
use crate::display::format_status_colored;
use crate::error::{GavelError, Result};
use crate::listing::ListController;

/// Change the status of a record after the server confirms it
pub async fn cmd_set_status(
    ctx: &AppContext,
    resource: Resource,
    id: &str,
    status: &str,
    output: OutputOptions,
) -> Result<()> {
    let spec = resource.spec();
    // Reject bad input before touching the network
    let status = spec.validate_status(status)?;

    let mut controller =
        ListController::new(&ctx.client, &ctx.session, spec, ctx.page_size, ctx.timeout);
    find_record(&mut controller, id).await?;

    let previous = controller
        .state()
        .selected()
        .and_then(|r| r.status())
        .map(str::to_string);

    controller.update_status(id, status).await?;

    let record = controller
        .state()
        .find(id)
        .ok_or_else(|| GavelError::RecordNotFound(id.to_string()))?;

    let json_output = json!({
        "action": "status_updated",
        "resource": spec.name,
        "id": id,
        "previous_status": previous,
        "status": status,
        "record": record,
    });

    let text = format!(
        "Updated {} {} {} -> {}",
        spec.title,
        id.cyan(),
        format_status_colored(previous.as_deref().unwrap_or("unknown")),
        format_status_colored(status)
    );

    CommandOutput::new(json_output).with_text(text).print(output)
}
