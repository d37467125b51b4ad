use owo_colors::OwoColorize;
use serde_json::json;

use super::{AppContext, CommandOutput};
use crate::api::{Resource, ResourceClient};
use crate::cli::OutputOptions;
use crate::display::{detail_rows, format_status_colored};
use crate::error::{GavelError, Result};
use crate::listing::{ListController, LoadOutcome};

/// Load a resource and open the detail view of `id`.
///
/// Server-paged resources are walked page by page until the record turns up.
pub async fn find_record<'a, C: ResourceClient>(
    controller: &mut ListController<'a, C>,
    id: &str,
) -> Result<()> {
    if let LoadOutcome::Failed(message) = controller.load().await {
        return Err(GavelError::Other(message));
    }
    loop {
        if controller.view(id) {
            return Ok(());
        }
        let state = controller.state();
        if !state.fetches_pages() || !state.has_next() {
            return Err(GavelError::RecordNotFound(id.to_string()));
        }
        let next = state.page() + 1;
        controller.go_to_page(next).await;
        if let Some(message) = controller.state().error() {
            return Err(GavelError::Other(message.to_string()));
        }
    }
}

/// Show the detail view of one record
pub async fn cmd_show(
    ctx: &AppContext,
    resource: Resource,
    id: &str,
    output: OutputOptions,
) -> Result<()> {
    let spec = resource.spec();
    let mut controller =
        ListController::new(&ctx.client, &ctx.session, spec, ctx.page_size, ctx.timeout);
    find_record(&mut controller, id).await?;
    // Viewing is reading; a lost receipt does not hide the record
    if let Err(err) = controller.mark_read(id).await {
        tracing::warn!(resource = spec.name, id, error = %err, "read receipt failed");
    }

    let state = controller.state();
    let record = state
        .selected()
        .ok_or_else(|| GavelError::RecordNotFound(id.to_string()))?;

    let rows = detail_rows(record, spec);
    let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);

    let mut text = format!("{} {}\n", spec.title.bold(), record.id().cyan());
    for (label, value) in &rows {
        let value = if *label == "Status" {
            format_status_colored(value)
        } else {
            value.clone()
        };
        text.push_str(&format!("  {}  {}\n", format!("{label:<width$}").dimmed(), value));
    }
    if spec.supports_status() {
        text.push_str(&format!(
            "\n{}",
            format!(
                "Change status with: gavel set-status {} {} <{}>",
                spec.name,
                record.id(),
                spec.statuses().join("|")
            )
            .dimmed()
        ));
    }

    let json_output = json!({
        "resource": spec.name,
        "id": record.id(),
        "record": record,
        "fields": rows
            .iter()
            .map(|(label, value)| json!({"label": label, "value": value}))
            .collect::<Vec<_>>(),
    });

    CommandOutput::new(json_output)
        .with_text(text.trim_end().to_string())
        .print(output)
}
