use owo_colors::OwoColorize;
use serde_json::json;

use super::{AppContext, CommandOutput};
use crate::api::{ApiError, ResourceClient};
use crate::cli::OutputOptions;
use crate::error::{GavelError, Result};
use crate::profile::ProfileUpdate;

/// Update the profile of `email`, or of the session user
pub async fn cmd_profile_update(
    ctx: &AppContext,
    email: Option<&str>,
    changes: ProfileUpdate,
    output: OutputOptions,
) -> Result<()> {
    changes.validate()?;
    let email = email
        .or_else(|| ctx.session.email())
        .ok_or(GavelError::MissingSessionEmail)?;

    let response = tokio::time::timeout(
        ctx.timeout,
        ctx.client.update_profile(email, &changes, &ctx.session),
    )
    .await
    .unwrap_or_else(|_| Err(ApiError::Timeout(ctx.timeout).into()));
    let user = response.map_err(|err| GavelError::UpdateFailed {
        resource: "profile",
        reason: err.to_string(),
    })?;

    let changed = serde_json::to_value(&changes)?;
    let fields: Vec<String> = changed
        .as_object()
        .map(|fields| fields.keys().cloned().collect())
        .unwrap_or_default();

    let json_output = json!({
        "action": "profile_updated",
        "email": email,
        "user": user,
    });
    let text = format!(
        "Updated profile of {} ({})",
        email.cyan(),
        fields.join(", ").dimmed()
    );

    CommandOutput::new(json_output).with_text(text).print(output)
}
