use owo_colors::OwoColorize;
use serde_json::json;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::CommandOutput;
use crate::api::{PagingMode, Resource};
use crate::cli::OutputOptions;
use crate::error::Result;

/// A row in the resource table
#[derive(Tabled)]
struct ResourceRow {
    #[tabled(rename = "Resource")]
    name: &'static str,
    #[tabled(rename = "Endpoint")]
    endpoint: &'static str,
    #[tabled(rename = "Paging")]
    paging: &'static str,
    #[tabled(rename = "Statuses")]
    statuses: String,
    #[tabled(rename = "Roles")]
    roles: String,
}

fn paging_label(paging: PagingMode) -> &'static str {
    match paging {
        PagingMode::Client => "client",
        PagingMode::Server => "server",
    }
}

/// List the resource catalogue
pub fn cmd_resources(output: OutputOptions) -> Result<()> {
    let specs: Vec<_> = Resource::ALL.iter().map(|r| r.spec()).collect();

    let json_output = json!(
        specs
            .iter()
            .map(|spec| json!({
                "name": spec.name,
                "title": spec.title,
                "endpoint": spec.path,
                "paging": paging_label(spec.paging),
                "statuses": spec.statuses(),
                "roles": spec.roles.iter().map(|r| r.to_string()).collect::<Vec<_>>(),
            }))
            .collect::<Vec<_>>()
    );

    let rows: Vec<ResourceRow> = specs
        .iter()
        .map(|spec| ResourceRow {
            name: spec.name,
            endpoint: spec.path,
            paging: paging_label(spec.paging),
            statuses: if spec.supports_status() {
                spec.statuses().join(", ")
            } else {
                "-".to_string()
            },
            roles: spec
                .roles
                .iter()
                .map(|r| r.to_string())
                .collect::<Vec<_>>()
                .join(", "),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    let text = format!(
        "{table}\n{}",
        format!("{} resource(s)", specs.len()).dimmed()
    );

    CommandOutput::new(json_output).with_text(text).print(output)
}
