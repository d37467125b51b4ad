use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::io;

use crate::api::Resource;
use crate::commands::{
    AppContext, cmd_config_get, cmd_config_set, cmd_config_show, cmd_dashboard, cmd_ls,
    cmd_profile_update, cmd_resources, cmd_set_status, cmd_show,
};
use crate::profile::ProfileUpdate;

#[derive(Parser)]
#[command(name = "gavel")]
#[command(about = "Administration console for the auction platform")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Flags that override the configuration for one run
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Base URL of the platform API (overrides api.base_url and GAVEL_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Request timeout in seconds (overrides api.timeout_secs)
    #[arg(long, global = true, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,
}

/// Output mode shared by all commands
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputOptions {
    pub json: bool,
}

impl OutputOptions {
    pub fn new(json: bool) -> Self {
        Self { json }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List resources with their endpoints and capabilities
    Resources {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one page of a resource
    #[command(visible_alias = "list")]
    Ls {
        /// Resource name (see `gavel resources`)
        #[arg(value_parser = parse_resource)]
        resource: Resource,

        /// Page to show (1-based)
        #[arg(short, long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,

        /// Records per page (default: list.page_size)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        page_size: Option<u32>,

        /// Only show records with this status
        #[arg(short, long)]
        status: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the details of one record
    #[command(visible_alias = "s")]
    Show {
        /// Resource name
        #[arg(value_parser = parse_resource)]
        resource: Resource,

        /// Record ID
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Change the status of a withdrawal, privacy request or report
    SetStatus {
        /// Resource name
        #[arg(value_parser = parse_resource)]
        resource: Resource,

        /// Record ID
        id: String,

        /// New status
        status: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage the signed-in user's profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },

    /// Open the interactive dashboard
    #[command(visible_alias = "ui")]
    Dashboard {
        /// Resource tab to open first
        #[arg(short, long, value_parser = parse_resource)]
        resource: Option<Resource>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for [possible values: bash, zsh, fish, powershell, elvish]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Update profile fields
    Update {
        /// Account email (default: session.email)
        email: Option<String>,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        alternative_phone: Option<String>,

        #[arg(long)]
        gender: Option<String>,

        #[arg(long)]
        address: Option<String>,

        #[arg(long)]
        city: Option<String>,

        #[arg(long)]
        state: Option<String>,

        #[arg(long)]
        country: Option<String>,

        #[arg(long)]
        pin_code: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Set a configuration value
    Set {
        /// Configuration key (api.base_url, api.timeout_secs, list.page_size, session.token, session.email, session.role)
        key: String,
        /// Value to set
        value: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Execute the parsed command
    pub async fn run(self) -> crate::error::Result<()> {
        let global = self.global;
        match self.command {
            Commands::Resources { json } => cmd_resources(OutputOptions::new(json)),

            Commands::Ls {
                resource,
                page,
                page_size,
                status,
                json,
            } => {
                let ctx = AppContext::load(&global)?;
                cmd_ls(
                    &ctx,
                    resource,
                    page,
                    page_size,
                    status,
                    OutputOptions::new(json),
                )
                .await
            }

            Commands::Show { resource, id, json } => {
                let ctx = AppContext::load(&global)?;
                cmd_show(&ctx, resource, &id, OutputOptions::new(json)).await
            }

            Commands::SetStatus {
                resource,
                id,
                status,
                json,
            } => {
                let ctx = AppContext::load(&global)?;
                cmd_set_status(&ctx, resource, &id, &status, OutputOptions::new(json)).await
            }

            Commands::Profile { action } => match action {
                ProfileAction::Update {
                    email,
                    name,
                    phone,
                    alternative_phone,
                    gender,
                    address,
                    city,
                    state,
                    country,
                    pin_code,
                    json,
                } => {
                    let ctx = AppContext::load(&global)?;
                    let changes = ProfileUpdate {
                        name,
                        phone_no: phone,
                        alternative_phone_no: alternative_phone,
                        gender,
                        address,
                        city,
                        state,
                        country,
                        pin_code,
                    };
                    cmd_profile_update(&ctx, email.as_deref(), changes, OutputOptions::new(json))
                        .await
                }
            },

            Commands::Dashboard { resource } => {
                let ctx = AppContext::load(&global)?;
                cmd_dashboard(ctx, resource).await
            }

            Commands::Config { action } => match action {
                ConfigAction::Show { json } => cmd_config_show(OutputOptions::new(json)),
                ConfigAction::Set { key, value, json } => {
                    cmd_config_set(&key, &value, OutputOptions::new(json))
                }
                ConfigAction::Get { key, json } => cmd_config_get(&key, OutputOptions::new(json)),
            },

            Commands::Completions { shell } => {
                generate_completions(shell);
                Ok(())
            }
        }
    }
}

fn parse_resource(s: &str) -> Result<Resource, String> {
    s.parse::<Resource>().map_err(|_| {
        let names: Vec<&str> = Resource::ALL.iter().map(|r| r.name()).collect();
        format!("Invalid resource. Must be one of: {}", names.join(", "))
    })
}

pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "gavel", &mut io::stdout());
}
