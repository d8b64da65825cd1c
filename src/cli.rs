//! Command line interface of the `certboard` binary
//!
//! Parsing lives here rather than in `main.rs` so commands can be run
//! against any writer.

use crate::auth::{Role, Session, StaticSessionProvider};
use crate::config::Config;
use crate::utils::error::{DashboardError, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Parser)]
#[command(name = "certboard", version, about = "Role-scoped permissions for the certificate dashboard")]
pub struct Cli {
    /// YAML configuration file (defaults to environment variables)
    #[arg(long, short, env = "CERTBOARD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Role of the signed-in user; the configured default is used when absent
    #[arg(long, short)]
    pub role: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Capability flags of the session's role
    Permissions,
    /// Menu entries of the session's role
    Navigation,
    /// Roles offered by the role switcher
    Roles,
    /// Whether the session's role may open a route
    Route { path: String },
    /// Effective configuration
    Config,
    /// Build information
    Version,
}

/// Output of `certboard route`
#[derive(Debug, Serialize)]
pub struct RouteDecision<'a> {
    pub path: &'a str,
    pub role: Role,
    pub allowed: bool,
    pub reason: Option<String>,
}

/// Load configuration from `--config` or the environment
pub async fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path).await?,
        None => Config::from_env()?,
    };
    if cli.json_logs {
        config.logging.json = true;
    }
    Ok(config)
}

fn write_json<W, T>(out: &mut W, value: &T) -> Result<()>
where
    W: Write,
    T: Serialize + ?Sized,
{
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Run the parsed command against `config`, writing JSON to `out`
pub fn execute<W: Write>(cli: &Cli, config: &Config, out: &mut W) -> Result<()> {
    let role = cli.role.as_deref().map(str::parse::<Role>).transpose()?;
    let session = Session::start(&StaticSessionProvider::new(role), config.rbac());
    let rbac = session.rbac();
    debug!("Session started as {}", rbac.current_role());

    match &cli.command {
        Command::Permissions => write_json(out, &rbac.permissions()),
        Command::Navigation => write_json(out, rbac.navigation()),
        Command::Roles => write_json(out, &rbac.selectable_roles()),
        Command::Route { path } => {
            let reason = match rbac.authorize_route(path) {
                Ok(()) => None,
                Err(DashboardError::Forbidden(reason)) => Some(reason),
                Err(e) => return Err(e),
            };
            write_json(
                out,
                &RouteDecision {
                    path,
                    role: rbac.current_role(),
                    allowed: reason.is_none(),
                    reason,
                },
            )
        }
        Command::Config => write_json(out, config),
        Command::Version => write_json(out, &crate::build_info()),
    }
}
