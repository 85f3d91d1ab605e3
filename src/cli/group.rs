//! Group lifecycle commands: create, read, update, delete, import
//!
//! Each command loads the local state, runs one resource operation and writes
//! the resulting state back. Status lines go to stderr so that `--format json`
//! output on stdout stays machine readable.

use std::io::IsTerminal;
use std::path::Path;

use colored::Colorize;
use dialoguer::{Confirm, theme::ColorfulTheme};
use log::debug;
use serde::Serialize;
use serde_json::{Value, json};

use crate::cli::context::{load_config, resolve_format, state_store};
use crate::cli::{CommandContext, GlobalOptions, OutputFormat};
use crate::client::datadog::groups_path;
use crate::error::{Error, Result, StateError};
use crate::output::{Formattable, GroupView, json::format_json};
use crate::provider::sds_group::{
    build_create_request, build_delete_request, build_update_request, group_schema,
};
use crate::provider::{Resource, ResourceData};

/// Create the group described by `file` and start managing it
pub async fn create(opts: &GlobalOptions, file: &str, dry_run: bool) -> Result<()> {
    let store = state_store(opts);
    if let Some(existing) = store.load()?
        && !existing.id().is_empty()
    {
        return Err(StateError::AlreadyManaged(existing.id().to_string()).into());
    }

    let mut d = load_desired(Path::new(file))?;

    if dry_run {
        let plan = PlannedRequest::new("POST", groups_path(None), &build_create_request(&d))?;
        return plan.print(dry_run_format(opts)?);
    }

    let ctx = CommandContext::new(opts)?;
    ctx.resource.create(&mut d, &ctx.meta).await?;
    ctx.state.save(&d)?;

    eprintln!("{} Created group {}", "✓".green(), d.id().bold());
    GroupView::from(&d).print(ctx.format)
}

/// Refresh the managed group, dropping it from state if it no longer exists
pub async fn read(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let mut d = ctx.state.load_managed()?;
    let id = d.id().to_string();

    ctx.resource.read(&mut d, &ctx.meta).await?;
    ctx.state.save(&d)?;

    if d.id().is_empty() {
        eprintln!(
            "{} Group {} no longer exists; removed {}",
            "⚠".yellow(),
            id.bold(),
            ctx.state.path().display()
        );
        return Ok(());
    }

    GroupView::from(&d).print(ctx.format)
}

/// Replace the managed group's attributes with those in `file`
pub async fn update(opts: &GlobalOptions, file: &str, dry_run: bool) -> Result<()> {
    let store = state_store(opts);
    let current = store.load_managed()?;

    let mut d = load_desired(Path::new(file))?;
    d.set_id(current.id());

    if dry_run {
        let path = groups_path(Some(d.id()));
        let plan = PlannedRequest::new("PATCH", path, &build_update_request(&d))?;
        return plan.print(dry_run_format(opts)?);
    }

    let ctx = CommandContext::new(opts)?;
    ctx.resource.update(&mut d, &ctx.meta).await?;
    ctx.state.save(&d)?;

    eprintln!("{} Updated group {}", "✓".green(), d.id().bold());
    GroupView::from(&d).print(ctx.format)
}

/// Delete the managed group and remove the state file
pub async fn delete(
    opts: &GlobalOptions,
    version: Option<i64>,
    yes: bool,
    dry_run: bool,
) -> Result<()> {
    let store = state_store(opts);
    let mut d = store.load_managed()?;

    if let Some(version) = version {
        d.set("version", json!(version));
    }

    if dry_run {
        let path = groups_path(Some(d.id()));
        let plan = PlannedRequest::new("DELETE", path, &build_delete_request(&d))?;
        return plan.print(dry_run_format(opts)?);
    }

    if !yes && !confirm_delete(d.id())? {
        eprintln!("Aborted.");
        return Ok(());
    }

    let ctx = CommandContext::new(opts)?;
    let id = d.id().to_string();
    ctx.resource.delete(&mut d, &ctx.meta).await?;
    ctx.state.save(&d)?;

    eprintln!("{} Deleted group {}", "✓".green(), id.bold());
    Ok(())
}

/// Adopt an existing remote group
pub async fn import(opts: &GlobalOptions, id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    if let Some(existing) = ctx.state.load()?
        && !existing.id().is_empty()
    {
        return Err(StateError::AlreadyManaged(existing.id().to_string()).into());
    }

    let d = ctx.resource.import(id, &ctx.meta).await?;
    ctx.state.save(&d)?;

    eprintln!(
        "{} Imported group {} into {}",
        "✓".green(),
        d.id().bold(),
        ctx.state.path().display()
    );
    GroupView::from(&d).print(ctx.format)
}

/// Parse a desired-configuration file (YAML or JSON) against the group schema
pub fn load_desired(path: &Path) -> Result<ResourceData> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        Error::Other(format!("Could not read {}: {}", path.display(), e))
    })?;

    let value: Value = serde_yaml::from_str(&contents)?;
    debug!("Loaded desired configuration from {}", path.display());

    Ok(ResourceData::from_config(&group_schema(), value)?)
}

fn confirm_delete(id: &str) -> Result<bool> {
    if !std::io::stdin().is_terminal() {
        return Err(Error::Other(
            "Refusing to delete without confirmation. Pass --yes to skip the prompt.".to_string(),
        ));
    }

    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("Delete sensitive data scanner group {}?", id))
        .default(false)
        .interact()?)
}

fn dry_run_format(opts: &GlobalOptions) -> Result<OutputFormat> {
    Ok(resolve_format(opts, &load_config(opts)?))
}

/// A request that would be sent, shown by `--dry-run`
#[derive(Debug, Serialize)]
struct PlannedRequest {
    method: &'static str,
    path: String,
    body: Value,
}

impl PlannedRequest {
    fn new<B: Serialize>(method: &'static str, path: String, body: &B) -> Result<Self> {
        Ok(Self {
            method,
            path,
            body: serde_json::to_value(body)?,
        })
    }
}

impl Formattable for PlannedRequest {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(format_json(self)?),
            OutputFormat::Pretty | OutputFormat::Table => Ok(format!(
                "{} {} {}\n{}",
                "Would send".dimmed(),
                self.method.bold(),
                self.path,
                serde_json::to_string_pretty(&self.body)?
            )),
        }
    }
}
