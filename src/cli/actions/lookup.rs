use crate::cli::globals::GlobalArgs;
use crate::console::Console;
use crate::roblox::{self, Kind};
use crate::webhook;
use anyhow::{Context, Result, anyhow};
use tracing::info;

/// Arguments of one lookup invocation.
#[derive(Debug)]
pub struct Args {
    pub kind: Kind,
    pub globals: GlobalArgs,
    pub id: Option<String>,
    pub webhook: Option<String>,
}

/// Handle the lookup action
///
/// An identifier given on the command line wins; otherwise the console is
/// asked for one. The report is always written to the console before any
/// webhook delivery is attempted.
/// # Errors
/// Returns an error when no identifier is supplied, the lookup fails, or
/// webhook delivery fails.
pub async fn handle(args: Args, console: &mut dyn Console) -> Result<()> {
    let id = match args.id {
        Some(id) => id,
        None => console.read_identifier(args.kind.prompt())?,
    };

    let id = id.trim().to_string();
    if id.is_empty() {
        return Err(anyhow!("no identifier supplied"));
    }

    let base_url = args.globals.base_url(args.kind);

    let report = roblox::lookup(base_url, args.kind, &id)
        .await
        .with_context(|| format!("failed to fetch {} info", args.kind))?;

    console.write_report(&report)?;

    if let Some(webhook_url) = args.webhook {
        webhook::send(&webhook_url, &report)
            .await
            .context("failed to deliver report to webhook")?;

        info!("report delivered to webhook");
    }

    Ok(())
}
