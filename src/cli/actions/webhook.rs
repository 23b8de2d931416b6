use crate::console::Console;
use crate::webhook;
use anyhow::{Context, Result};

/// Arguments of one webhook check.
#[derive(Debug)]
pub struct Args {
    pub url: String,
}

/// Handle the webhook check action
/// # Errors
/// Returns an error when the webhook rejects the probe message.
pub async fn handle(args: Args, console: &mut dyn Console) -> Result<()> {
    webhook::check(&args.url)
        .await
        .with_context(|| format!("webhook check failed for {}", args.url))?;

    console.write_report(&format!("Webhook is active: {}", args.url))?;

    Ok(())
}
