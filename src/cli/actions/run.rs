use crate::cli::actions::{Action, lookup, webhook};
use crate::console::StdConsole;
use anyhow::Result;

pub async fn execute(action: Action) -> Result<()> {
    let mut console = StdConsole;

    match action {
        Action::Lookup(args) => lookup::handle(args, &mut console).await,
        Action::Webhook(args) => webhook::handle(args, &mut console).await,
    }
}
