pub mod lookup;
pub mod webhook;

// Internal "interpreter" for `Action`.
// We keep the match in a separate module so `mod.rs` stays small as more
// actions are added.
mod run;

#[derive(Debug)]
pub enum Action {
    Lookup(lookup::Args),
    Webhook(webhook::Args),
}

impl Action {
    /// Execute the action.
    /// # Errors
    /// Returns an error if the action fails.
    pub async fn execute(self) -> anyhow::Result<()> {
        run::execute(self).await
    }
}
