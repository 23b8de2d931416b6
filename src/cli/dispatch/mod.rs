use crate::cli::{
    actions::{Action, lookup, webhook},
    globals::GlobalArgs,
};
use crate::roblox::Kind;
use anyhow::{Context, Result, anyhow};

/// # Errors
/// Returns an error if required arguments are missing or inconsistent.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let globals = GlobalArgs::new(
        matches
            .get_one::<String>("users-url")
            .cloned()
            .context("missing required argument: --users-url")?,
        matches
            .get_one::<String>("groups-url")
            .cloned()
            .context("missing required argument: --groups-url")?,
    );

    match matches.subcommand() {
        Some(("user", sub_matches)) => {
            Ok(Action::Lookup(lookup_args(Kind::User, globals, sub_matches)))
        }
        Some(("group", sub_matches)) => Ok(Action::Lookup(lookup_args(
            Kind::Group,
            globals,
            sub_matches,
        ))),
        Some(("webhook", sub_matches)) => Ok(Action::Webhook(webhook::Args {
            url: sub_matches
                .get_one::<String>("url")
                .cloned()
                .context("missing required argument: url")?,
        })),
        _ => Err(anyhow!("missing subcommand")),
    }
}

fn lookup_args(kind: Kind, globals: GlobalArgs, matches: &clap::ArgMatches) -> lookup::Args {
    lookup::Args {
        kind,
        globals,
        id: matches.get_one::<String>("id").cloned(),
        webhook: matches.get_one::<String>("webhook").cloned(),
    }
}
