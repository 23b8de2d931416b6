//! # rbxinfo
//!
//! Ad-hoc terminal lookups against the Roblox Web API: fetch a user or a
//! group record by numeric ID and print a short, human-readable report.
//!
//! Each invocation performs exactly one outbound request, writes one report
//! (or one error) and exits. Nothing is cached or persisted between runs.
//!
//! The report can optionally be delivered to a Discord webhook with
//! `--webhook`, and `rbxinfo webhook <URL>` probes a webhook without running
//! a lookup first.

pub mod cli;
pub mod console;
pub mod roblox;
pub mod webhook;

pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH_SHORT {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
