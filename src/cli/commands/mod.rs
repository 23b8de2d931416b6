mod logging;

use clap::{
    Arg, ColorChoice, Command,
    builder::styling::{AnsiColor, Effects, Styles},
};

fn lookup_command(name: &'static str, about: &'static str) -> Command {
    Command::new(name)
        .about(about)
        .arg(Arg::new("id").help("Numeric ID (prompted for when omitted)"))
        .arg(
            Arg::new("webhook")
                .long("webhook")
                .help("Also deliver the report to this Discord webhook")
                .env("RBXINFO_WEBHOOK_URL"),
        )
}

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("rbxinfo")
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("users-url")
                .long("users-url")
                .help("Base URL of the users API")
                .default_value("https://users.roblox.com")
                .env("RBXINFO_USERS_URL")
                .global(true),
        )
        .arg(
            Arg::new("groups-url")
                .long("groups-url")
                .help("Base URL of the groups API")
                .default_value("https://groups.roblox.com")
                .env("RBXINFO_GROUPS_URL")
                .global(true),
        )
        .subcommand(lookup_command("user", "Look up a user by ID"))
        .subcommand(lookup_command("group", "Look up a group by ID"))
        .subcommand(
            Command::new("webhook")
                .about("Check that a Discord webhook accepts messages")
                .arg(
                    Arg::new("url")
                        .help("Webhook URL")
                        .env("RBXINFO_WEBHOOK_URL")
                        .required(true),
                ),
        );

    logging::with_args(command)
}
