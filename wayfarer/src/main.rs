use colored::Colorize;
use commands::command_argument_builder;
use tracing_subscriber::EnvFilter;
use wayfarer::config::Config;
use wayfarer::handlers::{
    handle_init, handle_list, handle_map, handle_report, handle_reset, handle_stats,
    handle_toggle,
};
use wayfarer_core::print_banner;

mod commands;

fn main() {
    let cmd = command_argument_builder();
    let chosen_command = cmd.get_matches();
    let quiet = chosen_command.get_flag("quiet");

    let config = match Config::from_matches(&chosen_command) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {:#}", "✗".red().bold(), e);
            std::process::exit(1);
        }
    };
    init_tracing(&config.log_filter);

    // Reports may be piped, keep their output clean
    let is_report = matches!(chosen_command.subcommand(), Some(("report", _)));
    if !quiet && !is_report {
        print_banner();
    }

    let result = match chosen_command.subcommand() {
        Some(("init", primary_command)) => handle_init(&config, primary_command),
        Some(("list", primary_command)) => handle_list(&config, primary_command),
        Some(("toggle", primary_command)) => handle_toggle(&config, primary_command),
        Some(("stats", _)) => handle_stats(&config),
        Some(("map", primary_command)) => handle_map(&config, primary_command),
        Some(("report", primary_command)) => handle_report(&config, primary_command),
        Some(("reset", primary_command)) => handle_reset(&config, primary_command),
        // No subcommand provided, just show the banner
        None => Ok(()),
        _ => unreachable!("clap should ensure we don't get here"),
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", "✗".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);
