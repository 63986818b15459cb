use crate::CLAP_STYLING;
use clap::{arg, command};
use wayfarer::handlers::parse_region_type;

pub(crate) fn command_argument_builder() -> clap::Command {
    clap::Command::new("wayfarer")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("wayfarer")
        .about("Track the US states and countries you have visited")
        .styles(CLAP_STYLING)
        .arg(arg!(-q --"quiet" "Suppress banner and non-essential output").required(false))
        .arg(
            arg!(-d --"data-dir" <PATH>)
                .required(false)
                .global(true)
                .help("Directory holding the visited-places snapshot (default: ~/.config/wayfarer/)"),
        )
        .arg(
            arg!(-b --"backend" <BACKEND>)
                .required(false)
                .global(true)
                .help("Storage backend for the snapshot")
                .value_parser(["sqlite", "json"]),
        )
        .arg(
            arg!(-v --"verbose" ...)
                .global(true)
                .help("Increase log verbosity (-v info, -vv debug, -vvv trace)"),
        )
        .subcommand_required(false)
        .subcommand(
            command!("init")
                .about("Creates the data directory and an unvisited snapshot")
                .arg(
                    arg!(-f --"force")
                        .help("Overwrite an existing snapshot")
                        .required(false),
                ),
        )
        .subcommand(
            command!("list")
                .about("Lists regions of one type with their visited status")
                .arg(
                    arg!(-t --"type" <TYPE>)
                        .required(false)
                        .help("Region type: us or world")
                        .value_parser(parse_region_type)
                        .default_value("us"),
                )
                .arg(
                    arg!(--"visited")
                        .required(false)
                        .help("Only show visited regions")
                        .action(clap::ArgAction::SetTrue),
                ),
        )
        .subcommand(
            command!("toggle")
                .about("Marks a region visited, or unvisited if it already was")
                .arg(
                    arg!(<TARGET>)
                        .help("Region id (US_STATE:CA) or, with --type, a region code (CA)"),
                )
                .arg(
                    arg!(-t --"type" <TYPE>)
                        .required(false)
                        .help("Region type used to resolve a bare region code")
                        .value_parser(parse_region_type),
                ),
        )
        .subcommand(command!("stats").about("Shows visited progress per region type"))
        .subcommand(
            command!("map")
                .about("Resolves a map topology file against your visited regions")
                .arg(
                    arg!(<TOPOLOGY>)
                        .help("TopoJSON or GeoJSON file (us-atlas, world-atlas, ...)")
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                )
                .arg(
                    arg!(-t --"type" <TYPE>)
                        .required(false)
                        .help("Region type the topology describes: us or world")
                        .value_parser(parse_region_type)
                        .default_value("us"),
                )
                .arg(
                    arg!(--"unmatched")
                        .required(false)
                        .help("Also list features with no matching region")
                        .action(clap::ArgAction::SetTrue),
                ),
        )
        .subcommand(
            command!("report")
                .about("Generates a progress report")
                .arg(
                    arg!(-f --"format" <FORMAT>)
                        .required(false)
                        .help("Report format: text, json, markdown")
                        .value_parser(["text", "json", "markdown", "md"])
                        .default_value("text"),
                )
                .arg(
                    arg!(-o --"output" <PATH>)
                        .required(false)
                        .help("Save report to file (default: display to screen)")
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                ),
        )
        .subcommand(
            command!("reset")
                .about("Forgets every visit and reseeds the snapshot")
                .arg(
                    arg!(-f --"force")
                        .help("Do not ask for confirmation")
                        .required(false),
                ),
        )
}
