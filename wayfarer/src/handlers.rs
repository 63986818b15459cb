use crate::config::{Backend, Config};
use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use clap::ArgMatches;
use colored::Colorize;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;
use wayfarer_core::model::{Region, RegionType, region_id};
use wayfarer_core::query::{self, Progress};
use wayfarer_core::report::{
    ReportFormat, gather_report_data, generate_json_report, generate_markdown_report,
    generate_text_report, save_report,
};
use wayfarer_core::storage::SqliteStorage;
use wayfarer_core::topology::{FeatureHighlight, Topology};

// Helper functions shared by the handlers

/// clap value parser for `--type`
pub fn parse_region_type(s: &str) -> Result<RegionType, String> {
    RegionType::from_str(s)
        .ok_or_else(|| format!("Unknown region type '{}' (expected us or world)", s))
}

/// Turn a toggle target into a region id.
///
/// Full ids pass through unchanged; a bare code needs a region type.
pub fn resolve_toggle_target(
    target: &str,
    region_type: Option<RegionType>,
) -> Result<String, String> {
    let target = target.trim();
    if target.contains(':') {
        return Ok(target.to_uppercase());
    }
    match region_type {
        Some(region_type) => Ok(region_id(region_type, &target.to_uppercase())),
        None => Err(format!(
            "'{}' is not a region id, pass --type to resolve a bare region code",
            target
        )),
    }
}

pub fn render_region_list(regions: &[Region], region_type: RegionType, only_visited: bool) -> String {
    let scoped = query::by_type(regions, region_type);
    let progress = query::progress(regions, region_type);

    let mut out = String::new();
    out.push_str(&format!(
        "{}  {}\n\n",
        region_type.label().bright_white().bold(),
        format!("{} / {} visited", progress.visited, progress.total).bright_black()
    ));

    for region in scoped.iter().filter(|r| r.visited || !only_visited) {
        let mark = if region.visited {
            "✓".green().bold()
        } else {
            "·".bright_black()
        };
        let since = region
            .visited_at
            .map(|at| format!("  since {}", at.format("%Y-%m-%d")).bright_black().to_string())
            .unwrap_or_default();
        out.push_str(&format!(
            "  {} {:<4} {}{}\n",
            mark,
            region.region_code,
            region.name,
            since
        ));
    }

    if only_visited && progress.visited == 0 {
        out.push_str("  Nothing visited yet.\n");
    }

    out
}

pub fn render_progress(progress: &Progress) -> String {
    format!(
        "{:<10} {:>3} / {:<3} {:>3}% visited",
        progress.region_type.label(),
        progress.visited,
        progress.total,
        progress.percent
    )
}

pub fn render_map(highlights: &[FeatureHighlight], show_unmatched: bool) -> String {
    let mut out = String::new();
    let matched = highlights.iter().filter(|h| h.region_code.is_some()).count();
    let visited = highlights.iter().filter(|h| h.visited).count();

    for highlight in highlights {
        let Some(code) = highlight.region_code else {
            if show_unmatched {
                out.push_str(&format!(
                    "  {} {:<5} {:<4} {}\n",
                    "?".bright_black(),
                    highlight.feature_id,
                    "-",
                    highlight.name.as_deref().unwrap_or("unknown").bright_black()
                ));
            }
            continue;
        };
        let mark = if highlight.visited {
            "■".green().bold()
        } else {
            "□".bright_black()
        };
        out.push_str(&format!(
            "  {} {:<5} {:<4} {}\n",
            mark,
            highlight.feature_id,
            code,
            highlight.name.as_deref().unwrap_or("")
        ));
    }

    out.push_str(&format!(
        "\n{} features, {} matched, {} highlighted\n",
        highlights.len(),
        matched,
        visited
    ));
    out
}

fn print_prompt(msg: &str) -> Result<String> {
    print!("{} ", msg.bright_cyan().bold());
    io::stdout().flush()?;
    let mut response = String::new();
    io::stdin().read_line(&mut response)?;
    Ok(response.trim().to_lowercase())
}

pub fn last_saved(config: &Config) -> Option<DateTime<Utc>> {
    match config.backend {
        Backend::Sqlite => {
            // Opening would create the file
            if !SqliteStorage::exists(&config.db_path()) {
                return None;
            }
            let storage = SqliteStorage::new(&config.db_path()).ok()?;
            let timestamp = storage.updated_at().ok()??;
            DateTime::<Utc>::from_timestamp(timestamp, 0)
        }
        Backend::Json => {
            let modified = fs::metadata(config.snapshot_path()).ok()?.modified().ok()?;
            Some(DateTime::<Utc>::from(modified))
        }
    }
}

fn remove_database_files(config: &Config) -> Result<()> {
    let db_path = config.db_path();
    for suffix in ["", "-wal", "-shm"] {
        let path = PathBuf::from(format!("{}{}", db_path.display(), suffix));
        if path.exists() {
            fs::remove_file(&path)
                .with_context(|| format!("Failed to remove {}", path.display()))?;
            println!("{} Removed {}", "→".yellow().bold(), path.display());
        }
    }
    Ok(())
}

// Command handlers

pub fn handle_init(config: &Config, args: &ArgMatches) -> Result<()> {
    let force = args.get_flag("force");

    let exists = config
        .snapshot_exists()
        .context("Existing snapshot could not be read (use --force to overwrite)");
    if !force && exists? {
        bail!(
            "A snapshot already exists at {} (use --force to overwrite)",
            config.snapshot_path().display()
        );
    }

    // Start from a clean database file, it may be the reason for --force
    if force && config.backend == Backend::Sqlite {
        remove_database_files(config)?;
    }

    let mut store = config.create_store()?;
    let regions = store.reset()?;

    println!("{} Wayfarer initialization complete!", "✓".green().bold());
    println!(
        "{} Data directory: {}",
        "✓".green().bold(),
        config.data_dir.display().to_string().bright_white()
    );
    println!(
        "{} Snapshot ({}): {} regions",
        "✓".green().bold(),
        config.backend.as_str(),
        regions.len()
    );
    Ok(())
}

pub fn handle_list(config: &Config, args: &ArgMatches) -> Result<()> {
    let region_type = *args
        .get_one::<RegionType>("type")
        .context("missing region type")?;
    let only_visited = args.get_flag("visited");

    let mut store = config.open_store()?;
    print!("{}", render_region_list(store.request_load(), region_type, only_visited));
    Ok(())
}

pub fn handle_toggle(config: &Config, args: &ArgMatches) -> Result<()> {
    let target = args
        .get_one::<String>("TARGET")
        .context("missing toggle target")?;
    let region_type = args.get_one::<RegionType>("type").copied();
    let id = resolve_toggle_target(target, region_type).map_err(anyhow::Error::msg)?;

    let mut store = config.open_store()?;
    let regions = store.request_toggle(&id)?;

    match regions.iter().find(|r| r.id == id) {
        Some(region) if region.visited => {
            info!("Marked {} visited", region.id);
            println!("{} {} marked visited", "✓".green().bold(), region.name.bright_white());
        }
        Some(region) => {
            info!("Marked {} unvisited", region.id);
            println!("{} {} marked unvisited", "→".yellow().bold(), region.name.bright_white());
        }
        None => {
            println!("{} No region with id {}", "⚠".yellow().bold(), id.bright_white());
        }
    }
    Ok(())
}

pub fn handle_stats(config: &Config) -> Result<()> {
    let mut store = config.open_store()?;
    let regions = store.request_load();

    for region_type in RegionType::ALL {
        println!("{}", render_progress(&query::progress(regions, region_type)));
    }

    if let Some(saved) = last_saved(config) {
        println!(
            "\n{} {}",
            "Last saved:".bright_black(),
            saved.format("%Y-%m-%d %H:%M:%S UTC")
        );
    }
    Ok(())
}

pub fn handle_map(config: &Config, args: &ArgMatches) -> Result<()> {
    let path = args
        .get_one::<PathBuf>("TOPOLOGY")
        .context("missing topology file")?;
    let region_type = *args
        .get_one::<RegionType>("type")
        .context("missing region type")?;
    let show_unmatched = args.get_flag("unmatched");

    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read topology file {}", path.display()))?;
    let topology = Topology::from_json(&text)
        .with_context(|| format!("Could not load map data from {}", path.display()))?;

    let mut store = config.open_store()?;
    let visited_codes = store.request_visited_codes(region_type);
    let highlights = topology.highlight(region_type, &visited_codes);

    println!("{}\n", format!("{} map", region_type.label()).bright_white().bold());
    print!("{}", render_map(&highlights, show_unmatched));
    Ok(())
}

pub fn handle_report(config: &Config, args: &ArgMatches) -> Result<()> {
    let format_name = args
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("text");
    let format = ReportFormat::from_str(format_name)
        .with_context(|| format!("Unknown report format '{}'", format_name))?;

    let mut store = config.open_store()?;
    let data = gather_report_data(store.request_load());

    let content = match format {
        ReportFormat::Text => generate_text_report(&data),
        ReportFormat::Json => generate_json_report(&data)?,
        ReportFormat::Markdown => generate_markdown_report(&data),
    };

    match args.get_one::<PathBuf>("output") {
        Some(path) => {
            save_report(&content, path)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            println!(
                "{} Report saved to {}",
                "✓".green().bold(),
                path.display().to_string().bright_white()
            );
        }
        None => print!("{}", content),
    }
    Ok(())
}

pub fn handle_reset(config: &Config, args: &ArgMatches) -> Result<()> {
    if !args.get_flag("force") {
        let response = print_prompt("Forget every visit? [y/N]:")?;
        if response != "y" && response != "yes" {
            println!("{} Reset cancelled.", "✗".red().bold());
            return Ok(());
        }
    }

    let mut store = config.open_store()?;
    if store.is_detached() {
        bail!(
            "No usable snapshot in {}, run `wayfarer init` first",
            config.data_dir.display()
        );
    }
    let regions = store.reset()?;
    println!(
        "{} Reseeded {} regions, all unvisited",
        "✓".green().bold(),
        regions.len()
    );
    Ok(())
}
