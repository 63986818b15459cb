// Progress report generation

use crate::model::{Region, RegionType};
use crate::query::{self, Progress};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";
const BAR_WIDTH: usize = 30;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ReportFormat {
    Text,
    Json,
    Markdown,
}

impl ReportFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Some(ReportFormat::Text),
            "json" => Some(ReportFormat::Json),
            "markdown" | "md" => Some(ReportFormat::Markdown),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisitedEntry {
    pub id: String,
    pub name: String,
    pub region_type: RegionType,
    pub visited_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportData {
    pub progress: Vec<Progress>,
    pub visited: Vec<VisitedEntry>,
}

pub fn gather_report_data(regions: &[Region]) -> ReportData {
    let progress = RegionType::ALL
        .iter()
        .map(|t| query::progress(regions, *t))
        .collect();

    let visited = RegionType::ALL
        .iter()
        .flat_map(|t| query::by_type(regions, *t))
        .filter(|r| r.visited)
        .map(|r| VisitedEntry {
            id: r.id,
            name: r.name,
            region_type: r.region_type,
            visited_at: r.visited_at,
        })
        .collect();

    ReportData { progress, visited }
}

pub fn generate_text_report(data: &ReportData) -> String {
    let mut report = String::new();

    report.push_str(RULE);
    report.push('\n');
    report.push_str("                    WAYFARER VISITED PLACES\n");
    report.push_str(RULE);
    report.push_str("\n\n");

    for progress in &data.progress {
        report.push_str(&format!(
            "{:<12} {:>3} / {:<3} {} {:>3}%\n",
            progress.region_type.label(),
            progress.visited,
            progress.total,
            progress_bar(progress.percent),
            progress.percent
        ));
    }
    report.push('\n');

    for region_type in RegionType::ALL {
        let entries: Vec<&VisitedEntry> = data
            .visited
            .iter()
            .filter(|e| e.region_type == region_type)
            .collect();
        if entries.is_empty() {
            continue;
        }

        report.push_str(RULE);
        report.push('\n');
        report.push_str(&region_type.label().to_uppercase());
        report.push('\n');
        report.push_str(RULE);
        report.push_str("\n\n");

        for entry in entries {
            report.push_str(&format!(
                "  ✓ {:<20} {}\n",
                entry.name,
                format_visited_at(entry.visited_at)
            ));
        }
        report.push('\n');
    }

    if data.visited.is_empty() {
        report.push_str("Nothing visited yet.\n");
    }

    report
}

pub fn generate_json_report(data: &ReportData) -> Result<String, serde_json::Error> {
    let json_report = serde_json::json!({
        "report": {
            "metadata": {
                "generator": "Wayfarer",
                "version": env!("CARGO_PKG_VERSION"),
                "generated_at": Utc::now().to_rfc3339(),
                "format": "json"
            },
            "summary": {
                "total_visited": data.visited.len(),
                "progress": data.progress
            },
            "visited": data.visited
        }
    });

    serde_json::to_string_pretty(&json_report)
}

pub fn generate_markdown_report(data: &ReportData) -> String {
    let mut report = String::from("# Visited Places\n\n");

    report.push_str("| Type | Visited | Total | Progress |\n");
    report.push_str("|------|--------:|------:|---------:|\n");
    for progress in &data.progress {
        report.push_str(&format!(
            "| {} | {} | {} | {}% |\n",
            progress.region_type.label(),
            progress.visited,
            progress.total,
            progress.percent
        ));
    }

    for region_type in RegionType::ALL {
        let entries: Vec<&VisitedEntry> = data
            .visited
            .iter()
            .filter(|e| e.region_type == region_type)
            .collect();
        if entries.is_empty() {
            continue;
        }

        report.push_str(&format!("\n## {}\n\n", region_type.label()));
        for entry in entries {
            report.push_str(&format!(
                "- **{}** ({})\n",
                entry.name,
                format_visited_at(entry.visited_at)
            ));
        }
    }

    report
}

pub fn save_report(content: &str, path: &Path) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

fn progress_bar(percent: u32) -> String {
    let filled = (percent as usize * BAR_WIDTH / 100).min(BAR_WIDTH);
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

fn format_visited_at(visited_at: Option<DateTime<Utc>>) -> String {
    match visited_at {
        Some(at) => at.format("%Y-%m-%d").to_string(),
        None => "date unknown".to_string(),
    }
}
