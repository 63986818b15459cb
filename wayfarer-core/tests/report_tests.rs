// Tests for progress report generation

use chrono::{TimeZone, Utc};
use tempfile::TempDir;
use wayfarer_core::catalog;
use wayfarer_core::model::{Region, RegionType};
use wayfarer_core::report::{
    ReportFormat, gather_report_data, generate_json_report, generate_markdown_report,
    generate_text_report, save_report,
};

fn sample_regions() -> Vec<Region> {
    let mut regions = catalog::all_regions();
    let at = Utc.with_ymd_and_hms(2024, 7, 14, 9, 0, 0).unwrap();
    for region in regions.iter_mut() {
        if ["US_STATE:VT", "US_STATE:ME", "COUNTRY:FR"].contains(&region.id.as_str()) {
            region.visited = true;
            region.visited_at = Some(at);
        }
    }
    regions
}

// ============================================================================
// Report Format Tests
// ============================================================================

#[test]
fn test_report_format_from_str() {
    assert!(matches!(ReportFormat::from_str("text"), Some(ReportFormat::Text)));
    assert!(matches!(ReportFormat::from_str("JSON"), Some(ReportFormat::Json)));
    assert!(matches!(ReportFormat::from_str("md"), Some(ReportFormat::Markdown)));
    assert!(matches!(ReportFormat::from_str("Markdown"), Some(ReportFormat::Markdown)));
    assert!(ReportFormat::from_str("pdf").is_none());
}

// ============================================================================
// Report Data Tests
// ============================================================================

#[test]
fn test_gather_report_data() {
    let data = gather_report_data(&sample_regions());

    assert_eq!(data.progress.len(), 2);
    assert_eq!(data.progress[0].region_type, RegionType::UsState);
    assert_eq!(data.progress[0].visited, 2);
    assert_eq!(data.progress[0].percent, 4);
    assert_eq!(data.progress[1].visited, 1);

    // Sorted by name within type, states first
    let names: Vec<&str> = data.visited.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Maine", "Vermont", "France"]);
}

// ============================================================================
// Rendering Tests
// ============================================================================

#[test]
fn test_generate_text_report() {
    let report = generate_text_report(&gather_report_data(&sample_regions()));

    assert!(report.contains("WAYFARER VISITED PLACES"));
    assert!(report.contains("US States"));
    assert!(report.contains("2 / 50"));
    assert!(report.contains("1 / 15"));
    assert!(report.contains("Vermont"));
    assert!(report.contains("2024-07-14"));
    assert!(!report.contains("Nothing visited yet"));
}

#[test]
fn test_generate_text_report_empty() {
    let report = generate_text_report(&gather_report_data(&catalog::all_regions()));
    assert!(report.contains("0 / 50"));
    assert!(report.contains("Nothing visited yet."));
}

#[test]
fn test_generate_json_report() {
    let json = generate_json_report(&gather_report_data(&sample_regions())).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["report"]["metadata"]["generator"], "Wayfarer");
    assert_eq!(value["report"]["summary"]["total_visited"], 3);
    assert_eq!(value["report"]["summary"]["progress"][0]["region_type"], "US_STATE");
    assert_eq!(value["report"]["visited"][2]["id"], "COUNTRY:FR");
}

#[test]
fn test_generate_markdown_report() {
    let report = generate_markdown_report(&gather_report_data(&sample_regions()));

    assert!(report.starts_with("# Visited Places"));
    assert!(report.contains("| US States | 2 | 50 | 4% |"));
    assert!(report.contains("## Countries"));
    assert!(report.contains("- **France** (2024-07-14)"));
}

#[test]
fn test_save_report() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("report.md");

    save_report("# Visited Places\n", &path).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "# Visited Places\n");
}
