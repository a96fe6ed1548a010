//! `leadcat summary <leads.csv>` – lead counts per category.

use anyhow::Result;
use leadcat_core::config::LeadcatConfig;
use leadcat_core::dataset::Summary;
use std::path::Path;

use super::common::classify_file;

pub fn run_summary(
    cfg: &LeadcatConfig,
    leads: &Path,
    mapping: Option<&Path>,
    journey_column: Option<&str>,
    json: bool,
) -> Result<()> {
    let (_, labeled) = classify_file(cfg, leads, mapping, journey_column)?;
    let summary = labeled.summary();
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }
    Ok(())
}

pub fn print_summary(summary: &Summary) {
    if summary.total == 0 {
        println!("No leads.");
        return;
    }
    println!("{:<42} {:>6}", "CATEGORY", "COUNT");
    for c in &summary.categories {
        println!("{:<42} {:>6}", c.category, c.count);
    }
    println!("{:<42} {:>6}", "total", summary.total);
}
