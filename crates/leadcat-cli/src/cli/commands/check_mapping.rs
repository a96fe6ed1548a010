//! `leadcat check-mapping` – report problems in the mapping table.

use anyhow::Result;
use leadcat_core::config::LeadcatConfig;
use std::path::Path;

use super::common::load_mapping;

pub fn run_check_mapping(cfg: &LeadcatConfig, mapping: Option<&Path>) -> Result<()> {
    let map = load_mapping(cfg, mapping)?;
    let report = map.check(&cfg.priority_list());

    println!(
        "{} patterns mapping to {} categories",
        report.patterns, report.categories
    );
    for o in &report.overwritten {
        println!(
            "  duplicate pattern '{}': '{}' replaced by '{}'",
            o.pattern, o.previous, o.current
        );
    }
    for category in &report.unreachable {
        println!("  category '{category}' is not in the priority list and will never be assigned");
    }
    if report.is_clean() {
        println!("Mapping OK.");
    }
    Ok(())
}
