//! `leadcat categories` – print the vocabulary in priority order.

use anyhow::Result;
use leadcat_core::config::LeadcatConfig;

pub fn run_categories(cfg: &LeadcatConfig) -> Result<()> {
    let priority = cfg.priority_list();
    for (i, label) in priority.labels().iter().enumerate() {
        let marker = if label == priority.fallback() { " (fallback)" } else { "" };
        println!("{:>3}  {}{}", i + 1, label, marker);
    }
    Ok(())
}
