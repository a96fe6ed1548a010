//! `leadcat classify <leads.csv>` – categorize leads and write the result.

use anyhow::{Context, Result};
use leadcat_core::config::LeadcatConfig;
use leadcat_core::dataset::Override;
use std::path::PathBuf;

use super::common::classify_file;
use super::summary::print_summary;

#[derive(Debug, Clone, Default)]
pub struct ClassifyOptions {
    pub leads: PathBuf,
    pub mapping: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub journey_column: Option<String>,
    pub filter: Option<String>,
    pub overrides: Vec<Override>,
}

/// Classifies, applies manual overrides, optionally filters, then writes CSV.
pub fn run_classify(cfg: &LeadcatConfig, opts: &ClassifyOptions) -> Result<()> {
    let (classifier, mut labeled) = classify_file(
        cfg,
        &opts.leads,
        opts.mapping.as_deref(),
        opts.journey_column.as_deref(),
    )?;

    for o in &opts.overrides {
        labeled
            .apply_override(o, classifier.priority())
            .with_context(|| format!("apply --set {}={}", o.row, o.label))?;
    }

    let total = labeled.len();
    let out = match &opts.filter {
        Some(label) => {
            if !classifier.priority().contains(label) {
                tracing::warn!(label = %label, "filter label is not in the priority list");
            }
            labeled.filtered(label)
        }
        None => labeled,
    };

    let output = opts.output.as_deref().unwrap_or(cfg.output_path.as_path());
    out.write_path(output)
        .with_context(|| format!("write {}", output.display()))?;

    println!("Wrote {} of {} records to {}", out.len(), total, output.display());
    print_summary(&out.summary());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use leadcat_core::Dataset;
    use std::fs;
    use tempfile::tempdir;

    fn fixture(dir: &std::path::Path) -> (LeadcatConfig, PathBuf) {
        let mapping = dir.join("mapping.csv");
        let leads = dir.join("leads.csv");
        fs::write(&mapping, "URL,TYPE\ncondo-x,Condo: X\n/buy,BUY\n").unwrap();
        fs::write(
            &leads,
            "name,journey\nAda,\"['/buy','/listings/condo-x-123']\"\nBob,no urls here\nCy,['/buy']\n",
        )
        .unwrap();
        let cfg = LeadcatConfig {
            mapping_path: mapping,
            output_path: dir.join("out.csv"),
            priority: vec!["Condo: X".into(), "BUY".into()],
            ..LeadcatConfig::default()
        };
        (cfg, leads)
    }

    #[test]
    fn writes_all_rows_with_type_first() {
        let dir = tempdir().unwrap();
        let (cfg, leads) = fixture(dir.path());
        run_classify(
            &cfg,
            &ClassifyOptions {
                leads,
                ..ClassifyOptions::default()
            },
        )
        .unwrap();

        let out = Dataset::from_path(&cfg.output_path).unwrap();
        assert_eq!(out.headers(), &["TYPE", "name", "journey"]);
        let types: Vec<&str> = out.column_values(0).collect();
        assert_eq!(types, vec!["Condo: X", "GENERAL", "BUY"]);
    }

    #[test]
    fn overrides_then_filter() {
        let dir = tempdir().unwrap();
        let (cfg, leads) = fixture(dir.path());
        let output = dir.path().join("buy.csv");
        run_classify(
            &cfg,
            &ClassifyOptions {
                leads,
                output: Some(output.clone()),
                filter: Some("BUY".into()),
                overrides: vec!["1=BUY".parse().unwrap()],
                ..ClassifyOptions::default()
            },
        )
        .unwrap();

        let out = Dataset::from_path(&output).unwrap();
        let names: Vec<&str> = out.column_values(1).collect();
        assert_eq!(names, vec!["Bob", "Cy"]);
    }

    #[test]
    fn unknown_override_label_fails() {
        let dir = tempdir().unwrap();
        let (cfg, leads) = fixture(dir.path());
        let err = run_classify(
            &cfg,
            &ClassifyOptions {
                leads,
                overrides: vec!["0=Nope".parse().unwrap()],
                ..ClassifyOptions::default()
            },
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("unknown category 'Nope'"));
    }

    #[test]
    fn missing_journey_column_fails() {
        let dir = tempdir().unwrap();
        let (cfg, leads) = fixture(dir.path());
        let err = run_classify(
            &cfg,
            &ClassifyOptions {
                leads,
                journey_column: Some("pages".into()),
                ..ClassifyOptions::default()
            },
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("missing required column 'pages'"));
    }
}
