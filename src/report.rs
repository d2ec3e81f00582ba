use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::generate::{GenerationSummary, GeneratorConfig};

/// Metadata describing a single generation run, written as JSON with `--report`.
#[derive(Serialize, Deserialize, Default, Debug, PartialEq)]
pub struct RunReport {
    pub fastagen_version: String,
    pub output_path: String,
    pub generated_date: String,
    pub seed: u64,
    pub target_size: u64,
    pub line_len: usize,
    pub alphabet: String,
    pub records: u64,
    pub approx_bytes: u64,
    pub approx_mb: f64,
    pub elapsed: f64,
}

impl RunReport {
    pub fn new(
        output_path: &str,
        seed: u64,
        config: &GeneratorConfig,
        summary: &GenerationSummary,
        elapsed: f64,
    ) -> Self {
        RunReport {
            fastagen_version: crate::cli::VERSION.to_string(),
            output_path: output_path.to_string(),
            generated_date: format!("{:?}", chrono::offset::Local::now()),
            seed,
            target_size: config.target_size,
            line_len: config.line_len,
            alphabet: config.alphabet.to_string(),
            records: summary.records,
            approx_bytes: summary.approx_bytes,
            approx_mb: summary.approx_mb(),
            elapsed,
        }
    }

    pub fn write(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self).context("Could not serialize report")?;

        std::fs::write(path, json)
            .with_context(|| format!("Unable to write report to {}", path.display()))?;
        info!("Wrote run report to {}", path.display());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_fields() {
        let config = GeneratorConfig {
            target_size: 200,
            ..GeneratorConfig::default()
        };
        let summary = GenerationSummary {
            records: 3,
            approx_bytes: 261,
        };
        let report = RunReport::new("out.fasta", 9, &config, &summary, 0.5);

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["output_path"], "out.fasta");
        assert_eq!(value["seed"], 9);
        assert_eq!(value["alphabet"], "A,C,G,T");
        assert_eq!(value["records"], 3);
        assert_eq!(value["approx_bytes"], 261);
        assert_eq!(value["line_len"], 80);

        let back: RunReport = serde_json::from_value(value).unwrap();
        assert_eq!(back, report);
    }
}
