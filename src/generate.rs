use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use rand::Rng;

use crate::alphabet::Alphabet;
use crate::record::Record;

/// 1000 MiB
pub const DEFAULT_TARGET_SIZE: u64 = 1000 * 1024 * 1024;
pub const DEFAULT_LINE_LEN: usize = 80;
pub const DEFAULT_FILENAME: &str = "test_1gb.fasta";

// how often (in records) a progress message is logged
const PROGRESS_INTERVAL: u64 = 1 << 20;

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Generation stops once the approximate byte count reaches this value
    pub target_size: u64,
    /// Number of symbols in every sequence line
    pub line_len: usize,
    pub alphabet: Alphabet,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            target_size: DEFAULT_TARGET_SIZE,
            line_len: DEFAULT_LINE_LEN,
            alphabet: Alphabet::dna(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GenerationSummary {
    pub records: u64,
    /// Sum of `Record::approx_len` over every record written. This is computed,
    /// not measured from the writer.
    pub approx_bytes: u64,
}

impl GenerationSummary {
    pub fn approx_mb(&self) -> f64 {
        self.approx_bytes as f64 / 1024.0 / 1024.0
    }
}

/// Writes random FASTA records to `writer` until the approximate number of bytes
/// written is at least `config.target_size`.
///
/// The size check happens after each full record, so at least one record is always
/// written (even for a target of zero) and the last record may overshoot the target.
/// The writer is flushed before returning.
///
/// # Errors
///
/// Any error returned by `writer` is propagated immediately.
pub fn generate<W: Write>(
    writer: &mut W,
    config: &GeneratorConfig,
    rng: &mut impl Rng,
) -> std::io::Result<GenerationSummary> {
    let mut summary = GenerationSummary::default();
    let mut seq = Vec::with_capacity(config.line_len);

    loop {
        config.alphabet.fill(&mut seq, config.line_len, rng);

        let record = Record::new(summary.records + 1, &seq);
        record.write_to(writer)?;

        summary.approx_bytes += record.approx_len();
        summary.records += 1;

        if summary.records % PROGRESS_INTERVAL == 0 {
            debug!(
                "{} records, ~{:.2} MB written",
                summary.records,
                summary.approx_mb()
            );
        }

        if summary.approx_bytes >= config.target_size {
            break;
        }
    }

    writer.flush()?;
    Ok(summary)
}

/// Creates (or truncates) the file at `path` and fills it using [`generate`].
///
/// # Errors
///
/// Returns an error naming the path if the file cannot be created or written to.
pub fn generate_file(
    path: impl AsRef<Path>,
    config: &GeneratorConfig,
    rng: &mut impl Rng,
) -> Result<GenerationSummary> {
    let path = path.as_ref();

    let file = File::create(path)
        .with_context(|| format!("Unable to create output file {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    info!(
        "Writing ~{} bytes of {}-symbol records to {}",
        config.target_size,
        config.line_len,
        path.display()
    );

    let summary = generate(&mut writer, config, rng)
        .with_context(|| format!("Unable to write to {}", path.display()))?;

    info!(
        "Wrote {} records, ~{} bytes",
        summary.records, summary.approx_bytes
    );

    Ok(summary)
}
