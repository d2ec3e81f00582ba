use clap::builder::styling::AnsiColor;
use clap::builder::Styles;
use clap::Parser;

use crate::alphabet::Alphabet;
use crate::generate::{DEFAULT_FILENAME, DEFAULT_LINE_LEN};

const fn extra_build_info() -> &'static str {
    match option_env!("CARGO_BUILD_DESC") {
        Some(e) => e,
        None => env!("CARGO_PKG_VERSION"),
    }
}
pub const VERSION: &str = extra_build_info();
const INFO_STRING: &str = "
🧬 fastagen version ";
const AFTER_STRING: &str = "
   ──────────────────────────────────
   random FASTA files for testing and benchmarking";

// colouring of the help
const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Yellow.on_default().bold())
    .usage(AnsiColor::BrightMagenta.on_default().bold())
    .literal(AnsiColor::BrightMagenta.on_default())
    .placeholder(AnsiColor::White.on_default());

#[derive(Parser, Debug)]
#[command(
    version = VERSION,
    about = format!("{}{}{}", INFO_STRING, VERSION, AFTER_STRING),
    styles = STYLES
)]
pub struct Cli {
    /// the output .fasta file, which is overwritten if it exists
    #[arg(short, long, default_value = DEFAULT_FILENAME)]
    pub output: String,

    /// approximate size of the output. a plain number of bytes, or a number
    /// with a binary unit suffix:
    ///   --size 4096
    ///   --size 64K
    ///   --size 1000M
    ///   --size 2GiB
    #[arg(
        short,
        long,
        value_parser = |x: &str| ArgSize::try_from(x),
        default_value = "1000M",
        verbatim_doc_comment
    )]
    pub size: ArgSize,

    /// number of symbols in each sequence line
    #[arg(short, long, default_value_t = DEFAULT_LINE_LEN)]
    pub line_len: usize,

    /// alphabet to draw symbols from, comma-separated (e.g. A,C,G,U)
    #[arg(short, long, default_value = "A,C,G,T")]
    pub alphabet: Alphabet,

    /// seed for the random number generator. if omitted, a seed is chosen at
    /// random and logged so that the run can be reproduced
    #[arg(long)]
    pub seed: Option<u64>,

    /// write a JSON report of the run to this path
    #[arg(long)]
    pub report: Option<String>,
}

/// A size in bytes, parsed from a number with an optional binary unit suffix.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ArgSize(pub u64);

/// Error type for parsing a size string.
#[derive(Debug)]
pub struct ParseSizeErr(String);

impl std::fmt::Display for ParseSizeErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid size: {}", self.0)
    }
}

impl std::error::Error for ParseSizeErr {}

impl<'a> TryFrom<&'a str> for ArgSize {
    type Error = ParseSizeErr;

    fn try_from(arg: &'a str) -> Result<ArgSize, Self::Error> {
        let arg_lc = arg.trim().to_lowercase();
        let split = arg_lc
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(arg_lc.len());
        let (number, unit) = arg_lc.split_at(split);

        let shift = match unit.trim() {
            "" | "b" => 0,
            "k" | "kb" | "kib" => 10,
            "m" | "mb" | "mib" => 20,
            "g" | "gb" | "gib" => 30,
            "t" | "tb" | "tib" => 40,
            other => {
                return Err(ParseSizeErr(indoc::formatdoc! {"
                unknown unit '{other}' in '{arg}'. Expected a number of bytes, \
                optionally followed by K, M, G or T, as in:
                  --size 4096
                  --size 64K
                  --size 1000M
                "}))
            }
        };

        let number = number.parse::<u64>().map_err(|_| {
            ParseSizeErr(format!(
                "'{arg}' does not start with a non-negative integer"
            ))
        })?;

        number
            .checked_mul(1u64 << shift)
            .map(ArgSize)
            .ok_or_else(|| ParseSizeErr(format!("'{arg}' is too large")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_sizes() {
        assert_eq!(ArgSize::try_from("0").unwrap(), ArgSize(0));
        assert_eq!(ArgSize::try_from("200").unwrap(), ArgSize(200));
        assert_eq!(ArgSize::try_from("64K").unwrap(), ArgSize(64 * 1024));
        assert_eq!(
            ArgSize::try_from("1000M").unwrap(),
            ArgSize(1000 * 1024 * 1024)
        );
        assert_eq!(
            ArgSize::try_from("2GiB").unwrap(),
            ArgSize(2 * 1024 * 1024 * 1024)
        );
        assert_eq!(ArgSize::try_from("3 mb").unwrap(), ArgSize(3 << 20));
    }

    #[test]
    fn parse_bad_sizes() {
        assert!(ArgSize::try_from("").is_err());
        assert!(ArgSize::try_from("-5").is_err());
        assert!(ArgSize::try_from("1.5G").is_err());
        assert!(ArgSize::try_from("10X").is_err());
        assert!(ArgSize::try_from("M").is_err());
        assert!(ArgSize::try_from("99999999999T").is_err());
    }

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["fastagen"]).unwrap();
        assert_eq!(cli.output, "test_1gb.fasta");
        assert_eq!(cli.size, ArgSize(1000 * 1024 * 1024));
        assert_eq!(cli.line_len, 80);
        assert_eq!(cli.alphabet, Alphabet::dna());
        assert_eq!(cli.seed, None);
        assert_eq!(cli.report, None);
    }

    #[test]
    fn rejects_bad_alphabet() {
        assert!(Cli::try_parse_from(["fastagen", "-a", "A,A"]).is_err());
    }
}
