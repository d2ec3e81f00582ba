//! Generation of synthetic FASTA files made of random sequences, for use as
//! test and benchmark input.

#[macro_use]
extern crate log;

pub mod alphabet;
pub mod cli;
pub mod generate;
pub mod record;
pub mod report;

pub use alphabet::Alphabet;
pub use generate::{generate, generate_file, GenerationSummary, GeneratorConfig};
