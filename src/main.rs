extern crate env_logger;
#[macro_use]
extern crate log;

use anyhow::Result;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use fastagen::cli::Cli;
use fastagen::report::RunReport;
use fastagen::{generate_file, GeneratorConfig};

fn try_main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_target(false)
        .init();

    let cli = Cli::parse();

    info!("fastagen v{}", fastagen::cli::VERSION);

    let seed = match cli.seed {
        Some(seed) => {
            info!("Using specified seed {seed}");
            seed
        }
        None => {
            let seed = rand::random::<u64>();
            info!("Using random seed {seed}");
            seed
        }
    };
    let mut rng = StdRng::seed_from_u64(seed);

    let config = GeneratorConfig {
        target_size: cli.size.0,
        line_len: cli.line_len,
        alphabet: cli.alphabet,
    };

    // time everything!
    let now = std::time::Instant::now();
    let summary = generate_file(&cli.output, &config, &mut rng)?;
    let elapsed = now.elapsed().as_secs_f64();
    info!("Completed in {elapsed:.1}s");

    if let Some(report) = &cli.report {
        RunReport::new(&cli.output, seed, &config, &summary, elapsed).write(report)?;
    }

    println!("Generated {}, ~{:.2} MB", cli.output, summary.approx_mb());
    Ok(())
}

fn main() {
    if let Err(err) = try_main() {
        if log_enabled!(log::Level::Error) {
            error!("{}", err);

            // report any errors that are produced
            err.chain()
                .skip(1)
                .for_each(|cause| error!("  because: {}", cause));
        } else {
            // logging is switched off, the error still has to reach stderr
            eprintln!("Error: {:#}", err);
        }

        std::process::exit(1);
    }
}
