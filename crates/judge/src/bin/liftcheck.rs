//! liftcheck CLI
//!
//! Checks elevator data sets and judges candidate traces against them.

use clap::{Parser, Subcommand};
use liftcheck_cipher::AesCfbDecryptor;
use liftcheck_judge::{Judge, JudgeConfig};
use rand::Rng;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "liftcheck")]
#[command(about = "Conformance checker for elevator simulation traces")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Estimator trials per data set
    #[arg(long, global = true, default_value = "5000")]
    trials: usize,

    /// Estimator seed (random when omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that a data set is valid and report its time bounds
    Check {
        /// Request file, one request per line
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Judge a trace against a data set
    Judge {
        /// Request file, one request per line
        #[arg(short, long)]
        input: PathBuf,

        /// Trace file produced by the candidate
        #[arg(short, long)]
        output: PathBuf,

        /// Enforce the estimated max time instead of the absolute limit
        #[arg(long)]
        check_max_time: bool,

        /// Trace lines are encrypted
        #[arg(long, requires = "cipher_key")]
        decrypt: bool,

        /// 16-byte key for encrypted traces
        #[arg(long)]
        cipher_key: Option<String>,

        /// Write the rendered report here instead of stdout
        #[arg(long)]
        result: Option<PathBuf>,
    },
}

fn read_lines(path: &Path) -> Result<Vec<String>, std::io::Error> {
    Ok(fs::read_to_string(path)?
        .lines()
        .map(str::to_string)
        .collect())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let seed = cli.seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!(seed, trials = cli.trials, "Estimator settings");
    let config = JudgeConfig::default()
        .with_trials(cli.trials)
        .with_seed(seed);

    match cli.command {
        Commands::Check { input } => {
            let lines = read_lines(&input)?;
            match Judge::new(config).check_input(&lines) {
                Ok(message) => println!("Check Pass!\t{}", message),
                Err(e) => println!("Check Fail!\t{}", e),
            }
        }

        Commands::Judge {
            input,
            output,
            check_max_time,
            decrypt,
            cipher_key,
            result,
        } => {
            let input = read_lines(&input)?;
            let output = read_lines(&output)?;

            let mut judge = Judge::new(config);
            if let Some(key) = cipher_key {
                judge = judge.with_decryptor(Box::new(AesCfbDecryptor::from_key_str(&key)?));
            }

            let report = judge.judge(&input, &output, check_max_time, decrypt);
            let text = format!(
                "{}\t{}\n{}",
                if report.accepted { "PASS" } else { "FAIL" },
                report.elapsed,
                report.render()
            );
            match result {
                Some(path) => fs::write(path, text)?,
                None => print!("{}", text),
            }
        }
    }

    Ok(())
}
