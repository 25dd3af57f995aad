// Written in 2025 by Joshua Doman <joshsdoman@gmail.com>
// SPDX-License-Identifier: CC0-1.0

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

use secret_share::{KeystreamDrbg, RandomSource, Share};

#[derive(Parser)]
#[clap(name = "secret-share")]
#[clap(author = "Joshua Doman <joshsdoman@gmail.com>")]
#[clap(version = "0.1.0")]
#[clap(about = "CLI tool to split secrets into threshold shares and merge them back.", long_about = None)]
struct Cli {
    /// Log filter used when RUST_LOG is not set
    #[clap(long, global = true, default_value = "warn")]
    log_level: String,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Splits a hex-encoded secret, outputs one hex-encoded share per line
    Split(SplitArgs),
    /// Merges hex-encoded shares, outputs the hex-encoded secret
    Merge(MergeArgs),
}

#[derive(Args)]
struct SplitArgs {
    /// Hex-encoded secret to split
    secret: String,
    /// Number of shares to create (at most 255)
    #[clap(short = 'n', long)]
    shares: usize,
    /// Number of shares required to recover the secret
    #[clap(short, long)]
    threshold: usize,
    /// Hex-encoded seed for a reproducible split. Uses the OS-seeded
    /// generator if omitted
    #[clap(long)]
    seed: Option<String>,
}

#[derive(Args)]
struct MergeArgs {
    /// Hex-encoded shares
    #[clap(required = true)]
    shares: Vec<String>,
    /// Number of shares required to recover the secret
    #[clap(short, long)]
    threshold: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&cli.log_level);

    match cli.command {
        Commands::Split(args) => handle_split(args),
        Commands::Merge(args) => handle_merge(args),
    }
}

/// Logs go to stderr so stdout only carries shares and secrets
fn init_logging(default_level: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

fn handle_split(args: SplitArgs) -> Result<()> {
    let secret = hex::decode(args.secret.trim()).context("Failed to decode hex secret")?;

    let mut rng: Box<dyn RandomSource> = match args.seed {
        Some(seed) => {
            let seed = hex::decode(seed.trim()).context("Failed to decode hex seed")?;
            if seed.is_empty() {
                bail!("Seed must not be empty.");
            }
            Box::new(KeystreamDrbg::from_seed_material(&seed))
        }
        None => Box::new(rand::rng()),
    };

    let shares = secret_share::split(rng.as_mut(), &secret, args.shares, args.threshold)
        .context("Split failed")?;

    for share in shares {
        println!("{}", share);
    }

    Ok(())
}

fn handle_merge(args: MergeArgs) -> Result<()> {
    let mut shares = Vec::new();
    for share_str in args.shares {
        let share = Share::from_str(&share_str)
            .with_context(|| format!("Failed to parse share: {}", share_str))?;
        shares.push(share);
    }

    let secret = secret_share::merge(&shares, args.threshold).context("Merge failed")?;

    println!("{}", hex::encode(secret));

    Ok(())
}
