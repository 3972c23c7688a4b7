//! Mythic Beasts DNS-01 hook
//!
//! Publishes or removes an ACME DNS-01 challenge record through the Mythic
//! Beasts Primary DNS API. Intended for manual use and for ACME client hooks.
//!
//! # Usage
//! ```bash
//! export MYTHICBEASTS_API_PASSWORDS="example.com password1"
//!
//! # Publish the challenge record
//! mb-dns01 present www.example.com "$KEY_AUTHORIZATION"
//!
//! # Remove it again
//! mb-dns01 cleanup www.example.com "$KEY_AUTHORIZATION"
//! ```

use std::net::IpAddr;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mythicbeasts_dns01::{
    ChallengeProvider, Dns01Record, MythicBeastsProvider, SoaZoneResolver, challenge_domain,
};
use tracing_subscriber::EnvFilter;

// ============================================================
// CLI Definition
// ============================================================

#[derive(Parser)]
#[command(name = "mb-dns01")]
#[command(about = "ACME DNS-01 challenge records via the Mythic Beasts DNS API", long_about = None)]
#[command(version)]
struct Cli {
    /// Zone/password pairs, e.g. "example.com pw1 example.org pw2"
    #[arg(long, env = "MYTHICBEASTS_API_PASSWORDS", hide_env_values = true)]
    passwords: Option<String>,

    /// API endpoint
    #[arg(long, env = "MYTHICBEASTS_API_ENDPOINT")]
    endpoint: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    /// Nameservers used to find the authority zone (defaults to the system resolver)
    #[arg(long = "nameserver", value_name = "IP")]
    nameservers: Vec<IpAddr>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Publish the challenge TXT record
    Present(ChallengeArgs),

    /// Remove the challenge TXT record
    Cleanup(ChallengeArgs),
}

#[derive(clap::Args)]
struct ChallengeArgs {
    /// Domain being validated (e.g., www.example.com)
    domain: String,

    /// Key authorization from the ACME server
    key_authorization: String,

    /// Challenge token (not needed to compute the record)
    #[arg(long, default_value = "")]
    token: String,
}

// ============================================================
// Main Entry Point
// ============================================================

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let provider = build_provider(&cli)?;

    match cli.command {
        Commands::Present(args) => {
            let record =
                Dns01Record::new(challenge_domain(&args.domain), &args.key_authorization);
            provider
                .present(&args.domain, &args.token, &args.key_authorization)
                .await
                .with_context(|| format!("failed to publish {}", record.fqdn))?;
            tracing::info!(record = %record.fqdn, value = %record.value, "Challenge record published");
        }
        Commands::Cleanup(args) => {
            let record =
                Dns01Record::new(challenge_domain(&args.domain), &args.key_authorization);
            provider
                .cleanup(&args.domain, &args.token, &args.key_authorization)
                .await
                .with_context(|| format!("failed to remove {}", record.fqdn))?;
            tracing::info!(record = %record.fqdn, "Challenge record removed");
        }
    }

    Ok(())
}

fn build_provider(cli: &Cli) -> Result<MythicBeastsProvider> {
    let mut builder = MythicBeastsProvider::builder(cli.passwords.clone().unwrap_or_default())
        .timeout(Duration::from_secs(cli.timeout));

    if let Some(endpoint) = &cli.endpoint {
        builder = builder.endpoint(endpoint.clone());
    }
    if !cli.nameservers.is_empty() {
        builder = builder.zone_resolver(Arc::new(SoaZoneResolver::with_nameservers(
            &cli.nameservers,
        )));
    }

    builder.build().context("invalid provider configuration")
}
