// Copyright (c) 2025 - Cowboy AI, Inc.
//! DigitalOcean Dynamic Inventory
//!
//! Prints an Ansible dynamic inventory built from the droplets of a
//! DigitalOcean account.
//!
//! Run with: ansible-playbook -i droplet-inventory site.yml
//!
//! Prerequisites:
//! 1. DigitalOcean API token (via DO_TOKEN environment variable)
//! 2. Optional API override (via DO_API_URL environment variable)
//!
//! Logs go to stderr (`RUST_LOG`, default `warn`); stdout carries only JSON.

use anyhow::{Context, Result};
use clap::Parser;
use droplet_inventory::{
    adapters::DigitalOceanClient,
    config::DigitalOceanConfig,
    inventory::{serialize, serialize_host, serialize_host_pretty, serialize_pretty},
    source::generate,
};
use std::io::Write;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Ansible dynamic inventory for DigitalOcean droplets
#[derive(Debug, Parser)]
#[command(name = "droplet-inventory")]
#[command(version, about)]
struct Cli {
    /// Print the full inventory (default)
    #[arg(long, conflicts_with = "host")]
    list: bool,

    /// Print the variables of a single host
    #[arg(long, value_name = "HOSTNAME")]
    host: Option<String>,

    /// Indent the JSON output
    #[arg(long)]
    pretty: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Load configuration before touching the network
    let config = DigitalOceanConfig::from_env().context("invalid configuration")?;
    debug!("Configuration loaded: {:?}", config);

    let client = DigitalOceanClient::new(config).context("failed to create DigitalOcean client")?;
    let inventory = generate(&client)
        .await
        .context("failed to fetch droplets")?;
    info!(
        "Inventory has {} groups and {} hosts",
        inventory.groups().len(),
        inventory.host_count()
    );

    debug!(list = cli.list, host = ?cli.host, "Rendering inventory");
    let output = match (&cli.host, cli.pretty) {
        (Some(host), true) => serialize_host_pretty(&inventory, host),
        (Some(host), false) => serialize_host(&inventory, host),
        (None, true) => serialize_pretty(&inventory),
        (None, false) => serialize(&inventory),
    }
    .context("failed to render inventory")?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&output)?;
    stdout.write_all(b"\n")?;
    stdout.flush()?;

    Ok(())
}
