// Copyright 2026 osac Contributors
// SPDX-License-Identifier: Apache-2.0

use anyhow::Result;
use clap::{CommandFactory, Parser};

use osac::{ClientConfig, HttpClient};
use osac_cli::cli::output::Output;
use osac_cli::cli::{get_cmd, list_cmd, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let out = Output::new(cli.json, cli.quiet);
    let result = run(cli, out).await;

    // Consistent exit codes: 0=success, 1=error (usage errors exit through clap)
    if let Err(e) = &result {
        out.report_error(
            &format!("{e:#}"),
            &mut std::io::stdout(),
            &mut std::io::stderr(),
        );
        std::process::exit(1);
    }

    result
}

async fn run(cli: Cli, out: Output) -> Result<()> {
    if let Commands::Completions { shell } = cli.command {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "osac", &mut std::io::stdout());
        return Ok(());
    }

    let config = ClientConfig::resolve(cli.base_url.as_deref(), cli.timeout)?;
    tracing::debug!(base_url = %config.base_url, timeout = ?config.timeout, "client config");
    let client = HttpClient::new(&config)?;

    match cli.command {
        Commands::List { product, release } => {
            list_cmd::run(&client, product, release.as_deref(), out).await
        }
        Commands::Get {
            product,
            release,
            package,
            dir,
        } => get_cmd::run(&client, product, &release, package.as_deref(), &dir, out).await,
        Commands::Completions { .. } => Ok(()),
    }
}
