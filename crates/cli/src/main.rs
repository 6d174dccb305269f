// Copyright 2026 Benchbook Contributors
// SPDX-License-Identifier: Apache-2.0

//! Benchbook CLI entry point.

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = benchbook_cli::run().await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
