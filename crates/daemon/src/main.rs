// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Apprunner Contributors

use apprunner_daemon::Cli;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    apprunner_core::init_tracing();

    let cli = Cli::parse();
    let (router, store) = apprunner_daemon::build(&cli)?;

    let addr = format!("0.0.0.0:{}", cli.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "apprunner daemon listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close()?;
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::warn!("failed to install ctrl-c handler");
    }
    tracing::info!("shutdown signal received, draining in-flight requests");
}
