// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Apprunner Contributors

//! The HTTP control plane binary: wires the supervisor
//! and code store behind `axum` routes. Exposed as a library too so
//! workspace-level tests can spawn the daemon in-process instead of as a
//! subprocess.

pub mod cli;
pub mod error;
pub mod routes;

use std::sync::Arc;

use apprunner_codestore::CodeStore;
use apprunner_supervisor::{PackageFetcher, Supervisor};
pub use cli::Cli;

/// Build a supervisor and router from parsed CLI flags, without binding a
/// listener — split out so tests can reuse it with an ephemeral port.
pub fn build(cli: &Cli) -> anyhow::Result<(axum::Router, Arc<CodeStore>)> {
    let store = Arc::new(CodeStore::open(&cli.file)?);
    let fetcher = if cli.csaddr.is_empty() {
        PackageFetcher::local(store.clone())
    } else {
        PackageFetcher::remote(cli.csaddr.clone())
    };

    let supervisor = Arc::new(Supervisor::new(fetcher));
    let router = routes::router(supervisor, store.clone());
    Ok((router, store))
}
