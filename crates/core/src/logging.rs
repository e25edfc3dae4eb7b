// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Apprunner Contributors

use tracing_subscriber::EnvFilter;

/// Installs the process-wide `tracing` subscriber, honoring `RUST_LOG`.
///
/// Call once, from `main`, before anything else logs.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
