// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Apprunner Contributors

use std::path::PathBuf;

use clap::Parser;

/// Process surface: three flags, no config file, no env overrides
/// beyond `RUST_LOG` for logging.
#[derive(Parser, Debug)]
pub struct Cli {
    #[arg(long, default_value = "8080")]
    pub port: String,

    #[arg(long, default_value = "")]
    pub csaddr: String,

    #[arg(long, default_value = "packs.db")]
    pub file: PathBuf,
}
