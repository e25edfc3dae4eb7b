// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Apprunner Contributors

use thiserror::Error;

/// Errors produced by the script VM boundary: decoding arguments, or
/// running a package.
#[derive(Debug, Error)]
pub enum VmError {
    #[error("arguments should be in array")]
    ArgsNotArray,

    #[error("invalid request")]
    InvalidRequest,

    #[error("script error: {0}")]
    Script(String),
}
