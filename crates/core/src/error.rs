// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Apprunner Contributors

use thiserror::Error;

/// Errors shared across crates that don't yet have a more specific error type
/// of their own.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("app not found")]
    AppNotFound,
}
