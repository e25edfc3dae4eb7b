// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Apprunner Contributors

use apprunner_core::CoreError;
use apprunner_vm::VmError;
use thiserror::Error;

/// Errors produced by [`crate::Supervisor`] operations, at the granularity
/// the HTTP layer needs to pick a status code.
#[derive(Debug, Error)]
pub enum SupervisorError {
    #[error("package not found")]
    PackageNotFound,

    #[error(transparent)]
    Marshal(#[from] VmError),

    #[error(transparent)]
    Registry(#[from] CoreError),
}
