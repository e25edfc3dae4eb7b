// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Apprunner Contributors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("code store I/O error: {0}")]
    Io(#[from] sled::Error),
}
