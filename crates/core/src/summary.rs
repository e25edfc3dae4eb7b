// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Apprunner Contributors

use crate::AppId;
use serde::{Deserialize, Serialize};

/// Snapshot of one registered app, as returned by `list()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSummary {
    pub id: AppId,
    pub name: String,
}
