// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Apprunner Contributors

use serde::Deserialize;

/// Wire shape of `POST /packs`: store `content` under `name`.
#[derive(Debug, Clone, Deserialize)]
pub struct PutPackRequest {
    pub name: String,
    pub content: String,
}
