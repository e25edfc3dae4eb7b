// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Apprunner Contributors

use apprunner_core::AppId;
use serde::{Deserialize, Serialize};

/// Wire shape of a run-request: `POST /app`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAppRequest {
    pub name: String,
    pub pack: String,
    #[serde(default = "default_args")]
    pub args: serde_json::Value,
    #[serde(rename = "ctx-last", default)]
    pub ctx_last: bool,
    #[serde(rename = "ctx-1st", default)]
    pub ctx_1st: bool,
}

fn default_args() -> serde_json::Value {
    serde_json::Value::Array(Vec::new())
}

/// Response to a successful create: the id is stringified, unlike the
/// list response below.
#[derive(Debug, Clone, Serialize)]
pub struct CreateAppResponse {
    pub id: String,
}

impl CreateAppResponse {
    pub fn new(id: AppId) -> Self {
        CreateAppResponse { id: id.to_string() }
    }
}

/// One entry of `GET /app`'s list response: unlike the create
/// response, `id` here is a JSON integer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppSummaryEntry {
    pub id: u64,
    pub name: String,
}

impl From<apprunner_core::AppSummary> for AppSummaryEntry {
    fn from(summary: apprunner_core::AppSummary) -> Self {
        AppSummaryEntry { id: summary.id.get(), name: summary.name }
    }
}
