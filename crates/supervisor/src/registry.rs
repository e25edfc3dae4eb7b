// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Apprunner Contributors

use std::collections::HashMap;
use std::time::Duration;

use apprunner_core::{AppId, AppSummary, CoreError};
use apprunner_vm::ExitSender;
use parking_lot::Mutex;

/// Grace period the registry waits for a worker to honor a stop request
/// before giving up. Fixed, with no configuration surface.
pub const STOP_GRACE: Duration = Duration::from_secs(20);

/// One running (or about to run) app, as tracked by the registry.
pub struct AppRecord {
    pub id: AppId,
    pub name: String,
    pub exit_sender: Option<ExitSender>,
}

/// The live-app table. IDs start at 10, mirroring the historical
/// source reserving the low range for built-ins.
pub struct AppRegistry {
    inner: Mutex<Inner>,
}

struct Inner {
    apps: HashMap<AppId, AppRecord>,
    next_id: u64,
}

impl Default for AppRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl AppRegistry {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                apps: HashMap::new(),
                next_id: 10,
            }),
        }
    }

    pub fn allocate_id(&self) -> AppId {
        let mut guard = self.inner.lock();
        guard.next_id += 1;
        AppId::from(guard.next_id)
    }

    pub fn add(&self, record: AppRecord) {
        let mut guard = self.inner.lock();
        guard.apps.insert(record.id, record);
    }

    pub fn remove(&self, id: AppId) -> Option<AppRecord> {
        let mut guard = self.inner.lock();
        guard.apps.remove(&id)
    }

    pub fn get_all(&self) -> Vec<AppSummary> {
        let guard = self.inner.lock();
        let mut summaries: Vec<AppSummary> = guard
            .apps
            .values()
            .map(|record| AppSummary {
                id: record.id,
                name: record.name.clone(),
            })
            .collect();
        summaries.sort_by_key(|summary| summary.id);
        summaries
    }

    /// Ask a running app to stop, waiting up to [`STOP_GRACE`] for it to
    /// confirm. Resolves the sender under the lock and releases it before
    /// awaiting, so a slow or stuck worker never holds up other registry
    /// operations.
    pub async fn stop(&self, id: AppId) -> Result<(), CoreError> {
        let sender = {
            let guard = self.inner.lock();
            let record = guard.apps.get(&id).ok_or(CoreError::AppNotFound)?;
            record.exit_sender.clone()
        };

        match sender {
            Some(sender) => {
                sender.stop(STOP_GRACE).await;
                Ok(())
            }
            // No context was requested for this app: there is no channel to
            // signal, so the request silently succeeds (Open Question
            // resolved in favor of the historical source's behavior).
            None => Ok(()),
        }
    }
}
