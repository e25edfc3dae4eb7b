// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Apprunner Contributors

use parking_lot::Mutex;
use std::collections::HashMap;

/// Per-token key/value scratch store, registered on the VM's extension
/// hook. Mirrors the historical source's `appval` module: scripts
/// choose an arbitrary `token` to namespace their own state. There is no
/// cross-process persistence and no expiry.
#[derive(Default)]
pub struct AppvalStore {
    namespaces: Mutex<HashMap<String, HashMap<String, rhai::Dynamic>>>,
}

impl AppvalStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn setval(&self, token: &str, key: &str, value: rhai::Dynamic) -> bool {
        let mut namespaces = self.namespaces.lock();
        namespaces.entry(token.to_string()).or_default().insert(key.to_string(), value);
        true
    }

    pub fn getval(&self, token: &str, key: &str) -> rhai::Dynamic {
        let namespaces = self.namespaces.lock();
        namespaces.get(token).and_then(|ns| ns.get(key)).cloned().unwrap_or(rhai::Dynamic::UNIT)
    }
}
