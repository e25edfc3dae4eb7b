// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Apprunner Contributors

use crate::StoreError;
use std::path::Path;

/// Keyed blob store for packages, backing local-mode package
/// fetches and the `/packs` façade.
pub struct CodeStore {
    db: sled::Db,
}

impl CodeStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let db = sled::open(path)?;
        tracing::info!("code store opened");
        Ok(CodeStore { db })
    }

    pub fn put(&self, name: &str, bytes: &[u8]) -> Result<(), StoreError> {
        self.db.insert(name, bytes)?;
        Ok(())
    }

    pub fn get_by_name(&self, name: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.db.get(name)?.map(|v| v.to_vec()))
    }

    pub fn get_all(&self) -> Result<Vec<String>, StoreError> {
        let mut names = Vec::new();
        for entry in self.db.iter() {
            let (key, _) = entry?;
            if let Ok(name) = String::from_utf8(key.to_vec()) {
                names.push(name);
            }
        }
        Ok(names)
    }

    pub fn del_by_name(&self, name: &str) -> Result<(), StoreError> {
        self.db.remove(name)?;
        Ok(())
    }

    pub fn close(&self) -> Result<(), StoreError> {
        self.db.flush()?;
        tracing::info!("code store closed");
        Ok(())
    }
}
