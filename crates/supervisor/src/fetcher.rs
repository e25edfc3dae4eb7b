// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Apprunner Contributors

use std::sync::Arc;

use apprunner_codestore::CodeStore;

/// Resolves package source bytes by name, either from a local embedded
/// code store or from a remote code-store peer over HTTP.
#[derive(Clone)]
pub enum PackageFetcher {
    Local(Arc<CodeStore>),
    Remote {
        cs_addr: String,
        client: reqwest::Client,
    },
}

impl PackageFetcher {
    pub fn local(store: Arc<CodeStore>) -> Self {
        Self::Local(store)
    }

    pub fn remote(cs_addr: impl Into<String>) -> Self {
        Self::Remote {
            cs_addr: cs_addr.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Fetch package bytes by name. `None` means "not found", folding
    /// transport errors and non-2xx remote responses into the same outcome
    /// the local store gives for a missing key.
    pub async fn fetch(&self, name: &str) -> Option<Vec<u8>> {
        match self {
            Self::Local(store) => match store.get_by_name(name) {
                Ok(bytes) => bytes,
                Err(err) => {
                    tracing::warn!(package = name, error = %err, "code store lookup failed");
                    None
                }
            },
            Self::Remote { cs_addr, client } => {
                let url = format!("http://{cs_addr}/packs/{name}");
                match client.get(&url).send().await {
                    Ok(resp) if resp.status().is_success() => resp.bytes().await.ok().map(|b| b.to_vec()),
                    Ok(resp) => {
                        tracing::warn!(package = name, status = %resp.status(), "remote code store returned non-success");
                        None
                    }
                    Err(err) => {
                        tracing::warn!(package = name, error = %err, "remote code store fetch failed");
                        None
                    }
                }
            }
        }
    }
}
