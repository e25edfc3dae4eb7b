// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Apprunner Contributors

use std::sync::Arc;

use apprunner_codestore::CodeStore;
use apprunner_daemon::Cli;

/// An in-process daemon bound to an ephemeral port, backed by a temporary
/// code-store file. Dropped at the end of a test, which aborts its server
/// task and lets the tempdir clean itself up.
pub struct TestServer {
    pub base_url: String,
    pub store: Arc<CodeStore>,
    server: tokio::task::JoinHandle<()>,
    _tempdir: tempfile::TempDir,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.server.abort();
    }
}

impl TestServer {
    pub fn put_pack(&self, name: &str, bytes: &[u8]) {
        self.store.put(name, bytes).expect("seed package into code store");
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

pub async fn spawn() -> TestServer {
    let tempdir = tempfile::tempdir().expect("tempdir should be creatable");
    let cli = Cli {
        port: "0".to_string(),
        csaddr: String::new(),
        file: tempdir.path().join("packs.db"),
    };

    let (router, store) = apprunner_daemon::build(&cli).expect("daemon should build");
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("should bind an ephemeral port");
    let addr = listener.local_addr().expect("listener should have a local address");

    let server = tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });

    TestServer {
        base_url: format!("http://{addr}"),
        store,
        server,
        _tempdir: tempdir,
    }
}
