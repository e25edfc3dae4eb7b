// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Apprunner Contributors

use crate::common;
use serde_json::json;

/// Scenario 1: create without context, list it, stop it (no-op success),
/// and see the registry reap the entry once the worker exits.
#[tokio::test]
async fn create_without_context_lists_and_reaps() {
    let server = common::spawn().await;
    server.put_pack("p1", b"fn main(a, b) { a + b }");

    let client = reqwest::Client::new();
    let response = client
        .post(server.url("/app"))
        .json(&json!({"name": "a", "pack": "p1", "args": [1, 2]}))
        .send()
        .await
        .expect("create request should succeed");
    assert_eq!(response.status(), 201);
    let body: serde_json::Value = response.json().await.expect("create body should be json");
    assert_eq!(body["id"], json!("11"));

    let list: serde_json::Value = client
        .get(server.url("/app"))
        .send()
        .await
        .expect("list request should succeed")
        .json()
        .await
        .expect("list body should be json");
    assert_eq!(list, json!([{"id": 11, "name": "a"}]));

    let stop = client
        .delete(server.url("/app/11"))
        .send()
        .await
        .expect("stop request should succeed");
    assert_eq!(stop.status(), 200);

    wait_until_empty(&client, &server).await;
}

/// Scenario 2: `ctx-1st` splices the context map first; the script drains
/// `exit-chan` and the DELETE reports success well before the 20s grace.
#[tokio::test]
async fn create_with_ctx_1st_delivers_sentinel_on_stop() {
    let server = common::spawn().await;
    server.put_pack(
        "p2",
        br#"
        fn main(ctx, x) {
            ctx["exit-chan"].recv();
            x
        }
        "#,
    );

    let client = reqwest::Client::new();
    let response = client
        .post(server.url("/app"))
        .json(&json!({"name": "b", "pack": "p2", "args": ["x"], "ctx-1st": true}))
        .send()
        .await
        .expect("create request should succeed");
    assert_eq!(response.status(), 201);
    let body: serde_json::Value = response.json().await.expect("create body should be json");
    assert_eq!(body["id"], json!("12"));

    let stop = client
        .delete(server.url("/app/12"))
        .send()
        .await
        .expect("stop request should succeed");
    assert_eq!(stop.status(), 200);

    wait_until_empty(&client, &server).await;
}

/// A script can stash and retrieve state through the documented
/// `setval`/`getval` appval functions (no prefix).
#[tokio::test]
async fn script_can_use_setval_and_getval_by_name() {
    let server = common::spawn().await;
    server.put_pack(
        "p3",
        br#"
        fn main() {
            setval("tok", "k", 99);
            getval("tok", "k")
        }
        "#,
    );

    let client = reqwest::Client::new();
    let response = client
        .post(server.url("/app"))
        .json(&json!({"name": "c", "pack": "p3", "args": []}))
        .send()
        .await
        .expect("create request should succeed");
    assert_eq!(response.status(), 201);
}

async fn wait_until_empty(client: &reqwest::Client, server: &common::TestServer) {
    for _ in 0..50 {
        let list: serde_json::Value = client
            .get(server.url("/app"))
            .send()
            .await
            .expect("list request should succeed")
            .json()
            .await
            .expect("list body should be json");
        if list == json!([]) {
            return;
        }
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    }
    panic!("registry did not reap the stopped app in time");
}
