// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Apprunner Contributors

use crate::common;
use serde_json::json;

/// Scenario 3: missing package is a 404 with no registry entry created.
#[tokio::test]
async fn create_with_missing_package_is_not_found() {
    let server = common::spawn().await;
    let client = reqwest::Client::new();

    let response = client
        .post(server.url("/app"))
        .json(&json!({"name": "c", "pack": "missing", "args": []}))
        .send()
        .await
        .expect("create request should succeed");
    assert_eq!(response.status(), 404);
    assert_eq!(response.text().await.expect("body should be text"), "package not found");

    let list: serde_json::Value = client
        .get(server.url("/app"))
        .send()
        .await
        .expect("list request should succeed")
        .json()
        .await
        .expect("list body should be json");
    assert_eq!(list, json!([]));
}

/// Scenario 4: non-array `args` is a 400, no registry entry created.
#[tokio::test]
async fn create_with_non_array_args_is_bad_request() {
    let server = common::spawn().await;
    server.put_pack("p1", b"fn main() { 1 }");
    let client = reqwest::Client::new();

    let response = client
        .post(server.url("/app"))
        .json(&json!({"name": "d", "pack": "p1", "args": {"k": 1}}))
        .send()
        .await
        .expect("create request should succeed");
    assert_eq!(response.status(), 400);
    assert_eq!(
        response.text().await.expect("body should be text"),
        "arguments should be in array"
    );
}

/// Boundary: `args: "null"` is not an array either.
#[tokio::test]
async fn create_with_null_args_is_bad_request() {
    let server = common::spawn().await;
    server.put_pack("p1", b"fn main() { 1 }");
    let client = reqwest::Client::new();

    let response = client
        .post(server.url("/app"))
        .json(&json!({"name": "d", "pack": "p1", "args": null}))
        .send()
        .await
        .expect("create request should succeed");
    assert_eq!(response.status(), 400);
}

/// Boundary: stopping an unknown id is 500 with the legacy "app not found"
/// text, not 404.
#[tokio::test]
async fn stop_of_unknown_id_is_internal_error_not_found() {
    let server = common::spawn().await;
    let client = reqwest::Client::new();

    let response = client
        .delete(server.url("/app/999"))
        .send()
        .await
        .expect("stop request should succeed");
    assert_eq!(response.status(), 500);
    assert_eq!(response.text().await.expect("body should be text"), "app not found");
}

/// Boundary: a non-integer path segment on DELETE /app/{id} is 400.
#[tokio::test]
async fn stop_with_non_integer_id_is_bad_request() {
    let server = common::spawn().await;
    let client = reqwest::Client::new();

    let response = client
        .delete(server.url("/app/not-a-number"))
        .send()
        .await
        .expect("stop request should succeed");
    assert_eq!(response.status(), 400);
}

/// Boundary: `args: []` creates successfully with zero arguments.
#[tokio::test]
async fn create_with_empty_args_succeeds() {
    let server = common::spawn().await;
    server.put_pack("p1", b"fn main() { 42 }");
    let client = reqwest::Client::new();

    let response = client
        .post(server.url("/app"))
        .json(&json!({"name": "e", "pack": "p1", "args": []}))
        .send()
        .await
        .expect("create request should succeed");
    assert_eq!(response.status(), 201);
}
