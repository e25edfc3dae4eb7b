// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Apprunner Contributors

use std::sync::Arc;

use apprunner_codestore::CodeStore;
use apprunner_supervisor::{CreateAppArgs, Supervisor};
use apprunner_wire::{AppSummaryEntry, CreateAppRequest, CreateAppResponse, PutPackRequest};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use crate::error::ApiError;

#[derive(Clone)]
struct AppState {
    supervisor: Arc<Supervisor>,
    store: Arc<CodeStore>,
}

pub fn router(supervisor: Arc<Supervisor>, store: Arc<CodeStore>) -> Router {
    let state = AppState { supervisor, store };

    app_routes()
        .merge(pack_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

fn app_routes() -> Router<AppState> {
    Router::new()
        .route("/app", post(create_app).get(list_apps))
        .route("/app/:id", delete(stop_app))
}

fn pack_routes() -> Router<AppState> {
    Router::new()
        .route("/packs", post(put_pack).get(packs_query))
        .route("/packs/:name", get(get_pack).delete(del_pack))
}

async fn create_app(
    State(state): State<AppState>,
    Json(request): Json<CreateAppRequest>,
) -> Result<(StatusCode, Json<CreateAppResponse>), ApiError> {
    let id = state
        .supervisor
        .create(CreateAppArgs {
            name: request.name,
            pack: request.pack,
            args: request.args,
            ctx_last: request.ctx_last,
            ctx_1st: request.ctx_1st,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(CreateAppResponse::new(id))))
}

async fn list_apps(State(state): State<AppState>) -> Json<Vec<AppSummaryEntry>> {
    let summaries = state.supervisor.list().into_iter().map(AppSummaryEntry::from).collect();
    Json(summaries)
}

async fn stop_app(State(state): State<AppState>, Path(id): Path<String>) -> Result<StatusCode, ApiError> {
    let id = id.parse().map_err(|_| ApiError::bad_request("non-integer app id"))?;
    state.supervisor.stop(id).await?;
    Ok(StatusCode::OK)
}

async fn put_pack(
    State(state): State<AppState>,
    Json(request): Json<PutPackRequest>,
) -> Result<StatusCode, ApiError> {
    state
        .store
        .put(&request.name, request.content.as_bytes())
        .map_err(|err| ApiError::bad_request(err.to_string()))?;
    Ok(StatusCode::OK)
}

#[derive(Debug, Deserialize)]
struct PacksQuery {
    name: Option<String>,
}

async fn packs_query(
    State(state): State<AppState>,
    Query(query): Query<PacksQuery>,
) -> Result<(StatusCode, Json<Vec<String>>), ApiError> {
    match query.name {
        Some(name) => {
            let found = state
                .store
                .get_by_name(&name)
                .map_err(|err| ApiError::bad_request(err.to_string()))?
                .is_some();
            if found {
                Ok((StatusCode::OK, Json(Vec::new())))
            } else {
                Err(ApiError::not_found())
            }
        }
        None => {
            let names = state
                .store
                .get_all()
                .map_err(|err| ApiError::bad_request(err.to_string()))?;
            Ok((StatusCode::OK, Json(names)))
        }
    }
}

async fn get_pack(State(state): State<AppState>, Path(name): Path<String>) -> Result<Vec<u8>, ApiError> {
    state
        .store
        .get_by_name(&name)
        .map_err(|err| ApiError::bad_request(err.to_string()))?
        .ok_or_else(ApiError::not_found)
}

async fn del_pack(State(state): State<AppState>, Path(name): Path<String>) -> Result<StatusCode, ApiError> {
    state
        .store
        .del_by_name(&name)
        .map_err(|err| ApiError::bad_request(err.to_string()))?;
    Ok(StatusCode::OK)
}
