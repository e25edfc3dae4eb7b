// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Apprunner Contributors

use std::sync::Arc;

use apprunner_core::{AppId, AppSummary};
use apprunner_vm::{AppvalStore, RhaiVm, RunRequest, ScriptVm, VmError};

use crate::context::build_context;
use crate::error::SupervisorError;
use crate::fetcher::PackageFetcher;
use crate::marshaller::ArgMarshaller;
use crate::registry::{AppRecord, AppRegistry};

/// Entry procedure every package is invoked through.
const ENTRY_NAME: &str = "main";

/// Arguments to [`Supervisor::create`], independent of any wire format.
pub struct CreateAppArgs {
    pub name: String,
    pub pack: String,
    pub args: serde_json::Value,
    pub ctx_last: bool,
    pub ctx_1st: bool,
}

/// Owns the registry, the id allocator (via the registry), the argument
/// marshaller, the package fetcher, and the worker-spawning primitive —
/// the component that ties the rest of this crate together.
pub struct Supervisor {
    registry: Arc<AppRegistry>,
    marshaller: ArgMarshaller,
    fetcher: PackageFetcher,
    vm: Arc<dyn ScriptVm>,
    appval: Arc<AppvalStore>,
}

impl Supervisor {
    pub fn new(fetcher: PackageFetcher) -> Self {
        Self {
            registry: Arc::new(AppRegistry::new()),
            marshaller: ArgMarshaller::new(),
            fetcher,
            vm: Arc::new(RhaiVm::new()),
            appval: Arc::new(AppvalStore::new()),
        }
    }

    pub async fn create(&self, request: CreateAppArgs) -> Result<AppId, SupervisorError> {
        let package_bytes = self
            .fetcher
            .fetch(&request.pack)
            .await
            .ok_or(SupervisorError::PackageNotFound)?;

        let args = self.marshaller.marshal(&request.args)?;

        let id = self.registry.allocate_id();
        let context = build_context(args, id.get(), &request.name, request.ctx_last, request.ctx_1st)?;

        self.registry.add(AppRecord {
            id,
            name: request.name.clone(),
            exit_sender: context.exit_sender,
        });

        let registry = self.registry.clone();
        let vm = self.vm.clone();
        let appval = self.appval.clone();
        let app_name = request.name;
        let package_name = request.pack;
        let exit_handle = context.exit_handle;

        tokio::spawn(run_worker(
            registry,
            vm,
            RunRequest {
                package_bytes,
                entry_name: ENTRY_NAME.to_string(),
                package_name,
                args: context.args,
                appval,
                app_id: id.get(),
                app_name,
            },
            id,
            exit_handle,
        ));

        Ok(id)
    }

    pub async fn stop(&self, id: AppId) -> Result<(), SupervisorError> {
        self.registry.stop(id).await.map_err(SupervisorError::from)
    }

    pub fn list(&self) -> Vec<AppSummary> {
        self.registry.get_all()
    }
}

/// Runs one package under a fresh interpreter instance on a blocking
/// thread, then performs the three cleanup steps in the exact order the
/// historical source observes them from the outside:
/// registry removal, crash-recovery log, exit-channel close.
async fn run_worker(
    registry: Arc<AppRegistry>,
    vm: Arc<dyn ScriptVm>,
    request: RunRequest,
    id: AppId,
    exit_handle: Option<apprunner_vm::ExitChanHandle>,
) {
    let app_name = request.app_name.clone();
    let outcome = tokio::task::spawn_blocking(move || vm.run(request)).await;

    registry.remove(id);

    match outcome {
        Ok(Ok(_)) => {}
        Ok(Err(VmError::Script(message))) => {
            tracing::error!(app_id = id.get(), app_name = %app_name, "App runtime error: {} ({}): {}", id.get(), app_name, message);
        }
        Ok(Err(other)) => {
            tracing::error!(app_id = id.get(), app_name = %app_name, "App runtime error: {} ({}): {}", id.get(), app_name, other);
        }
        Err(join_err) => {
            tracing::error!(app_id = id.get(), app_name = %app_name, "App runtime error: {} ({}): {}", id.get(), app_name, join_err);
        }
    }

    if let Some(handle) = exit_handle {
        handle.close();
    }
}
