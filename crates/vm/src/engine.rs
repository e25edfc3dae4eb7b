// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Apprunner Contributors

use crate::{exitchan::ExitChanHandle, AppvalStore, VmError, VmValue};
use std::sync::Arc;

/// Everything [`ScriptVm::run`] needs to execute one app invocation under a
/// fresh interpreter instance.
///
/// There is no separate `exit_chan` field: when context injection was
/// requested, the context builder has already spliced the `ExitChanHandle`
/// into `args` as the `exit-chan` key of the context map, so the script
/// reaches it as an ordinary argument like everything else in that map.
pub struct RunRequest {
    pub package_bytes: Vec<u8>,
    pub entry_name: String,
    pub package_name: String,
    pub args: Vec<VmValue>,
    pub appval: Arc<AppvalStore>,
    pub app_id: u64,
    pub app_name: String,
}

/// Contract for the embedded script interpreter: run a package's entry
/// procedure with arguments, under its own fresh instance, with host
/// procedures (the logger, the appval store) and channel values reachable
/// as native values from the script.
pub trait ScriptVm: Send + Sync {
    fn run(&self, request: RunRequest) -> Result<VmValue, VmError>;
}

/// Concrete `rhai`-backed VM.
#[derive(Default)]
pub struct RhaiVm;

impl RhaiVm {
    pub fn new() -> Self {
        RhaiVm
    }
}

impl ScriptVm for RhaiVm {
    fn run(&self, request: RunRequest) -> Result<VmValue, VmError> {
        let mut engine = rhai::Engine::new();

        let setval_store = request.appval.clone();
        engine.register_fn("setval", move |token: &str, key: &str, value: rhai::Dynamic| -> bool {
            setval_store.setval(token, key, value)
        });
        let getval_store = request.appval.clone();
        engine.register_fn("getval", move |token: &str, key: &str| -> rhai::Dynamic {
            getval_store.getval(token, key)
        });

        let app_id = request.app_id;
        let app_name = request.app_name.clone();
        engine.register_fn("log", move |msg: &str| -> bool {
            tracing::info!(app_id, app_name = %app_name, "app {} ({}): {}", app_id, app_name, msg);
            true
        });

        engine.register_type_with_name::<ExitChanHandle>("ExitChan");
        engine.register_fn("recv", ExitChanHandle::recv);

        let source = std::str::from_utf8(&request.package_bytes)
            .map_err(|err| VmError::Script(err.to_string()))?;
        let ast = engine.compile(source).map_err(|err| VmError::Script(err.to_string()))?;

        // The exit-chan handle (when present) travels to the script as the
        // `exit-chan` key of the context map already spliced into `args` by
        // the context builder — it is not injected separately here.
        let mut scope = rhai::Scope::new();
        let result: rhai::Dynamic = engine
            .call_fn(&mut scope, &ast, &request.entry_name, request.args)
            .map_err(|err| VmError::Script(err.to_string()))?;

        tracing::debug!(package = %request.package_name, "app {} ({}) completed", app_id, request.app_name);
        Ok(result)
    }
}
