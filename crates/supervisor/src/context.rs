// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Apprunner Contributors

use apprunner_vm::{build_context_map, exit_channel, ExitChanHandle, ExitSender, VmError, VmValue};

/// Outcome of splicing a context value into the argument list.
pub struct ContextResult {
    pub args: Vec<VmValue>,
    pub exit_sender: Option<ExitSender>,
    pub exit_handle: Option<ExitChanHandle>,
}

/// Build the worker's final argument list, optionally prepending or
/// appending a context map carrying `id`/`name`/`exit-chan`/`log`.
///
/// When neither `ctx_last` nor `ctx_1st` is set, `args` passes through
/// unchanged and no exit channel is created at all — a script with no
/// context has no way to be asked to stop cooperatively. When both are
/// set, `ctx_1st` wins the tie, matching the historical source's
/// last-request-flag-wins-unless-first-is-set precedence.
pub fn build_context(
    args: Vec<VmValue>,
    app_id: u64,
    app_name: &str,
    ctx_last: bool,
    ctx_1st: bool,
) -> Result<ContextResult, VmError> {
    if !ctx_last && !ctx_1st {
        return Ok(ContextResult {
            args,
            exit_sender: None,
            exit_handle: None,
        });
    }

    let (sender, receiver) = exit_channel();
    let handle = ExitChanHandle::new(receiver);
    let ctx_value = build_context_map(app_id, app_name, handle.clone())?;

    let mut spliced = args;
    if ctx_1st {
        spliced.insert(0, ctx_value);
    } else {
        spliced.push(ctx_value);
    }

    Ok(ContextResult {
        args: spliced,
        exit_sender: Some(sender),
        exit_handle: Some(handle),
    })
}
