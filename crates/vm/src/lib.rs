// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Apprunner Contributors

//! Concrete script VM: wraps `rhai` behind a contract of running a
//! package with arguments, returning a value or error, and registering
//! host procedures and channel values as native VM values.

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod appval;
mod context;
mod decode;
mod engine;
mod error;
mod exitchan;

pub use appval::AppvalStore;
pub use context::build_context_map;
pub use decode::{decode_args, SharedDecoder};
pub use engine::{RhaiVm, RunRequest, ScriptVm};
pub use error::VmError;
pub use exitchan::{exit_channel, AppSignal, ExitChanHandle, ExitReceiver, ExitSender};

/// Native value type of the embedded VM.
pub type VmValue = rhai::Dynamic;
