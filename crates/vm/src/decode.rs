// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Apprunner Contributors

use crate::{VmError, VmValue};
use parking_lot::Mutex;

/// The shared VM frame used to decode client-supplied JSON into native VM
/// values, reused across all `create` calls — this implementation picks
/// the guarded-shared-instance option over a fresh-per-request marshaller.
pub struct SharedDecoder {
    engine: Mutex<rhai::Engine>,
}

impl SharedDecoder {
    pub fn new() -> Self {
        SharedDecoder { engine: Mutex::new(rhai::Engine::new()) }
    }

    /// Mimics the embedded VM's own JSON decode routine: decode `raw` and
    /// report success, an error, and (on success) the decoded value, as a
    /// tagged tuple `(ok?, err, value)`. This implementation only fails
    /// `ok?` when `raw` cannot be represented as a VM value at all; it does
    /// not itself require that value to be an array.
    fn decode_tagged(&self, raw: &serde_json::Value) -> (bool, Option<String>, Option<VmValue>) {
        let _guard = self.engine.lock();
        match rhai::serde::to_dynamic(raw) {
            Ok(value) => (true, None, Some(value)),
            Err(err) => (false, Some(err.to_string()), None),
        }
    }
}

impl Default for SharedDecoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Implements the argument marshaller algorithm on top of the VM's decode
/// routine: the raw `args` JSON value is decoded, and the decoded value
/// must itself be a list, and the decode must report `ok?`, before its
/// elements become the ordered argument sequence.
pub fn decode_args(decoder: &SharedDecoder, args: &serde_json::Value) -> Result<Vec<VmValue>, VmError> {
    let (ok, _err, decoded) = decoder.decode_tagged(args);

    let value = match decoded {
        Some(v) if v.is_array() => v,
        _ => return Err(VmError::ArgsNotArray),
    };
    if !ok {
        return Err(VmError::InvalidRequest);
    }

    value.into_array().map_err(|_| VmError::InvalidRequest)
}
