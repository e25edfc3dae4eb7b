// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Apprunner Contributors

use apprunner_vm::{decode_args, SharedDecoder, VmError, VmValue};

/// Thin wrapper around the shared-guarded decoder engine: turns
/// the JSON `args` field of a create request into VM-native values.
#[derive(Default)]
pub struct ArgMarshaller {
    decoder: SharedDecoder,
}

impl ArgMarshaller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn marshal(&self, args: &serde_json::Value) -> Result<Vec<VmValue>, VmError> {
        decode_args(&self.decoder, args)
    }
}
