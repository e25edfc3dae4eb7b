// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Apprunner Contributors

use crate::{exitchan::ExitChanHandle, VmError, VmValue};

/// Build the context map injected into a worker's arguments:
/// `{id, name, exit-chan, log}`. `log` is wired as a reference to the
/// engine-registered `log` function so the script can call it either as
/// a bare global or through the map, exactly as the historical source
/// embeds the logger procedure directly as map data.
pub fn build_context_map(app_id: u64, app_name: &str, exit_chan: ExitChanHandle) -> Result<VmValue, VmError> {
    let log_fn = rhai::FnPtr::new("log").map_err(|err| VmError::Script(err.to_string()))?;

    let mut map = rhai::Map::new();
    map.insert("id".into(), rhai::Dynamic::from(app_id.to_string()));
    map.insert("name".into(), rhai::Dynamic::from(app_name.to_string()));
    map.insert("exit-chan".into(), rhai::Dynamic::from(exit_chan));
    map.insert("log".into(), rhai::Dynamic::from(log_fn));
    Ok(rhai::Dynamic::from(map))
}
