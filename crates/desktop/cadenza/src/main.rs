// Copyright 2025 Crrow
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

mod helper;
mod services;

use std::rc::Rc;

use anyhow::Context;
use cadenza_actions::{ActionRegistry, ActionsConfig, AssetIconTheme, keymap};
use gpui::{App, Application};

use crate::{
    helper::ResultExt,
    services::{AttachedDevices, StdActionsGlobal, StoredPlaylists},
};

fn main() -> anyhow::Result<()> {
    helper::startup_time();
    let paths = cadenza_paths::app_paths()
        .context("Cadenza failed to launch: cannot determine the home directory")?;
    let file_errors = helper::init_paths(paths);
    if !file_errors.is_empty() {
        return Err(helper::files_not_created_on_launch(file_errors));
    }
    let _logging = cadenza_common_telemetry::init_global_logging(
        "Cadenza",
        &cadenza_common_telemetry::LoggingOptions::builder()
            .dir(paths.logs_dir())
            .append_stdout(helper::stdout_is_a_pty())
            .build(),
    )
    .context("initializing logging")?;
    cadenza_common_telemetry::set_panic_hook();
    tracing::info!(
        "========== starting cadenza version {} ==========",
        env!("CARGO_PKG_VERSION"),
    );

    let config = ActionsConfig::load(&paths.settings_file())
        .log_err()
        .unwrap_or_default();
    let shortcuts_file = paths.shortcuts_file();

    Application::new().run(move |cx: &mut App| {
        let registry = ActionRegistry::builder()
            .theme(Rc::new(AssetIconTheme::default()))
            .playlists(Rc::new(StoredPlaylists::new()))
            .devices(Rc::new(AttachedDevices::new()))
            .features(config.features)
            .build();
        registry.load_shortcuts(&shortcuts_file).log_err();

        // Nothing is selected until the library view reports a selection.
        registry.enable_add_to_play_queue(false);

        cx.bind_keys(keymap::key_bindings(&registry.collection()));
        cx.set_global(StdActionsGlobal(Rc::new(registry)));
        services::register_handlers(cx);
        tracing::info!(
            startup_ms = helper::startup_time()
                .duration_until(jiff::Timestamp::now())
                .as_millis(),
            "actions ready"
        );
    });
    Ok(())
}
