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

//! Where Cadenza keeps its settings, keyboard shortcuts and logs.

use std::{
    path::{Path, PathBuf},
    sync::OnceLock,
};

/// Application settings, read into `cadenza_actions::ActionsConfig`.
pub const SETTINGS_FILE_NAME: &str = "cadenza.json";

/// User keyboard shortcuts, read into `cadenza_actions::ShortcutOverrides`.
pub const SHORTCUTS_FILE_NAME: &str = "shortcuts.json";

/// Directory layout of one Cadenza installation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    config_dir: PathBuf,
    logs_dir:   PathBuf,
}

impl AppPaths {
    pub fn new(config_dir: impl Into<PathBuf>, logs_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
            logs_dir:   logs_dir.into(),
        }
    }

    /// The platform layout:
    ///
    /// | platform      | config                    | logs                            |
    /// |---------------|---------------------------|---------------------------------|
    /// | macOS         | `~/.config/cadenza`       | `~/Library/Logs/Cadenza`        |
    /// | Linux/FreeBSD | `$XDG_CONFIG_HOME/cadenza` | `$XDG_DATA_HOME/cadenza/logs`  |
    /// | Windows       | `%APPDATA%\Cadenza`       | `%LOCALAPPDATA%\Cadenza\logs`   |
    ///
    /// Flatpak's `FLATPAK_XDG_*` variables take precedence on Linux. Returns
    /// `None` when the home directory cannot be determined.
    pub fn platform() -> Option<Self> {
        if cfg!(target_os = "macos") {
            let home = dirs::home_dir()?;
            Some(Self::new(
                home.join(".config").join("cadenza"),
                home.join("Library").join("Logs").join("Cadenza"),
            ))
        } else if cfg!(any(target_os = "linux", target_os = "freebsd")) {
            let config = std::env::var_os("FLATPAK_XDG_CONFIG_HOME")
                .map(PathBuf::from)
                .or_else(dirs::config_dir)?;
            let data = std::env::var_os("FLATPAK_XDG_DATA_HOME")
                .map(PathBuf::from)
                .or_else(dirs::data_local_dir)?;
            Some(Self::new(
                config.join("cadenza"),
                data.join("cadenza").join("logs"),
            ))
        } else {
            Some(Self::new(
                dirs::config_dir()?.join("Cadenza"),
                dirs::data_local_dir()?.join("Cadenza").join("logs"),
            ))
        }
    }

    pub fn config_dir(&self) -> &Path { &self.config_dir }

    pub fn logs_dir(&self) -> &Path { &self.logs_dir }

    pub fn settings_file(&self) -> PathBuf { self.config_dir.join(SETTINGS_FILE_NAME) }

    pub fn shortcuts_file(&self) -> PathBuf { self.config_dir.join(SHORTCUTS_FILE_NAME) }

    /// Directories that must exist before logging starts.
    pub fn launch_dirs(&self) -> [&Path; 2] { [&self.config_dir, &self.logs_dir] }
}

/// The platform layout, resolved once per process.
pub fn app_paths() -> Option<&'static AppPaths> {
    static APP_PATHS: OnceLock<Option<AppPaths>> = OnceLock::new();
    APP_PATHS.get_or_init(AppPaths::platform).as_ref()
}
