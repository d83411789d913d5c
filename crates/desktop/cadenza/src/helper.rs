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

use std::{
    collections::HashMap,
    io::{self, IsTerminal},
    path::Path,
    sync::OnceLock,
};

use cadenza_paths::AppPaths;
use jiff::Timestamp;

static STARTUP_TIME: OnceLock<Timestamp> = OnceLock::new();

const FORCE_CLI_MODE_ENV_VAR_NAME: &str = "CADENZA_FORCE_CLI_MODE";

#[inline]
pub(crate) fn startup_time() -> Timestamp { *STARTUP_TIME.get_or_init(Timestamp::now) }

pub(crate) fn init_paths(paths: &AppPaths) -> HashMap<io::ErrorKind, Vec<&Path>> {
    paths
        .launch_dirs()
        .into_iter()
        .fold(HashMap::default(), |mut errors, path| {
            if let Err(e) = std::fs::create_dir_all(path) {
                errors.entry(e.kind()).or_insert_with(Vec::new).push(path);
            }
            errors
        })
}

pub(crate) fn files_not_created_on_launch(
    errors: HashMap<io::ErrorKind, Vec<&Path>>,
) -> anyhow::Error {
    let error_details = errors
        .into_iter()
        .filter_map(|(kind, paths)| match paths.as_slice() {
            [] => None,
            [path] => Some(format!("{kind} when creating directory {path:?}")),
            many => Some(format!("{kind} when creating directories {many:?}")),
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    anyhow::anyhow!("Cadenza failed to launch: {error_details}")
}

pub(crate) fn stdout_is_a_pty() -> bool {
    std::env::var(FORCE_CLI_MODE_ENV_VAR_NAME).ok().is_none() && io::stdout().is_terminal()
}

pub trait ResultExt<E> {
    type Ok;

    fn log_err(self) -> Option<Self::Ok>;
}

impl<T, E> ResultExt<E> for Result<T, E>
where
    E: std::fmt::Debug,
{
    type Ok = T;

    #[track_caller]
    fn log_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                let loc = std::panic::Location::caller();
                tracing::error!(
                    error = ?error,
                    caller.file = %loc.file(),
                    caller.line = loc.line(),
                    "error"
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn launch_failures_name_every_directory() {
        let config = Path::new("/cfg/cadenza");
        let logs = Path::new("/data/cadenza/logs");
        let errors = HashMap::from([(io::ErrorKind::PermissionDenied, vec![config, logs])]);

        let message = files_not_created_on_launch(errors).to_string();
        assert!(message.starts_with("Cadenza failed to launch"));
        assert!(message.contains("/cfg/cadenza"));
        assert!(message.contains("/data/cadenza/logs"));
    }

    #[test]
    fn launch_dirs_are_created() {
        let tempdir = tempfile::TempDir::new().unwrap();
        let paths = AppPaths::new(tempdir.path().join("config"), tempdir.path().join("logs"));

        assert!(init_paths(&paths).is_empty());
        assert!(paths.config_dir().is_dir());
        assert!(paths.logs_dir().is_dir());
    }
}
