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

//! Subscriber setup for the Cadenza binary and its tests.
//!
//! One global subscriber is installed per process. Its level filter can be
//! swapped at runtime with [`set_log_level`].

use std::{
    env,
    io::IsTerminal,
    path::PathBuf,
    sync::{Mutex, Once},
};

use bon::Builder;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;
use snafu::{OptionExt, ResultExt, Snafu};
use tracing_appender::{
    non_blocking::{NonBlocking, WorkerGuard},
    rolling::{RollingFileAppender, Rotation},
};
use tracing_log::LogTracer;
use tracing_subscriber::{EnvFilter, Registry, filter, prelude::*, reload};

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("cannot write logs to {}", dir.display()))]
    LogDir {
        dir:    PathBuf,
        source: tracing_appender::rolling::InitError,
        #[snafu(implicit)]
        loc:    snafu::Location,
    },

    #[snafu(display("invalid log filter {filter:?}"))]
    Filter {
        filter: String,
        source: filter::ParseError,
        #[snafu(implicit)]
        loc:    snafu::Location,
    },

    #[snafu(display("a global tracing subscriber is already installed"))]
    AlreadyInstalled {
        #[snafu(implicit)]
        loc: snafu::Location,
    },

    #[snafu(display("logging has not been initialized"))]
    NotInstalled {
        #[snafu(implicit)]
        loc: snafu::Location,
    },

    #[snafu(display("failed to swap the log filter"))]
    Reload {
        source: reload::Error,
        #[snafu(implicit)]
        loc:    snafu::Location,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

static RELOAD_HANDLE: OnceCell<reload::Handle<filter::Targets, Registry>> = OnceCell::new();

const DEFAULT_LOG_TARGETS: &str = "info";

/// Configuration options for the logging system.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, SmartDefault, Builder)]
#[serde(default)]
pub struct LoggingOptions {
    /// Directory for hourly rotated log files. `None` means stdout only.
    #[builder(into)]
    pub dir: Option<PathBuf>,

    /// Filter such as `info` or `debug,cadenza_actions=trace`. Falls back to
    /// `RUST_LOG`, then `info`.
    #[builder(into)]
    pub level: Option<String>,

    #[builder(default)]
    pub log_format: LogFormat,

    /// Rotated files kept per log kind. 720 is 30 days of hourly logs.
    #[default = 720]
    #[builder(default = 720)]
    pub max_log_files: usize,

    /// Also log to stdout.
    #[default = true]
    #[builder(default = true)]
    pub append_stdout: bool,
}

impl LoggingOptions {
    fn filter(&self) -> Result<filter::Targets> {
        let filter = self
            .level
            .clone()
            .or_else(|| env::var(EnvFilter::DEFAULT_ENV).ok())
            .unwrap_or_else(|| DEFAULT_LOG_TARGETS.to_owned());
        parse_filter(&filter)
    }
}

/// Available log output formats.
#[derive(
    Clone, Debug, Copy, PartialEq, Eq, Serialize, Deserialize, Default, derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// One JSON object per event, for log processing.
    Json,

    /// Human-readable lines:
    /// ```text
    /// 2024-01-01T12:00:00.123Z  INFO cadenza_actions::registry: action registry initialized
    /// ```
    #[default]
    Text,
}

/// Keeps the background log writers flushing. Drop it at exit.
#[must_use = "logs stop being written when the guard is dropped"]
pub struct LoggingGuard {
    _writers: Vec<WorkerGuard>,
}

fn parse_filter(filter: &str) -> Result<filter::Targets> {
    filter.parse().context(FilterSnafu { filter })
}

/// Install the global subscriber.
///
/// Logs to stdout when `append_stdout` is set. With a `dir`, also writes an
/// hourly rotated `<app>` log and an `<app>-err` log holding errors only.
///
/// # Errors
/// Fails if the filter does not parse, the log directory is unusable, or a
/// subscriber was installed before.
pub fn init_global_logging(app_name: &str, opts: &LoggingOptions) -> Result<LoggingGuard> {
    let filter = opts.filter()?;
    let mut writers = Vec::new();

    let stdout_layer = opts.append_stdout.then(|| {
        let (writer, guard) = tracing_appender::non_blocking(std::io::stdout());
        writers.push(guard);
        let layer = tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .with_ansi(std::io::stdout().is_terminal());
        match opts.log_format {
            LogFormat::Json => layer.json().with_current_span(true).boxed(),
            LogFormat::Text => layer.boxed(),
        }
    });

    let (file_layer, err_file_layer) = match &opts.dir {
        None => (None, None),
        Some(dir) => {
            let prefix = app_name.to_lowercase();
            let mut rolling = |prefix: String| -> Result<NonBlocking> {
                let appender = RollingFileAppender::builder()
                    .rotation(Rotation::HOURLY)
                    .filename_prefix(prefix)
                    .max_log_files(opts.max_log_files)
                    .build(dir)
                    .context(LogDirSnafu { dir: dir.clone() })?;
                let (writer, guard) = tracing_appender::non_blocking(appender);
                writers.push(guard);
                Ok(writer)
            };
            let file = tracing_subscriber::fmt::layer()
                .with_writer(rolling(prefix.clone())?)
                .with_ansi(false);
            let err_file = tracing_subscriber::fmt::layer()
                .with_writer(rolling(format!("{prefix}-err"))?)
                .with_ansi(false);
            match opts.log_format {
                LogFormat::Json => (
                    Some(file.json().boxed()),
                    Some(err_file.json().with_filter(filter::LevelFilter::ERROR).boxed()),
                ),
                LogFormat::Text => (
                    Some(file.boxed()),
                    Some(err_file.with_filter(filter::LevelFilter::ERROR).boxed()),
                ),
            }
        }
    };

    let (filter, handle) = reload::Layer::new(filter);
    let subscriber = Registry::default()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .with(err_file_layer);

    tracing::subscriber::set_global_default(subscriber)
        .ok()
        .context(AlreadyInstalledSnafu)?;
    RELOAD_HANDLE.set(handle).ok().context(AlreadyInstalledSnafu)?;
    if LogTracer::init().is_err() {
        tracing::debug!("log records are already forwarded");
    }

    Ok(LoggingGuard { _writers: writers })
}

/// Replace the level filter of the installed subscriber.
///
/// # Errors
/// Fails if `filter` does not parse or logging was never initialized.
pub fn set_log_level(filter: &str) -> Result<()> {
    let targets = parse_filter(filter)?;
    let handle = RELOAD_HANDLE.get().context(NotInstalledSnafu)?;
    handle.reload(targets).context(ReloadSnafu)
}

static UT_LOG_GUARD: Mutex<Option<LoggingGuard>> = Mutex::new(None);

/// Logging for unit tests, safe to call from every test.
///
/// Logs go to `CADENZA_TEST_LOG_DIR` (default `<tmp>/cadenza-test-logs`)
/// filtered by `CADENZA_TEST_LOG_LEVEL` (default `debug`).
pub fn init_default_ut_logging() {
    static START: Once = Once::new();

    START.call_once(|| {
        let dir = env::var_os("CADENZA_TEST_LOG_DIR")
            .map_or_else(|| env::temp_dir().join("cadenza-test-logs"), PathBuf::from);
        let level = env::var("CADENZA_TEST_LOG_LEVEL").unwrap_or_else(|_| "debug".to_owned());
        let opts = LoggingOptions::builder()
            .dir(dir.clone())
            .level(level)
            .append_stdout(false)
            .build();
        match init_global_logging("unittest", &opts) {
            Ok(guard) => {
                if let Ok(mut slot) = UT_LOG_GUARD.lock() {
                    *slot = Some(guard);
                }
                tracing::info!(dir = %dir.display(), "test logging ready");
            }
            Err(e) => eprintln!("test logging disabled: {e}"),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_default_to_stdout_text() {
        let opts = LoggingOptions::default();
        assert!(opts.dir.is_none());
        assert!(opts.append_stdout);
        assert_eq!(opts.log_format, LogFormat::Text);
        assert_eq!(opts.max_log_files, 720);
        assert_eq!(LoggingOptions::builder().build(), opts);
    }

    #[test]
    fn options_from_settings_json() {
        let opts: LoggingOptions =
            serde_json::from_str(r#"{"dir": "/var/log/cadenza", "log_format": "json"}"#).unwrap();
        assert_eq!(opts.dir.as_deref(), Some(std::path::Path::new("/var/log/cadenza")));
        assert_eq!(opts.log_format, LogFormat::Json);
        assert!(opts.append_stdout);
    }

    #[test]
    fn bad_filters_are_rejected() {
        let opts = LoggingOptions::builder()
            .level("cadenza_actions=loudest")
            .build();
        assert!(matches!(opts.filter(), Err(Error::Filter { .. })));
        assert!(matches!(
            set_log_level("cadenza_actions=loudest"),
            Err(Error::Filter { .. })
        ));
    }

    #[test]
    fn level_changes_need_an_installed_subscriber() {
        assert!(matches!(set_log_level("debug"), Err(Error::NotInstalled { .. })));
    }
}
