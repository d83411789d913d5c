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

use std::{io, path::Path};

use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;
use snafu::ResultExt;

use crate::err::{CodecSnafu, IoSnafu, Result};

/// Optional action groups.
///
/// A group is built only when its cargo feature is compiled in and it is
/// switched on here.
#[derive(Debug, Clone, PartialEq, Eq, SmartDefault, bon::Builder, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureConfig {
    /// Tag editing and file organisation
    #[default = true]
    #[builder(default = true)]
    pub tags:        bool,
    #[default = true]
    #[builder(default = true)]
    pub replay_gain: bool,
    /// Copying songs to, and deleting them from, attached devices
    #[default = true]
    #[builder(default = true)]
    pub devices:     bool,
}

impl FeatureConfig {
    pub fn tags_enabled(&self) -> bool { cfg!(feature = "tags") && self.tags }

    pub fn replay_gain_enabled(&self) -> bool { cfg!(feature = "replaygain") && self.replay_gain }

    pub fn devices_enabled(&self) -> bool { cfg!(feature = "devices") && self.devices }

    /// Everything switched off.
    pub fn minimal() -> Self {
        Self {
            tags:        false,
            replay_gain: false,
            devices:     false,
        }
    }
}

/// Action configuration, stored in the application settings file.
#[derive(Debug, Clone, Default, PartialEq, Eq, bon::Builder, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionsConfig {
    #[builder(default)]
    pub features: FeatureConfig,
}

impl ActionsConfig {
    /// Read the config from `path`, falling back to defaults when the file
    /// does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(raw) => serde_json::from_str(&raw).context(CodecSnafu { path }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e).context(IoSnafu { path }),
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn everything_on_by_default() {
        let config = ActionsConfig::default();
        assert!(config.features.tags && config.features.replay_gain && config.features.devices);
        assert_eq!(FeatureConfig::builder().build(), FeatureConfig::default());
    }

    #[test]
    fn switched_off_groups_stay_off() {
        let features = FeatureConfig::minimal();
        assert!(!features.tags_enabled());
        assert!(!features.replay_gain_enabled());
        assert!(!features.devices_enabled());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let tempdir = TempDir::new().unwrap();
        let path = tempdir.path().join("cadenza.json");
        std::fs::write(&path, r#"{"features": {"devices": false}}"#).unwrap();

        let config = ActionsConfig::load(&path).unwrap();
        assert!(!config.features.devices);
        assert!(config.features.tags);

        let missing = ActionsConfig::load(&tempdir.path().join("missing.json")).unwrap();
        assert_eq!(missing, ActionsConfig::default());
    }
}
