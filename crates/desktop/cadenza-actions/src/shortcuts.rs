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

//! User shortcut overrides, persisted as JSON.

use std::{collections::BTreeMap, io, path::Path};

use serde::{Deserialize, Serialize};
use snafu::ResultExt;

use crate::{
    action::Shortcut,
    err::{CodecSnafu, IoSnafu, Result},
};

/// Action id → user shortcut. `None` means the user removed the shortcut.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShortcutOverrides(BTreeMap<String, Option<Shortcut>>);

impl ShortcutOverrides {
    /// Read overrides from `path`. A missing file means no overrides.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no shortcut overrides");
                return Ok(Self::default());
            }
            Err(e) => return Err(e).context(IoSnafu { path }),
        };
        let overrides: Self = serde_json::from_str(&raw).context(CodecSnafu { path })?;
        tracing::info!(path = %path.display(), count = overrides.len(), "loaded shortcut overrides");
        Ok(overrides)
    }

    /// Write overrides to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context(IoSnafu { path: parent })?;
        }
        let raw = serde_json::to_string_pretty(self).context(CodecSnafu { path })?;
        std::fs::write(path, raw).context(IoSnafu { path })?;
        tracing::info!(path = %path.display(), count = self.len(), "saved shortcut overrides");
        Ok(())
    }

    pub fn insert(&mut self, id: impl Into<String>, shortcut: Option<Shortcut>) {
        self.0.insert(id.into(), shortcut);
    }

    pub fn get(&self, id: &str) -> Option<&Option<Shortcut>> { self.0.get(id) }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Option<Shortcut>)> { self.0.iter() }

    pub fn len(&self) -> usize { self.0.len() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }
}

impl FromIterator<(String, Option<Shortcut>)> for ShortcutOverrides {
    fn from_iter<I: IntoIterator<Item = (String, Option<Shortcut>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
