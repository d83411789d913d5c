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
    cell::{OnceCell, Ref, RefCell},
    path::Path,
    rc::Rc,
};

use crate::{
    collection::ActionCollection,
    config::FeatureConfig,
    err::Result,
    icons::IconTheme,
    models::{DevicesModel, PlaylistsModel},
    shortcuts::ShortcutOverrides,
    std_actions::{Dependencies, StdActions},
};

/// Owns the standard actions and the collection of named actions.
///
/// Created by the application at startup and handed to whatever needs an
/// action. The actions themselves are built on first access.
#[derive(bon::Builder)]
pub struct ActionRegistry {
    theme:       Rc<dyn IconTheme>,
    playlists:   Rc<dyn PlaylistsModel>,
    devices:     Option<Rc<dyn DevicesModel>>,
    #[builder(default)]
    features:    FeatureConfig,
    #[builder(skip)]
    collection:  RefCell<ActionCollection>,
    #[builder(skip)]
    std_actions: OnceCell<StdActions>,
}

impl ActionRegistry {
    /// The standard actions, built on the first call.
    pub fn std_actions(&self) -> &StdActions {
        self.std_actions.get_or_init(|| {
            let deps = Dependencies::builder()
                .theme(self.theme.as_ref())
                .playlists(self.playlists.as_ref())
                .maybe_devices(self.devices.as_deref())
                .features(self.features.clone())
                .build();
            let actions = StdActions::new(&mut self.collection.borrow_mut(), &deps);
            tracing::info!(actions = actions.all().len(), "action registry initialized");
            actions
        })
    }

    pub fn is_initialized(&self) -> bool { self.std_actions.get().is_some() }

    /// Named actions, for shortcut lookup and customisation.
    pub fn collection(&self) -> Ref<'_, ActionCollection> {
        self.std_actions();
        self.collection.borrow()
    }

    pub fn enable_add_to_play_queue(&self, enabled: bool) {
        self.std_actions().enable_add_to_play_queue(enabled);
    }

    /// Apply the user's shortcuts stored at `path`.
    pub fn load_shortcuts(&self, path: &Path) -> Result<usize> {
        let overrides = ShortcutOverrides::load(path)?;
        Ok(self.collection().apply_overrides(&overrides))
    }

    /// Store every shortcut the user changed at `path`.
    pub fn save_shortcuts(&self, path: &Path) -> Result<()> { self.collection().overrides().save(path) }
}
