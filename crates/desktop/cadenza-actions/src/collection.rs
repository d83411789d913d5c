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

//! Registry of named actions, used for shortcut lookup and customisation.

use std::{collections::HashMap, rc::Rc};

use gpui::SharedString;

use crate::{
    action::{Action, ActionHandle, Shortcut},
    icons::Icon,
    shortcuts::ShortcutOverrides,
};

/// Identifiers of the named standard actions. These are persisted in the
/// user's shortcut file, so never rename them.
pub mod ids {
    pub const PREV_TRACK: &str = "prevtrack";
    pub const NEXT_TRACK: &str = "nexttrack";
    pub const PLAY_PAUSE_TRACK: &str = "playpausetrack";
    pub const STOP_PLAYBACK: &str = "stopplayback";
    pub const STOP_AFTER_CURRENT_TRACK: &str = "stopaftercurrenttrack";
    pub const STOP_AFTER_TRACK: &str = "stopaftertrack";
    pub const INCREASE_VOLUME: &str = "increasevolume";
    pub const DECREASE_VOLUME: &str = "decreasevolume";
    pub const SAVE_PLAY_QUEUE: &str = "saveplayqueue";
    pub const APPEND_TO_PLAY_QUEUE: &str = "appendtoplayqueue";
    pub const APPEND_TO_PLAY_QUEUE_AND_PLAY: &str = "appendtoplayqueueandplay";
    pub const ADD_TO_PLAY_QUEUE_AND_PLAY: &str = "addtoplayqueueandplay";
    pub const INSERT_AFTER_CURRENT: &str = "insertintoplayqueue";
    pub const ADD_RANDOM_ALBUM_TO_PLAY_QUEUE: &str = "addrandomalbumtoplayqueue";
    pub const REPLACE_PLAY_QUEUE: &str = "replaceplayqueue";
    pub const ORGANISE_FILES: &str = "orgfiles";
    pub const EDIT_TAGS: &str = "edittags";
    pub const REPLAY_GAIN: &str = "replaygain";
    pub const SEARCH: &str = "search";
}

/// One row of the shortcut settings page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcutEntry {
    pub id:       SharedString,
    pub text:     SharedString,
    pub shortcut: Option<Shortcut>,
}

/// Owns the id → action table. Registration order is preserved.
#[derive(Debug, Default)]
pub struct ActionCollection {
    actions: Vec<ActionHandle>,
    by_id:   HashMap<String, usize>,
}

impl ActionCollection {
    pub fn new() -> Self { Self::default() }

    /// Register `action` under `id`.
    ///
    /// Registering an id twice keeps the first action and returns its handle.
    pub fn register(&mut self, id: impl Into<SharedString>, action: Action) -> ActionHandle {
        let id = id.into();
        if let Some(existing) = self.get(id.as_ref()) {
            tracing::debug!(action.id = %id, "action already registered");
            return existing;
        }

        let handle = action.with_id(id.clone()).into_handle();
        self.by_id.insert(id.to_string(), self.actions.len());
        self.actions.push(Rc::clone(&handle));
        handle
    }

    /// Register a plain action with a label and optional icon.
    pub fn create_action(
        &mut self,
        id: impl Into<SharedString>,
        label: impl Into<SharedString>,
        icon: Option<Icon>,
    ) -> ActionHandle {
        self.register(id, Action::builder().label(label).maybe_icon(icon).build())
    }

    pub fn get(&self, id: &str) -> Option<ActionHandle> {
        self.by_id.get(id).map(|&idx| Rc::clone(&self.actions[idx]))
    }

    pub fn contains(&self, id: &str) -> bool { self.by_id.contains_key(id) }

    pub fn iter(&self) -> impl Iterator<Item = &ActionHandle> { self.actions.iter() }

    pub fn len(&self) -> usize { self.actions.len() }

    pub fn is_empty(&self) -> bool { self.actions.is_empty() }

    /// Rows for the shortcut settings page, in registration order.
    pub fn shortcut_entries(&self) -> Vec<ShortcutEntry> {
        self.actions
            .iter()
            .filter_map(|action| {
                Some(ShortcutEntry {
                    id:       action.id()?.clone(),
                    text:     action.settings_text().clone(),
                    shortcut: action.shortcut(),
                })
            })
            .collect()
    }

    /// Apply user shortcuts. Unknown ids are skipped; returns how many were
    /// applied.
    pub fn apply_overrides(&self, overrides: &ShortcutOverrides) -> usize {
        let mut applied = 0;
        for (id, shortcut) in overrides.iter() {
            match self.get(id) {
                Some(action) => {
                    action.set_shortcut(shortcut.clone());
                    applied += 1;
                }
                None => tracing::warn!(action.id = %id, "ignoring shortcut for unknown action"),
            }
        }
        applied
    }

    /// Shortcuts that differ from their defaults, ready to be saved.
    pub fn overrides(&self) -> ShortcutOverrides {
        self.actions
            .iter()
            .filter(|action| action.is_shortcut_customized())
            .filter_map(|action| Some((action.id()?.to_string(), action.shortcut())))
            .collect()
    }

    /// Put every shortcut back to its default.
    pub fn reset_shortcuts(&self) {
        for action in &self.actions {
            action.set_shortcut(action.default_shortcut().cloned());
        }
    }
}
