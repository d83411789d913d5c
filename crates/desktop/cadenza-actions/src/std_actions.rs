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

//! The standard actions shared by menus, toolbars and shortcut dispatch.

use std::rc::Rc;

use gpui::Rgba;

use crate::{
    action::{Action, ActionHandle, Shortcut},
    collection::{ActionCollection, ids},
    config::FeatureConfig,
    icons::{Glyph, Icon, IconTheme, MONO_RED, StdIcon},
    menu::Menu,
    models::{DevicesModel, PlaylistsModel},
    priority::priority_menu,
};

/// Collaborators the standard actions are built from.
#[derive(bon::Builder)]
pub struct Dependencies<'a> {
    theme:     &'a dyn IconTheme,
    playlists: &'a dyn PlaylistsModel,
    devices:   Option<&'a dyn DevicesModel>,
    #[builder(default)]
    features:  FeatureConfig,
}

/// Tag editing actions, present with the `tags` feature.
#[derive(Debug)]
#[non_exhaustive]
pub struct TagActions {
    pub organise_files: ActionHandle,
    pub edit_tags:      ActionHandle,
}

/// Present with the `replaygain` feature.
#[derive(Debug)]
#[non_exhaustive]
pub struct ReplayGainActions {
    pub replay_gain: ActionHandle,
}

/// Device actions, present with the `devices` feature and a devices model.
///
/// Only [`StdActions::new`] builds these:
///
/// ```compile_fail
/// use cadenza_actions::{Action, DeviceActions};
///
/// let handle = Action::builder().label("Delete Songs").build().into_handle();
/// let _ = DeviceActions {
///     copy_to_device: handle.clone(),
///     delete_songs:   handle,
/// };
/// ```
#[derive(Debug)]
#[non_exhaustive]
pub struct DeviceActions {
    pub copy_to_device: ActionHandle,
    pub delete_songs:   ActionHandle,
}

/// Every standard action, built once and shared for the life of the UI.
#[derive(Debug)]
#[non_exhaustive]
pub struct StdActions {
    pub prev_track:                     ActionHandle,
    pub next_track:                     ActionHandle,
    pub play_pause_track:               ActionHandle,
    pub stop_playback:                  ActionHandle,
    pub stop_after_current_track:       ActionHandle,
    pub stop_after_track:               ActionHandle,
    pub increase_volume:                ActionHandle,
    pub decrease_volume:                ActionHandle,
    pub save_play_queue:                ActionHandle,
    pub append_to_play_queue:           ActionHandle,
    pub append_to_play_queue_and_play:  ActionHandle,
    pub add_to_play_queue_and_play:     ActionHandle,
    pub insert_after_current:           ActionHandle,
    pub add_random_album_to_play_queue: ActionHandle,
    pub replace_play_queue:             ActionHandle,
    pub add_with_priority:              ActionHandle,
    pub set_priority:                   ActionHandle,
    pub add_to_stored_playlist:         ActionHandle,
    pub set_cover:                      ActionHandle,
    pub remove:                         ActionHandle,
    pub search:                         ActionHandle,
    /// Anchor of the "Add To Play Queue" submenu.
    pub add_to_play_queue_menu:         ActionHandle,
    pub tags:                           Option<TagActions>,
    pub replay_gain:                    Option<ReplayGainActions>,
    pub devices:                        Option<DeviceActions>,
}

impl StdActions {
    /// Build all actions, registering the named ones in `collection`.
    pub fn new(collection: &mut ActionCollection, deps: &Dependencies<'_>) -> Self {
        let theme = deps.theme;
        let mono = theme.mono_color();

        let prev_track = collection.create_action(
            ids::PREV_TRACK,
            "Previous Track",
            Some(theme.icon(StdIcon::ToolbarPrev)),
        );
        let next_track = collection.create_action(
            ids::NEXT_TRACK,
            "Next Track",
            Some(theme.icon(StdIcon::ToolbarNext)),
        );
        let play_pause_track = collection.create_action(
            ids::PLAY_PAUSE_TRACK,
            "Play/Pause",
            Some(theme.icon(StdIcon::ToolbarPlay)),
        );
        let stop_playback = collection.create_action(
            ids::STOP_PLAYBACK,
            "Stop",
            Some(theme.icon(StdIcon::ToolbarStop)),
        );
        let stop_after_current_track = collection.create_action(
            ids::STOP_AFTER_CURRENT_TRACK,
            "Stop After Current Track",
            Some(theme.icon(StdIcon::ToolbarStop)),
        );
        let stop_after_track = collection.create_action(
            ids::STOP_AFTER_TRACK,
            "Stop After Track",
            Some(theme.icon(StdIcon::ToolbarStop)),
        );
        let increase_volume = collection.create_action(ids::INCREASE_VOLUME, "Increase Volume", None);
        let decrease_volume = collection.create_action(ids::DECREASE_VOLUME, "Decrease Volume", None);

        let save_play_queue = collection.register(
            ids::SAVE_PLAY_QUEUE,
            Action::builder()
                .label("Save As")
                .icon(theme.icon(StdIcon::SavePlayQueue))
                .shortcut(Shortcut::from("secondary-s"))
                .build(),
        );
        let append_to_play_queue = collection.register(
            ids::APPEND_TO_PLAY_QUEUE,
            Action::builder()
                .label("Append")
                .icon(theme.icon(StdIcon::AppendToPlayQueue))
                .shortcut(Shortcut::from("secondary-p"))
                .settings_tooltip("Append To Play Queue")
                .build(),
        );
        let append_to_play_queue_and_play = collection.register(
            ids::APPEND_TO_PLAY_QUEUE_AND_PLAY,
            Action::builder()
                .label("Append And Play")
                .settings_tooltip("Append To Play Queue And Play")
                .build(),
        );
        let add_to_play_queue_and_play =
            collection.create_action(ids::ADD_TO_PLAY_QUEUE_AND_PLAY, "Add And Play", None);
        let insert_after_current =
            collection.create_action(ids::INSERT_AFTER_CURRENT, "Insert After Current", None);
        let add_random_album_to_play_queue = collection.register(
            ids::ADD_RANDOM_ALBUM_TO_PLAY_QUEUE,
            Action::builder()
                .label("Append Random Album")
                .visible(false)
                .build(),
        );
        let replace_play_queue = collection.register(
            ids::REPLACE_PLAY_QUEUE,
            Action::builder()
                .label("Play Now (And Replace Play Queue)")
                .icon(theme.icon(StdIcon::ReplacePlayQueue))
                .shortcut(Shortcut::from("secondary-r"))
                .build(),
        );

        let add_with_priority = Action::builder()
            .label("Add With Priority")
            .menu(priority_menu())
            .build()
            .into_handle();
        let set_priority = Action::builder()
            .label("Set Priority")
            .menu(priority_menu())
            .build()
            .into_handle();

        let add_to_stored_playlist = Action::builder()
            .label("Add To Playlist")
            .icon(theme.icon(StdIcon::PlaylistList))
            .menu(deps.playlists.menu())
            .build()
            .into_handle();

        let tags = deps
            .features
            .tags_enabled()
            .then(|| TagActions::new(collection, mono));
        let replay_gain = deps
            .features
            .replay_gain_enabled()
            .then(|| ReplayGainActions::new(collection, mono));
        let devices = match (deps.features.devices_enabled(), deps.devices) {
            (true, Some(model)) => Some(DeviceActions::new(model, mono)),
            (true, None) => {
                tracing::warn!("device support enabled without a devices model");
                None
            }
            (false, _) => None,
        };

        let set_cover = Action::builder().label("Set Image").build().into_handle();
        let remove = Action::builder()
            .label("Remove")
            .icon(theme.icon(StdIcon::Remove))
            .build()
            .into_handle();
        let search = collection.register(
            ids::SEARCH,
            Action::builder()
                .label("Find")
                .icon(theme.icon(StdIcon::Search))
                .shortcut(Shortcut::from("secondary-f"))
                .build(),
        );

        let add_menu = Menu::from_actions([
            Rc::clone(&append_to_play_queue),
            Rc::clone(&append_to_play_queue_and_play),
            Rc::clone(&add_to_play_queue_and_play),
            Rc::clone(&add_with_priority),
            Rc::clone(&insert_after_current),
            Rc::clone(&add_random_album_to_play_queue),
        ]);
        let add_to_play_queue_menu = Action::builder()
            .label("Add To Play Queue")
            .menu(add_menu.into_handle())
            .build()
            .into_handle();

        tracing::debug!(
            named = collection.len(),
            tags = tags.is_some(),
            replay_gain = replay_gain.is_some(),
            devices = devices.is_some(),
            "standard actions created"
        );

        Self {
            prev_track,
            next_track,
            play_pause_track,
            stop_playback,
            stop_after_current_track,
            stop_after_track,
            increase_volume,
            decrease_volume,
            save_play_queue,
            append_to_play_queue,
            append_to_play_queue_and_play,
            add_to_play_queue_and_play,
            insert_after_current,
            add_random_album_to_play_queue,
            replace_play_queue,
            add_with_priority,
            set_priority,
            add_to_stored_playlist,
            set_cover,
            remove,
            search,
            add_to_play_queue_menu,
            tags,
            replay_gain,
            devices,
        }
    }

    /// Enable or disable the actions that need a selection to add to the
    /// play queue.
    pub fn enable_add_to_play_queue(&self, enabled: bool) {
        for action in self.add_to_play_queue_actions() {
            action.set_enabled(enabled);
        }
    }

    /// The actions toggled by [`Self::enable_add_to_play_queue`].
    pub fn add_to_play_queue_actions(&self) -> [&ActionHandle; 7] {
        [
            &self.append_to_play_queue,
            &self.append_to_play_queue_and_play,
            &self.add_to_play_queue_and_play,
            &self.insert_after_current,
            &self.replace_play_queue,
            &self.add_to_stored_playlist,
            &self.add_to_play_queue_menu,
        ]
    }

    /// Every action owned by the registry, optional groups included.
    pub fn all(&self) -> Vec<&ActionHandle> {
        let mut all = vec![
            &self.prev_track,
            &self.next_track,
            &self.play_pause_track,
            &self.stop_playback,
            &self.stop_after_current_track,
            &self.stop_after_track,
            &self.increase_volume,
            &self.decrease_volume,
            &self.save_play_queue,
            &self.append_to_play_queue,
            &self.append_to_play_queue_and_play,
            &self.add_to_play_queue_and_play,
            &self.insert_after_current,
            &self.add_random_album_to_play_queue,
            &self.replace_play_queue,
            &self.add_with_priority,
            &self.set_priority,
            &self.add_to_stored_playlist,
            &self.set_cover,
            &self.remove,
            &self.search,
            &self.add_to_play_queue_menu,
        ];
        if let Some(tags) = &self.tags {
            all.extend([&tags.organise_files, &tags.edit_tags]);
        }
        if let Some(replay_gain) = &self.replay_gain {
            all.push(&replay_gain.replay_gain);
        }
        if let Some(devices) = &self.devices {
            all.extend([&devices.copy_to_device, &devices.delete_songs]);
        }
        all
    }
}

impl TagActions {
    fn new(collection: &mut ActionCollection, mono: Rgba) -> Self {
        Self {
            organise_files: collection.create_action(
                ids::ORGANISE_FILES,
                "Organize Files",
                Some(Icon::glyph(Glyph::FolderOpen, mono)),
            ),
            edit_tags:      collection.create_action(ids::EDIT_TAGS, "Edit Track Information", None),
        }
    }
}

impl ReplayGainActions {
    fn new(collection: &mut ActionCollection, mono: Rgba) -> Self {
        Self {
            replay_gain: collection.create_action(
                ids::REPLAY_GAIN,
                "ReplayGain",
                Some(Icon::glyph(Glyph::BarChart, mono)),
            ),
        }
    }
}

impl DeviceActions {
    fn new(model: &dyn DevicesModel, mono: Rgba) -> Self {
        Self {
            copy_to_device: Action::builder()
                .label("Copy Songs To Device")
                .icon(Icon::glyph(Glyph::Mobile, mono))
                .menu(model.menu())
                .build()
                .into_handle(),
            delete_songs:   Action::builder()
                .label("Delete Songs")
                .icon(Icon::glyph(Glyph::Trash, MONO_RED))
                .build()
                .into_handle(),
        }
    }
}
