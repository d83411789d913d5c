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

//! Menu models and action handlers wired into the standard actions.

use std::rc::Rc;

use cadenza_actions::{
    Action, ActionRegistry, DevicesModel, Menu, MenuHandle, PlaylistsModel, ids, keymap,
};
use gpui::{App, Global};

/// The application's action registry, reachable from action handlers.
pub struct StdActionsGlobal(pub Rc<ActionRegistry>);

impl Global for StdActionsGlobal {}

/// Stored playlists menu. Starts with the entry for creating a playlist;
/// the playlists view appends one entry per stored playlist.
pub struct StoredPlaylists {
    menu: MenuHandle,
}

impl StoredPlaylists {
    pub fn new() -> Self {
        let menu = Menu::new();
        menu.add_action(Action::builder().label("New Playlist...").build().into_handle());
        menu.add_separator();
        Self {
            menu: menu.into_handle(),
        }
    }
}

impl PlaylistsModel for StoredPlaylists {
    fn menu(&self) -> MenuHandle { Rc::clone(&self.menu) }
}

/// Attached devices menu, filled as devices are detected.
pub struct AttachedDevices {
    menu: MenuHandle,
}

impl AttachedDevices {
    pub fn new() -> Self {
        Self {
            menu: Menu::new().into_handle(),
        }
    }
}

impl DevicesModel for AttachedDevices {
    fn menu(&self) -> MenuHandle { Rc::clone(&self.menu) }
}

macro_rules! std_action_handlers {
    ($($action:ident => $id:expr),* $(,)?) => {
        #[cfg(test)]
        const HANDLED_IDS: &[&str] = &[$($id),*];

        /// Route every bound gpui action back to its standard action,
        /// skipping disabled ones.
        pub fn register_handlers(cx: &mut App) {
            $(
                cx.on_action(|_: &keymap::$action, cx| dispatch(cx, $id));
            )*
        }
    };
}

std_action_handlers! {
    PrevTrack => ids::PREV_TRACK,
    NextTrack => ids::NEXT_TRACK,
    PlayPauseTrack => ids::PLAY_PAUSE_TRACK,
    StopPlayback => ids::STOP_PLAYBACK,
    StopAfterCurrentTrack => ids::STOP_AFTER_CURRENT_TRACK,
    StopAfterTrack => ids::STOP_AFTER_TRACK,
    IncreaseVolume => ids::INCREASE_VOLUME,
    DecreaseVolume => ids::DECREASE_VOLUME,
    SavePlayQueue => ids::SAVE_PLAY_QUEUE,
    AppendToPlayQueue => ids::APPEND_TO_PLAY_QUEUE,
    AppendToPlayQueueAndPlay => ids::APPEND_TO_PLAY_QUEUE_AND_PLAY,
    AddToPlayQueueAndPlay => ids::ADD_TO_PLAY_QUEUE_AND_PLAY,
    InsertAfterCurrent => ids::INSERT_AFTER_CURRENT,
    AddRandomAlbumToPlayQueue => ids::ADD_RANDOM_ALBUM_TO_PLAY_QUEUE,
    ReplacePlayQueue => ids::REPLACE_PLAY_QUEUE,
    OrganiseFiles => ids::ORGANISE_FILES,
    EditTags => ids::EDIT_TAGS,
    ReplayGain => ids::REPLAY_GAIN,
    Search => ids::SEARCH,
}

fn dispatch(cx: &App, id: &str) {
    let Some(action) = cx.global::<StdActionsGlobal>().0.collection().get(id) else {
        tracing::debug!(action.id = %id, "no standard action registered");
        return;
    };
    if action.is_enabled() && action.is_visible() {
        tracing::info!(action.id = %id, action = %action.label(), "action triggered");
    } else {
        tracing::debug!(action.id = %id, action = %action.label(), "ignoring unavailable action");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_bindable_action_has_a_handler() {
        assert_eq!(HANDLED_IDS.len(), keymap::BINDABLE_IDS.len());
        for id in keymap::BINDABLE_IDS {
            assert!(HANDLED_IDS.contains(&id), "{id} is bound but not handled");
        }
    }
}
