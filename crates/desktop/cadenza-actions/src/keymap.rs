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

//! gpui actions and key bindings for the named standard actions.

use gpui::{KeyBinding, Keystroke, actions};

use crate::collection::{ActionCollection, ids};

actions!(
    cadenza,
    [
        PrevTrack,
        NextTrack,
        PlayPauseTrack,
        StopPlayback,
        StopAfterCurrentTrack,
        StopAfterTrack,
        IncreaseVolume,
        DecreaseVolume,
        SavePlayQueue,
        AppendToPlayQueue,
        AppendToPlayQueueAndPlay,
        AddToPlayQueueAndPlay,
        InsertAfterCurrent,
        AddRandomAlbumToPlayQueue,
        ReplacePlayQueue,
        OrganiseFiles,
        EditTags,
        ReplayGain,
        Search,
    ]
);

const MODIFIERS: [&str; 9] = [
    "ctrl",
    "alt",
    "shift",
    "fn",
    "cmd",
    "super",
    "win",
    "secondary",
    "platform",
];

/// Whether a single keystroke such as `ctrl-shift-f` ends in a key rather
/// than a modifier or a dangling `-`.
fn names_a_key(keystroke: &str) -> bool {
    let key = if keystroke == "-" || keystroke.ends_with("--") {
        "-"
    } else {
        keystroke.rsplit('-').next().unwrap_or_default()
    };
    !key.is_empty() && !MODIFIERS.iter().any(|m| key.eq_ignore_ascii_case(m))
}

/// Check that `keystrokes` is a non-empty, space separated sequence of
/// keystrokes gpui can parse.
fn is_valid_shortcut(id: &str, keystrokes: &str) -> bool {
    if keystrokes.trim().is_empty() {
        tracing::warn!(action.id = %id, "empty shortcut, not binding");
        return false;
    }
    for part in keystrokes.split_whitespace() {
        let error = if names_a_key(part) {
            Keystroke::parse(part).err().map(|e| e.to_string())
        } else {
            Some(format!("{part:?} has no key"))
        };
        if let Some(error) = error {
            tracing::warn!(
                action.id = %id,
                shortcut = %keystrokes,
                %error,
                "invalid shortcut, not binding"
            );
            return false;
        }
    }
    true
}

/// Bind `keystrokes` to the gpui action dispatched for `id`.
///
/// Returns `None` for ids without a gpui action and for shortcuts gpui
/// cannot parse.
pub fn binding_for(id: &str, keystrokes: &str) -> Option<KeyBinding> {
    if !is_bindable(id) {
        tracing::warn!(action.id = %id, "no key binding target for action");
        return None;
    }
    if !is_valid_shortcut(id, keystrokes) {
        return None;
    }
    let binding = match id {
        ids::PREV_TRACK => KeyBinding::new(keystrokes, PrevTrack, None),
        ids::NEXT_TRACK => KeyBinding::new(keystrokes, NextTrack, None),
        ids::PLAY_PAUSE_TRACK => KeyBinding::new(keystrokes, PlayPauseTrack, None),
        ids::STOP_PLAYBACK => KeyBinding::new(keystrokes, StopPlayback, None),
        ids::STOP_AFTER_CURRENT_TRACK => KeyBinding::new(keystrokes, StopAfterCurrentTrack, None),
        ids::STOP_AFTER_TRACK => KeyBinding::new(keystrokes, StopAfterTrack, None),
        ids::INCREASE_VOLUME => KeyBinding::new(keystrokes, IncreaseVolume, None),
        ids::DECREASE_VOLUME => KeyBinding::new(keystrokes, DecreaseVolume, None),
        ids::SAVE_PLAY_QUEUE => KeyBinding::new(keystrokes, SavePlayQueue, None),
        ids::APPEND_TO_PLAY_QUEUE => KeyBinding::new(keystrokes, AppendToPlayQueue, None),
        ids::APPEND_TO_PLAY_QUEUE_AND_PLAY => {
            KeyBinding::new(keystrokes, AppendToPlayQueueAndPlay, None)
        }
        ids::ADD_TO_PLAY_QUEUE_AND_PLAY => KeyBinding::new(keystrokes, AddToPlayQueueAndPlay, None),
        ids::INSERT_AFTER_CURRENT => KeyBinding::new(keystrokes, InsertAfterCurrent, None),
        ids::ADD_RANDOM_ALBUM_TO_PLAY_QUEUE => {
            KeyBinding::new(keystrokes, AddRandomAlbumToPlayQueue, None)
        }
        ids::REPLACE_PLAY_QUEUE => KeyBinding::new(keystrokes, ReplacePlayQueue, None),
        ids::ORGANISE_FILES => KeyBinding::new(keystrokes, OrganiseFiles, None),
        ids::EDIT_TAGS => KeyBinding::new(keystrokes, EditTags, None),
        ids::REPLAY_GAIN => KeyBinding::new(keystrokes, ReplayGain, None),
        ids::SEARCH => KeyBinding::new(keystrokes, Search, None),
        _ => return None,
    };
    Some(binding)
}

/// Ids that have a gpui action to bind to.
pub const BINDABLE_IDS: [&str; 19] = [
    ids::PREV_TRACK,
    ids::NEXT_TRACK,
    ids::PLAY_PAUSE_TRACK,
    ids::STOP_PLAYBACK,
    ids::STOP_AFTER_CURRENT_TRACK,
    ids::STOP_AFTER_TRACK,
    ids::INCREASE_VOLUME,
    ids::DECREASE_VOLUME,
    ids::SAVE_PLAY_QUEUE,
    ids::APPEND_TO_PLAY_QUEUE,
    ids::APPEND_TO_PLAY_QUEUE_AND_PLAY,
    ids::ADD_TO_PLAY_QUEUE_AND_PLAY,
    ids::INSERT_AFTER_CURRENT,
    ids::ADD_RANDOM_ALBUM_TO_PLAY_QUEUE,
    ids::REPLACE_PLAY_QUEUE,
    ids::ORGANISE_FILES,
    ids::EDIT_TAGS,
    ids::REPLAY_GAIN,
    ids::SEARCH,
];

fn is_bindable(id: &str) -> bool { BINDABLE_IDS.contains(&id) }

/// Key bindings for every named action that currently has a shortcut.
///
/// Call again and rebind after the user edits shortcuts.
pub fn key_bindings(collection: &ActionCollection) -> Vec<KeyBinding> {
    collection
        .iter()
        .filter_map(|action| {
            let id = action.id()?;
            let shortcut = action.shortcut()?;
            binding_for(id.as_ref(), shortcut.as_str())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Action, action::Shortcut};

    #[test]
    fn only_actions_with_shortcuts_bind() {
        let mut collection = ActionCollection::new();
        collection.create_action(ids::STOP_PLAYBACK, "Stop", None);
        collection.register(
            ids::SEARCH,
            Action::builder()
                .label("Find")
                .shortcut(Shortcut::from("secondary-f"))
                .build(),
        );

        let bindings = key_bindings(&collection);
        assert_eq!(bindings.len(), 1);
        assert_eq!(bindings[0].action().name(), "cadenza::Search");
    }

    #[test]
    fn user_shortcuts_rebind() {
        let mut collection = ActionCollection::new();
        let stop = collection.create_action(ids::STOP_PLAYBACK, "Stop", None);
        assert!(key_bindings(&collection).is_empty());

        stop.set_shortcut(Some(Shortcut::from("ctrl-shift-x")));
        assert_eq!(key_bindings(&collection).len(), 1);
    }

    #[test]
    fn unknown_ids_have_no_binding() {
        assert!(binding_for("not-an-action", "f1").is_none());
        assert!(binding_for(ids::NEXT_TRACK, "f9").is_some());
    }

    #[test]
    fn unparsable_shortcuts_are_skipped() {
        assert!(binding_for(ids::SEARCH, "ctrl-").is_none());
        assert!(binding_for(ids::SEARCH, "ctrl-shift").is_none());
        assert!(binding_for(ids::SEARCH, "   ").is_none());
        assert!(binding_for(ids::SEARCH, "ctrl-k ctrl-").is_none());
        assert!(binding_for(ids::SEARCH, "ctrl-k ctrl-f").is_some());

        let mut collection = ActionCollection::new();
        let search = collection.create_action(ids::SEARCH, "Find", None);
        let stop = collection.create_action(ids::STOP_PLAYBACK, "Stop", None);
        search.set_shortcut(Some(Shortcut::from("ctrl-")));
        stop.set_shortcut(Some(Shortcut::from("ctrl-shift-x")));

        let bindings = key_bindings(&collection);
        assert_eq!(bindings.len(), 1);
        assert_eq!(bindings[0].action().name(), "cadenza::StopPlayback");
    }

    #[test]
    fn every_bindable_id_binds() {
        for id in BINDABLE_IDS {
            assert!(binding_for(id, "f5").is_some(), "{id} has no gpui action");
        }
    }
}
