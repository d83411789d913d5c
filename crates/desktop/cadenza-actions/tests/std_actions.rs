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

use std::rc::Rc;

use cadenza_actions::{
    Action, ActionRegistry, AssetIconTheme, DevicesModel, FeatureConfig, Glyph, Icon, Menu,
    MenuHandle, PlaylistsModel, Priority, Shortcut, icons::MONO_RED, ids,
};
use cadenza_common_telemetry::logging::init_default_ut_logging;
use tempfile::TempDir;

struct Playlists {
    menu: MenuHandle,
}

impl Playlists {
    fn new() -> Self {
        let menu = Menu::new();
        menu.add_action(Action::builder().label("Road Trip").build().into_handle());
        Self {
            menu: menu.into_handle(),
        }
    }
}

impl PlaylistsModel for Playlists {
    fn menu(&self) -> MenuHandle { Rc::clone(&self.menu) }
}

struct Devices {
    menu: MenuHandle,
}

impl DevicesModel for Devices {
    fn menu(&self) -> MenuHandle { Rc::clone(&self.menu) }
}

fn registry(features: FeatureConfig, with_devices: bool) -> ActionRegistry {
    init_default_ut_logging();
    let devices: Option<Rc<dyn DevicesModel>> = with_devices.then(|| {
        Rc::new(Devices {
            menu: Menu::new().into_handle(),
        }) as Rc<dyn DevicesModel>
    });
    ActionRegistry::builder()
        .theme(Rc::new(AssetIconTheme::default()))
        .playlists(Rc::new(Playlists::new()))
        .maybe_devices(devices)
        .features(features)
        .build()
}

#[test]
fn initialization_is_lazy_and_happens_once() {
    let registry = registry(FeatureConfig::default(), true);
    assert!(!registry.is_initialized());

    let first = Rc::clone(&registry.std_actions().search);
    let named = registry.collection().len();
    assert!(registry.is_initialized());

    let second = Rc::clone(&registry.std_actions().search);
    assert!(Rc::ptr_eq(&first, &second));
    assert_eq!(registry.collection().len(), named);
    assert!(Rc::ptr_eq(&registry.collection().get(ids::SEARCH).unwrap(), &first));
}

#[test]
fn disabling_add_to_play_queue_leaves_others_alone() {
    let registry = registry(FeatureConfig::default(), true);
    registry.enable_add_to_play_queue(false);

    let actions = registry.std_actions();
    assert!(!actions.append_to_play_queue.is_enabled());
    assert!(!actions.insert_after_current.is_enabled());
    assert!(!actions.add_to_play_queue_menu.is_enabled());
    assert!(actions.search.is_enabled());
    assert!(actions.stop_playback.is_enabled());

    let targets = actions.add_to_play_queue_actions();
    for action in actions.all() {
        let targeted = targets.iter().any(|t| Rc::ptr_eq(*t, action));
        assert_eq!(action.is_enabled(), !targeted, "{}", action.label());
    }
}

#[test]
fn enable_add_to_play_queue_is_idempotent() {
    let registry = registry(FeatureConfig::default(), false);
    let actions = registry.std_actions();

    for enabled in [true, true, false, false, true] {
        actions.enable_add_to_play_queue(enabled);
        for action in actions.add_to_play_queue_actions() {
            assert_eq!(action.is_enabled(), enabled);
        }
    }
    assert!(actions.all().iter().all(|a| a.is_enabled()));
}

#[test]
fn priority_submenus() {
    let registry = registry(FeatureConfig::default(), false);
    let actions = registry.std_actions();
    let add = actions.add_with_priority.menu().unwrap();
    let set = actions.set_priority.menu().unwrap();

    for menu in [add, set] {
        let values: Vec<_> = menu.actions().iter().filter_map(|a| a.data()).collect();
        assert_eq!(values, [255, 200, 125, 50, 0, -1]);
    }

    add.actions()[2].set_enabled(false);
    assert!(set.actions()[2].is_enabled());

    let custom = &set.actions()[5];
    assert_eq!(Priority::from_action(custom), Some(Priority::Custom));
}

#[test]
fn tooltips_for_settings() {
    let registry = registry(FeatureConfig::default(), false);
    let actions = registry.std_actions();

    assert!(actions.append_to_play_queue.tooltip_for_settings());
    assert_eq!(
        actions.append_to_play_queue.settings_text().as_ref(),
        "Append To Play Queue"
    );
    assert!(actions.append_to_play_queue_and_play.tooltip_for_settings());
    assert!(!actions.add_to_play_queue_and_play.tooltip_for_settings());
    assert_eq!(actions.add_to_play_queue_and_play.settings_text().as_ref(), "Add And Play");
}

#[test]
fn default_shortcuts() {
    let registry = registry(FeatureConfig::default(), false);
    let actions = registry.std_actions();
    let shortcut = |a: &Action| a.shortcut().map(|s| s.to_string());

    assert_eq!(shortcut(&actions.save_play_queue).as_deref(), Some("secondary-s"));
    assert_eq!(shortcut(&actions.append_to_play_queue).as_deref(), Some("secondary-p"));
    assert_eq!(shortcut(&actions.replace_play_queue).as_deref(), Some("secondary-r"));
    assert_eq!(shortcut(&actions.search).as_deref(), Some("secondary-f"));
    assert_eq!(shortcut(&actions.stop_playback), None);

    let bindings = cadenza_actions::keymap::key_bindings(&registry.collection());
    assert_eq!(bindings.len(), 4);
}

#[test]
fn optional_groups_follow_features() {
    let full = registry(FeatureConfig::default(), true);
    let actions = full.std_actions();
    assert_eq!(actions.tags.is_some(), cfg!(feature = "tags"));
    assert_eq!(actions.replay_gain.is_some(), cfg!(feature = "replaygain"));
    assert_eq!(actions.devices.is_some(), cfg!(feature = "devices"));
    assert_eq!(full.collection().contains(ids::EDIT_TAGS), cfg!(feature = "tags"));

    let minimal = registry(FeatureConfig::minimal(), true);
    let actions = minimal.std_actions();
    assert!(actions.tags.is_none());
    assert!(actions.replay_gain.is_none());
    assert!(actions.devices.is_none());
    assert!(!minimal.collection().contains(ids::ORGANISE_FILES));
    assert!(!minimal.collection().contains(ids::REPLAY_GAIN));
}

#[cfg(not(feature = "tags"))]
#[test]
fn tags_compiled_out_ignores_config() {
    let registry = registry(FeatureConfig::default(), true);
    assert!(FeatureConfig::default().tags);
    assert!(registry.std_actions().tags.is_none());
    assert!(!registry.collection().contains(ids::ORGANISE_FILES));
    assert!(!registry.collection().contains(ids::EDIT_TAGS));
}

#[cfg(not(feature = "replaygain"))]
#[test]
fn replay_gain_compiled_out_ignores_config() {
    let registry = registry(FeatureConfig::default(), true);
    assert!(FeatureConfig::default().replay_gain);
    assert!(registry.std_actions().replay_gain.is_none());
    assert!(!registry.collection().contains(ids::REPLAY_GAIN));
}

#[cfg(not(feature = "devices"))]
#[test]
fn devices_compiled_out_ignores_model() {
    let registry = registry(FeatureConfig::default(), true);
    assert!(FeatureConfig::default().devices);
    assert!(registry.std_actions().devices.is_none());
    assert!(
        registry
            .std_actions()
            .all()
            .iter()
            .all(|a| a.label().as_ref() != "Delete Songs")
    );
}

#[cfg(feature = "devices")]
#[test]
fn device_actions_use_model_menu_and_red_trash() {
    let registry = registry(FeatureConfig::default(), true);
    let devices = registry.std_actions().devices.as_ref().unwrap();

    assert!(devices.copy_to_device.menu().unwrap().is_empty());
    assert_eq!(
        devices.delete_songs.icon(),
        Some(&Icon::glyph(Glyph::Trash, MONO_RED))
    );
    assert!(devices.copy_to_device.id().is_none());
}

#[test]
fn add_to_playlist_shares_the_model_menu() {
    let playlists = Rc::new(Playlists::new());
    let registry = ActionRegistry::builder()
        .theme(Rc::new(AssetIconTheme::default()))
        .playlists(playlists.clone())
        .build();

    let menu = registry.std_actions().add_to_stored_playlist.menu().unwrap();
    assert!(Rc::ptr_eq(menu, &playlists.menu));

    playlists
        .menu
        .add_action(Action::builder().label("Workout").build().into_handle());
    assert_eq!(menu.len(), 2);
}

#[test]
fn shortcuts_persist_across_registries() {
    let tempdir = TempDir::new().unwrap();
    let path = tempdir.path().join("shortcuts.json");

    let first = registry(FeatureConfig::default(), false);
    first
        .std_actions()
        .search
        .set_shortcut(Some(Shortcut::from("ctrl-shift-f")));
    first.std_actions().save_play_queue.set_shortcut(None);
    first.save_shortcuts(&path).unwrap();

    let second = registry(FeatureConfig::default(), false);
    assert_eq!(second.load_shortcuts(&path).unwrap(), 2);
    let actions = second.std_actions();
    assert_eq!(actions.search.shortcut(), Some(Shortcut::from("ctrl-shift-f")));
    assert_eq!(actions.save_play_queue.shortcut(), None);
    assert_eq!(actions.replace_play_queue.shortcut(), Some(Shortcut::from("secondary-r")));
}
