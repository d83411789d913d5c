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

//! Cadenza Actions - the standard commands of the Cadenza music player
//!
//! Builds the actions behind menus, toolbars and keyboard shortcuts (track
//! navigation, volume, play queue editing, priorities, tag editing, device
//! copies) and keeps the named ones in an [`ActionCollection`] so users can
//! rebind them.

pub mod action;
pub mod collection;
pub mod config;
pub mod err;
pub mod icons;
pub mod keymap;
pub mod menu;
pub mod models;
pub mod priority;
pub mod registry;
pub mod shortcuts;
pub mod std_actions;

pub use action::{Action, ActionHandle, Shortcut};
pub use collection::{ActionCollection, ShortcutEntry, ids};
pub use config::{ActionsConfig, FeatureConfig};
pub use err::{Error, Result};
pub use icons::{AssetIconTheme, Glyph, Icon, IconTheme, StdIcon};
pub use menu::{Menu, MenuEntry, MenuHandle};
pub use models::{DevicesModel, PlaylistsModel};
pub use priority::{Priority, priority_menu};
pub use registry::ActionRegistry;
pub use shortcuts::ShortcutOverrides;
pub use std_actions::{DeviceActions, Dependencies, ReplayGainActions, StdActions, TagActions};
