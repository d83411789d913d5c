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

//! A single user-invokable command and the shared handle to it.

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use gpui::SharedString;
use serde::{Deserialize, Serialize};

use crate::{icons::Icon, menu::MenuHandle};

/// Shared handle to an action. Actions live as long as the registry that
/// created them and are only touched from the UI thread.
pub type ActionHandle = Rc<Action>;

/// Keystroke sequence in gpui notation, e.g. `secondary-s`.
///
/// `secondary` is Cmd on macOS and Ctrl everywhere else.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(transparent)]
pub struct Shortcut(String);

impl Shortcut {
    pub fn new(keystrokes: impl Into<String>) -> Self { Self(keystrokes.into()) }

    pub fn as_str(&self) -> &str { &self.0 }
}

impl From<&str> for Shortcut {
    fn from(keystrokes: &str) -> Self { Self::new(keystrokes) }
}

/// A menu item, toolbar button or keyboard shortcut target.
///
/// Everything except the enabled/visible flags and the user-assigned
/// shortcut is fixed at construction.
#[derive(Debug)]
pub struct Action {
    id:                   Option<SharedString>,
    label:                SharedString,
    icon:                 Option<Icon>,
    tooltip:              Option<SharedString>,
    tooltip_for_settings: bool,
    data:                 Option<i32>,
    menu:                 Option<MenuHandle>,
    default_shortcut:     Option<Shortcut>,
    shortcut:             RefCell<Option<Shortcut>>,
    enabled:              Cell<bool>,
    visible:              Cell<bool>,
}

#[bon::bon]
impl Action {
    /// Build an action. Named actions get their id when registered with an
    /// [`ActionCollection`](crate::ActionCollection).
    ///
    /// `settings_tooltip` sets a tooltip that also replaces the label on the
    /// shortcut settings page.
    #[builder]
    pub fn new(
        #[builder(into)] label: SharedString,
        icon: Option<Icon>,
        shortcut: Option<Shortcut>,
        #[builder(into)] settings_tooltip: Option<SharedString>,
        data: Option<i32>,
        menu: Option<MenuHandle>,
        #[builder(default = true)] visible: bool,
    ) -> Self {
        Self {
            id: None,
            label,
            icon,
            tooltip_for_settings: settings_tooltip.is_some(),
            tooltip: settings_tooltip,
            data,
            menu,
            shortcut: RefCell::new(shortcut.clone()),
            default_shortcut: shortcut,
            enabled: Cell::new(true),
            visible: Cell::new(visible),
        }
    }
}

impl Action {
    pub fn into_handle(self) -> ActionHandle { Rc::new(self) }

    pub(crate) fn with_id(mut self, id: SharedString) -> Self {
        self.id = Some(id);
        self
    }

    /// Identifier under which the action is registered, `None` for actions
    /// private to their owner.
    pub fn id(&self) -> Option<&SharedString> { self.id.as_ref() }

    pub fn label(&self) -> &SharedString { &self.label }

    pub fn icon(&self) -> Option<&Icon> { self.icon.as_ref() }

    pub fn tooltip(&self) -> Option<&SharedString> { self.tooltip.as_ref() }

    /// Whether the shortcut settings page shows the tooltip instead of the
    /// label.
    pub fn tooltip_for_settings(&self) -> bool { self.tooltip_for_settings }

    /// Text to show for this action when configuring shortcuts.
    pub fn settings_text(&self) -> &SharedString {
        match (&self.tooltip, self.tooltip_for_settings) {
            (Some(tooltip), true) => tooltip,
            _ => &self.label,
        }
    }

    /// Integer payload, used by priority menu entries.
    pub fn data(&self) -> Option<i32> { self.data }

    pub fn menu(&self) -> Option<&MenuHandle> { self.menu.as_ref() }

    pub fn shortcut(&self) -> Option<Shortcut> { self.shortcut.borrow().clone() }

    pub fn default_shortcut(&self) -> Option<&Shortcut> { self.default_shortcut.as_ref() }

    /// Replace the current shortcut; `None` removes it.
    pub fn set_shortcut(&self, shortcut: Option<Shortcut>) { *self.shortcut.borrow_mut() = shortcut; }

    /// Whether the user changed the shortcut away from its default.
    pub fn is_shortcut_customized(&self) -> bool {
        self.shortcut.borrow().as_ref() != self.default_shortcut.as_ref()
    }

    pub fn is_enabled(&self) -> bool { self.enabled.get() }

    pub fn set_enabled(&self, enabled: bool) { self.enabled.set(enabled); }

    pub fn is_visible(&self) -> bool { self.visible.get() }

    pub fn set_visible(&self, visible: bool) { self.visible.set(visible); }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let action = Action::builder().label("Remove").build();
        assert!(action.id().is_none());
        assert!(action.is_enabled());
        assert!(action.is_visible());
        assert!(action.shortcut().is_none());
        assert!(!action.tooltip_for_settings());
        assert_eq!(action.settings_text().as_ref(), "Remove");
    }

    #[test]
    fn settings_tooltip_replaces_label_in_settings() {
        let action = Action::builder()
            .label("Append")
            .settings_tooltip("Append To Play Queue")
            .build();
        assert!(action.tooltip_for_settings());
        assert_eq!(action.label().as_ref(), "Append");
        assert_eq!(action.settings_text().as_ref(), "Append To Play Queue");
    }

    #[test]
    fn shortcut_customization() {
        let action = Action::builder()
            .label("Find")
            .shortcut(Shortcut::from("secondary-f"))
            .build();
        assert!(!action.is_shortcut_customized());

        action.set_shortcut(Some("secondary-shift-f".into()));
        assert!(action.is_shortcut_customized());
        assert_eq!(action.shortcut().unwrap().as_str(), "secondary-shift-f");

        action.set_shortcut(None);
        assert!(action.is_shortcut_customized());

        action.set_shortcut(Some("secondary-f".into()));
        assert!(!action.is_shortcut_customized());
    }

    #[test]
    fn flags_toggle_through_shared_handles() {
        let action = Action::builder().label("Stop").visible(false).build().into_handle();
        let other = Rc::clone(&action);
        assert!(!other.is_visible());

        action.set_enabled(false);
        action.set_visible(true);
        assert!(!other.is_enabled());
        assert!(other.is_visible());
    }
}
