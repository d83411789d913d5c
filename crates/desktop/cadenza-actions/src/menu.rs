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

use std::{cell::RefCell, rc::Rc};

use gpui::SharedString;

use crate::action::ActionHandle;

/// Shared handle to a menu.
pub type MenuHandle = Rc<Menu>;

/// One row of a [`Menu`].
#[derive(Debug, Clone)]
pub enum MenuEntry {
    Action(ActionHandle),
    Submenu { title: SharedString, menu: MenuHandle },
    Separator,
}

/// Ordered list of actions and nested menus.
///
/// Menus contributed by models (stored playlists, devices) keep changing
/// while shared with the actions anchoring them, so entries sit behind a
/// `RefCell`.
#[derive(Debug, Default)]
pub struct Menu {
    entries: RefCell<Vec<MenuEntry>>,
}

impl Menu {
    pub fn new() -> Self { Self::default() }

    /// Menu holding the given actions in order.
    pub fn from_actions(actions: impl IntoIterator<Item = ActionHandle>) -> Self {
        Self {
            entries: RefCell::new(actions.into_iter().map(MenuEntry::Action).collect()),
        }
    }

    pub fn into_handle(self) -> MenuHandle { Rc::new(self) }

    pub fn add_action(&self, action: ActionHandle) {
        self.entries.borrow_mut().push(MenuEntry::Action(action));
    }

    pub fn add_submenu(&self, title: impl Into<SharedString>, menu: MenuHandle) {
        self.entries.borrow_mut().push(MenuEntry::Submenu {
            title: title.into(),
            menu,
        });
    }

    pub fn add_separator(&self) { self.entries.borrow_mut().push(MenuEntry::Separator); }

    pub fn clear(&self) { self.entries.borrow_mut().clear(); }

    pub fn entries(&self) -> Vec<MenuEntry> { self.entries.borrow().clone() }

    /// Actions directly in this menu, skipping separators and submenus.
    pub fn actions(&self) -> Vec<ActionHandle> {
        self.entries
            .borrow()
            .iter()
            .filter_map(|entry| match entry {
                MenuEntry::Action(action) => Some(Rc::clone(action)),
                _ => None,
            })
            .collect()
    }

    pub fn len(&self) -> usize { self.entries.borrow().len() }

    pub fn is_empty(&self) -> bool { self.entries.borrow().is_empty() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Action;

    #[test]
    fn actions_skip_separators_and_submenus() {
        let menu = Menu::new();
        menu.add_action(Action::builder().label("One").build().into_handle());
        menu.add_separator();
        menu.add_submenu("More", Menu::new().into_handle());
        menu.add_action(Action::builder().label("Two").build().into_handle());

        assert_eq!(menu.len(), 4);
        let labels: Vec<_> = menu
            .actions()
            .iter()
            .map(|a| a.label().to_string())
            .collect();
        assert_eq!(labels, ["One", "Two"]);

        menu.clear();
        assert!(menu.is_empty());
    }

    #[test]
    fn shared_menu_sees_owner_updates() {
        let menu = Menu::new().into_handle();
        let anchor = Action::builder()
            .label("Add To Playlist")
            .menu(Rc::clone(&menu))
            .build();

        menu.add_action(Action::builder().label("Road Trip").build().into_handle());
        assert_eq!(anchor.menu().unwrap().len(), 1);
    }
}
