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

//! Play queue priorities and the menu used to pick one.

use num_enum::{IntoPrimitive, TryFromPrimitive};
use strum::IntoEnumIterator;

use crate::{
    action::Action,
    menu::{Menu, MenuHandle},
};

/// Priority assigned to a queued song. Higher values play sooner.
///
/// [`Priority::Custom`] is a sentinel: whoever handles the menu entry asks
/// the user for a value.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    IntoPrimitive,
    TryFromPrimitive,
    strum_macros::EnumIter,
)]
#[repr(i32)]
pub enum Priority {
    Highest = 255,
    High    = 200,
    Medium  = 125,
    Low     = 50,
    Default = 0,
    Custom  = -1,
}

impl Priority {
    pub fn value(self) -> i32 { self.into() }

    pub fn label(self) -> &'static str {
        match self {
            Self::Highest => "Highest Priority (255)",
            Self::High => "High Priority (200)",
            Self::Medium => "Medium Priority (125)",
            Self::Low => "Low Priority (50)",
            Self::Default => "Default Priority (0)",
            Self::Custom => "Custom Priority...",
        }
    }

    /// Priority carried by a priority menu entry.
    pub fn from_action(action: &Action) -> Option<Self> {
        action.data().and_then(|value| Self::try_from(value).ok())
    }
}

/// Build a fresh priority menu, one entry per [`Priority`] in descending
/// order with `Custom` last.
///
/// Every call returns new actions so menus attached to different anchors
/// never share state.
pub fn priority_menu() -> MenuHandle {
    Menu::from_actions(Priority::iter().map(|priority| {
        Action::builder()
            .label(priority.label())
            .data(priority.value())
            .build()
            .into_handle()
    }))
    .into_handle()
}
