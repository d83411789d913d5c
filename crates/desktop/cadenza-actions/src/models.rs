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

//! Models that contribute menus to the standard actions.

use crate::menu::MenuHandle;

/// Stored playlists, offered as targets of "Add To Playlist".
pub trait PlaylistsModel {
    /// Menu listing the stored playlists. The model keeps it up to date.
    fn menu(&self) -> MenuHandle;
}

/// Attached devices, offered as targets of "Copy Songs To Device".
pub trait DevicesModel {
    fn menu(&self) -> MenuHandle;
}
