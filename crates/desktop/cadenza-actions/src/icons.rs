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

//! Icons attached to actions and the theme that resolves them.

use gpui::{Rgba, SharedString};

/// Red used for destructive actions regardless of the active theme.
pub const MONO_RED: Rgba = Rgba {
    r: 0.859,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// Icon asset paths for the toolbar and context menus.
pub mod paths {
    // Playback toolbar
    pub const TOOLBAR_PREV: &str = "icons/media-previous.svg";
    pub const TOOLBAR_NEXT: &str = "icons/media-next.svg";
    pub const TOOLBAR_PLAY: &str = "icons/media-play.svg";
    pub const TOOLBAR_STOP: &str = "icons/media-stop.svg";

    // Play queue
    pub const SAVE_PLAY_QUEUE: &str = "icons/document-save-as.svg";
    pub const APPEND_TO_PLAY_QUEUE: &str = "icons/list-add.svg";
    pub const REPLACE_PLAY_QUEUE: &str = "icons/media-playback-start.svg";

    pub const PLAYLIST_LIST: &str = "icons/playlist-list.svg";
    pub const REMOVE: &str = "icons/list-remove.svg";
    pub const SEARCH: &str = "icons/edit-find.svg";

    /// Directory holding the monochrome glyphs, tinted at render time.
    pub const GLYPH_DIR: &str = "icons/glyphs";
}

/// Themed icons looked up by the standard actions.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum_macros::AsRefStr,
    strum_macros::EnumIter,
    strum_macros::Display,
)]
#[strum(serialize_all = "kebab-case")]
pub enum StdIcon {
    ToolbarPrev,
    ToolbarNext,
    ToolbarPlay,
    ToolbarStop,
    SavePlayQueue,
    AppendToPlayQueue,
    ReplacePlayQueue,
    PlaylistList,
    Remove,
    Search,
}

impl StdIcon {
    /// Asset path used by [`AssetIconTheme`].
    pub fn asset_path(self) -> &'static str {
        match self {
            Self::ToolbarPrev => paths::TOOLBAR_PREV,
            Self::ToolbarNext => paths::TOOLBAR_NEXT,
            Self::ToolbarPlay => paths::TOOLBAR_PLAY,
            Self::ToolbarStop => paths::TOOLBAR_STOP,
            Self::SavePlayQueue => paths::SAVE_PLAY_QUEUE,
            Self::AppendToPlayQueue => paths::APPEND_TO_PLAY_QUEUE,
            Self::ReplacePlayQueue => paths::REPLACE_PLAY_QUEUE,
            Self::PlaylistList => paths::PLAYLIST_LIST,
            Self::Remove => paths::REMOVE,
            Self::Search => paths::SEARCH,
        }
    }
}

/// Monochrome glyphs tinted with a single colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Glyph {
    FolderOpen,
    BarChart,
    Mobile,
    Trash,
}

impl Glyph {
    pub fn asset_path(self) -> String { format!("{}/{}.svg", paths::GLYPH_DIR, self.as_ref()) }
}

/// Icon shown next to an action's label.
#[derive(Debug, Clone, PartialEq)]
pub enum Icon {
    /// An icon resolved by the theme.
    Asset(SharedString),
    /// A glyph rendered in a single colour.
    Glyph { glyph: Glyph, color: Rgba },
}

impl Icon {
    pub fn glyph(glyph: Glyph, color: Rgba) -> Self { Self::Glyph { glyph, color } }

    /// Path of the SVG to render, for use with `gpui::svg().path()`.
    pub fn path(&self) -> SharedString {
        match self {
            Self::Asset(path) => path.clone(),
            Self::Glyph { glyph, .. } => glyph.asset_path().into(),
        }
    }
}

/// Provides themed icons and the colour used for monochrome glyphs.
pub trait IconTheme {
    fn icon(&self, icon: StdIcon) -> Icon;

    fn mono_color(&self) -> Rgba;
}

/// Icon theme backed by the bundled SVG assets.
#[derive(Debug, Clone)]
pub struct AssetIconTheme {
    mono_color: Rgba,
}

impl AssetIconTheme {
    pub fn new(mono_color: Rgba) -> Self { Self { mono_color } }

    pub fn from_hex(hex: u32) -> Self { Self::new(rgba_from_hex(hex)) }
}

impl Default for AssetIconTheme {
    // Secondary text colour of the dark theme.
    fn default() -> Self { Self::from_hex(0xa0a0a0) }
}

impl IconTheme for AssetIconTheme {
    fn icon(&self, icon: StdIcon) -> Icon { Icon::Asset(icon.asset_path().into()) }

    fn mono_color(&self) -> Rgba { self.mono_color }
}

/// Converts a 24-bit hex colour (e.g. `0xa0a0a0`) to an opaque [`Rgba`].
pub fn rgba_from_hex(hex: u32) -> Rgba {
    let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
    let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
    let b = (hex & 0xFF) as f32 / 255.0;
    Rgba { r, g, b, a: 1.0 }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn every_std_icon_has_a_distinct_path() {
        let mut paths: Vec<_> = StdIcon::iter().map(StdIcon::asset_path).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), StdIcon::iter().count());
    }

    #[test]
    fn glyph_paths_live_under_glyph_dir() {
        assert_eq!(Glyph::FolderOpen.asset_path(), "icons/glyphs/folder-open.svg");
        let icon = Icon::glyph(Glyph::Trash, MONO_RED);
        assert_eq!(icon.path().as_ref(), "icons/glyphs/trash.svg");
    }

    #[test]
    fn hex_conversion() {
        let c = rgba_from_hex(0xff0000);
        assert_eq!((c.r, c.g, c.b, c.a), (1.0, 0.0, 0.0, 1.0));
        assert_eq!(AssetIconTheme::default().mono_color(), rgba_from_hex(0xa0a0a0));
    }
}
