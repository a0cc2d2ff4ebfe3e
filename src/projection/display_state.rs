// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The derived display model of the card header.

use crate::types::{Icon, RgbColor};

/// Opacity of the icon shape relative to the icon color.
pub const SHAPE_ALPHA: f32 = 0.2;

/// What the card header shows. Recomputed on every render, never stored.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct DisplayState {
    /// Icon glyph.
    pub icon: Icon,
    /// Icon tint.
    pub icon_color: RgbColor,
    /// `false` draws the icon in its disabled style.
    pub icon_active: bool,
    /// Card title.
    pub primary_text: String,
    /// State line, `None` when the card hides it.
    pub secondary_text: Option<String>,
    /// The percentage on display: the local override if any, else the
    /// authoritative value.
    pub percentage: Option<i32>,
    /// Raised when the device is unavailable; the host shows a badge.
    pub unavailable: bool,
}

impl DisplayState {
    /// CSS value of the icon color.
    #[must_use]
    pub fn icon_color_css(&self) -> String {
        self.icon_color.to_css_rgb()
    }

    /// CSS value of the translucent shape behind the icon.
    #[must_use]
    pub fn shape_color_css(&self) -> String {
        self.icon_color.to_css_rgba(SHAPE_ALPHA)
    }
}
