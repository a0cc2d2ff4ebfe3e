// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! RGB color type and the card's icon palette.
//!
//! The card tints its icon with one of a handful of fixed colors. Hosts
//! render them through the CSS helpers, which produce the icon color and
//! the translucent shape color behind it.

use std::fmt;

/// RGB color with 8-bit channels (0-255).
///
/// # Examples
///
/// ```
/// use damper_card::types::RgbColor;
///
/// let heat = RgbColor::HEATING;
/// assert_eq!(heat.to_hex_with_hash(), "#FF8100");
/// assert_eq!(heat.to_css_rgb(), "rgb(255, 129, 0)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct RgbColor {
    red: u8,
    green: u8,
    blue: u8,
}

impl RgbColor {
    /// Theme green, used for the default and `auto` icon.
    pub const GREEN: Self = Self::new(76, 175, 80);

    /// Neutral grey (`#8a8a8a`), used for off, idle and fan-only.
    pub const NEUTRAL: Self = Self::new(138, 138, 138);

    /// Disabled grey, used for an inactive device without a climate pairing.
    pub const DISABLED: Self = Self::new(189, 189, 189);

    /// Warm orange (`#ff8100`), used while heating.
    pub const HEATING: Self = Self::new(255, 129, 0);

    /// Cool blue (`#2b9af9`), used while cooling.
    pub const COOLING: Self = Self::new(43, 154, 249);

    /// Amber (`#efbd07`), used while drying.
    pub const DRYING: Self = Self::new(239, 189, 7);

    /// Creates a new RGB color.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Returns the red component.
    #[must_use]
    pub const fn red(&self) -> u8 {
        self.red
    }

    /// Returns the green component.
    #[must_use]
    pub const fn green(&self) -> u8 {
        self.green
    }

    /// Returns the blue component.
    #[must_use]
    pub const fn blue(&self) -> u8 {
        self.blue
    }

    /// Returns the color as a hex string with the hash prefix.
    #[must_use]
    pub fn to_hex_with_hash(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }

    /// Returns the color as a CSS `rgb()` value, used for the icon itself.
    #[must_use]
    pub fn to_css_rgb(&self) -> String {
        format!("rgb({}, {}, {})", self.red, self.green, self.blue)
    }

    /// Returns the color as a CSS `rgba()` value with the given alpha.
    ///
    /// The card draws the icon shape at 20% opacity of the icon color.
    #[must_use]
    pub fn to_css_rgba(&self, alpha: f32) -> String {
        format!("rgba({}, {}, {}, {alpha})", self.red, self.green, self.blue)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex_with_hash())
    }
}

impl From<(u8, u8, u8)> for RgbColor {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::new(red, green, blue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_matches_hex_values() {
        assert_eq!(RgbColor::NEUTRAL.to_hex_with_hash(), "#8A8A8A");
        assert_eq!(RgbColor::HEATING.to_hex_with_hash(), "#FF8100");
        assert_eq!(RgbColor::COOLING.to_hex_with_hash(), "#2B9AF9");
        assert_eq!(RgbColor::DRYING.to_hex_with_hash(), "#EFBD07");
    }

    #[test]
    fn css_helpers() {
        let color = RgbColor::new(43, 154, 249);
        assert_eq!(color.to_css_rgb(), "rgb(43, 154, 249)");
        assert_eq!(color.to_css_rgba(0.2), "rgba(43, 154, 249, 0.2)");
    }

    #[test]
    fn from_tuple() {
        let color: RgbColor = (1, 2, 3).into();
        assert_eq!(color, RgbColor::new(1, 2, 3));
    }

    #[test]
    fn display_uses_hex() {
        assert_eq!(RgbColor::GREEN.to_string(), "#4CAF50");
    }
}
