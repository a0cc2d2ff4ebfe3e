// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Damper operating modes.

use std::fmt;

/// Preset mode name of Integrated Temperature Control.
pub const ITC_PRESET: &str = "ITC";

/// Default preset mode name of percentage mode.
pub const DEFAULT_PERCENTAGE_PRESET: &str = "Damper";

/// The two mutually exclusive modes of a damper.
///
/// A device is in [`DamperMode::Itc`] iff its preset mode is exactly
/// `"ITC"`; every other preset, including a missing one, is percentage
/// mode.
///
/// # Examples
///
/// ```
/// use damper_card::types::DamperMode;
///
/// assert_eq!(DamperMode::from_preset(Some("ITC")), DamperMode::Itc);
/// assert_eq!(DamperMode::from_preset(Some("itc")), DamperMode::Percentage);
/// assert_eq!(DamperMode::from_preset(None), DamperMode::Percentage);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DamperMode {
    /// Opening is set directly as a percentage.
    #[default]
    Percentage,
    /// Opening is driven by the paired thermostat.
    Itc,
}

impl DamperMode {
    /// Classifies a preset mode. Comparison is exact and case-sensitive.
    #[must_use]
    pub fn from_preset(preset: Option<&str>) -> Self {
        if preset == Some(ITC_PRESET) {
            Self::Itc
        } else {
            Self::Percentage
        }
    }

    /// Returns `true` for the exclusive ITC mode.
    #[must_use]
    pub const fn is_exclusive(&self) -> bool {
        matches!(self, Self::Itc)
    }

    /// Returns the opposite mode.
    #[must_use]
    pub const fn toggled(&self) -> Self {
        match self {
            Self::Percentage => Self::Itc,
            Self::Itc => Self::Percentage,
        }
    }
}

impl fmt::Display for DamperMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Percentage => f.write_str("percentage"),
            Self::Itc => f.write_str("itc"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_exact_itc_is_exclusive() {
        assert!(DamperMode::from_preset(Some("ITC")).is_exclusive());
        for preset in ["itc", "Itc", " ITC", "ITC ", "Damper", ""] {
            assert!(!DamperMode::from_preset(Some(preset)).is_exclusive(), "{preset:?}");
        }
    }

    #[test]
    fn toggled_flips() {
        assert_eq!(DamperMode::Percentage.toggled(), DamperMode::Itc);
        assert_eq!(DamperMode::Itc.toggled(), DamperMode::Percentage);
    }
}
