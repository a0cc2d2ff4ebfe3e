// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Material Design icon identifiers used by the card.

use std::fmt;

/// An icon shown by the card or one of its controls.
///
/// # Examples
///
/// ```
/// use damper_card::types::Icon;
///
/// assert_eq!(Icon::Fire.as_str(), "mdi:fire");
/// assert_eq!(Icon::default(), Icon::AirConditioner);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize)]
#[serde(into = "&'static str")]
pub enum Icon {
    /// Generic climate-control glyph.
    #[default]
    AirConditioner,
    /// Power glyph, for an off device or an idle climate.
    Power,
    /// Heating.
    Fire,
    /// Cooling.
    Snowflake,
    /// Automatic heat/cool.
    Autorenew,
    /// Drying.
    WaterPercent,
    /// Fan only.
    Fan,
    /// Mode toggle while in percentage mode.
    AirFilter,
    /// Mode toggle while in ITC mode.
    Thermometer,
}

impl Icon {
    /// Returns the `mdi:` identifier of the icon.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AirConditioner => "mdi:air-conditioner",
            Self::Power => "mdi:power",
            Self::Fire => "mdi:fire",
            Self::Snowflake => "mdi:snowflake",
            Self::Autorenew => "mdi:autorenew",
            Self::WaterPercent => "mdi:water-percent",
            Self::Fan => "mdi:fan",
            Self::AirFilter => "mdi:air-filter",
            Self::Thermometer => "mdi:thermometer",
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Icon> for &'static str {
    fn from(icon: Icon) -> Self {
        icon.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_mdi_identifier() {
        let json = serde_json::to_string(&Icon::Snowflake).unwrap();
        assert_eq!(json, "\"mdi:snowflake\"");
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(Icon::Thermometer.to_string(), "mdi:thermometer");
    }
}
