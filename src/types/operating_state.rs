// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Operating state of a paired climate device.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// What the paired thermostat is currently doing.
///
/// Parsing is total: any value outside the known set, including an empty
/// string, resolves to [`OperatingState::Unknown`]. Matching ignores ASCII
/// case, so `"Heating"` and `"heating"` are the same state.
///
/// # Examples
///
/// ```
/// use damper_card::types::OperatingState;
///
/// assert_eq!(OperatingState::parse("heating"), OperatingState::Heating);
/// assert_eq!(OperatingState::parse("Cooling"), OperatingState::Cooling);
/// assert_eq!(OperatingState::parse("defrosting"), OperatingState::Unknown);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OperatingState {
    /// Actively heating.
    Heating,
    /// Actively cooling.
    Cooling,
    /// Automatic heat/cool.
    Auto,
    /// Dehumidifying.
    Drying,
    /// Circulating air only.
    Fan,
    /// On but not conditioning.
    Idle,
    /// Switched off.
    Off,
    /// Anything else.
    #[default]
    Unknown,
}

impl OperatingState {
    /// Parses an operating state, falling back to `Unknown`.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "heating" => Self::Heating,
            "cooling" => Self::Cooling,
            "auto" => Self::Auto,
            "drying" => Self::Drying,
            "fan" => Self::Fan,
            "idle" => Self::Idle,
            "off" => Self::Off,
            _ => Self::Unknown,
        }
    }

    /// Returns the canonical lowercase name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Heating => "heating",
            Self::Cooling => "cooling",
            Self::Auto => "auto",
            Self::Drying => "drying",
            Self::Fan => "fan",
            Self::Idle => "idle",
            Self::Off => "off",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for OperatingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperatingState {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_states() {
        for state in [
            OperatingState::Heating,
            OperatingState::Cooling,
            OperatingState::Auto,
            OperatingState::Drying,
            OperatingState::Fan,
            OperatingState::Idle,
            OperatingState::Off,
        ] {
            assert_eq!(OperatingState::parse(state.as_str()), state);
        }
    }

    #[test]
    fn unrecognized_values_are_unknown() {
        assert_eq!(OperatingState::parse(""), OperatingState::Unknown);
        assert_eq!(OperatingState::parse("heat"), OperatingState::Unknown);
        assert_eq!(OperatingState::parse("preheating"), OperatingState::Unknown);
    }

    #[test]
    fn from_str_never_fails() {
        let state: OperatingState = "IDLE".parse().unwrap();
        assert_eq!(state, OperatingState::Idle);
    }
}
