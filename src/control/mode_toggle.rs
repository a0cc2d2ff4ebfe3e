// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Percentage/ITC mode toggle.

use crate::command::DeviceCommand;
use crate::entity::{ClimateSnapshot, DamperSnapshot};
use crate::types::{DEFAULT_PERCENTAGE_PRESET, DamperMode, ITC_PRESET, Icon};

/// Render model of the toggle button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct ModeToggleView {
    /// Button icon.
    pub icon: Icon,
    /// Highlighted while the device reports ITC mode.
    pub active: bool,
    /// Button is not interactive.
    pub disabled: bool,
}

/// Flips a damper between percentage mode and ITC mode.
///
/// Holds no state: the next mode is always computed from the device's
/// authoritative preset mode, and the active indicator only changes once a
/// push confirms the switch.
///
/// # Examples
///
/// ```
/// use damper_card::command::DeviceCommand;
/// use damper_card::control::ModeToggle;
/// use damper_card::entity::{ClimateSnapshot, DamperSnapshot, DefaultStateFormatter, EntityState};
///
/// let damper = DamperSnapshot::from_entity(
///     &EntityState::new("fan.damper".parse().unwrap(), "on").with_attribute("preset_mode", "ITC"),
///     &DefaultStateFormatter,
/// );
/// let climate = ClimateSnapshot::from_entity(&EntityState::new("climate.hall".parse().unwrap(), "heat"));
///
/// let toggle = ModeToggle::default();
/// assert_eq!(
///     toggle.activate(&damper, Some(&climate)),
///     Some(DeviceCommand::set_preset_mode("fan.damper".parse().unwrap(), "Damper"))
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeToggle {
    percentage_preset: String,
}

impl ModeToggle {
    /// Creates a toggle that names percentage mode `percentage_preset`.
    #[must_use]
    pub fn new(percentage_preset: impl Into<String>) -> Self {
        Self {
            percentage_preset: percentage_preset.into(),
        }
    }

    /// Returns the preset name used for percentage mode.
    #[must_use]
    pub fn percentage_preset(&self) -> &str {
        &self.percentage_preset
    }

    /// Returns `true` if the toggle refuses activation.
    #[must_use]
    pub fn is_disabled(device: &DamperSnapshot, climate: Option<&ClimateSnapshot>) -> bool {
        !device.is_available() || climate.is_none()
    }

    /// Returns the preset name of a mode.
    #[must_use]
    pub fn preset_for(&self, mode: DamperMode) -> &str {
        match mode {
            DamperMode::Percentage => &self.percentage_preset,
            DamperMode::Itc => ITC_PRESET,
        }
    }

    /// Activates the toggle, returning the one command to send.
    ///
    /// Returns `None` when the toggle is disabled.
    #[must_use]
    pub fn activate(
        &self,
        device: &DamperSnapshot,
        climate: Option<&ClimateSnapshot>,
    ) -> Option<DeviceCommand> {
        if Self::is_disabled(device, climate) {
            tracing::debug!(entity_id = %device.entity_id(), "Mode toggle is disabled");
            return None;
        }

        let next = device.mode().toggled();
        tracing::debug!(entity_id = %device.entity_id(), %next, "Switching damper mode");
        Some(DeviceCommand::set_preset_mode(
            device.entity_id().clone(),
            self.preset_for(next),
        ))
    }

    /// Returns the render model.
    #[must_use]
    pub fn view(device: &DamperSnapshot, climate: Option<&ClimateSnapshot>) -> ModeToggleView {
        let itc = device.is_exclusive_mode();
        ModeToggleView {
            icon: if itc { Icon::Thermometer } else { Icon::AirFilter },
            active: itc,
            disabled: Self::is_disabled(device, climate),
        }
    }
}

impl Default for ModeToggle {
    fn default() -> Self {
        Self::new(DEFAULT_PERCENTAGE_PRESET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{DefaultStateFormatter, EntityId, EntityState};

    fn damper(state: &str, preset: &str) -> DamperSnapshot {
        let raw = EntityState::new(EntityId::new("fan.damper").unwrap(), state)
            .with_attribute("preset_mode", preset);
        DamperSnapshot::from_entity(&raw, &DefaultStateFormatter)
    }

    fn climate() -> ClimateSnapshot {
        ClimateSnapshot::from_entity(&EntityState::new(
            EntityId::new("climate.hall").unwrap(),
            "cool",
        ))
    }

    fn preset_of(command: Option<DeviceCommand>) -> String {
        match command {
            Some(DeviceCommand::SetPresetMode { preset_mode, .. }) => preset_mode,
            other => panic!("expected a preset command, got {other:?}"),
        }
    }

    #[test]
    fn percentage_mode_switches_to_itc() {
        let toggle = ModeToggle::default();
        let command = toggle.activate(&damper("on", "Damper"), Some(&climate()));
        assert_eq!(preset_of(command), "ITC");
    }

    #[test]
    fn itc_switches_to_configured_preset() {
        let toggle = ModeToggle::new("Manual");
        let command = toggle.activate(&damper("on", "ITC"), Some(&climate()));
        assert_eq!(preset_of(command), "Manual");
    }

    #[test]
    fn lowercase_itc_counts_as_percentage_mode() {
        let toggle = ModeToggle::default();
        let command = toggle.activate(&damper("on", "itc"), Some(&climate()));
        assert_eq!(preset_of(command), "ITC");
    }

    #[test]
    fn disabled_without_climate_or_availability() {
        let toggle = ModeToggle::default();
        assert_eq!(toggle.activate(&damper("on", "Damper"), None), None);
        assert_eq!(
            toggle.activate(&damper("unavailable", "Damper"), Some(&climate())),
            None
        );
        assert!(ModeToggle::view(&damper("on", "Damper"), None).disabled);
    }

    #[test]
    fn view_tracks_authoritative_mode() {
        let itc = ModeToggle::view(&damper("on", "ITC"), Some(&climate()));
        assert_eq!(
            itc,
            ModeToggleView {
                icon: Icon::Thermometer,
                active: true,
                disabled: false,
            }
        );

        let manual = ModeToggle::view(&damper("on", "Damper"), Some(&climate()));
        assert_eq!(manual.icon, Icon::AirFilter);
        assert!(!manual.active);
    }
}
