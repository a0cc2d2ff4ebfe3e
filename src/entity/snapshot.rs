// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Typed, normalized views of the damper and its paired climate device.
//!
//! A snapshot is read once from the raw [`EntityState`] through the
//! accessors in [`attributes`](super::attributes) and is immutable
//! afterwards. Each push produces fresh snapshots.

use crate::types::{DamperMode, OperatingState};

use super::attributes;
use super::format::StateFormatter;
use super::state::STATE_OFF;
use super::{EntityId, EntityState};

/// Normalized state of the primary damper device.
///
/// # Examples
///
/// ```
/// use damper_card::entity::{DamperSnapshot, DefaultStateFormatter, EntityState};
///
/// let raw = EntityState::new("fan.damper".parse().unwrap(), "on")
///     .with_attribute("percentage", 42.6)
///     .with_attribute("preset_mode", "ITC");
/// let damper = DamperSnapshot::from_entity(&raw, &DefaultStateFormatter);
///
/// assert_eq!(damper.percentage(), Some(43));
/// assert!(damper.is_exclusive_mode());
/// assert_eq!(damper.label(), "On");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DamperSnapshot {
    entity_id: EntityId,
    state: String,
    label: String,
    friendly_name: Option<String>,
    percentage: Option<i32>,
    percentage_step: f64,
    preset_mode: Option<String>,
    available: bool,
    active: bool,
}

impl DamperSnapshot {
    /// Normalizes a raw damper state.
    #[must_use]
    pub fn from_entity(entity: &EntityState, formatter: &dyn StateFormatter) -> Self {
        Self {
            entity_id: entity.entity_id.clone(),
            state: entity.state.clone(),
            label: formatter.format_state(entity),
            friendly_name: attributes::friendly_name_of(entity).map(str::to_owned),
            percentage: attributes::percentage_of(entity),
            percentage_step: attributes::percentage_step_of(entity),
            preset_mode: attributes::preset_mode_of(entity).map(str::to_owned),
            available: attributes::is_available(entity),
            active: attributes::is_active(entity),
        }
    }

    /// Returns the entity id.
    #[must_use]
    pub fn entity_id(&self) -> &EntityId {
        &self.entity_id
    }

    /// Returns the raw state string.
    #[must_use]
    pub fn state(&self) -> &str {
        &self.state
    }

    /// Returns the formatted state label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the friendly name, if the device reports one.
    #[must_use]
    pub fn friendly_name(&self) -> Option<&str> {
        self.friendly_name.as_deref()
    }

    /// Returns the authoritative, rounded percentage.
    #[must_use]
    pub fn percentage(&self) -> Option<i32> {
        self.percentage
    }

    /// Returns the slider step.
    #[must_use]
    pub fn percentage_step(&self) -> f64 {
        self.percentage_step
    }

    /// Returns the raw preset mode.
    #[must_use]
    pub fn preset_mode(&self) -> Option<&str> {
        self.preset_mode.as_deref()
    }

    /// Returns the operating mode derived from the preset mode.
    #[must_use]
    pub fn mode(&self) -> DamperMode {
        DamperMode::from_preset(self.preset_mode())
    }

    /// Returns `true` in ITC mode.
    #[must_use]
    pub fn is_exclusive_mode(&self) -> bool {
        self.mode().is_exclusive()
    }

    /// Returns `true` unless the device is unavailable.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Returns `true` if the device is actively operating.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns `true` if the device reports the `off` state.
    #[must_use]
    pub fn is_off(&self) -> bool {
        self.state == STATE_OFF
    }
}

/// Normalized state of the paired climate device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClimateSnapshot {
    entity_id: EntityId,
    current_temperature: Option<i64>,
    target_temperature: Option<i64>,
    operating_state: OperatingState,
    available: bool,
}

impl ClimateSnapshot {
    /// Normalizes a raw climate state.
    #[must_use]
    pub fn from_entity(entity: &EntityState) -> Self {
        Self {
            entity_id: entity.entity_id.clone(),
            current_temperature: attributes::current_temperature_of(entity),
            target_temperature: attributes::target_temperature_of(entity),
            operating_state: attributes::operating_state_of(entity),
            available: attributes::is_available(entity),
        }
    }

    /// Returns the entity id.
    #[must_use]
    pub fn entity_id(&self) -> &EntityId {
        &self.entity_id
    }

    /// Returns the measured temperature, rounded.
    #[must_use]
    pub fn current_temperature(&self) -> Option<i64> {
        self.current_temperature
    }

    /// Returns the setpoint, rounded.
    #[must_use]
    pub fn target_temperature(&self) -> Option<i64> {
        self.target_temperature
    }

    /// Returns what the thermostat is doing.
    #[must_use]
    pub fn operating_state(&self) -> OperatingState {
        self.operating_state
    }

    /// Returns `true` unless the climate device is unavailable.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.available
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::DefaultStateFormatter;

    #[test]
    fn damper_snapshot_defaults() {
        let raw = EntityState::new(EntityId::new("fan.damper").unwrap(), "off");
        let damper = DamperSnapshot::from_entity(&raw, &DefaultStateFormatter);

        assert_eq!(damper.percentage(), None);
        assert!((damper.percentage_step() - 1.0).abs() < f64::EPSILON);
        assert_eq!(damper.mode(), DamperMode::Percentage);
        assert!(damper.is_available());
        assert!(!damper.is_active());
        assert!(damper.is_off());
        assert_eq!(damper.label(), "Off");
    }

    #[test]
    fn climate_snapshot_reads_attributes() {
        let raw = EntityState::new(EntityId::new("climate.hall").unwrap(), "cool")
            .with_attribute("hvac_action", "cooling")
            .with_attribute("current_temperature", 24.5)
            .with_attribute("temperature", 21);
        let climate = ClimateSnapshot::from_entity(&raw);

        assert_eq!(climate.current_temperature(), Some(25));
        assert_eq!(climate.target_temperature(), Some(21));
        assert_eq!(climate.operating_state(), OperatingState::Cooling);
        assert!(climate.is_available());
    }

    #[test]
    fn unavailable_climate() {
        let raw = EntityState::new(EntityId::new("climate.hall").unwrap(), "unavailable");
        assert!(!ClimateSnapshot::from_entity(&raw).is_available());
    }
}
