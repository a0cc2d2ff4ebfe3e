// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fan-domain commands emitted by the damper controls.

use serde_json::{Value, json};

use crate::command::Command;
use crate::entity::EntityId;

/// Service domain of the damper entity.
pub const FAN_DOMAIN: &str = "fan";

/// A command for the damper device.
///
/// Commands are fire-and-forget: the card never observes whether the device
/// accepted them and learns the outcome only from the next state push.
///
/// # Examples
///
/// ```
/// use damper_card::command::{Command, DeviceCommand};
///
/// let cmd = DeviceCommand::set_percentage("fan.damper".parse().unwrap(), 37.0);
/// assert_eq!(cmd.service(), "set_percentage");
/// assert_eq!(
///     cmd.service_data(),
///     serde_json::json!({ "entity_id": "fan.damper", "percentage": 37 })
/// );
///
/// let cmd = DeviceCommand::set_preset_mode("fan.damper".parse().unwrap(), "ITC");
/// assert_eq!(cmd.service(), "set_preset_mode");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceCommand {
    /// Set the damper opening.
    SetPercentage {
        /// Target device.
        entity_id: EntityId,
        /// Opening as committed by the slider, unmodified.
        percentage: f64,
    },
    /// Switch between percentage mode and ITC mode.
    SetPresetMode {
        /// Target device.
        entity_id: EntityId,
        /// Preset mode name.
        preset_mode: String,
    },
}

impl DeviceCommand {
    /// Creates a set-percentage command.
    #[must_use]
    pub fn set_percentage(entity_id: EntityId, percentage: f64) -> Self {
        Self::SetPercentage {
            entity_id,
            percentage,
        }
    }

    /// Creates a set-preset-mode command.
    #[must_use]
    pub fn set_preset_mode(entity_id: EntityId, preset_mode: impl Into<String>) -> Self {
        Self::SetPresetMode {
            entity_id,
            preset_mode: preset_mode.into(),
        }
    }

    /// Returns the target device.
    #[must_use]
    pub fn entity_id(&self) -> &EntityId {
        match self {
            Self::SetPercentage { entity_id, .. } | Self::SetPresetMode { entity_id, .. } => {
                entity_id
            }
        }
    }
}

impl Command for DeviceCommand {
    fn domain(&self) -> &'static str {
        FAN_DOMAIN
    }

    fn service(&self) -> &'static str {
        match self {
            Self::SetPercentage { .. } => "set_percentage",
            Self::SetPresetMode { .. } => "set_preset_mode",
        }
    }

    fn service_data(&self) -> Value {
        match self {
            Self::SetPercentage {
                entity_id,
                percentage,
            } => json!({
                "entity_id": entity_id.as_str(),
                "percentage": percentage_value(*percentage),
            }),
            Self::SetPresetMode {
                entity_id,
                preset_mode,
            } => json!({
                "entity_id": entity_id.as_str(),
                "preset_mode": preset_mode,
            }),
        }
    }
}

// Whole numbers go out as JSON integers, fractional steps as floats.
#[allow(clippy::cast_possible_truncation)]
fn percentage_value(percentage: f64) -> Value {
    if percentage.fract() == 0.0 && percentage.abs() <= f64::from(i32::MAX) {
        json!(percentage as i64)
    } else {
        json!(percentage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn damper() -> EntityId {
        EntityId::new("fan.damper").unwrap()
    }

    #[test]
    fn set_percentage_payload() {
        let cmd = DeviceCommand::set_percentage(damper(), 37.0);
        assert_eq!(cmd.domain(), "fan");
        assert_eq!(cmd.service(), "set_percentage");
        assert_eq!(
            cmd.service_data(),
            json!({"entity_id": "fan.damper", "percentage": 37})
        );
    }

    #[test]
    fn fractional_percentage_is_kept() {
        let cmd = DeviceCommand::set_percentage(damper(), 33.5);
        assert_eq!(cmd.service_data()["percentage"], json!(33.5));
    }

    #[test]
    fn set_preset_mode_payload() {
        let cmd = DeviceCommand::set_preset_mode(damper(), "Damper");
        assert_eq!(cmd.service(), "set_preset_mode");
        assert_eq!(
            cmd.service_data(),
            json!({"entity_id": "fan.damper", "preset_mode": "Damper"})
        );
        assert_eq!(cmd.entity_id(), &damper());
    }

    #[test]
    fn service_call_envelope() {
        let cmd = DeviceCommand::set_percentage(damper(), 10.0);
        assert_eq!(
            cmd.to_service_call(),
            json!({
                "domain": "fan",
                "service": "set_percentage",
                "service_data": {"entity_id": "fan.damper", "percentage": 10}
            })
        );
    }
}
