// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Attribute accessors.
//!
//! Pure, total functions that read raw entity attributes into typed values.
//! Absence is always `None`; a value of the wrong JSON type counts as
//! absent. Rounding happens here and nowhere downstream.
//!
//! Out-of-range percentages are rounded but not clamped, so a pushed
//! `-4.2` reads as `-4`.

use crate::types::{DamperMode, OperatingState};

use super::EntityState;
use super::state::{STATE_OFF, STATE_UNAVAILABLE, STATE_UNKNOWN};

/// Rounds the `percentage` attribute to the nearest integer.
///
/// # Examples
///
/// ```
/// use damper_card::entity::{EntityState, attributes};
///
/// let damper = EntityState::new("fan.damper".parse().unwrap(), "on")
///     .with_attribute("percentage", 42.6);
/// assert_eq!(attributes::percentage_of(&damper), Some(43));
/// ```
#[must_use]
pub fn percentage_of(entity: &EntityState) -> Option<i32> {
    number(entity, "percentage").map(round_to_i32)
}

/// Returns the `percentage_step` attribute if it is truthy, else `1.0`.
#[must_use]
pub fn percentage_step_of(entity: &EntityState) -> f64 {
    number(entity, "percentage_step")
        .filter(|step| *step != 0.0 && !step.is_nan())
        .unwrap_or(1.0)
}

/// Returns the raw `preset_mode` attribute.
#[must_use]
pub fn preset_mode_of(entity: &EntityState) -> Option<&str> {
    entity.attribute("preset_mode").and_then(|v| v.as_str())
}

/// Returns `true` iff `preset_mode` is exactly `"ITC"`.
#[must_use]
pub fn is_exclusive_mode(entity: &EntityState) -> bool {
    DamperMode::from_preset(preset_mode_of(entity)).is_exclusive()
}

/// Rounds the climate `temperature` (setpoint) attribute.
#[must_use]
pub fn target_temperature_of(climate: &EntityState) -> Option<i64> {
    number(climate, "temperature").map(round_to_i64)
}

/// Rounds the climate `current_temperature` attribute.
#[must_use]
pub fn current_temperature_of(climate: &EntityState) -> Option<i64> {
    number(climate, "current_temperature").map(round_to_i64)
}

/// Reads what the climate device is doing.
///
/// Prefers the `hvac_action` attribute and falls back to the entity state.
#[must_use]
pub fn operating_state_of(climate: &EntityState) -> OperatingState {
    let raw = climate
        .attribute("hvac_action")
        .and_then(|v| v.as_str())
        .unwrap_or(&climate.state);
    OperatingState::parse(raw)
}

/// Returns the `friendly_name` attribute.
#[must_use]
pub fn friendly_name_of(entity: &EntityState) -> Option<&str> {
    entity.attribute("friendly_name").and_then(|v| v.as_str())
}

/// Returns `true` unless the entity is unavailable.
#[must_use]
pub fn is_available(entity: &EntityState) -> bool {
    entity.state != STATE_UNAVAILABLE
}

/// Returns `true` if the entity is available and neither off nor unknown.
#[must_use]
pub fn is_active(entity: &EntityState) -> bool {
    is_available(entity) && entity.state != STATE_OFF && entity.state != STATE_UNKNOWN
}

fn number(entity: &EntityState, key: &str) -> Option<f64> {
    entity.attribute(key).and_then(serde_json::Value::as_f64)
}

// Saturating casts; NaN maps to zero.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn round_to_i32(value: f64) -> i32 {
    value.round() as i32
}

#[allow(clippy::cast_possible_truncation)]
fn round_to_i64(value: f64) -> i64 {
    value.round() as i64
}
