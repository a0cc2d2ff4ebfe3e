// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The state projector.

use crate::entity::{ClimateSnapshot, DamperSnapshot};
use crate::types::{Icon, OperatingState, RgbColor};

use super::DisplayState;

/// Card options that influence the projection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectionOptions<'a> {
    /// Title override; falls back to the friendly name, then the entity id.
    pub name: Option<&'a str>,
    /// Suppresses the state line.
    pub hide_state: bool,
}

/// Projects device, climate and local override into a [`DisplayState`].
///
/// Pure: identical inputs always give identical output. A climate snapshot
/// that is unavailable is treated as absent. Without a current temperature
/// the climate adds nothing to the state line, even if a setpoint is known.
///
/// # Examples
///
/// ```
/// use damper_card::entity::{DamperSnapshot, DefaultStateFormatter, EntityState};
/// use damper_card::projection::{ProjectionOptions, project};
///
/// let raw = EntityState::new("fan.damper".parse().unwrap(), "on")
///     .with_attribute("percentage", 42.6);
/// let damper = DamperSnapshot::from_entity(&raw, &DefaultStateFormatter);
///
/// let display = project(&damper, None, None, &ProjectionOptions::default());
/// assert_eq!(display.secondary_text.as_deref(), Some("On | 43%"));
///
/// // A drag in progress takes precedence over the device value.
/// let display = project(&damper, None, Some(70), &ProjectionOptions::default());
/// assert_eq!(display.secondary_text.as_deref(), Some("On | 70%"));
/// ```
#[must_use]
pub fn project(
    device: &DamperSnapshot,
    climate: Option<&ClimateSnapshot>,
    local_override: Option<i32>,
    options: &ProjectionOptions<'_>,
) -> DisplayState {
    let climate = climate.filter(|climate| climate.is_available());
    let percentage = local_override.or(device.percentage());
    let (icon, icon_color) = icon_and_color(device, climate);

    let primary_text = options
        .name
        .or(device.friendly_name())
        .map_or_else(|| device.entity_id().to_string(), str::to_owned);

    DisplayState {
        icon,
        icon_color,
        icon_active: device.is_active(),
        primary_text,
        secondary_text: (!options.hide_state)
            .then(|| secondary_text(device, climate, percentage)),
        percentage,
        unavailable: !device.is_available(),
    }
}

fn icon_and_color(device: &DamperSnapshot, climate: Option<&ClimateSnapshot>) -> (Icon, RgbColor) {
    let Some(climate) = climate else {
        let color = if device.is_active() {
            RgbColor::GREEN
        } else {
            RgbColor::DISABLED
        };
        return (Icon::AirConditioner, color);
    };

    if device.is_off() {
        return (Icon::Power, RgbColor::NEUTRAL);
    }

    match climate.operating_state() {
        OperatingState::Heating => (Icon::Fire, RgbColor::HEATING),
        OperatingState::Cooling => (Icon::Snowflake, RgbColor::COOLING),
        OperatingState::Auto => (Icon::Autorenew, RgbColor::GREEN),
        OperatingState::Drying => (Icon::WaterPercent, RgbColor::DRYING),
        OperatingState::Fan => (Icon::Fan, RgbColor::NEUTRAL),
        OperatingState::Idle => (Icon::Power, RgbColor::NEUTRAL),
        OperatingState::Off | OperatingState::Unknown => (Icon::AirConditioner, RgbColor::GREEN),
    }
}

fn secondary_text(
    device: &DamperSnapshot,
    climate: Option<&ClimateSnapshot>,
    percentage: Option<i32>,
) -> String {
    let mut text = device.label().to_owned();

    // The setpoint only follows a current temperature, and only while no
    // percentage competes for the line.
    if let Some(climate) = climate
        && let Some(current) = climate.current_temperature()
    {
        text = match climate.target_temperature() {
            Some(target) if percentage.is_none() && device.is_active() => {
                format!("{current}°C |-> {target}°C")
            }
            _ => format!("{current}°C"),
        };
    }

    if let Some(percentage) = percentage {
        text = format!("{text} | {percentage}%");
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{DefaultStateFormatter, EntityId, EntityState};

    fn damper(state: &str) -> EntityState {
        EntityState::new(EntityId::new("fan.damper").unwrap(), state)
    }

    fn climate(hvac_action: &str) -> EntityState {
        EntityState::new(EntityId::new("climate.hall").unwrap(), "heat")
            .with_attribute("hvac_action", hvac_action)
    }

    fn project_raw(
        device: &EntityState,
        climate: Option<&EntityState>,
        local_override: Option<i32>,
    ) -> DisplayState {
        let device = DamperSnapshot::from_entity(device, &DefaultStateFormatter);
        let climate = climate.map(ClimateSnapshot::from_entity);
        project(
            &device,
            climate.as_ref(),
            local_override,
            &ProjectionOptions::default(),
        )
    }

    #[test]
    fn no_climate_uses_default_icon() {
        let on = project_raw(&damper("on"), None, None);
        assert_eq!(on.icon, Icon::AirConditioner);
        assert_eq!(on.icon_color, RgbColor::GREEN);
        assert!(on.icon_active);

        let off = project_raw(&damper("off"), None, None);
        assert_eq!(off.icon, Icon::AirConditioner);
        assert_eq!(off.icon_color, RgbColor::DISABLED);
        assert!(!off.icon_active);
    }

    #[test]
    fn climate_states_map_to_icons() {
        let cases = [
            ("heating", Icon::Fire, RgbColor::HEATING),
            ("cooling", Icon::Snowflake, RgbColor::COOLING),
            ("auto", Icon::Autorenew, RgbColor::GREEN),
            ("drying", Icon::WaterPercent, RgbColor::DRYING),
            ("fan", Icon::Fan, RgbColor::NEUTRAL),
            ("idle", Icon::Power, RgbColor::NEUTRAL),
            ("off", Icon::AirConditioner, RgbColor::GREEN),
            ("defrosting", Icon::AirConditioner, RgbColor::GREEN),
        ];
        for (action, icon, color) in cases {
            let display = project_raw(&damper("on"), Some(&climate(action)), None);
            assert_eq!((display.icon, display.icon_color), (icon, color), "{action}");
        }
    }

    #[test]
    fn device_off_wins_over_climate_state() {
        let display = project_raw(&damper("off"), Some(&climate("heating")), None);
        assert_eq!(display.icon, Icon::Power);
        assert_eq!(display.icon_color, RgbColor::NEUTRAL);
    }

    #[test]
    fn unavailable_climate_falls_back_to_defaults() {
        let climate = EntityState::new(EntityId::new("climate.hall").unwrap(), "unavailable")
            .with_attribute("current_temperature", 21);
        let display = project_raw(&damper("on"), Some(&climate), None);
        assert_eq!(display.icon, Icon::AirConditioner);
        assert_eq!(display.secondary_text.as_deref(), Some("On"));
    }

    #[test]
    fn climate_text_with_target() {
        let climate = climate("heating")
            .with_attribute("current_temperature", 21)
            .with_attribute("temperature", 23);
        let display = project_raw(&damper("on"), Some(&climate), None);
        assert_eq!(display.secondary_text.as_deref(), Some("21°C |-> 23°C"));
    }

    #[test]
    fn climate_text_without_target() {
        let climate = climate("heating").with_attribute("current_temperature", 21);
        let display = project_raw(&damper("on"), Some(&climate), None);
        assert_eq!(display.secondary_text.as_deref(), Some("21°C"));
    }

    #[test]
    fn target_hidden_when_inactive_or_percentage_shown() {
        let climate = climate("heating")
            .with_attribute("current_temperature", 21)
            .with_attribute("temperature", 23);

        let inactive = project_raw(&damper("off"), Some(&climate), None);
        assert_eq!(inactive.secondary_text.as_deref(), Some("21°C"));

        let with_percentage = project_raw(
            &damper("on").with_attribute("percentage", 40),
            Some(&climate),
            None,
        );
        assert_eq!(with_percentage.secondary_text.as_deref(), Some("21°C | 40%"));
    }

    #[test]
    fn target_without_current_keeps_device_label() {
        let climate = climate("heating").with_attribute("temperature", 23);
        let display = project_raw(&damper("on"), Some(&climate), None);
        assert_eq!(display.secondary_text.as_deref(), Some("On"));

        let display = project_raw(
            &damper("on").with_attribute("percentage", 40),
            Some(&climate),
            None,
        );
        assert_eq!(display.secondary_text.as_deref(), Some("On | 40%"));
    }

    #[test]
    fn missing_temperatures_keep_device_label() {
        let display = project_raw(&damper("on"), Some(&climate("heating")), None);
        assert_eq!(display.secondary_text.as_deref(), Some("On"));
        assert!(!display.secondary_text.unwrap().contains("°C"));
    }

    #[test]
    fn override_takes_precedence() {
        let device = damper("on").with_attribute("percentage", 30);
        let display = project_raw(&device, None, Some(55));
        assert_eq!(display.percentage, Some(55));
        assert_eq!(display.secondary_text.as_deref(), Some("On | 55%"));
    }

    #[test]
    fn zero_percentage_is_displayed() {
        let device = damper("on").with_attribute("percentage", 0);
        let display = project_raw(&device, None, None);
        assert_eq!(display.secondary_text.as_deref(), Some("On | 0%"));
    }

    #[test]
    fn hide_state_suppresses_text() {
        let device = DamperSnapshot::from_entity(
            &damper("on").with_attribute("percentage", 30),
            &DefaultStateFormatter,
        );
        let options = ProjectionOptions {
            hide_state: true,
            ..ProjectionOptions::default()
        };
        let display = project(&device, None, None, &options);
        assert_eq!(display.secondary_text, None);
        assert_eq!(display.percentage, Some(30));
    }

    #[test]
    fn primary_text_precedence() {
        let named = damper("on").with_attribute("friendly_name", "Hall damper");
        let device = DamperSnapshot::from_entity(&named, &DefaultStateFormatter);

        let options = ProjectionOptions {
            name: Some("Upstairs"),
            ..ProjectionOptions::default()
        };
        assert_eq!(project(&device, None, None, &options).primary_text, "Upstairs");
        assert_eq!(
            project(&device, None, None, &ProjectionOptions::default()).primary_text,
            "Hall damper"
        );
        assert_eq!(project_raw(&damper("on"), None, None).primary_text, "fan.damper");
    }

    #[test]
    fn unavailable_device_still_projects() {
        let display = project_raw(&damper("unavailable"), None, None);
        assert!(display.unavailable);
        assert_eq!(display.secondary_text.as_deref(), Some("Unavailable"));
    }

    #[test]
    fn projection_is_pure() {
        let device = damper("on").with_attribute("percentage", 12.4);
        let climate = climate("cooling").with_attribute("current_temperature", 19);
        let first = project_raw(&device, Some(&climate), Some(80));
        let second = project_raw(&device, Some(&climate), Some(80));
        assert_eq!(first, second);
    }

    #[test]
    fn css_helpers() {
        let display = project_raw(&damper("on"), Some(&climate("heating")), None);
        assert_eq!(display.icon_color_css(), "rgb(255, 129, 0)");
        assert_eq!(display.shape_color_css(), "rgba(255, 129, 0, 0.2)");
    }
}
