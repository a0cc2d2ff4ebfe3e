// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Card configuration.

use crate::command::{ActionConfig, ActionKind};
use crate::entity::{EntityId, StateStore};
use crate::error::ConfigError;
use crate::types::DEFAULT_PERCENTAGE_PRESET;

use super::registration::CARD_INFO;

/// Domains the primary entity may belong to.
pub const DAMPER_ENTITY_DOMAINS: &[&str] = &["fan"];

/// Domain of the paired climate entity.
pub const CLIMATE_DOMAIN: &str = "climate";

/// Configuration of a damper card.
///
/// Every flag defaults to `false`. Actions default to toggle on tap,
/// more-info on hold and nothing on double tap. Unknown keys written by the
/// host (`layout`, `fill_container`, ...) are ignored.
///
/// # Examples
///
/// ```
/// use damper_card::config::CardConfig;
///
/// let config = CardConfig::from_json(r#"{
///     "type": "custom:damper-card",
///     "entity": "fan.hall_damper",
///     "climate_entity": "climate.hall",
///     "show_percentage_control": true
/// }"#)
/// .unwrap();
///
/// assert!(config.show_percentage_control);
/// assert!(!config.show_itc_control);
/// assert_eq!(config.percentage_mode, "Damper");
///
/// // Builder style
/// let config = CardConfig::for_entity("fan.hall_damper".parse().unwrap())
///     .with_climate_entity("climate.hall".parse().unwrap())
///     .with_itc_control(true);
/// assert!(config.show_itc_control);
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CardConfig {
    /// Card type as written by the host.
    #[serde(rename = "type", default = "default_card_type")]
    pub card_type: String,
    /// The damper entity. Without it the card renders nothing.
    #[serde(default)]
    pub entity: Option<EntityId>,
    /// The paired climate entity.
    #[serde(default)]
    pub climate_entity: Option<EntityId>,
    /// Title override.
    #[serde(default)]
    pub name: Option<String>,
    /// Hides the state line.
    #[serde(default)]
    pub hide_state: bool,
    /// Shows the percentage slider.
    #[serde(default)]
    pub show_percentage_control: bool,
    /// Shows the ITC mode toggle.
    #[serde(default)]
    pub show_itc_control: bool,
    /// Hides the controls row while the damper is not active.
    #[serde(default)]
    pub collapsible_controls: bool,
    /// Preset mode name of percentage mode.
    #[serde(default = "default_percentage_mode")]
    pub percentage_mode: String,
    /// Action on tap.
    #[serde(default = "default_tap_action")]
    pub tap_action: ActionConfig,
    /// Action on hold.
    #[serde(default = "default_hold_action")]
    pub hold_action: ActionConfig,
    /// Action on double tap.
    #[serde(default = "default_double_tap_action")]
    pub double_tap_action: ActionConfig,
}

fn default_card_type() -> String {
    CARD_INFO.custom_type()
}

fn default_percentage_mode() -> String {
    DEFAULT_PERCENTAGE_PRESET.to_string()
}

fn default_tap_action() -> ActionConfig {
    ActionConfig::Toggle
}

fn default_hold_action() -> ActionConfig {
    ActionConfig::MoreInfo
}

fn default_double_tap_action() -> ActionConfig {
    ActionConfig::None
}

impl CardConfig {
    /// Creates a configuration for a damper with every control hidden.
    #[must_use]
    pub fn for_entity(entity: EntityId) -> Self {
        Self {
            entity: Some(entity),
            ..Self::default()
        }
    }

    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Json` if the document is malformed and
    /// `ConfigError::WrongDomain` if an entity is outside its domain.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the entity domains.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::WrongDomain` if the damper is not a `fan` entity
    /// or the climate entity is not a `climate` entity.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(entity) = &self.entity
            && !DAMPER_ENTITY_DOMAINS.contains(&entity.domain())
        {
            return Err(ConfigError::WrongDomain {
                entity: entity.to_string(),
                expected: DAMPER_ENTITY_DOMAINS[0],
            });
        }
        if let Some(climate) = &self.climate_entity
            && climate.domain() != CLIMATE_DOMAIN
        {
            return Err(ConfigError::WrongDomain {
                entity: climate.to_string(),
                expected: CLIMATE_DOMAIN,
            });
        }
        Ok(())
    }

    /// Builds the starter configuration a host offers when the card is
    /// added: the first damper entity in the store, nothing else.
    #[must_use]
    pub fn stub(store: &StateStore) -> Self {
        let entity = DAMPER_ENTITY_DOMAINS
            .iter()
            .find_map(|domain| store.entity_ids_in_domain(domain).next())
            .cloned();
        Self {
            entity,
            ..Self::default()
        }
    }

    /// Returns the action configured for a gesture.
    #[must_use]
    pub fn action_for(&self, kind: ActionKind) -> &ActionConfig {
        match kind {
            ActionKind::Tap => &self.tap_action,
            ActionKind::Hold => &self.hold_action,
            ActionKind::DoubleTap => &self.double_tap_action,
        }
    }

    /// Returns `true` if the controls row has anything to show.
    #[must_use]
    pub fn has_controls(&self) -> bool {
        self.show_percentage_control || self.show_itc_control
    }

    /// Sets the paired climate entity.
    #[must_use]
    pub fn with_climate_entity(mut self, climate: EntityId) -> Self {
        self.climate_entity = Some(climate);
        self
    }

    /// Sets the title override.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Shows or hides the state line.
    #[must_use]
    pub fn with_hide_state(mut self, hide: bool) -> Self {
        self.hide_state = hide;
        self
    }

    /// Shows or hides the percentage slider.
    #[must_use]
    pub fn with_percentage_control(mut self, show: bool) -> Self {
        self.show_percentage_control = show;
        self
    }

    /// Shows or hides the ITC toggle.
    #[must_use]
    pub fn with_itc_control(mut self, show: bool) -> Self {
        self.show_itc_control = show;
        self
    }

    /// Collapses the controls row while the damper is not active.
    #[must_use]
    pub fn with_collapsible_controls(mut self, collapsible: bool) -> Self {
        self.collapsible_controls = collapsible;
        self
    }

    /// Sets the preset name of percentage mode.
    #[must_use]
    pub fn with_percentage_mode(mut self, preset: impl Into<String>) -> Self {
        self.percentage_mode = preset.into();
        self
    }

    /// Sets the action of a gesture.
    #[must_use]
    pub fn with_action(mut self, kind: ActionKind, action: ActionConfig) -> Self {
        match kind {
            ActionKind::Tap => self.tap_action = action,
            ActionKind::Hold => self.hold_action = action,
            ActionKind::DoubleTap => self.double_tap_action = action,
        }
        self
    }
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            card_type: default_card_type(),
            entity: None,
            climate_entity: None,
            name: None,
            hide_state: false,
            show_percentage_control: false,
            show_itc_control: false,
            collapsible_controls: false,
            percentage_mode: default_percentage_mode(),
            tap_action: default_tap_action(),
            hold_action: default_hold_action(),
            double_tap_action: default_double_tap_action(),
        }
    }
}
