// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Display labels for raw entity states.
//!
//! Localization belongs to the host. The card asks a [`StateFormatter`] for
//! the label of the device state and ships an English default.

use super::EntityState;

/// Turns a raw entity state into the label shown to the user.
pub trait StateFormatter: Send + Sync {
    /// Returns the display label of the entity's state.
    fn format_state(&self, entity: &EntityState) -> String;
}

/// English labels: the raw state with its first letter capitalized and
/// underscores replaced by spaces (`"on"` becomes `"On"`).
///
/// # Examples
///
/// ```
/// use damper_card::entity::{DefaultStateFormatter, EntityState, StateFormatter};
///
/// let entity = EntityState::new("fan.damper".parse().unwrap(), "fan_only");
/// assert_eq!(DefaultStateFormatter.format_state(&entity), "Fan only");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultStateFormatter;

impl StateFormatter for DefaultStateFormatter {
    fn format_state(&self, entity: &EntityState) -> String {
        let spaced = entity.state.replace('_', " ");
        let mut chars = spaced.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl<F> StateFormatter for F
where
    F: Fn(&EntityState) -> String + Send + Sync,
{
    fn format_state(&self, entity: &EntityState) -> String {
        self(entity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::EntityId;

    fn entity(state: &str) -> EntityState {
        EntityState::new(EntityId::new("fan.damper").unwrap(), state)
    }

    #[test]
    fn default_labels() {
        assert_eq!(DefaultStateFormatter.format_state(&entity("on")), "On");
        assert_eq!(DefaultStateFormatter.format_state(&entity("off")), "Off");
        assert_eq!(
            DefaultStateFormatter.format_state(&entity("unavailable")),
            "Unavailable"
        );
        assert_eq!(DefaultStateFormatter.format_state(&entity("")), "");
    }

    #[test]
    fn closures_are_formatters() {
        let french = |e: &EntityState| {
            if e.state == "on" {
                String::from("Allumé")
            } else {
                String::from("Éteint")
            }
        };
        assert_eq!(french.format_state(&entity("on")), "Allumé");
    }
}
