// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Raw entity states as pushed by the state source.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::error::ParseError;

use super::EntityId;

/// State value of an entity that cannot be reached.
pub const STATE_UNAVAILABLE: &str = "unavailable";

/// State value of an entity whose state is not known.
pub const STATE_UNKNOWN: &str = "unknown";

/// State value of a switched-off entity.
pub const STATE_OFF: &str = "off";

/// One entity's state, exactly as the state source pushes it.
///
/// The card never mutates an `EntityState`; every push replaces it.
///
/// # Examples
///
/// ```
/// use damper_card::entity::EntityState;
///
/// let state: EntityState = serde_json::from_value(serde_json::json!({
///     "entity_id": "fan.damper",
///     "state": "on",
///     "attributes": { "percentage": 42.6 }
/// }))
/// .unwrap();
///
/// assert_eq!(state.state, "on");
/// assert_eq!(state.attribute("percentage").and_then(|v| v.as_f64()), Some(42.6));
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EntityState {
    /// The entity this state belongs to.
    pub entity_id: EntityId,
    /// Raw state string (`"on"`, `"off"`, `"unavailable"`, ...).
    pub state: String,
    /// Attribute bag.
    #[serde(default)]
    pub attributes: Map<String, Value>,
}

impl EntityState {
    /// Creates a state without attributes.
    #[must_use]
    pub fn new(entity_id: EntityId, state: impl Into<String>) -> Self {
        Self {
            entity_id,
            state: state.into(),
            attributes: Map::new(),
        }
    }

    /// Adds an attribute, replacing any previous value.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Returns an attribute, treating JSON `null` as absent.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key).filter(|value| !value.is_null())
    }
}

/// All entity states known to the card, keyed by entity id.
///
/// Mirrors the host's state map. A fresh store is pushed wholesale on every
/// update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StateStore {
    states: BTreeMap<EntityId, EntityState>,
}

impl StateStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON object mapping entity ids to state objects.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Json` on malformed input and
    /// `ParseError::MismatchedEntityId` when a state is stored under a key
    /// other than its own entity id.
    pub fn from_json(json: &str) -> Result<Self, ParseError> {
        let raw: BTreeMap<String, EntityState> = serde_json::from_str(json)?;
        let mut store = Self::new();
        for (key, state) in raw {
            if key != state.entity_id.as_str() {
                return Err(ParseError::MismatchedEntityId {
                    key,
                    entity_id: state.entity_id.to_string(),
                });
            }
            store.insert(state);
        }
        Ok(store)
    }

    /// Inserts or replaces a state.
    pub fn insert(&mut self, state: EntityState) {
        self.states.insert(state.entity_id.clone(), state);
    }

    /// Returns the state of an entity.
    #[must_use]
    pub fn get(&self, entity_id: &EntityId) -> Option<&EntityState> {
        self.states.get(entity_id)
    }

    /// Returns the ids of all entities in the given domain, in id order.
    pub fn entity_ids_in_domain<'a>(
        &'a self,
        domain: &'a str,
    ) -> impl Iterator<Item = &'a EntityId> + 'a {
        self.states.keys().filter(move |id| id.domain() == domain)
    }

    /// Returns the number of entities in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Returns `true` if the store holds no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl FromIterator<EntityState> for StateStore {
    fn from_iter<I: IntoIterator<Item = EntityState>>(iter: I) -> Self {
        let mut store = Self::new();
        for state in iter {
            store.insert(state);
        }
        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: &str) -> EntityId {
        EntityId::new(raw).unwrap()
    }

    #[test]
    fn null_attribute_is_absent() {
        let state = EntityState::new(id("fan.damper"), "on").with_attribute("percentage", Value::Null);
        assert!(state.attribute("percentage").is_none());
    }

    #[test]
    fn store_from_json() {
        let store = StateStore::from_json(
            r#"{
                "fan.damper": {"entity_id": "fan.damper", "state": "on", "attributes": {}},
                "climate.hall": {"entity_id": "climate.hall", "state": "heat"}
            }"#,
        )
        .unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.get(&id("climate.hall")).unwrap().state, "heat");
    }

    #[test]
    fn store_rejects_mismatched_key() {
        let err = StateStore::from_json(
            r#"{"fan.a": {"entity_id": "fan.b", "state": "on"}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ParseError::MismatchedEntityId { .. }));
    }

    #[test]
    fn store_rejects_invalid_entity_id() {
        let err = StateStore::from_json(r#"{"fan": {"entity_id": "fan", "state": "on"}}"#)
            .unwrap_err();
        assert!(matches!(err, ParseError::Json(_)));
    }

    #[test]
    fn domain_filter_is_ordered() {
        let store: StateStore = [
            EntityState::new(id("fan.b"), "on"),
            EntityState::new(id("climate.hall"), "off"),
            EntityState::new(id("fan.a"), "off"),
        ]
        .into_iter()
        .collect();

        let fans: Vec<_> = store.entity_ids_in_domain("fan").map(EntityId::as_str).collect();
        assert_eq!(fans, ["fan.a", "fan.b"]);
    }
}
