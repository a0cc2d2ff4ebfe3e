// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Entity identifier type.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// Identifier of a Home Assistant entity, `<domain>.<object_id>`.
///
/// Both halves must be non-empty and consist of lowercase ASCII letters,
/// digits and underscores.
///
/// # Examples
///
/// ```
/// use damper_card::entity::EntityId;
///
/// let id: EntityId = "fan.living_room_damper".parse().unwrap();
/// assert_eq!(id.domain(), "fan");
/// assert_eq!(id.object_id(), "living_room_damper");
///
/// assert!("living_room_damper".parse::<EntityId>().is_err());
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EntityId(String);

impl EntityId {
    /// Parses and validates an entity identifier.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidEntityId` if the identifier is malformed.
    pub fn new(id: impl Into<String>) -> Result<Self, ValueError> {
        let id = id.into();
        let valid = match id.split_once('.') {
            Some((domain, object_id)) => is_slug(domain) && is_slug(object_id),
            None => false,
        };
        if valid {
            Ok(Self(id))
        } else {
            Err(ValueError::InvalidEntityId(id))
        }
    }

    /// Returns the domain, e.g. `"fan"` or `"climate"`.
    #[must_use]
    pub fn domain(&self) -> &str {
        self.0.split_once('.').map_or("", |(domain, _)| domain)
    }

    /// Returns the part after the domain.
    #[must_use]
    pub fn object_id(&self) -> &str {
        self.0.split_once('.').map_or("", |(_, object_id)| object_id)
    }

    /// Returns the full identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_slug(part: &str) -> bool {
    !part.is_empty()
        && part
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_')
}

impl fmt::Debug for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntityId({})", self.0)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for EntityId {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for EntityId {
    type Error = ValueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EntityId> for String {
    fn from(id: EntityId) -> Self {
        id.0
    }
}
