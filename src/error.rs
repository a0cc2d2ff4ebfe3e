// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the damper card.
//!
//! Errors only surface at parse boundaries: entity identifiers, card
//! configuration and pushed state payloads. Projection and control never
//! fail; absence is modeled with `Option` instead.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// The card configuration is invalid.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// A pushed state payload could not be parsed.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Errors related to value validation and constraints.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// An entity identifier is not of the form `<domain>.<object_id>`.
    #[error("invalid entity id: {0:?}")]
    InvalidEntityId(String),
}

/// Errors related to the card configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration document is not valid JSON or has the wrong shape.
    #[error("invalid configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// An entity reference points outside the domain the card expects.
    #[error("entity {entity} is not in the {expected} domain")]
    WrongDomain {
        /// The offending entity identifier.
        entity: String,
        /// The domain the field requires.
        expected: &'static str,
    },
}

/// Errors related to parsing pushed state payloads.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A state object is keyed under a different entity id than it carries.
    #[error("state keyed as {key} carries entity id {entity_id}")]
    MismatchedEntityId {
        /// The map key the state was stored under.
        key: String,
        /// The entity id inside the state object.
        entity_id: String,
    },
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
