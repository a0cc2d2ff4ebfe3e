// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Tap, hold and double-tap actions.
//!
//! The card does not interpret these actions. It looks up what the user
//! configured for the gesture and hands it to the host's dispatcher.

use std::fmt;

use serde_json::{Map, Value};

use crate::entity::EntityId;

/// Gesture on the card header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    /// Single tap.
    Tap,
    /// Long press.
    Hold,
    /// Double tap.
    DoubleTap,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tap => f.write_str("tap"),
            Self::Hold => f.write_str("hold"),
            Self::DoubleTap => f.write_str("double_tap"),
        }
    }
}

/// A configured action, in the host's dashboard action format.
///
/// # Examples
///
/// ```
/// use damper_card::command::ActionConfig;
///
/// let action: ActionConfig =
///     serde_json::from_str(r#"{"action": "navigate", "navigation_path": "/climate"}"#).unwrap();
/// assert_eq!(
///     action,
///     ActionConfig::Navigate { navigation_path: "/climate".to_string() }
/// );
/// assert!(action.is_dispatchable());
/// assert!(!ActionConfig::None.is_dispatchable());
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum ActionConfig {
    /// Toggle the entity on or off.
    Toggle,
    /// Open the entity's more-info dialog.
    MoreInfo,
    /// Call an arbitrary service.
    CallService {
        /// `<domain>.<service>`.
        service: String,
        /// Extra service data.
        #[serde(default, alias = "data")]
        service_data: Map<String, Value>,
    },
    /// Navigate within the dashboard.
    Navigate {
        /// Dashboard path.
        navigation_path: String,
    },
    /// Open a URL.
    Url {
        /// Target URL.
        url_path: String,
    },
    /// Do nothing.
    None,
}

impl ActionConfig {
    /// Returns `false` for [`ActionConfig::None`], which is never dispatched.
    #[must_use]
    pub fn is_dispatchable(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// An action handed to the host's dispatcher.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionRequest {
    /// The card's primary entity.
    pub entity_id: EntityId,
    /// The gesture that triggered the action.
    pub kind: ActionKind,
    /// What to do.
    pub action: ActionConfig,
}
