// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Inputs a running card consumes.

use crate::command::ActionKind;
use crate::config::CardConfig;
use crate::control::SliderGesture;
use crate::entity::StateStore;

/// One event for [`DamperCard::run`](super::DamperCard::run).
#[derive(Debug, Clone)]
pub enum CardInput {
    /// An authoritative state push.
    States(StateStore),
    /// A slider gesture.
    Gesture(SliderGesture),
    /// The ITC toggle was activated.
    ToggleMode,
    /// The header received a tap, hold or double tap.
    Action(ActionKind),
    /// A new configuration.
    Config(CardConfig),
}

impl From<StateStore> for CardInput {
    fn from(states: StateStore) -> Self {
        Self::States(states)
    }
}

impl From<SliderGesture> for CardInput {
    fn from(gesture: SliderGesture) -> Self {
        Self::Gesture(gesture)
    }
}

impl From<ActionKind> for CardInput {
    fn from(kind: ActionKind) -> Self {
        Self::Action(kind)
    }
}

impl From<CardConfig> for CardInput {
    fn from(config: CardConfig) -> Self {
        Self::Config(config)
    }
}
