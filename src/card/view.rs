// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Render model of the whole card.

use crate::control::{ModeToggleView, PercentageControlView};
use crate::entity::EntityId;
use crate::projection::DisplayState;

/// Everything a host needs to draw the card.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct CardView {
    /// The damper entity.
    pub entity_id: EntityId,
    /// Header: icon, texts, unavailable badge.
    pub display: DisplayState,
    /// Controls row, `None` when hidden.
    pub controls: Option<ControlsView>,
    /// The header reacts to long presses.
    pub has_hold_action: bool,
    /// The header reacts to double taps.
    pub has_double_tap_action: bool,
}

/// The controls row.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct ControlsView {
    /// Percentage slider, if configured.
    pub percentage: Option<PercentageControlView>,
    /// ITC toggle, if configured.
    pub mode_toggle: Option<ModeToggleView>,
}

impl CardView {
    /// Returns `true` if every visible control is disabled.
    #[must_use]
    pub fn controls_disabled(&self) -> bool {
        self.controls.is_none_or(|controls| {
            controls.percentage.is_none_or(|p| p.disabled)
                && controls.mode_toggle.is_none_or(|t| t.disabled)
        })
    }
}
