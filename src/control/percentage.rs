// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Percentage slider with optimistic local override.
//!
//! While the user drags, the control holds a local override that the
//! projection shows instead of the device percentage. Releasing the slider
//! commits the value as exactly one command; the override keeps showing it
//! until the next authoritative refresh arrives, whatever that refresh
//! says.
//!
//! ```text
//!            Move(v)               End(Some(v)) -> SetPercentage
//!   Idle ──────────────▶ Dragging ───────────────────▶ Committing
//!    ▲                      │                              │
//!    │   End(None)          │       refresh / reject       │
//!    └──────────────────────┴──────────────────────────────┘
//! ```
//!
//! A refresh that contradicts a just-committed value still wins: the
//! display may flash back to the stale device value for one refresh cycle
//! before the device catches up. That window is accepted.

use crate::command::DeviceCommand;
use crate::entity::DamperSnapshot;
use crate::entity::attributes::round_to_i32;

/// A gesture on the percentage slider.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "gesture", content = "value", rename_all = "snake_case")]
pub enum SliderGesture {
    /// Gesture started or moved, carrying the provisional value.
    Move(f64),
    /// Gesture ended: `Some` commits the value, `None` cancels.
    End(Option<f64>),
}

/// Where the control is in a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PercentagePhase {
    /// No override.
    #[default]
    Idle,
    /// A drag is in progress.
    Dragging {
        /// Provisional value on display.
        value: i32,
    },
    /// A value was committed and awaits the next refresh.
    Committing {
        /// Committed value on display.
        value: i32,
    },
}

/// Result of feeding a gesture to the control.
#[derive(Debug, Clone, PartialEq)]
pub enum GestureOutcome {
    /// The override changed; no command.
    Updated,
    /// The value was committed; the command must be sent.
    Committed(DeviceCommand),
    /// The gesture was cancelled; the override is gone, no command.
    Cancelled,
    /// The device is in ITC mode or unavailable; nothing happened.
    Rejected,
}

/// Render model of the slider.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct PercentageControlView {
    /// Authoritative percentage the slider rests on.
    pub value: Option<i32>,
    /// Slider is not interactive.
    pub disabled: bool,
    /// Slider is drawn in its inactive style.
    pub inactive: bool,
    /// Slider step.
    pub step: f64,
}

/// The percentage control. Sole owner of the local override.
#[derive(Debug, Clone, Default)]
pub struct PercentageControl {
    phase: PercentagePhase,
}

impl PercentageControl {
    /// Creates an idle control.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> PercentagePhase {
        self.phase
    }

    /// Returns the local override, if one is on display.
    #[must_use]
    pub fn local_override(&self) -> Option<i32> {
        match self.phase {
            PercentagePhase::Idle => None,
            PercentagePhase::Dragging { value } | PercentagePhase::Committing { value } => {
                Some(value)
            }
        }
    }

    /// Returns `true` if the control refuses interaction for this device.
    #[must_use]
    pub fn is_disabled(device: &DamperSnapshot) -> bool {
        device.is_exclusive_mode() || !device.is_available()
    }

    /// Applies a slider gesture.
    ///
    /// Only `End(Some(_))` yields a command, carrying the value exactly as
    /// the slider reported it. The override shows the value rounded.
    pub fn handle_gesture(
        &mut self,
        device: &DamperSnapshot,
        gesture: SliderGesture,
    ) -> GestureOutcome {
        if Self::is_disabled(device) {
            tracing::debug!(
                entity_id = %device.entity_id(),
                exclusive = device.is_exclusive_mode(),
                available = device.is_available(),
                "Rejecting slider gesture"
            );
            self.phase = PercentagePhase::Idle;
            return GestureOutcome::Rejected;
        }

        match gesture {
            SliderGesture::Move(value) => {
                self.phase = PercentagePhase::Dragging {
                    value: round_to_i32(value),
                };
                tracing::trace!(value, "Slider moved");
                GestureOutcome::Updated
            }
            SliderGesture::End(Some(value)) => {
                self.phase = PercentagePhase::Committing {
                    value: round_to_i32(value),
                };
                tracing::debug!(entity_id = %device.entity_id(), value, "Committing percentage");
                GestureOutcome::Committed(DeviceCommand::set_percentage(
                    device.entity_id().clone(),
                    value,
                ))
            }
            SliderGesture::End(None) => {
                self.phase = PercentagePhase::Idle;
                tracing::debug!(entity_id = %device.entity_id(), "Slider gesture cancelled");
                GestureOutcome::Cancelled
            }
        }
    }

    /// Records an authoritative refresh, dropping any override.
    ///
    /// Returns `true` if an override was dropped.
    pub fn observe_refresh(&mut self) -> bool {
        let dropped = self.local_override();
        self.phase = PercentagePhase::Idle;
        if let Some(value) = dropped {
            tracing::debug!(value, "Refresh replaced local override");
        }
        dropped.is_some()
    }

    /// Returns the render model for the device.
    #[must_use]
    pub fn view(&self, device: &DamperSnapshot) -> PercentageControlView {
        PercentageControlView {
            value: device.percentage(),
            disabled: Self::is_disabled(device),
            inactive: !device.is_active(),
            step: device.percentage_step(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{DefaultStateFormatter, EntityId, EntityState};

    fn damper(state: &str, preset: Option<&str>) -> DamperSnapshot {
        let mut raw = EntityState::new(EntityId::new("fan.damper").unwrap(), state)
            .with_attribute("percentage", 30);
        if let Some(preset) = preset {
            raw = raw.with_attribute("preset_mode", preset);
        }
        DamperSnapshot::from_entity(&raw, &DefaultStateFormatter)
    }

    #[test]
    fn move_sets_override_without_command() {
        let device = damper("on", Some("Damper"));
        let mut control = PercentageControl::new();

        assert_eq!(
            control.handle_gesture(&device, SliderGesture::Move(41.6)),
            GestureOutcome::Updated
        );
        assert_eq!(control.local_override(), Some(42));
        assert_eq!(control.phase(), PercentagePhase::Dragging { value: 42 });
    }

    #[test]
    fn commit_emits_literal_value_once() {
        let device = damper("on", None);
        let mut control = PercentageControl::new();
        control.handle_gesture(&device, SliderGesture::Move(36.0));

        let outcome = control.handle_gesture(&device, SliderGesture::End(Some(37.0)));
        assert_eq!(
            outcome,
            GestureOutcome::Committed(DeviceCommand::set_percentage(
                EntityId::new("fan.damper").unwrap(),
                37.0
            ))
        );
        assert_eq!(control.phase(), PercentagePhase::Committing { value: 37 });
        assert_eq!(control.local_override(), Some(37));
    }

    #[test]
    fn commit_does_not_snap_to_step() {
        let device = damper("on", None);
        let mut control = PercentageControl::new();
        let outcome = control.handle_gesture(&device, SliderGesture::End(Some(33.3)));
        let GestureOutcome::Committed(DeviceCommand::SetPercentage { percentage, .. }) = outcome
        else {
            panic!("expected a commit");
        };
        assert!((percentage - 33.3).abs() < f64::EPSILON);
    }

    #[test]
    fn each_commit_yields_one_command() {
        let device = damper("on", None);
        let mut control = PercentageControl::new();
        let commits = [10.0, 20.0, 20.0]
            .into_iter()
            .map(|v| control.handle_gesture(&device, SliderGesture::End(Some(v))))
            .filter(|outcome| matches!(outcome, GestureOutcome::Committed(_)))
            .count();
        assert_eq!(commits, 3);
    }

    #[test]
    fn cancel_clears_override_without_command() {
        let device = damper("on", None);
        let mut control = PercentageControl::new();
        control.handle_gesture(&device, SliderGesture::Move(80.0));

        assert_eq!(
            control.handle_gesture(&device, SliderGesture::End(None)),
            GestureOutcome::Cancelled
        );
        assert_eq!(control.local_override(), None);
        assert_eq!(control.phase(), PercentagePhase::Idle);
    }

    #[test]
    fn itc_mode_rejects_everything() {
        let device = damper("on", Some("ITC"));
        let mut control = PercentageControl::new();

        for gesture in [
            SliderGesture::Move(50.0),
            SliderGesture::End(Some(50.0)),
            SliderGesture::End(None),
        ] {
            assert_eq!(
                control.handle_gesture(&device, gesture),
                GestureOutcome::Rejected
            );
            assert_eq!(control.local_override(), None);
        }
        assert!(control.view(&device).disabled);
    }

    #[test]
    fn rejection_drops_existing_override() {
        let mut control = PercentageControl::new();
        control.handle_gesture(&damper("on", None), SliderGesture::Move(60.0));

        let itc = damper("on", Some("ITC"));
        assert_eq!(
            control.handle_gesture(&itc, SliderGesture::Move(65.0)),
            GestureOutcome::Rejected
        );
        assert_eq!(control.phase(), PercentagePhase::Idle);
    }

    #[test]
    fn unavailable_device_rejects() {
        let device = damper("unavailable", None);
        let mut control = PercentageControl::new();
        assert_eq!(
            control.handle_gesture(&device, SliderGesture::End(Some(10.0))),
            GestureOutcome::Rejected
        );
        assert!(control.view(&device).disabled);
    }

    #[test]
    fn refresh_clears_override() {
        let device = damper("on", None);
        let mut control = PercentageControl::new();
        assert!(!control.observe_refresh());

        control.handle_gesture(&device, SliderGesture::End(Some(37.0)));
        assert!(control.observe_refresh());
        assert_eq!(control.local_override(), None);
    }

    #[test]
    fn view_reflects_device() {
        let control = PercentageControl::new();
        let view = control.view(&damper("off", None));
        assert_eq!(view.value, Some(30));
        assert!(!view.disabled);
        assert!(view.inactive);
        assert!((view.step - 1.0).abs() < f64::EPSILON);
    }
}
