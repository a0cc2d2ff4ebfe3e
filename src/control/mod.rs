// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The card's controls row.
//!
//! - [`PercentageControl`] - slider with an optimistic local override
//! - [`ModeToggle`] - percentage/ITC mode switch
//!
//! Controls never send anything themselves. They return the
//! [`DeviceCommand`](crate::command::DeviceCommand) to send and leave
//! delivery to the card.

mod mode_toggle;
mod percentage;

pub use mode_toggle::{ModeToggle, ModeToggleView};
pub use percentage::{
    GestureOutcome, PercentageControl, PercentageControlView, PercentagePhase, SliderGesture,
};
