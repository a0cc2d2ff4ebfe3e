// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Projection of device state into what the card header shows.
//!
//! [`project`] combines the damper snapshot, the optional paired climate
//! snapshot and the percentage control's local override into a
//! [`DisplayState`]:
//!
//! | Field | Source |
//! |-------|--------|
//! | icon, color | climate operating state, or the device activity without a climate |
//! | secondary text | device label, replaced by climate temperatures, plus the percentage |
//! | percentage | local override, else the authoritative value |

mod display_state;
mod projector;

pub use display_state::{DisplayState, SHAPE_ALPHA};
pub use projector::{ProjectionOptions, project};
