// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for the damper card.
//!
//! # Types
//!
//! - [`RgbColor`] - Icon tint, with the card's fixed palette
//! - [`Icon`] - Material Design icon identifiers
//! - [`OperatingState`] - What the paired thermostat is doing
//! - [`DamperMode`] - Percentage mode vs. Integrated Temperature Control

mod icon;
mod mode;
mod operating_state;
mod rgb_color;

pub use icon::Icon;
pub use mode::{DEFAULT_PERCENTAGE_PRESET, DamperMode, ITC_PRESET};
pub use operating_state::OperatingState;
pub use rgb_color::RgbColor;
