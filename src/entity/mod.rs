// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Entity model: raw pushed states and their normalized snapshots.
//!
//! The state source pushes [`EntityState`]s, collected in a
//! [`StateStore`]. The card reads them through the pure accessors in
//! [`attributes`] into a [`DamperSnapshot`] and an optional
//! [`ClimateSnapshot`], which is all the projection and the controls see.
//!
//! # Examples
//!
//! ```
//! use damper_card::entity::{ClimateSnapshot, EntityState};
//! use damper_card::types::OperatingState;
//!
//! let raw = EntityState::new("climate.hall".parse().unwrap(), "heat")
//!     .with_attribute("hvac_action", "heating")
//!     .with_attribute("current_temperature", 20.7);
//!
//! let climate = ClimateSnapshot::from_entity(&raw);
//! assert_eq!(climate.operating_state(), OperatingState::Heating);
//! assert_eq!(climate.current_temperature(), Some(21));
//! ```

pub mod attributes;
mod format;
mod id;
mod snapshot;
mod state;

pub use format::{DefaultStateFormatter, StateFormatter};
pub use id::EntityId;
pub use snapshot::{ClimateSnapshot, DamperSnapshot};
pub use state::{EntityState, STATE_OFF, STATE_UNAVAILABLE, STATE_UNKNOWN, StateStore};
