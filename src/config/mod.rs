// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Card configuration and registration.
//!
//! The host loads the dashboard configuration and hands the card's JSON to
//! [`CardConfig::from_json`]. [`CARD_INFO`] is what the host lists in its
//! card picker.

mod card_config;
mod registration;

pub use card_config::{CLIMATE_DOMAIN, CardConfig, DAMPER_ENTITY_DOMAINS};
pub use registration::{CARD_INFO, CardInfo, CardRegistry};
