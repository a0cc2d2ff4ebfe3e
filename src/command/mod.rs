// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Commands and actions leaving the card.
//!
//! | Type | Purpose | Service |
//! |------|---------|---------|
//! | [`DeviceCommand::SetPercentage`] | Commit a slider value | `fan.set_percentage` |
//! | [`DeviceCommand::SetPresetMode`] | Flip percentage/ITC mode | `fan.set_preset_mode` |
//! | [`ActionRequest`] | Tap, hold, double-tap on the header | host-defined |
//!
//! # Examples
//!
//! ```
//! use damper_card::command::{Command, DeviceCommand};
//!
//! let cmd = DeviceCommand::set_preset_mode("fan.damper".parse().unwrap(), "ITC");
//! assert_eq!(
//!     cmd.to_service_call(),
//!     serde_json::json!({
//!         "domain": "fan",
//!         "service": "set_preset_mode",
//!         "service_data": { "entity_id": "fan.damper", "preset_mode": "ITC" }
//!     })
//! );
//! ```

mod action;
mod fan;
mod sink;

pub use action::{ActionConfig, ActionKind, ActionRequest};
pub use fan::{DeviceCommand, FAN_DOMAIN};
pub use sink::{ActionDispatcher, CommandSink};

use serde_json::{Value, json};

/// A service call understood by the host.
pub trait Command {
    /// Returns the service domain, e.g. `"fan"`.
    fn domain(&self) -> &'static str;

    /// Returns the service name, e.g. `"set_percentage"`.
    fn service(&self) -> &'static str;

    /// Returns the service data, including the target `entity_id`.
    fn service_data(&self) -> Value;

    /// Returns the full call as `{ domain, service, service_data }`.
    fn to_service_call(&self) -> Value {
        json!({
            "domain": self.domain(),
            "service": self.service(),
            "service_data": self.service_data(),
        })
    }
}
