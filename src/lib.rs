// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Damper Card - a dashboard card for A/C zone dampers.
//!
//! This library turns the pushed state of a damper (a `fan` entity) and an
//! optional companion climate entity into a render model, and turns user
//! gestures into fan service calls.
//!
//! # Supported Features
//!
//! - **State projection**: Header icon, colors and the secondary line
//!   (`On | 45%`, `22°C |-> 24°C`)
//! - **Percentage control**: Slider with an optimistic local override that
//!   the next push replaces
//! - **ITC toggle**: Switches the damper between percentage and ITC
//!   (climate-controlled) preset modes
//! - **Header actions**: Tap, hold and double tap routed to the host
//!
//! # Quick Start
//!
//! ```
//! use damper_card::card::DamperCard;
//! use damper_card::config::CardConfig;
//! use damper_card::entity::StateStore;
//! use tokio::sync::mpsc;
//!
//! # fn main() -> damper_card::Result<()> {
//! let config = CardConfig::from_json(
//!     r#"{"type": "custom:damper-card", "entity": "fan.bedroom_damper",
//!         "climate_entity": "climate.house", "show_percentage_control": true}"#,
//! )?;
//!
//! let (commands, _command_rx) = mpsc::unbounded_channel();
//! let (actions, _action_rx) = mpsc::unbounded_channel();
//! let mut card = DamperCard::new(config, commands, actions);
//!
//! let states = StateStore::from_json(
//!     r#"{
//!         "fan.bedroom_damper": {"entity_id": "fan.bedroom_damper", "state": "on",
//!                                "attributes": {"percentage": 45}},
//!         "climate.house": {"entity_id": "climate.house", "state": "cool",
//!                           "attributes": {"current_temperature": 22, "hvac_action": "cooling"}}
//!     }"#,
//! )?;
//!
//! let view = card.apply_states(states).expect("damper is in the push");
//! assert_eq!(view.display.secondary_text.as_deref(), Some("22°C | 45%"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Running the Card on a Task
//!
//! Pushes and gestures can be fed through one channel so they are applied
//! strictly in arrival order:
//!
//! ```
//! use damper_card::card::{CardInput, DamperCard};
//! use damper_card::config::CardConfig;
//! use damper_card::control::SliderGesture;
//! use tokio::sync::mpsc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let (commands, mut command_rx) = mpsc::unbounded_channel();
//!     let (actions, _action_rx) = mpsc::unbounded_channel();
//!     let card = DamperCard::new(
//!         CardConfig::for_entity("fan.damper".parse().unwrap()),
//!         commands,
//!         actions,
//!     );
//!
//!     let (inputs, input_rx) = mpsc::unbounded_channel();
//!     let task = tokio::spawn(card.run(input_rx));
//!
//!     inputs.send(CardInput::Gesture(SliderGesture::End(Some(50.0)))).unwrap();
//!     drop(inputs);
//!
//!     let card = task.await.unwrap();
//!     // No push yet, so there was nothing to commit against.
//!     assert!(command_rx.try_recv().is_err());
//!     assert!(card.render().is_none());
//! }
//! ```

pub mod card;
pub mod command;
pub mod config;
pub mod control;
pub mod entity;
pub mod error;
pub mod projection;
pub mod subscription;
pub mod types;

pub use card::{CardInput, CardView, DamperCard};
pub use command::{ActionConfig, ActionKind, Command, DeviceCommand};
pub use config::{CARD_INFO, CardConfig};
pub use entity::{EntityId, EntityState, StateStore};
pub use error::{ConfigError, Error, ParseError, Result, ValueError};
pub use projection::DisplayState;
pub use subscription::{CallbackRegistry, Subscribable, SubscriptionId};
pub use types::{DamperMode, Icon, OperatingState, RgbColor};
