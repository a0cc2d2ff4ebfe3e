// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Subscribable trait for observable cards.

use crate::card::CardView;
use crate::command::DeviceCommand;
use crate::subscription::SubscriptionId;

/// Trait for types whose renders and commands can be observed.
///
/// # Examples
///
/// ```
/// use damper_card::card::DamperCard;
/// use damper_card::config::CardConfig;
/// use damper_card::subscription::Subscribable;
/// use tokio::sync::mpsc;
///
/// let (commands, _command_rx) = mpsc::unbounded_channel();
/// let (actions, _action_rx) = mpsc::unbounded_channel();
/// let card = DamperCard::new(CardConfig::for_entity("fan.damper".parse().unwrap()), commands, actions);
///
/// let sub_id = card.on_rendered(|view| {
///     if let Some(view) = view {
///         println!("{:?}", view.display.secondary_text);
///     }
/// });
/// assert!(card.unsubscribe(sub_id));
/// ```
pub trait Subscribable {
    /// Subscribes to renders.
    ///
    /// The callback receives the rendered view, or `None` when the card
    /// renders nothing.
    fn on_rendered<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(Option<&CardView>) + Send + Sync + 'static;

    /// Subscribes to emitted commands.
    fn on_command<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&DeviceCommand) + Send + Sync + 'static;

    /// Unsubscribes a callback by its subscription ID.
    ///
    /// Returns `true` if the subscription was found and removed.
    fn unsubscribe(&self, id: SubscriptionId) -> bool;
}
