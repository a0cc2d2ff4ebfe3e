// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Callback management for card observers.
//!
//! - [`SubscriptionId`] - Unique identifier for unsubscribing
//! - [`CallbackRegistry`] - Registry storing and dispatching callbacks

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::card::CardView;
use crate::command::DeviceCommand;

/// Unique identifier for a subscription.
///
/// Returned when subscribing and used to unsubscribe later. IDs are unique
/// within a registry's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    /// Returns the raw ID value.
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sub({})", self.0)
    }
}

/// Type alias for render callbacks. `None` means the card rendered nothing.
type RenderedCallback = Arc<dyn Fn(Option<&CardView>) + Send + Sync>;

/// Type alias for command callbacks.
type CommandCallback = Arc<dyn Fn(&DeviceCommand) + Send + Sync>;

/// Registry of card observers.
///
/// Uses `parking_lot::RwLock` so a card can be shared behind an `Arc` and
/// observed from other tasks.
pub struct CallbackRegistry {
    /// Counter for generating unique subscription IDs.
    next_id: AtomicU64,
    /// Called after every render.
    rendered_callbacks: RwLock<HashMap<SubscriptionId, RenderedCallback>>,
    /// Called for every command the card emits.
    command_callbacks: RwLock<HashMap<SubscriptionId, CommandCallback>>,
}

impl CallbackRegistry {
    /// Creates a new empty callback registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            rendered_callbacks: RwLock::new(HashMap::new()),
            command_callbacks: RwLock::new(HashMap::new()),
        }
    }

    fn next_id(&self) -> SubscriptionId {
        SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed))
    }

    /// Registers a callback invoked after every render.
    pub fn on_rendered<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(Option<&CardView>) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.rendered_callbacks.write().insert(id, Arc::new(callback));
        id
    }

    /// Registers a callback invoked for every emitted command.
    pub fn on_command<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&DeviceCommand) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.command_callbacks.write().insert(id, Arc::new(callback));
        id
    }

    /// Unregisters a callback by its subscription ID.
    ///
    /// Returns `true` if a callback was found and removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        if self.rendered_callbacks.write().remove(&id).is_some() {
            return true;
        }
        self.command_callbacks.write().remove(&id).is_some()
    }

    /// Clears all callbacks.
    pub fn clear(&self) {
        self.rendered_callbacks.write().clear();
        self.command_callbacks.write().clear();
    }

    /// Calls every render callback.
    pub fn dispatch_rendered(&self, view: Option<&CardView>) {
        // Snapshot first so a callback may subscribe without deadlocking.
        let callbacks: Vec<_> = self.rendered_callbacks.read().values().cloned().collect();
        for callback in callbacks {
            callback(view);
        }
    }

    /// Calls every command callback.
    pub fn dispatch_command(&self, command: &DeviceCommand) {
        let callbacks: Vec<_> = self.command_callbacks.read().values().cloned().collect();
        for callback in callbacks {
            callback(command);
        }
    }

    /// Returns the number of registered callbacks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rendered_callbacks.read().len() + self.command_callbacks.read().len()
    }

    /// Returns `true` if no callbacks are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for CallbackRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CallbackRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackRegistry")
            .field("rendered_callbacks", &self.rendered_callbacks.read().len())
            .field("command_callbacks", &self.command_callbacks.read().len())
            .finish_non_exhaustive()
    }
}
