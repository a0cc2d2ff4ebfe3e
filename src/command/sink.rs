// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Outbound seams of the card.
//!
//! The card hands device commands to a [`CommandSink`] and header actions
//! to an [`ActionDispatcher`]. Both are fire-and-forget. Both traits are
//! implemented for tokio unbounded senders, so a host can drain them from
//! its own task.

use tokio::sync::mpsc;

use super::{ActionRequest, DeviceCommand};

/// Receives device commands.
pub trait CommandSink: Send + Sync {
    /// Delivers a command. Must not block.
    fn send_command(&self, command: DeviceCommand);
}

/// Receives header actions.
pub trait ActionDispatcher: Send + Sync {
    /// Delivers an action. Must not block.
    fn dispatch_action(&self, request: ActionRequest);
}

impl CommandSink for mpsc::UnboundedSender<DeviceCommand> {
    fn send_command(&self, command: DeviceCommand) {
        if let Err(err) = self.send(command) {
            tracing::warn!(command = ?err.0, "Command channel closed, dropping command");
        }
    }
}

impl ActionDispatcher for mpsc::UnboundedSender<ActionRequest> {
    fn dispatch_action(&self, request: ActionRequest) {
        if let Err(err) = self.send(request) {
            tracing::warn!(request = ?err.0, "Action channel closed, dropping action");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{ActionConfig, ActionKind};
    use crate::entity::EntityId;

    fn damper() -> EntityId {
        EntityId::new("fan.damper").unwrap()
    }

    #[test]
    fn channel_sink_delivers() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        tx.send_command(DeviceCommand::set_percentage(damper(), 20.0));
        assert_eq!(
            rx.try_recv().unwrap(),
            DeviceCommand::set_percentage(damper(), 20.0)
        );
    }

    #[test]
    fn closed_channel_drops_silently() {
        let (tx, rx) = mpsc::unbounded_channel::<DeviceCommand>();
        drop(rx);
        tx.send_command(DeviceCommand::set_preset_mode(damper(), "ITC"));
    }

    #[test]
    fn channel_dispatcher_delivers() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        tx.dispatch_action(ActionRequest {
            entity_id: damper(),
            kind: ActionKind::Hold,
            action: ActionConfig::MoreInfo,
        });
        let request = rx.try_recv().unwrap();
        assert_eq!(request.kind, ActionKind::Hold);
        assert_eq!(request.action, ActionConfig::MoreInfo);
    }
}
