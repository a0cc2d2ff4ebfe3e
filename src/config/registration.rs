// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Card registration descriptor.

/// What a host needs to list the card in its card picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct CardInfo {
    /// Element type, without the `custom:` prefix.
    #[serde(rename = "type")]
    pub card_type: &'static str,
    /// Human-readable name.
    pub name: &'static str,
    /// One-line description.
    pub description: &'static str,
}

impl CardInfo {
    /// Returns the type as written in a dashboard configuration.
    #[must_use]
    pub fn custom_type(&self) -> String {
        format!("custom:{}", self.card_type)
    }
}

/// Registration descriptor of the damper card.
pub const CARD_INFO: CardInfo = CardInfo {
    card_type: "damper-card",
    name: "Damper A/C Card",
    description: "Card for A/C damper entity",
};

/// Registry of cards announced to the host at startup.
#[derive(Debug, Clone, Default)]
pub struct CardRegistry {
    cards: Vec<CardInfo>,
}

impl CardRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a card. Registering the same type twice keeps the first.
    ///
    /// Returns `true` if the card was added.
    pub fn register(&mut self, info: CardInfo) -> bool {
        if self.find(info.card_type).is_some() {
            tracing::warn!(card_type = info.card_type, "Card type already registered");
            return false;
        }
        tracing::debug!(card_type = info.card_type, "Registered card");
        self.cards.push(info);
        true
    }

    /// Looks a card up by type, with or without the `custom:` prefix.
    #[must_use]
    pub fn find(&self, card_type: &str) -> Option<&CardInfo> {
        let card_type = card_type.strip_prefix("custom:").unwrap_or(card_type);
        self.cards.iter().find(|info| info.card_type == card_type)
    }

    /// Returns all registered cards in registration order.
    #[must_use]
    pub fn cards(&self) -> &[CardInfo] {
        &self.cards
    }
}
