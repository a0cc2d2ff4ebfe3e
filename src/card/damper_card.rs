// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The damper card controller.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::command::{ActionDispatcher, ActionKind, ActionRequest, CommandSink, DeviceCommand};
use crate::config::CardConfig;
use crate::control::{
    GestureOutcome, ModeToggle, PercentageControl, PercentagePhase, SliderGesture,
};
use crate::entity::{
    ClimateSnapshot, DamperSnapshot, DefaultStateFormatter, StateFormatter, StateStore,
};
use crate::error::ConfigError;
use crate::projection::{ProjectionOptions, project};
use crate::subscription::{CallbackRegistry, Subscribable, SubscriptionId};

use super::{CardInput, CardView, ControlsView};

/// Grid rows the card occupies.
pub const CARD_SIZE: u32 = 1;

/// A damper card.
///
/// Owns the percentage control (and with it the local override), the last
/// pushed states and the snapshots resolved from them. Every operation that
/// changes what the card shows renders exactly once and notifies
/// [`on_rendered`](Subscribable::on_rendered) subscribers.
///
/// # Examples
///
/// ```
/// use damper_card::card::DamperCard;
/// use damper_card::command::DeviceCommand;
/// use damper_card::config::CardConfig;
/// use damper_card::control::SliderGesture;
/// use damper_card::entity::{EntityState, StateStore};
/// use tokio::sync::mpsc;
///
/// let (commands, mut command_rx) = mpsc::unbounded_channel();
/// let (actions, _action_rx) = mpsc::unbounded_channel();
/// let config = CardConfig::for_entity("fan.damper".parse().unwrap()).with_percentage_control(true);
/// let mut card = DamperCard::new(config, commands, actions);
///
/// let store: StateStore = [EntityState::new("fan.damper".parse().unwrap(), "on")
///     .with_attribute("percentage", 30)]
/// .into_iter()
/// .collect();
/// card.apply_states(store);
///
/// let view = card.handle_gesture(SliderGesture::End(Some(37.0))).unwrap();
/// assert_eq!(view.display.secondary_text.as_deref(), Some("On | 37%"));
/// assert_eq!(
///     command_rx.try_recv().unwrap(),
///     DeviceCommand::set_percentage("fan.damper".parse().unwrap(), 37.0)
/// );
/// ```
pub struct DamperCard {
    config: CardConfig,
    formatter: Arc<dyn StateFormatter>,
    states: StateStore,
    device: Option<DamperSnapshot>,
    climate: Option<ClimateSnapshot>,
    percentage: PercentageControl,
    mode_toggle: ModeToggle,
    commands: Box<dyn CommandSink>,
    actions: Box<dyn ActionDispatcher>,
    callbacks: CallbackRegistry,
}

impl DamperCard {
    /// Creates a card with the default English state labels.
    #[must_use]
    pub fn new(
        config: CardConfig,
        commands: impl CommandSink + 'static,
        actions: impl ActionDispatcher + 'static,
    ) -> Self {
        let mode_toggle = ModeToggle::new(config.percentage_mode.clone());
        Self {
            config,
            formatter: Arc::new(DefaultStateFormatter),
            states: StateStore::new(),
            device: None,
            climate: None,
            percentage: PercentageControl::new(),
            mode_toggle,
            commands: Box::new(commands),
            actions: Box::new(actions),
            callbacks: CallbackRegistry::new(),
        }
    }

    /// Replaces the state formatter, e.g. with a localized one.
    #[must_use]
    pub fn with_formatter(mut self, formatter: impl StateFormatter + 'static) -> Self {
        self.formatter = Arc::new(formatter);
        self.resolve_snapshots();
        self
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &CardConfig {
        &self.config
    }

    /// Returns the current damper snapshot.
    #[must_use]
    pub fn device(&self) -> Option<&DamperSnapshot> {
        self.device.as_ref()
    }

    /// Returns the current climate snapshot.
    #[must_use]
    pub fn climate(&self) -> Option<&ClimateSnapshot> {
        self.climate.as_ref()
    }

    /// Returns the percentage control's local override.
    #[must_use]
    pub fn local_override(&self) -> Option<i32> {
        self.percentage.local_override()
    }

    /// Returns the percentage control's phase.
    #[must_use]
    pub fn percentage_phase(&self) -> PercentagePhase {
        self.percentage.phase()
    }

    /// Returns the number of grid rows the card occupies.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn card_size(&self) -> u32 {
        CARD_SIZE
    }

    /// Replaces the configuration and renders.
    ///
    /// A new configuration drops any local override.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::WrongDomain` if an entity is outside its
    /// domain; the previous configuration stays in place.
    pub fn set_config(&mut self, config: CardConfig) -> Result<Option<CardView>, ConfigError> {
        if let Err(err) = config.validate() {
            tracing::warn!(error = %err, "Rejecting card configuration");
            return Err(err);
        }
        self.mode_toggle = ModeToggle::new(config.percentage_mode.clone());
        self.config = config;
        self.resolve_snapshots();
        self.percentage.observe_refresh();
        Ok(self.render_and_notify())
    }

    /// Applies an authoritative push and renders once.
    ///
    /// Any local override is dropped, even one holding a value that was
    /// just committed and that this push does not reflect yet.
    pub fn apply_states(&mut self, states: StateStore) -> Option<CardView> {
        tracing::trace!(entities = states.len(), "Applying state push");
        self.states = states;
        self.resolve_snapshots();
        self.percentage.observe_refresh();
        self.render_and_notify()
    }

    /// Routes a slider gesture to the percentage control and renders once.
    ///
    /// Sends the set-percentage command on commit. Does nothing and returns
    /// `None` when the damper snapshot is missing or the slider is not on
    /// screen.
    pub fn handle_gesture(&mut self, gesture: SliderGesture) -> Option<CardView> {
        let device = self.device.as_ref()?;
        if !(self.config.show_percentage_control && self.controls_shown(device)) {
            tracing::trace!(?gesture, "Slider hidden, ignoring gesture");
            return None;
        }
        let outcome = self.percentage.handle_gesture(device, gesture);
        if let GestureOutcome::Committed(command) = outcome {
            self.emit(command);
        }
        self.render_and_notify()
    }

    /// Activates the mode toggle.
    ///
    /// Returns `true` if a command was sent. Nothing is rendered: the toggle
    /// only changes once a push confirms the new mode. A toggle that is not
    /// on screen sends nothing.
    pub fn toggle_mode(&mut self) -> bool {
        let Some(device) = self.device.as_ref() else {
            return false;
        };
        if !(self.config.show_itc_control && self.controls_shown(device)) {
            tracing::trace!("Mode toggle hidden, ignoring activation");
            return false;
        }
        match self.mode_toggle.activate(device, self.climate.as_ref()) {
            Some(command) => {
                self.emit(command);
                true
            }
            None => false,
        }
    }

    /// Hands the action configured for a header gesture to the dispatcher.
    ///
    /// Returns `true` if an action was dispatched. `none` actions and cards
    /// without an entity dispatch nothing.
    pub fn handle_action(&self, kind: ActionKind) -> bool {
        let Some(entity_id) = self.config.entity.clone() else {
            return false;
        };
        let action = self.config.action_for(kind);
        if !action.is_dispatchable() {
            tracing::trace!(%kind, "No action configured");
            return false;
        }
        tracing::debug!(%entity_id, %kind, ?action, "Dispatching action");
        self.actions.dispatch_action(ActionRequest {
            entity_id,
            kind,
            action: action.clone(),
        });
        true
    }

    /// Applies one input.
    pub fn handle(&mut self, input: CardInput) {
        match input {
            CardInput::States(states) => {
                self.apply_states(states);
            }
            CardInput::Gesture(gesture) => {
                self.handle_gesture(gesture);
            }
            CardInput::ToggleMode => {
                self.toggle_mode();
            }
            CardInput::Action(kind) => {
                self.handle_action(kind);
            }
            CardInput::Config(config) => {
                // Already logged; the card keeps its previous configuration.
                let _ = self.set_config(config);
            }
        }
    }

    /// Applies inputs in arrival order until every sender is dropped, then
    /// returns the card.
    ///
    /// Pushes and gestures share this one stream, so each is applied and
    /// rendered before the next one is looked at.
    pub async fn run(mut self, mut inputs: mpsc::UnboundedReceiver<CardInput>) -> Self {
        while let Some(input) = inputs.recv().await {
            self.handle(input);
        }
        tracing::debug!("Card input stream closed");
        self
    }

    /// Computes the current view without notifying subscribers.
    ///
    /// Returns `None` when no entity is configured or its state is missing.
    #[must_use]
    pub fn render(&self) -> Option<CardView> {
        let entity_id = self.config.entity.as_ref()?;
        let device = self.device.as_ref()?;
        let climate = self.climate.as_ref();

        let options = ProjectionOptions {
            name: self.config.name.as_deref(),
            hide_state: self.config.hide_state,
        };
        let display = project(device, climate, self.percentage.local_override(), &options);

        let controls = self.controls_shown(device).then(|| ControlsView {
            percentage: self
                .config
                .show_percentage_control
                .then(|| self.percentage.view(device)),
            mode_toggle: self
                .config
                .show_itc_control
                .then(|| ModeToggle::view(device, climate)),
        });

        Some(CardView {
            entity_id: entity_id.clone(),
            display,
            controls,
            has_hold_action: self.config.hold_action.is_dispatchable(),
            has_double_tap_action: self.config.double_tap_action.is_dispatchable(),
        })
    }

    // The controls row collapses away while the damper is inactive.
    fn controls_shown(&self, device: &DamperSnapshot) -> bool {
        self.config.has_controls() && (!self.config.collapsible_controls || device.is_active())
    }

    fn render_and_notify(&self) -> Option<CardView> {
        let view = self.render();
        match &view {
            Some(view) => tracing::debug!(
                entity_id = %view.entity_id,
                secondary = ?view.display.secondary_text,
                "Rendered card"
            ),
            None => tracing::debug!("Rendered nothing"),
        }
        self.callbacks.dispatch_rendered(view.as_ref());
        view
    }

    fn resolve_snapshots(&mut self) {
        let device = self
            .config
            .entity
            .as_ref()
            .and_then(|id| self.states.get(id))
            .map(|entity| DamperSnapshot::from_entity(entity, self.formatter.as_ref()));
        let climate = self
            .config
            .climate_entity
            .as_ref()
            .and_then(|id| self.states.get(id))
            .map(ClimateSnapshot::from_entity);

        if device.is_none() && self.config.entity.is_some() {
            tracing::trace!("Damper state missing from push");
        }
        self.device = device;
        self.climate = climate;
    }

    fn emit(&self, command: DeviceCommand) {
        tracing::debug!(?command, "Sending command");
        self.callbacks.dispatch_command(&command);
        self.commands.send_command(command);
    }
}

impl Subscribable for DamperCard {
    fn on_rendered<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(Option<&CardView>) + Send + Sync + 'static,
    {
        self.callbacks.on_rendered(callback)
    }

    fn on_command<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&DeviceCommand) + Send + Sync + 'static,
    {
        self.callbacks.on_command(callback)
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.callbacks.unsubscribe(id)
    }
}

impl std::fmt::Debug for DamperCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DamperCard")
            .field("config", &self.config)
            .field("device", &self.device)
            .field("climate", &self.climate)
            .field("percentage", &self.percentage)
            .field("callbacks", &self.callbacks)
            .finish_non_exhaustive()
    }
}
