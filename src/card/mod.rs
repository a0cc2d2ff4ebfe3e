// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The card controller.
//!
//! [`DamperCard`] ties the configuration, the pushed states and the two
//! controls together and renders a [`CardView`]. It can be driven by direct
//! calls or by feeding [`CardInput`]s to [`DamperCard::run`].

mod damper_card;
mod input;
mod view;

pub use damper_card::{CARD_SIZE, DamperCard};
pub use input::CardInput;
pub use view::{CardView, ControlsView};
