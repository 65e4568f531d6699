// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Desired-state model and dirty tracking.
//!
//! The session never talks to the device from its setters; it records the
//! desired output state here and marks the affected [`Slot`]s dirty. A
//! subsequent [`commit()`](crate::Device::commit) walks the dirty set in
//! slot order and flushes each pending field.

mod desired;
mod slot;

pub use slot::{Slot, SlotSet};

pub(crate) use desired::DesiredState;
