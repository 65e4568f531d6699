// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for X52/X52 Pro device control.
//!
//! # Types
//!
//! - [`Led`] / [`LedState`] - the panel LEDs and their legal states
//! - [`ClockId`] / [`ClockFormat`] - the three MFD clocks and 12/24 hr display
//! - [`DateFormat`] - ordering of the MFD date fields
//! - [`BrightnessTarget`] - which backlight a brightness level applies to

mod brightness;
mod clock;
mod led;

pub use brightness::BrightnessTarget;
pub use clock::{ClockFormat, ClockId, DateFormat};
pub use led::{Led, LedKind, LedState};
