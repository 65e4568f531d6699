// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device variant capabilities.
//!
//! The feature set is fixed by the product variant the session connected
//! to: the X52 Pro drives its LEDs individually, the non-pro X52 does not.

/// Capabilities of the connected device variant.
///
/// Set at connect time from the enumerated product id and reset when the
/// session disconnects.
///
/// # Examples
///
/// ```
/// use x52pro::Capabilities;
///
/// assert!(Capabilities::x52_pro().tri_state_leds);
/// assert!(!Capabilities::x52().tri_state_leds);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    /// Individual LED control, including the two-element tri-state LEDs.
    ///
    /// Without this, every `set_led` call is rejected.
    pub tri_state_leds: bool,
}

impl Capabilities {
    /// Capabilities of the non-pro X52.
    #[must_use]
    pub const fn x52() -> Self {
        Self {
            tri_state_leds: false,
        }
    }

    /// Capabilities of the X52 Pro.
    #[must_use]
    pub const fn x52_pro() -> Self {
        Self {
            tri_state_leds: true,
        }
    }
}
