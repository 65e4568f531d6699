// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! LED, shift and blink setters.

use super::Device;
use crate::error::{Error, Result};
use crate::state::Slot;
use crate::transport::Transport;
use crate::types::{Led, LedKind, LedState};

impl<T: Transport> Device<T> {
    /// Sets the desired state of one LED.
    ///
    /// On/off LEDs accept only [`LedState::Off`] and [`LedState::On`];
    /// tri-state LEDs accept everything except [`LedState::On`]. The change
    /// is local until [`commit()`](Device::commit).
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotSupported`] if the connected variant has no
    /// individual LED control, or if the state is outside the LED's class.
    pub fn set_led(&mut self, led: Led, state: LedState) -> Result<()> {
        if !self.capabilities.tri_state_leds {
            return Err(Error::NotSupported("setting LED state"));
        }

        let slot = Slot::for_led(led);
        match led.kind() {
            LedKind::OnOff => {
                if !matches!(state, LedState::Off | LedState::On) {
                    return Err(Error::NotSupported("invalid state for on/off LED"));
                }
                self.state.leds.assign(slot, state == LedState::On);
                self.mark(slot);
            }
            LedKind::TriState => {
                if state == LedState::On {
                    return Err(Error::NotSupported("invalid state for color LED"));
                }
                let green = Slot::from_index(slot.index() + 1)
                    .ok_or(Error::StructCorrupted("LED green element out of range"))?;
                self.state.leds.assign(slot, state.red_lit());
                self.state.leds.assign(green, state.green_lit());
                self.mark(slot);
                self.mark(green);
            }
        }
        Ok(())
    }

    /// Sets the POV blink indicator.
    pub fn set_blink(&mut self, enabled: bool) {
        self.state.leds.assign(Slot::PovBlink, enabled);
        self.mark(Slot::PovBlink);
    }

    /// Sets the shift indicator on the MFD.
    ///
    /// # Errors
    ///
    /// Infallible today; returns [`Result`] for uniformity with the other
    /// setters.
    pub fn set_shift(&mut self, enabled: bool) -> Result<()> {
        self.state.leds.assign(Slot::Shift, enabled);
        self.mark(Slot::Shift);
        Ok(())
    }
}
