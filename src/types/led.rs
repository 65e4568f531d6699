// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! LED identities and states.
//!
//! The X52 Pro exposes eleven controllable LEDs. Two of them (Fire and
//! Throttle) are plain on/off indicators. The remaining nine carry
//! independent red and green elements, yielding four states: off, red,
//! amber (both elements lit) and green.

use std::fmt;

/// A controllable LED on the X52 Pro.
///
/// The discriminant of each variant is the device's update-slot code for
/// that LED: on/off LEDs occupy a single slot, tri-state LEDs occupy the
/// slot at the code (red element) and the one after it (green element).
///
/// # Examples
///
/// ```
/// use x52pro::types::{Led, LedKind};
///
/// assert_eq!(Led::Fire.kind(), LedKind::OnOff);
/// assert_eq!(Led::A.kind(), LedKind::TriState);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Led {
    /// The fire button ring (on/off).
    Fire = 0x01,
    /// Button A (tri-state).
    A = 0x02,
    /// Button B (tri-state).
    B = 0x04,
    /// Button D (tri-state).
    D = 0x06,
    /// Button E (tri-state).
    E = 0x08,
    /// Toggle 1/2 (tri-state).
    T1 = 0x0a,
    /// Toggle 3/4 (tri-state).
    T2 = 0x0c,
    /// Toggle 5/6 (tri-state).
    T3 = 0x0e,
    /// The POV hat (tri-state).
    Pov = 0x10,
    /// The clutch button (tri-state).
    Clutch = 0x12,
    /// The throttle axis (on/off).
    Throttle = 0x14,
}

/// The two LED classes, which determine the set of legal states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedKind {
    /// Supports only [`LedState::Off`] and [`LedState::On`].
    OnOff,
    /// Supports [`LedState::Off`], [`LedState::Red`], [`LedState::Amber`]
    /// and [`LedState::Green`].
    TriState,
}

impl Led {
    /// All LEDs, in update-slot order.
    pub const ALL: [Led; 11] = [
        Led::Fire,
        Led::A,
        Led::B,
        Led::D,
        Led::E,
        Led::T1,
        Led::T2,
        Led::T3,
        Led::Pov,
        Led::Clutch,
        Led::Throttle,
    ];

    /// Returns the class of this LED.
    #[must_use]
    pub const fn kind(self) -> LedKind {
        match self {
            Led::Fire | Led::Throttle => LedKind::OnOff,
            _ => LedKind::TriState,
        }
    }

    /// Returns the device's update-slot code for this LED.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Led {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Led::Fire => "Fire",
            Led::A => "A",
            Led::B => "B",
            Led::D => "D",
            Led::E => "E",
            Led::T1 => "T1",
            Led::T2 => "T2",
            Led::T3 => "T3",
            Led::Pov => "POV",
            Led::Clutch => "Clutch",
            Led::Throttle => "Throttle",
        };
        write!(f, "{name}")
    }
}

/// A desired LED state.
///
/// Each LED only supports the subset of states matching its
/// [`kind()`](Led::kind); submitting a state outside the LED's class is
/// rejected by [`Device::set_led`](crate::Device::set_led).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LedState {
    /// LED fully off.
    Off,
    /// On/off LED lit.
    On,
    /// Red element lit.
    Red,
    /// Red and green elements lit.
    Amber,
    /// Green element lit.
    Green,
}

impl LedState {
    /// Returns whether the red element is lit in this state.
    #[must_use]
    pub const fn red_lit(self) -> bool {
        matches!(self, LedState::Red | LedState::Amber)
    }

    /// Returns whether the green element is lit in this state.
    #[must_use]
    pub const fn green_lit(self) -> bool {
        matches!(self, LedState::Amber | LedState::Green)
    }
}
