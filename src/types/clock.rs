// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Clock and date display selectors for the MFD.

use std::fmt;

/// One of the three clocks shown on the multifunction display.
///
/// The primary clock displays the time passed to
/// [`Device::set_time`](crate::Device::set_time); the secondary and tertiary
/// clocks are derived from it by a programmable timezone offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClockId {
    /// The primary clock. Its timezone follows the last `set_time` call.
    Primary,
    /// The secondary clock.
    Secondary,
    /// The tertiary clock.
    Tertiary,
}

impl ClockId {
    /// Returns the zero-based index of this clock (0-2).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            ClockId::Primary => 0,
            ClockId::Secondary => 1,
            ClockId::Tertiary => 2,
        }
    }
}

impl fmt::Display for ClockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "clock {}", self.index() + 1)
    }
}

/// Time format of an MFD clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ClockFormat {
    /// 12-hour display.
    #[default]
    TwelveHour,
    /// 24-hour display.
    TwentyFourHour,
}

impl ClockFormat {
    /// Returns the format selector bit in the wire encoding.
    #[must_use]
    pub(crate) const fn wire_bit(self) -> u16 {
        match self {
            ClockFormat::TwelveHour => 0,
            ClockFormat::TwentyFourHour => 1,
        }
    }
}

/// Ordering of the date fields on the MFD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DateFormat {
    /// Day, month, year.
    #[default]
    DdMmYy,
    /// Month, day, year.
    MmDdYy,
    /// Year, month, day.
    YyMmDd,
}
