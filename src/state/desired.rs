// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The session's desired output state.

use chrono::{FixedOffset, NaiveDate, Offset, Utc};

use super::SlotSet;
use crate::protocol::{MFD_LINES, MFD_LINE_SIZE};
use crate::types::{ClockFormat, DateFormat};

/// Everything the session wants the device to display.
///
/// Setters on [`Device`](crate::Device) mutate this struct and mark the
/// matching dirty bits; no I/O happens until `commit()`. `Default` is the
/// state a session returns to on `close()` or disconnect: all LEDs off,
/// empty lines, zero brightness, epoch date/time in UTC, default formats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DesiredState {
    /// LED state bitfield, shift and blink bits included.
    pub leds: SlotSet,
    /// MFD line buffers, at most [`MFD_LINE_SIZE`] bytes each.
    pub mfd_lines: [Vec<u8>; MFD_LINES],
    /// Raw MFD backlight level.
    pub mfd_brightness: u16,
    /// Raw LED backlight level.
    pub led_brightness: u16,
    /// Displayed date of the primary clock.
    pub date: NaiveDate,
    /// Displayed hour of the primary clock.
    pub hour: u32,
    /// Displayed minute of the primary clock.
    pub minute: u32,
    /// Ordering of the date fields.
    pub date_format: DateFormat,
    /// Per-clock 12/24 hr selector.
    pub clock_formats: [ClockFormat; 3],
    /// Timezone recorded by the last `set_time` call.
    pub primary_tz: FixedOffset,
    /// Assigned timezones of the secondary and tertiary clocks; `None`
    /// means co-located with the primary clock.
    pub derived_tz: [Option<FixedOffset>; 2],
}

impl Default for DesiredState {
    fn default() -> Self {
        Self {
            leds: SlotSet::new(),
            mfd_lines: [Vec::new(), Vec::new(), Vec::new()],
            mfd_brightness: 0,
            led_brightness: 0,
            date: NaiveDate::default(),
            hour: 0,
            minute: 0,
            date_format: DateFormat::default(),
            clock_formats: [ClockFormat::default(); 3],
            primary_tz: Utc.fix(),
            derived_tz: [None, None],
        }
    }
}

impl DesiredState {
    /// Stores a line buffer, truncating to the display width.
    pub fn store_line(&mut self, line: usize, data: &[u8]) {
        let take = data.len().min(MFD_LINE_SIZE);
        self.mfd_lines[line].clear();
        self.mfd_lines[line].extend_from_slice(&data[..take]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_reset_state() {
        let state = DesiredState::default();
        assert!(state.leds.is_empty());
        assert!(state.mfd_lines.iter().all(Vec::is_empty));
        assert_eq!(state.mfd_brightness, 0);
        assert_eq!(state.led_brightness, 0);
        assert_eq!(state.primary_tz.local_minus_utc(), 0);
        assert_eq!(state.derived_tz, [None, None]);
    }

    #[test]
    fn store_line_truncates() {
        let mut state = DesiredState::default();
        state.store_line(1, b"abcdefghijklmnopqrst");
        assert_eq!(state.mfd_lines[1], b"abcdefghijklmnop");

        state.store_line(1, b"short");
        assert_eq!(state.mfd_lines[1], b"short");
    }
}
