// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Clock, date and timezone setters.

use chrono::{DateTime, FixedOffset, Timelike};

use super::Device;
use crate::error::{Error, Result};
use crate::state::Slot;
use crate::transport::Transport;
use crate::types::{ClockFormat, ClockId, DateFormat};

impl<T: Transport> Device<T> {
    /// Sets the primary clock from a timestamped value.
    ///
    /// The display resolves minutes only, so seconds are discarded: calling
    /// this every second marks nothing until the minute rolls over. A
    /// timezone change invalidates every derived display field, so it marks
    /// the date, the time and both derived clock offsets at once.
    ///
    /// # Errors
    ///
    /// Infallible today; returns [`Result`] for uniformity with the other
    /// setters.
    pub fn set_time(&mut self, time: DateTime<FixedOffset>) -> Result<()> {
        let tz = *time.offset();
        let date = time.date_naive();
        let (hour, minute) = (time.hour(), time.minute());

        if tz != self.state.primary_tz {
            self.state.primary_tz = tz;
            self.state.date = date;
            self.state.hour = hour;
            self.state.minute = minute;
            self.mark(Slot::Date);
            self.mark(Slot::Time);
            self.mark(Slot::SecondaryOffset);
            self.mark(Slot::TertiaryOffset);
            return Ok(());
        }

        if date != self.state.date {
            self.state.date = date;
            self.mark(Slot::Date);
        }
        if hour != self.state.hour || minute != self.state.minute {
            self.state.hour = hour;
            self.state.minute = minute;
            self.mark(Slot::Time);
        }
        Ok(())
    }

    /// Assigns the timezone of a derived clock.
    ///
    /// The displayed offset is computed against the primary clock's
    /// timezone at encode time, not stored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] for the primary clock, whose
    /// zone is only ever derived from [`set_time`](Device::set_time).
    pub fn set_location(&mut self, clock: ClockId, tz: FixedOffset) -> Result<()> {
        let slot = Slot::for_clock_offset(clock)
            .ok_or(Error::InvalidParameter("cannot set location of primary clock"))?;
        self.state.derived_tz[clock.index() - 1] = Some(tz);
        self.mark(slot);
        Ok(())
    }

    /// Selects 12 or 24 hour display for one clock.
    ///
    /// # Errors
    ///
    /// Infallible today; returns [`Result`] for uniformity with the other
    /// setters.
    pub fn set_clock_format(&mut self, clock: ClockId, format: ClockFormat) -> Result<()> {
        self.state.clock_formats[clock.index()] = format;
        // The format bit travels in the time write for the primary clock
        // and in the offset write for the derived clocks.
        match Slot::for_clock_offset(clock) {
            Some(slot) => self.mark(slot),
            None => self.mark(Slot::Time),
        }
        Ok(())
    }

    /// Selects the ordering of the date fields.
    ///
    /// # Errors
    ///
    /// Infallible today; returns [`Result`] for uniformity with the other
    /// setters.
    pub fn set_date_format(&mut self, format: DateFormat) -> Result<()> {
        self.state.date_format = format;
        self.mark(Slot::Date);
        Ok(())
    }
}
