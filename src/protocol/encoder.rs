// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The fixed table mapping each update slot to its wire encoding.

use chrono::Datelike;

use super::{
    ControlWrite, INDEX_BLINK, INDEX_DATE_DAY_MONTH, INDEX_DATE_YEAR, INDEX_LED,
    INDEX_LED_BRIGHTNESS, INDEX_LINE_CLEAR_BASE, INDEX_LINE_WRITE_BASE, INDEX_MFD_BRIGHTNESS,
    INDEX_SHIFT, INDEX_TIME, VALUE_INDICATOR_BASE,
};
use crate::error::{Error, Result};
use crate::offset;
use crate::state::{DesiredState, Slot};
use crate::types::{ClockId, DateFormat};

/// Encodes one dirty slot into its control writes.
///
/// The mapping is total over [`Slot`]; every slot yields at least one
/// write. MFD line slots yield a clear write followed by the packed
/// payload, everything else yields exactly one write.
pub(crate) fn encode(slot: Slot, state: &DesiredState) -> Result<Vec<ControlWrite>> {
    let writes = match slot {
        Slot::Shift => vec![indicator(INDEX_SHIFT, state.leds.contains(Slot::Shift))],
        Slot::PovBlink => vec![indicator(INDEX_BLINK, state.leds.contains(Slot::PovBlink))],

        Slot::MfdLine1 | Slot::MfdLine2 | Slot::MfdLine3 => {
            let line = slot.index() - Slot::MfdLine1.index();
            encode_line(line, &state.mfd_lines[usize::from(line)])
        }

        Slot::MfdBrightness => vec![ControlWrite::new(
            INDEX_MFD_BRIGHTNESS,
            state.mfd_brightness,
        )],
        Slot::LedBrightness => vec![ControlWrite::new(
            INDEX_LED_BRIGHTNESS,
            state.led_brightness,
        )],

        Slot::Date => encode_date(state),
        Slot::Time => vec![encode_time(state)],
        Slot::SecondaryOffset => vec![encode_offset(state, ClockId::Secondary)?],
        Slot::TertiaryOffset => vec![encode_offset(state, ClockId::Tertiary)?],

        // Every remaining slot is an LED element bit; its slot index is the
        // code byte in the high byte of the value.
        led_slot => {
            let mut value = u16::from(led_slot.index()) << 8;
            if state.leds.contains(led_slot) {
                value |= 1;
            }
            vec![ControlWrite::new(INDEX_LED, value)]
        }
    };

    Ok(writes)
}

fn indicator(index: u16, enabled: bool) -> ControlWrite {
    let mut value = VALUE_INDICATOR_BASE;
    if enabled {
        value |= 1;
    }
    ControlWrite::new(index, value)
}

/// Clear the line, then pack two consecutive bytes per write, the earlier
/// byte in the low half. An odd-length line gets one trailing zero byte.
fn encode_line(line: u8, data: &[u8]) -> Vec<ControlWrite> {
    let select = 1u16 << line;
    let mut writes = Vec::with_capacity(1 + data.len().div_ceil(2));
    writes.push(ControlWrite::new(INDEX_LINE_CLEAR_BASE | select, 0));

    let mut chunks = data.chunks_exact(2);
    for pair in chunks.by_ref() {
        let value = u16::from(pair[1]) << 8 | u16::from(pair[0]);
        writes.push(ControlWrite::new(INDEX_LINE_WRITE_BASE | select, value));
    }
    if let [last] = chunks.remainder() {
        writes.push(ControlWrite::new(
            INDEX_LINE_WRITE_BASE | select,
            u16::from(*last),
        ));
    }

    writes
}

/// Two writes: the first two displayed components packed low/high, then the
/// third component on its own index.
fn encode_date(state: &DesiredState) -> Vec<ControlWrite> {
    let day = u16::try_from(state.date.day()).unwrap_or(0);
    let month = u16::try_from(state.date.month()).unwrap_or(0);
    let year = u16::try_from(state.date.year().rem_euclid(100)).unwrap_or(0);

    let (first, second, third) = match state.date_format {
        DateFormat::DdMmYy => (day, month, year),
        DateFormat::MmDdYy => (month, day, year),
        DateFormat::YyMmDd => (year, month, day),
    };

    vec![
        ControlWrite::new(INDEX_DATE_DAY_MONTH, second << 8 | first),
        ControlWrite::new(INDEX_DATE_YEAR, third),
    ]
}

fn encode_time(state: &DesiredState) -> ControlWrite {
    let format = state.clock_formats[ClockId::Primary.index()].wire_bit();
    #[allow(clippy::cast_possible_truncation)]
    let value = format << 15 | (state.hour as u16) << 8 | state.minute as u16;
    ControlWrite::new(INDEX_TIME, value)
}

fn encode_offset(state: &DesiredState, clock: ClockId) -> Result<ControlWrite> {
    let derived = match clock {
        ClockId::Secondary => state.derived_tz[0],
        ClockId::Tertiary => state.derived_tz[1],
        ClockId::Primary => {
            return Err(Error::StructCorrupted("primary clock has no offset slot"));
        }
    };

    let format = state.clock_formats[clock.index()].wire_bit();
    let value = format << 15 | offset::compute(state.primary_tz, derived);
    #[allow(clippy::cast_possible_truncation)]
    let index = INDEX_TIME | clock.index() as u16;
    Ok(ControlWrite::new(index, value))
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, NaiveDate};

    use super::*;
    use crate::types::ClockFormat;

    fn write(index: u16, value: u16) -> ControlWrite {
        ControlWrite::new(index, value)
    }

    #[test]
    fn shift_and_blink_indicators() {
        let mut state = DesiredState::default();
        assert_eq!(
            encode(Slot::Shift, &state).unwrap(),
            vec![write(0xfd, 0x50)]
        );
        assert_eq!(
            encode(Slot::PovBlink, &state).unwrap(),
            vec![write(0xb4, 0x50)]
        );

        state.leds.insert(Slot::Shift);
        state.leds.insert(Slot::PovBlink);
        assert_eq!(
            encode(Slot::Shift, &state).unwrap(),
            vec![write(0xfd, 0x51)]
        );
        assert_eq!(
            encode(Slot::PovBlink, &state).unwrap(),
            vec![write(0xb4, 0x51)]
        );
    }

    #[test]
    fn blink_reads_its_own_bit() {
        // A lit shift bit must not leak into the blink encoding.
        let mut state = DesiredState::default();
        state.leds.insert(Slot::Shift);
        assert_eq!(
            encode(Slot::PovBlink, &state).unwrap(),
            vec![write(0xb4, 0x50)]
        );
    }

    #[test]
    fn led_bits() {
        let mut state = DesiredState::default();
        assert_eq!(
            encode(Slot::LedFire, &state).unwrap(),
            vec![write(0xb8, 0x0100)]
        );

        state.leds.insert(Slot::LedFire);
        state.leds.insert(Slot::LedT2Green);
        assert_eq!(
            encode(Slot::LedFire, &state).unwrap(),
            vec![write(0xb8, 0x0101)]
        );
        assert_eq!(
            encode(Slot::LedT2Green, &state).unwrap(),
            vec![write(0xb8, 0x0d01)]
        );
        assert_eq!(
            encode(Slot::LedThrottle, &state).unwrap(),
            vec![write(0xb8, 0x1400)]
        );
    }

    #[test]
    fn mfd_line_packs_byte_pairs() {
        let mut state = DesiredState::default();
        state.store_line(0, b"AB");
        assert_eq!(
            encode(Slot::MfdLine1, &state).unwrap(),
            vec![write(0xd9, 0), write(0xd1, u16::from(b'B') << 8 | u16::from(b'A'))]
        );
    }

    #[test]
    fn mfd_line_pads_odd_length() {
        let mut state = DesiredState::default();
        state.store_line(2, b"XYZ");
        assert_eq!(
            encode(Slot::MfdLine3, &state).unwrap(),
            vec![
                write(0xdc, 0),
                write(0xd4, u16::from(b'Y') << 8 | u16::from(b'X')),
                write(0xd4, u16::from(b'Z')),
            ]
        );
    }

    #[test]
    fn empty_mfd_line_only_clears() {
        let state = DesiredState::default();
        assert_eq!(
            encode(Slot::MfdLine2, &state).unwrap(),
            vec![write(0xda, 0)]
        );
    }

    #[test]
    fn brightness_passthrough() {
        let mut state = DesiredState::default();
        state.mfd_brightness = 0x0080;
        state.led_brightness = 0xffff; // out of hardware range, not clamped
        assert_eq!(
            encode(Slot::MfdBrightness, &state).unwrap(),
            vec![write(0xb1, 0x0080)]
        );
        assert_eq!(
            encode(Slot::LedBrightness, &state).unwrap(),
            vec![write(0xb2, 0xffff)]
        );
    }

    #[test]
    fn date_component_ordering() {
        let mut state = DesiredState::default();
        state.date = NaiveDate::from_ymd_opt(2006, 1, 2).unwrap();

        state.date_format = DateFormat::DdMmYy;
        assert_eq!(
            encode(Slot::Date, &state).unwrap(),
            vec![write(0xc4, 1 << 8 | 2), write(0xc8, 6)]
        );

        state.date_format = DateFormat::MmDdYy;
        assert_eq!(
            encode(Slot::Date, &state).unwrap(),
            vec![write(0xc4, 2 << 8 | 1), write(0xc8, 6)]
        );

        state.date_format = DateFormat::YyMmDd;
        assert_eq!(
            encode(Slot::Date, &state).unwrap(),
            vec![write(0xc4, 1 << 8 | 6), write(0xc8, 2)]
        );
    }

    #[test]
    fn time_packs_format_hour_minute() {
        let mut state = DesiredState::default();
        state.hour = 15;
        state.minute = 4;
        assert_eq!(
            encode(Slot::Time, &state).unwrap(),
            vec![write(0xc0, 15 << 8 | 4)]
        );

        state.clock_formats[0] = ClockFormat::TwentyFourHour;
        assert_eq!(
            encode(Slot::Time, &state).unwrap(),
            vec![write(0xc0, 1 << 15 | 15 << 8 | 4)]
        );
    }

    #[test]
    fn offset_slots_carry_format_and_offset() {
        let mut state = DesiredState::default();
        state.primary_tz = FixedOffset::west_opt(8 * 3600).unwrap();
        state.derived_tz[0] = Some(FixedOffset::east_opt(0).unwrap());
        state.clock_formats[1] = ClockFormat::TwentyFourHour;

        assert_eq!(
            encode(Slot::SecondaryOffset, &state).unwrap(),
            vec![write(0xc1, 1 << 15 | 480)]
        );
        // Tertiary clock unassigned: offset 0, 12 hr format.
        assert_eq!(
            encode(Slot::TertiaryOffset, &state).unwrap(),
            vec![write(0xc2, 0)]
        );
    }
}
