// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The vendor control-write protocol of the X52/X52 Pro.
//!
//! Every output update is one or more vendor control transfers, each
//! carrying a 16-bit index (which field) and a 16-bit value (the payload).
//! [`encode`] maps one dirty [`Slot`](crate::state::Slot) to its fixed
//! sequence of writes; no coalescing or reordering across slots happens.

mod encoder;

pub(crate) use encoder::encode;

/// Vendor request code carried by every control write.
pub const VENDOR_REQUEST: u8 = 0x91;

/// Byte width of one MFD text line.
pub const MFD_LINE_SIZE: usize = 16;

/// Number of MFD text lines.
pub const MFD_LINES: usize = 3;

/// Control index of the shift indicator.
pub(crate) const INDEX_SHIFT: u16 = 0xfd;

/// Control index of the blink indicator.
pub(crate) const INDEX_BLINK: u16 = 0xb4;

/// Base value byte for the shift and blink indicators; bit 0 carries the
/// enabled flag.
pub(crate) const VALUE_INDICATOR_BASE: u16 = 0x50;

/// Control index shared by all LED bit writes.
pub(crate) const INDEX_LED: u16 = 0xb8;

/// Control index of the MFD backlight brightness.
pub(crate) const INDEX_MFD_BRIGHTNESS: u16 = 0xb1;

/// Control index of the LED backlight brightness.
pub(crate) const INDEX_LED_BRIGHTNESS: u16 = 0xb2;

/// Control index of the primary time display. The derived clock offsets
/// live at this index ORed with the clock number.
pub(crate) const INDEX_TIME: u16 = 0xc0;

/// Control index of the day/month date halves.
pub(crate) const INDEX_DATE_DAY_MONTH: u16 = 0xc4;

/// Control index of the year date half.
pub(crate) const INDEX_DATE_YEAR: u16 = 0xc8;

/// Base control index for clearing an MFD line; OR with `1 << line`.
pub(crate) const INDEX_LINE_CLEAR_BASE: u16 = 0xd8;

/// Base control index for writing an MFD line; OR with `1 << line`.
pub(crate) const INDEX_LINE_WRITE_BASE: u16 = 0xd0;

/// One pending vendor control write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlWrite {
    /// The 16-bit control index.
    pub index: u16,
    /// The 16-bit payload value.
    pub value: u16,
}

impl ControlWrite {
    pub(crate) const fn new(index: u16, value: u16) -> Self {
        Self { index, value }
    }
}
