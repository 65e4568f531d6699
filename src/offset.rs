// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Clock offset arithmetic for the secondary and tertiary MFD clocks.
//!
//! The device derives the second and third clock faces from the primary
//! clock plus a signed minute offset. The wire field is a sign bit and a
//! 10-bit magnitude, so it can represent at most ±1023 minutes, while real
//! timezone differences span more than a day (UTC-12 to UTC+14). Shifting
//! a clock face by exactly 24 hours leaves the displayed time unchanged,
//! which lets large offsets be folded back into range.

use chrono::FixedOffset;

/// Minutes in a day, the folding step for out-of-range offsets.
const MINUTES_PER_DAY: i32 = 1440;

/// Largest magnitude the 10-bit wire field can carry.
const MAX_MAGNITUDE: i32 = 1023;

/// Sign bit of the encoded offset word.
const SIGN_BIT: u16 = 1 << 10;

/// Computes the encoded offset of a derived clock from the primary clock.
///
/// Returns an 11-bit word: bit 10 is the sign (1 = the derived clock lags
/// the primary), bits 9-0 the magnitude in minutes. A clock with no
/// assigned timezone (`None`) is treated as co-located with the primary
/// clock and yields 0.
///
/// # Examples
///
/// ```
/// use chrono::FixedOffset;
/// use x52pro::offset::compute;
///
/// let pst = FixedOffset::west_opt(8 * 3600).unwrap();
/// let utc = FixedOffset::east_opt(0).unwrap();
/// // UTC is 480 minutes ahead of PST.
/// assert_eq!(compute(pst, Some(utc)), 480);
/// ```
#[must_use]
pub fn compute(primary: FixedOffset, derived: Option<FixedOffset>) -> u16 {
    let Some(tz) = derived else {
        return 0;
    };

    let mut offset = (tz.local_minus_utc() - primary.local_minus_utc()) / 60;
    let mut negative = offset < 0;
    if negative {
        offset = -offset;
    }
    tracing::debug!(offset, negative, "raw clock offset");

    // Fold by 24 hours until the magnitude fits the 10-bit field; the date
    // display is unaffected by the derived clock selectors.
    while offset > MAX_MAGNITUDE {
        offset -= MINUTES_PER_DAY;
    }

    // Folding may overshoot past zero; flip the recorded sign to match.
    if offset < 0 {
        offset = -offset;
        negative = !negative;
    }

    let sign = if negative { SIGN_BIT } else { 0 };
    // offset is in [0, 1023] here.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    {
        sign | offset as u16
    }
}
