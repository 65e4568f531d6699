// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Brightness target selector.

/// Which backlight a brightness level applies to.
///
/// The hardware scale runs 0 to 128; the session stores the raw level
/// without clamping, so out-of-range values are passed through to the
/// device as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BrightnessTarget {
    /// The multifunction display backlight.
    Mfd,
    /// The LED backlights.
    Led,
}
