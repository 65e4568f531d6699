// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The closed enumeration of update slots and the bit-set indexed by it.

use crate::types::{ClockId, Led};

/// One updatable field of the device output state.
///
/// Slots are totally ordered; [`commit()`](crate::Device::commit) flushes
/// dirty slots from lowest to highest. The discriminants are fixed by the
/// wire protocol: each LED bit slot's discriminant is also the code byte
/// sent in the high byte of its control write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Slot {
    /// Shift indicator on the MFD.
    Shift = 0,
    /// Fire button LED bit.
    LedFire = 1,
    /// Button A red element.
    LedARed = 2,
    /// Button A green element.
    LedAGreen = 3,
    /// Button B red element.
    LedBRed = 4,
    /// Button B green element.
    LedBGreen = 5,
    /// Button D red element.
    LedDRed = 6,
    /// Button D green element.
    LedDGreen = 7,
    /// Button E red element.
    LedERed = 8,
    /// Button E green element.
    LedEGreen = 9,
    /// Toggle 1/2 red element.
    LedT1Red = 10,
    /// Toggle 1/2 green element.
    LedT1Green = 11,
    /// Toggle 3/4 red element.
    LedT2Red = 12,
    /// Toggle 3/4 green element.
    LedT2Green = 13,
    /// Toggle 5/6 red element.
    LedT3Red = 14,
    /// Toggle 5/6 green element.
    LedT3Green = 15,
    /// POV hat red element.
    LedPovRed = 16,
    /// POV hat green element.
    LedPovGreen = 17,
    /// Clutch button red element.
    LedClutchRed = 18,
    /// Clutch button green element.
    LedClutchGreen = 19,
    /// Throttle LED bit.
    LedThrottle = 20,
    /// MFD text line 1.
    MfdLine1 = 21,
    /// MFD text line 2.
    MfdLine2 = 22,
    /// MFD text line 3.
    MfdLine3 = 23,
    /// POV blink indicator.
    PovBlink = 24,
    /// MFD backlight brightness.
    MfdBrightness = 25,
    /// LED backlight brightness.
    LedBrightness = 26,
    /// Date display.
    Date = 27,
    /// Primary clock time display.
    Time = 28,
    /// Secondary clock offset.
    SecondaryOffset = 29,
    /// Tertiary clock offset.
    TertiaryOffset = 30,
}

impl Slot {
    /// Every slot, in commit order.
    pub const ALL: [Slot; 31] = [
        Slot::Shift,
        Slot::LedFire,
        Slot::LedARed,
        Slot::LedAGreen,
        Slot::LedBRed,
        Slot::LedBGreen,
        Slot::LedDRed,
        Slot::LedDGreen,
        Slot::LedERed,
        Slot::LedEGreen,
        Slot::LedT1Red,
        Slot::LedT1Green,
        Slot::LedT2Red,
        Slot::LedT2Green,
        Slot::LedT3Red,
        Slot::LedT3Green,
        Slot::LedPovRed,
        Slot::LedPovGreen,
        Slot::LedClutchRed,
        Slot::LedClutchGreen,
        Slot::LedThrottle,
        Slot::MfdLine1,
        Slot::MfdLine2,
        Slot::MfdLine3,
        Slot::PovBlink,
        Slot::MfdBrightness,
        Slot::LedBrightness,
        Slot::Date,
        Slot::Time,
        Slot::SecondaryOffset,
        Slot::TertiaryOffset,
    ];

    /// Returns the zero-based bit position of this slot.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Looks up the slot at a given bit position.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Slot> {
        if (index as usize) < Slot::ALL.len() {
            Some(Slot::ALL[index as usize])
        } else {
            None
        }
    }

    /// Returns the slot holding the first (or only) state bit of an LED.
    #[must_use]
    pub(crate) const fn for_led(led: Led) -> Slot {
        // Led discriminants are slot indices by construction; every code is
        // within the LED slot range.
        match Slot::from_index(led.code()) {
            Some(slot) => slot,
            None => unreachable!(),
        }
    }

    /// Returns the slot for a zero-based MFD line number, if in range.
    #[must_use]
    pub(crate) const fn for_mfd_line(line: u8) -> Option<Slot> {
        match line {
            0 => Some(Slot::MfdLine1),
            1 => Some(Slot::MfdLine2),
            2 => Some(Slot::MfdLine3),
            _ => None,
        }
    }

    /// Returns the offset slot of a derived clock; `None` for the primary.
    #[must_use]
    pub(crate) const fn for_clock_offset(clock: ClockId) -> Option<Slot> {
        match clock {
            ClockId::Primary => None,
            ClockId::Secondary => Some(Slot::SecondaryOffset),
            ClockId::Tertiary => Some(Slot::TertiaryOffset),
        }
    }
}

/// A fixed-size bit set indexed by [`Slot`].
///
/// Used both for the dirty set (which fields still need to be written) and
/// for the LED state bitfield (shift at [`Slot::Shift`], blink at
/// [`Slot::PovBlink`], one bit per LED element in between).
///
/// # Examples
///
/// ```
/// use x52pro::state::{Slot, SlotSet};
///
/// let mut set = SlotSet::new();
/// set.insert(Slot::LedFire);
/// assert!(set.contains(Slot::LedFire));
/// assert!(!set.contains(Slot::Shift));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SlotSet(u32);

impl SlotSet {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Adds a slot to the set.
    pub fn insert(&mut self, slot: Slot) {
        self.0 |= 1 << slot.index();
    }

    /// Removes a slot from the set.
    pub fn remove(&mut self, slot: Slot) {
        self.0 &= !(1 << slot.index());
    }

    /// Adds or removes a slot depending on `present`.
    pub fn assign(&mut self, slot: Slot, present: bool) {
        if present {
            self.insert(slot);
        } else {
            self.remove(slot);
        }
    }

    /// Tests whether a slot is in the set.
    #[must_use]
    pub const fn contains(self, slot: Slot) -> bool {
        self.0 & (1 << slot.index()) != 0
    }

    /// Returns `true` if no slots are set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Removes every slot from the set.
    pub fn clear(&mut self) {
        self.0 = 0;
    }

    /// Iterates the contained slots in commit order.
    pub fn iter(self) -> impl Iterator<Item = Slot> {
        Slot::ALL.into_iter().filter(move |s| self.contains(*s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discriminants_match_positions() {
        for (i, slot) in Slot::ALL.iter().enumerate() {
            assert_eq!(usize::from(slot.index()), i);
            assert_eq!(Slot::from_index(slot.index()), Some(*slot));
        }
        assert_eq!(Slot::from_index(31), None);
    }

    #[test]
    fn led_slot_lookup() {
        assert_eq!(Slot::for_led(Led::Fire), Slot::LedFire);
        assert_eq!(Slot::for_led(Led::A), Slot::LedARed);
        assert_eq!(Slot::for_led(Led::Clutch), Slot::LedClutchRed);
        assert_eq!(Slot::for_led(Led::Throttle), Slot::LedThrottle);
    }

    #[test]
    fn mfd_line_lookup() {
        assert_eq!(Slot::for_mfd_line(0), Some(Slot::MfdLine1));
        assert_eq!(Slot::for_mfd_line(2), Some(Slot::MfdLine3));
        assert_eq!(Slot::for_mfd_line(3), None);
    }

    #[test]
    fn set_insert_remove_contains() {
        let mut set = SlotSet::new();
        assert!(set.is_empty());

        set.insert(Slot::Date);
        set.insert(Slot::Shift);
        assert!(set.contains(Slot::Date));
        assert!(set.contains(Slot::Shift));
        assert!(!set.contains(Slot::Time));

        set.remove(Slot::Date);
        assert!(!set.contains(Slot::Date));
        assert!(!set.is_empty());

        set.clear();
        assert!(set.is_empty());
    }

    #[test]
    fn iteration_is_in_commit_order() {
        let mut set = SlotSet::new();
        set.insert(Slot::TertiaryOffset);
        set.insert(Slot::Shift);
        set.insert(Slot::MfdLine2);

        let order: Vec<Slot> = set.iter().collect();
        assert_eq!(order, vec![Slot::Shift, Slot::MfdLine2, Slot::TertiaryOffset]);
    }
}
