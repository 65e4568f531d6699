// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! MFD text and brightness setters.

use super::Device;
use crate::error::{Error, Result};
use crate::state::Slot;
use crate::transport::Transport;
use crate::types::BrightnessTarget;

impl<T: Transport> Device<T> {
    /// Sets the text of one MFD line.
    ///
    /// `data` is in the device codepage, not UTF-8; use
    /// [`text::to_codepage`](crate::text::to_codepage) to convert. Anything
    /// beyond the 16-character display width is silently dropped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `line` is not 0, 1 or 2.
    pub fn set_mfd_text(&mut self, line: u8, data: &[u8]) -> Result<()> {
        let slot =
            Slot::for_mfd_line(line).ok_or(Error::InvalidParameter("line number out of range"))?;
        self.state.store_line(usize::from(line), data);
        self.mark(slot);
        Ok(())
    }

    /// Sets the backlight brightness of the MFD or the LEDs.
    ///
    /// The hardware range is 0 to 128; the raw value is passed through
    /// unclamped, matching what the control protocol accepts.
    pub fn set_brightness(&mut self, target: BrightnessTarget, value: u16) -> Result<()> {
        match target {
            BrightnessTarget::Mfd => {
                self.state.mfd_brightness = value;
                self.mark(Slot::MfdBrightness);
            }
            BrightnessTarget::Led => {
                self.state.led_brightness = value;
                self.mark(Slot::LedBrightness);
            }
        }
        Ok(())
    }

    /// Shorthand for [`set_brightness`](Device::set_brightness) on the MFD.
    pub fn set_mfd_brightness(&mut self, value: u16) -> Result<()> {
        self.set_brightness(BrightnessTarget::Mfd, value)
    }

    /// Shorthand for [`set_brightness`](Device::set_brightness) on the LEDs.
    pub fn set_led_brightness(&mut self, value: u16) -> Result<()> {
        self.set_brightness(BrightnessTarget::Led, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::RecordingTransport;

    fn connected_pro() -> Device<RecordingTransport> {
        let mut device = Device::with_transport(RecordingTransport::x52_pro());
        assert!(device.connect());
        device
    }

    #[test]
    fn text_lands_on_the_right_line() {
        let mut device = connected_pro();
        device.set_mfd_text(0, b"one").unwrap();
        device.set_mfd_text(2, b"three").unwrap();

        assert_eq!(device.state().mfd_lines[0], b"one");
        assert!(device.state().mfd_lines[1].is_empty());
        assert_eq!(device.state().mfd_lines[2], b"three");
        assert!(device.dirty().contains(Slot::MfdLine1));
        assert!(!device.dirty().contains(Slot::MfdLine2));
        assert!(device.dirty().contains(Slot::MfdLine3));
    }

    #[test]
    fn overlong_text_is_truncated() {
        let mut device = connected_pro();
        device.set_mfd_text(1, b"0123456789abcdefEXTRA").unwrap();
        assert_eq!(device.state().mfd_lines[1], b"0123456789abcdef");
    }

    #[test]
    fn line_out_of_range_is_rejected() {
        let mut device = connected_pro();
        assert!(matches!(
            device.set_mfd_text(3, b"nope"),
            Err(Error::InvalidParameter("line number out of range"))
        ));
        assert!(device.dirty().is_empty());
    }

    #[test]
    fn brightness_targets_mark_their_slots() {
        let mut device = connected_pro();
        device.set_brightness(BrightnessTarget::Mfd, 64).unwrap();
        assert_eq!(device.state().mfd_brightness, 64);
        assert!(device.dirty().contains(Slot::MfdBrightness));
        assert!(!device.dirty().contains(Slot::LedBrightness));

        device.set_brightness(BrightnessTarget::Led, 0x200).unwrap();
        assert_eq!(device.state().led_brightness, 0x200);
        assert!(device.dirty().contains(Slot::LedBrightness));
    }

    #[test]
    fn brightness_shorthands() {
        let mut device = connected_pro();
        device.set_mfd_brightness(10).unwrap();
        device.set_led_brightness(20).unwrap();
        assert_eq!(device.state().mfd_brightness, 10);
        assert_eq!(device.state().led_brightness, 20);
    }

    #[test]
    fn committed_line_writes() {
        let transport = RecordingTransport::x52_pro();
        let log = transport.log();
        let mut device = Device::with_transport(transport);
        assert!(device.connect());

        device.set_mfd_text(0, b"Hi").unwrap();
        device.commit().unwrap();
        assert_eq!(
            log.writes(),
            vec![(0xd9, 0), (0xd1, u16::from(b'i') << 8 | u16::from(b'H'))]
        );
    }
}
