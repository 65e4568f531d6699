// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! x52pro - A Rust library to drive Saitek X52/X52 Pro joysticks.
//!
//! The X52 exposes its LEDs, the multifunction display (MFD), the clocks
//! and the backlights over USB vendor control writes. This library models
//! all of that as one desired-state session: setters record what the
//! device should show, [`commit()`](Device::commit) flushes the pending
//! changes in a fixed order.
//!
//! # Supported Features
//!
//! - **LED control**: on/off and red/amber/green LEDs, shift and blink
//!   indicators (X52 Pro only for the individual LEDs)
//! - **MFD text**: three 16-character lines, plus codepage conversion and
//!   a scroll controller for longer text
//! - **Clocks**: primary clock with date, two derived clocks with
//!   programmable timezone offsets, 12/24 hr and date format selection
//! - **Brightness**: independent MFD and LED backlight levels
//!
//! # Quick Start
//!
//! ```no_run
//! use x52pro::{Device, Led, LedState};
//!
//! # #[cfg(feature = "usb")]
//! fn main() -> x52pro::Result<()> {
//!     let mut device = Device::new();
//!     if !device.connect() {
//!         eprintln!("no supported joystick found");
//!         return Ok(());
//!     }
//!
//!     device.set_led(Led::A, LedState::Green)?;
//!     device.set_mfd_text(0, b"Hello X52")?;
//!     device.set_mfd_brightness(80)?;
//!
//!     // Nothing reaches the device until commit.
//!     device.commit()?;
//!     Ok(())
//! }
//! # #[cfg(not(feature = "usb"))]
//! # fn main() {}
//! ```
//!
//! # Testing Without Hardware
//!
//! The session is generic over a [`transport::Transport`]; the bundled
//! [`transport::RecordingTransport`] stands in for a joystick and records
//! every control write, which is how this library tests itself.

mod capabilities;
mod device;
pub mod error;
pub mod offset;
pub mod protocol;
pub mod state;
pub mod text;
pub mod transport;
pub mod types;

pub use capabilities::Capabilities;
pub use device::{
    Device, PRODUCT_X52_1, PRODUCT_X52_2, PRODUCT_X52_PRO, SUPPORTED_PRODUCTS, VENDOR_SAITEK,
};
pub use error::{Error, Result};
pub use types::{BrightnessTarget, ClockFormat, ClockId, DateFormat, Led, LedKind, LedState};
