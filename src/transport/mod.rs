// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The transport seam between the session and the physical device.
//!
//! The session only needs three things from the hardware: enumerate
//! candidate devices, perform one blocking vendor control write, and reset.
//! Expressing that as the [`Transport`]/[`TransportHandle`] trait pair keeps
//! the session testable against the [`RecordingTransport`] and leaves USB
//! specifics to the [`UsbTransport`] backend (cargo feature `usb`).

mod recording;
#[cfg(feature = "usb")]
mod usb;

pub use recording::{RecordingTransport, WriteLog};
#[cfg(feature = "usb")]
pub use usb::UsbTransport;

use thiserror::Error;

/// Transport-level failures.
///
/// The session distinguishes only "device no longer present" from all other
/// I/O failures; a disconnect releases the handle and surfaces as
/// [`Error::NotConnected`](crate::Error::NotConnected), anything else is
/// propagated verbatim.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// The device has been unplugged or is otherwise gone.
    #[error("device no longer present")]
    Disconnected,

    /// Any other transport failure.
    #[error("I/O error: {0}")]
    Io(String),
}

/// Enumerates and opens candidate devices.
pub trait Transport {
    /// The handle type produced by discovery.
    type Handle: TransportHandle;

    /// Opens every attached device matching the vendor id and one of the
    /// accepted product ids.
    ///
    /// # Errors
    ///
    /// Returns an error if enumeration itself fails; an empty list is the
    /// normal "nothing plugged in" outcome, not an error.
    fn discover(
        &mut self,
        vendor_id: u16,
        product_ids: &[u16],
    ) -> Result<Vec<Self::Handle>, TransportError>;
}

/// An exclusively owned connection to one device.
///
/// Dropping the handle closes it.
pub trait TransportHandle: std::fmt::Debug {
    /// The product id the device enumerated with.
    fn product_id(&self) -> u16;

    /// Performs a single blocking vendor control write.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Disconnected`] if the device is gone,
    /// [`TransportError::Io`] for any other failure.
    fn write(&mut self, index: u16, value: u16) -> Result<(), TransportError>;

    /// Resets the device.
    ///
    /// # Errors
    ///
    /// Same classification as [`write`](TransportHandle::write).
    fn reset(&mut self) -> Result<(), TransportError>;
}
