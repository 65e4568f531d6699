// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The device session: desired state, dirty tracking and lifecycle.
//!
//! A session starts disconnected. [`connect()`](Device::connect) claims one
//! matching joystick; the setters mutate local state only and may be called
//! in any connection state; [`commit()`](Device::commit) flushes every dirty
//! field to the device in slot order. [`close()`](Device::close) or a
//! detected disconnect releases the device and resets the session to
//! defaults.
//!
//! The session is single-threaded and fully synchronous: every transport
//! write blocks until the control transfer completes or fails, and no
//! retries are attempted.

mod led;
mod mfd;
mod time;

use crate::capabilities::Capabilities;
use crate::error::{Error, Result};
use crate::protocol::encode;
use crate::state::{DesiredState, SlotSet};
use crate::transport::{Transport, TransportError, TransportHandle};

/// USB vendor id of Saitek.
pub const VENDOR_SAITEK: u16 = 0x06a3;

/// Product ids this library drives.
pub const SUPPORTED_PRODUCTS: [u16; 3] = [PRODUCT_X52_1, PRODUCT_X52_2, PRODUCT_X52_PRO];

/// First hardware revision of the non-pro X52.
pub const PRODUCT_X52_1: u16 = 0x0255;

/// Second hardware revision of the non-pro X52.
pub const PRODUCT_X52_2: u16 = 0x075c;

/// The X52 Pro, the only variant with individually controllable LEDs.
pub const PRODUCT_X52_PRO: u16 = 0x0762;

/// A session against one X52/X52 Pro joystick.
///
/// # Examples
///
/// ```no_run
/// use x52pro::{Device, Led, LedState};
///
/// # #[cfg(feature = "usb")]
/// fn main() -> x52pro::Result<()> {
///     let mut device = Device::new();
///     if !device.connect() {
///         eprintln!("no joystick found");
///         return Ok(());
///     }
///
///     device.set_led(Led::Fire, LedState::On)?;
///     device.set_mfd_text(0, b"Hello X52")?;
///     device.commit()?;
///     Ok(())
/// }
/// # #[cfg(not(feature = "usb"))]
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct Device<T: Transport> {
    transport: T,
    handle: Option<T::Handle>,
    capabilities: Capabilities,
    state: DesiredState,
    dirty: SlotSet,
}

#[cfg(feature = "usb")]
impl Device<crate::transport::UsbTransport> {
    /// Creates a disconnected session backed by the real USB transport.
    #[must_use]
    pub fn new() -> Self {
        Self::with_transport(crate::transport::UsbTransport::new())
    }
}

#[cfg(feature = "usb")]
impl Default for Device<crate::transport::UsbTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> Device<T> {
    /// Creates a disconnected session on an arbitrary transport.
    #[must_use]
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport,
            handle: None,
            capabilities: Capabilities::default(),
            state: DesiredState::default(),
            dirty: SlotSet::new(),
        }
    }

    /// Tries to claim a supported joystick.
    ///
    /// Returns `true` on success. Absence of a device is a normal outcome,
    /// not an error; enumeration failures are logged and also reported as
    /// `false`. If multiple supported devices are plugged in, one is picked
    /// in an unspecified manner and the rest are released.
    pub fn connect(&mut self) -> bool {
        if self.handle.is_some() {
            return true;
        }

        let handles = match self.transport.discover(VENDOR_SAITEK, &SUPPORTED_PRODUCTS) {
            Ok(handles) => handles,
            Err(e) => {
                tracing::error!(error = %e, "device discovery failed");
                return false;
            }
        };

        let Some(handle) = handles.into_iter().next() else {
            tracing::info!("no matching devices found");
            return false;
        };

        self.capabilities = if handle.product_id() == PRODUCT_X52_PRO {
            Capabilities::x52_pro()
        } else {
            Capabilities::x52()
        };
        tracing::info!(
            product_id = format_args!("{:04x}", handle.product_id()),
            "connected"
        );
        self.handle = Some(handle);
        true
    }

    /// Returns whether the session currently holds a device.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.handle.is_some()
    }

    /// Returns the capabilities of the connected device variant.
    #[must_use]
    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// Sends a raw vendor control write to the device.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotConnected`] if no device is held or if the
    /// device turns out to be gone (the session disconnects itself first);
    /// any other transport failure is returned as [`Error::Transport`].
    pub fn raw(&mut self, index: u16, value: u16) -> Result<()> {
        let Some(handle) = self.handle.as_mut() else {
            tracing::warn!("not connected");
            return Err(Error::NotConnected);
        };

        tracing::trace!(
            index = format_args!("{index:04x}"),
            value = format_args!("{value:04x}"),
            "sending raw control write"
        );
        match handle.write(index, value) {
            Ok(()) => Ok(()),
            Err(TransportError::Disconnected) => {
                tracing::warn!("device has been disconnected");
                self.disconnect();
                Err(Error::NotConnected)
            }
            Err(e) => {
                tracing::error!(error = %e, "error updating device");
                Err(Error::Transport(e))
            }
        }
    }

    /// Resets the connected device.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotConnected`] if no device is held or it is gone,
    /// otherwise the corresponding transport error.
    pub fn reset(&mut self) -> Result<()> {
        let Some(handle) = self.handle.as_mut() else {
            tracing::warn!("not connected");
            return Err(Error::NotConnected);
        };

        tracing::debug!("resetting device");
        match handle.reset() {
            Ok(()) => Ok(()),
            Err(TransportError::Disconnected) => {
                tracing::warn!("device has been disconnected");
                self.disconnect();
                Err(Error::NotConnected)
            }
            Err(e) => {
                tracing::error!(error = %e, "error resetting device");
                Err(Error::Transport(e))
            }
        }
    }

    /// Flushes every dirty field to the device, lowest slot first.
    ///
    /// Slots written successfully become clean. On the first failing write
    /// the remaining batch is abandoned: the failing slot and every slot
    /// after it stay dirty. A detected disconnect additionally releases the
    /// device and resets the session.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotConnected`] without writing anything if no
    /// device is held; otherwise the first write error encountered.
    pub fn commit(&mut self) -> Result<()> {
        if self.handle.is_none() {
            tracing::warn!("not connected");
            return Err(Error::NotConnected);
        }

        tracing::debug!(dirty = ?self.dirty, "committing pending updates");
        for slot in crate::state::Slot::ALL {
            if !self.dirty.contains(slot) {
                continue;
            }

            let writes = encode(slot, &self.state)?;
            for write in writes {
                self.raw(write.index, write.value)?;
            }
            self.dirty.remove(slot);
        }

        Ok(())
    }

    /// Releases the device, if held, and resets all desired state to
    /// defaults. Safe to call repeatedly.
    pub fn close(&mut self) {
        self.disconnect();
    }

    fn disconnect(&mut self) {
        self.handle = None;
        self.capabilities = Capabilities::default();
        self.state = DesiredState::default();
        self.dirty.clear();
    }

    pub(crate) fn mark(&mut self, slot: crate::state::Slot) {
        self.dirty.insert(slot);
    }

    #[cfg(test)]
    pub(crate) fn dirty(&self) -> SlotSet {
        self.dirty
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &DesiredState {
        &self.state
    }
}
