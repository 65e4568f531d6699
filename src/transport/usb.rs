// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! USB backend built on `nusb`.

use std::time::Duration;

use nusb::transfer::{Control, ControlType, Recipient, TransferError};

use super::{Transport, TransportError, TransportHandle};
use crate::protocol::VENDOR_REQUEST;

/// Timeout for one vendor control transfer.
const WRITE_TIMEOUT: Duration = Duration::from_secs(5);

/// The real USB transport.
///
/// Discovery walks the host's device list and opens every device matching
/// the vendor/product allow-list. No interface is claimed; the vendor
/// writes are addressed to the device itself.
#[derive(Debug, Default)]
pub struct UsbTransport;

impl UsbTransport {
    /// Creates the USB transport.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Transport for UsbTransport {
    type Handle = UsbHandle;

    fn discover(
        &mut self,
        vendor_id: u16,
        product_ids: &[u16],
    ) -> Result<Vec<UsbHandle>, TransportError> {
        let devices = nusb::list_devices().map_err(|e| TransportError::Io(e.to_string()))?;

        let mut handles = Vec::new();
        for info in devices {
            if info.vendor_id() != vendor_id || !product_ids.contains(&info.product_id()) {
                continue;
            }

            match info.open() {
                Ok(device) => {
                    tracing::debug!(
                        bus = info.bus_number(),
                        address = info.device_address(),
                        product_id = format_args!("{:04x}", info.product_id()),
                        "opened candidate device"
                    );
                    handles.push(UsbHandle {
                        device,
                        product_id: info.product_id(),
                    });
                }
                Err(e) => {
                    // A device we cannot open is skipped, not fatal; another
                    // candidate may still work.
                    tracing::warn!(
                        bus = info.bus_number(),
                        address = info.device_address(),
                        error = %e,
                        "failed to open candidate device"
                    );
                }
            }
        }

        Ok(handles)
    }
}

/// An open USB device. Dropping it releases the device.
pub struct UsbHandle {
    device: nusb::Device,
    product_id: u16,
}

impl TransportHandle for UsbHandle {
    fn product_id(&self) -> u16 {
        self.product_id
    }

    fn write(&mut self, index: u16, value: u16) -> Result<(), TransportError> {
        let control = Control {
            control_type: ControlType::Vendor,
            recipient: Recipient::Device,
            request: VENDOR_REQUEST,
            value,
            index,
        };

        match self.device.control_out_blocking(control, &[], WRITE_TIMEOUT) {
            Ok(_) => Ok(()),
            Err(TransferError::Disconnected) => Err(TransportError::Disconnected),
            Err(e) => Err(TransportError::Io(e.to_string())),
        }
    }

    fn reset(&mut self) -> Result<(), TransportError> {
        self.device.reset().map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound | std::io::ErrorKind::NotConnected => {
                TransportError::Disconnected
            }
            _ => TransportError::Io(e.to_string()),
        })
    }
}

impl std::fmt::Debug for UsbHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UsbHandle")
            .field("product_id", &self.product_id)
            .finish_non_exhaustive()
    }
}
