// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A deterministic in-memory transport for tests.
//!
//! Every write a session performs is appended to a shared [`WriteLog`],
//! which the test keeps a handle on after the transport has been handed to
//! the session. Failures can be injected at a chosen write.

use std::cell::RefCell;
use std::rc::Rc;

use super::{Transport, TransportError, TransportHandle};

#[derive(Debug, Default)]
struct LogInner {
    writes: Vec<(u16, u16)>,
    resets: u32,
    /// Fail the write with this zero-based sequence number.
    fail_at: Option<usize>,
    fail_with: Option<TransportError>,
}

/// Shared view of everything a [`RecordingTransport`] handle has done.
#[derive(Debug, Clone, Default)]
pub struct WriteLog {
    inner: Rc<RefCell<LogInner>>,
}

impl WriteLog {
    /// Returns all `(index, value)` pairs written so far.
    #[must_use]
    pub fn writes(&self) -> Vec<(u16, u16)> {
        self.inner.borrow().writes.clone()
    }

    /// Returns the number of device resets performed.
    #[must_use]
    pub fn resets(&self) -> u32 {
        self.inner.borrow().resets
    }

    /// Makes the n-th write (zero-based, counted over the whole log) fail
    /// with an opaque I/O error.
    pub fn fail_write(&self, n: usize) {
        let mut inner = self.inner.borrow_mut();
        inner.fail_at = Some(n);
        inner.fail_with = Some(TransportError::Io("injected failure".to_string()));
    }

    /// Makes the n-th write fail as a disconnect.
    pub fn disconnect_at_write(&self, n: usize) {
        let mut inner = self.inner.borrow_mut();
        inner.fail_at = Some(n);
        inner.fail_with = Some(TransportError::Disconnected);
    }

    fn record(&self, index: u16, value: u16) -> Result<(), TransportError> {
        let mut inner = self.inner.borrow_mut();
        if inner.fail_at == Some(inner.writes.len()) {
            // One-shot: a retry of the same write goes through.
            inner.fail_at = None;
            let err = inner
                .fail_with
                .take()
                .unwrap_or(TransportError::Disconnected);
            return Err(err);
        }
        inner.writes.push((index, value));
        Ok(())
    }
}

/// A fake transport presenting zero or one attached device.
///
/// # Examples
///
/// ```
/// use x52pro::Device;
/// use x52pro::transport::RecordingTransport;
///
/// let transport = RecordingTransport::x52_pro();
/// let log = transport.log();
/// let mut device = Device::with_transport(transport);
/// assert!(device.connect());
/// device.set_shift(true).unwrap();
/// device.commit().unwrap();
/// assert_eq!(log.writes(), vec![(0xfd, 0x51)]);
/// ```
#[derive(Debug)]
pub struct RecordingTransport {
    product_id: Option<u16>,
    log: WriteLog,
}

impl RecordingTransport {
    /// A transport with one attached device of the given product id.
    #[must_use]
    pub fn with_product(product_id: u16) -> Self {
        Self {
            product_id: Some(product_id),
            log: WriteLog::default(),
        }
    }

    /// A transport with one attached X52 Pro (product id 0x0762).
    #[must_use]
    pub fn x52_pro() -> Self {
        Self::with_product(0x0762)
    }

    /// A transport with one attached non-pro X52 (product id 0x0255).
    #[must_use]
    pub fn x52() -> Self {
        Self::with_product(0x0255)
    }

    /// A transport with nothing attached.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            product_id: None,
            log: WriteLog::default(),
        }
    }

    /// Returns a handle on the shared write log.
    #[must_use]
    pub fn log(&self) -> WriteLog {
        self.log.clone()
    }
}

impl Transport for RecordingTransport {
    type Handle = RecordingHandle;

    fn discover(
        &mut self,
        vendor_id: u16,
        product_ids: &[u16],
    ) -> Result<Vec<RecordingHandle>, TransportError> {
        // The fake device always carries the expected vendor id.
        let _ = vendor_id;
        match self.product_id {
            Some(pid) if product_ids.contains(&pid) => Ok(vec![RecordingHandle {
                product_id: pid,
                log: self.log.clone(),
            }]),
            _ => Ok(Vec::new()),
        }
    }
}

/// Handle to the fake device of a [`RecordingTransport`].
#[derive(Debug)]
pub struct RecordingHandle {
    product_id: u16,
    log: WriteLog,
}

impl TransportHandle for RecordingHandle {
    fn product_id(&self) -> u16 {
        self.product_id
    }

    fn write(&mut self, index: u16, value: u16) -> Result<(), TransportError> {
        self.log.record(index, value)
    }

    fn reset(&mut self) -> Result<(), TransportError> {
        self.log.inner.borrow_mut().resets += 1;
        Ok(())
    }
}
