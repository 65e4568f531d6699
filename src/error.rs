// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `x52pro` library.
//!
//! All fallible operations return [`Result`]. The session distinguishes a
//! handful of error kinds: caller mistakes ([`Error::InvalidParameter`]),
//! operations the connected device variant cannot perform
//! ([`Error::NotSupported`]), a missing or lost USB connection
//! ([`Error::NotConnected`]), and transport failures that are not a
//! disconnect ([`Error::Transport`]).

use thiserror::Error;

use crate::transport::TransportError;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// A malformed argument: bad enum value or out-of-range index.
    ///
    /// This indicates a caller bug and is never retryable.
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),

    /// The operation is not valid for the current device or LED class.
    #[error("not supported: {0}")]
    NotSupported(&'static str),

    /// No live USB connection, whether never connected or disconnected
    /// mid-call.
    ///
    /// Callers must [`connect()`](crate::Device::connect) again before
    /// further use.
    #[error("not connected")]
    NotConnected,

    /// An opaque non-disconnect transport failure, propagated verbatim.
    #[error("transport error: {0}")]
    Transport(TransportError),

    /// An internal enumeration took an impossible value.
    ///
    /// This signals a bug in the library itself and is never expected in
    /// correct operation.
    #[error("internal state corrupted: {0}")]
    StructCorrupted(&'static str),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_parameter_display() {
        let err = Error::InvalidParameter("line number out of range");
        assert_eq!(
            err.to_string(),
            "invalid parameter: line number out of range"
        );
    }

    #[test]
    fn not_supported_display() {
        let err = Error::NotSupported("setting LED state");
        assert_eq!(err.to_string(), "not supported: setting LED state");
    }

    #[test]
    fn transport_display() {
        let err = Error::Transport(TransportError::Io("pipe stalled".to_string()));
        assert_eq!(err.to_string(), "transport error: I/O error: pipe stalled");
    }
}
