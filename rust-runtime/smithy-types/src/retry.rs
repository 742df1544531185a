/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Classification of service errors.
//!
//! The SDK does not retry requests itself. These types let a dispatcher decide whether an
//! error returned by an operation is worth retrying.

#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum ErrorKind {
    /// A connection level error such as a socket timeout or a TLS negotiation failure.
    ///
    /// Not produced by service crates: only a dispatcher can observe these.
    TransientError,

    /// The server explicitly told the client to back off, such as a 429 HTTP error.
    ThrottlingError,

    /// A server error that isn't explicitly throttling.
    ServerError,

    /// The request itself was rejected and sending it again will not help.
    ClientError,
}

impl ErrorKind {
    /// Classify an HTTP status code.
    ///
    /// Returns `None` for statuses that do not describe an error.
    pub fn from_status(status: u16) -> Option<Self> {
        match status {
            429 => Some(ErrorKind::ThrottlingError),
            500..=599 => Some(ErrorKind::ServerError),
            400..=499 => Some(ErrorKind::ClientError),
            _ => None,
        }
    }
}

pub trait ProvideErrorKind {
    /// Returns the `ErrorKind`.
    ///
    /// If the error kind cannot be determined (eg. the error is unmodeled and the error kind
    /// depends on an HTTP status code that wasn't recorded), return `None`.
    fn error_kind(&self) -> Option<ErrorKind>;

    /// Returns the `code` for this error if one exists
    fn code(&self) -> Option<&str>;
}

#[cfg(test)]
mod test {
    use super::ErrorKind;

    #[test]
    fn classify_status() {
        assert_eq!(ErrorKind::from_status(200), None);
        assert_eq!(ErrorKind::from_status(302), None);
        assert_eq!(ErrorKind::from_status(400), Some(ErrorKind::ClientError));
        assert_eq!(ErrorKind::from_status(404), Some(ErrorKind::ClientError));
        assert_eq!(
            ErrorKind::from_status(429),
            Some(ErrorKind::ThrottlingError)
        );
        assert_eq!(ErrorKind::from_status(500), Some(ErrorKind::ServerError));
        assert_eq!(ErrorKind::from_status(503), Some(ErrorKind::ServerError));
    }
}
