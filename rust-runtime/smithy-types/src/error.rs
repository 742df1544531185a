/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Metadata shared by every error returned from a service.

use std::fmt;
use std::fmt::{Display, Formatter};

/// Generic error metadata
///
/// Every operation error carries one of these. For modeled errors it duplicates information
/// found on the error shape; for unmodeled errors it is all the SDK knows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Error {
    code: Option<String>,
    message: Option<String>,
    request_id: Option<String>,
}

/// Builder for [`Error`].
#[derive(Debug, Clone, Default)]
pub struct Builder {
    inner: Error,
}

impl Builder {
    /// Sets the error message.
    pub fn message(&mut self, message: impl Into<String>) -> &mut Self {
        self.inner.message = Some(message.into());
        self
    }

    /// Sets the error code.
    pub fn code(&mut self, code: impl Into<String>) -> &mut Self {
        self.inner.code = Some(code.into());
        self
    }

    /// Sets the request ID the error happened for.
    pub fn request_id(&mut self, request_id: impl Into<String>) -> &mut Self {
        self.inner.request_id = Some(request_id.into());
        self
    }

    /// Creates the error.
    pub fn build(&mut self) -> Error {
        std::mem::take(&mut self.inner)
    }
}

impl Error {
    /// Returns the error code.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }
    /// Returns the error message.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
    /// Returns the request ID the error occurred for, if it's available.
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }
    /// Creates an `Error` builder.
    pub fn builder() -> Builder {
        Builder::default()
    }
    /// Converts an `Error` into a builder.
    pub fn into_builder(self) -> Builder {
        Builder { inner: self }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut fmt = f.debug_struct("Error");
        if let Some(code) = &self.code {
            fmt.field("code", code);
        }
        if let Some(message) = &self.message {
            fmt.field("message", message);
        }
        if let Some(req_id) = &self.request_id {
            fmt.field("request_id", req_id);
        }
        fmt.finish()
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod test {
    use super::Error;

    #[test]
    fn builder_sets_all_fields() {
        let err = Error::builder()
            .code("NotFoundException")
            .message("Resource not found")
            .request_id("abc-123")
            .build();
        assert_eq!(err.code(), Some("NotFoundException"));
        assert_eq!(err.message(), Some("Resource not found"));
        assert_eq!(err.request_id(), Some("abc-123"));
        assert_eq!(
            format!("{}", err),
            r#"Error { code: "NotFoundException", message: "Resource not found", request_id: "abc-123" }"#
        );
    }

    #[test]
    fn empty_error_displays_name() {
        assert_eq!(format!("{}", Error::default()), "Error");
    }

    #[test]
    fn into_builder_keeps_existing_fields() {
        let err = Error::builder().code("Throttled").build();
        let err = err.into_builder().message("slow down").build();
        assert_eq!(err.code(), Some("Throttled"));
        assert_eq!(err.message(), Some("slow down"));
        assert_eq!(err.request_id(), None);
    }
}
