/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Errors returned by Pinpoint operations.
//!
//! Every operation has its own error type, `<Operation>Error`, holding an `<Operation>ErrorKind`
//! and the generic [`smithy_types::Error`] metadata (code, message and request ID) read from the
//! response. Modeled exceptions are listed at the bottom of this module.

macro_rules! operation_error {
    ($(#[$doc:meta])* $error:ident, $kind:ident) => {
        $(#[$doc])*
        #[non_exhaustive]
        #[derive(std::fmt::Debug)]
        pub struct $error {
            pub kind: $kind,
            pub(crate) meta: smithy_types::Error,
            /// HTTP status of the error response, when one was received
            pub(crate) status: std::option::Option<u16>,
        }

        #[non_exhaustive]
        #[derive(std::fmt::Debug)]
        pub enum $kind {
            BadRequestException(crate::error::BadRequestException),
            ForbiddenException(crate::error::ForbiddenException),
            InternalServerErrorException(crate::error::InternalServerErrorException),
            MethodNotAllowedException(crate::error::MethodNotAllowedException),
            NotFoundException(crate::error::NotFoundException),
            TooManyRequestsException(crate::error::TooManyRequestsException),
            /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
            Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
        }

        impl std::fmt::Display for $error {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match &self.kind {
                    $kind::BadRequestException(inner) => std::fmt::Display::fmt(inner, f),
                    $kind::ForbiddenException(inner) => std::fmt::Display::fmt(inner, f),
                    $kind::InternalServerErrorException(inner) => std::fmt::Display::fmt(inner, f),
                    $kind::MethodNotAllowedException(inner) => std::fmt::Display::fmt(inner, f),
                    $kind::NotFoundException(inner) => std::fmt::Display::fmt(inner, f),
                    $kind::TooManyRequestsException(inner) => std::fmt::Display::fmt(inner, f),
                    $kind::Unhandled(inner) => std::fmt::Display::fmt(inner, f),
                }
            }
        }

        impl smithy_types::retry::ProvideErrorKind for $error {
            fn error_kind(&self) -> std::option::Option<smithy_types::retry::ErrorKind> {
                match &self.kind {
                    $kind::TooManyRequestsException(_) => {
                        Some(smithy_types::retry::ErrorKind::ThrottlingError)
                    }
                    $kind::InternalServerErrorException(_) => {
                        Some(smithy_types::retry::ErrorKind::ServerError)
                    }
                    $kind::Unhandled(_) => self
                        .status
                        .and_then(smithy_types::retry::ErrorKind::from_status),
                    _ => None,
                }
            }

            fn code(&self) -> std::option::Option<&str> {
                $error::code(self)
            }
        }

        impl $error {
            pub fn new(kind: $kind, meta: smithy_types::Error) -> Self {
                Self {
                    kind,
                    meta,
                    status: None,
                }
            }

            pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
                Self {
                    kind: $kind::Unhandled(err.into()),
                    meta: Default::default(),
                    status: None,
                }
            }

            pub fn generic(err: smithy_types::Error) -> Self {
                Self {
                    meta: err.clone(),
                    kind: $kind::Unhandled(err.into()),
                    status: None,
                }
            }

            pub fn message(&self) -> std::option::Option<&str> {
                self.meta.message()
            }

            pub fn meta(&self) -> &smithy_types::Error {
                &self.meta
            }

            pub fn request_id(&self) -> std::option::Option<&str> {
                self.meta.request_id()
            }

            pub fn code(&self) -> std::option::Option<&str> {
                self.meta.code()
            }

            pub fn is_bad_request_exception(&self) -> bool {
                matches!(&self.kind, $kind::BadRequestException(_))
            }

            pub fn is_forbidden_exception(&self) -> bool {
                matches!(&self.kind, $kind::ForbiddenException(_))
            }

            pub fn is_internal_server_error_exception(&self) -> bool {
                matches!(&self.kind, $kind::InternalServerErrorException(_))
            }

            pub fn is_method_not_allowed_exception(&self) -> bool {
                matches!(&self.kind, $kind::MethodNotAllowedException(_))
            }

            pub fn is_not_found_exception(&self) -> bool {
                matches!(&self.kind, $kind::NotFoundException(_))
            }

            pub fn is_too_many_requests_exception(&self) -> bool {
                matches!(&self.kind, $kind::TooManyRequestsException(_))
            }

            pub(crate) fn from_response(response: &http::Response<bytes::Bytes>) -> Self {
                let mut error = match crate::json_errors::parse_error(response) {
                    crate::json_errors::ParsedError::Modeled(exception, meta) => {
                        Self::new($kind::from_exception(exception), meta)
                    }
                    crate::json_errors::ParsedError::Generic(meta) => Self::generic(meta),
                    crate::json_errors::ParsedError::Malformed(err, meta) => {
                        Self::new($kind::Unhandled(Box::new(err)), meta)
                    }
                };
                error.status = Some(response.status().as_u16());
                error
            }
        }

        impl std::error::Error for $error {
            fn source(&self) -> std::option::Option<&(dyn std::error::Error + 'static)> {
                match &self.kind {
                    $kind::BadRequestException(inner) => Some(inner),
                    $kind::ForbiddenException(inner) => Some(inner),
                    $kind::InternalServerErrorException(inner) => Some(inner),
                    $kind::MethodNotAllowedException(inner) => Some(inner),
                    $kind::NotFoundException(inner) => Some(inner),
                    $kind::TooManyRequestsException(inner) => Some(inner),
                    $kind::Unhandled(inner) => Some(inner.as_ref()),
                }
            }
        }

        impl $kind {
            pub(crate) fn from_exception(exception: crate::error::ServiceException) -> Self {
                match exception {
                    crate::error::ServiceException::BadRequest(inner) => {
                        $kind::BadRequestException(inner)
                    }
                    crate::error::ServiceException::Forbidden(inner) => $kind::ForbiddenException(inner),
                    crate::error::ServiceException::InternalServerError(inner) => {
                        $kind::InternalServerErrorException(inner)
                    }
                    crate::error::ServiceException::MethodNotAllowed(inner) => {
                        $kind::MethodNotAllowedException(inner)
                    }
                    crate::error::ServiceException::NotFound(inner) => $kind::NotFoundException(inner),
                    crate::error::ServiceException::TooManyRequests(inner) => {
                        $kind::TooManyRequestsException(inner)
                    }
                }
            }
        }
    };
}

/// A modeled exception decoded from an error response, before it is attached to an operation error.
#[derive(std::fmt::Debug)]
pub(crate) enum ServiceException {
    BadRequest(BadRequestException),
    Forbidden(ForbiddenException),
    InternalServerError(InternalServerErrorException),
    MethodNotAllowed(MethodNotAllowedException),
    NotFound(NotFoundException),
    TooManyRequests(TooManyRequestsException),
}

operation_error!(
    /// Error type for the `CreateCampaign` operation.
    CreateCampaignError,
    CreateCampaignErrorKind
);
operation_error!(
    /// Error type for the `CreateImportJob` operation.
    CreateImportJobError,
    CreateImportJobErrorKind
);
operation_error!(
    /// Error type for the `CreateSegment` operation.
    CreateSegmentError,
    CreateSegmentErrorKind
);
operation_error!(
    /// Error type for the `DeleteApnsChannel` operation.
    DeleteApnsChannelError,
    DeleteApnsChannelErrorKind
);
operation_error!(
    /// Error type for the `DeleteCampaign` operation.
    DeleteCampaignError,
    DeleteCampaignErrorKind
);
operation_error!(
    /// Error type for the `DeleteGcmChannel` operation.
    DeleteGcmChannelError,
    DeleteGcmChannelErrorKind
);
operation_error!(
    /// Error type for the `DeleteSegment` operation.
    DeleteSegmentError,
    DeleteSegmentErrorKind
);
operation_error!(
    /// Error type for the `GetApnsChannel` operation.
    GetApnsChannelError,
    GetApnsChannelErrorKind
);
operation_error!(
    /// Error type for the `GetApplicationSettings` operation.
    GetApplicationSettingsError,
    GetApplicationSettingsErrorKind
);
operation_error!(
    /// Error type for the `GetCampaign` operation.
    GetCampaignError,
    GetCampaignErrorKind
);
operation_error!(
    /// Error type for the `GetCampaignActivities` operation.
    GetCampaignActivitiesError,
    GetCampaignActivitiesErrorKind
);
operation_error!(
    /// Error type for the `GetCampaignVersion` operation.
    GetCampaignVersionError,
    GetCampaignVersionErrorKind
);
operation_error!(
    /// Error type for the `GetCampaignVersions` operation.
    GetCampaignVersionsError,
    GetCampaignVersionsErrorKind
);
operation_error!(
    /// Error type for the `GetCampaigns` operation.
    GetCampaignsError,
    GetCampaignsErrorKind
);
operation_error!(
    /// Error type for the `GetEndpoint` operation.
    GetEndpointError,
    GetEndpointErrorKind
);
operation_error!(
    /// Error type for the `GetGcmChannel` operation.
    GetGcmChannelError,
    GetGcmChannelErrorKind
);
operation_error!(
    /// Error type for the `GetImportJob` operation.
    GetImportJobError,
    GetImportJobErrorKind
);
operation_error!(
    /// Error type for the `GetImportJobs` operation.
    GetImportJobsError,
    GetImportJobsErrorKind
);
operation_error!(
    /// Error type for the `GetSegment` operation.
    GetSegmentError,
    GetSegmentErrorKind
);
operation_error!(
    /// Error type for the `GetSegmentImportJobs` operation.
    GetSegmentImportJobsError,
    GetSegmentImportJobsErrorKind
);
operation_error!(
    /// Error type for the `GetSegmentVersion` operation.
    GetSegmentVersionError,
    GetSegmentVersionErrorKind
);
operation_error!(
    /// Error type for the `GetSegmentVersions` operation.
    GetSegmentVersionsError,
    GetSegmentVersionsErrorKind
);
operation_error!(
    /// Error type for the `GetSegments` operation.
    GetSegmentsError,
    GetSegmentsErrorKind
);
operation_error!(
    /// Error type for the `UpdateApnsChannel` operation.
    UpdateApnsChannelError,
    UpdateApnsChannelErrorKind
);
operation_error!(
    /// Error type for the `UpdateApplicationSettings` operation.
    UpdateApplicationSettingsError,
    UpdateApplicationSettingsErrorKind
);
operation_error!(
    /// Error type for the `UpdateCampaign` operation.
    UpdateCampaignError,
    UpdateCampaignErrorKind
);
operation_error!(
    /// Error type for the `UpdateEndpoint` operation.
    UpdateEndpointError,
    UpdateEndpointErrorKind
);
operation_error!(
    /// Error type for the `UpdateEndpointsBatch` operation.
    UpdateEndpointsBatchError,
    UpdateEndpointsBatchErrorKind
);
operation_error!(
    /// Error type for the `UpdateGcmChannel` operation.
    UpdateGcmChannelError,
    UpdateGcmChannelErrorKind
);
operation_error!(
    /// Error type for the `UpdateSegment` operation.
    UpdateSegmentError,
    UpdateSegmentErrorKind
);
operation_error!(
    /// Error type for the `SendMessages` operation.
    SendMessagesError,
    SendMessagesErrorKind
);
operation_error!(
    /// Error type for the `CreateJourney` operation.
    CreateJourneyError,
    CreateJourneyErrorKind
);
operation_error!(
    /// Error type for the `GetJourney` operation.
    GetJourneyError,
    GetJourneyErrorKind
);
operation_error!(
    /// Error type for the `UpdateJourney` operation.
    UpdateJourneyError,
    UpdateJourneyErrorKind
);
operation_error!(
    /// Error type for the `DeleteJourney` operation.
    DeleteJourneyError,
    DeleteJourneyErrorKind
);
operation_error!(
    /// Error type for the `ListJourneys` operation.
    ListJourneysError,
    ListJourneysErrorKind
);
operation_error!(
    /// Error type for the `GetJourneyExecutionMetrics` operation.
    GetJourneyExecutionMetricsError,
    GetJourneyExecutionMetricsErrorKind
);
operation_error!(
    /// Error type for the `CreateEmailTemplate` operation.
    CreateEmailTemplateError,
    CreateEmailTemplateErrorKind
);
operation_error!(
    /// Error type for the `GetEmailTemplate` operation.
    GetEmailTemplateError,
    GetEmailTemplateErrorKind
);
operation_error!(
    /// Error type for the `ListTemplates` operation.
    ListTemplatesError,
    ListTemplatesErrorKind
);

/// Provides information about an API request or response.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct BadRequestException {
    #[serde(rename = "Message", alias = "message", skip_serializing_if = "Option::is_none")]
    pub message: std::option::Option<std::string::String>,
    #[serde(rename = "RequestID", skip_serializing_if = "Option::is_none")]
    pub request_id: std::option::Option<std::string::String>,
}
impl BadRequestException {
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
    pub fn request_id(&self) -> std::option::Option<&str> {
        self.request_id.as_deref()
    }
    pub(crate) fn with_meta(mut self, meta: &smithy_types::Error) -> Self {
        if self.message.is_none() {
            self.message = meta.message().map(str::to_owned);
        }
        if self.request_id.is_none() {
            self.request_id = meta.request_id().map(str::to_owned);
        }
        self
    }
}
/// See [`BadRequestException`](crate::error::BadRequestException)
pub mod bad_request_exception {
    /// A builder for [`BadRequestException`](crate::error::BadRequestException)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) message: std::option::Option<std::string::String>,
        pub(crate) request_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        pub fn request_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.request_id = Some(input.into());
            self
        }
        pub fn set_request_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.request_id = input;
            self
        }
        /// Consumes the builder and constructs a [`BadRequestException`](crate::error::BadRequestException)
        pub fn build(self) -> crate::error::BadRequestException {
            crate::error::BadRequestException {
                message: self.message,
                request_id: self.request_id,
            }
        }
    }
}
impl BadRequestException {
    /// Creates a new builder-style object to manufacture [`BadRequestException`](crate::error::BadRequestException)
    pub fn builder() -> crate::error::bad_request_exception::Builder {
        crate::error::bad_request_exception::Builder::default()
    }
}

impl std::fmt::Display for BadRequestException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BadRequestException")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for BadRequestException {}

/// Provides information about an API request or response.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct ForbiddenException {
    #[serde(rename = "Message", alias = "message", skip_serializing_if = "Option::is_none")]
    pub message: std::option::Option<std::string::String>,
    #[serde(rename = "RequestID", skip_serializing_if = "Option::is_none")]
    pub request_id: std::option::Option<std::string::String>,
}
impl ForbiddenException {
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
    pub fn request_id(&self) -> std::option::Option<&str> {
        self.request_id.as_deref()
    }
    pub(crate) fn with_meta(mut self, meta: &smithy_types::Error) -> Self {
        if self.message.is_none() {
            self.message = meta.message().map(str::to_owned);
        }
        if self.request_id.is_none() {
            self.request_id = meta.request_id().map(str::to_owned);
        }
        self
    }
}
/// See [`ForbiddenException`](crate::error::ForbiddenException)
pub mod forbidden_exception {
    /// A builder for [`ForbiddenException`](crate::error::ForbiddenException)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) message: std::option::Option<std::string::String>,
        pub(crate) request_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        pub fn request_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.request_id = Some(input.into());
            self
        }
        pub fn set_request_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.request_id = input;
            self
        }
        /// Consumes the builder and constructs a [`ForbiddenException`](crate::error::ForbiddenException)
        pub fn build(self) -> crate::error::ForbiddenException {
            crate::error::ForbiddenException {
                message: self.message,
                request_id: self.request_id,
            }
        }
    }
}
impl ForbiddenException {
    /// Creates a new builder-style object to manufacture [`ForbiddenException`](crate::error::ForbiddenException)
    pub fn builder() -> crate::error::forbidden_exception::Builder {
        crate::error::forbidden_exception::Builder::default()
    }
}

impl std::fmt::Display for ForbiddenException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ForbiddenException")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for ForbiddenException {}

/// Provides information about an API request or response.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct InternalServerErrorException {
    #[serde(rename = "Message", alias = "message", skip_serializing_if = "Option::is_none")]
    pub message: std::option::Option<std::string::String>,
    #[serde(rename = "RequestID", skip_serializing_if = "Option::is_none")]
    pub request_id: std::option::Option<std::string::String>,
}
impl InternalServerErrorException {
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
    pub fn request_id(&self) -> std::option::Option<&str> {
        self.request_id.as_deref()
    }
    pub(crate) fn with_meta(mut self, meta: &smithy_types::Error) -> Self {
        if self.message.is_none() {
            self.message = meta.message().map(str::to_owned);
        }
        if self.request_id.is_none() {
            self.request_id = meta.request_id().map(str::to_owned);
        }
        self
    }
}
/// See [`InternalServerErrorException`](crate::error::InternalServerErrorException)
pub mod internal_server_error_exception {
    /// A builder for [`InternalServerErrorException`](crate::error::InternalServerErrorException)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) message: std::option::Option<std::string::String>,
        pub(crate) request_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        pub fn request_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.request_id = Some(input.into());
            self
        }
        pub fn set_request_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.request_id = input;
            self
        }
        /// Consumes the builder and constructs a [`InternalServerErrorException`](crate::error::InternalServerErrorException)
        pub fn build(self) -> crate::error::InternalServerErrorException {
            crate::error::InternalServerErrorException {
                message: self.message,
                request_id: self.request_id,
            }
        }
    }
}
impl InternalServerErrorException {
    /// Creates a new builder-style object to manufacture [`InternalServerErrorException`](crate::error::InternalServerErrorException)
    pub fn builder() -> crate::error::internal_server_error_exception::Builder {
        crate::error::internal_server_error_exception::Builder::default()
    }
}

impl std::fmt::Display for InternalServerErrorException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "InternalServerErrorException")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for InternalServerErrorException {}

/// Provides information about an API request or response.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct MethodNotAllowedException {
    #[serde(rename = "Message", alias = "message", skip_serializing_if = "Option::is_none")]
    pub message: std::option::Option<std::string::String>,
    #[serde(rename = "RequestID", skip_serializing_if = "Option::is_none")]
    pub request_id: std::option::Option<std::string::String>,
}
impl MethodNotAllowedException {
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
    pub fn request_id(&self) -> std::option::Option<&str> {
        self.request_id.as_deref()
    }
    pub(crate) fn with_meta(mut self, meta: &smithy_types::Error) -> Self {
        if self.message.is_none() {
            self.message = meta.message().map(str::to_owned);
        }
        if self.request_id.is_none() {
            self.request_id = meta.request_id().map(str::to_owned);
        }
        self
    }
}
/// See [`MethodNotAllowedException`](crate::error::MethodNotAllowedException)
pub mod method_not_allowed_exception {
    /// A builder for [`MethodNotAllowedException`](crate::error::MethodNotAllowedException)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) message: std::option::Option<std::string::String>,
        pub(crate) request_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        pub fn request_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.request_id = Some(input.into());
            self
        }
        pub fn set_request_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.request_id = input;
            self
        }
        /// Consumes the builder and constructs a [`MethodNotAllowedException`](crate::error::MethodNotAllowedException)
        pub fn build(self) -> crate::error::MethodNotAllowedException {
            crate::error::MethodNotAllowedException {
                message: self.message,
                request_id: self.request_id,
            }
        }
    }
}
impl MethodNotAllowedException {
    /// Creates a new builder-style object to manufacture [`MethodNotAllowedException`](crate::error::MethodNotAllowedException)
    pub fn builder() -> crate::error::method_not_allowed_exception::Builder {
        crate::error::method_not_allowed_exception::Builder::default()
    }
}

impl std::fmt::Display for MethodNotAllowedException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MethodNotAllowedException")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for MethodNotAllowedException {}

/// Provides information about an API request or response.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct NotFoundException {
    #[serde(rename = "Message", alias = "message", skip_serializing_if = "Option::is_none")]
    pub message: std::option::Option<std::string::String>,
    #[serde(rename = "RequestID", skip_serializing_if = "Option::is_none")]
    pub request_id: std::option::Option<std::string::String>,
}
impl NotFoundException {
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
    pub fn request_id(&self) -> std::option::Option<&str> {
        self.request_id.as_deref()
    }
    pub(crate) fn with_meta(mut self, meta: &smithy_types::Error) -> Self {
        if self.message.is_none() {
            self.message = meta.message().map(str::to_owned);
        }
        if self.request_id.is_none() {
            self.request_id = meta.request_id().map(str::to_owned);
        }
        self
    }
}
/// See [`NotFoundException`](crate::error::NotFoundException)
pub mod not_found_exception {
    /// A builder for [`NotFoundException`](crate::error::NotFoundException)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) message: std::option::Option<std::string::String>,
        pub(crate) request_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        pub fn request_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.request_id = Some(input.into());
            self
        }
        pub fn set_request_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.request_id = input;
            self
        }
        /// Consumes the builder and constructs a [`NotFoundException`](crate::error::NotFoundException)
        pub fn build(self) -> crate::error::NotFoundException {
            crate::error::NotFoundException {
                message: self.message,
                request_id: self.request_id,
            }
        }
    }
}
impl NotFoundException {
    /// Creates a new builder-style object to manufacture [`NotFoundException`](crate::error::NotFoundException)
    pub fn builder() -> crate::error::not_found_exception::Builder {
        crate::error::not_found_exception::Builder::default()
    }
}

impl std::fmt::Display for NotFoundException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NotFoundException")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for NotFoundException {}

/// Provides information about an API request or response.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::default::Default,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(default)]
pub struct TooManyRequestsException {
    #[serde(rename = "Message", alias = "message", skip_serializing_if = "Option::is_none")]
    pub message: std::option::Option<std::string::String>,
    #[serde(rename = "RequestID", skip_serializing_if = "Option::is_none")]
    pub request_id: std::option::Option<std::string::String>,
}
impl TooManyRequestsException {
    pub fn message(&self) -> std::option::Option<&str> {
        self.message.as_deref()
    }
    pub fn request_id(&self) -> std::option::Option<&str> {
        self.request_id.as_deref()
    }
    pub(crate) fn with_meta(mut self, meta: &smithy_types::Error) -> Self {
        if self.message.is_none() {
            self.message = meta.message().map(str::to_owned);
        }
        if self.request_id.is_none() {
            self.request_id = meta.request_id().map(str::to_owned);
        }
        self
    }
}
/// See [`TooManyRequestsException`](crate::error::TooManyRequestsException)
pub mod too_many_requests_exception {
    /// A builder for [`TooManyRequestsException`](crate::error::TooManyRequestsException)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) message: std::option::Option<std::string::String>,
        pub(crate) request_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        pub fn request_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.request_id = Some(input.into());
            self
        }
        pub fn set_request_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.request_id = input;
            self
        }
        /// Consumes the builder and constructs a [`TooManyRequestsException`](crate::error::TooManyRequestsException)
        pub fn build(self) -> crate::error::TooManyRequestsException {
            crate::error::TooManyRequestsException {
                message: self.message,
                request_id: self.request_id,
            }
        }
    }
}
impl TooManyRequestsException {
    /// Creates a new builder-style object to manufacture [`TooManyRequestsException`](crate::error::TooManyRequestsException)
    pub fn builder() -> crate::error::too_many_requests_exception::Builder {
        crate::error::too_many_requests_exception::Builder::default()
    }
}

impl std::fmt::Display for TooManyRequestsException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TooManyRequestsException")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for TooManyRequestsException {}
