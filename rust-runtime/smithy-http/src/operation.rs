/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::body::SdkBody;
use crate::property_bag::PropertyBag;
use std::borrow::Cow;
use std::error::Error;
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Metadata {
    operation: Cow<'static, str>,
    service: Cow<'static, str>,
}

impl Metadata {
    pub fn name(&self) -> &str {
        &self.operation
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn new(
        operation: impl Into<Cow<'static, str>>,
        service: impl Into<Cow<'static, str>>,
    ) -> Self {
        Metadata {
            operation: operation.into(),
            service: service.into(),
        }
    }
}

/// An error that occurred while turning an operation input into an HTTP request.
#[derive(Debug, Error)]
pub enum BuildError {
    /// A required field was missing or empty
    #[error("`{field}` was missing. {details}")]
    MissingField {
        field: &'static str,
        details: &'static str,
    },

    /// A field had a value that can't be sent
    #[error("invalid field in input: {field} (Details: {details})")]
    InvalidField { field: &'static str, details: String },

    /// The payload could not be serialized
    #[error("failed to serialize input: {0}")]
    SerializationError(#[source] Box<dyn Error + Send + Sync + 'static>),

    /// The URI or headers produced for the request were invalid
    #[error("failed to construct HTTP request: {0}")]
    InvalidRequest(#[from] http::Error),
}

impl BuildError {
    pub fn serialization(err: impl Into<Box<dyn Error + Send + Sync + 'static>>) -> Self {
        BuildError::SerializationError(err.into())
    }
}

#[non_exhaustive]
#[derive(Debug)]
pub struct Parts<H, R> {
    pub response_handler: H,
    pub retry_policy: R,
    pub metadata: Option<Metadata>,
}

/// An HTTP request ready to be dispatched, along with the handler that parses its response.
#[derive(Debug)]
pub struct Operation<H, R> {
    request: Request,
    parts: Parts<H, R>,
}

impl<H, R> Operation<H, R> {
    pub fn into_request_response(self) -> (Request, Parts<H, R>) {
        (self.request, self.parts)
    }

    pub fn request(&self) -> &Request {
        &self.request
    }

    pub fn request_mut(&mut self) -> &mut Request {
        &mut self.request
    }

    pub fn properties(&self) -> MutexGuard<'_, PropertyBag> {
        self.request.properties()
    }

    pub fn properties_mut(&mut self) -> MutexGuard<'_, PropertyBag> {
        self.request.properties_mut()
    }

    pub fn metadata(&self) -> Option<&Metadata> {
        self.parts.metadata.as_ref()
    }

    pub fn response_handler(&self) -> &H {
        &self.parts.response_handler
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.parts.metadata = Some(metadata);
        self
    }

    pub fn with_retry_policy<R2>(self, retry_policy: R2) -> Operation<H, R2> {
        Operation {
            request: self.request,
            parts: Parts {
                response_handler: self.parts.response_handler,
                retry_policy,
                metadata: self.parts.metadata,
            },
        }
    }

    pub fn try_clone(&self) -> Option<Self>
    where
        H: Clone,
        R: Clone,
    {
        let request = self.request.try_clone()?;
        Some(Operation {
            request,
            parts: Parts {
                response_handler: self.parts.response_handler.clone(),
                retry_policy: self.parts.retry_policy.clone(),
                metadata: self.parts.metadata.clone(),
            },
        })
    }
}

impl<H> Operation<H, ()> {
    pub fn new(request: Request, response_handler: H) -> Self {
        Operation {
            request,
            parts: Parts {
                response_handler,
                retry_policy: (),
                metadata: None,
            },
        }
    }
}

#[derive(Debug)]
pub struct Request {
    /// The underlying HTTP Request
    inner: http::Request<SdkBody>,

    /// Property bag of configuration options
    ///
    /// Middleware can read and write from the property bag and use its
    /// contents to augment the request (see `Request::augment`)
    properties: Arc<Mutex<PropertyBag>>,
}

impl Request {
    pub fn new(base: http::Request<SdkBody>) -> Self {
        Request {
            inner: base,
            properties: Arc::new(Mutex::new(PropertyBag::new())),
        }
    }

    pub fn augment<T>(
        self,
        f: impl FnOnce(http::Request<SdkBody>, &mut PropertyBag) -> Result<http::Request<SdkBody>, T>,
    ) -> Result<Request, T> {
        let inner = {
            let mut properties = lock(&self.properties);
            f(self.inner, &mut properties)?
        };
        Ok(Request {
            inner,
            properties: self.properties,
        })
    }

    pub fn properties_mut(&mut self) -> MutexGuard<'_, PropertyBag> {
        lock(&self.properties)
    }

    pub fn properties(&self) -> MutexGuard<'_, PropertyBag> {
        lock(&self.properties)
    }

    pub fn http(&self) -> &http::Request<SdkBody> {
        &self.inner
    }

    pub fn http_mut(&mut self) -> &mut http::Request<SdkBody> {
        &mut self.inner
    }

    pub fn try_clone(&self) -> Option<Request> {
        let cloned_body = self.inner.body().try_clone()?;
        let mut cloned_request = http::Request::builder()
            .uri(self.inner.uri().clone())
            .method(self.inner.method());
        *cloned_request
            .headers_mut()
            .expect("builder has not been modified, headers must be valid") =
            self.inner.headers().clone();
        let inner = cloned_request
            .body(cloned_body)
            .expect("a clone of a valid request should be a valid request");
        Some(Request {
            inner,
            properties: self.properties.clone(),
        })
    }

    pub fn into_parts(self) -> (http::Request<SdkBody>, Arc<Mutex<PropertyBag>>) {
        (self.inner, self.properties)
    }
}

// A panic while the bag was locked leaves plain data behind, so poisoning is ignored.
fn lock(properties: &Mutex<PropertyBag>) -> MutexGuard<'_, PropertyBag> {
    properties
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod test {
    use crate::body::SdkBody;
    use crate::operation::{BuildError, Metadata, Operation, Request};
    use http::header::{AUTHORIZATION, CONTENT_LENGTH};
    use http::Uri;

    fn request() -> Request {
        Request::new(
            http::Request::builder()
                .uri(Uri::from_static("http://www.amazon.com"))
                .method("POST")
                .header(CONTENT_LENGTH, 456)
                .header(AUTHORIZATION, "Token: hello")
                .body(SdkBody::from("hello world!"))
                .expect("valid request"),
        )
    }

    #[test]
    fn try_clone_clones_all_data() {
        let mut request = request();
        request.properties_mut().insert("hello");
        let cloned = request.try_clone().expect("request is cloneable");

        let (request, config) = cloned.into_parts();
        assert_eq!(request.uri(), &Uri::from_static("http://www.amazon.com"));
        assert_eq!(request.method(), "POST");
        assert_eq!(request.headers().len(), 2);
        assert_eq!(
            request.headers().get(AUTHORIZATION).unwrap(),
            "Token: hello"
        );
        assert_eq!(request.headers().get(CONTENT_LENGTH).unwrap(), "456");
        assert_eq!(request.body().bytes().unwrap(), "hello world!".as_bytes());
        assert_eq!(config.lock().unwrap().get::<&str>(), Some(&"hello"));
    }

    #[test]
    fn augment_sees_properties() {
        let mut request = request();
        request.properties_mut().insert(7_u32);
        let request = request
            .augment(|mut req, props| {
                let value = *props.get::<u32>().expect("inserted above");
                req.headers_mut()
                    .insert("x-value", value.to_string().parse().unwrap());
                props.insert(true);
                Ok::<_, BuildError>(req)
            })
            .expect("infallible");
        assert_eq!(request.http().headers().get("x-value").unwrap(), "7");
        assert_eq!(request.properties().get::<bool>(), Some(&true));
    }

    #[test]
    fn operation_carries_metadata() {
        let op = Operation::new(request(), ()).with_metadata(Metadata::new("GetCampaign", "pinpoint"));
        assert_eq!(op.metadata().map(|m| m.name()), Some("GetCampaign"));
        assert_eq!(op.metadata().map(|m| m.service()), Some("pinpoint"));
        let op = op.with_retry_policy("no-retries");
        let (_, parts) = op.into_request_response();
        assert_eq!(parts.retry_policy, "no-retries");
    }

    #[test]
    fn missing_field_message() {
        let err = BuildError::MissingField {
            field: "application_id",
            details: "cannot be empty or unset",
        };
        assert_eq!(
            err.to_string(),
            "`application_id` was missing. cannot be empty or unset"
        );
    }
}
