/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use http::{HeaderMap, HeaderValue};
use std::error::Error;
use std::fmt::{self, Debug, Formatter};
use std::pin::Pin;
use std::task::{Context, Poll};

type BodyError = Box<dyn Error + Send + Sync>;

/// SdkBody type
///
/// This is the Body used for dispatching all HTTP Requests. Every Pinpoint request body is a
/// fully buffered JSON document, so the body is always a single chunk.
pub struct SdkBody(Inner);

enum Inner {
    Once(Option<Bytes>),
    Taken,
}

impl Debug for SdkBody {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Inner::Once(Some(bytes)) => f.debug_tuple("Once").field(bytes).finish(),
            Inner::Once(None) => f.write_str("Empty"),
            Inner::Taken => f.write_str("Taken"),
        }
    }
}

impl SdkBody {
    pub fn empty() -> Self {
        SdkBody(Inner::Once(None))
    }

    fn poll_inner(&mut self) -> Poll<Option<Result<Bytes, BodyError>>> {
        match &mut self.0 {
            Inner::Once(opt) => {
                let data = opt.take();
                self.0 = Inner::Taken;
                match data {
                    Some(bytes) if !bytes.is_empty() => Poll::Ready(Some(Ok(bytes))),
                    _ => Poll::Ready(None),
                }
            }
            Inner::Taken => Poll::Ready(None),
        }
    }

    /// If possible, return a reference to this body as `&[u8]`
    ///
    /// If this SdkBody has already been polled, this will return `None`.
    pub fn bytes(&self) -> Option<&[u8]> {
        match &self.0 {
            Inner::Once(Some(bytes)) => Some(bytes),
            Inner::Once(None) => Some(&[]),
            Inner::Taken => None,
        }
    }

    pub fn try_clone(&self) -> Option<Self> {
        match &self.0 {
            Inner::Once(bytes) => Some(SdkBody(Inner::Once(bytes.clone()))),
            Inner::Taken => None,
        }
    }

    pub fn content_length(&self) -> Option<u64> {
        self.bytes().map(|b| b.len() as u64)
    }
}

impl From<&str> for SdkBody {
    fn from(s: &str) -> Self {
        SdkBody::from(Bytes::copy_from_slice(s.as_bytes()))
    }
}

impl From<String> for SdkBody {
    fn from(s: String) -> Self {
        SdkBody::from(s.into_bytes())
    }
}

impl From<Bytes> for SdkBody {
    fn from(bytes: Bytes) -> Self {
        SdkBody(Inner::Once(Some(bytes)))
    }
}

impl From<Vec<u8>> for SdkBody {
    fn from(data: Vec<u8>) -> SdkBody {
        Self::from(Bytes::from(data))
    }
}

impl http_body::Body for SdkBody {
    type Data = Bytes;
    type Error = BodyError;

    fn poll_data(
        mut self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
    ) -> Poll<Option<Result<Self::Data, Self::Error>>> {
        self.poll_inner()
    }

    fn poll_trailers(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
    ) -> Poll<Result<Option<HeaderMap<HeaderValue>>, Self::Error>> {
        Poll::Ready(Ok(None))
    }

    fn is_end_stream(&self) -> bool {
        match &self.0 {
            Inner::Once(Some(bytes)) => bytes.is_empty(),
            _ => true,
        }
    }

    fn size_hint(&self) -> http_body::SizeHint {
        match self.content_length() {
            Some(len) => http_body::SizeHint::with_exact(len),
            None => http_body::SizeHint::default(),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::body::SdkBody;
    use http_body::Body;

    fn is_send<T: Send>() {}

    #[test]
    fn valid_size_hint() {
        assert_eq!(SdkBody::from("hello").size_hint().exact(), Some(5));
        assert_eq!(SdkBody::from("").size_hint().exact(), Some(0));
        assert_eq!(SdkBody::empty().size_hint().exact(), Some(0));
    }

    #[test]
    fn sdkbody_debug_once() {
        let body = SdkBody::from("123");
        assert!(format!("{:?}", body).contains("Once"));
    }

    #[tokio::test]
    async fn body_is_drained_once() {
        let mut body = SdkBody::from("abc");
        let data = body
            .data()
            .await
            .expect("one chunk")
            .expect("no error");
        assert_eq!(data.as_ref(), b"abc");
        assert!(body.data().await.is_none());
        assert!(body.try_clone().is_none());
        assert!(body.bytes().is_none());
    }

    #[test]
    fn clone_keeps_contents() {
        let body = SdkBody::from(vec![1_u8, 2, 3]);
        let cloned = body.try_clone().expect("unpolled body is cloneable");
        assert_eq!(cloned.bytes(), Some(&[1_u8, 2, 3][..]));
    }

    #[test]
    fn send_body() {
        is_send::<SdkBody>()
    }
}
