/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use http::Response;

/// `ParseHttpResponse` is a generic trait for parsing structured data from HTTP responses.
///
/// `Output` is unconstrained: request/response operations use something like
/// `Result<GetCampaignOutput, GetCampaignError>`.
///
/// The split between `parse_unloaded` and `parse_loaded` keeps the parsing code pure and sync
/// whenever possible and delegates actually reading the HTTP response to the caller when the
/// required behavior is simply "read to the end."
pub trait ParseHttpResponse<B> {
    /// Output type of the HttpResponse.
    type Output;

    /// Parse an HTTP response without reading the body. If the body must be provided to proceed,
    /// return `None`
    fn parse_unloaded(&self, response: &mut http::Response<B>) -> Option<Self::Output>;

    /// Parse an HTTP response from a fully loaded body.
    fn parse_loaded(&self, response: &http::Response<Bytes>) -> Self::Output;
}

/// Convenience Trait for non-streaming APIs
///
/// `ParseStrictResponse` enables operations that _never_ need to stream the body incrementally to
/// have cleaner implementations. There is a blanket implementation of `ParseHttpResponse`.
pub trait ParseStrictResponse {
    type Output;
    fn parse(&self, response: &Response<Bytes>) -> Self::Output;
}

impl<B, T> ParseHttpResponse<B> for T
where
    T: ParseStrictResponse,
{
    type Output = T::Output;

    fn parse_unloaded(&self, _response: &mut Response<B>) -> Option<Self::Output> {
        None
    }

    fn parse_loaded(&self, response: &Response<Bytes>) -> Self::Output {
        self.parse(response)
    }
}

#[cfg(test)]
mod test {
    use crate::response::{ParseHttpResponse, ParseStrictResponse};
    use bytes::Bytes;
    use http::Response;

    struct StatusOnly;
    impl ParseStrictResponse for StatusOnly {
        type Output = u16;
        fn parse(&self, response: &Response<Bytes>) -> Self::Output {
            response.status().as_u16()
        }
    }

    #[test]
    fn strict_parsers_never_parse_unloaded() {
        let mut response = Response::builder().status(202).body(()).unwrap();
        assert_eq!(
            ParseHttpResponse::<()>::parse_unloaded(&StatusOnly, &mut response),
            None
        );
        let loaded = Response::builder()
            .status(202)
            .body(Bytes::from_static(b"{}"))
            .unwrap();
        assert_eq!(
            ParseHttpResponse::<()>::parse_loaded(&StatusOnly, &loaded),
            202
        );
    }
}
