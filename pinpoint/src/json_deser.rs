/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use serde::de::DeserializeOwned;

/// Deserialize the JSON payload of a successful response. An empty body means no payload.
pub(crate) fn deser_payload<T: DeserializeOwned>(
    body: &[u8],
) -> Result<Option<T>, serde_json::Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice(body).map(Some)
}

/// Deserialize a modeled exception from an already-parsed error body
pub(crate) fn deser_exception<T: DeserializeOwned + Default>(
    body: Option<&serde_json::Value>,
) -> Result<T, serde_json::Error> {
    match body {
        Some(value) => serde::Deserialize::deserialize(value),
        None => Ok(T::default()),
    }
}

#[cfg(test)]
mod test {
    use crate::json_deser::{deser_exception, deser_payload};
    use crate::model::MessageBody;

    #[test]
    fn empty_body_has_no_payload() {
        assert_eq!(deser_payload::<MessageBody>(b"").unwrap(), None);
        assert_eq!(deser_payload::<MessageBody>(b" \n").unwrap(), None);
    }

    #[test]
    fn payload_is_parsed() {
        let parsed: MessageBody = deser_payload(br#"{"Message": "Accepted", "RequestID": "abc"}"#)
            .unwrap()
            .expect("payload present");
        assert_eq!(parsed.message(), Some("Accepted"));
        assert_eq!(parsed.request_id(), Some("abc"));
    }

    #[test]
    fn invalid_payload_is_an_error() {
        assert!(deser_payload::<MessageBody>(b"{").is_err());
        assert!(deser_payload::<MessageBody>(br#"{"Message": 5}"#).is_err());
    }

    #[test]
    fn missing_exception_body_is_default() {
        let exception: crate::error::NotFoundException = deser_exception(None).unwrap();
        assert_eq!(exception, crate::error::NotFoundException::default());
    }
}
