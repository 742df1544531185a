/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Utilities for writing Smithy values into a query string.
//!
//! Formatting values into the query string as specified in
//! [httpQuery](https://awslabs.github.io/smithy/1.0/spec/core/http-traits.html#httpquery-trait)

use crate::urlencode::BASE_SET;
use percent_encoding::utf8_percent_encode;

pub fn fmt_string<T: AsRef<str>>(t: T) -> String {
    utf8_percent_encode(t.as_ref(), BASE_SET).to_string()
}

/// Appends `key=value` pairs to a URI being built, inserting `?` and `&` as needed.
pub struct Writer<'a> {
    out: &'a mut String,
    prefix: char,
}

impl<'a> Writer<'a> {
    pub fn new(out: &'a mut String) -> Self {
        Writer { out, prefix: '?' }
    }

    /// Writes `key` and `value`, both percent-encoded.
    pub fn push_kv(&mut self, key: &str, value: &str) {
        self.out.push(self.prefix);
        self.out.push_str(&fmt_string(key));
        self.out.push('=');
        self.out.push_str(&fmt_string(value));
        self.prefix = '&';
    }

    /// Writes `key=value` for a value that is already set, skipping it otherwise.
    pub fn push_optional(&mut self, key: &str, value: Option<&str>) {
        if let Some(value) = value {
            self.push_kv(key, value);
        }
    }
}

#[cfg(test)]
mod test {
    use crate::query::{fmt_string, Writer};
    use http::Uri;
    use proptest::proptest;

    #[test]
    fn url_encode() {
        assert_eq!(fmt_string("y̆").as_str(), "y%CC%86");
        assert_eq!(fmt_string(" ").as_str(), "%20");
        assert_eq!(fmt_string("foo/baz%20").as_str(), "foo%2Fbaz%2520");
        assert_eq!(fmt_string("&=").as_str(), "%26%3D");
        assert_eq!(fmt_string("🐱").as_str(), "%F0%9F%90%B1");
        // `:` needs to be encoded, but only for AWS services
        assert_eq!(fmt_string("a:b"), "a%3Ab")
    }

    #[test]
    fn writer_joins_params() {
        let mut out = String::from("/v1/apps/app/campaigns");
        let mut writer = Writer::new(&mut out);
        writer.push_optional("page-size", Some("25"));
        writer.push_optional("token", None);
        writer.push_kv("prefix", "welcome email");
        assert_eq!(out, "/v1/apps/app/campaigns?page-size=25&prefix=welcome%20email");
    }

    #[test]
    fn writer_without_params_leaves_path_untouched() {
        let mut out = String::from("/v1/templates");
        let mut writer = Writer::new(&mut out);
        writer.push_optional("next-token", None);
        assert_eq!(out, "/v1/templates");
    }

    proptest! {
        #[test]
        fn test_encode_request(s: String) {
            let _: Uri = format!("http://host.example.com/?{}", fmt_string(s)).parse().expect("all strings should be encoded properly");
        }
    }
}
