/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_endpoint::partition::endpoint::{Definition, Protocol};
use aws_endpoint::{CredentialScope, ResolveAwsEndpoint};
use aws_types::region::{ProvideRegion, Region};
use aws_types::SigningService;
use std::sync::Arc;

/// The name operations report in their metadata.
pub(crate) const SERVICE_NAME: &str = "pinpoint";

const SIGNING_SERVICE: &str = "mobiletargeting";

/// Configuration shared by every Pinpoint operation
pub struct Config {
    pub(crate) endpoint_resolver: Arc<dyn ResolveAwsEndpoint>,
    pub(crate) region: Option<Region>,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut config = f.debug_struct("Config");
        config.field("region", &self.region);
        config.finish()
    }
}

impl Config {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Load configuration from the process environment
    ///
    /// The region is read from `AWS_REGION`, then `AWS_DEFAULT_REGION`. When neither is set the
    /// config has no region and endpoint resolution fails when the operation is dispatched.
    pub fn from_env() -> Self {
        Builder::default()
            .region(aws_types::region::default_provider())
            .build()
    }

    pub fn region(&self) -> Option<&Region> {
        self.region.as_ref()
    }

    /// The signature version 4 service signing name to use in the credential scope when signing requests.
    pub fn signing_service(&self) -> &'static str {
        SIGNING_SERVICE
    }
}

#[derive(Default)]
pub struct Builder {
    endpoint_resolver: Option<Arc<dyn ResolveAwsEndpoint>>,
    region: Option<Region>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the endpoint resolver, e.g. to point the client at a local mock
    ///
    /// ```rust
    /// use aws_endpoint::{AwsEndpoint, CredentialScope};
    /// use http::Uri;
    /// let config = pinpoint::Config::builder()
    ///     .endpoint_resolver(AwsEndpoint::new(
    ///         Uri::from_static("http://localhost:8080"),
    ///         CredentialScope::default(),
    ///     ))
    ///     .build();
    /// ```
    pub fn endpoint_resolver(mut self, endpoint_resolver: impl ResolveAwsEndpoint + 'static) -> Self {
        self.endpoint_resolver = Some(Arc::new(endpoint_resolver));
        self
    }

    pub fn region(mut self, region_provider: impl ProvideRegion) -> Self {
        self.region = region_provider.region();
        self
    }

    pub fn build(self) -> Config {
        Config {
            endpoint_resolver: self
                .endpoint_resolver
                .unwrap_or_else(|| Arc::new(endpoint_resolver())),
            region: self.region,
        }
    }
}

/// The endpoint Pinpoint uses for a region: `https://pinpoint.{region}.amazonaws.com`
pub fn endpoint_resolver() -> impl ResolveAwsEndpoint {
    Definition {
        uri_template: "pinpoint.{region}.amazonaws.com",
        protocol: Protocol::Https,
        credential_scope: CredentialScope::builder()
            .service(SigningService::from_static(SIGNING_SERVICE))
            .build(),
    }
}

#[cfg(test)]
mod test {
    use crate::config::{endpoint_resolver, Config};
    use aws_endpoint::ResolveAwsEndpoint;
    use aws_types::os_shim_internal::Env;
    use aws_types::region::{EnvironmentProvider, Region};

    #[test]
    fn region_comes_from_provider() {
        let env = Env::from_slice(&[("AWS_DEFAULT_REGION", "eu-west-1")]);
        let config = Config::builder()
            .region(EnvironmentProvider::with_env(env))
            .build();
        assert_eq!(config.region(), Some(&Region::new("eu-west-1")));
        assert_eq!(config.signing_service(), "mobiletargeting");
    }

    #[test]
    fn no_region_by_default() {
        let config = Config::builder().build();
        assert_eq!(config.region(), None);
        assert!(format!("{:?}", config).contains("region: None"));
    }

    #[test]
    fn default_endpoint() {
        let endpoint = endpoint_resolver()
            .resolve_endpoint(&Region::new("ap-northeast-2"))
            .expect("valid region");
        assert_eq!(
            endpoint.uri().to_string(),
            "https://pinpoint.ap-northeast-2.amazonaws.com/"
        );
        assert_eq!(
            endpoint.credential_scope().service().map(|s| s.as_ref()),
            Some("mobiletargeting")
        );
    }
}
