/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::{AwsEndpoint, BoxError, CredentialScope, ResolveAwsEndpoint};
use aws_types::region::Region;

/// Endpoint definition for a single service in a partition
#[derive(Debug, Clone)]
pub struct Definition {
    /// URI for the endpoint.
    ///
    /// May contain `{region}` which will replaced with the region during endpoint construction
    pub uri_template: &'static str,

    /// Protocol to use for this endpoint
    pub protocol: Protocol,

    /// Credential scope to set for requests to this endpoint
    pub credential_scope: CredentialScope,
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum Protocol {
    Http,
    Https,
}

impl Protocol {
    fn as_str(&self) -> &'static str {
        match self {
            Protocol::Http => "http",
            Protocol::Https => "https",
        }
    }
}

impl ResolveAwsEndpoint for Definition {
    fn resolve_endpoint(&self, region: &Region) -> Result<AwsEndpoint, BoxError> {
        if region.as_ref().is_empty() {
            return Err("region must not be empty".into());
        }
        let uri = self.uri_template.replace("{region}", region.as_ref());
        let uri = format!("{}://{}", self.protocol.as_str(), uri);
        Ok(AwsEndpoint {
            uri: uri.parse()?,
            credential_scope: CredentialScope {
                service: self.credential_scope.service.clone(),
                region: self
                    .credential_scope
                    .region
                    .clone()
                    .or_else(|| Some(region.clone().into())),
            },
        })
    }
}

#[cfg(test)]
mod test {
    use crate::partition::endpoint::{Definition, Protocol};
    use crate::{CredentialScope, ResolveAwsEndpoint};
    use aws_types::region::{Region, SigningRegion};
    use aws_types::SigningService;

    fn pinpoint() -> Definition {
        Definition {
            uri_template: "pinpoint.{region}.amazonaws.com",
            protocol: Protocol::Https,
            credential_scope: CredentialScope::builder()
                .service(SigningService::from_static("mobiletargeting"))
                .build(),
        }
    }

    #[test]
    fn region_is_substituted() {
        let endpoint = pinpoint()
            .resolve_endpoint(&Region::new("eu-central-1"))
            .expect("valid endpoint");
        assert_eq!(
            endpoint.uri().to_string(),
            "https://pinpoint.eu-central-1.amazonaws.com/"
        );
        assert_eq!(
            endpoint.credential_scope().region(),
            Some(&SigningRegion::from_static("eu-central-1"))
        );
        assert_eq!(
            endpoint.credential_scope().service(),
            Some(&SigningService::from_static("mobiletargeting"))
        );
    }

    #[test]
    fn empty_region_is_rejected() {
        assert!(pinpoint().resolve_endpoint(&Region::new("")).is_err());
    }

    #[test]
    fn invalid_region_is_rejected() {
        assert!(pinpoint()
            .resolve_endpoint(&Region::new("not a region"))
            .is_err());
    }
}
