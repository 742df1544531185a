/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

pub mod partition;

use aws_types::region::{Region, SigningRegion};
use aws_types::SigningService;
use http::uri::{Authority, PathAndQuery, Scheme};
use http::Uri;
use smithy_http::middleware::MapRequest;
use smithy_http::operation::Request;
use smithy_http::property_bag::PropertyBag;
use std::error::Error;
use std::fmt;
use std::fmt::{Debug, Display, Formatter};
use std::sync::Arc;

pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Endpoint to connect to an AWS Service
///
/// An `AwsEndpoint` captures all necessary information needed to connect to an AWS service,
/// including:
/// - The URI of the endpoint (needed to actually send the request)
/// - The name of the service (needed downstream for signing)
/// - The signing region (which may differ from the actual region)
#[derive(Clone, Debug)]
pub struct AwsEndpoint {
    uri: Uri,
    credential_scope: CredentialScope,
}

impl AwsEndpoint {
    pub fn new(uri: Uri, credential_scope: CredentialScope) -> Self {
        AwsEndpoint {
            uri,
            credential_scope,
        }
    }

    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    pub fn credential_scope(&self) -> &CredentialScope {
        &self.credential_scope
    }

    /// Apply this endpoint to a relative request URI
    ///
    /// The scheme and authority come from the endpoint. A non-root endpoint path is prepended to
    /// the request path.
    pub fn set_endpoint(&self, uri: &mut Uri) -> Result<(), BoxError> {
        let scheme = self.uri.scheme().cloned().unwrap_or(Scheme::HTTPS);
        let authority: Authority = self
            .uri
            .authority()
            .cloned()
            .ok_or("endpoint URI has no authority")?;
        let prefix = self.uri.path().trim_end_matches('/');
        let path_and_query = match uri.path_and_query() {
            Some(pq) => format!("{}{}", prefix, pq.as_str()),
            None => format!("{}/", prefix),
        };
        let path_and_query: PathAndQuery = path_and_query.parse()?;
        *uri = Uri::builder()
            .scheme(scheme)
            .authority(authority)
            .path_and_query(path_and_query)
            .build()?;
        Ok(())
    }
}

/// The scope of the credentials used to sign requests to an endpoint
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct CredentialScope {
    region: Option<SigningRegion>,
    service: Option<SigningService>,
}

impl CredentialScope {
    pub fn builder() -> credential_scope::Builder {
        credential_scope::Builder::default()
    }

    pub fn region(&self) -> Option<&SigningRegion> {
        self.region.as_ref()
    }

    pub fn service(&self) -> Option<&SigningService> {
        self.service.as_ref()
    }
}

pub mod credential_scope {
    use crate::CredentialScope;
    use aws_types::region::SigningRegion;
    use aws_types::SigningService;

    #[derive(Debug, Default)]
    pub struct Builder {
        region: Option<SigningRegion>,
        service: Option<SigningService>,
    }

    impl Builder {
        pub fn region(mut self, region: impl Into<SigningRegion>) -> Self {
            self.region = Some(region.into());
            self
        }

        pub fn service(mut self, service: impl Into<SigningService>) -> Self {
            self.service = Some(service.into());
            self
        }

        pub fn build(self) -> CredentialScope {
            CredentialScope {
                region: self.region,
                service: self.service,
            }
        }
    }
}

/// Resolve the AWS Endpoint for a given region
///
/// To provide a static endpoint, [`AwsEndpoint`](AwsEndpoint) implements this trait.
/// Endpoints derived from a region template use
/// [`partition::endpoint::Definition`](partition::endpoint::Definition).
pub trait ResolveAwsEndpoint: Send + Sync {
    fn resolve_endpoint(&self, region: &Region) -> Result<AwsEndpoint, BoxError>;
}

impl ResolveAwsEndpoint for AwsEndpoint {
    fn resolve_endpoint(&self, _region: &Region) -> Result<AwsEndpoint, BoxError> {
        Ok(self.clone())
    }
}

type AwsEndpointResolver = Arc<dyn ResolveAwsEndpoint>;

pub fn get_endpoint_resolver(properties: &PropertyBag) -> Option<&AwsEndpointResolver> {
    properties.get()
}

pub fn set_endpoint_resolver(properties: &mut PropertyBag, provider: AwsEndpointResolver) {
    properties.insert(provider);
}

/// Middleware Stage to Add an Endpoint to a Request
///
/// AwsEndpointStage implements [`MapRequest`](smithy_http::middleware::MapRequest). It will:
/// 1. Load an endpoint provider from the property bag.
/// 2. Load an endpoint given the [`Region`](aws_types::region::Region) in the property bag.
/// 3. Apply the endpoint to the URI in the request
/// 4. Set the `SigningRegion` and `SigningService` in the property bag to drive downstream
/// signing middleware.
#[derive(Clone, Debug)]
pub struct AwsEndpointStage;

#[derive(Debug)]
pub enum AwsEndpointStageError {
    NoEndpointResolver,
    NoRegion,
    EndpointResolutionError(BoxError),
}

impl Display for AwsEndpointStageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(self, f)
    }
}

impl Error for AwsEndpointStageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AwsEndpointStageError::EndpointResolutionError(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl MapRequest for AwsEndpointStage {
    type Error = AwsEndpointStageError;

    fn apply(&self, request: Request) -> Result<Request, Self::Error> {
        request.augment(|mut http_req, props| {
            let provider =
                get_endpoint_resolver(props).ok_or(AwsEndpointStageError::NoEndpointResolver)?;
            let region = props
                .get::<Region>()
                .ok_or(AwsEndpointStageError::NoRegion)?;
            let endpoint = provider
                .resolve_endpoint(region)
                .map_err(AwsEndpointStageError::EndpointResolutionError)?;
            tracing::debug!(endpoint = ?endpoint, base_region = ?region, "resolved endpoint");
            let signing_region = endpoint
                .credential_scope()
                .region()
                .cloned()
                .unwrap_or_else(|| region.clone().into());
            props.insert::<SigningRegion>(signing_region);
            if let Some(signing_service) = endpoint.credential_scope().service() {
                props.insert::<SigningService>(signing_service.clone());
            }
            endpoint
                .set_endpoint(http_req.uri_mut())
                .map_err(AwsEndpointStageError::EndpointResolutionError)?;
            Ok(http_req)
        })
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use http::header::HOST;
    use http::Uri;

    use aws_types::region::{Region, SigningRegion};
    use aws_types::SigningService;
    use smithy_http::body::SdkBody;
    use smithy_http::middleware::MapRequest;
    use smithy_http::operation;

    use crate::partition::endpoint::{Definition, Protocol};
    use crate::{
        set_endpoint_resolver, AwsEndpoint, AwsEndpointStage, AwsEndpointStageError,
        CredentialScope,
    };

    fn request(uri: &str) -> operation::Request {
        let req = http::Request::builder()
            .uri(uri)
            .body(SdkBody::from(""))
            .expect("valid request");
        operation::Request::new(req)
    }

    #[test]
    fn default_endpoint_updates_request() {
        let provider = Arc::new(Definition {
            uri_template: "pinpoint.{region}.amazonaws.com",
            protocol: Protocol::Https,
            credential_scope: CredentialScope::builder()
                .service(SigningService::from_static("mobiletargeting"))
                .build(),
        });
        let region = Region::new("us-east-1");
        let mut req = request("/v1/apps/app-1/campaigns?page-size=10");
        {
            let mut props = req.properties_mut();
            props.insert(region.clone());
            set_endpoint_resolver(&mut props, provider);
        };
        let req = AwsEndpointStage.apply(req).expect("should succeed");
        assert_eq!(req.properties().get(), Some(&SigningRegion::from(region)));
        assert_eq!(
            req.properties().get(),
            Some(&SigningService::from_static("mobiletargeting"))
        );

        let (req, _conf) = req.into_parts();
        assert_eq!(
            req.uri(),
            &Uri::from_static(
                "https://pinpoint.us-east-1.amazonaws.com/v1/apps/app-1/campaigns?page-size=10"
            )
        );
        assert!(req.headers().get(HOST).is_none());
    }

    #[test]
    fn sets_service_override_when_set() {
        let provider = Arc::new(Definition {
            uri_template: "www.service.com",
            protocol: Protocol::Http,
            credential_scope: CredentialScope::builder()
                .service(SigningService::from_static("pinpoint-override"))
                .region(SigningRegion::from_static("us-east-override"))
                .build(),
        });
        let mut req = request("/v1/apps");
        {
            let mut props = req.properties_mut();
            props.insert(Region::new("us-east-1"));
            props.insert(SigningService::from_static("mobiletargeting"));
            set_endpoint_resolver(&mut props, provider);
        };
        let req = AwsEndpointStage.apply(req).expect("should succeed");
        assert_eq!(
            req.properties().get(),
            Some(&SigningRegion::from(Region::new("us-east-override")))
        );
        assert_eq!(
            req.properties().get(),
            Some(&SigningService::from_static("pinpoint-override"))
        );
        assert_eq!(
            req.http().uri(),
            &Uri::from_static("http://www.service.com/v1/apps")
        );
    }

    #[test]
    fn static_endpoint_keeps_base_path() {
        let endpoint = AwsEndpoint::new(
            Uri::from_static("http://localhost:8080/proxy/"),
            CredentialScope::default(),
        );
        let mut req = request("/v1/apps/a/endpoints/b");
        {
            let mut props = req.properties_mut();
            props.insert(Region::new("us-west-2"));
            set_endpoint_resolver(&mut props, Arc::new(endpoint));
        };
        let req = AwsEndpointStage.apply(req).expect("should succeed");
        assert_eq!(
            req.http().uri(),
            &Uri::from_static("http://localhost:8080/proxy/v1/apps/a/endpoints/b")
        );
        assert_eq!(
            req.properties().get(),
            Some(&SigningRegion::from_static("us-west-2"))
        );
    }

    #[test]
    fn missing_region_fails() {
        let mut req = request("/v1/apps");
        set_endpoint_resolver(
            &mut req.properties_mut(),
            Arc::new(AwsEndpoint::new(
                Uri::from_static("https://example.com"),
                CredentialScope::default(),
            )),
        );
        match AwsEndpointStage.apply(req) {
            Err(AwsEndpointStageError::NoRegion) => {}
            other => panic!("expected NoRegion, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn missing_resolver_fails() {
        let mut req = request("/v1/apps");
        req.properties_mut().insert(Region::new("us-east-1"));
        assert!(matches!(
            AwsEndpointStage.apply(req),
            Err(AwsEndpointStageError::NoEndpointResolver)
        ));
    }
}
