/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::os_shim_internal::Env;
use std::borrow::Cow;
use std::fmt::{Display, Formatter};

/// The region to send requests to.
///
/// The region MUST be specified on a request. It may be configured globally or on a
/// per-client basis unless otherwise noted. A full list of regions is found in the
/// "Regions and Endpoints" document.
///
/// See http://docs.aws.amazon.com/general/latest/gr/rande.html for
/// information on AWS regions.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Region(
    // Regions are almost always known statically. However, as an escape hatch for when they
    // are not, allow for an owned region
    Cow<'static, str>,
);

impl AsRef<str> for Region {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Region {
    pub fn new(region: impl Into<Cow<'static, str>>) -> Self {
        Self(region.into())
    }

    pub const fn from_static(region: &'static str) -> Self {
        Self(Cow::Borrowed(region))
    }
}

/// Provide a [`Region`](Region) to use with AWS requests
///
/// For most cases [`default_provider`](default_provider) will be the best option, implementing
/// a standard provider chain.
pub trait ProvideRegion: Send + Sync {
    fn region(&self) -> Option<Region>;
}

impl ProvideRegion for Region {
    fn region(&self) -> Option<Region> {
        Some(self.clone())
    }
}

impl<'a> ProvideRegion for &'a Region {
    fn region(&self) -> Option<Region> {
        Some((*self).clone())
    }
}

impl ProvideRegion for Option<Region> {
    fn region(&self) -> Option<Region> {
        self.clone()
    }
}

impl ProvideRegion for &'static str {
    fn region(&self) -> Option<Region> {
        Some(Region::from_static(self))
    }
}

/// Implement a region provider based on a series of region providers
///
/// # Example
/// ```rust
/// use aws_types::region::{ChainProvider, Region};
/// use std::env;
/// // region provider that first checks the `CUSTOM_REGION` environment variable,
/// // then checks the default provider chain, then falls back to us-east-2
/// let provider = ChainProvider::first_try(env::var("CUSTOM_REGION").ok().map(Region::new))
///     .or_default_provider()
///     .or_else(Region::new("us-east-2"));
/// ```
pub struct ChainProvider {
    providers: Vec<Box<dyn ProvideRegion>>,
}

impl ChainProvider {
    pub fn first_try(provider: impl ProvideRegion + 'static) -> Self {
        ChainProvider {
            providers: vec![Box::new(provider)],
        }
    }

    pub fn or_else(mut self, fallback: impl ProvideRegion + 'static) -> Self {
        self.providers.push(Box::new(fallback));
        self
    }

    pub fn or_default_provider(mut self) -> Self {
        self.providers.push(Box::new(default_provider()));
        self
    }
}

impl ProvideRegion for ChainProvider {
    fn region(&self) -> Option<Region> {
        self.providers.iter().find_map(|provider| provider.region())
    }
}

pub fn default_provider() -> impl ProvideRegion {
    EnvironmentProvider::new()
}

/// Load a region from environment variables
///
/// `AWS_REGION` is checked first, then `AWS_DEFAULT_REGION`.
#[non_exhaustive]
pub struct EnvironmentProvider {
    env: Env,
}

impl Default for EnvironmentProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvironmentProvider {
    pub fn new() -> Self {
        EnvironmentProvider { env: Env::real() }
    }

    /// Load the region from a custom environment, mostly useful for tests.
    pub fn with_env(env: Env) -> Self {
        EnvironmentProvider { env }
    }
}

impl ProvideRegion for EnvironmentProvider {
    fn region(&self) -> Option<Region> {
        let region = self
            .env
            .first_non_empty(&["AWS_REGION", "AWS_DEFAULT_REGION"])
            .map(|region| Region::new(region.trim().to_string()));
        tracing::debug!(region = ?region, "loaded region from the environment");
        region
    }
}

/// The region to use when signing requests
///
/// Generally, user code will not need to interact with `SigningRegion`. See `[Region](crate::Region)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SigningRegion(Cow<'static, str>);

impl AsRef<str> for SigningRegion {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Region> for SigningRegion {
    fn from(inp: Region) -> Self {
        SigningRegion(inp.0)
    }
}

impl SigningRegion {
    pub fn from_static(region: &'static str) -> Self {
        SigningRegion(Cow::Borrowed(region))
    }
}

#[cfg(test)]
mod test {
    use crate::os_shim_internal::Env;
    use crate::region::{ChainProvider, EnvironmentProvider, ProvideRegion, Region, SigningRegion};

    #[test]
    fn aws_region_takes_precedence() {
        let provider = EnvironmentProvider::with_env(Env::from_slice(&[
            ("AWS_REGION", "us-west-2"),
            ("AWS_DEFAULT_REGION", "eu-west-1"),
        ]));
        assert_eq!(provider.region(), Some(Region::new("us-west-2")));
    }

    #[test]
    fn falls_back_to_default_region() {
        let provider = EnvironmentProvider::with_env(Env::from_slice(&[
            ("AWS_REGION", ""),
            ("AWS_DEFAULT_REGION", "eu-west-1"),
        ]));
        assert_eq!(provider.region(), Some(Region::new("eu-west-1")));
    }

    #[test]
    fn no_region_in_empty_env() {
        let provider = EnvironmentProvider::with_env(Env::from_slice(&[]));
        assert_eq!(provider.region(), None);
    }

    #[test]
    fn chain_uses_first_available() {
        let empty = EnvironmentProvider::with_env(Env::from_slice(&[]));
        let chain = ChainProvider::first_try(None)
            .or_else(empty)
            .or_else(Region::from_static("ap-south-1"))
            .or_else(Region::from_static("us-east-1"));
        assert_eq!(chain.region(), Some(Region::from_static("ap-south-1")));
    }

    #[test]
    fn signing_region_from_region() {
        let region = Region::new(String::from("us-east-1"));
        assert_eq!(SigningRegion::from(region.clone()).as_ref(), "us-east-1");
        assert_eq!(region.to_string(), "us-east-1");
    }
}
