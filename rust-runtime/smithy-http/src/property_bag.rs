/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! A typemap used to store configuration for an operation.
//!
//! Middleware reads and writes values here keyed by their type: the region, the endpoint
//! resolver and the signing service are all passed along this way.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;

type AnyMap = HashMap<TypeId, Box<dyn Any + Send + Sync>>;

/// A type-map of configuration data.
#[derive(Default)]
pub struct PropertyBag {
    map: AnyMap,
}

impl PropertyBag {
    /// Create an empty `PropertyBag`.
    pub fn new() -> PropertyBag {
        PropertyBag {
            map: HashMap::default(),
        }
    }

    /// Insert a type into this `PropertyBag`.
    ///
    /// If a value of this type already existed, it will be returned.
    ///
    /// # Example
    ///
    /// ```
    /// # use smithy_http::property_bag::PropertyBag;
    /// let mut props = PropertyBag::new();
    ///
    /// assert!(props.insert(5i32).is_none());
    /// assert_eq!(props.insert(9i32), Some(5i32));
    /// ```
    pub fn insert<T: Send + Sync + 'static>(&mut self, val: T) -> Option<T> {
        self.map
            .insert(TypeId::of::<T>(), Box::new(val))
            .and_then(|boxed| boxed.downcast().ok().map(|boxed| *boxed))
    }

    /// Get a reference to a type previously inserted on this `PropertyBag`.
    ///
    /// # Example
    ///
    /// ```
    /// # use smithy_http::property_bag::PropertyBag;
    /// let mut props = PropertyBag::new();
    /// assert!(props.get::<i32>().is_none());
    /// props.insert(5i32);
    ///
    /// assert_eq!(props.get::<i32>(), Some(&5i32));
    /// ```
    pub fn get<T: Send + Sync + 'static>(&self) -> Option<&T> {
        self.map
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref())
    }

    /// Get a mutable reference to a type previously inserted on this `PropertyBag`.
    pub fn get_mut<T: Send + Sync + 'static>(&mut self) -> Option<&mut T> {
        self.map
            .get_mut(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_mut())
    }

    /// Remove a type from this `PropertyBag`.
    ///
    /// If a value of this type existed, it will be returned.
    pub fn remove<T: Send + Sync + 'static>(&mut self) -> Option<T> {
        self.map
            .remove(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast().ok().map(|boxed| *boxed))
    }

    /// Number of distinct types stored in the bag.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl fmt::Debug for PropertyBag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyBag")
            .field("len", &self.map.len())
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::PropertyBag;

    #[test]
    fn test_extensions() {
        #[derive(Debug, PartialEq)]
        struct MyType(i32);

        let mut props = PropertyBag::new();

        props.insert(5i32);
        props.insert(MyType(10));

        assert_eq!(props.get(), Some(&5i32));
        assert_eq!(props.get_mut(), Some(&mut 5i32));
        assert_eq!(props.len(), 2);

        assert_eq!(props.remove::<i32>(), Some(5i32));
        assert!(props.get::<i32>().is_none());

        assert_eq!(props.get::<bool>(), None);
        assert_eq!(props.get(), Some(&MyType(10)));
    }
}
