//! Named-descriptor registry.
//!
//! Descriptors are created once and reused across many checks. A
//! [`DescriptorRegistry`] gives them a home: callers register descriptors
//! under their capability names and later check candidates by name.
//!
//! The registry is an ordinary value. Construct it where your application
//! wires its dependencies and pass it to whoever needs it; process-wide
//! singletons are deliberately not provided.

#![deny(unsafe_code)]
#![warn(rust_2018_idioms)]

use capcheck_conformance::{ensure_implements, ConformanceError, Reflect};
use capcheck_types::CapabilityDescriptor;
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::debug;

/// Errors raised by registry operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("capability `{0}` is already registered")]
    DuplicateCapability(String),

    #[error("capability `{0}` is not registered")]
    UnknownCapability(String),

    #[error(transparent)]
    Conformance(#[from] ConformanceError),
}

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// A collection of capability descriptors keyed by their names.
#[derive(Clone, Debug, Default)]
pub struct DescriptorRegistry {
    descriptors: BTreeMap<String, CapabilityDescriptor>,
}

impl DescriptorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a descriptor under its own name.
    ///
    /// Names are unique; registering a second descriptor under an existing
    /// name is rejected rather than silently replacing the first.
    pub fn register(&mut self, descriptor: CapabilityDescriptor) -> RegistryResult<()> {
        if self.descriptors.contains_key(&descriptor.name) {
            return Err(RegistryError::DuplicateCapability(descriptor.name.clone()));
        }
        debug!(capability = %descriptor.name, "registering capability descriptor");
        self.descriptors.insert(descriptor.name.clone(), descriptor);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&CapabilityDescriptor> {
        self.descriptors.get(name)
    }

    /// Registered capability names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.descriptors.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Check a candidate against the named capabilities, in the order given.
    ///
    /// Name resolution happens before any member is probed, so a misspelled
    /// capability name surfaces as [`RegistryError::UnknownCapability`]
    /// rather than a half-finished check.
    pub fn ensure_implements<C, I, S>(&self, candidate: &C, capabilities: I) -> RegistryResult<()>
    where
        C: Reflect,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut resolved = Vec::new();
        for capability in capabilities {
            let name = capability.as_ref();
            let descriptor = self
                .get(name)
                .ok_or_else(|| RegistryError::UnknownCapability(name.to_string()))?;
            resolved.push(descriptor);
        }

        ensure_implements(candidate, resolved)?;
        Ok(())
    }
}
