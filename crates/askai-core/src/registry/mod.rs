//! Service registry - the in-memory store of launch definitions.
//!
//! The registry is an explicit store object: created once at startup, shared
//! through `Arc`, and mutable for the rest of the process lifetime. There is
//! no teardown.
//!
//! # Semantics
//!
//! - Keys are case-insensitive (normalized to lower case on register and lookup)
//! - Re-registering a key replaces its definition and keeps its position
//! - Iteration order is registration order
//! - Lookup of an unregistered key is an [`UnknownServiceError`]

mod defaults;
mod url;

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use indexmap::IndexMap;
use tracing::{debug, error};

use crate::domain::{ServiceDefinition, ServiceKey};
use crate::errors::UnknownServiceError;

pub use defaults::DEFAULT_SERVICES;
pub use url::{build_launch_url, encode_prompt};

type ServiceMap = IndexMap<ServiceKey, Arc<ServiceDefinition>>;

/// Process-wide mapping from service key to launch definition.
///
/// Writers never block readers for longer than a map insert, and a lookup
/// hands out an `Arc` snapshot, so a dispatch always sees one consistent
/// definition even if the key is re-registered mid-flight.
#[derive(Debug, Default)]
pub struct ServiceRegistry {
    services: RwLock<ServiceMap>,
}

impl ServiceRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry pre-populated with [`DEFAULT_SERVICES`].
    pub fn with_defaults() -> Self {
        let registry = Self::new();
        for (key, label, base_url, param_name) in DEFAULT_SERVICES {
            match ServiceDefinition::new(*label, *base_url, *param_name) {
                Ok(definition) => registry.register(key, definition),
                Err(e) => error!(service = key, error = %e, "Skipping invalid built-in service"),
            }
        }
        registry
    }

    fn read(&self) -> RwLockReadGuard<'_, ServiceMap> {
        self.services.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ServiceMap> {
        self.services.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Insert or replace the definition stored under `key`.
    ///
    /// Last write wins. Never fails.
    pub fn register(&self, key: impl AsRef<str>, definition: impl Into<Arc<ServiceDefinition>>) {
        let key = ServiceKey::new(key);
        let definition = definition.into();
        debug!(
            service = %key,
            base_url = definition.base_url(),
            "Registering service"
        );
        self.write().insert(key, definition);
    }

    /// Look up a definition by case-insensitive key.
    pub fn resolve(&self, key: impl AsRef<str>) -> Result<Arc<ServiceDefinition>, UnknownServiceError> {
        let key = ServiceKey::new(key);
        self.read()
            .get(&key)
            .cloned()
            .ok_or_else(|| UnknownServiceError::new(key))
    }

    /// Whether `key` is registered.
    pub fn contains(&self, key: impl AsRef<str>) -> bool {
        self.read().contains_key(&ServiceKey::new(key))
    }

    /// Registered keys in registration order.
    pub fn keys(&self) -> Vec<ServiceKey> {
        self.read().keys().cloned().collect()
    }

    /// Registered entries in registration order.
    pub fn entries(&self) -> Vec<(ServiceKey, Arc<ServiceDefinition>)> {
        self.read()
            .iter()
            .map(|(key, def)| (key.clone(), Arc::clone(def)))
            .collect()
    }

    /// Number of registered services.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether no services are registered.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Resolve `key` and build its launch URL for `prompt`.
    pub fn build_url(
        &self,
        key: impl AsRef<str>,
        prompt: &str,
    ) -> Result<String, UnknownServiceError> {
        let definition = self.resolve(key)?;
        let url = build_launch_url(&definition, prompt);
        debug!(url = %url, "Built launch URL");
        Ok(url)
    }

    /// Restrict the offered keys to `requested`.
    ///
    /// With no filter, every key is offered in registration order. With a
    /// filter, keys are normalized, unknown keys are dropped silently and
    /// duplicates collapse to their first occurrence. The caller decides what
    /// an empty result means.
    pub fn filter_keys<S: AsRef<str>>(&self, requested: Option<&[S]>) -> Vec<ServiceKey> {
        let Some(requested) = requested else {
            return self.keys();
        };

        let services = self.read();
        let mut offered: Vec<ServiceKey> = Vec::with_capacity(requested.len());
        for raw in requested {
            let key = ServiceKey::new(raw);
            if !services.contains_key(&key) {
                debug!(service = %key, "Dropping unknown service from filter");
                continue;
            }
            if !offered.contains(&key) {
                offered.push(key);
            }
        }
        offered
    }
}
