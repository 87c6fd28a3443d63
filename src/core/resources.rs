use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Zero-argument function producing a resource's text.
pub type Producer = Arc<dyn Fn() -> Result<String> + Send + Sync>;

/// A named, on-demand text artifact.
#[derive(Clone)]
pub struct ResourceDescriptor {
    pub name: String,
    pub description: String,
    pub uri: Option<String>,
    pub producer: Producer,
}

impl ResourceDescriptor {
    pub fn new<F>(name: impl Into<String>, description: impl Into<String>, producer: F) -> Self
    where
        F: Fn() -> Result<String> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            description: description.into(),
            uri: None,
            producer: Arc::new(producer),
        }
    }

    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }

    pub fn info(&self) -> ResourceInfo {
        ResourceInfo {
            name: self.name.clone(),
            description: self.description.clone(),
            uri: self.uri.clone(),
        }
    }
}

impl std::fmt::Debug for ResourceDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceDescriptor")
            .field("name", &self.name)
            .field("uri", &self.uri)
            .finish_non_exhaustive()
    }
}

/// Public fields of a descriptor, as returned by `list_resources`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceInfo {
    pub name: String,
    pub description: String,
    pub uri: Option<String>,
}

/// Outcome of reading a resource: exactly one of `result` or `error`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourcePayload {
    Content { result: String },
    Error { error: String },
}

impl ResourcePayload {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}

/// Name-keyed resource descriptors. Written during startup only.
#[derive(Debug, Default)]
pub struct ResourceRegistry {
    entries: BTreeMap<String, ResourceDescriptor>,
}

impl ResourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a descriptor, replacing any previous one with the same name.
    pub fn register(&mut self, descriptor: ResourceDescriptor) {
        if self.entries.contains_key(&descriptor.name) {
            tracing::debug!(name = %descriptor.name, "replacing resource");
        }
        self.entries.insert(descriptor.name.clone(), descriptor);
    }

    /// Public fields of every descriptor, in name order.
    pub fn list(&self) -> Vec<ResourceInfo> {
        self.entries.values().map(ResourceDescriptor::info).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn descriptor(&self, name: &str) -> Option<&ResourceDescriptor> {
        self.entries.get(name)
    }

    /// Look a descriptor up by URI, then by name.
    pub fn find_by_uri(&self, uri: &str) -> Option<&ResourceDescriptor> {
        self.entries
            .values()
            .find(|d| d.uri.as_deref() == Some(uri))
            .or_else(|| self.entries.get(uri))
    }

    /// Run the named producer. Unknown names and producer failures come back
    /// as `ResourcePayload::Error`.
    pub fn get(&self, name: &str) -> ResourcePayload {
        let Some(descriptor) = self.entries.get(name) else {
            return ResourcePayload::Error {
                error: format!("resource '{}' not found", name),
            };
        };

        match (descriptor.producer)() {
            Ok(result) => ResourcePayload::Content { result },
            Err(e) => {
                tracing::warn!(name, error = %e, "resource producer failed");
                ResourcePayload::Error {
                    error: format!("resource '{}' failed: {}", name, e),
                }
            }
        }
    }
}
