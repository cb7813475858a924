//! Identity cache - one resource per normalized name
//!
//! Person (and company) resources are minted from the slug of their name, so
//! the same person credited as director in one film and actor in another ends
//! up as a single node. The cache owns that mapping for the duration of a run.

use oxigraph::model::NamedNode;
use std::collections::HashMap;
use tracing::{debug, warn};

use crate::errors::Result;
use crate::ingest::parse::slugify;
use crate::ontology::Namespace;

#[derive(Debug, Clone)]
struct CacheEntry {
    node: NamedNode,
    /// Display name the entry was first minted for
    first_name: String,
    merge_reported: bool,
}

pub struct IdentityCache {
    namespace: Namespace,
    prefix: &'static str,
    entries: HashMap<String, CacheEntry>,
}

impl IdentityCache {
    /// Cache minting `<ns>person_<slug>` identifiers
    pub fn persons(namespace: Namespace) -> Self {
        Self::with_prefix(namespace, "person_")
    }

    /// Cache minting `<ns>company_<slug>` identifiers
    pub fn companies(namespace: Namespace) -> Self {
        Self::with_prefix(namespace, "company_")
    }

    pub fn with_prefix(namespace: Namespace, prefix: &'static str) -> Self {
        Self {
            namespace,
            prefix,
            entries: HashMap::new(),
        }
    }

    /// Lookup key for a display name
    pub fn key(name: &str) -> String {
        slugify(name)
    }

    /// Return the resource for `name`, minting it on first sight
    pub fn resolve(&mut self, name: &str) -> Result<NamedNode> {
        let key = Self::key(name);

        if let Some(entry) = self.entries.get_mut(&key) {
            let spelling = name.trim();
            if spelling != entry.first_name && !entry.merge_reported {
                warn!(
                    key = %key,
                    first = %entry.first_name,
                    other = %spelling,
                    "Distinct names normalize to the same identifier; merging"
                );
                entry.merge_reported = true;
            }
            return Ok(entry.node.clone());
        }

        let node = self.namespace.iri(&format!("{}{}", self.prefix, key))?;
        debug!(iri = %node.as_str(), "Minted resource");

        self.entries.insert(
            key,
            CacheEntry {
                node: node.clone(),
                first_name: name.trim().to_string(),
                merge_reported: false,
            },
        );

        Ok(node)
    }

    /// Existing resource for `name`, without minting
    pub fn get(&self, name: &str) -> Option<&NamedNode> {
        self.entries.get(&Self::key(name)).map(|entry| &entry.node)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
