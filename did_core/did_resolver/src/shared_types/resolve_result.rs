use did_doc::schema::did_doc::DidDocument;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{resolver_metadata::ResolverMetadata, GenericMap};

/// The answer a driver gives for one identifier. Resolver metadata is absent until the
/// resolver attaches it once resolution has finished.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResolveResult {
    did_document: DidDocument,
    #[serde(default, skip_serializing_if = "GenericMap::is_empty")]
    method_metadata: GenericMap,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    resolver_metadata: Option<ResolverMetadata>,
}

impl ResolveResult {
    pub fn builder(did_document: DidDocument) -> ResolveResultBuilder {
        ResolveResultBuilder {
            did_document,
            method_metadata: GenericMap::new(),
        }
    }

    pub fn did_document(&self) -> &DidDocument {
        &self.did_document
    }

    pub fn method_metadata(&self) -> &GenericMap {
        &self.method_metadata
    }

    pub fn resolver_metadata(&self) -> Option<&ResolverMetadata> {
        self.resolver_metadata.as_ref()
    }

    pub fn with_resolver_metadata(self, resolver_metadata: ResolverMetadata) -> Self {
        Self {
            resolver_metadata: Some(resolver_metadata),
            ..self
        }
    }
}

#[derive(Debug)]
pub struct ResolveResultBuilder {
    did_document: DidDocument,
    method_metadata: GenericMap,
}

impl ResolveResultBuilder {
    pub fn method_metadata(mut self, method_metadata: GenericMap) -> Self {
        self.method_metadata = method_metadata;
        self
    }

    pub fn add_method_metadata(mut self, key: String, value: Value) -> Self {
        self.method_metadata.insert(key, value);
        self
    }

    pub fn build(self) -> ResolveResult {
        ResolveResult {
            did_document: self.did_document,
            method_metadata: self.method_metadata,
            resolver_metadata: None,
        }
    }
}
