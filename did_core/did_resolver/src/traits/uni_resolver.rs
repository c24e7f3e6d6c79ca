use std::collections::HashMap;

use async_trait::async_trait;

use crate::{
    error::GenericError,
    shared_types::{resolve_result::ResolveResult, GenericMap},
};

/// Caller-facing resolution interface, independent of how drivers are wired up behind it.
#[async_trait]
pub trait UniResolver: Send + Sync {
    /// Resolves `identifier`, optionally selecting services of `select_service_type` in the
    /// resolved document. `Ok(None)` means no driver could resolve the identifier.
    async fn resolve(
        &self,
        identifier: &str,
        select_service_type: Option<&str>,
    ) -> Result<Option<ResolveResult>, GenericError>;

    /// Resolves `identifier` without a service type filter.
    async fn resolve_identifier(
        &self,
        identifier: &str,
    ) -> Result<Option<ResolveResult>, GenericError> {
        self.resolve(identifier, None).await
    }

    /// Properties of every configured driver, keyed by driver key.
    fn properties(&self) -> Result<HashMap<String, GenericMap>, GenericError>;
}
