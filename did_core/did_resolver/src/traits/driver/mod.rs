use std::any::{type_name, Any};

use async_trait::async_trait;

use crate::{
    error::GenericError,
    shared_types::{driver_outcome::DriverOutcome, GenericMap},
};

/// Gives access to the concrete type behind a trait object.
pub trait AsAny {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A resolution back-end, typically responsible for a single DID method.
///
/// `resolve` returns `Ok(None)` when the driver is not applicable to the identifier or cannot
/// find it. `Err` is reserved for genuine failures and aborts the whole resolution.
#[async_trait]
pub trait DidDriver: AsAny + Send + Sync {
    async fn resolve(&self, identifier: &str) -> Result<Option<DriverOutcome>, GenericError>;

    fn properties(&self) -> Option<GenericMap> {
        None
    }

    /// Implementation name reported in resolver metadata.
    fn name(&self) -> &'static str {
        short_type_name(type_name::<Self>())
    }
}

fn short_type_name(full_name: &'static str) -> &'static str {
    let without_generics = full_name
        .split_once('<')
        .map_or(full_name, |(base, _)| base);
    without_generics
        .rsplit("::")
        .next()
        .unwrap_or(without_generics)
}
