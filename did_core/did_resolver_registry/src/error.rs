use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DidResolverRegistryError {
    #[error("No drivers configured")]
    NotConfigured,
    #[error("Exceeded the limit of {limit} redirects while resolving {identifier}")]
    RedirectLimitExceeded { limit: usize, identifier: String },
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}
