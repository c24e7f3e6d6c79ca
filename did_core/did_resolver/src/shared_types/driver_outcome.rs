use serde_json::Value;

use super::resolve_result::ResolveResult;

/// Method metadata key through which a driver may ask for another identifier to be resolved.
pub const REDIRECT_METADATA_KEY: &str = "did";

/// What a driver returns when it is able to answer for an identifier.
#[derive(Clone, Debug, PartialEq)]
pub enum DriverOutcome {
    /// A final answer.
    Resolved(ResolveResult),
    /// The driver's answer names another identifier that should be resolved instead. The
    /// driver's own result is kept in case the other identifier cannot be resolved.
    Redirect { next: String, result: ResolveResult },
}

impl DriverOutcome {
    pub fn result(&self) -> &ResolveResult {
        match self {
            DriverOutcome::Resolved(result) | DriverOutcome::Redirect { result, .. } => result,
        }
    }

    pub fn into_result(self) -> ResolveResult {
        match self {
            DriverOutcome::Resolved(result) | DriverOutcome::Redirect { result, .. } => result,
        }
    }

    pub fn next(&self) -> Option<&str> {
        match self {
            DriverOutcome::Resolved(_) => None,
            DriverOutcome::Redirect { next, .. } => Some(next),
        }
    }
}

/// Classifies a plain result: a string under the `"did"` method metadata key makes it a
/// redirect to that identifier.
impl From<ResolveResult> for DriverOutcome {
    fn from(result: ResolveResult) -> Self {
        match result.method_metadata().get(REDIRECT_METADATA_KEY) {
            Some(Value::String(next)) => DriverOutcome::Redirect {
                next: next.clone(),
                result,
            },
            Some(other) => {
                log::warn!(
                    "Ignoring non-string \"{}\" method metadata value: {}",
                    REDIRECT_METADATA_KEY,
                    other
                );
                DriverOutcome::Resolved(result)
            }
            None => DriverOutcome::Resolved(result),
        }
    }
}
