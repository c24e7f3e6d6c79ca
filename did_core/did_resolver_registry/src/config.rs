use serde::Deserialize;

use crate::error::DidResolverRegistryError;

pub const MAX_REDIRECTS_ENV: &str = "MAX_REDIRECTS";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResolverRegistryConfig {
    max_redirects: Option<usize>,
}

impl ResolverRegistryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the configuration from the process environment. Unset variables keep their
    /// defaults.
    pub fn from_env() -> Result<Self, DidResolverRegistryError> {
        let max_redirects = match std::env::var(MAX_REDIRECTS_ENV) {
            Ok(value) => Some(value.trim().parse::<usize>().map_err(|err| {
                DidResolverRegistryError::InvalidConfiguration(format!(
                    "{MAX_REDIRECTS_ENV}={value}: {err}"
                ))
            })?),
            Err(std::env::VarError::NotPresent) => None,
            Err(err) => {
                return Err(DidResolverRegistryError::InvalidConfiguration(format!(
                    "{MAX_REDIRECTS_ENV}: {err}"
                )))
            }
        };
        Ok(Self { max_redirects })
    }

    /// Caps how many redirects a single resolution may follow. Without a cap, a cycle between
    /// drivers never terminates.
    pub fn with_max_redirects(mut self, max_redirects: usize) -> Self {
        self.max_redirects = Some(max_redirects);
        self
    }

    pub fn max_redirects(&self) -> Option<usize> {
        self.max_redirects
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unbounded() {
        assert_eq!(ResolverRegistryConfig::new().max_redirects(), None);
    }

    #[test]
    fn deserializes_from_json() {
        let config: ResolverRegistryConfig =
            serde_json::from_str(r#"{ "maxRedirects": 3 }"#).unwrap();
        assert_eq!(config, ResolverRegistryConfig::new().with_max_redirects(3));

        let config: ResolverRegistryConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.max_redirects(), None);
    }
}
