pub mod config;
pub mod drivers;
pub mod error;

use std::{collections::HashMap, fmt, time::Instant};

use async_trait::async_trait;
use config::ResolverRegistryConfig;
use did_resolver::{
    did_parser::DidUrl,
    error::GenericError,
    shared_types::{
        driver_outcome::DriverOutcome, resolve_result::ResolveResult,
        resolver_metadata::ResolverMetadata, GenericMap,
    },
    traits::{driver::DidDriver, uni_resolver::UniResolver},
};
use drivers::{Drivers, GenericDriver};
use error::DidResolverRegistryError;
use log::debug;

/// Resolves identifiers by trying every registered driver in registration order, following
/// redirects between drivers and attaching resolver metadata to the final result.
#[derive(Default)]
pub struct ResolverRegistry {
    drivers: Drivers,
    config: ResolverRegistryConfig,
}

/// The driver that answered one round of driver trials, and its answer.
struct Trial<'a> {
    key: &'a str,
    driver: &'a GenericDriver,
    outcome: DriverOutcome,
}

/// An identifier that redirected elsewhere, kept for fallback and metadata.
struct Hop {
    identifier: String,
    result: ResolveResult,
}

impl ResolverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ResolverRegistryConfig) -> Self {
        ResolverRegistry {
            drivers: Drivers::new(),
            config,
        }
    }

    pub fn config(&self) -> &ResolverRegistryConfig {
        &self.config
    }

    pub fn register_driver<T>(mut self, key: String, driver: T) -> Self
    where
        T: DidDriver + 'static,
    {
        self.drivers.insert(key, Box::new(driver));
        self
    }

    pub fn unregister_driver(mut self, key: &str) -> Self {
        self.drivers.remove(key);
        self
    }

    pub fn set_drivers(&mut self, drivers: Drivers) {
        self.drivers = drivers;
    }

    pub fn drivers(&self) -> &Drivers {
        &self.drivers
    }

    /// Returns the first registered driver of type `T`.
    pub fn driver<T>(&self) -> Option<&T>
    where
        T: DidDriver + 'static,
    {
        self.drivers
            .iter()
            .find_map(|(_, driver)| driver.as_any().downcast_ref::<T>())
    }

    /// Resolves `identifier` by trying every driver in registration order, following redirects
    /// and selecting services of `select_service_type`. Any string, including the empty one, is
    /// handed to the drivers as is.
    pub async fn resolve(
        &self,
        identifier: &str,
        select_service_type: Option<&str>,
    ) -> Result<Option<ResolveResult>, GenericError> {
        if self.drivers.is_empty() {
            return Err(Box::new(DidResolverRegistryError::NotConfigured));
        }

        let start = Instant::now();

        let Some(first) = self.try_drivers(identifier).await? else {
            debug!("No resolve result for {}", identifier);
            return Ok(None);
        };
        let mut winner = (first.key, first.driver);
        let mut current_identifier = identifier.to_string();
        let mut current = Some(first);
        let mut history: Vec<Hop> = Vec::new();

        while let Some(Trial {
            outcome: DriverOutcome::Redirect { next, result },
            ..
        }) = current
        {
            if let Some(limit) = self.config.max_redirects() {
                if history.len() >= limit {
                    return Err(Box::new(DidResolverRegistryError::RedirectLimitExceeded {
                        limit,
                        identifier: identifier.to_string(),
                    }));
                }
            }
            debug!("Redirecting {} to {}", current_identifier, next);
            history.push(Hop {
                identifier: std::mem::replace(&mut current_identifier, next),
                result,
            });
            current = self.try_drivers(&current_identifier).await?;
            if let Some(trial) = &current {
                winner = (trial.key, trial.driver);
            }
        }

        let duration = start.elapsed();
        let (key, driver) = winner;

        let initial_identifiers: Vec<String> =
            history.iter().map(|hop| hop.identifier.clone()).collect();

        let (resolved_identifier, result) = match (current, history.into_iter().next()) {
            (Some(trial), _) => (current_identifier, trial.outcome.into_result()),
            (None, Some(first_hop)) => {
                debug!(
                    "Falling back to initial identifier and resolve result: {}",
                    first_hop.identifier
                );
                (first_hop.identifier, first_hop.result)
            }
            (None, None) => {
                debug!("No resolve result for {}", identifier);
                return Ok(None);
            }
        };

        let did_reference = match DidUrl::parse(resolved_identifier) {
            Ok(did_url) => {
                debug!(
                    "Identifier {} is a valid DID reference: {}",
                    did_url,
                    did_url.did()
                );
                Some(did_url)
            }
            Err(err) => {
                debug!("Identifier is not a valid DID reference: {}", err);
                None
            }
        };

        let select_service_name = did_reference.as_ref().and_then(DidUrl::service);
        let selected_services = if select_service_name.is_none() && select_service_type.is_none()
        {
            None
        } else {
            Some(
                result
                    .did_document()
                    .select_services(select_service_name, select_service_type),
            )
        };

        let mut metadata =
            ResolverMetadata::builder(key.to_string(), driver.name().to_string(), duration);
        if !initial_identifiers.is_empty() {
            metadata = metadata.initial_identifiers(initial_identifiers);
        }
        if let Some(did_reference) = did_reference {
            metadata = metadata.did_reference(did_reference);
        }
        if let Some(selected_services) = selected_services {
            metadata = metadata.selected_services(selected_services);
        }

        Ok(Some(result.with_resolver_metadata(metadata.build())))
    }

    pub fn properties(&self) -> Result<HashMap<String, GenericMap>, GenericError> {
        if self.drivers.is_empty() {
            return Err(Box::new(DidResolverRegistryError::NotConfigured));
        }

        let properties: HashMap<String, GenericMap> = self
            .drivers
            .iter()
            .map(|(key, driver)| {
                debug!("Loading properties for driver {} ({})", key, driver.name());
                (key.to_string(), driver.properties().unwrap_or_default())
            })
            .collect();

        debug!("Loading properties: {:?}", properties);
        Ok(properties)
    }

    async fn try_drivers(&self, identifier: &str) -> Result<Option<Trial<'_>>, GenericError> {
        for (key, driver) in self.drivers.iter() {
            debug!(
                "Attempting to resolve {} with driver {} ({})",
                identifier,
                key,
                driver.name()
            );
            if let Some(outcome) = driver.resolve(identifier).await? {
                debug!("Resolved {} with driver {}", identifier, key);
                return Ok(Some(Trial {
                    key,
                    driver,
                    outcome,
                }));
            }
        }
        debug!("No driver resolved {}", identifier);
        Ok(None)
    }
}

impl fmt::Debug for ResolverRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolverRegistry")
            .field("drivers", &self.drivers)
            .field("config", &self.config)
            .finish()
    }
}

#[async_trait]
impl UniResolver for ResolverRegistry {
    async fn resolve(
        &self,
        identifier: &str,
        select_service_type: Option<&str>,
    ) -> Result<Option<ResolveResult>, GenericError> {
        ResolverRegistry::resolve(self, identifier, select_service_type).await
    }

    fn properties(&self) -> Result<HashMap<String, GenericMap>, GenericError> {
        ResolverRegistry::properties(self)
    }
}
