use std::time::Duration;

use did_parser_nom::DidUrl;
use serde::{Deserialize, Serialize};

/// Provenance of a resolution: which driver answered, how long it took, and how the
/// identifier was interpreted. Field order is the serialization order.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResolverMetadata {
    driver_id: String,
    driver: String,
    #[serde(with = "duration_millis")]
    duration: Duration,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    initial_identifiers: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    did_reference: Option<DidUrl>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    selected_services: Option<Vec<usize>>,
}

impl ResolverMetadata {
    pub fn builder(driver_id: String, driver: String, duration: Duration) -> ResolverMetadataBuilder {
        ResolverMetadataBuilder {
            driver_id,
            driver,
            duration,
            initial_identifiers: None,
            did_reference: None,
            selected_services: None,
        }
    }

    /// Registry key of the driver that produced the result.
    pub fn driver_id(&self) -> &str {
        self.driver_id.as_ref()
    }

    /// Implementation name of the driver that produced the result.
    pub fn driver(&self) -> &str {
        self.driver.as_ref()
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Identifiers that redirected elsewhere before the final answer, oldest first.
    pub fn initial_identifiers(&self) -> Option<&[String]> {
        self.initial_identifiers.as_deref()
    }

    pub fn did_reference(&self) -> Option<&DidUrl> {
        self.did_reference.as_ref()
    }

    pub fn selected_services(&self) -> Option<&[usize]> {
        self.selected_services.as_deref()
    }
}

#[derive(Debug)]
pub struct ResolverMetadataBuilder {
    driver_id: String,
    driver: String,
    duration: Duration,
    initial_identifiers: Option<Vec<String>>,
    did_reference: Option<DidUrl>,
    selected_services: Option<Vec<usize>>,
}

impl ResolverMetadataBuilder {
    pub fn initial_identifiers(mut self, initial_identifiers: Vec<String>) -> Self {
        self.initial_identifiers = Some(initial_identifiers);
        self
    }

    pub fn did_reference(mut self, did_reference: DidUrl) -> Self {
        self.did_reference = Some(did_reference);
        self
    }

    pub fn selected_services(mut self, selected_services: Vec<usize>) -> Self {
        self.selected_services = Some(selected_services);
        self
    }

    pub fn build(self) -> ResolverMetadata {
        ResolverMetadata {
            driver_id: self.driver_id,
            driver: self.driver,
            duration: self.duration,
            initial_identifiers: self.initial_identifiers,
            did_reference: self.did_reference,
            selected_services: self.selected_services,
        }
    }
}

mod duration_millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let millis = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        serializer.serialize_u64(millis)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
