use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use typed_builder::TypedBuilder;

use crate::schema::utils::OneOrList;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    #[builder(setter(into))]
    id: String,
    #[serde(rename = "type")]
    service_type: OneOrList<String>,
    #[builder(setter(into))]
    service_endpoint: Value,
    #[serde(flatten)]
    #[serde(skip_serializing_if = "Map::is_empty")]
    #[builder(default)]
    extra: Map<String, Value>,
}

impl Service {
    pub fn id(&self) -> &str {
        self.id.as_ref()
    }

    /// The service name: the fragment of the service id, or the whole id if it has none.
    pub fn name(&self) -> &str {
        self.id
            .rsplit_once('#')
            .map_or(self.id.as_str(), |(_, fragment)| fragment)
    }

    pub fn service_type(&self) -> &OneOrList<String> {
        &self.service_type
    }

    pub fn contains_service_type(&self, tested_service_type: &str) -> bool {
        self.service_type.iter().any(|t| t == tested_service_type)
    }

    pub fn service_endpoint(&self) -> &Value {
        &self.service_endpoint
    }

    pub fn extra_field(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    /// Whether this service passes every filter given; absent filters match anything.
    pub fn matches(&self, name: Option<&str>, service_type: Option<&str>) -> bool {
        name.map_or(true, |name| self.name() == name)
            && service_type.map_or(true, |t| self.contains_service_type(t))
    }
}
