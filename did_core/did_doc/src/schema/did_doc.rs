use did_parser_nom::Did;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::schema::{service::Service, utils::OneOrList};

/// A DID document. Only services are modelled; verification material and any other
/// properties are carried as raw JSON.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DidDocument {
    #[serde(rename = "@context", default, skip_serializing_if = "Option::is_none")]
    context: Option<OneOrList<Value>>,
    id: Did,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    also_known_as: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    controller: Option<OneOrList<Did>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    verification_method: Vec<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    authentication: Vec<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    assertion_method: Vec<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    key_agreement: Vec<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    capability_invocation: Vec<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    capability_delegation: Vec<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    service: Vec<Service>,
    #[serde(flatten)]
    #[serde(skip_serializing_if = "Map::is_empty")]
    extra: Map<String, Value>,
}

impl DidDocument {
    pub fn builder(id: Did) -> DidDocumentBuilder {
        DidDocumentBuilder::new(id)
    }

    pub fn context(&self) -> Option<&OneOrList<Value>> {
        self.context.as_ref()
    }

    pub fn id(&self) -> &Did {
        &self.id
    }

    pub fn also_known_as(&self) -> &[String] {
        self.also_known_as.as_ref()
    }

    pub fn controller(&self) -> Option<&OneOrList<Did>> {
        self.controller.as_ref()
    }

    pub fn verification_method(&self) -> &[Value] {
        self.verification_method.as_ref()
    }

    pub fn authentication(&self) -> &[Value] {
        self.authentication.as_ref()
    }

    pub fn assertion_method(&self) -> &[Value] {
        self.assertion_method.as_ref()
    }

    pub fn key_agreement(&self) -> &[Value] {
        self.key_agreement.as_ref()
    }

    pub fn capability_invocation(&self) -> &[Value] {
        self.capability_invocation.as_ref()
    }

    pub fn capability_delegation(&self) -> &[Value] {
        self.capability_delegation.as_ref()
    }

    pub fn service(&self) -> &[Service] {
        self.service.as_ref()
    }

    pub fn extra_field(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    /// Returns the indices, in document order, of the services matching both the service name
    /// and the service type. A filter that is `None` matches every service.
    pub fn select_services(&self, name: Option<&str>, service_type: Option<&str>) -> Vec<usize> {
        let selected: Vec<usize> = self
            .service
            .iter()
            .enumerate()
            .filter(|(_, service)| service.matches(name, service_type))
            .map(|(index, _)| index)
            .collect();
        log::debug!(
            "Selected services {:?} of {} for name {:?} and type {:?}",
            selected,
            self.id,
            name,
            service_type
        );
        selected
    }
}

#[derive(Debug)]
pub struct DidDocumentBuilder {
    context: Vec<Value>,
    id: Did,
    also_known_as: Vec<String>,
    controller: Vec<Did>,
    verification_method: Vec<Value>,
    authentication: Vec<Value>,
    assertion_method: Vec<Value>,
    key_agreement: Vec<Value>,
    capability_invocation: Vec<Value>,
    capability_delegation: Vec<Value>,
    service: Vec<Service>,
    extra: Map<String, Value>,
}

impl DidDocumentBuilder {
    pub fn new(id: Did) -> Self {
        Self {
            context: Vec::new(),
            id,
            also_known_as: Vec::new(),
            controller: Vec::new(),
            verification_method: Vec::new(),
            authentication: Vec::new(),
            assertion_method: Vec::new(),
            key_agreement: Vec::new(),
            capability_invocation: Vec::new(),
            capability_delegation: Vec::new(),
            service: Vec::new(),
            extra: Map::new(),
        }
    }

    pub fn add_context(mut self, context: Value) -> Self {
        self.context.push(context);
        self
    }

    pub fn add_also_known_as(mut self, also_known_as: String) -> Self {
        self.also_known_as.push(also_known_as);
        self
    }

    pub fn add_controller(mut self, controller: Did) -> Self {
        self.controller.push(controller);
        self
    }

    pub fn add_verification_method(mut self, verification_method: Value) -> Self {
        self.verification_method.push(verification_method);
        self
    }

    pub fn add_authentication(mut self, authentication: Value) -> Self {
        self.authentication.push(authentication);
        self
    }

    pub fn add_assertion_method(mut self, assertion_method: Value) -> Self {
        self.assertion_method.push(assertion_method);
        self
    }

    pub fn add_key_agreement(mut self, key_agreement: Value) -> Self {
        self.key_agreement.push(key_agreement);
        self
    }

    pub fn add_capability_invocation(mut self, capability_invocation: Value) -> Self {
        self.capability_invocation.push(capability_invocation);
        self
    }

    pub fn add_capability_delegation(mut self, capability_delegation: Value) -> Self {
        self.capability_delegation.push(capability_delegation);
        self
    }

    pub fn add_service(mut self, service: Service) -> Self {
        self.service.push(service);
        self
    }

    pub fn add_extra_field(mut self, key: String, value: Value) -> Self {
        self.extra.insert(key, value);
        self
    }

    pub fn build(self) -> DidDocument {
        let context = if self.context.is_empty() {
            None
        } else {
            Some(OneOrList::from(self.context))
        };
        let controller = if self.controller.is_empty() {
            None
        } else {
            Some(OneOrList::from(self.controller))
        };
        DidDocument {
            context,
            id: self.id,
            also_known_as: self.also_known_as,
            controller,
            verification_method: self.verification_method,
            authentication: self.authentication,
            assertion_method: self.assertion_method,
            key_agreement: self.key_agreement,
            capability_invocation: self.capability_invocation,
            capability_delegation: self.capability_delegation,
            service: self.service,
            extra: self.extra,
        }
    }
}
