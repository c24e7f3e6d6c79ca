mod parsing;

use std::{
    collections::HashMap,
    fmt::{Display, Formatter},
    str::FromStr,
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Did, DidRange, ParseError};

const SERVICE_PARAMETER: &str = "service";

/// An absolute DID URL: a DID optionally followed by `;` parameters, a path, a query and a
/// fragment. Components are stored as ranges into the original string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DidUrl {
    did_url: String,
    did: DidRange,
    method: DidRange,
    id: DidRange,
    params: Vec<(DidRange, DidRange)>,
    path: Option<DidRange>,
    queries: Vec<(DidRange, DidRange)>,
    fragment: Option<DidRange>,
}

impl DidUrl {
    pub fn parse(did_url: String) -> Result<Self, ParseError> {
        parsing::parse_did_url(did_url)
    }

    pub fn did_url(&self) -> &str {
        self.did_url.as_ref()
    }

    /// The base DID, with every DID URL component stripped.
    pub fn did(&self) -> &str {
        &self.did_url[self.did.clone()]
    }

    pub fn method(&self) -> &str {
        &self.did_url[self.method.clone()]
    }

    pub fn id(&self) -> &str {
        &self.did_url[self.id.clone()]
    }

    pub fn path(&self) -> Option<&str> {
        self.path.clone().map(|range| &self.did_url[range])
    }

    pub fn fragment(&self) -> Option<&str> {
        self.fragment.clone().map(|range| &self.did_url[range])
    }

    pub fn queries(&self) -> HashMap<String, String> {
        self.to_map(&self.queries)
    }

    /// Legacy matrix parameters, e.g. `did:example:123;service=agent`.
    pub fn params(&self) -> HashMap<String, String> {
        self.to_map(&self.params)
    }

    pub fn query(&self, key: &str) -> Option<&str> {
        self.lookup(&self.queries, key)
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.lookup(&self.params, key)
    }

    /// Name of the service this reference selects, taken from the `service` query parameter or,
    /// failing that, from the legacy `;service=` parameter.
    pub fn service(&self) -> Option<&str> {
        self.query(SERVICE_PARAMETER)
            .or_else(|| self.param(SERVICE_PARAMETER))
    }

    pub fn to_did(&self) -> Result<Did, ParseError> {
        Did::parse(self.did().to_string())
    }

    fn lookup(&self, pairs: &[(DidRange, DidRange)], key: &str) -> Option<&str> {
        pairs
            .iter()
            .find(|(k, _)| &self.did_url[k.clone()] == key)
            .map(|(_, v)| &self.did_url[v.clone()])
    }

    fn to_map(&self, pairs: &[(DidRange, DidRange)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| {
                (
                    self.did_url[k.clone()].to_string(),
                    self.did_url[v.clone()].to_string(),
                )
            })
            .collect()
    }
}

impl TryFrom<String> for DidUrl {
    type Error = ParseError;

    fn try_from(did_url: String) -> Result<Self, Self::Error> {
        Self::parse(did_url)
    }
}

impl FromStr for DidUrl {
    type Err = ParseError;

    fn from_str(did_url: &str) -> Result<Self, Self::Err> {
        Self::parse(did_url.to_string())
    }
}

impl Display for DidUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.did_url)
    }
}

impl Serialize for DidUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.did_url())
    }
}

impl<'de> Deserialize<'de> for DidUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let did_url = String::deserialize(deserializer)?;
        DidUrl::parse(did_url).map_err(serde::de::Error::custom)
    }
}
