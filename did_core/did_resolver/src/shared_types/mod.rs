pub mod driver_outcome;
pub mod resolve_result;
pub mod resolver_metadata;

use serde_json::{Map, Value};

pub type GenericMap = Map<String, Value>;
