use std::collections::HashMap;

use async_trait::async_trait;
use did_resolver::{
    did_doc::schema::{did_doc::DidDocument, service::Service, utils::OneOrList},
    did_parser::Did,
    error::GenericError,
    shared_types::{driver_outcome::DriverOutcome, resolve_result::ResolveResult, GenericMap},
    traits::driver::DidDriver,
};
use did_resolver_registry::{config::ResolverRegistryConfig, ResolverRegistry};
use serde_json::json;

/// Maps human-readable aliases to DIDs.
struct AliasDriver {
    aliases: HashMap<String, String>,
}

#[async_trait]
impl DidDriver for AliasDriver {
    async fn resolve(&self, identifier: &str) -> Result<Option<DriverOutcome>, GenericError> {
        let Some(did) = self.aliases.get(identifier) else {
            return Ok(None);
        };
        let result = ResolveResult::builder(DidDocument::builder(Did::parse(did.clone())?).build())
            .add_method_metadata("alias".to_string(), json!(identifier))
            .build();
        Ok(Some(DriverOutcome::Redirect {
            next: format!("{did}?service=agent"),
            result,
        }))
    }

    fn properties(&self) -> Option<GenericMap> {
        json!({ "aliases": self.aliases.len() }).as_object().cloned()
    }
}

/// Serves documents for `did:example` from memory.
struct ExampleDriver;

#[async_trait]
impl DidDriver for ExampleDriver {
    async fn resolve(&self, identifier: &str) -> Result<Option<DriverOutcome>, GenericError> {
        if !identifier.starts_with("did:example:") {
            return Ok(None);
        }
        let did = Did::parse(identifier.split(['?', '#', '/']).next().unwrap_or(identifier).to_string())?;
        let document = DidDocument::builder(did.clone())
            .add_service(
                Service::builder()
                    .id(format!("{did}#agent"))
                    .service_type(OneOrList::One("DIDCommMessaging".to_string()))
                    .service_endpoint("https://agent.example.com")
                    .build(),
            )
            .add_service(
                Service::builder()
                    .id(format!("{did}#hub"))
                    .service_type(OneOrList::One("LinkedDomains".to_string()))
                    .service_endpoint("https://example.com")
                    .build(),
            )
            .build();
        Ok(Some(DriverOutcome::Resolved(ResolveResult::builder(document).build())))
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), GenericError> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ResolverRegistryConfig::from_env()?;
    let registry = ResolverRegistry::with_config(config)
        .register_driver(
            "alias".to_string(),
            AliasDriver {
                aliases: HashMap::from([("alice".to_string(), "did:example:alice".to_string())]),
            },
        )
        .register_driver("example".to_string(), ExampleDriver);

    log::info!("Resolver registry: {:?}", registry);
    log::info!("Driver properties: {:?}", registry.properties()?);

    for identifier in ["alice", "did:example:bob", "did:other:carol"] {
        match registry.resolve(identifier, None).await? {
            Some(result) => println!("{}", serde_json::to_string_pretty(&result)?),
            None => log::warn!("Unable to resolve {}", identifier),
        }
    }
    Ok(())
}
