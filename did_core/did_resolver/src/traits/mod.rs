pub mod driver;
pub mod uni_resolver;
