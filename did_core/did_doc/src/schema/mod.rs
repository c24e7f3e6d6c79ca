pub mod did_doc;
pub mod service;
pub mod utils;
