pub mod error;
pub mod shared_types;
pub mod traits;

pub use did_doc;
pub use did_parser_nom as did_parser;
