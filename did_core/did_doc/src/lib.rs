pub mod schema;

pub use did_parser_nom;
