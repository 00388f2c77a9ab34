//! CLI command implementations for apidex

mod common;
mod index;
mod languages;

pub use common::parser_config;
pub use index::{IndexOptions, index};
pub use languages::languages;
