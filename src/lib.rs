//! herr turns CSV tables of error definitions into Rust error types that
//! share a coded-error contract: a stable serialized identity, a numeric
//! code, a category prefix, a description and standard error chaining.

pub mod cli;
pub mod code;
pub mod config;
pub mod definition;
pub mod diagnostic;
pub mod emit;
pub mod error;
pub mod generate;
pub mod reader;
pub mod registry;
pub mod sort;

pub use error::Error;
