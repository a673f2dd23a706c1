//! Attribute binding: applies raw markup attributes to node behaviors through a
//! CSV mapping table, recording unknown attributes as placeholder rows.

pub mod convert;
pub mod engine;
pub mod error;
pub mod mapping;

pub use convert::{ConversionError, ValueConverter, ValueType};
pub use engine::{ApplyReport, BindingEngine};
pub use error::BindError;
pub use mapping::{MappingEntry, MappingTable};
pub use weft_project::MissingMappingPolicy;
