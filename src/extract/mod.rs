//! The parameter-extraction engine: section location, value extraction, and
//! per-document orchestration.

pub mod engine;
pub mod parameters;
pub mod sections;

pub use engine::{ExtractionRecord, Extractor, ParameterQuery, SCOPE_SEPARATOR};
pub use parameters::{find_special_values, find_values, normalize_line_endings};
pub use sections::{SectionDescriptor, SectionTable};
