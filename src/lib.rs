//! packer — merge per-method analysis results into one XML document.
//!
//! Each input entry pairs a static-analysis result (signature and javadoc)
//! with a dynamic-analysis result (signature and inferred contract). Records
//! are built in memory first ([`record`]), then written in one pass
//! ([`render`]).

pub mod contract;
pub mod doc;
pub mod error;
pub mod input;
pub mod model;
pub mod record;
pub mod render;
pub mod schema;
pub mod xml;

pub use error::{PackError, Result};
pub use render::{pack_methods, pack_to_writer, WriterOptions};
