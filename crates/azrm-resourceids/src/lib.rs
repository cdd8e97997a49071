//! # azrm-resourceids
//!
//! Typed Azure Resource Manager resource IDs.
//!
//! Every ID type is a flat struct of strings backed by a static segment
//! template. The template drives parsing (exact or case-insensitive on the
//! static segments), rendering back to the canonical path, validation and
//! the human-readable label.

pub mod commonids;
mod error;
mod macros;
mod parser;
mod resource_id;
mod segment;

pub use error::ResourceIdError;
pub use parser::{render, ParseResult, Parser};
pub use resource_id::{recase, ResourceId, Validation};
pub use segment::{segment_label, Segment, SegmentType};
