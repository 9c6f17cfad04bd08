//! Foundation types for control structure parsing.
//!
//! This module provides the primitives used throughout the parser:
//! - [`ElementId`] - Identifier of an element in a source document
//! - [`Cardinality`] - Multiplicity bound with a single unbounded sentinel
//! - [`labels`] - Label text assembly and default naming
//! - [`xml`] - Owned XML element tree read with quick-xml
//!
//! This module has NO dependencies on other scs modules.

mod cardinality;
mod id;
pub mod labels;
pub mod xml;

pub use cardinality::Cardinality;
pub use id::ElementId;
