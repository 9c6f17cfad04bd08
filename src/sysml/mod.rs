//! UML/SysML models in XMI.
//!
//! Parsing happens in two steps. [`xmi::read_source_graph`] turns the
//! document into a [`source::SourceGraph`] that still mirrors the UML
//! metamodel; [`extract::extract`] then derives the control structure from
//! it, attaching profile stereotypes through a [`tags::TagResolver`].
//! Enterprise Architect exports are first rewritten by [`vendor::transform`].

pub mod extract;
pub mod source;
pub mod tags;
pub mod vendor;
pub mod xmi;

pub use extract::extract;
pub use source::SourceGraph;
pub use tags::{ScanResolver, TagIndex, TagResolver};
