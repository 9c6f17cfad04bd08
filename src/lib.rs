//! # scs
//!
//! Extracts STPA control structures from system models.
//!
//! Supported inputs are UML/SysML models in XMI (standard exports and
//! Enterprise Architect exports), yEd GraphML diagrams (desktop and yEd
//! Live), and zip archives holding one of these. Every input ends up as the
//! same normalized [`Model`].
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! cli       → `scs` binary front end (feature "cli")
//!   ↓
//! parser    → Strategy table, ParseContext, entry points
//!   ↓
//! archive   → Zip sniffing and scoped extraction
//! graphml   → yEd desktop / yEd Live readers
//! sysml     → XMI reader, vendor rewrite, extraction
//!   ↓
//! model     → Normalized control structure graph
//!   ↓
//! base      → Primitives (ElementId, Cardinality, labels, XML tree)
//! ```

// ============================================================================
// MODULES (dependency order: base → model → sysml/graphml/archive → parser)
// ============================================================================

/// Foundation types: ElementId, Cardinality, label helpers, XML tree
pub mod base;

/// Parser configuration
pub mod config;

/// Non-fatal events reported during a parse
pub mod diagnostics;

/// Fatal parse errors
pub mod error;

/// Normalized control structure model
pub mod model;

/// Zip archive support
pub mod archive;

/// yEd GraphML readers
pub mod graphml;

/// UML/SysML XMI reading and extraction
pub mod sysml;

/// Strategy selection and parse entry points
pub mod parser;

/// Command-line front end
#[cfg(feature = "cli")]
pub mod cli;

// Re-export the entry points
pub use parser::{ControlStructureParsers, ParseContext, Parsed, StrategyKind, parse};

// Re-export commonly needed items
pub use config::{CollisionPolicy, ParserConfig, TagStrategy};
pub use diagnostics::{Diagnostic, DiagnosticKind};
pub use error::{ParseError, ParseResult};
pub use model::{
    AggregationKind, Association, AssociationEnd, Component, ComponentType, Connector,
    ConnectorEnd, DiagramNode, Model, Stereotype, TypeRef,
};
