//! Non-fatal events reported while extracting a model.
//!
//! A diagnostic records an element that was dropped or degraded while the
//! parse carried on. Each one is logged through `tracing` at the moment it is
//! reported and kept in the per-parse [`Diagnostics`] collector.

use std::fmt;

/// What kind of local degradation happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// A diagram node was not turned into a component.
    DroppedNode,
    /// A diagram edge was not turned into connectors.
    DroppedEdge,
    /// An edge line style matched none of the stereotype mappings.
    UnmappedEdgeStyle,
    /// Node geometry was present but not numeric.
    MalformedGeometry,
    /// A super-type or member reference did not resolve.
    UnresolvedReference,
    /// A connector end resolved to neither a role nor a part.
    UnresolvedConnectorEnd,
    /// A key was registered twice and the later entry replaced the former.
    NameCollision,
    /// An edge carried no label text.
    EmptyLabel,
}

impl DiagnosticKind {
    /// Stable short code for the kind.
    pub fn code(&self) -> &'static str {
        match self {
            Self::DroppedNode => "dropped-node",
            Self::DroppedEdge => "dropped-edge",
            Self::UnmappedEdgeStyle => "unmapped-edge-style",
            Self::MalformedGeometry => "malformed-geometry",
            Self::UnresolvedReference => "unresolved-reference",
            Self::UnresolvedConnectorEnd => "unresolved-connector-end",
            Self::NameCollision => "name-collision",
            Self::EmptyLabel => "empty-label",
        }
    }
}

/// A single non-fatal event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind.code(), self.message)
    }
}

/// Collector for the diagnostics of one parse.
#[derive(Clone, Debug, Default)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Log and record a diagnostic.
    pub fn report(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        let diagnostic = Diagnostic::new(kind, message);
        match kind {
            DiagnosticKind::UnmappedEdgeStyle => {
                tracing::debug!(code = kind.code(), "{}", diagnostic.message)
            }
            _ => tracing::warn!(code = kind.code(), "{}", diagnostic.message),
        }
        self.items.push(diagnostic);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of diagnostics of the given kind.
    pub fn count(&self, kind: DiagnosticKind) -> usize {
        self.items.iter().filter(|d| d.kind == kind).count()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.items
    }
}
