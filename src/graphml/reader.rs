//! Reading algorithm shared by the yEd dialects.
//!
//! Nodes are discovered first, in two passes: the first one collects a
//! draft per component node together with the id of its nearest enclosing
//! component node, the second one builds the immutable components in
//! document order so that each parent exists before its children. Edges are
//! then turned into one connector per label item.

use std::sync::Arc;

use indexmap::IndexMap;

use crate::base::xml::{XmlDocument, XmlElement};
use crate::diagnostics::DiagnosticKind;
use crate::error::{ParseError, ParseResult};
use crate::model::{
    ADDITIONAL_CONTROL_INFORMATION, CONTROL_ACTION, Component, Connector, ConnectorEnd,
    DiagramNode, FEEDBACK, Model, TypeRef,
};
use crate::parser::ParseContext;

/// Classification of an edge derived from its line style.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EdgeStereotype {
    ControlAction,
    Feedback,
    AdditionalControlInformation,
}

impl EdgeStereotype {
    pub const ALL: [EdgeStereotype; 3] = [
        Self::ControlAction,
        Self::Feedback,
        Self::AdditionalControlInformation,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::ControlAction => CONTROL_ACTION,
            Self::Feedback => FEEDBACK,
            Self::AdditionalControlInformation => ADDITIONAL_CONTROL_INFORMATION,
        }
    }
}

/// Geometry attributes as found in the document, not yet validated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawGeometry<'a> {
    pub x: &'a str,
    pub y: &'a str,
    pub width: &'a str,
    pub height: &'a str,
}

/// Dialect-specific parts of GraphML reading.
pub trait GraphMlDialect {
    /// Name used in log messages.
    fn name(&self) -> &'static str;

    /// Whether the node is drawn as a plain shape and thus is a component.
    fn is_component_node(&self, node: &XmlElement) -> bool;

    /// Single-line label of the node; empty when it has none.
    fn node_label(&self, node: &XmlElement) -> String;

    fn node_geometry<'a>(&self, node: &'a XmlElement) -> Option<RawGeometry<'a>>;

    /// Connector names carried by the edge label, one per line.
    fn label_items(&self, edge: &XmlElement) -> Vec<String>;

    /// Stereotype for the edge line style, `None` when the style maps to none.
    fn edge_stereotype(&self, edge: &XmlElement) -> Option<EdgeStereotype>;
}

/// Whether an element is a nested graph container.
pub(crate) fn is_graph(element: &XmlElement) -> bool {
    element.local_name() == "graph"
}

/// Content of `node` that belongs to it rather than to nodes of its nested
/// graph.
pub(crate) fn own_content(node: &XmlElement) -> impl Iterator<Item = &XmlElement> {
    node.descendants_until(&is_graph)
}

/// Read a GraphML document with the given dialect.
pub fn read<D: GraphMlDialect + ?Sized>(
    dialect: &D,
    document: &XmlDocument,
    ctx: &mut ParseContext<'_>,
) -> ParseResult<Model> {
    let root = document.root();
    if root.local_name() != "graphml" {
        return Err(ParseError::malformed("Expected graphml root element."));
    }
    tracing::debug!(dialect = dialect.name(), "Parsing GraphML document");

    let mut model = Model::new();
    for stereotype in EdgeStereotype::ALL {
        model.intern_stereotype(stereotype.name());
    }

    let nodes = read_nodes(dialect, root, ctx);
    tracing::trace!(count = nodes.len(), "Found nodes");
    for component in nodes.values() {
        model.add_component(Arc::clone(component));
    }
    for connector in read_connectors(dialect, root, &nodes, &mut model, ctx) {
        model.add_connector(connector);
    }
    Ok(model)
}

struct NodeDraft {
    id: String,
    label: String,
    diagram_node: Option<DiagramNode>,
    parent: Option<String>,
}

/// Component nodes keyed by their document id, in document order.
pub fn read_nodes<D: GraphMlDialect + ?Sized>(
    dialect: &D,
    root: &XmlElement,
    ctx: &mut ParseContext<'_>,
) -> IndexMap<String, Arc<Component>> {
    let mut drafts = Vec::new();
    collect_drafts(dialect, root, None, &mut drafts, ctx);

    let mut nodes: IndexMap<String, Arc<Component>> = IndexMap::with_capacity(drafts.len());
    for draft in drafts {
        let parent = draft.parent.as_ref().and_then(|p| nodes.get(p)).cloned();
        let component = Component::new(draft.label, draft.id.as_str(), TypeRef::UNSPECIFIED)
            .with_parent(parent)
            .with_diagram_node(draft.diagram_node);
        nodes.insert(draft.id, Arc::new(component));
    }
    nodes
}

fn collect_drafts<D: GraphMlDialect + ?Sized>(
    dialect: &D,
    element: &XmlElement,
    parent: Option<&str>,
    drafts: &mut Vec<NodeDraft>,
    ctx: &mut ParseContext<'_>,
) {
    for child in element.elements() {
        if child.local_name() != "node" {
            collect_drafts(dialect, child, parent, drafts, ctx);
            continue;
        }
        let accepted = node_draft(dialect, child, parent, ctx);
        let nested_parent = match &accepted {
            Some(draft) => Some(draft.id.clone()),
            None => parent.map(str::to_string),
        };
        if let Some(draft) = accepted {
            drafts.push(draft);
        }
        collect_drafts(dialect, child, nested_parent.as_deref(), drafts, ctx);
    }
}

fn node_draft<D: GraphMlDialect + ?Sized>(
    dialect: &D,
    node: &XmlElement,
    parent: Option<&str>,
    ctx: &mut ParseContext<'_>,
) -> Option<NodeDraft> {
    if !dialect.is_component_node(node) {
        return None;
    }
    let Some(id) = node.attr_non_empty("id") else {
        ctx.report(DiagnosticKind::DroppedNode, "Node without id.");
        return None;
    };
    let label = dialect.node_label(node);
    if label.is_empty() {
        ctx.report(
            DiagnosticKind::DroppedNode,
            format!("Node with id {id} has no label."),
        );
        return None;
    }
    let diagram_node = dialect.node_geometry(node).and_then(|raw| {
        let parsed = DiagramNode::from_raw(raw.x, raw.y, raw.width, raw.height);
        if parsed.is_none() {
            ctx.report(
                DiagnosticKind::MalformedGeometry,
                format!("Unable to extract geometry of node {id}."),
            );
        }
        parsed
    });
    Some(NodeDraft {
        id: id.to_string(),
        label,
        diagram_node,
        parent: parent.map(str::to_string),
    })
}

/// Connectors for every edge whose ends are known component nodes.
pub fn read_connectors<D: GraphMlDialect + ?Sized>(
    dialect: &D,
    root: &XmlElement,
    nodes: &IndexMap<String, Arc<Component>>,
    model: &mut Model,
    ctx: &mut ParseContext<'_>,
) -> Vec<Connector> {
    let mut connectors = Vec::new();
    for edge in root.descendants().filter(|e| e.local_name() == "edge") {
        let id = edge.attr("id").unwrap_or_default();
        let source = edge.attr("source").and_then(|s| nodes.get(s));
        let target = edge.attr("target").and_then(|t| nodes.get(t));
        let (Some(source), Some(target)) = (source, target) else {
            ctx.report(
                DiagnosticKind::DroppedEdge,
                format!("Edge {id} is missing resolved source or target node."),
            );
            continue;
        };
        let Some(kind) = dialect.edge_stereotype(edge) else {
            ctx.report(
                DiagnosticKind::UnmappedEdgeStyle,
                format!("Edge {id} is of no matching stereotyped type."),
            );
            continue;
        };
        let items = dialect.label_items(edge);
        if items.is_empty() {
            ctx.report(DiagnosticKind::EmptyLabel, format!("Edge {id} has no label."));
            continue;
        }
        let stereotype = model.intern_stereotype(kind.name());
        for item in items {
            connectors.push(
                Connector::new(
                    item,
                    id,
                    ConnectorEnd::unbounded(Arc::clone(source)),
                    ConnectorEnd::unbounded(Arc::clone(target)),
                )
                .with_stereotypes([stereotype.clone()]),
            );
        }
    }
    connectors
}
