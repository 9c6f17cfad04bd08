//! GraphML as written by the yEd desktop editor.
//!
//! Components are nodes drawn with a rectangle shape. Edge line styles map to
//! stereotypes: `line` to control action, `dashed` to feedback and `dotted`
//! to additional control information.

use crate::base::labels::{join_fragments, split_items};
use crate::base::xml::XmlElement;

use super::reader::{EdgeStereotype, GraphMlDialect, RawGeometry, own_content};

fn is_y(element: &XmlElement, local: &str) -> bool {
    element.local_name() == local && element.prefix() == Some("y")
}

/// Hooks for yEd desktop documents.
#[derive(Clone, Copy, Debug, Default)]
pub struct DesktopDialect;

impl GraphMlDialect for DesktopDialect {
    fn name(&self) -> &'static str {
        "yEd desktop"
    }

    fn is_component_node(&self, node: &XmlElement) -> bool {
        node.descendants()
            .any(|e| is_y(e, "Shape") && e.attr("type") == Some("rectangle"))
    }

    fn node_label(&self, node: &XmlElement) -> String {
        let mut labels = own_content(node).filter(|e| is_y(e, "NodeLabel"));
        let is_group = node.elements().any(|e| e.local_name() == "graph");
        if is_group {
            // Group nodes carry a label per state; the first one is the title.
            labels
                .next()
                .map(|label| join_fragments([label.text()]))
                .unwrap_or_default()
        } else {
            join_fragments(labels.map(XmlElement::text))
        }
    }

    fn node_geometry<'a>(&self, node: &'a XmlElement) -> Option<RawGeometry<'a>> {
        let geometry = own_content(node).find(|e| is_y(e, "Geometry"))?;
        Some(RawGeometry {
            x: geometry.attr("x").unwrap_or_default(),
            y: geometry.attr("y").unwrap_or_default(),
            width: geometry.attr("width").unwrap_or_default(),
            height: geometry.attr("height").unwrap_or_default(),
        })
    }

    fn label_items(&self, edge: &XmlElement) -> Vec<String> {
        let text = edge
            .descendants()
            .filter(|e| is_y(e, "EdgeLabel"))
            .map(|e| e.text())
            .collect::<Vec<_>>()
            .join("\n");
        split_items(&text)
    }

    fn edge_stereotype(&self, edge: &XmlElement) -> Option<EdgeStereotype> {
        let style = edge.descendants().find(|e| is_y(e, "LineStyle"))?;
        match style.attr("type")? {
            "line" => Some(EdgeStereotype::ControlAction),
            "dashed" => Some(EdgeStereotype::Feedback),
            "dotted" => Some(EdgeStereotype::AdditionalControlInformation),
            _ => None,
        }
    }
}
