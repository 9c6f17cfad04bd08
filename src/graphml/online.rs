//! GraphML as written by yEd Live.
//!
//! yEd Live stores styles in the yFiles for HTML namespace (`yjs`) and keeps
//! a JSON copy of the diagram in a `Json` side-channel element, which is how
//! its files are told apart from desktop ones.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use quick_xml::events::Event;

use crate::base::labels::{join_fragments, split_items};
use crate::base::xml::{XmlElement, find_event, start_local_name};

use super::reader::{EdgeStereotype, GraphMlDialect, RawGeometry, own_content};

fn is_prefixed(element: &XmlElement, prefix: &str, local: &str) -> bool {
    element.local_name() == local && element.prefix() == Some(prefix)
}

/// Whether the GraphML document at `path` was written by yEd Live.
pub fn is_online_export(path: &Path) -> bool {
    let Ok(file) = File::open(path) else {
        return false;
    };
    let mut in_json = false;
    let mut json = String::new();
    find_event(BufReader::new(file), |event| match event {
        Event::Start(start) | Event::Empty(start) => {
            if start.name().prefix().is_some_and(|p| p.as_ref() == b"yjs") {
                return true;
            }
            if matches!(event, Event::Start(_)) && start_local_name(start) == "Json" {
                in_json = true;
                json.clear();
            }
            false
        }
        Event::Text(text) if in_json => {
            if let Ok(text) = text.unescape() {
                json.push_str(&text);
            }
            false
        }
        Event::CData(data) if in_json => {
            json.push_str(&String::from_utf8_lossy(data));
            false
        }
        Event::End(end) if in_json && end.name().local_name().as_ref() == b"Json" => {
            in_json = false;
            serde_json::from_str::<serde_json::Value>(json.trim()).is_ok_and(|v| v.is_object())
        }
        _ => false,
    })
    .unwrap_or(false)
}

/// Hooks for yEd Live documents.
#[derive(Clone, Copy, Debug, Default)]
pub struct OnlineDialect;

impl GraphMlDialect for OnlineDialect {
    fn name(&self) -> &'static str {
        "yEd Live"
    }

    fn is_component_node(&self, node: &XmlElement) -> bool {
        node.descendants()
            .any(|e| is_prefixed(e, "yjs", "ShapeNodeStyle") && !e.has_attr("shape"))
    }

    fn node_label(&self, node: &XmlElement) -> String {
        join_fragments(
            own_content(node)
                .filter(|e| is_prefixed(e, "y", "Label"))
                .filter_map(|e| e.attr("Text")),
        )
    }

    fn node_geometry<'a>(&self, node: &'a XmlElement) -> Option<RawGeometry<'a>> {
        let rectangle = own_content(node).find(|e| is_prefixed(e, "y", "RectD"))?;
        Some(RawGeometry {
            x: rectangle.attr("X").unwrap_or_default(),
            y: rectangle.attr("Y").unwrap_or_default(),
            width: rectangle.attr("Width").unwrap_or_default(),
            height: rectangle.attr("Height").unwrap_or_default(),
        })
    }

    fn label_items(&self, edge: &XmlElement) -> Vec<String> {
        let text = edge
            .descendants()
            .filter(|e| is_prefixed(e, "y", "Label"))
            .filter_map(|e| e.attr("Text"))
            .collect::<Vec<_>>()
            .join("\n");
        split_items(&text)
    }

    fn edge_stereotype(&self, edge: &XmlElement) -> Option<EdgeStereotype> {
        let Some(stroke) = edge.descendants().find(|e| is_prefixed(e, "yjs", "Stroke")) else {
            return Some(EdgeStereotype::ControlAction);
        };
        match stroke.attr("dashStyle") {
            None | Some("Solid") => Some(EdgeStereotype::ControlAction),
            Some("Dash") => Some(EdgeStereotype::Feedback),
            Some("Dot") => Some(EdgeStereotype::AdditionalControlInformation),
            Some(_) => None,
        }
    }
}
