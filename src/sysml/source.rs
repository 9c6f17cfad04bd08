//! Source object graph read from an XMI document.
//!
//! This is the minimal view of a UML/SysML model that extraction needs.
//! Elements refer to each other by [`ElementId`] (`xmi:id`), never by
//! pointer, so the graph has no ownership cycles.
//!
//! ```text
//! SourceGraph
//! ├── root: SourceRoot
//! ├── classes: IndexMap<ElementId, SourceClass>
//! ├── properties: IndexMap<ElementId, SourceProperty>   (attributes, ends, ports)
//! ├── connectors: IndexMap<ElementId, SourceConnector>
//! ├── associations: IndexMap<ElementId, SourceAssociation>
//! ├── primitive_types: IndexMap<ElementId, SourcePrimitive>
//! └── profile_applications: Vec<ProfileApplication>
//! ```

use indexmap::IndexMap;
use rustc_hash::FxHashSet;

use crate::base::{Cardinality, ElementId};
use crate::model::AggregationKind;

/// The top level model element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SourceRoot {
    pub id: Option<ElementId>,
    pub name: String,
}

/// A class (or component/block) element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceClass {
    pub id: ElementId,
    pub name: String,
    pub qualified_name: String,
    pub super_classes: Vec<ElementId>,
    /// Owned attributes and ports in document order.
    pub attributes: Vec<ElementId>,
}

/// A typed property: a class attribute, a port or an association-owned end.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceProperty {
    pub id: ElementId,
    pub name: Option<String>,
    pub qualified_name: String,
    pub type_id: Option<ElementId>,
    pub lower: Cardinality,
    pub upper: Cardinality,
    pub aggregation: AggregationKind,
    pub navigable: bool,
    pub is_port: bool,
    pub association: Option<ElementId>,
    /// The other member end of `association`, when it has exactly two.
    pub opposite: Option<ElementId>,
}

/// One end of a connector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceConnectorEnd {
    pub id: Option<ElementId>,
    pub role: Option<ElementId>,
    pub part_with_port: Option<ElementId>,
    pub lower: Cardinality,
    pub upper: Cardinality,
}

/// A connector owned by a class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceConnector {
    pub id: ElementId,
    pub name: String,
    pub qualified_name: String,
    pub ends: Vec<SourceConnectorEnd>,
}

/// A packaged association.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceAssociation {
    pub id: ElementId,
    pub name: Option<String>,
    /// Absent when the association is unnamed.
    pub qualified_name: Option<String>,
    pub member_ends: Vec<ElementId>,
}

/// A primitive or data type, local or from an external library.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourcePrimitive {
    pub id: ElementId,
    pub name: String,
    pub qualified_name: String,
}

/// A stereotype application record.
///
/// `referenced_ids` holds every identifier found in the record's reference
/// slots (`base_Class`, `base_Connector`, ...), in slot order. Tag value
/// slots are not references.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileApplication {
    pub tag_name: String,
    pub referenced_ids: Vec<ElementId>,
}

impl ProfileApplication {
    pub fn new(tag_name: impl Into<String>, referenced_ids: Vec<ElementId>) -> Self {
        Self {
            tag_name: tag_name.into(),
            referenced_ids,
        }
    }

    pub fn references(&self, id: &ElementId) -> bool {
        self.referenced_ids.contains(id)
    }
}

/// Everything extraction reads from one document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SourceGraph {
    pub root: SourceRoot,
    pub classes: IndexMap<ElementId, SourceClass>,
    pub properties: IndexMap<ElementId, SourceProperty>,
    pub connectors: IndexMap<ElementId, SourceConnector>,
    pub associations: IndexMap<ElementId, SourceAssociation>,
    pub primitive_types: IndexMap<ElementId, SourcePrimitive>,
    pub profile_applications: Vec<ProfileApplication>,
}

impl SourceGraph {
    /// Attributes of `class` followed by those inherited from its
    /// super-classes, each listed once.
    pub fn all_attributes(&self, class: &SourceClass) -> Vec<ElementId> {
        let mut out = Vec::new();
        let mut seen_attributes = FxHashSet::default();
        let mut seen_classes = FxHashSet::default();
        let mut pending = vec![class];
        while let Some(current) = pending.pop() {
            if !seen_classes.insert(&current.id) {
                continue;
            }
            for attribute in &current.attributes {
                if seen_attributes.insert(attribute) {
                    out.push(attribute.clone());
                }
            }
            pending.extend(
                current
                    .super_classes
                    .iter()
                    .rev()
                    .filter_map(|id| self.classes.get(id)),
            );
        }
        out
    }

    /// Compute `opposite` for every property whose association has exactly
    /// two member ends.
    pub fn link_opposite_ends(&mut self) {
        let pairs: Vec<(ElementId, ElementId)> = self
            .associations
            .values()
            .filter(|a| a.member_ends.len() == 2)
            .flat_map(|a| {
                let (first, second) = (&a.member_ends[0], &a.member_ends[1]);
                [
                    (first.clone(), second.clone()),
                    (second.clone(), first.clone()),
                ]
            })
            .collect();
        for (property, opposite) in pairs {
            if let Some(p) = self.properties.get_mut(&property) {
                p.opposite = Some(opposite);
            }
        }
    }
}
