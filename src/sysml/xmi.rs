//! XMI reader producing a [`SourceGraph`].
//!
//! Reads UML 2.x XMI as written by Papyrus, Eclipse UML2 and (after the
//! vendor pre-transform) Enterprise Architect. Element kinds come from
//! `xmi:type`, falling back to the tag name for the handful of tags whose
//! type is implied. References may appear in any of the three XMI forms:
//!
//! ```text
//! <ownedAttribute type="_c1"/>                         attribute
//! <ownedAttribute><type xmi:idref="_c1"/></...>        idref child
//! <ownedAttribute><type href="lib.uml#String"/></...>  href child
//! ```

use crate::base::xml::{XmlDocument, XmlElement, local_part};
use crate::base::{Cardinality, ElementId};
use crate::error::{ParseError, ParseResult};
use crate::model::AggregationKind;

use super::source::{
    ProfileApplication, SourceAssociation, SourceClass, SourceConnector, SourceConnectorEnd,
    SourceGraph, SourcePrimitive, SourceProperty, SourceRoot,
};

/// Separator of qualified name segments.
pub const QUALIFIED_NAME_SEPARATOR: &str = "::";

/// Read the source object graph from XMI bytes.
pub fn read_source_graph(input: &[u8]) -> ParseResult<SourceGraph> {
    let document = XmlDocument::parse(input)
        .map_err(|e| ParseError::malformed_caused("Unable to parse XMI document", e))?;
    let root = document.root();

    let (model, records) = if is_model(root) {
        (root, None)
    } else if root.local_name() == "XMI" {
        let model = root
            .elements()
            .find(|e| is_model(e))
            .ok_or_else(|| ParseError::malformed("Expected top level model element."))?;
        (model, Some(root))
    } else {
        return Err(ParseError::malformed("Expected top level model element."));
    };

    let mut reader = XmiReader::default();
    reader.graph.root = SourceRoot {
        id: model.attr("xmi:id").map(ElementId::from),
        name: model.attr("name").unwrap_or_default().to_string(),
    };
    reader.enter(model);
    reader.walk(model, &Owner::Namespace);
    reader.leave(model);

    if let Some(wrapper) = records {
        reader.graph.profile_applications = wrapper
            .elements()
            .filter(|e| !std::ptr::eq(*e, model))
            .filter(|e| !matches!(e.local_name(), "Documentation" | "Extension"))
            .filter(|e| e.attributes().any(|(k, _)| k.starts_with("base_")))
            .map(profile_application)
            .collect();
    }

    let mut graph = reader.graph;
    graph.link_opposite_ends();
    tracing::debug!(
        classes = graph.classes.len(),
        properties = graph.properties.len(),
        connectors = graph.connectors.len(),
        associations = graph.associations.len(),
        profile_applications = graph.profile_applications.len(),
        "Read XMI source graph"
    );
    Ok(graph)
}

fn is_model(element: &XmlElement) -> bool {
    element.local_name() == "Model"
        && (element.prefix() == Some("uml") || xmi_type(element) == Some("Model"))
}

fn xmi_type(element: &XmlElement) -> Option<&str> {
    element.attr("xmi:type").map(local_part)
}

/// Kind of a model element, as far as extraction cares.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Kind {
    Class,
    Association,
    Primitive,
    Property,
    Port,
    Connector,
    /// Anything else; descended into for nested elements.
    Other,
}

fn classify(element: &XmlElement) -> Kind {
    match xmi_type(element) {
        Some("Class" | "Component" | "AssociationClass") => Kind::Class,
        Some("Association") => Kind::Association,
        Some("PrimitiveType" | "DataType" | "Enumeration") => Kind::Primitive,
        Some("Property") => Kind::Property,
        Some("Port") => Kind::Port,
        Some("Connector") => Kind::Connector,
        Some(_) => Kind::Other,
        None => match element.local_name() {
            "ownedAttribute" | "ownedEnd" => Kind::Property,
            "ownedPort" => Kind::Port,
            "ownedConnector" => Kind::Connector,
            _ => Kind::Other,
        },
    }
}

/// The element that owns the properties met while walking.
enum Owner {
    Namespace,
    Class(ElementId),
    Association { navigable_ends: Vec<ElementId> },
}

#[derive(Default)]
struct XmiReader {
    graph: SourceGraph,
    scope: Vec<String>,
    anonymous: usize,
}

impl XmiReader {
    fn enter(&mut self, element: &XmlElement) {
        self.scope
            .push(element.attr("name").unwrap_or_default().to_string());
    }

    fn leave(&mut self, _element: &XmlElement) {
        self.scope.pop();
    }

    fn qualified_name(&self, name: &str) -> String {
        self.scope
            .iter()
            .map(String::as_str)
            .filter(|s| !s.is_empty())
            .chain(std::iter::once(name))
            .collect::<Vec<_>>()
            .join(QUALIFIED_NAME_SEPARATOR)
    }

    fn id_of(&mut self, element: &XmlElement) -> ElementId {
        match element.attr_non_empty("xmi:id") {
            Some(id) => ElementId::from(id),
            None => {
                self.anonymous += 1;
                ElementId::from(format!("scs-anonymous-{}", self.anonymous))
            }
        }
    }

    fn walk(&mut self, parent: &XmlElement, owner: &Owner) {
        for element in parent.elements() {
            match classify(element) {
                Kind::Class => self.read_class(element),
                Kind::Association => self.read_association(element),
                Kind::Primitive => self.read_primitive(element),
                Kind::Property => self.read_property(element, owner, false),
                Kind::Port => self.read_property(element, owner, true),
                Kind::Connector => self.read_connector(element),
                Kind::Other => {
                    self.enter(element);
                    self.walk(element, owner);
                    self.leave(element);
                }
            }
        }
    }

    fn read_class(&mut self, element: &XmlElement) {
        let id = self.id_of(element);
        let name = element.attr("name").unwrap_or_default().to_string();
        let super_classes = element
            .children_named("generalization")
            .flat_map(|g| self.references(g, "general"))
            .collect();
        let class = SourceClass {
            id: id.clone(),
            qualified_name: self.qualified_name(&name),
            name,
            super_classes,
            attributes: Vec::new(),
        };
        self.graph.classes.insert(id.clone(), class);

        self.enter(element);
        self.walk(element, &Owner::Class(id));
        self.leave(element);
    }

    fn read_association(&mut self, element: &XmlElement) {
        let id = self.id_of(element);
        let name = element.attr_non_empty("name").map(str::to_string);
        let association = SourceAssociation {
            id: id.clone(),
            qualified_name: name.as_deref().map(|n| self.qualified_name(n)),
            name,
            member_ends: self.references(element, "memberEnd"),
        };
        let navigable_ends = self.references(element, "navigableOwnedEnd");
        self.graph.associations.insert(id, association);

        self.enter(element);
        self.walk(element, &Owner::Association { navigable_ends });
        self.leave(element);
    }

    fn read_primitive(&mut self, element: &XmlElement) {
        let id = self.id_of(element);
        let name = element.attr("name").unwrap_or_default().to_string();
        let primitive = SourcePrimitive {
            id: id.clone(),
            qualified_name: self.qualified_name(&name),
            name,
        };
        self.graph.primitive_types.insert(id, primitive);
    }

    fn read_property(&mut self, element: &XmlElement, owner: &Owner, is_port: bool) {
        let id = self.id_of(element);
        let name = element.attr_non_empty("name").map(str::to_string);
        let navigable = match owner {
            Owner::Association { navigable_ends } => navigable_ends.contains(&id),
            Owner::Class(_) | Owner::Namespace => true,
        };
        let (lower, upper) = multiplicity(element);
        let property = SourceProperty {
            id: id.clone(),
            qualified_name: name
                .as_deref()
                .map(|n| self.qualified_name(n))
                .unwrap_or_default(),
            name,
            type_id: self.reference(element, "type"),
            lower,
            upper,
            aggregation: AggregationKind::from_uml(element.attr("aggregation")),
            navigable,
            is_port,
            association: self.reference(element, "association"),
            opposite: None,
        };
        self.graph.properties.insert(id.clone(), property);

        if let Owner::Class(class_id) = owner {
            if let Some(class) = self.graph.classes.get_mut(class_id) {
                class.attributes.push(id);
            }
        }
    }

    fn read_connector(&mut self, element: &XmlElement) {
        let id = self.id_of(element);
        let name = element.attr("name").unwrap_or_default().to_string();
        let ends = element
            .children_named("end")
            .map(|end| {
                let (lower, upper) = multiplicity(end);
                SourceConnectorEnd {
                    id: end.attr_non_empty("xmi:id").map(ElementId::from),
                    role: self.reference(end, "role"),
                    part_with_port: self.reference(end, "partWithPort"),
                    lower,
                    upper,
                }
            })
            .collect();
        let connector = SourceConnector {
            id: id.clone(),
            qualified_name: self.qualified_name(&name),
            name,
            ends,
        };
        self.graph.connectors.insert(id, connector);
    }

    fn reference(&mut self, element: &XmlElement, key: &str) -> Option<ElementId> {
        self.references(element, key).into_iter().next()
    }

    /// All references stored under `key`, in attribute or child form.
    fn references(&mut self, element: &XmlElement, key: &str) -> Vec<ElementId> {
        let mut out: Vec<ElementId> = element
            .attr(key)
            .map(|v| v.split_whitespace().map(ElementId::from).collect())
            .unwrap_or_default();
        for child in element.children_named(key) {
            if let Some(id) = child.attr_non_empty("xmi:idref") {
                out.push(ElementId::from(id));
            } else if let Some(href) = child.attr_non_empty("href") {
                out.push(self.resolve_href(href));
            }
        }
        out
    }

    /// Resolve an `href`. Same-document links become plain ids; links into
    /// other resources (type libraries) are registered as primitive types.
    fn resolve_href(&mut self, href: &str) -> ElementId {
        let (resource, fragment) = href.split_once('#').unwrap_or(("", href));
        if resource.is_empty() {
            return ElementId::from(fragment);
        }
        let id = ElementId::from(href);
        if !self.graph.primitive_types.contains_key(&id) {
            let qualified_name = if resource.contains("PrimitiveTypes") {
                format!("PrimitiveTypes{QUALIFIED_NAME_SEPARATOR}{fragment}")
            } else {
                fragment.to_string()
            };
            self.graph.primitive_types.insert(
                id.clone(),
                SourcePrimitive {
                    id: id.clone(),
                    name: fragment.to_string(),
                    qualified_name,
                },
            );
        }
        id
    }
}

/// Lower and upper bounds of a multiplicity element.
///
/// An absent bound is 1; a present literal without a value is 0.
fn multiplicity(element: &XmlElement) -> (Cardinality, Cardinality) {
    let bound = |key: &str| match element.child(key) {
        None => Cardinality::ONE,
        Some(literal) => literal
            .attr("value")
            .and_then(Cardinality::parse_literal)
            .unwrap_or(Cardinality::ZERO),
    };
    (bound("lowerValue"), bound("upperValue"))
}

/// Stereotype record of `element`. Only `base_*` slots and `xmi:idref`
/// children are references; other slots hold tag values.
fn profile_application(element: &XmlElement) -> ProfileApplication {
    let mut referenced_ids: Vec<ElementId> = element
        .attributes()
        .filter(|(k, _)| k.starts_with("base_"))
        .flat_map(|(_, v)| v.split_whitespace())
        .map(ElementId::from)
        .collect();
    referenced_ids.extend(
        element
            .elements()
            .filter_map(|child| child.attr_non_empty("xmi:idref"))
            .map(ElementId::from),
    );
    ProfileApplication::new(element.local_name(), referenced_ids)
}
