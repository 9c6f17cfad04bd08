//! Extraction of the normalized [`Model`] from a [`SourceGraph`].
//!
//! Stages run in a fixed order, each one relying on the previous ones:
//!
//! 1. model metadata
//! 2. stereotype registration
//! 3. tag resolution (through the [`TagResolver`] given by the caller)
//! 4. component type registration
//! 5. super-types and attribute associations, once all types exist
//! 6. connectors
//! 7. top-level associations, deduplicated symmetrically

use std::sync::Arc;

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use crate::base::labels::default_association_name;
use crate::base::{Cardinality, ElementId};
use crate::config::CollisionPolicy;
use crate::diagnostics::DiagnosticKind;
use crate::error::{ParseError, ParseResult};
use crate::model::{
    AggregationKind, Association, AssociationEnd, Component, ComponentType, Connector,
    ConnectorEnd, Model, Stereotype, TypeRef,
};
use crate::parser::ParseContext;

use super::source::{SourceAssociation, SourceConnectorEnd, SourceGraph, SourceProperty};
use super::tags::TagResolver;

/// Build the model for `graph`.
///
/// Fails on structural violations (connector or association without exactly
/// two ends, rejected key collisions); unresolved references are reported
/// to `ctx` and skipped.
pub fn extract(
    graph: &SourceGraph,
    tags: &dyn TagResolver,
    ctx: &mut ParseContext<'_>,
) -> ParseResult<Model> {
    let mut extraction = Extraction {
        graph,
        tags,
        ctx,
        model: Model::new(),
        types: FxHashMap::default(),
        owners: FxHashMap::default(),
        components: FxHashMap::default(),
    };
    extraction.metadata();
    extraction.register_stereotypes();
    extraction.register_types()?;
    extraction.resolve_super_types_and_parts();
    extraction.extract_connectors()?;
    extraction.extract_associations()?;

    let model = extraction.model;
    tracing::debug!(
        classes = model.classes().count(),
        associations = model.associations().count(),
        connectors = model.connector_count(),
        components = model.components().count(),
        "Extracted model"
    );
    Ok(model)
}

struct Extraction<'g, 'c, 'cfg> {
    graph: &'g SourceGraph,
    tags: &'g dyn TagResolver,
    ctx: &'c mut ParseContext<'cfg>,
    model: Model,
    /// Source class id → registered type.
    types: FxHashMap<&'g ElementId, TypeRef>,
    /// Qualified name → source class holding it after collisions.
    owners: FxHashMap<&'g str, &'g ElementId>,
    /// Identity cache of connectable elements for this parse.
    components: FxHashMap<&'g ElementId, Arc<Component>>,
}

impl<'g> Extraction<'g, '_, '_> {
    fn metadata(&mut self) {
        self.model.set_name(self.graph.root.name.clone());
    }

    fn register_stereotypes(&mut self) {
        for record in &self.graph.profile_applications {
            self.model.intern_stereotype(&record.tag_name);
        }
    }

    /// Canonical stereotypes attached to `id`.
    fn stereotypes_of(&mut self, id: &ElementId) -> Vec<Stereotype> {
        let tags = self.tags;
        tags.tags_for(id)
            .into_iter()
            .map(|name| self.model.intern_stereotype(name))
            .collect()
    }

    fn register_types(&mut self) -> ParseResult<()> {
        let graph = self.graph;
        for class in graph.classes.values() {
            let mut component_type =
                ComponentType::new(class.name.as_str(), class.qualified_name.as_str());
            for stereotype in self.stereotypes_of(&class.id) {
                component_type.add_stereotype(stereotype);
            }
            self.types.insert(&class.id, component_type.type_ref());
            self.owners.insert(class.qualified_name.as_str(), &class.id);
            if self.model.insert_class(component_type).is_some() {
                self.collision("component type", &class.qualified_name)?;
            }
        }
        Ok(())
    }

    fn collision(&mut self, what: &str, key: &str) -> ParseResult<()> {
        match self.ctx.config().collision_policy {
            CollisionPolicy::Overwrite => {
                self.ctx.report(
                    DiagnosticKind::NameCollision,
                    format!("Duplicate {what} '{key}' replaced an earlier one."),
                );
                Ok(())
            }
            CollisionPolicy::Reject => Err(ParseError::malformed(format!(
                "Duplicate {what} '{key}'."
            ))),
        }
    }

    fn resolve_super_types_and_parts(&mut self) {
        let graph = self.graph;
        for class in graph.classes.values() {
            // A replaced class contributes nothing to the surviving type.
            if self.owners.get(class.qualified_name.as_str()) != Some(&&class.id) {
                continue;
            }
            let Some(owner) = self.types.get(&class.id).cloned() else {
                continue;
            };

            let mut super_types = Vec::new();
            for super_id in &class.super_classes {
                match self.types.get(super_id) {
                    Some(type_ref) => super_types.push(type_ref.clone()),
                    None => self.ctx.report(
                        DiagnosticKind::UnresolvedReference,
                        format!(
                            "Super-type {super_id} of class '{}' is not a known class.",
                            class.qualified_name
                        ),
                    ),
                }
            }

            let mut parts = Vec::new();
            for attribute_id in graph.all_attributes(class) {
                let Some(property) = graph.properties.get(&attribute_id) else {
                    self.ctx.report(
                        DiagnosticKind::UnresolvedReference,
                        format!(
                            "Attribute {attribute_id} of class '{}' not found.",
                            class.qualified_name
                        ),
                    );
                    continue;
                };
                if property.is_port {
                    continue;
                }
                parts.push(self.attribute_association(&owner, property));
            }

            if let Some(target) = self.model.class_mut(&owner.qualified_name) {
                for super_type in super_types {
                    target.add_super_type(super_type);
                }
                for part in parts {
                    target.add_attribute(part);
                }
            }
        }
    }

    /// Association whose target is `property`, and whose source is the
    /// property's opposite end or, lacking one, the owning type.
    fn attribute_association(
        &mut self,
        owner: &TypeRef,
        property: &SourceProperty,
    ) -> Association {
        let graph = self.graph;
        let target = self.association_end(property);
        let source = property
            .opposite
            .as_ref()
            .and_then(|id| graph.properties.get(id))
            .map(|opposite| self.association_end(opposite))
            .unwrap_or_else(|| AssociationEnd {
                type_ref: owner.clone(),
                aggregation: AggregationKind::Association,
                role: None,
                lower: Cardinality::ZERO,
                upper: Cardinality::Unbounded,
                navigable: false,
            });

        let element: Option<&SourceAssociation> = property
            .association
            .as_ref()
            .and_then(|id| graph.associations.get(id));
        let name = element
            .and_then(|a| a.name.clone())
            .unwrap_or_else(|| default_name(&source, &target));
        let qualified_name = element
            .and_then(|a| a.qualified_name.clone())
            .unwrap_or_else(|| property.qualified_name.clone());
        let stereotypes = match element {
            Some(a) => self.stereotypes_of(&a.id),
            None => Vec::new(),
        };
        Association::new(name, qualified_name, source, target).with_stereotypes(stereotypes)
    }

    fn association_end(&self, property: &SourceProperty) -> AssociationEnd {
        AssociationEnd {
            type_ref: self.type_of(property.type_id.as_ref()),
            aggregation: property.aggregation,
            role: property.name.as_deref().map(SmolStr::new),
            lower: property.lower,
            upper: property.upper,
            navigable: property.navigable,
        }
    }

    /// Registered class, ad-hoc primitive, or `UNSPECIFIED`.
    fn type_of(&self, type_id: Option<&ElementId>) -> TypeRef {
        let Some(id) = type_id else {
            return TypeRef::UNSPECIFIED;
        };
        if let Some(type_ref) = self.types.get(id) {
            return type_ref.clone();
        }
        match self.graph.primitive_types.get(id) {
            Some(primitive) => {
                TypeRef::new(primitive.name.as_str(), primitive.qualified_name.as_str())
            }
            None => TypeRef::UNSPECIFIED,
        }
    }

    fn extract_connectors(&mut self) -> ParseResult<()> {
        let graph = self.graph;
        for connector in graph.connectors.values() {
            let [first, second] = connector.ends.as_slice() else {
                return Err(ParseError::malformed(format!(
                    "Connector '{}' must have exactly two ends, found {}.",
                    connector.qualified_name,
                    connector.ends.len()
                )));
            };
            let (Some(source), Some(target)) =
                (self.connector_end(first), self.connector_end(second))
            else {
                self.ctx.report(
                    DiagnosticKind::UnresolvedConnectorEnd,
                    format!(
                        "Connector '{}' has an end connected to no known part.",
                        connector.qualified_name
                    ),
                );
                continue;
            };

            let mut stereotypes = self.stereotypes_of(&connector.id);
            for end_id in [&first.id, &second.id].into_iter().flatten() {
                stereotypes.extend(self.stereotypes_of(end_id));
            }
            let result = Connector::new(
                connector.name.as_str(),
                connector.qualified_name.as_str(),
                source,
                target,
            )
            .with_stereotypes(stereotypes);
            self.model.add_connector(result);
        }
        Ok(())
    }

    fn connector_end(&mut self, end: &SourceConnectorEnd) -> Option<ConnectorEnd> {
        let graph = self.graph;
        let (id, property) = [&end.role, &end.part_with_port]
            .into_iter()
            .flatten()
            .find_map(|id| graph.properties.get_key_value(id))?;

        let component = match self.components.get(id) {
            Some(existing) => Arc::clone(existing),
            None => {
                let stereotypes = self.stereotypes_of(id);
                let component = Arc::new(
                    Component::new(
                        property.name.as_deref().unwrap_or_default(),
                        property.qualified_name.as_str(),
                        self.type_of(property.type_id.as_ref()),
                    )
                    .with_stereotypes(stereotypes),
                );
                self.components.insert(id, Arc::clone(&component));
                component
            }
        };
        Some(ConnectorEnd {
            component,
            role: None,
            lower: end.lower,
            upper: end.upper,
            navigable: false,
        })
    }

    fn extract_associations(&mut self) -> ParseResult<()> {
        let graph = self.graph;
        for element in graph.associations.values() {
            let [first, second] = element.member_ends.as_slice() else {
                return Err(ParseError::malformed(format!(
                    "Association {} must have exactly two member ends, found {}.",
                    element.id,
                    element.member_ends.len()
                )));
            };
            let (Some(first), Some(second)) =
                (graph.properties.get(first), graph.properties.get(second))
            else {
                self.ctx.report(
                    DiagnosticKind::UnresolvedReference,
                    format!(
                        "Association {} has a member end that is not a property.",
                        element.id
                    ),
                );
                continue;
            };

            let source = self.association_end(first);
            let target = self.association_end(second);
            let name = element
                .name
                .clone()
                .unwrap_or_else(|| default_name(&source, &target));
            let qualified_name = element
                .qualified_name
                .clone()
                .unwrap_or_else(|| first.qualified_name.clone());
            let stereotypes = self.stereotypes_of(&element.id);
            let association = Association::new(name, qualified_name, source, target)
                .with_stereotypes(stereotypes);

            if self.model.contains_association(&association) {
                continue;
            }
            let key = association.name().to_string();
            if self.model.insert_association(association).is_some() {
                self.collision("association", &key)?;
            }
        }
        Ok(())
    }
}

fn default_name(source: &AssociationEnd, target: &AssociationEnd) -> String {
    default_association_name(
        &source.type_ref.name,
        source.role.as_deref(),
        &target.type_ref.name,
        target.role.as_deref(),
    )
}
