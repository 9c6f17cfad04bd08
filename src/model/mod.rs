//! Normalized control structure graph.
//!
//! Every parsing strategy produces the same [`Model`], whatever the source
//! dialect was.
//!
//! ```text
//! Model
//! ├── classes: IndexMap<qualified name, ComponentType>
//! ├── associations: IndexMap<name, Association>
//! ├── connectors: IndexSet<Connector>        (deduplicated by value)
//! ├── components: IndexSet<Arc<Component>>
//! └── stereotypes: IndexMap<name, Stereotype> (one instance per name)
//! ```
//!
//! A model is built by a single extraction pass and is not modified after it
//! is handed back to the caller.

mod association;
mod component;
mod connector;
mod stereotype;

use std::fmt;
use std::sync::Arc;

use indexmap::{IndexMap, IndexSet};
use smol_str::SmolStr;

pub use association::{AggregationKind, Association, AssociationEnd};
pub use component::{Component, ComponentType, DiagramNode, TypeRef};
pub use connector::{Connector, ConnectorEnd};
pub use stereotype::{Stereotype, Stereotypes};

/// Stereotype of GraphML edges drawn with a solid line.
pub const CONTROL_ACTION: &str = "ControlAction";
/// Stereotype of GraphML edges drawn with a dashed line.
pub const FEEDBACK: &str = "Feedback";
/// Stereotype of GraphML edges drawn with a dotted line.
pub const ADDITIONAL_CONTROL_INFORMATION: &str = "AdditionalControlInformation";

/// The normalized control structure.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Model {
    name: Option<String>,
    classes: IndexMap<SmolStr, ComponentType>,
    associations: IndexMap<SmolStr, Association>,
    connectors: IndexSet<Connector>,
    components: IndexSet<Arc<Component>>,
    stereotypes: IndexMap<SmolStr, Stereotype>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    // ------------------------------------------------------------------------
    // Stereotypes
    // ------------------------------------------------------------------------

    /// Canonical stereotype for `name`, registering it on first use.
    pub fn intern_stereotype(&mut self, name: &str) -> Stereotype {
        if let Some(existing) = self.stereotypes.get(name) {
            return existing.clone();
        }
        let stereotype = Stereotype::new(name);
        self.stereotypes
            .insert(SmolStr::new(name), stereotype.clone());
        stereotype
    }

    pub fn stereotype(&self, name: &str) -> Option<&Stereotype> {
        self.stereotypes.get(name)
    }

    pub fn stereotypes(&self) -> impl Iterator<Item = &Stereotype> {
        self.stereotypes.values()
    }

    // ------------------------------------------------------------------------
    // Component types
    // ------------------------------------------------------------------------

    /// Register a type under its qualified name, returning the type it
    /// replaced, if any.
    pub fn insert_class(&mut self, class: ComponentType) -> Option<ComponentType> {
        self.classes
            .insert(SmolStr::new(class.qualified_name()), class)
    }

    pub fn class(&self, qualified_name: &str) -> Option<&ComponentType> {
        self.classes.get(qualified_name)
    }

    pub fn class_mut(&mut self, qualified_name: &str) -> Option<&mut ComponentType> {
        self.classes.get_mut(qualified_name)
    }

    pub fn classes(&self) -> impl Iterator<Item = &ComponentType> {
        self.classes.values()
    }

    /// Resolve a type reference against the registered types.
    pub fn resolve(&self, type_ref: &TypeRef) -> Option<&ComponentType> {
        self.classes.get(type_ref.qualified_name.as_str())
    }

    /// Registered super-types of `class`.
    pub fn super_types<'a>(
        &'a self,
        class: &'a ComponentType,
    ) -> impl Iterator<Item = &'a ComponentType> + 'a {
        class.super_types().iter().filter_map(|r| self.resolve(r))
    }

    // ------------------------------------------------------------------------
    // Associations
    // ------------------------------------------------------------------------

    /// Register an association under its name, returning the association it
    /// replaced, if any.
    pub fn insert_association(&mut self, association: Association) -> Option<Association> {
        self.associations
            .insert(SmolStr::new(association.name()), association)
    }

    /// Whether an equal association (ends in either order) is registered.
    pub fn contains_association(&self, association: &Association) -> bool {
        self.associations.values().any(|a| a == association)
    }

    pub fn association(&self, name: &str) -> Option<&Association> {
        self.associations.get(name)
    }

    pub fn associations(&self) -> impl Iterator<Item = &Association> {
        self.associations.values()
    }

    // ------------------------------------------------------------------------
    // Connectors and components
    // ------------------------------------------------------------------------

    /// Add a connector and both of its end components.
    ///
    /// Returns `false` when an equal connector was already present.
    pub fn add_connector(&mut self, connector: Connector) -> bool {
        self.components
            .insert(Arc::clone(&connector.source().component));
        self.components
            .insert(Arc::clone(&connector.target().component));
        self.connectors.insert(connector)
    }

    pub fn connectors(&self) -> impl Iterator<Item = &Connector> {
        self.connectors.iter()
    }

    pub fn connector_count(&self) -> usize {
        self.connectors.len()
    }

    pub fn add_component(&mut self, component: Arc<Component>) -> bool {
        self.components.insert(component)
    }

    pub fn components(&self) -> impl Iterator<Item = &Arc<Component>> {
        self.components.iter()
    }

    /// Component with the given name, if any.
    pub fn component(&self, name: &str) -> Option<&Arc<Component>> {
        self.components.iter().find(|c| c.name() == name)
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name.as_deref().unwrap_or_default())?;
        write_section(f, "Classes", self.classes.values())?;
        f.write_str("\n\n")?;
        write_section(f, "Associations", self.associations.values())?;
        f.write_str("\n\n")?;
        write_section(f, "Connectors", self.connectors.iter())?;
        f.write_str("\n\n")?;
        write_section(f, "Components", self.components.iter())
    }
}

fn write_section<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    title: &str,
    items: impl ExactSizeIterator<Item = T>,
) -> fmt::Result {
    write!(f, "{title} ({}):", items.len())?;
    for item in items {
        write!(f, "\n{item}")?;
    }
    Ok(())
}
