use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use smol_str::SmolStr;

use super::{Association, Stereotype, Stereotypes};

// ============================================================================
// GEOMETRY
// ============================================================================

/// Pixel geometry of a diagram node, rounded to integers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DiagramNode {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl DiagramNode {
    pub fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Parse four decimal coordinates, rounding each to the nearest integer.
    ///
    /// Returns `None` when any value is not a finite number.
    pub fn from_raw(x: &str, y: &str, width: &str, height: &str) -> Option<Self> {
        Some(Self::new(
            round(x)?,
            round(y)?,
            round(width)?,
            round(height)?,
        ))
    }
}

fn round(value: &str) -> Option<i64> {
    let v: f64 = value.trim().parse().ok()?;
    v.is_finite().then(|| v.round() as i64)
}

// ============================================================================
// TYPES
// ============================================================================

/// Reference to a [`ComponentType`] by its key.
///
/// Types reference each other (super-types, association ends), possibly in
/// cycles through associations, so they are linked by qualified name and
/// resolved through the owning [`Model`](super::Model).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeRef {
    pub name: SmolStr,
    pub qualified_name: SmolStr,
}

impl TypeRef {
    /// Reference to the type of elements whose type could not be resolved.
    pub const UNSPECIFIED: TypeRef = TypeRef {
        name: SmolStr::new_inline(""),
        qualified_name: SmolStr::new_inline(""),
    };

    pub fn new(name: impl Into<SmolStr>, qualified_name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            qualified_name: qualified_name.into(),
        }
    }

    pub fn is_unspecified(&self) -> bool {
        self.qualified_name.is_empty() && self.name.is_empty()
    }
}

/// A class of components, with its super-types and part associations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComponentType {
    name: SmolStr,
    qualified_name: SmolStr,
    super_types: Vec<TypeRef>,
    attributes: Vec<Association>,
    stereotypes: Stereotypes,
}

impl ComponentType {
    pub const UNSPECIFIED: ComponentType = ComponentType {
        name: SmolStr::new_inline(""),
        qualified_name: SmolStr::new_inline(""),
        super_types: Vec::new(),
        attributes: Vec::new(),
        stereotypes: Stereotypes::new(),
    };

    pub fn new(name: impl Into<SmolStr>, qualified_name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            qualified_name: qualified_name.into(),
            super_types: Vec::new(),
            attributes: Vec::new(),
            stereotypes: Stereotypes::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    pub fn type_ref(&self) -> TypeRef {
        TypeRef::new(self.name.clone(), self.qualified_name.clone())
    }

    pub fn super_types(&self) -> &[TypeRef] {
        &self.super_types
    }

    pub fn add_super_type(&mut self, super_type: TypeRef) {
        self.super_types.push(super_type);
    }

    /// Part associations owned by this type.
    pub fn attributes(&self) -> &[Association] {
        &self.attributes
    }

    pub fn add_attribute(&mut self, association: Association) {
        self.attributes.push(association);
    }

    pub fn stereotypes(&self) -> &Stereotypes {
        &self.stereotypes
    }

    pub fn add_stereotype(&mut self, stereotype: Stereotype) {
        self.stereotypes.add(stereotype);
    }

    pub fn has_stereotype(&self, name: &str) -> bool {
        self.stereotypes.contains(name)
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if !self.stereotypes.is_empty() {
            write!(f, " {}", self.stereotypes)?;
        }
        if self.attributes.is_empty() {
            return f.write_str(" { }");
        }
        f.write_str(" {")?;
        for attribute in &self.attributes {
            let end = attribute.target();
            write!(
                f,
                "\n\t{} {} [{}..{}];",
                end.type_ref.name,
                end.role.as_deref().unwrap_or_default(),
                end.lower,
                end.upper
            )?;
        }
        f.write_str("\n}")
    }
}

// ============================================================================
// COMPONENTS
// ============================================================================

/// A typed instance that connectors attach to.
///
/// Equality and hashing use the name and qualified name only. `parent` is a
/// display-hierarchy link (a node drawn inside another node's group), not
/// ownership, and is fixed when the component is built.
#[derive(Clone, Debug)]
pub struct Component {
    name: SmolStr,
    qualified_name: SmolStr,
    type_ref: TypeRef,
    parent: Option<Arc<Component>>,
    diagram_node: Option<DiagramNode>,
    stereotypes: Stereotypes,
}

impl Component {
    pub fn new(
        name: impl Into<SmolStr>,
        qualified_name: impl Into<SmolStr>,
        type_ref: TypeRef,
    ) -> Self {
        Self {
            name: name.into(),
            qualified_name: qualified_name.into(),
            type_ref,
            parent: None,
            diagram_node: None,
            stereotypes: Stereotypes::new(),
        }
    }

    pub fn with_parent(mut self, parent: Option<Arc<Component>>) -> Self {
        self.parent = parent;
        self
    }

    pub fn with_diagram_node(mut self, node: Option<DiagramNode>) -> Self {
        self.diagram_node = node;
        self
    }

    pub fn with_stereotypes(mut self, stereotypes: impl IntoIterator<Item = Stereotype>) -> Self {
        self.stereotypes.extend(stereotypes);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    pub fn type_ref(&self) -> &TypeRef {
        &self.type_ref
    }

    pub fn parent(&self) -> Option<&Arc<Component>> {
        self.parent.as_ref()
    }

    pub fn diagram_node(&self) -> Option<&DiagramNode> {
        self.diagram_node.as_ref()
    }

    pub fn stereotypes(&self) -> &Stereotypes {
        &self.stereotypes
    }
}

impl PartialEq for Component {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.qualified_name == other.qualified_name
    }
}

impl Eq for Component {}

impl Hash for Component {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.qualified_name.hash(state);
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.name, self.type_ref.name)
    }
}
