use std::fmt;
use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;
use smol_str::SmolStr;

use super::{Stereotype, Stereotypes, TypeRef};
use crate::base::Cardinality;

/// How strongly an association end holds its counterpart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AggregationKind {
    /// Plain reference (UML `none`).
    #[default]
    Association,
    /// Shared aggregation (UML `shared`).
    Aggregation,
    /// Composite aggregation (UML `composite`).
    Composition,
}

impl AggregationKind {
    /// Map a UML `aggregation` attribute value.
    pub fn from_uml(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("shared") => Self::Aggregation,
            Some("composite") => Self::Composition,
            _ => Self::Association,
        }
    }
}

/// One end of a type-level relationship.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AssociationEnd {
    pub type_ref: TypeRef,
    pub aggregation: AggregationKind,
    pub role: Option<SmolStr>,
    pub lower: Cardinality,
    pub upper: Cardinality,
    pub navigable: bool,
}

impl fmt::Display for AssociationEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}[{}..{}]",
            self.type_ref.name,
            self.role.as_deref().unwrap_or_default(),
            self.lower,
            self.upper
        )
    }
}

/// A type-level relationship, such as "class X has part Y".
///
/// Two associations are equal when they have the same name and stereotypes
/// and the same two ends in either order.
#[derive(Clone, Debug)]
pub struct Association {
    name: SmolStr,
    qualified_name: SmolStr,
    source: AssociationEnd,
    target: AssociationEnd,
    stereotypes: Stereotypes,
}

impl Association {
    pub fn new(
        name: impl Into<SmolStr>,
        qualified_name: impl Into<SmolStr>,
        source: AssociationEnd,
        target: AssociationEnd,
    ) -> Self {
        Self {
            name: name.into(),
            qualified_name: qualified_name.into(),
            source,
            target,
            stereotypes: Stereotypes::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    pub fn source(&self) -> &AssociationEnd {
        &self.source
    }

    pub fn target(&self) -> &AssociationEnd {
        &self.target
    }

    pub fn stereotypes(&self) -> &Stereotypes {
        &self.stereotypes
    }

    pub fn add_stereotype(&mut self, stereotype: Stereotype) {
        self.stereotypes.add(stereotype);
    }

    pub fn with_stereotypes(mut self, stereotypes: impl IntoIterator<Item = Stereotype>) -> Self {
        self.stereotypes.extend(stereotypes);
        self
    }
}

impl PartialEq for Association {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.stereotypes == other.stereotypes
            && ends_match(
                (&self.source, &self.target),
                (&other.source, &other.target),
            )
    }
}

impl Eq for Association {}

impl Hash for Association {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.stereotypes.hash(state);
        unordered_pair_hash(&self.source, &self.target).hash(state);
    }
}

impl fmt::Display for Association {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Association{{{} -> {} -> {}}}",
            self.source, self.name, self.target
        )
    }
}

/// Whether two end pairs are equal as unordered pairs.
pub(super) fn ends_match<E: PartialEq>(a: (&E, &E), b: (&E, &E)) -> bool {
    (a.0 == b.0 && a.1 == b.1) || (a.0 == b.1 && a.1 == b.0)
}

/// Order-independent hash of two ends.
pub(super) fn unordered_pair_hash<E: Hash>(a: &E, b: &E) -> [u64; 2] {
    let mut hashes = [fx_hash(a), fx_hash(b)];
    hashes.sort_unstable();
    hashes
}

fn fx_hash<E: Hash>(value: &E) -> u64 {
    let mut hasher = FxHasher::default();
    value.hash(&mut hasher);
    hasher.finish()
}
