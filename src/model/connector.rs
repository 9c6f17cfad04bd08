use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use smol_str::SmolStr;

use super::association::{ends_match, unordered_pair_hash};
use super::{Component, Stereotype, Stereotypes};
use crate::base::Cardinality;

/// One end of an instance-level relationship.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ConnectorEnd {
    pub component: Arc<Component>,
    pub role: Option<SmolStr>,
    pub lower: Cardinality,
    pub upper: Cardinality,
    pub navigable: bool,
}

impl ConnectorEnd {
    /// End without a role, with `*..*` cardinality, not navigable.
    pub fn unbounded(component: Arc<Component>) -> Self {
        Self {
            component,
            role: None,
            lower: Cardinality::Unbounded,
            upper: Cardinality::Unbounded,
            navigable: false,
        }
    }
}

impl fmt::Display for ConnectorEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.component)?;
        if let Some(role) = &self.role {
            write!(f, ".{role}")?;
        }
        if self.navigable {
            f.write_str("<")?;
        }
        write!(f, "[{}..{}]", self.lower, self.upper)
    }
}

/// An instance-level relationship, such as a control action sent from one
/// component to another.
///
/// Equality follows the same symmetric rule as
/// [`Association`](super::Association).
#[derive(Clone, Debug)]
pub struct Connector {
    name: SmolStr,
    qualified_name: SmolStr,
    source: ConnectorEnd,
    target: ConnectorEnd,
    stereotypes: Stereotypes,
}

impl Connector {
    pub fn new(
        name: impl Into<SmolStr>,
        qualified_name: impl Into<SmolStr>,
        source: ConnectorEnd,
        target: ConnectorEnd,
    ) -> Self {
        Self {
            name: name.into(),
            qualified_name: qualified_name.into(),
            source,
            target,
            stereotypes: Stereotypes::new(),
        }
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

    pub fn source(&self) -> &ConnectorEnd {
        &self.source
    }

    pub fn target(&self) -> &ConnectorEnd {
        &self.target
    }

    pub fn stereotypes(&self) -> &Stereotypes {
        &self.stereotypes
    }

    pub fn has_stereotype(&self, name: &str) -> bool {
        self.stereotypes.contains(name)
    }
}

impl PartialEq for Connector {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.stereotypes == other.stereotypes
            && ends_match(
                (&self.source, &self.target),
                (&other.source, &other.target),
            )
    }
}

impl Eq for Connector {}

impl Hash for Connector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.stereotypes.hash(state);
        unordered_pair_hash(&self.source, &self.target).hash(state);
    }
}

impl fmt::Display for Connector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Connector{{{} -> {} -> {}}}", self.source, self.name, self.target)
    }
}
