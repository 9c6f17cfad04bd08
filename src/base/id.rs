use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// `xmi:id` of an XMI element or `id` of a GraphML node.
///
/// Maps keyed by id can be queried with a plain `&str`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ElementId(Arc<str>);

impl ElementId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(id: &str) -> Self {
        Self(id.into())
    }
}

impl From<String> for ElementId {
    fn from(id: String) -> Self {
        Self(id.into())
    }
}

impl Borrow<str> for ElementId {
    fn borrow(&self) -> &str {
        &self.0
    }
}
