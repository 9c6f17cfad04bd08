use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A classification tag such as `ControlAction` or `Feedback`.
///
/// Identity is the name. A [`Model`](super::Model) hands out one canonical
/// instance per name, so every attachment within a model shares the same
/// allocation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Stereotype(Arc<str>);

impl Stereotype {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    /// Whether both handles point at the same canonical instance.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Display for Stereotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Stereotypes attached to one element.
///
/// Attaching is idempotent and keeps first-attachment order. Equality and
/// hashing treat the list as a set.
#[derive(Clone, Debug, Default)]
pub struct Stereotypes(Vec<Stereotype>);

impl Stereotypes {
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Attach `stereotype` unless an equal one is already present.
    pub fn add(&mut self, stereotype: Stereotype) {
        if !self.0.contains(&stereotype) {
            self.0.push(stereotype);
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|s| s.name() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Stereotype> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.0.iter().map(Stereotype::name).collect()
    }
}

impl PartialEq for Stereotypes {
    fn eq(&self, other: &Self) -> bool {
        self.0.len() == other.0.len() && self.0.iter().all(|s| other.0.contains(s))
    }
}

impl Eq for Stereotypes {}

impl Hash for Stereotypes {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut names = self.names();
        names.sort_unstable();
        names.hash(state);
    }
}

impl Extend<Stereotype> for Stereotypes {
    fn extend<I: IntoIterator<Item = Stereotype>>(&mut self, iter: I) {
        for stereotype in iter {
            self.add(stereotype);
        }
    }
}

impl FromIterator<Stereotype> for Stereotypes {
    fn from_iter<I: IntoIterator<Item = Stereotype>>(iter: I) -> Self {
        let mut out = Self::new();
        out.extend(iter);
        out
    }
}

impl fmt::Display for Stereotypes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.names().join(", "))
    }
}
