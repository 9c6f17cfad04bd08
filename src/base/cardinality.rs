use std::fmt;

/// A multiplicity bound.
///
/// Source documents spell "many" in several ways (a missing value, `-1`,
/// `*`); all of them normalize to [`Cardinality::Unbounded`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Cardinality {
    Finite(u32),
    Unbounded,
}

impl Cardinality {
    pub const ZERO: Self = Self::Finite(0);
    pub const ONE: Self = Self::Finite(1);

    /// Normalize a raw bound where `None` or any negative value means "any".
    pub fn from_raw(value: Option<i64>) -> Self {
        match value {
            Some(v) if v >= 0 => u32::try_from(v).map_or(Self::Unbounded, Self::Finite),
            _ => Self::Unbounded,
        }
    }

    /// Parse an XMI literal value (`"3"`, `"*"`, `"-1"`).
    ///
    /// Returns `None` when the text is neither an integer nor `*`.
    pub fn parse_literal(text: &str) -> Option<Self> {
        let text = text.trim();
        if text == "*" {
            return Some(Self::Unbounded);
        }
        text.parse::<i64>().ok().map(|v| Self::from_raw(Some(v)))
    }

    pub fn is_unbounded(&self) -> bool {
        matches!(self, Self::Unbounded)
    }
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(n) => write!(f, "{n}"),
            Self::Unbounded => f.write_str("*"),
        }
    }
}
