//! Parser configuration.

use serde::Deserialize;

/// How profile applications are matched to the elements they tag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TagStrategy {
    /// Reverse index from element id to tags, built once per document.
    #[default]
    Indexed,
    /// Compare every reference slot of every record against each element.
    Scan,
}

/// What to do when a component type or association key is registered twice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CollisionPolicy {
    /// Last write wins; a `NameCollision` diagnostic is reported.
    #[default]
    Overwrite,
    /// The parse fails with `MalformedSourceGraph`.
    Reject,
}

/// Options shared by every parsing strategy.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Extensions of standard and vendor object-graph documents.
    pub model_extensions: Vec<String>,
    /// Extension of GraphML diagrams.
    pub graphml_extension: String,
    /// Marker placed before the extension of companion profile files.
    pub profile_marker: String,
    /// Exporter attribute value identifying the vendor dialect.
    pub vendor_exporter: String,
    /// How many archives may be nested inside each other.
    pub max_archive_depth: usize,
    pub tag_strategy: TagStrategy,
    pub collision_policy: CollisionPolicy,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            model_extensions: vec!["xmi".into(), "uml".into(), "xml".into()],
            graphml_extension: "graphml".into(),
            profile_marker: "profile".into(),
            vendor_exporter: "Enterprise Architect".into(),
            max_archive_depth: 2,
            tag_strategy: TagStrategy::Indexed,
            collision_policy: CollisionPolicy::Overwrite,
        }
    }
}

impl ParserConfig {
    /// Whether `ext` is one of the object-graph extensions (case-insensitive).
    pub fn is_model_extension(&self, ext: &str) -> bool {
        self.model_extensions
            .iter()
            .any(|e| e.eq_ignore_ascii_case(ext))
    }

    pub fn is_graphml_extension(&self, ext: &str) -> bool {
        self.graphml_extension.eq_ignore_ascii_case(ext)
    }

    /// Extensions a model file inside an archive may have.
    pub fn archive_candidate_extensions(&self) -> impl Iterator<Item = &str> {
        self.model_extensions
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.graphml_extension.as_str()))
    }

    pub fn with_tag_strategy(mut self, strategy: TagStrategy) -> Self {
        self.tag_strategy = strategy;
        self
    }

    pub fn with_collision_policy(mut self, policy: CollisionPolicy) -> Self {
        self.collision_policy = policy;
        self
    }
}
