//! Strategy selection and the parse entry points.
//!
//! An input file is handed to the first strategy whose predicate claims it.
//! The table is ordered from the most specific check to the most generic one:
//!
//! ```text
//! Archive         zip signature at the start of the file
//! GraphMlOnline   .graphml written by yEd Live
//! GraphMlDesktop  any other .graphml
//! VendorDialect   model extension, exported by the vendor tool
//! StandardXmi     model extension
//! ```
//!
//! Predicates only sniff the file; none of them builds a document.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::archive;
use crate::base::xml::XmlDocument;
use crate::config::ParserConfig;
use crate::diagnostics::{Diagnostic, DiagnosticKind, Diagnostics};
use crate::error::{ParseError, ParseResult};
use crate::graphml::{self, DesktopDialect, GraphMlDialect, OnlineDialect};
use crate::model::Model;
use crate::sysml::tags::{self, TagIndex};
use crate::sysml::{extract, vendor, xmi};

// ============================================================================
// PARSE CONTEXT
// ============================================================================

/// State of a single parse: the active configuration and the diagnostics
/// reported so far.
#[derive(Debug)]
pub struct ParseContext<'a> {
    config: &'a ParserConfig,
    diagnostics: Diagnostics,
}

impl<'a> ParseContext<'a> {
    pub fn new(config: &'a ParserConfig) -> Self {
        Self {
            config,
            diagnostics: Diagnostics::new(),
        }
    }

    pub fn config(&self) -> &'a ParserConfig {
        self.config
    }

    /// Log and record a non-fatal event.
    pub fn report(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        self.diagnostics.report(kind, message);
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Diagnostics {
        self.diagnostics
    }
}

/// A parsed model together with everything that was dropped on the way.
#[derive(Debug)]
pub struct Parsed {
    pub model: Model,
    pub diagnostics: Vec<Diagnostic>,
}

// ============================================================================
// STRATEGIES
// ============================================================================

/// The parsing strategies, in the order they are tried.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    Archive,
    GraphMlOnline,
    GraphMlDesktop,
    VendorDialect,
    StandardXmi,
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Archive => "archive",
            Self::GraphMlOnline => "yEd Live GraphML",
            Self::GraphMlDesktop => "yEd GraphML",
            Self::VendorDialect => "Enterprise Architect XMI",
            Self::StandardXmi => "UML/SysML XMI",
        };
        f.write_str(name)
    }
}

type Predicate = fn(&ParserConfig, &Path) -> bool;
type Handler =
    fn(&ControlStructureParsers, &Path, &mut ParseContext<'_>, usize) -> ParseResult<Model>;

struct Strategy {
    kind: StrategyKind,
    supports: Predicate,
    parse: Handler,
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|e| e.to_str())
}

fn is_graphml(config: &ParserConfig, path: &Path) -> bool {
    extension(path).is_some_and(|e| config.is_graphml_extension(e))
}

fn is_model(config: &ParserConfig, path: &Path) -> bool {
    extension(path).is_some_and(|e| config.is_model_extension(e))
}

fn read_file(path: &Path) -> ParseResult<Vec<u8>> {
    fs::read(path).map_err(|e| ParseError::io(path, e))
}

fn parse_archive(
    parsers: &ControlStructureParsers,
    path: &Path,
    ctx: &mut ParseContext<'_>,
    depth: usize,
) -> ParseResult<Model> {
    let max_depth = parsers.config.max_archive_depth;
    if depth >= max_depth {
        return Err(ParseError::archive(
            path,
            format!("Archives may be nested at most {max_depth} levels deep"),
        ));
    }
    archive::unwrap_with(path, &parsers.config, |candidate| {
        parsers.dispatch(candidate, ctx, depth + 1)
    })
}

fn parse_graphml(
    dialect: &dyn GraphMlDialect,
    path: &Path,
    ctx: &mut ParseContext<'_>,
) -> ParseResult<Model> {
    let bytes = read_file(path)?;
    let document = XmlDocument::parse(&bytes).map_err(|e| {
        ParseError::malformed_caused(format!("Unable to parse file {}", path.display()), e)
    })?;
    graphml::read(dialect, &document, ctx)
}

fn parse_online(
    _: &ControlStructureParsers,
    path: &Path,
    ctx: &mut ParseContext<'_>,
    _: usize,
) -> ParseResult<Model> {
    parse_graphml(&OnlineDialect, path, ctx)
}

fn parse_desktop(
    _: &ControlStructureParsers,
    path: &Path,
    ctx: &mut ParseContext<'_>,
    _: usize,
) -> ParseResult<Model> {
    parse_graphml(&DesktopDialect, path, ctx)
}

fn parse_vendor(
    _: &ControlStructureParsers,
    path: &Path,
    ctx: &mut ParseContext<'_>,
    _: usize,
) -> ParseResult<Model> {
    let transformed = vendor::transform(path)?;
    let bytes = read_file(transformed.path())?;
    let graph = xmi::read_source_graph(&bytes)?;
    let index = TagIndex::new(&graph.profile_applications);
    extract(&graph, &index, ctx)
}

fn parse_standard(
    _: &ControlStructureParsers,
    path: &Path,
    ctx: &mut ParseContext<'_>,
    _: usize,
) -> ParseResult<Model> {
    let bytes = read_file(path)?;
    let graph = xmi::read_source_graph(&bytes)?;
    let resolver = tags::resolver(ctx.config().tag_strategy, &graph.profile_applications);
    extract(&graph, resolver.as_ref(), ctx)
}

// ============================================================================
// DISPATCHER
// ============================================================================

/// Parses control structures from any of the supported input formats.
///
/// ```ignore
/// use scs::{ControlStructureParsers, ParserConfig};
///
/// let parsers = ControlStructureParsers::new(ParserConfig::default());
/// let model = parsers.parse(Path::new("aircraft.zip"))?;
/// println!("{model}");
/// ```
pub struct ControlStructureParsers {
    config: ParserConfig,
    strategies: Vec<Strategy>,
}

impl ControlStructureParsers {
    pub fn new(config: ParserConfig) -> Self {
        let strategies = vec![
            Strategy {
                kind: StrategyKind::Archive,
                supports: |_, path| archive::is_zip(path).unwrap_or(false),
                parse: parse_archive,
            },
            Strategy {
                kind: StrategyKind::GraphMlOnline,
                supports: |config, path| {
                    is_graphml(config, path) && graphml::is_online_export(path)
                },
                parse: parse_online,
            },
            Strategy {
                kind: StrategyKind::GraphMlDesktop,
                supports: is_graphml,
                parse: parse_desktop,
            },
            Strategy {
                kind: StrategyKind::VendorDialect,
                supports: |config, path| {
                    is_model(config, path) && vendor::is_vendor_export(path, config)
                },
                parse: parse_vendor,
            },
            Strategy {
                kind: StrategyKind::StandardXmi,
                supports: is_model,
                parse: parse_standard,
            },
        ];
        Self { config, strategies }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    fn strategy_for(&self, path: &Path) -> ParseResult<&Strategy> {
        fs::metadata(path).map_err(|e| ParseError::io(path, e))?;
        self.strategies
            .iter()
            .find(|s| (s.supports)(&self.config, path))
            .ok_or_else(|| ParseError::unsupported(path))
    }

    /// Which strategy would parse `path`.
    pub fn resolve(&self, path: &Path) -> ParseResult<StrategyKind> {
        self.strategy_for(path).map(|s| s.kind)
    }

    pub fn supports(&self, path: &Path) -> bool {
        self.resolve(path).is_ok()
    }

    /// Parse `path`, discarding diagnostics.
    pub fn parse(&self, path: &Path) -> ParseResult<Model> {
        self.parse_with_diagnostics(path).map(|parsed| parsed.model)
    }

    pub fn parse_with_diagnostics(&self, path: &Path) -> ParseResult<Parsed> {
        let mut ctx = ParseContext::new(&self.config);
        let model = self.dispatch(path, &mut ctx, 0)?;
        let diagnostics = ctx.into_diagnostics();
        tracing::debug!(
            path = %path.display(),
            diagnostics = diagnostics.len(),
            "Parsed control structure"
        );
        Ok(Parsed {
            model,
            diagnostics: diagnostics.into_vec(),
        })
    }

    fn dispatch(
        &self,
        path: &Path,
        ctx: &mut ParseContext<'_>,
        depth: usize,
    ) -> ParseResult<Model> {
        let strategy = self.strategy_for(path)?;
        tracing::debug!(path = %path.display(), strategy = %strategy.kind, "Parsing input");
        (strategy.parse)(self, path, ctx, depth)
    }
}

impl Default for ControlStructureParsers {
    fn default() -> Self {
        Self::new(ParserConfig::default())
    }
}

/// Parse `path` with the default configuration.
pub fn parse(path: &Path) -> ParseResult<Model> {
    ControlStructureParsers::default().parse(path)
}
