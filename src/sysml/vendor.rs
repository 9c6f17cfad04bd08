//! Enterprise Architect XMI exports.
//!
//! Enterprise Architect marks its exports with
//! `<xmi:Documentation exporter="Enterprise Architect"/>` and wraps the model
//! in tool-specific extension blocks. Before the generic reader sees such a
//! file it is rewritten into plain UML XMI:
//!
//! - `xmi:Documentation` and `xmi:Extension` subtrees are removed,
//! - legacy OMG namespace URIs are replaced by the current ones,
//! - the `uml:Model` element receives an `xmi:id` when it has none,
//! - the output is UTF-8 whatever encoding the export declared.
//!
//! Stereotype records in these exports refer to the tagged element through
//! its id string (`base_Connector="EAID_..."`).

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use quick_xml::events::{BytesDecl, BytesStart, Event};
use quick_xml::{Reader, Writer};
use tempfile::NamedTempFile;

use crate::base::xml::{decode_document, find_event, start_attr};
use crate::config::ParserConfig;
use crate::error::{ParseError, ParseResult};

/// Current XMI namespace.
pub const XMI_NAMESPACE: &str = "http://www.omg.org/spec/XMI/20131001";
/// Current UML namespace.
pub const UML_NAMESPACE: &str = "http://www.omg.org/spec/UML/20131001";
/// Id given to a model element that lacks one.
const MODEL_ID: &str = "scs-model";

/// Whether the document at `path` was exported by the configured vendor tool.
///
/// Unreadable or non-XML content is simply not a vendor export.
pub fn is_vendor_export(path: &Path, config: &ParserConfig) -> bool {
    tracing::trace!(
        path = %path.display(),
        exporter = %config.vendor_exporter,
        "Checking whether input was produced by the vendor tool"
    );
    let Ok(file) = File::open(path) else {
        return false;
    };
    find_event(BufReader::new(file), |event| match event {
        Event::Start(start) | Event::Empty(start) => {
            is_documentation(start)
                && start_attr(start, "exporter").as_deref() == Some(config.vendor_exporter.as_str())
        }
        _ => false,
    })
    .unwrap_or(false)
}

fn is_documentation(start: &BytesStart<'_>) -> bool {
    is_xmi_element(start, b"Documentation")
}

fn is_xmi_element(start: &BytesStart<'_>, local: &[u8]) -> bool {
    let name = start.name();
    name.local_name().as_ref() == local && name.prefix().is_some_and(|p| p.as_ref() == b"xmi")
}

/// Rewrite the vendor export at `input` into a temporary standard XMI file.
///
/// The file is deleted when the returned guard is dropped.
pub fn transform(input: &Path) -> ParseResult<NamedTempFile> {
    let bytes = std::fs::read(input).map_err(|e| ParseError::io(input, e))?;
    let source = decode_document(&bytes)
        .map_err(|e| ParseError::transform("Unable to decode vendor export", e))?;
    let suffix = input
        .extension()
        .and_then(|e| e.to_str())
        .map_or_else(|| ".xmi".to_string(), |e| format!(".{e}"));
    let mut output = tempfile::Builder::new()
        .prefix("scsparser-")
        .suffix(&suffix)
        .tempfile()
        .map_err(|e| ParseError::transform("Unable to create transformation target file", e))?;
    tracing::trace!(target = %output.path().display(), "Vendor transformation target");

    {
        let mut reader = Reader::from_reader(source.as_bytes());
        let mut writer = Writer::new(BufWriter::new(output.as_file_mut()));
        rewrite(&mut reader, &mut writer)?;
        writer
            .into_inner()
            .flush()
            .map_err(|e| ParseError::transform("Unable to write transformed document", e))?;
    }
    Ok(output)
}

fn rewrite<R: std::io::BufRead, W: Write>(
    reader: &mut Reader<R>,
    writer: &mut Writer<W>,
) -> ParseResult<()> {
    let mut buf = Vec::new();
    let mut skipped_depth = 0usize;
    loop {
        let event = reader
            .read_event_into(&mut buf)
            .map_err(|e| ParseError::transform("Unable to read vendor export", e))?;
        let output = match event {
            Event::Eof => break,
            Event::Decl(_) => Some(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None))),
            Event::Start(start) => {
                if skipped_depth > 0 || is_dropped(&start) {
                    skipped_depth += 1;
                    None
                } else {
                    Some(Event::Start(rewrite_start(&start)?))
                }
            }
            Event::End(end) => {
                if skipped_depth > 0 {
                    skipped_depth -= 1;
                    None
                } else {
                    Some(Event::End(end))
                }
            }
            Event::Empty(start) => {
                if skipped_depth > 0 || is_dropped(&start) {
                    None
                } else {
                    Some(Event::Empty(rewrite_start(&start)?))
                }
            }
            other => (skipped_depth == 0).then_some(other),
        };
        if let Some(event) = output {
            writer
                .write_event(event)
                .map_err(|e| ParseError::transform("Unable to write transformed document", e))?;
        }
        buf.clear();
    }
    Ok(())
}

fn is_dropped(start: &BytesStart<'_>) -> bool {
    is_xmi_element(start, b"Documentation") || is_xmi_element(start, b"Extension")
}

fn rewrite_start(start: &BytesStart<'_>) -> ParseResult<BytesStart<'static>> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let is_model = name == "uml:Model";
    let mut out = BytesStart::new(name);
    let mut has_id = false;
    for attr in start.attributes() {
        let attr =
            attr.map_err(|e| ParseError::transform("Malformed attribute in vendor export", e))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|e| ParseError::transform("Malformed attribute in vendor export", e))?
            .into_owned();
        has_id |= key == "xmi:id";
        let value = match key.as_str() {
            "xmlns:xmi" => standard_namespace(&value, "/XMI/", XMI_NAMESPACE),
            "xmlns:uml" => standard_namespace(&value, "/UML/", UML_NAMESPACE),
            _ => value,
        };
        out.push_attribute((key.as_str(), value.as_str()));
    }
    if is_model && !has_id {
        out.push_attribute(("xmi:id", MODEL_ID));
    }
    Ok(out)
}

/// Replace an OMG namespace URI of any version by the current one.
fn standard_namespace(value: &str, marker: &str, standard: &str) -> String {
    if value.contains("omg.org") && value.contains(marker) {
        standard.to_string()
    } else {
        value.to_string()
    }
}
