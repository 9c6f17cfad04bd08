//! Zip archive support.
//!
//! A model may be shipped as a zip archive holding exactly one model file,
//! optionally next to a companion profile file of the same base name:
//!
//! ```text
//! model.zip
//! ├── Aircraft.uml           # the candidate
//! └── Aircraft.profile.uml   # companion profile, never a candidate
//! ```
//!
//! The archive is extracted into a scratch directory that lives only for the
//! duration of [`unwrap_with`]. Entries whose path would land outside of that
//! directory abort the parse.

use std::fs::{self, File};
use std::io::{self, BufReader, Read};
use std::path::{Component, Path, PathBuf};

use tempfile::TempDir;
use zip::ZipArchive;

use crate::config::ParserConfig;
use crate::error::{ParseError, ParseResult};

/// Local file header signature.
const ZIP_LOCAL_HEADER: &[u8; 4] = b"PK\x03\x04";
/// End of central directory signature, which starts an empty archive.
const ZIP_EMPTY_ARCHIVE: &[u8; 4] = b"PK\x05\x06";

/// Whether `input` starts with a zip signature.
pub fn is_zip_bytes(input: &[u8]) -> bool {
    input.len() >= 4 && (&input[0..4] == ZIP_LOCAL_HEADER || &input[0..4] == ZIP_EMPTY_ARCHIVE)
}

/// Whether the file content is a zip archive, regardless of its extension.
pub fn is_zip(path: &Path) -> ParseResult<bool> {
    let mut file = File::open(path).map_err(|e| ParseError::io(path, e))?;
    let mut magic = Vec::with_capacity(4);
    file.by_ref()
        .take(4)
        .read_to_end(&mut magic)
        .map_err(|e| ParseError::io(path, e))?;
    Ok(is_zip_bytes(&magic))
}

/// Extract `path` into a scratch directory and run `parse` on the single
/// model file it contains.
///
/// The scratch directory is removed before this function returns, whether
/// `parse` succeeded or not.
pub fn unwrap_with<T>(
    path: &Path,
    config: &ParserConfig,
    parse: impl FnOnce(&Path) -> ParseResult<T>,
) -> ParseResult<T> {
    tracing::debug!(archive = %path.display(), "Input is a ZIP file. Unzipping it first.");
    let file = File::open(path).map_err(|e| ParseError::io(path, e))?;
    let mut archive = ZipArchive::new(BufReader::new(file))
        .map_err(|e| ParseError::archive_caused(path, "Unable to open archive", e))?;

    let scratch = tempfile::Builder::new()
        .prefix("scs-unzip")
        .tempdir()
        .map_err(|e| ParseError::io(std::env::temp_dir(), e))?;

    let result = extract_all(path, &mut archive, &scratch)
        .and_then(|()| single_candidate(path, scratch.path(), config))
        .and_then(|candidate| {
            tracing::debug!(
                candidate = %candidate.display(),
                "Parsing model extracted from archive"
            );
            parse(&candidate)
        });
    drop(scratch);
    result
}

fn extract_all<R: Read + io::Seek>(
    path: &Path,
    archive: &mut ZipArchive<R>,
    scratch: &TempDir,
) -> ParseResult<()> {
    let root = scratch.path();
    for index in 0..archive.len() {
        let mut entry = archive.by_index(index).map_err(|e| {
            ParseError::archive_caused(path, format!("Unable to read entry #{index}"), e)
        })?;
        let name = entry.name().to_string();
        let destination = contained_path(root, &name).ok_or_else(|| {
            ParseError::archive(path, format!("Entry is outside of the target dir: {name}"))
        })?;

        if destination == root {
            if entry.is_dir() {
                continue;
            }
            return Err(ParseError::archive(
                path,
                format!("Entry has no file name: {name}"),
            ));
        }
        if entry.is_dir() {
            fs::create_dir_all(&destination).map_err(|e| ParseError::io(&destination, e))?;
            continue;
        }
        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent).map_err(|e| ParseError::io(parent, e))?;
        }
        let mut out = File::create(&destination).map_err(|e| ParseError::io(&destination, e))?;
        io::copy(&mut entry, &mut out).map_err(|e| {
            ParseError::archive_caused(path, format!("Unable to extract entry {name}"), e)
        })?;
    }
    tracing::trace!(entries = archive.len(), "Archive extracted");
    Ok(())
}

/// Destination of an entry named `name` under `root`, or `None` when the
/// entry would escape `root`. A name that normalizes to nothing (`./`) is
/// `root` itself.
fn contained_path(root: &Path, name: &str) -> Option<PathBuf> {
    let mut relative = PathBuf::new();
    for component in Path::new(name).components() {
        match component {
            Component::Normal(part) => relative.push(part),
            Component::CurDir => {}
            Component::ParentDir => {
                if !relative.pop() {
                    return None;
                }
            }
            Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    let destination = root.join(relative);
    destination.starts_with(root).then_some(destination)
}

fn single_candidate(archive: &Path, dir: &Path, config: &ParserConfig) -> ParseResult<PathBuf> {
    let entries = fs::read_dir(dir).map_err(|e| ParseError::io(dir, e))?;
    let mut candidates = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ParseError::io(dir, e))?;
        let is_file = entry
            .file_type()
            .map_err(|e| ParseError::io(entry.path(), e))?
            .is_file();
        if is_file && is_model_candidate(&entry.path(), config) {
            candidates.push(entry.path());
        }
    }
    candidates.sort();

    match candidates.len() {
        1 => Ok(candidates.remove(0)),
        n => Err(ParseError::archive(
            archive,
            format!("Expected a single model file in the archive, but found {n}"),
        )),
    }
}

/// Whether a file extracted from an archive may be the model to parse.
///
/// Companion profile files (`<name>.<marker>.<ext>`) are never candidates.
pub fn is_model_candidate(path: &Path, config: &ParserConfig) -> bool {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return false;
    };
    if !config
        .archive_candidate_extensions()
        .any(|candidate| candidate.eq_ignore_ascii_case(ext))
    {
        return false;
    }
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    !stem.ends_with(&format!(".{}", config.profile_marker))
}
