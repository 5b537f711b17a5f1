//! Path utilities for vertex identity
//!
//! Vertex paths are plain strings compared after lexical normalization:
//! separators are unified to `/`, redundant separators are dropped and
//! `.`/`..` segments are resolved without touching the filesystem.

use crate::error::{GraphError, GraphResult};
use std::path::{Path, PathBuf};

/// The canonical separator used in every registered path.
pub const SEPARATOR: char = '/';

/// Normalize a vertex path lexically.
///
/// - `\` is treated as a separator and rewritten to `/`
/// - empty and `.` segments are dropped
/// - `..` removes the preceding segment; leading `..` is kept for relative paths
/// - an empty relative result becomes `.`
///
/// Fails on empty input, embedded NUL bytes, and on absolute paths whose
/// `..` segments climb above the root.
pub fn normalize(path: &str) -> GraphResult<String> {
    if path.is_empty() {
        return Err(malformed(path, "path is empty"));
    }
    if path.contains('\0') {
        return Err(malformed(path, "path contains a NUL byte"));
    }

    let unified = path.replace('\\', "/");
    let absolute = unified.starts_with(SEPARATOR);
    let mut segments: Vec<&str> = Vec::new();

    for segment in unified.split(SEPARATOR) {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                _ if absolute => {
                    return Err(malformed(path, "'..' climbs above the root"));
                }
                _ => segments.push(".."),
            },
            other => segments.push(other),
        }
    }

    let joined = segments.join("/");
    Ok(match (absolute, joined.is_empty()) {
        (true, _) => format!("/{joined}"),
        (false, true) => ".".to_string(),
        (false, false) => joined,
    })
}

/// Join directory segments and a vertex name with the canonical separator.
///
/// Pure string operation: empty pieces are skipped and runs of separators
/// collapse into one. `.`/`..` are left for [`normalize`].
pub fn join_segments<'a, I>(segments: I, name: &'a str) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut joined = String::new();
    for piece in segments.into_iter().chain(std::iter::once(name)) {
        if piece.is_empty() {
            continue;
        }
        if !joined.is_empty() {
            joined.push(SEPARATOR);
        }
        joined.push_str(piece);
    }
    collapse_separators(&joined)
}

/// Append a reserved file-kind suffix to a vertex path.
pub fn with_suffix(path: &str, suffix: &str) -> String {
    format!("{path}{suffix}")
}

/// Resolve a descriptor path against a base directory.
///
/// Relative paths are joined onto `base`; absolute paths are returned unchanged.
pub fn resolve_against(path: &Path, base: &Path) -> PathBuf {
    if path.is_relative() {
        base.join(path)
    } else {
        path.to_path_buf()
    }
}

fn collapse_separators(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut previous_was_separator = false;
    for c in path.chars() {
        let c = if c == '\\' { SEPARATOR } else { c };
        if c == SEPARATOR {
            if previous_was_separator {
                continue;
            }
            previous_was_separator = true;
        } else {
            previous_was_separator = false;
        }
        out.push(c);
    }
    out
}

fn malformed(path: &str, reason: &str) -> GraphError {
    GraphError::NormalizationFailed {
        path: path.to_string(),
        reason: reason.to_string(),
    }
}
