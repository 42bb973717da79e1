//! Option override file format.
//!
//! One option per line:
//!
//! ```text
//! Hash=64                    # type=spin, min=1, max=33554432
//! Ponder=false               # type=check
//! ```
//!
//! Blank lines and lines starting with `#` are skipped, and anything after a
//! `#` is a comment. Comments are regenerated on every write.

use std::collections::HashSet;

use super::errors::OptionFileError;
use super::types::{OptionCatalog, OverrideMapping, ScalarValue};

/// Columns of padding between the longest `name=value` and its comment.
const COMMENT_PADDING: usize = 10;

/// Parse option file text into a name-to-value mapping.
///
/// Syntax errors abort at the first offending line. Duplicate names are
/// collected across the whole file and reported together once parsing
/// completes, each name listed once in order of its second appearance.
pub fn parse_options(text: &str) -> Result<OverrideMapping, OptionFileError> {
    let mut options = OverrideMapping::new();
    let mut duplicates: Vec<String> = Vec::new();
    let mut seen_duplicates: HashSet<String> = HashSet::new();

    for raw_line in text.lines() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let content = line.split('#').next().unwrap_or_default().trim_end();
        let Some((name, value)) = content.split_once('=') else {
            return Err(OptionFileError::MissingEquals {
                line: raw_line.to_string(),
            });
        };
        let name = name.trim();
        if name.is_empty() {
            return Err(OptionFileError::MissingOptionName {
                line: raw_line.to_string(),
            });
        }

        if options.contains_key(name) {
            if seen_duplicates.insert(name.to_string()) {
                duplicates.push(name.to_string());
            }
            continue;
        }
        options.insert(name.to_string(), ScalarValue::infer(value.trim()));
    }

    if !duplicates.is_empty() {
        return Err(OptionFileError::DuplicateOptionName { names: duplicates });
    }

    Ok(options)
}

/// Render the override file for `catalog`.
///
/// Every configurable option is written in catalog order, using its value from
/// `overrides` when present and its default otherwise. Comments are aligned
/// to a common column.
pub fn render_options(catalog: &OptionCatalog, overrides: &OverrideMapping) -> String {
    let entries: Vec<(String, String)> = catalog
        .configurable()
        .map(|descriptor| {
            let value = overrides.get(&descriptor.name).unwrap_or(&descriptor.default);
            (
                format!("{}={}", descriptor.name, value),
                descriptor.type_annotation(),
            )
        })
        .collect();

    let width = entries
        .iter()
        .map(|(name_and_value, _)| name_and_value.chars().count())
        .max()
        .unwrap_or(0)
        + COMMENT_PADDING;

    entries
        .iter()
        .map(|(name_and_value, comment)| {
            format!("{:<width$} # {}\n", name_and_value, comment, width = width)
        })
        .collect()
}
