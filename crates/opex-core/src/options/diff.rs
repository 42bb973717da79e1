//! Conversion between full option mappings and diff mappings.
//!
//! Only values that differ from the engine's default are persisted as overrides.

use super::types::{OptionCatalog, OptionDescriptor, OptionKind, OverrideMapping, ScalarValue};

/// Historical placeholder some engines report as the default of a string
/// option that has no concrete default. An empty value is treated as equal to it.
pub const EMPTY_DEFAULT_LITERAL: &str = "<empty>";

/// Whether `value` is the default for `descriptor`.
pub fn is_default_value(descriptor: &OptionDescriptor, value: &ScalarValue) -> bool {
    let default = &descriptor.default;
    if default == value {
        return true;
    }

    let no_concrete_default =
        default.is_absent() || matches!(default, ScalarValue::Str(s) if s == EMPTY_DEFAULT_LITERAL);
    no_concrete_default && value.is_empty_str()
}

/// Convert inferred values to the scalar type their option holds.
///
/// String and combo options always hold text, so `Threads=0` read from a file
/// becomes `Str("0")` and compares equal to a string default of `"0"`. Names
/// outside the catalog are left as they are.
pub fn normalize_to_catalog(
    catalog: &OptionCatalog,
    overrides: &OverrideMapping,
) -> OverrideMapping {
    overrides
        .iter()
        .map(|(name, value)| {
            let value = match catalog.get(name) {
                Some(descriptor) => normalize_value(descriptor, value),
                None => value.clone(),
            };
            (name.clone(), value)
        })
        .collect()
}

fn normalize_value(descriptor: &OptionDescriptor, value: &ScalarValue) -> ScalarValue {
    match (&descriptor.kind, value) {
        (_, ScalarValue::Absent | ScalarValue::Str(_)) => value.clone(),
        (OptionKind::String | OptionKind::Combo { .. }, other) => {
            ScalarValue::Str(other.to_string())
        }
        _ => value.clone(),
    }
}

/// Reduce a full mapping to the entries that differ from their defaults.
///
/// Entries are kept in catalog order; names outside the catalog's
/// configurable options are dropped.
pub fn reduce_to_diff(catalog: &OptionCatalog, full: &OverrideMapping) -> OverrideMapping {
    catalog
        .configurable()
        .filter_map(|descriptor| {
            let value = full.get(&descriptor.name)?;
            if is_default_value(descriptor, value) {
                None
            } else {
                Some((descriptor.name.clone(), value.clone()))
            }
        })
        .collect()
}

/// Expand a diff mapping to every configurable option, in catalog order.
///
/// Options missing from `diff` take their default, or the empty string when
/// the engine reports no default.
pub fn expand_with_defaults(catalog: &OptionCatalog, diff: &OverrideMapping) -> OverrideMapping {
    catalog
        .configurable()
        .map(|descriptor| {
            let value = diff
                .get(&descriptor.name)
                .cloned()
                .unwrap_or_else(|| descriptor.default.or_empty());
            (descriptor.name.clone(), value)
        })
        .collect()
}
