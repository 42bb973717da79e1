//! Override validation against an engine's option catalog.
//!
//! A single pass over the catalog sorts every violation into its class.
//! Classes are reported in precedence order - managed, button, invalid
//! values, unknown names - and each error lists every offender of its class.

use std::collections::HashSet;

use tracing::debug;

use super::errors::{OptionError, OptionValueError};
use super::types::{OptionCatalog, OptionDescriptor, OptionKind, OverrideMapping, ScalarValue};

#[derive(Default)]
struct Violations {
    managed: Vec<String>,
    buttons: Vec<String>,
    values: Vec<OptionValueError>,
}

/// Check `overrides` against `catalog`.
///
/// # Errors
///
/// - `ManagedOptionSet` if any managed option is present
/// - `ButtonOptionSet` if any button option is present
/// - `InvalidValues` if any value has the wrong type, is out of range, or is
///   not one of the allowed values
/// - `UnknownOption` if any name is not in the catalog, in mapping order
pub fn validate_options(
    catalog: &OptionCatalog,
    overrides: &OverrideMapping,
) -> Result<(), OptionError> {
    let mut violations = Violations::default();
    let mut known: HashSet<&str> = HashSet::new();

    for descriptor in catalog.iter() {
        let Some(value) = overrides.get(&descriptor.name) else {
            continue;
        };
        if descriptor.managed {
            violations.managed.push(descriptor.name.clone());
            continue;
        }
        if descriptor.kind == OptionKind::Button {
            violations.buttons.push(descriptor.name.clone());
            continue;
        }
        if let Err(violation) = check_value(descriptor, value) {
            violations.values.push(violation);
        }
        known.insert(descriptor.name.as_str());
    }

    if !violations.managed.is_empty() {
        return Err(OptionError::ManagedOptionSet {
            names: violations.managed,
        });
    }
    if !violations.buttons.is_empty() {
        return Err(OptionError::ButtonOptionSet {
            names: violations.buttons,
        });
    }
    if !violations.values.is_empty() {
        return Err(OptionError::InvalidValues {
            violations: violations.values,
        });
    }

    let unknown: Vec<String> = overrides
        .keys()
        .filter(|name| !known.contains(name.as_str()))
        .cloned()
        .collect();
    if !unknown.is_empty() {
        return Err(OptionError::UnknownOption { names: unknown });
    }

    debug!(event = "core.options.validated", count = overrides.len());
    Ok(())
}

/// Check one value against its descriptor's kind.
pub fn check_value(
    descriptor: &OptionDescriptor,
    value: &ScalarValue,
) -> Result<(), OptionValueError> {
    let name = &descriptor.name;
    match &descriptor.kind {
        OptionKind::Check => match value {
            ScalarValue::Bool(_) => Ok(()),
            other => Err(OptionValueError::TypeMismatch {
                name: name.clone(),
                value: other.clone(),
                expected: "a boolean",
            }),
        },
        OptionKind::Spin { min, max } => match value {
            ScalarValue::Int(v) if v < min || v > max => Err(OptionValueError::OutOfRange {
                name: name.clone(),
                value: *v,
                min: *min,
                max: *max,
            }),
            ScalarValue::Int(_) => Ok(()),
            other => Err(OptionValueError::TypeMismatch {
                name: name.clone(),
                value: other.clone(),
                expected: "an integer",
            }),
        },
        OptionKind::Combo { allowed } => {
            // Matched on text so a numeric entry such as "2" is accepted after inference.
            let text = value.to_string();
            if !value.is_absent() && allowed.iter().any(|a| *a == text) {
                Ok(())
            } else {
                Err(OptionValueError::NotInEnum {
                    name: name.clone(),
                    value: value.clone(),
                    allowed: allowed.clone(),
                })
            }
        }
        OptionKind::String | OptionKind::Button => Ok(()),
    }
}
