//! Settings tree merge logic
//!
//! Merges a user-supplied settings tree against the authoritative default tree:
//! - Objects: every default key is resolved; user-only keys pass through untouched
//! - Arrays: the default's first element is a template applied to every user element
//! - Scalars under an object key: the empty string means "unset" and is replaced
//!   by the default when filling; any other user value is kept
//! - Scalar array templates: every element resolves to the default when filling,
//!   or to the empty string otherwise

use serde_json::{Map, Value};
use tracing::warn;

/// Merge `user` against `default`.
///
/// With `fill_defaults` set, every unset scalar resolves to its default value.
/// Without it, unset scalars are left as the empty string, which yields the
/// canonical shape of the user's file without baking defaults into it.
pub fn merge_settings(default: &Value, user: Option<Value>, fill_defaults: bool) -> Value {
    match default {
        Value::Object(default_map) => {
            let user_map = match user {
                None => Map::new(),
                Some(Value::Object(map)) => map,
                Some(other) => {
                    warn!(
                        event = "core.settings.shape_mismatch",
                        expected = "object",
                        found = value_kind(&other),
                        "Replacing value with defaults"
                    );
                    Map::new()
                }
            };
            Value::Object(merge_object(default_map, user_map, fill_defaults))
        }
        Value::Array(default_items) => {
            let user_items = match user {
                Some(Value::Array(items)) if !items.is_empty() => items,
                Some(Value::Array(_)) | None => return default.clone(),
                Some(other) => {
                    warn!(
                        event = "core.settings.shape_mismatch",
                        expected = "array",
                        found = value_kind(&other),
                        "Replacing value with defaults"
                    );
                    return default.clone();
                }
            };
            let Some(template) = default_items.first() else {
                return Value::Array(user_items);
            };
            Value::Array(
                user_items
                    .into_iter()
                    .map(|item| merge_settings(template, Some(item), fill_defaults))
                    .collect(),
            )
        }
        // Reached only for missing keys and for template scalars inside arrays;
        // scalars under an object key are resolved in `merge_object`.
        scalar if fill_defaults => scalar.clone(),
        _ => Value::String(String::new()),
    }
}

fn merge_object(
    default_map: &Map<String, Value>,
    mut user_map: Map<String, Value>,
    fill_defaults: bool,
) -> Map<String, Value> {
    for (key, default_value) in default_map {
        let user_value = user_map.remove(key);
        let merged = match (default_value, user_value) {
            (Value::Object(_) | Value::Array(_), user_value) => {
                merge_settings(default_value, user_value, fill_defaults)
            }
            (_, None) => merge_settings(default_value, None, fill_defaults),
            (_, Some(value)) if is_unset(&value) && fill_defaults => default_value.clone(),
            (_, Some(value)) => value,
        };
        user_map.insert(key.clone(), merged);
    }
    user_map
}

/// The empty string marks a scalar the user has not set.
fn is_unset(value: &Value) -> bool {
    matches!(value, Value::String(s) if s.is_empty())
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn default_tree() -> Value {
        json!({
            "data_directory": "data",
            "engine_options_directory": "engine_options",
            "engines": [{"nickname": "", "path": ""}]
        })
    }

    #[test]
    fn test_absent_user_resolves_to_defaults() {
        let merged = merge_settings(&default_tree(), None, true);
        assert_eq!(merged, default_tree());
    }

    #[test]
    fn test_absent_user_without_fill_blanks_scalars() {
        let merged = merge_settings(&default_tree(), None, false);
        assert_eq!(
            merged,
            json!({
                "data_directory": "",
                "engine_options_directory": "",
                "engines": [{"nickname": "", "path": ""}]
            })
        );
    }

    #[test]
    fn test_missing_key_is_populated() {
        let user = json!({
            "engine_options_directory": "custom",
            "engines": [{"nickname": "sf", "path": "/usr/bin/stockfish"}]
        });
        let merged = merge_settings(&default_tree(), Some(user), true);

        assert_eq!(merged["data_directory"], "data");
        assert_eq!(merged["engine_options_directory"], "custom");
        assert_eq!(merged["engines"][0]["nickname"], "sf");
        assert_eq!(merged["engines"][0]["path"], "/usr/bin/stockfish");
    }

    #[test]
    fn test_empty_string_is_replaced_only_when_filling() {
        let user = json!({"data_directory": ""});

        let filled = merge_settings(&default_tree(), Some(user.clone()), true);
        assert_eq!(filled["data_directory"], "data");

        let shaped = merge_settings(&default_tree(), Some(user), false);
        assert_eq!(shaped["data_directory"], "");
    }

    #[test]
    fn test_user_value_kept_verbatim() {
        let user = json!({"data_directory": 42});
        let merged = merge_settings(&default_tree(), Some(user), true);
        assert_eq!(merged["data_directory"], 42);
    }

    #[test]
    fn test_unknown_keys_pass_through() {
        let user = json!({"theme": {"colour": "dark"}, "data_directory": "d"});
        let merged = merge_settings(&default_tree(), Some(user), true);

        assert_eq!(merged["theme"], json!({"colour": "dark"}));
        assert_eq!(merged["data_directory"], "d");
    }

    #[test]
    fn test_array_template_applies_to_every_element() {
        let user = json!({
            "engines": [{"nickname": "test1"}, {"nickname": "test2", "extra": true}]
        });
        let merged = merge_settings(&default_tree(), Some(user), true);

        let engines = merged["engines"].as_array().unwrap();
        assert_eq!(engines.len(), 2);
        assert_eq!(engines[0], json!({"nickname": "test1", "path": ""}));
        assert_eq!(
            engines[1],
            json!({"nickname": "test2", "path": "", "extra": true})
        );
    }

    #[test]
    fn test_scalar_array_template_resolves_every_element() {
        let default = json!({"tags": [""]});
        let user = json!({"tags": ["x", "y"]});

        assert_eq!(
            merge_settings(&default, Some(user), true),
            json!({"tags": ["", ""]})
        );

        let default = json!({"limits": [8]});
        let user = json!({"limits": [1, 2, 3]});
        assert_eq!(
            merge_settings(&default, Some(user.clone()), true),
            json!({"limits": [8, 8, 8]})
        );
        assert_eq!(
            merge_settings(&default, Some(user), false),
            json!({"limits": ["", "", ""]})
        );
    }

    #[test]
    fn test_empty_user_array_returns_raw_default() {
        let user = json!({"engines": []});
        let merged = merge_settings(&default_tree(), Some(user), false);
        assert_eq!(merged["engines"], json!([{"nickname": "", "path": ""}]));
    }

    #[test]
    fn test_nested_object_template() {
        let default = json!({"engines": [{"nickname": "", "limits": {"depth": 20}}]});
        let user = json!({"engines": [{"nickname": "sf", "limits": {}}]});
        let merged = merge_settings(&default, Some(user), true);

        assert_eq!(merged["engines"][0]["limits"]["depth"], 20);
    }

    #[test]
    fn test_shape_mismatch_replaced_by_defaults() {
        let user = json!({"engines": "stockfish"});
        let merged = merge_settings(&default_tree(), Some(user), true);
        assert_eq!(merged["engines"], json!([{"nickname": "", "path": ""}]));

        let merged = merge_settings(&default_tree(), Some(json!([1, 2])), true);
        assert_eq!(merged, default_tree());
    }

    #[test]
    fn test_merge_is_idempotent() {
        let users = [
            json!({}),
            json!({"data_directory": ""}),
            json!({"engines": [{"nickname": "a"}, {"path": "/b"}], "other": [1, 2]}),
            json!({"engine_options_directory": null, "engines": []}),
        ];

        for user in users {
            let once = merge_settings(&default_tree(), Some(user), true);
            let twice = merge_settings(&default_tree(), Some(once.clone()), true);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_shape_then_fill_equals_fill() {
        let user = json!({"engines": [{"nickname": "a"}], "data_directory": ""});

        let shaped = merge_settings(&default_tree(), Some(user.clone()), false);
        let from_shape = merge_settings(&default_tree(), Some(shaped), true);
        let direct = merge_settings(&default_tree(), Some(user), true);

        assert_eq!(from_shape, direct);
    }
}
