//! Engine list consistency checks.

use std::collections::HashMap;

use serde_json::Value;

use super::errors::SettingsError;

const REQUIRED_ENGINE_KEYS: [&str; 2] = ["nickname", "path"];

/// Check that the engine list is non-empty, that every engine has a non-empty
/// `nickname` and `path`, and that nicknames are unique.
///
/// Field errors are reported for the first offending engine. Duplicate
/// nicknames are collected across the whole list, in order of first appearance.
pub fn check_engine_settings(engines: &[Value]) -> Result<(), SettingsError> {
    if engines.is_empty() {
        return Err(SettingsError::EngineListEmpty);
    }

    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();

    for (index, engine) in engines.iter().enumerate() {
        for key in REQUIRED_ENGINE_KEYS {
            let Some(value) = engine.get(key) else {
                return Err(SettingsError::EngineFieldMissing {
                    index,
                    key: key.to_string(),
                });
            };
            if matches!(value, Value::String(s) if s.is_empty()) {
                return Err(SettingsError::EngineFieldEmpty {
                    index,
                    key: key.to_string(),
                });
            }
        }

        let nickname = match &engine["nickname"] {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        let count = counts.entry(nickname.clone()).or_insert(0);
        if *count == 0 {
            order.push(nickname);
        }
        *count += 1;
    }

    let duplicates: Vec<String> = order
        .into_iter()
        .filter(|nickname| counts.get(nickname).copied().unwrap_or(0) > 1)
        .collect();
    if !duplicates.is_empty() {
        return Err(SettingsError::DuplicateNickname { names: duplicates });
    }

    Ok(())
}
