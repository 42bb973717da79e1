//! UCI engine process plumbing.
//!
//! Only the parts of the protocol needed to read an engine's option catalog
//! and apply overrides: `uci`/`uciok`, `setoption`, `isready`/`readyok` and `quit`.
//! Every call blocks until the engine answers.

use std::io::{BufRead, BufReader, Write};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};

use tracing::{debug, info, warn};

use super::errors::EngineError;
use super::traits::EngineLauncher;
use crate::options::{OptionDescriptor, OptionKind, OverrideMapping, ScalarValue};
use crate::settings::EngineSettings;

const KEYWORDS: [&str; 6] = ["name", "type", "default", "min", "max", "var"];

/// Parse one `option name <name> type <kind> ...` line reported by an engine.
///
/// Unrecognised kinds (such as `filename`) are treated as strings.
pub fn parse_option_line(line: &str) -> Result<OptionDescriptor, EngineError> {
    let invalid = |message: &str| EngineError::InvalidOptionLine {
        line: line.to_string(),
        message: message.to_string(),
    };

    let mut tokens = line.split_whitespace();
    if tokens.next() != Some("option") {
        return Err(invalid("expected 'option'"));
    }

    let mut name: Vec<&str> = Vec::new();
    let mut kind: Option<&str> = None;
    let mut default: Option<Vec<&str>> = None;
    let mut min: Option<&str> = None;
    let mut max: Option<&str> = None;
    let mut vars: Vec<Vec<&str>> = Vec::new();
    let mut field = "";

    for token in tokens {
        if KEYWORDS.contains(&token) {
            field = token;
            match token {
                "default" => default = Some(Vec::new()),
                "var" => vars.push(Vec::new()),
                _ => {}
            }
            continue;
        }
        match field {
            "name" => name.push(token),
            "type" => kind = Some(token),
            "default" => default.get_or_insert_with(Vec::new).push(token),
            "min" => min = Some(token),
            "max" => max = Some(token),
            "var" => {
                if let Some(var) = vars.last_mut() {
                    var.push(token);
                }
            }
            _ => return Err(invalid("unexpected token before 'name'")),
        }
    }

    let name = name.join(" ");
    if name.is_empty() {
        return Err(invalid("missing option name"));
    }
    let kind = kind.ok_or_else(|| invalid("missing option type"))?;
    let default = default.map(|tokens| tokens.join(" "));

    let parse_int = |text: Option<&str>, what: &str| -> Result<i64, EngineError> {
        text.and_then(|t| t.parse().ok())
            .ok_or_else(|| invalid(&format!("missing or invalid '{}'", what)))
    };

    let descriptor = match kind {
        "check" => {
            let value = match default.as_deref() {
                Some(text) if text.eq_ignore_ascii_case("true") => true,
                Some(text) if text.eq_ignore_ascii_case("false") => false,
                None => false,
                Some(_) => return Err(invalid("check default is not a boolean")),
            };
            OptionDescriptor::check(name, value)
        }
        "spin" => {
            let min = parse_int(min, "min")?;
            let max = parse_int(max, "max")?;
            let value = parse_int(default.as_deref(), "default")?;
            OptionDescriptor::spin(name, value, min, max)
        }
        "combo" => {
            let allowed: Vec<String> = vars.iter().map(|var| var.join(" ")).collect();
            OptionDescriptor::new(
                name,
                OptionKind::Combo { allowed },
                default.map_or(ScalarValue::Absent, ScalarValue::Str),
            )
        }
        "button" => OptionDescriptor::button(name),
        _ => OptionDescriptor::string(name, default.as_deref()),
    };
    Ok(descriptor)
}

/// A running UCI engine process.
#[derive(Debug)]
pub struct UciEngine {
    path: String,
    child: Child,
    stdin: ChildStdin,
    stdout: BufReader<ChildStdout>,
    options: Vec<OptionDescriptor>,
}

impl UciEngine {
    /// Start the engine binary at `path` and complete the `uci` handshake.
    pub fn spawn(path: &str) -> Result<Self, EngineError> {
        Self::start(Command::new(path), path)
    }

    /// Start an engine from a prepared command and complete the `uci` handshake.
    ///
    /// `label` identifies the engine in logs and errors.
    pub fn start(mut command: Command, label: &str) -> Result<Self, EngineError> {
        info!(event = "core.engine.spawn_started", path = label);

        let mut child = command
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| EngineError::SpawnFailed {
                path: label.to_string(),
                source,
            })?;

        let (Some(stdin), Some(stdout)) = (child.stdin.take(), child.stdout.take()) else {
            let _ = child.kill();
            let _ = child.wait();
            return Err(EngineError::IoError {
                path: label.to_string(),
                source: std::io::Error::other("engine pipes unavailable"),
            });
        };

        let mut engine = Self {
            path: label.to_string(),
            child,
            stdin,
            stdout: BufReader::new(stdout),
            options: Vec::new(),
        };
        engine.options = engine.handshake()?;

        info!(
            event = "core.engine.spawn_completed",
            path = label,
            option_count = engine.options.len()
        );
        Ok(engine)
    }

    /// Options reported during the handshake, in report order.
    pub fn options(&self) -> &[OptionDescriptor] {
        &self.options
    }

    /// Send one `setoption` per override, then wait until the engine is ready.
    pub fn configure(&mut self, overrides: &OverrideMapping) -> Result<(), EngineError> {
        for (name, value) in overrides {
            let command = match value {
                ScalarValue::Absent => format!("setoption name {}", name),
                value => format!("setoption name {} value {}", name, value),
            };
            self.send(&command)?;
        }
        self.send("isready")?;
        self.wait_for("readyok", |_| Ok(()))?;

        debug!(
            event = "core.engine.configured",
            path = %self.path,
            count = overrides.len()
        );
        Ok(())
    }

    /// Ask the engine to exit and wait for it.
    pub fn quit(mut self) -> Result<(), EngineError> {
        self.send("quit")?;
        self.child.wait().map_err(|source| EngineError::IoError {
            path: self.path.clone(),
            source,
        })?;
        debug!(event = "core.engine.quit", path = %self.path);
        Ok(())
    }

    fn handshake(&mut self) -> Result<Vec<OptionDescriptor>, EngineError> {
        self.send("uci")?;
        let mut options = Vec::new();
        self.wait_for("uciok", |line| {
            if line.starts_with("option ") {
                options.push(parse_option_line(line)?);
            }
            Ok(())
        })?;
        Ok(options)
    }

    fn send(&mut self, command: &str) -> Result<(), EngineError> {
        writeln!(self.stdin, "{}", command)
            .and_then(|_| self.stdin.flush())
            .map_err(|source| EngineError::IoError {
                path: self.path.clone(),
                source,
            })
    }

    /// Read lines until `expected`, passing every other line to `on_line`.
    fn wait_for(
        &mut self,
        expected: &str,
        mut on_line: impl FnMut(&str) -> Result<(), EngineError>,
    ) -> Result<(), EngineError> {
        let mut line = String::new();
        loop {
            line.clear();
            let read = self
                .stdout
                .read_line(&mut line)
                .map_err(|source| EngineError::IoError {
                    path: self.path.clone(),
                    source,
                })?;
            if read == 0 {
                return Err(EngineError::HandshakeIncomplete {
                    path: self.path.clone(),
                    expected: expected.to_string(),
                });
            }
            let trimmed = line.trim();
            if trimmed == expected {
                return Ok(());
            }
            on_line(trimmed)?;
        }
    }
}

impl Drop for UciEngine {
    fn drop(&mut self) {
        if let Ok(None) = self.child.try_wait() {
            warn!(
                event = "core.engine.killed",
                path = %self.path,
                "Engine still running on drop"
            );
            let _ = self.child.kill();
            let _ = self.child.wait();
        }
    }
}

/// Launches engine binaries over UCI.
#[derive(Debug, Clone, Copy, Default)]
pub struct UciLauncher;

impl EngineLauncher for UciLauncher {
    fn list_options(&self, engine: &EngineSettings) -> Result<Vec<OptionDescriptor>, EngineError> {
        let process = UciEngine::spawn(&engine.path)?;
        let options = process.options().to_vec();
        process.quit()?;
        Ok(options)
    }
}
