//! Generation results and the response sanitizer/parser.
//!
//! The generation backend is constrained (by the system instruction) to emit
//! a JSON document of the [`AssistantPayload`] shape, but in practice it may
//! wrap the JSON in a markdown code fence or embed raw control bytes inside
//! string literals. `parse_generation_text` repairs both before parsing and
//! degrades to a [`GenerationResult::Failure`] instead of propagating an
//! error, so malformed output can never take the channel down.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Fixed diagnostic broadcast when the generation output cannot be parsed.
pub const PARSE_FAILURE_MESSAGE: &str = "Failed to parse AI response.";

/// Fixed diagnostic broadcast when the generation call itself fails.
pub const GENERATION_FAILURE_MESSAGE: &str = "AI generation failed.";

/// A file entry inside a synthesized file tree: `{ "file": { "contents": … } }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileNode {
    pub file: FileContents,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileContents {
    pub contents: String,
}

/// A runnable command: `{ "mainItem": "npm", "commands": ["install"] }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandSpec {
    pub main_item: String,
    pub commands: Vec<String>,
}

/// The structured result of a successful generation.
///
/// Only `text` is mandatory; conversational replies omit the other fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistantPayload {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_tree: Option<HashMap<String, FileNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_command: Option<CommandSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_command: Option<CommandSpec>,
}

/// Why a generation attempt produced no assistant payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The external call itself failed before returning any text
    Generation,
    /// The returned text could not be interpreted as an assistant payload
    Parse,
}

/// Outcome of one assistant invocation.
///
/// Always one of the two variants; raw generation output is never handed on
/// unparsed and never silently dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationResult {
    Assistant(AssistantPayload),
    Failure { kind: FailureKind, message: String },
}

impl GenerationResult {
    pub fn generation_failure() -> Self {
        Self::Failure {
            kind: FailureKind::Generation,
            message: GENERATION_FAILURE_MESSAGE.to_string(),
        }
    }
}

/// Remove an enclosing markdown code fence: drop the first and last lines
/// and treat the remainder as the fenced body.
fn strip_code_fence(text: &str) -> String {
    let mut lines: Vec<&str> = text.split('\n').collect();
    lines.remove(0);
    lines.pop();
    lines.join("\n").trim().to_string()
}

/// Escape control characters that a JSON parser would reject inside string
/// literals: 0x00-0x08, 0x0B-0x1F and 0x7F become `\uXXXX`. Newline (0x0A)
/// and tab (0x09) are left intact.
fn escape_control_chars(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\u{00}'..='\u{08}' | '\u{0B}'..='\u{1F}' | '\u{7F}' => {
                escaped.push_str(&format!("\\u{:04x}", c as u32));
            }
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Turn the generation backend's raw text into a [`GenerationResult`].
///
/// Sanitization steps, in order: trim, fence stripping, control-char
/// escaping, typed JSON parse. On any parse failure the raw text and the
/// underlying reason are logged and a `Failure` with a fixed diagnostic is
/// returned. Side-effect-free except for logging, so it is safe to call
/// concurrently for independent messages.
pub fn parse_generation_text(raw: &str) -> GenerationResult {
    let trimmed = raw.trim();
    let body = if trimmed.starts_with("```") {
        strip_code_fence(trimmed)
    } else {
        trimmed.to_string()
    };
    let escaped = escape_control_chars(&body);

    match serde_json::from_str::<AssistantPayload>(&escaped) {
        Ok(payload) => GenerationResult::Assistant(payload),
        Err(e) => {
            tracing::warn!(
                "Generation output is not a valid assistant payload: {}. Raw output:\n{}",
                e,
                raw
            );
            GenerationResult::Failure {
                kind: FailureKind::Parse,
                message: PARSE_FAILURE_MESSAGE.to_string(),
            }
        }
    }
}
