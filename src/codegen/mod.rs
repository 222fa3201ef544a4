//! Client code generation for various languages
//!
//! Renders a parsed cURL command as a standalone program that issues the
//! described HTTP request. Go is the primary target; Python (requests) and
//! Rust (reqwest) are also supported.

pub mod go;
pub mod python;
pub mod rust;

use crate::parser::ParsedCommand;

/// Supported languages for client code generation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Language {
    Go,
    Python,
    Rust,
}

impl Language {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "go" | "golang" => Some(Language::Go),
            "python" | "py" => Some(Language::Python),
            "rust" | "rs" => Some(Language::Rust),
            _ => None,
        }
    }
}

/// Generate client code for the specified language
pub fn generate(parsed: &ParsedCommand, language: Language) -> String {
    match language {
        Language::Go => go::generate(parsed),
        Language::Python => python::generate(parsed),
        Language::Rust => rust::generate(parsed),
    }
}

/// Escape special characters for double-quoted string literals
///
/// Shared by the Go and Rust templates; both use C-style escapes.
pub(crate) fn escape_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}
