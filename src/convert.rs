//! The two conversion pipelines
//!
//! Both pipelines take a cURL command string and return a string, always.
//! Every failure mode degrades to a single-line comment (`// Error ...`,
//! `// No JSON data found ...`) so display surfaces never need their own
//! error handling.

use crate::codegen::{self, Language};
use crate::extract;
use crate::parser;
use crate::typegen::JsonTypeRenderer;

/// Root type name used by the fixed-default type-declaration pipeline
pub const DEFAULT_ROOT_NAME: &str = "RequestStruct";
/// Package name used by the fixed-default type-declaration pipeline
pub const DEFAULT_PACKAGE: &str = "main";

/// Convert a cURL command into client code for the given language.
pub fn client_code(command: &str, language: Language) -> String {
    let parsed = parser::parse_command(command);
    codegen::generate(&parsed, language)
}

/// Convert a cURL command into client code, resolving the language by name.
///
/// An unknown language name degrades to an error comment rather than
/// failing, like every other outcome of the pipelines.
pub fn client_code_for(command: &str, language_name: &str) -> String {
    match Language::from_str(language_name) {
        Some(language) => client_code(command, language),
        None => format!(
            "// Error generating code: unknown language '{}' (supported: go, python, rust)",
            language_name
        ),
    }
}

/// Convert a cURL command into a type declaration inferred from its JSON
/// payload, using the fixed defaults (root `RequestStruct`, package `main`,
/// non-exported fields).
pub fn type_declaration(command: &str, renderer: &dyn JsonTypeRenderer) -> String {
    type_declaration_with(command, renderer, DEFAULT_ROOT_NAME, DEFAULT_PACKAGE, false)
}

/// Convert a cURL command into a type declaration with explicit naming.
pub fn type_declaration_with(
    command: &str,
    renderer: &dyn JsonTypeRenderer,
    root_name: &str,
    package: &str,
    export_fields: bool,
) -> String {
    let json = match extract::json_payload(command) {
        Some(json) => json,
        None => return "// No JSON data found in curl command".to_string(),
    };

    match renderer.render(&json, root_name, package, export_fields) {
        Ok(declaration) => declaration,
        Err(descriptor) => format!("// Error generating struct: {}", descriptor),
    }
}
