//! Rust struct rendering of inferred JSON shapes (serde derive)

use std::collections::HashSet;

use indexmap::IndexMap;

use super::infer::{shape_of, split_words, Field, Shape};
use super::JsonTypeRenderer;

const RUST_KEYWORDS: &[&str] = &[
    "as", "async", "await", "box", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
    "mut", "pub", "ref", "return", "self", "static", "struct", "super", "trait", "true", "type",
    "unsafe", "use", "where", "while",
];

/// Renders inferred shapes as serde-derive Rust structs.
///
/// Field names are snake_cased with a `#[serde(rename = "...")]` attribute
/// whenever the identifier differs from the original key; optional and
/// null-valued fields become `Option<T>`. The package parameter of the
/// renderer boundary has no Rust equivalent and is ignored.
pub struct RustStructRenderer;

impl JsonTypeRenderer for RustStructRenderer {
    fn render(
        &self,
        json: &str,
        root_name: &str,
        _package: &str,
        export_fields: bool,
    ) -> Result<String, String> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| format!("invalid JSON: {}", e))?;

        let mut emitter = Emitter {
            decls: Vec::new(),
            used_names: HashSet::new(),
            export: export_fields,
        };
        let root = emitter.type_name(root_name);

        match shape_of(&value) {
            Shape::Object(fields) => emitter.emit_struct(&root, &fields),
            other => {
                let index = emitter.decls.len();
                emitter.decls.push(String::new());
                let inner = emitter.rust_type(&other, &format!("{}Item", root_name));
                emitter.decls[index] = format!("pub type {} = {};", root, inner);
            }
        }

        Ok(format!(
            "use serde::{{Deserialize, Serialize}};\n\n{}\n",
            emitter.decls.join("\n\n")
        ))
    }
}

struct Emitter {
    decls: Vec<String>,
    used_names: HashSet<String>,
    export: bool,
}

impl Emitter {
    fn emit_struct(&mut self, name: &str, fields: &IndexMap<String, Field>) {
        let index = self.decls.len();
        self.decls.push(String::new());

        let mut body = String::new();
        for (key, field) in fields {
            let field_name = snake_case(key);
            let base = self.rust_type(&field.shape, key);
            let rust_type = if field.optional || field.shape == Shape::Null {
                format!("Option<{}>", base)
            } else {
                base
            };

            if field_name != *key {
                body.push_str(&format!("    #[serde(rename = \"{}\")]\n", key));
            }
            let vis = if self.export { "pub " } else { "" };
            body.push_str(&format!("    {}{}: {},\n", vis, field_name, rust_type));
        }

        self.decls[index] = format!(
            "#[derive(Debug, Clone, Serialize, Deserialize)]\npub struct {} {{\n{}}}",
            name, body
        );
    }

    fn rust_type(&mut self, shape: &Shape, name_hint: &str) -> String {
        match shape {
            Shape::Null | Shape::Any => "serde_json::Value".to_string(),
            Shape::Bool => "bool".to_string(),
            Shape::Int | Shape::Int64 => "i64".to_string(),
            Shape::Float => "f64".to_string(),
            Shape::String => "String".to_string(),
            Shape::Array(element) => format!("Vec<{}>", self.rust_type(element, name_hint)),
            Shape::Object(fields) => {
                let name = self.type_name(name_hint);
                self.emit_struct(&name, fields);
                name
            }
        }
    }

    fn type_name(&mut self, hint: &str) -> String {
        let base = pascal_case(hint);
        let mut name = base.clone();
        let mut counter = 2;
        while !self.used_names.insert(name.clone()) {
            name = format!("{}{}", base, counter);
            counter += 1;
        }
        name
    }
}

fn pascal_case(key: &str) -> String {
    let words = split_words(key);
    if words.is_empty() {
        return "Field".to_string();
    }
    let mut name: String = words
        .iter()
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(c) => c.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect();
    if name.starts_with(|c: char| c.is_numeric()) {
        name = format!("N{}", name);
    }
    name
}

fn snake_case(key: &str) -> String {
    let words = split_words(key);
    if words.is_empty() {
        return "field".to_string();
    }
    let mut name = words
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join("_");
    if name.starts_with(|c: char| c.is_numeric()) {
        name = format!("n{}", name);
    }
    if RUST_KEYWORDS.contains(&name.as_str()) {
        name.push('_');
    }
    name
}
