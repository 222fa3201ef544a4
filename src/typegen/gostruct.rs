//! Go struct rendering of inferred JSON shapes

use std::collections::HashSet;

use indexmap::IndexMap;

use super::infer::{shape_of, split_words, Field, Shape};
use super::JsonTypeRenderer;

const GO_KEYWORDS: &[&str] = &[
    "break", "case", "chan", "const", "continue", "default", "defer", "else", "fallthrough",
    "for", "func", "go", "goto", "if", "import", "interface", "map", "package", "range",
    "return", "select", "struct", "switch", "type", "var",
];

/// Renders inferred shapes as Go struct declarations with `json:` tags.
///
/// Nested objects are lifted into their own named types (named after the
/// field, de-duplicated with numeric suffixes); fields that are missing
/// from some array elements or null-valued get `,omitempty` tags.
pub struct GoStructRenderer;

impl JsonTypeRenderer for GoStructRenderer {
    fn render(
        &self,
        json: &str,
        root_name: &str,
        package: &str,
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
                // Non-object roots become a named alias, e.g.
                // `type RequestStruct []RequestStructItem`
                let index = emitter.decls.len();
                emitter.decls.push(String::new());
                let inner = emitter.go_type(&other, &format!("{}Item", root_name));
                emitter.decls[index] = format!("type {} {}", root, inner);
            }
        }

        Ok(format!(
            "package {}\n\n{}\n",
            package,
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
        // Reserve the slot so nested types land after their parent
        let index = self.decls.len();
        self.decls.push(String::new());

        let mut body = String::new();
        for (key, field) in fields {
            let field_name = self.field_name(key);
            let go_type = self.go_type(&field.shape, key);
            let tag = if field.optional {
                format!("{},omitempty", key)
            } else {
                key.clone()
            };
            body.push_str(&format!("\t{} {} `json:\"{}\"`\n", field_name, go_type, tag));
        }

        self.decls[index] = format!("type {} struct {{\n{}}}", name, body);
    }

    fn go_type(&mut self, shape: &Shape, name_hint: &str) -> String {
        match shape {
            Shape::Null | Shape::Any => "interface{}".to_string(),
            Shape::Bool => "bool".to_string(),
            Shape::Int => "int".to_string(),
            Shape::Int64 => "int64".to_string(),
            Shape::Float => "float64".to_string(),
            Shape::String => "string".to_string(),
            Shape::Array(element) => format!("[]{}", self.go_type(element, name_hint)),
            Shape::Object(fields) => {
                let name = self.type_name(name_hint);
                self.emit_struct(&name, fields);
                name
            }
        }
    }

    /// Reserve a unique exported type name derived from a field name.
    fn type_name(&mut self, hint: &str) -> String {
        let base = camel_case(hint, true);
        let mut name = base.clone();
        let mut counter = 2;
        while !self.used_names.insert(name.clone()) {
            name = format!("{}{}", base, counter);
            counter += 1;
        }
        name
    }

    fn field_name(&self, key: &str) -> String {
        let name = camel_case(key, self.export);
        if !self.export && GO_KEYWORDS.contains(&name.as_str()) {
            return format!("{}_", name);
        }
        name
    }
}

/// Build a valid Go identifier from an arbitrary JSON key.
fn camel_case(key: &str, exported: bool) -> String {
    let words = split_words(key);
    if words.is_empty() {
        return if exported { "Field".to_string() } else { "field".to_string() };
    }

    let mut name = String::new();
    for (i, word) in words.iter().enumerate() {
        if i == 0 && !exported {
            name.push_str(&lower_first(word));
        } else {
            name.push_str(&upper_first(word));
        }
    }

    if name.starts_with(|c: char| c.is_numeric()) {
        name = format!("Num{}", name);
    }
    name
}

fn upper_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn lower_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(c) => c.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(json: &str, export: bool) -> String {
        GoStructRenderer
            .render(json, "RequestStruct", "main", export)
            .unwrap()
    }

    #[test]
    fn test_single_string_field() {
        let decl = render(r#"{"name":"Bob"}"#, false);
        assert_eq!(
            decl,
            "package main\n\ntype RequestStruct struct {\n\tname string `json:\"name\"`\n}\n"
        );
    }

    #[test]
    fn test_exported_fields() {
        let decl = render(r#"{"user_name":"Bob"}"#, true);
        assert!(decl.contains("\tUserName string `json:\"user_name\"`"));
    }

    #[test]
    fn test_nested_object_lifted_to_named_type() {
        let decl = render(r#"{"user":{"id":1,"tags":["a"]}}"#, true);
        assert!(decl.contains("\tUser User `json:\"user\"`"));
        assert!(decl.contains("type User struct {"));
        assert!(decl.contains("\tId int `json:\"id\"`"));
        assert!(decl.contains("\tTags []string `json:\"tags\"`"));
        // Root declaration comes first
        assert!(decl.find("type RequestStruct").unwrap() < decl.find("type User struct").unwrap());
    }

    #[test]
    fn test_array_of_objects_with_optional_fields() {
        let decl = render(r#"{"items":[{"a":1},{"a":2,"b":"x"}]}"#, true);
        assert!(decl.contains("\tItems []Items `json:\"items\"`"));
        assert!(decl.contains("\tA int `json:\"a\"`"));
        assert!(decl.contains("\tB string `json:\"b,omitempty\"`"));
    }

    #[test]
    fn test_numeric_widening() {
        let decl = render(r#"{"big":5000000000,"ratio":0.5,"mixed":[1,2.5]}"#, true);
        assert!(decl.contains("\tBig int64"));
        assert!(decl.contains("\tRatio float64"));
        assert!(decl.contains("\tMixed []float64"));
    }

    #[test]
    fn test_null_and_mixed_become_interface() {
        let decl = render(r#"{"gone":null,"odd":[1,"x"]}"#, true);
        assert!(decl.contains("\tGone interface{} `json:\"gone\"`"));
        assert!(decl.contains("\tOdd []interface{}"));
    }

    #[test]
    fn test_type_name_collision_gets_suffix() {
        let decl = render(r#"{"a":{"v":1},"b":{"a":{"w":1}}}"#, true);
        assert!(decl.contains("type A struct {"));
        assert!(decl.contains("type A2 struct {"));
        assert!(decl.contains("\tA A2 `json:\"a\"`"));
    }

    #[test]
    fn test_root_array() {
        let decl = render(r#"[{"a":1}]"#, true);
        assert!(decl.contains("type RequestStruct []RequestStructItem"));
        assert!(decl.contains("type RequestStructItem struct {"));
    }

    #[test]
    fn test_root_scalar() {
        let decl = render("42", true);
        assert!(decl.contains("type RequestStruct int"));
    }

    #[test]
    fn test_keyword_field_name() {
        let decl = render(r#"{"type":"x"}"#, false);
        assert!(decl.contains("\ttype_ string `json:\"type\"`"));
    }

    #[test]
    fn test_awkward_keys_sanitized() {
        let decl = render(r#"{"x-api-key":"k","2fa":true}"#, true);
        assert!(decl.contains("\tXApiKey string `json:\"x-api-key\"`"));
        assert!(decl.contains("\tNum2fa bool `json:\"2fa\"`"));
    }

    #[test]
    fn test_invalid_json_is_error_descriptor() {
        let err = GoStructRenderer
            .render("{not json", "RequestStruct", "main", false)
            .unwrap_err();
        assert!(err.starts_with("invalid JSON:"));
    }
}
