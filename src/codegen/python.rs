//! Python client code generation (requests library)

use crate::parser::ParsedCommand;

const METHOD_HELPERS: &[&str] = &["GET", "POST", "PUT", "DELETE", "PATCH", "HEAD", "OPTIONS"];

/// Generate a Python script issuing the parsed request.
pub fn generate(parsed: &ParsedCommand) -> String {
    let mut code = String::from("import requests\n\n");

    code.push_str(&format!("url = \"{}\"\n", escape_double(&parsed.url)));

    if !parsed.headers.is_empty() {
        code.push_str("headers = {\n");
        for (name, value) in &parsed.headers {
            code.push_str(&format!(
                "    \"{}\": \"{}\",\n",
                escape_double(name),
                escape_double(value)
            ));
        }
        code.push_str("}\n");
    }

    if parsed.has_body() {
        code.push_str(&format!("data = '{}'\n", escape_single(&parsed.body)));
    }

    // requests has helpers for the common verbs; anything else goes
    // through requests.request
    code.push_str("\nresponse = requests.");
    if METHOD_HELPERS.contains(&parsed.method.as_str()) {
        code.push_str(&parsed.method.to_lowercase());
        code.push_str("(\n    url");
    } else {
        code.push_str(&format!(
            "request(\n    \"{}\",\n    url",
            escape_double(&parsed.method)
        ));
    }

    if !parsed.headers.is_empty() {
        code.push_str(",\n    headers=headers");
    }
    if parsed.has_body() {
        code.push_str(",\n    data=data");
    }
    code.push_str("\n)\n\n");

    code.push_str("print(response.status_code)\n");
    code.push_str("print(response.text)\n");

    code
}

fn escape_double(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

fn escape_single(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\'', "\\'")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_command;

    #[test]
    fn test_get_without_body() {
        let code = generate(&parse_command("curl https://api.example.com/users"));
        assert!(code.starts_with("import requests\n"));
        assert!(code.contains("url = \"https://api.example.com/users\""));
        assert!(code.contains("response = requests.get(\n    url\n)"));
        assert!(!code.contains("data ="));
    }

    #[test]
    fn test_post_with_header_and_body() {
        let code = generate(&parse_command(
            r#"curl -X POST https://x -H 'Content-Type: application/json' -d '{"a":1}'"#,
        ));
        assert!(code.contains("\"Content-Type\": \"application/json\","));
        assert!(code.contains(r#"data = '{"a":1}'"#));
        assert!(code.contains("requests.post("));
        assert!(code.contains("headers=headers"));
        assert!(code.contains("data=data"));
    }

    #[test]
    fn test_unusual_verb_uses_request() {
        let code = generate(&parse_command("curl -X PURGE https://x"));
        assert!(code.contains("requests.request(\n    \"PURGE\",\n    url"));
    }
}
