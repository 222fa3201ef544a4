//! Rust client code generation (reqwest)

use super::escape_string;
use crate::parser::ParsedCommand;

const METHOD_HELPERS: &[&str] = &["GET", "POST", "PUT", "DELETE", "PATCH", "HEAD"];

/// Generate a Rust program issuing the parsed request.
pub fn generate(parsed: &ParsedCommand) -> String {
    let mut code = String::from("#[tokio::main]\n");
    code.push_str("async fn main() -> Result<(), Box<dyn std::error::Error>> {\n");
    code.push_str("    let client = reqwest::Client::new();\n\n");

    if METHOD_HELPERS.contains(&parsed.method.as_str()) {
        code.push_str(&format!(
            "    let response = client.{}(\"{}\")\n",
            parsed.method.to_lowercase(),
            escape_string(&parsed.url)
        ));
    } else {
        code.push_str(&format!(
            "    let response = client.request(\"{}\".parse()?, \"{}\")\n",
            escape_string(&parsed.method),
            escape_string(&parsed.url)
        ));
    }

    for (name, value) in &parsed.headers {
        code.push_str(&format!(
            "        .header(\"{}\", \"{}\")\n",
            escape_string(name),
            escape_string(value)
        ));
    }

    if parsed.has_body() {
        code.push_str(&format!(
            "        .body(\"{}\")\n",
            escape_string(&parsed.body)
        ));
    }

    code.push_str("        .send()\n");
    code.push_str("        .await?;\n\n");

    code.push_str("    println!(\"Status: {}\", response.status());\n");
    code.push_str("    println!(\"{}\", response.text().await?);\n\n");
    code.push_str("    Ok(())\n");
    code.push_str("}\n");

    code
}
