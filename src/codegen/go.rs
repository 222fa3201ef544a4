//! Go client code generation (net/http)

use super::escape_string;
use crate::parser::ParsedCommand;

/// Generate a standalone Go program issuing the parsed request.
///
/// The output is always a syntactically complete program: the `strings`
/// import, the payload reader and the header block are omitted when the
/// corresponding fields are absent.
pub fn generate(parsed: &ParsedCommand) -> String {
    let mut code = String::from("package main\n\n");
    code.push_str("import (\n");
    code.push_str("\t\"fmt\"\n");
    code.push_str("\t\"net/http\"\n");
    if parsed.has_body() {
        code.push_str("\t\"strings\"\n");
    }
    code.push_str(")\n\n");

    code.push_str("func main() {\n");

    if parsed.has_body() {
        code.push_str(&format!(
            "\tpayload := strings.NewReader({})\n",
            body_literal(&parsed.body)
        ));
        code.push_str(&format!(
            "\treq, err := http.NewRequest(\"{}\", \"{}\", payload)\n",
            escape_string(&parsed.method),
            escape_string(&parsed.url)
        ));
    } else {
        code.push_str(&format!(
            "\treq, err := http.NewRequest(\"{}\", \"{}\", nil)\n",
            escape_string(&parsed.method),
            escape_string(&parsed.url)
        ));
    }

    code.push_str("\tif err != nil {\n");
    code.push_str("\t\tfmt.Println(err)\n");
    code.push_str("\t\treturn\n");
    code.push_str("\t}\n\n");

    for (name, value) in &parsed.headers {
        code.push_str(&format!(
            "\treq.Header.Add(\"{}\", \"{}\")\n",
            escape_string(name),
            escape_string(value)
        ));
    }
    if !parsed.headers.is_empty() {
        code.push('\n');
    }

    code.push_str("\tclient := &http.Client{}\n");
    code.push_str("\tres, err := client.Do(req)\n");
    code.push_str("\tif err != nil {\n");
    code.push_str("\t\tfmt.Println(err)\n");
    code.push_str("\t\treturn\n");
    code.push_str("\t}\n");
    code.push_str("\tdefer res.Body.Close()\n\n");

    code.push_str("\t// Handle response\n");
    code.push_str("\tfmt.Println(\"Status:\", res.Status)\n");
    code.push_str("}\n");

    code
}

/// Render the body as a raw backtick literal; a body containing a backtick
/// cannot be raw-quoted in Go and falls back to an escaped interpreted
/// literal.
fn body_literal(body: &str) -> String {
    if body.contains('`') {
        format!("\"{}\"", escape_string(body))
    } else {
        format!("`{}`", body)
    }
}
