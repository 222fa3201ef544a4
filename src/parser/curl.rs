//! Field extraction from cURL command text
//!
//! Each extraction rule lives behind its own named function returning an
//! `Option`, so overlapping rules (flags vs. the bare URL token) stay
//! explicit and testable in isolation.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::debug;

/// Flags whose following token(s) are values, not the URL
const VALUE_FLAGS: &[&str] = &["-X", "-H", "-d", "--data", "--data-raw"];

static METHOD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"-X\s+([A-Z]+)").unwrap());
static HEADER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"-H\s+(?:"([^"]+)"|'([^']+)')"#).unwrap());
static BODY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"-d\s+(?:"([^"]*)"|'([^']*)')"#).unwrap());

/// Parsed cURL command structure
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedCommand {
    /// Request target, empty when no URL-like token was found
    pub url: String,
    /// HTTP verb; defaults to GET, forced to POST when a body is present
    /// and no explicit method was given
    pub method: String,
    /// Headers in order of appearance; duplicate names overwrite in place
    pub headers: IndexMap<String, String>,
    /// Raw request body, empty when no `-d` flag was found
    pub body: String,
}

impl Default for ParsedCommand {
    fn default() -> Self {
        ParsedCommand {
            url: String::new(),
            method: "GET".to_string(),
            headers: IndexMap::new(),
            body: String::new(),
        }
    }
}

impl ParsedCommand {
    pub fn has_body(&self) -> bool {
        !self.body.is_empty()
    }
}

/// Parse a cURL command into its constituent request fields.
///
/// Never fails: for any input, absent flags leave the corresponding field
/// at its default (`GET`, empty URL, no headers, empty body).
pub fn parse_command(command: &str) -> ParsedCommand {
    let command = command.trim();
    let command = command.strip_prefix("curl ").unwrap_or(command);

    let mut parsed = ParsedCommand::default();

    if let Some(url) = extract_url(command) {
        parsed.url = url;
    }
    if let Some(method) = extract_method(command) {
        parsed.method = method;
    }
    parsed.headers = extract_headers(command);
    if let Some(body) = extract_body(command) {
        parsed.body = body;
        // A payload implies POST unless the command asked for something else
        if parsed.method == "GET" {
            parsed.method = "POST".to_string();
        }
    }

    debug!(
        url = %parsed.url,
        method = %parsed.method,
        headers = parsed.headers.len(),
        body_len = parsed.body.len(),
        "parsed curl command"
    );

    parsed
}

/// Extract the request URL: the first whitespace-delimited token that is
/// neither a flag nor the value of a value-taking flag. A matching `'` or
/// `"` wrapper is stripped; the result is not validated as a URL.
pub fn extract_url(command: &str) -> Option<String> {
    let mut tokens = command.split_whitespace();

    while let Some(token) = tokens.next() {
        if token == "curl" {
            continue;
        }
        if token.starts_with('-') {
            if VALUE_FLAGS.contains(&token) {
                skip_flag_value(&mut tokens);
            }
            continue;
        }
        return Some(strip_matching_quotes(token));
    }

    None
}

/// Consume the value token(s) following a flag, spanning whitespace inside
/// a quoted value (`-H "Content-Type: application/json"`).
fn skip_flag_value<'a, I>(tokens: &mut I)
where
    I: Iterator<Item = &'a str>,
{
    let first = match tokens.next() {
        Some(t) => t,
        None => return,
    };
    let quote = match first.chars().next() {
        Some(q @ ('\'' | '"')) => q,
        _ => return,
    };
    // Single token like '-d' '{"a":1}' closes its own quote
    if first.len() > 1 && first.ends_with(quote) {
        return;
    }
    for token in tokens.by_ref() {
        if token.ends_with(quote) {
            break;
        }
    }
}

fn strip_matching_quotes(token: &str) -> String {
    for quote in ['\'', '"'] {
        if token.len() >= 2 && token.starts_with(quote) && token.ends_with(quote) {
            return token[1..token.len() - 1].to_string();
        }
    }
    token.to_string()
}

/// Extract the explicit HTTP method: the first `-X` flag followed by an
/// uppercase-letter run.
pub fn extract_method(command: &str) -> Option<String> {
    METHOD_RE
        .captures(command)
        .map(|caps| caps[1].to_string())
}

/// Extract all `-H 'Name: Value'` headers in order of appearance.
///
/// The quoted string is split on the first `:` (the value may itself
/// contain `:`), both sides trimmed. A match without a `:` is silently
/// dropped; a repeated name overwrites the earlier value in place.
pub fn extract_headers(command: &str) -> IndexMap<String, String> {
    let mut headers = IndexMap::new();

    for caps in HEADER_RE.captures_iter(command) {
        let raw = caps
            .get(1)
            .or_else(|| caps.get(2))
            .map(|m| m.as_str())
            .unwrap_or_default();
        if let Some((name, value)) = raw.split_once(':') {
            headers.insert(name.trim().to_string(), value.trim().to_string());
        }
    }

    headers
}

/// Extract the request body: the first `-d` flag followed by a quoted
/// string. The body is kept raw and unparsed.
pub fn extract_body(command: &str) -> Option<String> {
    BODY_RE.captures(command).map(|caps| {
        caps.get(1)
            .or_else(|| caps.get(2))
            .map(|m| m.as_str())
            .unwrap_or_default()
            .to_string()
    })
}
