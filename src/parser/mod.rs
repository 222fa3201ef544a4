//! cURL command parsing
//!
//! Extracts the URL, method, headers and body from a pasted cURL command
//! using direct pattern matching. This is deliberately not a shell
//! tokenizer: quoting edge cases, `\`-escapes and line continuations are
//! out of scope, and parsing never fails - a missing flag just leaves the
//! corresponding field at its default.

pub mod curl;

pub use curl::{parse_command, ParsedCommand};
