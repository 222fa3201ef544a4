//! JSON payload extraction from cURL command text
//!
//! Finds the first substring that plausibly originates from a data flag
//! (`-d`, `--data`, `--data-raw`, quoted or unquoted) and parses as valid
//! JSON. When none of the flag-based candidates validate, falls back to
//! scanning for brace-delimited `{...}` substrings (non-greedy, so nested
//! objects are only found through the flag-based candidates).
//!
//! Validity is a hard gate: malformed candidates are skipped, never
//! repaired.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

static DATA_SHORT_QUOTED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"-d\s+(?:"([^"]*)"|'([^']*)')"#).unwrap());
static DATA_LONG_QUOTED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"--data\s+(?:"([^"]*)"|'([^']*)')"#).unwrap());
static DATA_SHORT_BARE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"-d\s+(\S+)").unwrap());
static DATA_LONG_BARE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"--data\s+(\S+)").unwrap());
static DATA_RAW_QUOTED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"--data-raw\s+(?:"([^"]*)"|'([^']*)')"#).unwrap());
static BRACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{[^}]*\}").unwrap());

/// Return the first valid-JSON payload found in the command, or `None`.
///
/// Candidates are tried in a fixed order: `-d` quoted, `--data` quoted,
/// `-d` bare token, `--data` bare token, `--data-raw` quoted, then the
/// generic brace scan.
pub fn json_payload(command: &str) -> Option<String> {
    let flag_candidates = [
        quoted_capture(&DATA_SHORT_QUOTED_RE, command),
        quoted_capture(&DATA_LONG_QUOTED_RE, command),
        bare_capture(&DATA_SHORT_BARE_RE, command),
        bare_capture(&DATA_LONG_BARE_RE, command),
        quoted_capture(&DATA_RAW_QUOTED_RE, command),
    ];

    for candidate in flag_candidates.into_iter().flatten() {
        if is_valid_json(&candidate) {
            debug!(len = candidate.len(), "json payload found via data flag");
            return Some(candidate);
        }
    }

    // Fall back to any brace-delimited substring that validates
    for m in BRACE_RE.find_iter(command) {
        if is_valid_json(m.as_str()) {
            debug!(len = m.len(), "json payload found via brace scan");
            return Some(m.as_str().to_string());
        }
    }

    None
}

fn quoted_capture(re: &Regex, command: &str) -> Option<String> {
    re.captures(command).and_then(|caps| {
        caps.get(1)
            .or_else(|| caps.get(2))
            .map(|m| m.as_str().to_string())
    })
}

fn bare_capture(re: &Regex, command: &str) -> Option<String> {
    re.captures(command).map(|caps| caps[1].to_string())
}

fn is_valid_json(candidate: &str) -> bool {
    serde_json::from_str::<serde_json::Value>(candidate).is_ok()
}
