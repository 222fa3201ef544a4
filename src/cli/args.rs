//! CLI argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

/// Convert cURL commands into HTTP client code and typed request models
#[derive(Parser, Debug)]
#[command(name = "curlgen", version, about, max_term_width = 100)]
pub struct Args {
    /// The cURL command to convert; read from stdin when omitted
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,

    /// Target language for client code
    #[arg(short = 'l', long, default_value = "go", env = "CURLGEN_LANGUAGE")]
    pub language: String,

    /// Emit a type declaration inferred from the JSON payload instead of
    /// client code
    #[arg(short = 's', long = "struct")]
    pub emit_struct: bool,

    /// Language for the emitted type declaration
    #[arg(long, default_value = "go", value_parser = ["go", "rust"])]
    pub struct_lang: String,

    /// Name of the root type
    #[arg(long, default_value = "RequestStruct")]
    pub root_name: String,

    /// Package or namespace name for the declaration preamble
    #[arg(long = "package", default_value = "main")]
    pub package: String,

    /// Use exported-style field names in the declaration
    #[arg(long)]
    pub export_fields: bool,

    /// Print the parsed command as JSON instead of generating code
    #[arg(long)]
    pub dump_parsed: bool,

    /// Write the output to a file instead of stdout
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Enable debug logging to stderr
    #[arg(long)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_command_args() {
        let args = Args::parse_from(["curlgen", "curl", "https://example.com"]);
        assert_eq!(args.command, vec!["curl", "https://example.com"]);
        assert_eq!(args.language, "go");
        assert!(!args.emit_struct);
    }

    #[test]
    fn test_struct_flags() {
        let args = Args::parse_from([
            "curlgen",
            "--struct",
            "--struct-lang",
            "rust",
            "--root-name",
            "Payload",
            "curl",
            "https://x",
        ]);
        assert!(args.emit_struct);
        assert_eq!(args.struct_lang, "rust");
        assert_eq!(args.root_name, "Payload");
        assert_eq!(args.package, "main");
    }
}
