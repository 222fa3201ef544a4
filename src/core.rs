//! Main execution logic for the CLI
//!
//! Reads the cURL command from the arguments or stdin, runs the selected
//! pipeline and writes the result. The pipelines themselves never fail;
//! the exit status reflects whether the output degraded to an error
//! comment, so scripts can tell generated code from diagnostics.

use std::io::Read;

use tracing::debug;

use crate::cli::Args;
use crate::convert;
use crate::errors::{CurlgenError, Result};
use crate::parser;
use crate::status::ExitStatus;
use crate::typegen::{GoStructRenderer, JsonTypeRenderer, RustStructRenderer};

pub fn run(args: Args) -> ExitStatus {
    match execute(&args) {
        Ok(status) => status,
        Err(e) => {
            eprintln!("curlgen: {}", e);
            ExitStatus::Error
        }
    }
}

fn execute(args: &Args) -> Result<ExitStatus> {
    let command = read_command(args)?;
    debug!(len = command.len(), "command text loaded");

    if args.dump_parsed {
        let parsed = parser::parse_command(&command);
        write_output(args, &serde_json::to_string_pretty(&parsed)?)?;
        return Ok(ExitStatus::Success);
    }

    let output = if args.emit_struct {
        let renderer: Box<dyn JsonTypeRenderer> = match args.struct_lang.as_str() {
            "rust" => Box::new(RustStructRenderer),
            _ => Box::new(GoStructRenderer),
        };
        convert::type_declaration_with(
            &command,
            renderer.as_ref(),
            &args.root_name,
            &args.package,
            args.export_fields,
        )
    } else {
        convert::client_code_for(&command, &args.language)
    };

    write_output(args, &output)?;

    if output.starts_with("// Error") || output.starts_with("// No JSON data found") {
        Ok(ExitStatus::Error)
    } else {
        Ok(ExitStatus::Success)
    }
}

/// The command text is the joined trailing arguments, or stdin when none
/// were given.
fn read_command(args: &Args) -> Result<String> {
    if !args.command.is_empty() {
        return Ok(args.command.join(" "));
    }
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(CurlgenError::Io)?;
    Ok(buffer)
}

fn write_output(args: &Args, output: &str) -> Result<()> {
    match &args.output {
        Some(path) => {
            let mut text = output.to_string();
            if !text.ends_with('\n') {
                text.push('\n');
            }
            std::fs::write(path, text)?;
        }
        None => println!("{}", output.trim_end_matches('\n')),
    }
    Ok(())
}
