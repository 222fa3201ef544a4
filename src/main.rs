use clap::Parser;
use tracing_subscriber::EnvFilter;

use curlgen::cli::Args;
use curlgen::core;
use curlgen::status::ExitStatus;

fn main() -> ExitStatus {
    let args = Args::parse();
    init_tracing(args.debug);
    core::run(args)
}

/// Tracing goes to stderr so generated code on stdout stays clean.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("curlgen=debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
