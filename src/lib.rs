//! curlgen library interface
//!
//! Converts textual cURL commands into generated source code: either a
//! runnable HTTP client program, or a typed declaration inferred from the
//! JSON payload embedded in the command.
//!
//! # Module Organization
//!
//! - [`parser`] - Field extraction from cURL command text
//! - [`codegen`] - Client code renderers (Go, Python, Rust)
//! - [`extract`] - JSON payload location and validation
//! - [`typegen`] - JSON-to-type inference and the renderer boundary
//! - [`convert`] - The two string-in/string-out pipelines
//! - [`errors`] - Error types (CurlgenError, Result)
//! - [`status`] - Exit status codes (ExitStatus)
//! - [`core`] - Main execution logic
//!
//! # Example
//!
//! ```
//! use curlgen::codegen::Language;
//!
//! let code = curlgen::convert::client_code(
//!     "curl https://api.example.com/users",
//!     Language::Go,
//! );
//! assert!(code.contains("http.NewRequest(\"GET\""));
//! ```

pub mod cli;
pub mod codegen;
pub mod convert;
pub mod core;
pub mod errors;
pub mod extract;
pub mod parser;
pub mod status;
pub mod typegen;
