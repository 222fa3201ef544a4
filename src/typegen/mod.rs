//! Type declaration generation from JSON payloads
//!
//! The conversion core only depends on the [`JsonTypeRenderer`] boundary,
//! so it can be tested with a stub. Two real renderers are provided:
//!
//! - [`GoStructRenderer`] - Go struct declarations with `json:` tags
//! - [`RustStructRenderer`] - serde-derive Rust structs
//!
//! Both share the inference engine in [`infer`], which unifies the shapes
//! of arbitrary JSON values (nested objects, heterogeneous arrays,
//! missing/null fields) into a nominal schema.

pub mod gostruct;
pub mod infer;
pub mod ruststruct;

pub use gostruct::GoStructRenderer;
pub use ruststruct::RustStructRenderer;

/// Pluggable JSON-to-type-declaration generator.
///
/// Takes the JSON text, the name for the root type, a package or namespace
/// name for the preamble, and whether fields should use exported-style
/// naming. Returns the rendered declarations, or an error descriptor that
/// the caller surfaces as an error comment.
pub trait JsonTypeRenderer {
    fn render(
        &self,
        json: &str,
        root_name: &str,
        package: &str,
        export_fields: bool,
    ) -> Result<String, String>;
}
