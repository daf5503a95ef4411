//! Parsers for the two supported file kinds.
//!
//! - `script`: JavaScript/TypeScript source (uses swc for AST generation)
//! - `template`: Handlebars templates (uses the `handlebars` crate's template compiler)

pub mod script;
pub mod template;

pub use script::parse_script_source;
pub use template::parse_template_source;
