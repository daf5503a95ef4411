//! Dependency extraction from parsed files.
//!
//! Matchers (`script`, `template`) recognize single nodes; the walkers in
//! `walker` drive a pre-order traversal and decide how each discovery is
//! recorded into [`Dependencies`].

pub mod script;
pub mod template;
pub mod walker;


use handlebars::template::Template;
use swc_ecma_ast::Program as ScriptProgram;
use swc_ecma_visit::VisitWith;

pub use walker::{ScriptWalker, TemplateWalker};

use crate::core::dependencies::Dependencies;

/// Walk a parsed script and record what it references.
pub fn extract_script(program: &ScriptProgram, deps: &mut Dependencies) {
    program.visit_with(&mut ScriptWalker::new(deps));
}

/// Walk a parsed template and record what it references.
pub fn extract_template(template: &Template, deps: &mut Dependencies) {
    TemplateWalker::new(deps).walk_template(template);
}
