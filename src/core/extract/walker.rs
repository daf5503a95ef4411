//! Traversal drivers.
//!
//! Both walkers visit every node pre-order, run the matchers for that node
//! kind before descending, and write results into a borrowed
//! [`Dependencies`].

use handlebars::template::{HelperTemplate, Template, TemplateElement};
use swc_ecma_ast::{CallExpr, ClassMethod, ClassProp, Prop};
use swc_ecma_visit::{Visit, VisitWith};

use super::{script, template};
use crate::core::dependencies::{Dependencies, Namespace};

pub struct ScriptWalker<'a> {
    deps: &'a mut Dependencies,
}

impl<'a> ScriptWalker<'a> {
    pub fn new(deps: &'a mut Dependencies) -> Self {
        Self { deps }
    }

    fn record_needs(&mut self, names: Vec<String>) {
        for name in names {
            self.deps.record_first(Namespace::Controller, &name);
        }
    }

    fn record_outlet(&mut self, outlet: script::Outlet) {
        for controller in &outlet.controllers {
            self.deps.record(Namespace::Controller, controller);
        }
        for template in &outlet.templates {
            self.deps.record(Namespace::Template, template);
        }
    }
}

impl Visit for ScriptWalker<'_> {
    fn visit_call_expr(&mut self, node: &CallExpr) {
        if let Some(name) = script::controller_for(node) {
            let full = self.deps.register(Namespace::Controller, &name);
            tracing::debug!(name = %full, "controller lookup");
        }
        node.visit_children_with(self);
    }

    fn visit_prop(&mut self, node: &Prop) {
        if let Some(names) = script::needs(node) {
            self.record_needs(names);
        }
        if let Some(outlet) = script::render_outlet(node) {
            self.record_outlet(outlet);
        }
        node.visit_children_with(self);
    }

    fn visit_class_prop(&mut self, node: &ClassProp) {
        if let Some(names) = script::class_needs(node) {
            self.record_needs(names);
        }
        node.visit_children_with(self);
    }

    fn visit_class_method(&mut self, node: &ClassMethod) {
        if let Some(outlet) = script::class_render_outlet(node) {
            self.record_outlet(outlet);
        }
        node.visit_children_with(self);
    }
}

pub struct TemplateWalker<'a> {
    deps: &'a mut Dependencies,
}

impl<'a> TemplateWalker<'a> {
    pub fn new(deps: &'a mut Dependencies) -> Self {
        Self { deps }
    }

    pub fn walk_template(&mut self, node: &Template) {
        for element in &node.elements {
            self.walk_element(element);
        }
    }

    fn walk_element(&mut self, node: &TemplateElement) {
        match node {
            TemplateElement::Expression(helper) | TemplateElement::HtmlExpression(helper) => {
                self.visit_helper(helper);
            }
            // `{{else if ...}}` chains sit in `inverse` as nested blocks.
            TemplateElement::HelperBlock(helper) => {
                self.visit_helper(helper);
                if let Some(program) = &helper.template {
                    self.walk_template(program);
                }
                if let Some(inverse) = &helper.inverse {
                    self.walk_template(inverse);
                }
            }
            TemplateElement::PartialBlock(block) | TemplateElement::DecoratorBlock(block) => {
                if let Some(program) = &block.template {
                    self.walk_template(program);
                }
            }
            _ => {}
        }
    }

    fn visit_helper(&mut self, node: &HelperTemplate) {
        if let Some(name) = template::partial(node) {
            self.deps.record(Namespace::Template, &name);
        }
        if let Some(name) = template::render(node) {
            self.deps.record(Namespace::Controller, &name);
            self.deps.record(Namespace::Template, &name);
        }
        for name in template::view(node) {
            self.deps.record(Namespace::View, &name);
            self.deps.record(Namespace::Template, &name);
        }
    }
}
