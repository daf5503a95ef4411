//! Accumulated dependency references for a single file.
//!
//! Three namespace mappings (short name → fully-qualified name) plus one
//! append-only sequence of fully-qualified names in discovery order.
//!
//! Mapping writes are plain upserts. Whether a discovery is also appended to
//! the ordered sequence depends on the construct that produced it:
//!
//! - [`Dependencies::register`]: mapping only (`controllerFor` lookups)
//! - [`Dependencies::record_first`]: append only on first discovery (`needs`)
//! - [`Dependencies::record`]: always append (outlets and template helpers)

use std::{collections::BTreeMap, fmt};

use serde::Serialize;

/// Separator between namespace tag and short name.
pub const NAMESPACE_SEPARATOR: char = ':';

/// Category of a referenced dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Namespace {
    Controller,
    Template,
    View,
}

impl Namespace {
    pub fn as_str(self) -> &'static str {
        match self {
            Namespace::Controller => "controller",
            Namespace::Template => "template",
            Namespace::View => "view",
        }
    }

    /// Build the fully-qualified name for `short`, e.g. `controller:post`.
    pub fn qualify(self, short: &str) -> String {
        format!("{}{}{}", self.as_str(), NAMESPACE_SEPARATOR, short)
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Short name → fully-qualified name.
pub type NameMap = BTreeMap<String, String>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dependencies {
    pub controllers: NameMap,
    pub templates: NameMap,
    pub views: NameMap,
    ordered_names: Vec<String>,
}

impl Dependencies {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn names(&self, namespace: Namespace) -> &NameMap {
        match namespace {
            Namespace::Controller => &self.controllers,
            Namespace::Template => &self.templates,
            Namespace::View => &self.views,
        }
    }

    fn names_mut(&mut self, namespace: Namespace) -> &mut NameMap {
        match namespace {
            Namespace::Controller => &mut self.controllers,
            Namespace::Template => &mut self.templates,
            Namespace::View => &mut self.views,
        }
    }

    pub fn contains(&self, namespace: Namespace, short: &str) -> bool {
        self.names(namespace).contains_key(short)
    }

    /// Upsert `short` into the namespace mapping without touching the ordered
    /// sequence. Returns the fully-qualified name.
    pub fn register(&mut self, namespace: Namespace, short: &str) -> String {
        let full = namespace.qualify(short);
        self.names_mut(namespace)
            .insert(short.to_string(), full.clone());
        full
    }

    /// Upsert and append to the ordered sequence, even if already seen.
    pub fn record(&mut self, namespace: Namespace, short: &str) {
        let full = self.register(namespace, short);
        tracing::debug!(name = %full, "recorded dependency");
        self.ordered_names.push(full);
    }

    /// Upsert and append only when `short` is not yet in the mapping.
    ///
    /// Returns whether the name was newly discovered.
    pub fn record_first(&mut self, namespace: Namespace, short: &str) -> bool {
        if self.contains(namespace, short) {
            return false;
        }
        self.record(namespace, short);
        true
    }

    /// Fully-qualified names in first-reference order (duplicates possible for
    /// constructs that append unconditionally).
    pub fn ordered_names(&self) -> &[String] {
        &self.ordered_names
    }

    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
            && self.templates.is_empty()
            && self.views.is_empty()
            && self.ordered_names.is_empty()
    }
}
