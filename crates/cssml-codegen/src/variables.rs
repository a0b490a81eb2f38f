//! Custom-property collection and `var(--name)` substitution.
//!
//! The table is a per-conversion resolution context: one document's
//! variables never leak into the next conversion.

use cssml_parser::ast::{Declaration, Stylesheet};
use std::collections::HashMap;

/// Property names starting with this prefix declare a variable.
pub const CUSTOM_PROPERTY_PREFIX: &str = "--";

/// Values starting with this prefix are candidate variable references.
pub const REFERENCE_PREFIX: &str = "var(--";

/// Flat table of `var(--name)` references to their declared values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Variables {
    table: HashMap<String, String>,
}

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect every custom property in the style sheet, at any depth.
    /// There is no scoping: a later declaration replaces an earlier one.
    pub fn collect(sheet: &Stylesheet) -> Self {
        let mut vars = Self::new();
        sheet.walk_declarations(&mut |decl: &Declaration| {
            if decl.property.starts_with(CUSTOM_PROPERTY_PREFIX) {
                vars.define(&decl.property, &decl.value);
            }
        });
        log::debug!("collected {} custom properties", vars.len());
        vars
    }

    /// Define `name` (including its `--` prefix) as `value`.
    pub fn define(&mut self, name: &str, value: &str) {
        let reference = format!("var({name})");
        if let Some(previous) = self.table.insert(reference, value.to_string()) {
            log::debug!("custom property {name} redefined: {previous} -> {value}");
        }
    }

    /// Look up a wrapped reference such as `var(--accent)`.
    pub fn get(&self, reference: &str) -> Option<&str> {
        self.table.get(reference).map(String::as_str)
    }

    /// Substitute `raw` when it is exactly a known reference with a non-empty
    /// value. Anything else, unresolved references included, comes back as-is.
    pub fn resolve<'a>(&'a self, raw: &'a str) -> &'a str {
        if !raw.starts_with(REFERENCE_PREFIX) {
            return raw;
        }
        match self.get(raw) {
            Some(value) if !value.is_empty() => value,
            _ => raw,
        }
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
