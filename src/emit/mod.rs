pub mod source;
pub mod test_suite;

use std::collections::HashSet;
use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::definition::Registered;

/// Name stamped into every generated file.
pub const GENERATOR: &str = "herr";

/// Data every template renders from.
#[derive(Debug, Clone, Serialize)]
pub struct Context {
    /// Module path the primary artifact is mounted at, e.g. `errors`.
    pub package: String,
    pub timestamp: DateTime<Utc>,
    /// Definitions in canonical order.
    pub codes: Vec<CodeEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeEntry {
    pub code: u64,
    pub prefix: String,
    pub label: String,
    pub type_name: String,
    pub description: String,
    pub serialized: String,
    /// An earlier entry has the same identity; this one gets no decode arm.
    pub shadowed: bool,
}

impl Context {
    pub fn new(package: impl Into<String>, timestamp: DateTime<Utc>, ordered: &[&Registered]) -> Self {
        let mut seen = HashSet::new();
        let codes = ordered
            .iter()
            .map(|e| CodeEntry {
                code: e.code,
                prefix: e.prefix.clone(),
                label: e.label.clone(),
                type_name: e.type_name(),
                description: e.description.clone(),
                serialized: e.serialized.clone(),
                shadowed: !seen.insert(e.serialized.as_str()),
            })
            .collect();
        Context { package: package.into(), timestamp, codes }
    }

    /// Entries reachable through the generated decode function.
    pub fn decodable(&self) -> impl Iterator<Item = &CodeEntry> {
        self.codes.iter().filter(|c| !c.shadowed)
    }

    /// Timestamp as written in file headers.
    pub fn stamp(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
    }

    /// Path the test artifact imports the generated items from.
    pub fn module_path(&self) -> String {
        let first = self.package.split("::").next().unwrap_or_default();
        if matches!(first, "crate" | "super" | "self") {
            self.package.clone()
        } else {
            format!("crate::{}", self.package)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    /// The generated error types and decode function.
    Source,
    /// The companion test suite.
    Tests,
    /// The data context itself, for inspection.
    Context,
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Template::Source => write!(f, "source"),
            Template::Tests => write!(f, "tests"),
            Template::Context => write!(f, "context"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("cannot render {template} template: {message}")]
pub struct EmitError {
    pub template: Template,
    pub message: String,
}

/// Turns a named template and a data context into text.
pub trait TemplateEngine {
    fn render(&self, template: Template, context: &Context) -> Result<String, EmitError>;
}

/// Renders Rust source, and the context as pretty JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTemplates;

impl TemplateEngine for BuiltinTemplates {
    fn render(&self, template: Template, context: &Context) -> Result<String, EmitError> {
        match template {
            Template::Source => Ok(source::emit(context)),
            Template::Tests => Ok(test_suite::emit(context)),
            Template::Context => serde_json::to_string_pretty(context)
                .map(|mut json| {
                    json.push('\n');
                    json
                })
                .map_err(|e| EmitError { template, message: e.to_string() }),
        }
    }
}

/// Rendered artifacts of one run. Nothing is written until both exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    pub source: String,
    pub tests: Option<String>,
}

/// Render the primary artifact, and the test artifact when `with_tests` is set.
pub fn render(
    engine: &dyn TemplateEngine,
    context: &Context,
    with_tests: bool,
) -> Result<Artifacts, EmitError> {
    let source = engine.render(Template::Source, context)?;
    let tests = if with_tests { Some(engine.render(Template::Tests, context)?) } else { None };
    Ok(Artifacts { source, tests })
}

// ---- Shared rendering helpers ----

/// Rust string literal for `s`, quotes included.
pub(crate) fn literal(s: &str) -> String {
    format!("{s:?}")
}

/// `s` flattened onto one line, safe inside a `//` or `///` comment.
pub(crate) fn comment_text(s: &str) -> String {
    s.split(['\r', '\n']).filter(|l| !l.is_empty()).collect::<Vec<_>>().join(" ")
}

pub(crate) fn header(out: &mut String, context: &Context, what: &str) {
    out.push_str(&format!("// Code generated by {GENERATOR}; DO NOT EDIT.\n"));
    out.push_str(&format!("// This file was generated by {GENERATOR} at {}\n", context.stamp()));
    out.push_str(&format!("// {what}: {}\n", comment_text(&context.package)));
}
