pub mod ansi;
pub mod json;
pub mod registry;

use crate::error::Error;
use crate::reader::ReadError;
use crate::registry::RegistryError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// A place in an input table. `row` is the 1-based record number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub table: String,
    pub row: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub severity: Severity,
    pub code: Option<&'static str>,
    pub message: String,
    pub location: Option<Location>,
    /// Offending record, as read.
    pub snippet: Option<String>,
    pub notes: Vec<String>,
    pub suggestion: Option<String>,
}

impl Diagnostic {
    pub fn error(message: impl Into<String>) -> Self {
        Diagnostic {
            severity: Severity::Error,
            code: None,
            message: message.into(),
            location: None,
            snippet: None,
            notes: Vec::new(),
            suggestion: None,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Diagnostic { severity: Severity::Warning, ..Diagnostic::error(message) }
    }

    pub fn with_code(mut self, code: &'static str) -> Self {
        self.code = Some(code);
        self
    }

    pub fn with_location(mut self, table: impl Into<String>, row: Option<usize>) -> Self {
        self.location = Some(Location { table: table.into(), row });
        self
    }

    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = Some(snippet.into());
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

// ---- From impls for generation errors ----

impl From<&Error> for Diagnostic {
    fn from(e: &Error) -> Self {
        let d = Diagnostic::error(e.to_string()).with_code(e.code());
        match e {
            Error::Read(r) => from_read(d, r),
            Error::Registry(r) => from_registry(d, r),
            Error::Config { .. } => d.with_suggestion("run `herr --help` for the accepted flags and config keys"),
            Error::Emit(_) => d,
            Error::Write { .. } => d.with_suggestion("check that the output directory exists and is writable"),
        }
    }
}

fn from_read(d: Diagnostic, e: &ReadError) -> Diagnostic {
    let d = d.with_location(e.table(), e.row());
    match e {
        ReadError::MalformedRow { content, .. } => {
            let d = d.with_suggestion("each record needs four fields: code, prefix, label, description");
            if content.is_empty() { d } else { d.with_snippet(content.clone()) }
        }
        ReadError::RowCodeMismatch { row, .. } => d
            .with_note("comment lines do not count as records")
            .with_suggestion(format!("renumber this record to {row}, or drop --match-line-numbers")),
        ReadError::InvalidLabel { label, .. } => d
            .with_snippet(label.clone())
            .with_note("the label becomes a Rust type name with `Error` appended"),
        ReadError::InvalidPrefix { prefix, .. } => d
            .with_snippet(format!("{prefix:?}"))
            .with_note("the prefix is the first part of every serialized code")
            .with_suggestion("use letters, digits, '_', '-' or '.' only"),
        ReadError::Io { .. } => d,
    }
}

fn from_registry(d: Diagnostic, e: &RegistryError) -> Diagnostic {
    let (first, second) = e.definitions();
    let d = d
        .with_location(second.source.clone(), None)
        .with_note(format!("first defined in {}", first.citation()))
        .with_note(format!("redefined in {}", second.citation()));
    match e {
        RegistryError::DuplicateIdentity { identity, .. } => d
            .with_note(format!("both serialize to {identity}"))
            .with_suggestion("give one of them a different code or prefix, or pass --skip-validate"),
        RegistryError::DuplicateLabel { .. } => d.with_suggestion("rename one of the labels"),
    }
}
