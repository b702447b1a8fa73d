use serde::Serialize;

use crate::code;

/// One declared error kind, as read from a table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorDefinition {
    pub code: u64,
    pub prefix: String,
    pub label: String,
    pub description: String,
    /// Table the row came from. Only used in diagnostics.
    #[serde(skip)]
    pub source: String,
}

impl ErrorDefinition {
    pub fn new(
        code: u64,
        prefix: impl Into<String>,
        label: impl Into<String>,
        description: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        ErrorDefinition {
            code,
            prefix: prefix.into(),
            label: label.into(),
            description: description.into(),
            source: source.into(),
        }
    }

    /// Name of the generated Rust type.
    pub fn type_name(&self) -> String {
        format!("{}Error", self.label)
    }

    /// `source[PREFIX-code]`, the form used when naming a definition in errors.
    pub fn citation(&self) -> String {
        format!("{}[{}-{}]", self.source, self.prefix, self.code)
    }
}

/// A definition accepted by the registry, with its serialized identity cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registered {
    pub definition: ErrorDefinition,
    pub serialized: String,
}

impl Registered {
    pub fn new(definition: ErrorDefinition) -> Self {
        let serialized = code::serialize(&definition.prefix, definition.code);
        Registered { definition, serialized }
    }
}

impl std::ops::Deref for Registered {
    type Target = ErrorDefinition;
    fn deref(&self) -> &ErrorDefinition {
        &self.definition
    }
}
