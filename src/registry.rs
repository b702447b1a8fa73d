use std::collections::HashMap;

use crate::definition::{ErrorDefinition, Registered};

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("duplicate error found: {} {} (both serialize to {identity})", .first.citation(), .second.citation())]
    DuplicateIdentity {
        identity: String,
        first: Box<ErrorDefinition>,
        second: Box<ErrorDefinition>,
    },
    #[error("duplicate label '{label}': {} {}", .first.citation(), .second.citation())]
    DuplicateLabel {
        label: String,
        first: Box<ErrorDefinition>,
        second: Box<ErrorDefinition>,
    },
}

impl RegistryError {
    /// The two colliding definitions, earlier one first.
    pub fn definitions(&self) -> (&ErrorDefinition, &ErrorDefinition) {
        match self {
            RegistryError::DuplicateIdentity { first, second, .. }
            | RegistryError::DuplicateLabel { first, second, .. } => (&**first, &**second),
        }
    }
}

/// Aggregates definitions from every table, in the order they are supplied.
#[derive(Debug, Default)]
pub struct Registry {
    validate: bool,
    entries: Vec<Registered>,
    identities: HashMap<String, usize>,
    labels: HashMap<String, usize>,
}

impl Registry {
    /// With `validate` off, duplicate identities and labels are kept as-is.
    pub fn new(validate: bool) -> Self {
        Registry { validate, ..Default::default() }
    }

    pub fn register(&mut self, definition: ErrorDefinition) -> Result<(), RegistryError> {
        let entry = Registered::new(definition);
        let same_identity = self.identities.get(&entry.serialized).copied();
        let same_label = self.labels.get(&entry.label).copied();

        if self.validate {
            if let Some(prev) = same_identity {
                return Err(RegistryError::DuplicateIdentity {
                    identity: entry.serialized.clone(),
                    first: Box::new(self.entries[prev].definition.clone()),
                    second: Box::new(entry.definition),
                });
            }
            if let Some(prev) = same_label {
                return Err(RegistryError::DuplicateLabel {
                    label: entry.label.clone(),
                    first: Box::new(self.entries[prev].definition.clone()),
                    second: Box::new(entry.definition),
                });
            }
        }

        let index = self.entries.len();
        match same_identity {
            Some(prev) => log::warn!(
                "{} duplicates {} ({}); keeping both",
                entry.citation(),
                self.entries[prev].citation(),
                entry.serialized
            ),
            None => {
                self.identities.insert(entry.serialized.clone(), index);
            }
        }
        match same_label {
            Some(prev) => log::warn!(
                "{} reuses label '{}' from {}",
                entry.citation(),
                entry.label,
                self.entries[prev].citation()
            ),
            None => {
                self.labels.insert(entry.label.clone(), index);
            }
        }

        log::trace!("registered {} as {}", entry.citation(), entry.serialized);
        self.entries.push(entry);
        Ok(())
    }

    /// Register one table's definitions, stopping at the first collision.
    pub fn register_table(
        &mut self,
        definitions: impl IntoIterator<Item = ErrorDefinition>,
    ) -> Result<(), RegistryError> {
        for definition in definitions {
            self.register(definition)?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Registered] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<Registered> {
        self.entries
    }
}

/// Aggregate several tables into one validated list, tables concatenated in order.
pub fn register(
    tables: impl IntoIterator<Item = Vec<ErrorDefinition>>,
    validate: bool,
) -> Result<Vec<Registered>, RegistryError> {
    let mut registry = Registry::new(validate);
    for table in tables {
        registry.register_table(table)?;
    }
    Ok(registry.into_entries())
}
