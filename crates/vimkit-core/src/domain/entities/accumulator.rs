use indexmap::IndexSet;

use crate::domain::{entities::snippet::ExtensionSet, error::DomainError};

/// Ordered, duplicate-free coc.nvim extension names collected during one
/// generation pass.
///
/// Insertion order is preserved so the rendered list is stable. Once the
/// completion block has been rendered the accumulator is sealed and any
/// further `add` is rejected.
#[derive(Debug, Clone, Default)]
pub struct ExtensionAccumulator {
    names: IndexSet<String>,
    sealed: bool,
}

impl ExtensionAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one extension. Returns `true` when the name was new.
    pub fn add(&mut self, name: &str) -> Result<bool, DomainError> {
        if self.sealed {
            return Err(DomainError::AccumulatorSealed {
                extension: name.to_string(),
            });
        }
        Ok(self.names.insert(name.to_string()))
    }

    /// Add every name of an extension set, in order.
    pub fn add_set(&mut self, set: &ExtensionSet) -> Result<usize, DomainError> {
        let mut added = 0;
        for name in set.names() {
            if self.add(name)? {
                added += 1;
            }
        }
        Ok(added)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Render as a vim list body (`'a', 'b'`) and seal.
    pub fn render_and_seal(&mut self) -> String {
        self.sealed = true;
        self.names
            .iter()
            .map(|name| format!("'{name}'"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
