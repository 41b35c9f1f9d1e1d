//! Category set model
//!
//! A fixed, ordered list of category (project/cost-center) names. The set is
//! immutable for the lifetime of a run; every distribution iterates it in the
//! same order, and the balance pseudo-category is always appended after the
//! named categories.

use serde::{Deserialize, Serialize};

use crate::error::{CostsplitError, CostsplitResult};

/// An ordered, immutable set of category names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategorySet {
    names: Vec<String>,
}

impl CategorySet {
    /// Create a category set from an ordered list of names
    ///
    /// Names are trimmed. The set must be non-empty and free of duplicates.
    pub fn new(names: impl IntoIterator<Item = impl Into<String>>) -> CostsplitResult<Self> {
        let names: Vec<String> = names
            .into_iter()
            .map(|n| n.into().trim().to_string())
            .collect();

        if names.is_empty() {
            return Err(CostsplitError::Validation(
                "Category set must not be empty".into(),
            ));
        }
        if names.iter().any(|n| n.is_empty()) {
            return Err(CostsplitError::Validation(
                "Category names must not be blank".into(),
            ));
        }
        for (i, name) in names.iter().enumerate() {
            if names[..i].contains(name) {
                return Err(CostsplitError::Validation(format!(
                    "Duplicate category name: {}",
                    name
                )));
            }
        }

        Ok(Self { names })
    }

    /// Iterate category names in their fixed order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Number of categories
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the set is empty (never true for a validated set)
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Check membership by exact name
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }
}
