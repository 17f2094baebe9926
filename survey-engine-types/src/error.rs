use std::fmt;

use crate::{ItemKey, PageSizeClass};

/// Why a `follows` declaration could not be honored.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DependencyError {
    /// The referenced key does not exist in the definition.
    #[error("follows unknown item '{0}'")]
    UnknownKey(ItemKey),

    /// The listed items could not be ordered: they sit on a cycle of
    /// `follows` edges or wait behind one.
    #[error("circular follows between {}", join_keys(.0))]
    Cycle(Vec<ItemKey>),
}

fn join_keys(keys: &[ItemKey]) -> String {
    keys.iter().map(ItemKey::as_str).collect::<Vec<_>>().join(", ")
}

/// Error type for survey layout operations.
///
/// Definition errors must be fixed upstream; nothing here is retried or
/// recovered from inside the engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SurveyError {
    /// A `follows` entry names an unknown key, or `follows` edges form a cycle.
    #[error("Invalid dependency on item '{key}': {reason}")]
    InvalidDependency { key: ItemKey, reason: DependencyError },

    /// The same key is used by more than one item.
    #[error("Duplicate item key: {0}")]
    DuplicateKey(ItemKey),

    /// Pages were requested for a viewport class the configuration lacks.
    #[error("Unknown page size class: {0}")]
    UnknownPageSizeClass(PageSizeClass),

    /// A page size limit below 1.
    #[error("Invalid page size {size} for class '{class}': must be at least 1")]
    InvalidPageSize { class: PageSizeClass, size: usize },

    /// The survey could not be read or written as JSON.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl SurveyError {
    /// Create a serialization error from any displayable error.
    pub fn serialization(err: impl fmt::Display) -> Self {
        Self::Serialization(err.to_string())
    }

    pub fn is_invalid_dependency(&self) -> bool {
        matches!(self, Self::InvalidDependency { .. })
    }

    pub fn is_unknown_page_size_class(&self) -> bool {
        matches!(self, Self::UnknownPageSizeClass(_))
    }
}
