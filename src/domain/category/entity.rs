use crate::domain::Slug;
use crate::domain::errors::{DomainError, DomainResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CategoryId(pub i64);

impl CategoryId {
    /// # Errors
    ///
    /// Returns [`DomainError::Validation`] for non-positive ids.
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("category id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<CategoryId> for i64 {
    fn from(value: CategoryId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub slug: Slug,
}

impl Category {
    #[must_use]
    pub fn new(id: CategoryId, name: impl Into<String>, slug: Slug) -> Self {
        Self {
            id,
            name: name.into(),
            slug,
        }
    }
}
