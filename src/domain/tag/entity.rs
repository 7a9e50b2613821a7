use crate::domain::Slug;
use crate::domain::errors::{DomainError, DomainResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TagId(pub i64);

impl TagId {
    /// # Errors
    ///
    /// Returns [`DomainError::Validation`] for non-positive ids.
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("tag id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<TagId> for i64 {
    fn from(value: TagId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id: TagId,
    pub name: String,
    pub slug: Slug,
}

impl Tag {
    #[must_use]
    pub fn new(id: TagId, name: impl Into<String>, slug: Slug) -> Self {
        Self {
            id,
            name: name.into(),
            slug,
        }
    }
}
