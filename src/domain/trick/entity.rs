use crate::domain::Slug;
use crate::domain::errors::{DomainError, DomainResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TrickId(pub i64);

impl TrickId {
    /// # Errors
    ///
    /// Returns [`DomainError::Validation`] for non-positive ids.
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("trick id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<TrickId> for i64 {
    fn from(value: TrickId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trick {
    pub id: TrickId,
    pub title: String,
    pub slug: Slug,
}

impl Trick {
    #[must_use]
    pub fn new(id: TrickId, title: impl Into<String>, slug: Slug) -> Self {
        Self {
            id,
            title: title.into(),
            slug,
        }
    }
}
