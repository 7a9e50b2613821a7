use crate::application::error::{ApplicationError, ApplicationResult};
use serde::Serialize;
use std::{borrow::Cow, fmt};

/// Sitemap `changefreq` hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Daily,
    Weekly,
    Monthly,
}

impl ChangeFrequency {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

impl fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sitemap `priority` hint, kept as the decimal literal the renderer emits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Priority(Cow<'static, str>);

impl Priority {
    /// # Errors
    ///
    /// Returns [`ApplicationError::Validation`] unless the value parses as a
    /// decimal between `0.0` and `1.0` inclusive.
    pub fn new(value: impl Into<String>) -> ApplicationResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        match trimmed.parse::<f32>() {
            Ok(parsed) if (0.0..=1.0).contains(&parsed) => {
                Ok(Self(Cow::Owned(trimmed.to_owned())))
            }
            _ => Err(ApplicationError::validation(format!(
                "priority must be a decimal between 0.0 and 1.0, got {value:?}"
            ))),
        }
    }

    /// Unchecked; for literals in const tables, which are covered by tests.
    pub(crate) const fn from_static(value: &'static str) -> Self {
        Self(Cow::Borrowed(value))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaticPage {
    pub url: String,
    pub freq: ChangeFrequency,
    pub priority: Priority,
}
