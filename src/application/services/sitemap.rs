// src/application/services/sitemap.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{ChangeFrequency, Priority, StaticPage},
        error::ApplicationResult,
        ports::routing::UrlGenerator,
    },
    domain::{
        Slug,
        category::{Category, CategoryRepository},
        tag::{Tag, TagRepository},
        trick::{Trick, TrickRepository},
    },
};

/// Route names the provider resolves through the [`UrlGenerator`].
pub mod routes {
    pub const TAG: &str = "tricks.browse.tag";
    pub const TRICK: &str = "tricks.show";
    pub const CATEGORY: &str = "tricks.browse.category";

    pub const BROWSE_RECENT: &str = "browse.recent";
    pub const ABOUT: &str = "about";
    pub const BROWSE_CATEGORIES: &str = "browse.categories";
    pub const BROWSE_TAGS: &str = "browse.tags";
    pub const LOGIN: &str = "auth.login";
    pub const REGISTER: &str = "auth.register";
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticPageDefinition {
    pub route: &'static str,
    pub freq: ChangeFrequency,
    pub priority: Priority,
}

const fn page(
    route: &'static str,
    freq: ChangeFrequency,
    priority: &'static str,
) -> StaticPageDefinition {
    StaticPageDefinition {
        route,
        freq,
        priority: Priority::from_static(priority),
    }
}

/// Static pages in output order. Renderers depend on the order staying stable.
pub const STATIC_PAGES: &[StaticPageDefinition] = &[
    page(routes::BROWSE_RECENT, ChangeFrequency::Daily, "1.0"),
    page(routes::ABOUT, ChangeFrequency::Monthly, "0.7"),
    page(routes::BROWSE_CATEGORIES, ChangeFrequency::Monthly, "0.7"),
    page(routes::BROWSE_TAGS, ChangeFrequency::Monthly, "0.7"),
    page(routes::LOGIN, ChangeFrequency::Weekly, "0.8"),
    page(routes::REGISTER, ChangeFrequency::Weekly, "0.8"),
];

/// Collaborators wired into a [`SitemapDataProvider`].
#[derive(Clone)]
pub struct SitemapDependencies {
    pub url: Arc<dyn UrlGenerator>,
    pub tags: Arc<dyn TagRepository>,
    pub tricks: Arc<dyn TrickRepository>,
    pub categories: Arc<dyn CategoryRepository>,
}

/// Supplies the entities and URLs a sitemap renderer needs.
///
/// Read-only. Errors from the repositories and the URL generator are handed
/// back untouched; nothing is retried and no partial results are returned.
pub struct SitemapDataProvider {
    url: Arc<dyn UrlGenerator>,
    tags: Arc<dyn TagRepository>,
    tricks: Arc<dyn TrickRepository>,
    categories: Arc<dyn CategoryRepository>,
}

impl SitemapDataProvider {
    #[must_use]
    pub fn new(deps: SitemapDependencies) -> Self {
        let SitemapDependencies {
            url,
            tags,
            tricks,
            categories,
        } = deps;

        Self {
            url,
            tags,
            tricks,
            categories,
        }
    }

    /// # Errors
    ///
    /// Propagates the tag repository's error.
    pub async fn tags(&self) -> ApplicationResult<Vec<Tag>> {
        let tags = self
            .tags
            .find_all()
            .await
            .inspect_err(|err| tracing::warn!(error = %err, "failed to load sitemap tags"))?;
        tracing::debug!(count = tags.len(), "loaded sitemap tags");
        Ok(tags)
    }

    /// # Errors
    ///
    /// Propagates the URL generator's error.
    pub fn tag_url(&self, tag: &Tag) -> ApplicationResult<String> {
        self.slug_url(routes::TAG, &tag.slug)
    }

    /// Only tricks the repository scopes to the sitemap; drafts and other
    /// hidden tricks never reach the caller.
    ///
    /// # Errors
    ///
    /// Propagates the trick repository's error.
    pub async fn tricks(&self) -> ApplicationResult<Vec<Trick>> {
        let tricks = self
            .tricks
            .find_all_for_sitemap()
            .await
            .inspect_err(|err| tracing::warn!(error = %err, "failed to load sitemap tricks"))?;
        tracing::debug!(count = tricks.len(), "loaded sitemap tricks");
        Ok(tricks)
    }

    /// # Errors
    ///
    /// Propagates the URL generator's error.
    pub fn trick_url(&self, trick: &Trick) -> ApplicationResult<String> {
        self.slug_url(routes::TRICK, &trick.slug)
    }

    /// # Errors
    ///
    /// Propagates the category repository's error.
    pub async fn categories(&self) -> ApplicationResult<Vec<Category>> {
        let categories = self
            .categories
            .find_all()
            .await
            .inspect_err(|err| tracing::warn!(error = %err, "failed to load sitemap categories"))?;
        tracing::debug!(count = categories.len(), "loaded sitemap categories");
        Ok(categories)
    }

    /// # Errors
    ///
    /// Propagates the URL generator's error.
    pub fn category_url(&self, category: &Category) -> ApplicationResult<String> {
        self.slug_url(routes::CATEGORY, &category.slug)
    }

    /// The six fixed pages from [`STATIC_PAGES`], resolved in order.
    ///
    /// # Errors
    ///
    /// Stops at the first route the URL generator cannot resolve and
    /// returns its error.
    pub fn static_pages(&self) -> ApplicationResult<Vec<StaticPage>> {
        STATIC_PAGES
            .iter()
            .map(|definition| self.static_page(definition))
            .collect()
    }

    fn static_page(&self, definition: &StaticPageDefinition) -> ApplicationResult<StaticPage> {
        let url = self.resolve(definition.route, &[])?;

        Ok(StaticPage {
            url,
            freq: definition.freq,
            priority: definition.priority.clone(),
        })
    }

    fn slug_url(&self, route: &str, slug: &Slug) -> ApplicationResult<String> {
        self.resolve(route, &[("slug", slug.as_str())])
    }

    fn resolve(&self, route: &str, params: &[(&str, &str)]) -> ApplicationResult<String> {
        let url = self.url.route(route, params).inspect_err(
            |err| tracing::warn!(route, error = %err, "failed to resolve sitemap route"),
        )?;
        tracing::debug!(route, url = %url, "resolved sitemap route");
        Ok(url)
    }
}
