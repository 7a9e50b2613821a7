// tests/support/helpers.rs
use std::sync::Arc;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use tricks_sitemap::application::ports::routing::UrlGenerator;
use tricks_sitemap::application::services::{SitemapDataProvider, SitemapDependencies};
use tricks_sitemap::domain::category::CategoryRepository;
use tricks_sitemap::domain::tag::TagRepository;
use tricks_sitemap::domain::trick::TrickRepository;

use super::builders::{category, draft, published, tag};
use super::mocks::{InMemoryCategoryRepo, InMemoryTagRepo, InMemoryTrickRepo, RouteTable};

/// Installs a fmt subscriber once per test binary; later calls are no-ops.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();
}

/// Repositories seeded with a small catalogue; `unlisted-trick` is a draft.
pub fn seeded_dependencies() -> SitemapDependencies {
    SitemapDependencies {
        url: Arc::new(RouteTable::default()),
        tags: Arc::new(InMemoryTagRepo::new(vec![
            tag(1, "handstand"),
            tag(2, "flip"),
        ])),
        tricks: Arc::new(InMemoryTrickRepo::new(vec![
            published(1, "back-flip"),
            draft(2, "unlisted-trick"),
            published(3, "cartwheel"),
        ])),
        categories: Arc::new(InMemoryCategoryRepo::new(vec![
            category(1, "acrobatics"),
            category(2, "balance"),
        ])),
    }
}

pub fn seeded_provider() -> SitemapDataProvider {
    init_tracing();
    SitemapDataProvider::new(seeded_dependencies())
}

pub fn provider_with(
    url: Arc<dyn UrlGenerator>,
    tags: Arc<dyn TagRepository>,
    tricks: Arc<dyn TrickRepository>,
    categories: Arc<dyn CategoryRepository>,
) -> SitemapDataProvider {
    init_tracing();
    SitemapDataProvider::new(SitemapDependencies {
        url,
        tags,
        tricks,
        categories,
    })
}
