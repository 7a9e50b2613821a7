// src/application/services/mod.rs
pub mod sitemap;

pub use sitemap::{STATIC_PAGES, SitemapDataProvider, SitemapDependencies, StaticPageDefinition};
