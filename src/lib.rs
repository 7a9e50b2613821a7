//! Sitemap data for the tricks catalogue.
//!
//! [`SitemapDataProvider`](application::services::SitemapDataProvider) gathers
//! tags, tricks, categories and the fixed static pages and maps each to a URL
//! through a [`UrlGenerator`](application::ports::routing::UrlGenerator).
//! Persistence, routing and XML rendering are supplied by the caller.

pub mod application;
pub mod domain;
