use crate::domain::errors::DomainResult;
use crate::domain::trick::entity::Trick;
use async_trait::async_trait;

#[async_trait]
pub trait TrickRepository: Send + Sync {
    /// Tricks eligible for the sitemap.
    ///
    /// Narrower than a general listing: implementations leave out anything
    /// that must not be advertised to crawlers (drafts, unlisted tricks).
    async fn find_all_for_sitemap(&self) -> DomainResult<Vec<Trick>>;
}
