use crate::domain::errors::DomainResult;
use crate::domain::tag::entity::Tag;
use async_trait::async_trait;

#[async_trait]
pub trait TagRepository: Send + Sync {
    /// Every tag that should be listed in the sitemap.
    async fn find_all(&self) -> DomainResult<Vec<Tag>>;
}
