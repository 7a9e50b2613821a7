use crate::domain::category::entity::Category;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn find_all(&self) -> DomainResult<Vec<Category>>;
}
