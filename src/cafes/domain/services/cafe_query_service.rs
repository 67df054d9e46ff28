use async_trait::async_trait;

use crate::cafes::domain::model::{
    entities::cafe::Cafe, enums::cafe_domain_error::CafeDomainError,
    queries::search_cafes_by_location_query::SearchCafesByLocationQuery,
};

#[async_trait]
pub trait CafeQueryService: Send + Sync {
    async fn handle_list_all(&self) -> Result<Vec<Cafe>, CafeDomainError>;

    /// Fails with `EmptyTable` when there is nothing to choose from.
    async fn handle_random(&self) -> Result<Cafe, CafeDomainError>;

    /// Fails with `NoLocationMatch` when nothing matches.
    async fn handle_search_by_location(
        &self,
        query: SearchCafesByLocationQuery,
    ) -> Result<Vec<Cafe>, CafeDomainError>;
}
