use std::sync::Arc;

use async_trait::async_trait;
use rand::seq::SliceRandom;

use crate::cafes::{
    domain::{
        model::{
            entities::cafe::Cafe, enums::cafe_domain_error::CafeDomainError,
            queries::search_cafes_by_location_query::SearchCafesByLocationQuery,
        },
        services::cafe_query_service::CafeQueryService,
    },
    infrastructure::persistence::repositories::cafe_repository::CafeRepository,
};

pub struct CafeQueryServiceImpl {
    repository: Arc<dyn CafeRepository>,
}

impl CafeQueryServiceImpl {
    pub fn new(repository: Arc<dyn CafeRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl CafeQueryService for CafeQueryServiceImpl {
    async fn handle_list_all(&self) -> Result<Vec<Cafe>, CafeDomainError> {
        self.repository.list_all().await
    }

    async fn handle_random(&self) -> Result<Cafe, CafeDomainError> {
        let cafes = self.repository.list_all().await?;

        cafes
            .choose(&mut rand::thread_rng())
            .cloned()
            .ok_or(CafeDomainError::EmptyTable)
    }

    async fn handle_search_by_location(
        &self,
        query: SearchCafesByLocationQuery,
    ) -> Result<Vec<Cafe>, CafeDomainError> {
        let cafes = self
            .repository
            .search_by_location(query.location())
            .await?;

        if cafes.is_empty() {
            return Err(CafeDomainError::NoLocationMatch);
        }

        Ok(cafes)
    }
}
