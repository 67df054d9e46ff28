use async_trait::async_trait;

use crate::cafes::domain::model::{
    commands::create_cafe_command::CreateCafeCommand, entities::cafe::Cafe,
    enums::cafe_domain_error::CafeDomainError, value_objects::cafe_id::CafeId,
};

#[async_trait]
pub trait CafeRepository: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Cafe>, CafeDomainError>;

    /// Case-insensitive substring match on `location`.
    async fn search_by_location(&self, location: &str) -> Result<Vec<Cafe>, CafeDomainError>;

    async fn create(&self, command: &CreateCafeCommand) -> Result<Cafe, CafeDomainError>;

    async fn update_price(
        &self,
        cafe_id: CafeId,
        new_price: Option<&str>,
    ) -> Result<Cafe, CafeDomainError>;

    async fn delete(&self, cafe_id: CafeId) -> Result<(), CafeDomainError>;
}
