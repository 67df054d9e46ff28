use async_trait::async_trait;

use crate::cafes::domain::model::{
    commands::{
        create_cafe_command::CreateCafeCommand, delete_cafe_command::DeleteCafeCommand,
        update_cafe_price_command::UpdateCafePriceCommand,
    },
    entities::cafe::Cafe,
    enums::cafe_domain_error::CafeDomainError,
};

#[async_trait]
pub trait CafeCommandService: Send + Sync {
    async fn handle_create(&self, command: CreateCafeCommand) -> Result<Cafe, CafeDomainError>;

    async fn handle_update_price(
        &self,
        command: UpdateCafePriceCommand,
    ) -> Result<Cafe, CafeDomainError>;

    async fn handle_delete(&self, command: DeleteCafeCommand) -> Result<(), CafeDomainError>;
}
