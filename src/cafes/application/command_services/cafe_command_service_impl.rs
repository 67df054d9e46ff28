use std::sync::Arc;

use async_trait::async_trait;

use crate::cafes::{
    domain::{
        model::{
            commands::{
                create_cafe_command::CreateCafeCommand, delete_cafe_command::DeleteCafeCommand,
                update_cafe_price_command::UpdateCafePriceCommand,
            },
            entities::cafe::Cafe,
            enums::cafe_domain_error::CafeDomainError,
        },
        services::cafe_command_service::CafeCommandService,
    },
    infrastructure::persistence::repositories::cafe_repository::CafeRepository,
};

pub struct CafeCommandServiceImpl {
    repository: Arc<dyn CafeRepository>,
}

impl CafeCommandServiceImpl {
    pub fn new(repository: Arc<dyn CafeRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl CafeCommandService for CafeCommandServiceImpl {
    async fn handle_create(&self, command: CreateCafeCommand) -> Result<Cafe, CafeDomainError> {
        tracing::info!(
            name = ?command.name(),
            map_url = ?command.map_url(),
            img_url = ?command.img_url(),
            location = ?command.location(),
            has_sockets = command.has_sockets(),
            has_toilet = command.has_toilet(),
            has_wifi = command.has_wifi(),
            can_take_calls = command.can_take_calls(),
            seats = ?command.seats(),
            coffee_price = ?command.coffee_price(),
            "adding cafe"
        );

        let created = self.repository.create(&command).await?;
        tracing::info!(cafe_id = created.id().value(), "cafe added");

        Ok(created)
    }

    async fn handle_update_price(
        &self,
        command: UpdateCafePriceCommand,
    ) -> Result<Cafe, CafeDomainError> {
        let updated = self
            .repository
            .update_price(command.cafe_id(), command.new_price())
            .await?;
        tracing::info!(
            cafe_id = updated.id().value(),
            coffee_price = ?updated.coffee_price(),
            "cafe price updated"
        );

        Ok(updated)
    }

    async fn handle_delete(&self, command: DeleteCafeCommand) -> Result<(), CafeDomainError> {
        self.repository.delete(command.cafe_id()).await?;
        tracing::info!(cafe_id = command.cafe_id().value(), "cafe reported closed and deleted");

        Ok(())
    }
}
