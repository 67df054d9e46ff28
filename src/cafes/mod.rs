use std::sync::Arc;

use axum::Router;
use sqlx::{migrate, postgres::PgPoolOptions};

use crate::{
    cafes::{
        application::{
            command_services::cafe_command_service_impl::CafeCommandServiceImpl,
            query_services::cafe_query_service_impl::CafeQueryServiceImpl,
        },
        infrastructure::persistence::repositories::postgres::sqlx_cafe_repository_impl::SqlxCafeRepositoryImpl,
        interfaces::rest::controllers::cafe_rest_controller::{CafeRestControllerState, router},
    },
    config::app_config::AppConfig,
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub async fn build_cafes_router(config: &AppConfig) -> Result<Router, String> {
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await
        .map_err(|e| e.to_string())?;

    migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(|e| e.to_string())?;
    tracing::info!("cafes schema is up to date");

    let repository = Arc::new(SqlxCafeRepositoryImpl::new(pool));

    let command_service = Arc::new(CafeCommandServiceImpl::new(repository.clone()));
    let query_service = Arc::new(CafeQueryServiceImpl::new(repository));

    Ok(router(CafeRestControllerState {
        command_service,
        query_service,
        secret_api_key: Arc::from(config.secret_api_key.as_str()),
    }))
}
