use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Row, Transaction, error::ErrorKind};

use crate::cafes::{
    domain::model::{
        commands::create_cafe_command::CreateCafeCommand,
        entities::cafe::{Cafe, CafeParts},
        enums::cafe_domain_error::CafeDomainError,
        value_objects::cafe_id::CafeId,
    },
    infrastructure::persistence::repositories::cafe_repository::CafeRepository,
};

const CAFE_COLUMNS: &str = "id, name, map_url, img_url, location, seats, has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price";

pub struct SqlxCafeRepositoryImpl {
    pool: PgPool,
}

impl SqlxCafeRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_entity(row: sqlx::postgres::PgRow) -> Result<Cafe, CafeDomainError> {
        let id: i32 = row.try_get("id").map_err(map_infra_error)?;

        Ok(Cafe::restore(CafeParts {
            id: CafeId::from_stored(id).map_err(|_| {
                CafeDomainError::InfrastructureError("invalid cafe id stored".to_string())
            })?,
            name: row.try_get("name").map_err(map_infra_error)?,
            map_url: row.try_get("map_url").map_err(map_infra_error)?,
            img_url: row.try_get("img_url").map_err(map_infra_error)?,
            location: row.try_get("location").map_err(map_infra_error)?,
            seats: row.try_get("seats").map_err(map_infra_error)?,
            has_toilet: row.try_get("has_toilet").map_err(map_infra_error)?,
            has_wifi: row.try_get("has_wifi").map_err(map_infra_error)?,
            has_sockets: row.try_get("has_sockets").map_err(map_infra_error)?,
            can_take_calls: row.try_get("can_take_calls").map_err(map_infra_error)?,
            coffee_price: row.try_get("coffee_price").map_err(map_infra_error)?,
        }))
    }

    async fn begin(&self) -> Result<Transaction<'static, Postgres>, CafeDomainError> {
        self.pool.begin().await.map_err(map_infra_error)
    }
}

#[async_trait]
impl CafeRepository for SqlxCafeRepositoryImpl {
    async fn list_all(&self) -> Result<Vec<Cafe>, CafeDomainError> {
        let statement = format!("SELECT {CAFE_COLUMNS} FROM cafes ORDER BY id");

        let rows = sqlx::query(&statement)
            .fetch_all(&self.pool)
            .await
            .map_err(map_infra_error)?;

        rows.into_iter().map(Self::row_to_entity).collect()
    }

    async fn search_by_location(&self, location: &str) -> Result<Vec<Cafe>, CafeDomainError> {
        let statement = format!(
            r#"
            SELECT {CAFE_COLUMNS}
            FROM cafes
            WHERE location ILIKE '%' || $1 || '%' ESCAPE '\'
            ORDER BY id
            "#
        );

        let rows = sqlx::query(&statement)
            .bind(escape_like_pattern(location))
            .fetch_all(&self.pool)
            .await
            .map_err(map_infra_error)?;

        rows.into_iter().map(Self::row_to_entity).collect()
    }

    async fn create(&self, command: &CreateCafeCommand) -> Result<Cafe, CafeDomainError> {
        let statement = format!(
            r#"
            INSERT INTO cafes (
                name, map_url, img_url, location, seats,
                has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {CAFE_COLUMNS}
            "#
        );

        let mut transaction = self.begin().await?;

        let inserted = sqlx::query(&statement)
            .bind(command.name())
            .bind(command.map_url())
            .bind(command.img_url())
            .bind(command.location())
            .bind(command.seats())
            .bind(command.has_toilet())
            .bind(command.has_wifi())
            .bind(command.has_sockets())
            .bind(command.can_take_calls())
            .bind(command.coffee_price())
            .fetch_one(&mut *transaction)
            .await;

        match inserted {
            Ok(row) => {
                transaction.commit().await.map_err(map_write_error)?;
                Self::row_to_entity(row)
            }
            Err(error) => {
                rollback(transaction).await;
                Err(map_write_error(error))
            }
        }
    }

    async fn update_price(
        &self,
        cafe_id: CafeId,
        new_price: Option<&str>,
    ) -> Result<Cafe, CafeDomainError> {
        let statement = format!(
            r#"
            UPDATE cafes
            SET coffee_price = $2
            WHERE id = $1
            RETURNING {CAFE_COLUMNS}
            "#
        );

        let mut transaction = self.begin().await?;

        let updated = sqlx::query(&statement)
            .bind(cafe_id.value())
            .bind(new_price)
            .fetch_optional(&mut *transaction)
            .await;

        match updated {
            Ok(Some(row)) => {
                transaction.commit().await.map_err(map_write_error)?;
                Self::row_to_entity(row)
            }
            Ok(None) => {
                rollback(transaction).await;
                Err(CafeDomainError::NotFound)
            }
            Err(error) => {
                rollback(transaction).await;
                Err(map_write_error(error))
            }
        }
    }

    async fn delete(&self, cafe_id: CafeId) -> Result<(), CafeDomainError> {
        let statement = r#"
            DELETE FROM cafes
            WHERE id = $1
            RETURNING id
        "#;

        let mut transaction = self.begin().await?;

        let deleted = sqlx::query(statement)
            .bind(cafe_id.value())
            .fetch_optional(&mut *transaction)
            .await;

        match deleted {
            Ok(Some(_)) => transaction.commit().await.map_err(map_write_error),
            Ok(None) => {
                rollback(transaction).await;
                Err(CafeDomainError::NotFound)
            }
            Err(error) => {
                rollback(transaction).await;
                Err(map_write_error(error))
            }
        }
    }
}

async fn rollback(transaction: Transaction<'static, Postgres>) {
    if let Err(error) = transaction.rollback().await {
        tracing::error!(%error, "failed to roll back cafe transaction");
    }
}

/// Escapes LIKE metacharacters so the caller's text is matched literally.
pub fn escape_like_pattern(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for character in value.chars() {
        if matches!(character, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(character);
    }
    escaped
}

fn map_write_error(error: sqlx::Error) -> CafeDomainError {
    if let sqlx::Error::Database(database_error) = &error {
        match database_error.kind() {
            ErrorKind::UniqueViolation => return CafeDomainError::DuplicateName,
            ErrorKind::NotNullViolation => return CafeDomainError::MissingRequiredField,
            _ => {}
        }
    }
    map_infra_error(error)
}

fn map_infra_error(error: sqlx::Error) -> CafeDomainError {
    CafeDomainError::InfrastructureError(error.to_string())
}
