// src/db/sales_repo.rs

use chrono::Utc;
use rust_decimal::{prelude::ToPrimitive, Decimal};
use sqlx::{Executor, Sqlite};
use uuid::Uuid;
use crate::{common::error::AppError, models::sales::Sale};

#[derive(Clone, Default)]
pub struct SalesRepository;

impl SalesRepository {
    pub fn new() -> Self {
        Self
    }

    pub async fn count_all<'e, E>(&self, executor: E) -> Result<i64, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM sales")
            .fetch_one(executor)
            .await?;
        Ok(count)
    }

    pub async fn create_sale<'e, E>(
        &self,
        executor: E,
        tenant_id: Uuid,
        user_id: Uuid,
        total_amount: Decimal,
    ) -> Result<Sale, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let total = total_amount
            .to_f64()
            .ok_or_else(|| AppError::InternalError(format!("total fora do intervalo: {}", total_amount)))?;

        let sale = sqlx::query_as::<_, Sale>(
            r#"
            INSERT INTO sales (id, tenant_id, user_id, total_amount, created_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
            .bind(Uuid::new_v4())
            .bind(tenant_id)
            .bind(user_id)
            .bind(total)
            .bind(Utc::now())
            .fetch_one(executor)
            .await?;
        Ok(sale)
    }
}
