// src/db/tenancy_repo.rs

use chrono::Utc;
use sqlx::{Executor, Sqlite};
use uuid::Uuid;
use crate::common::error::AppError;
use crate::models::{auth::UserRole, tenancy::{Tenant, TenantUser}};

#[derive(Clone, Default)]
pub struct TenantRepository;

impl TenantRepository {
    pub fn new() -> Self {
        Self
    }

    pub async fn count_all<'e, E>(&self, executor: E) -> Result<i64, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM tenants")
            .fetch_one(executor)
            .await?;
        Ok(count)
    }

    pub async fn find_by_subdomain<'e, E>(
        &self,
        executor: E,
        subdomain: &str,
    ) -> Result<Option<Tenant>, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let tenant = sqlx::query_as::<_, Tenant>("SELECT * FROM tenants WHERE subdomain = ?")
            .bind(subdomain)
            .fetch_optional(executor)
            .await?;
        Ok(tenant)
    }

    /// Cria um novo tenant na base de dados.
    pub async fn create_tenant<'e, E>(
        &self,
        executor: E, // Aceita um executor (pool ou transação)
        name: &str,
        subdomain: &str,
    ) -> Result<Tenant, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let tenant = sqlx::query_as::<_, Tenant>(
            r#"
            INSERT INTO tenants (id, name, subdomain, is_active, created_at)
            VALUES (?, ?, ?, 1, ?)
            RETURNING *
            "#,
        )
            .bind(Uuid::new_v4())
            .bind(name)
            .bind(subdomain)
            .bind(Utc::now())
            .fetch_one(executor)
            .await?;
        Ok(tenant)
    }

    pub async fn is_member<'e, E>(
        &self,
        executor: E,
        tenant_id: Uuid,
        user_id: Uuid,
    ) -> Result<bool, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        // SELECT EXISTS devolve 0/1 no SQLite
        let exists = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM tenant_users
                WHERE tenant_id = ? AND user_id = ?
            )
            "#,
        )
            .bind(tenant_id)
            .bind(user_id)
            .fetch_one(executor)
            .await?;
        Ok(exists != 0)
    }

    /// Atribui um utilizador a um tenant (na tabela-ponte).
    pub async fn assign_user_to_tenant<'e, E>(
        &self,
        executor: E,
        tenant_id: Uuid,
        user_id: Uuid,
        role: UserRole,
    ) -> Result<TenantUser, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let link = sqlx::query_as::<_, TenantUser>(
            r#"
            INSERT INTO tenant_users (tenant_id, user_id, role, created_at)
            VALUES (?, ?, ?, ?)
            RETURNING *
            "#,
        )
            .bind(tenant_id)
            .bind(user_id)
            .bind(role)
            .bind(Utc::now())
            .fetch_one(executor)
            .await?;
        Ok(link)
    }
}
