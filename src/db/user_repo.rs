// src/db/user_repo.rs

use chrono::Utc;
use sqlx::{Executor, Sqlite};
use uuid::Uuid;
use crate::{common::error::AppError, models::auth::{User, UserRole}};

// O repositório de usuários, responsável por todas as interações com a tabela 'users'
#[derive(Clone, Default)]
pub struct UserRepository;

impl UserRepository {
    pub fn new() -> Self {
        Self
    }

    // Busca um usuário pelo seu username
    pub async fn find_by_username<'e, E>(
        &self,
        executor: E,
        username: &str,
    ) -> Result<Option<User>, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(executor)
            .await?;
        Ok(user)
    }

    // Cria um novo usuário. O hash da senha já deve vir pronto.
    pub async fn create_user<'e, E>(
        &self,
        executor: E,
        username: &str,
        email: &str,
        password_hash: &str,
        role: UserRole,
    ) -> Result<User, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, username, email, password_hash, role, is_active, created_at)
            VALUES (?, ?, ?, ?, ?, 1, ?)
            RETURNING *
            "#,
        )
            .bind(Uuid::new_v4())
            .bind(username)
            .bind(email)
            .bind(password_hash)
            .bind(role)
            .bind(Utc::now())
            .fetch_one(executor)
            .await?;
        Ok(user)
    }
}
