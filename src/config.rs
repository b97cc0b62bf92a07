// src/config.rs

use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, SqlitePool};
use std::{env, str::FromStr, time::Duration};

use crate::common::error::AppError;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://app.db?mode=rwc";
pub const DEFAULT_DEMO_TENANT_NAME: &str = "Demo School";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Parâmetros que controlam o seed de dados demo.
#[derive(Debug, Clone)]
pub struct SeedSettings {
    /// `SEED_DEMO_DATA` (padrão: ligado)
    pub enabled: bool,
    pub demo_tenant_name: String,
    pub admin_password: String,
}

impl Default for SeedSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            demo_tenant_name: DEFAULT_DEMO_TENANT_NAME.to_string(),
            admin_password: DEFAULT_ADMIN_PASSWORD.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub seed: SeedSettings,
}

impl Config {
    /// Carrega o `.env` (se existir) e lê as variáveis de ambiente.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    // Separado do `from_env` para os testes não precisarem mexer no ambiente do processo.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let enabled = lookup("SEED_DEMO_DATA")
            .map(|value| parse_flag(&value))
            .unwrap_or(true);

        let demo_tenant_name = lookup("DEMO_TENANT_NAME")
            .unwrap_or_else(|| DEFAULT_DEMO_TENANT_NAME.to_string());

        let admin_password = lookup("ADMIN_PASSWORD")
            .unwrap_or_else(|| DEFAULT_ADMIN_PASSWORD.to_string());

        Self {
            database_url,
            seed: SeedSettings { enabled, demo_tenant_name, admin_password },
        }
    }
}

/// Só "true" (sem diferenciar maiúsculas) liga a flag. Qualquer outro valor desliga.
pub fn parse_flag(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}

// O estado compartilhado da inicialização
#[derive(Clone)]
pub struct AppState {
    pub db_pool: SqlitePool,
    pub config: Config,
}

impl AppState {
    pub async fn new(config: Config) -> Result<Self, AppError> {
        let options = SqliteConnectOptions::from_str(&config.database_url)
            .map_err(|e| AppError::ConfigError(format!("DATABASE_URL inválida: {}", e)))?
            .foreign_keys(true);

        // Conecta ao banco de dados, usando '?' para propagar erros
        let db_pool = SqlitePoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect_with(options)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        Ok(Self { db_pool, config })
    }
}
