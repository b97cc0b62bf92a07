// src/common/error.rs

use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
// Condições "não aplicáveis" (seed desligado, banco com dados, tenant demo ausente)
// NÃO são erros: elas viram variantes de `SeedOutcome`.
#[derive(Debug, Error)]
pub enum AppError {
    // Variante para erros de banco de dados (violação de UNIQUE, conexão, etc.)
    #[error("Erro de banco de dados: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Erro ao executar migrações: {0}")]
    MigrationError(#[from] sqlx::migrate::MigrateError),

    #[error("Erro de Bcrypt: {0}")]
    BcryptError(#[from] bcrypt::BcryptError),

    #[error("Configuração inválida: {0}")]
    ConfigError(String),

    // O catálogo demo referencia uma categoria que não foi resolvida
    #[error("Categoria '{0}' não encontrada para o produto '{1}'")]
    UnknownCategory(String, String),

    #[error("Erro interno: {0}")]
    InternalError(String),
}
