//! Seed idempotente de dados demo para a loja multi-tenant (SQLite).

pub mod common;
pub mod config;
pub mod db;
pub mod models;
pub mod services;
