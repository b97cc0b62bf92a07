// src/models/tenancy.rs

use serde::{Serialize, Deserialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::auth::UserRole;

// ---
// 1. Tenant (A "Escola" / Loja)
// ---
// A conta isolada dentro da loja multi-tenant. O subdomínio é único.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    pub id: Uuid,
    pub name: String,
    pub subdomain: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

// ---
// 2. TenantUser (A "Ponte" Usuário-Tenant)
// ---
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TenantUser {
    pub tenant_id: Uuid,
    pub user_id: Uuid,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}
