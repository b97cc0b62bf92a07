pub mod bootstrap_service;
pub use bootstrap_service::{BootstrapReport, BootstrapService};
pub mod demo_catalog;
pub mod demo_seed_service;
pub use demo_seed_service::{
    is_database_empty, seed_demo_data_on_startup, seed_demo_tenant_data, SeedOutcome, SeedReport,
};
