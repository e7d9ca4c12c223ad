//! Core domain logic for the material inventory.
//! This crate owns the material CRUD contract and its audit trail.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{ConfigError, DatabaseConfig, InventoryConfig, LoggingConfig};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::audit::{AuditLogEntry, LogType};
pub use model::material::{Material, MaterialId, MaterialRequest, MaterialValidationError};
pub use model::material_raw_material::{MaterialRawMaterial, MaterialRawMaterialId};
pub use model::raw_material::{RawMaterial, RawMaterialId};
pub use repo::audit_repo::{AuditLogRepository, SqliteAuditLogRepository};
pub use repo::material_raw_material_repo::{
    MaterialRawMaterialRepository, SqliteMaterialRawMaterialRepository,
};
pub use repo::material_repo::{MaterialRepository, SqliteMaterialRepository};
pub use repo::raw_material_repo::{RawMaterialRepository, SqliteRawMaterialRepository};
pub use repo::{RepoError, RepoResult};
pub use service::log_service::{AuditLog, LogService};
pub use service::material_service::{MaterialService, ServiceError, ServiceResult};
pub use service::raw_material_service::{RawMaterialResolver, RawMaterialService};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
