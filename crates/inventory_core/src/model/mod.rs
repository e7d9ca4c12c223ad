//! Domain model for the material inventory.
//!
//! # Responsibility
//! - Define the flat records persisted by the repository layer.
//! - Define the inbound request DTO used by the material service.
//!
//! # Invariants
//! - Every material and raw material is identified by a stable string id.
//! - Join rows carry no state beyond their composite key.

pub mod audit;
pub mod material;
pub mod material_raw_material;
pub mod raw_material;
