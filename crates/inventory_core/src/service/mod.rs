//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Write one audit entry per successful business operation.

pub mod log_service;
pub mod material_service;
pub mod raw_material_service;
