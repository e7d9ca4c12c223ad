//! Material record and request DTO.
//!
//! # Invariants
//! - `materialid` is non-blank and never changes once the record is stored.
//! - Updates replace every non-id field; there is no partial patch.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Stable identifier of a material.
pub type MaterialId = String;

/// Validation failures for material and raw material records.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MaterialValidationError {
    #[error("{field} cannot be blank")]
    BlankField { field: &'static str },
    #[error("{field} must be a finite, non-negative number, got {value}")]
    InvalidNumber { field: &'static str, value: f64 },
}

/// Stocked item persisted in `materials`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub materialid: MaterialId,
    pub name: String,
    pub description: Option<String>,
    /// Unit price.
    pub price: f64,
    pub density: Option<f64>,
}

impl Material {
    /// Creates a material with a caller-provided id and no optional attributes.
    pub fn new(materialid: impl Into<MaterialId>, name: impl Into<String>, price: f64) -> Self {
        Self {
            materialid: materialid.into(),
            name: name.into(),
            description: None,
            price,
            density: None,
        }
    }

    /// Checks the record before it reaches storage.
    pub fn validate(&self) -> Result<(), MaterialValidationError> {
        require_non_blank("materialid", &self.materialid)?;
        require_non_blank("name", &self.name)?;
        require_non_negative("price", self.price)?;
        if let Some(density) = self.density {
            require_non_negative("density", density)?;
        }
        Ok(())
    }
}

/// Inbound payload for create/update use-cases.
///
/// The id is optional: create assigns one when missing, update always
/// overrides it with the path id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaterialRequest {
    #[serde(default)]
    pub materialid: Option<MaterialId>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub density: Option<f64>,
}

impl MaterialRequest {
    /// Extracts the material, generating a UUID v4 id when none was supplied.
    pub fn into_material(self) -> Material {
        let materialid = match self.materialid.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => Uuid::new_v4().to_string(),
        };
        self.into_material_with_id(materialid)
    }

    /// Extracts the material with `materialid` forced to the given id.
    pub fn into_material_with_id(self, materialid: impl Into<MaterialId>) -> Material {
        Material {
            materialid: materialid.into(),
            name: self.name,
            description: self.description,
            price: self.price,
            density: self.density,
        }
    }
}

pub(crate) fn require_non_blank(
    field: &'static str,
    value: &str,
) -> Result<(), MaterialValidationError> {
    if value.trim().is_empty() {
        return Err(MaterialValidationError::BlankField { field });
    }
    Ok(())
}

pub(crate) fn require_non_negative(
    field: &'static str,
    value: f64,
) -> Result<(), MaterialValidationError> {
    if !value.is_finite() || value < 0.0 {
        return Err(MaterialValidationError::InvalidNumber { field, value });
    }
    Ok(())
}
