//! Raw material record owned by the raw-material store.

use crate::model::material::{require_non_blank, require_non_negative, MaterialValidationError};
use serde::{Deserialize, Serialize};

pub type RawMaterialId = String;

/// Constituent referenced by materials through join rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawMaterial {
    pub rawmaterialid: RawMaterialId,
    pub name: String,
    #[serde(default)]
    pub vendor: Option<String>,
    #[serde(default)]
    pub price: f64,
}

impl RawMaterial {
    pub fn new(
        rawmaterialid: impl Into<RawMaterialId>,
        name: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            rawmaterialid: rawmaterialid.into(),
            name: name.into(),
            vendor: None,
            price,
        }
    }

    pub fn validate(&self) -> Result<(), MaterialValidationError> {
        require_non_blank("rawmaterialid", &self.rawmaterialid)?;
        require_non_blank("name", &self.name)?;
        require_non_negative("price", self.price)
    }
}
