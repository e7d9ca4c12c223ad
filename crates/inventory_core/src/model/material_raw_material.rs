//! Material-to-raw-material association rows.

use crate::model::material::MaterialId;
use crate::model::raw_material::RawMaterialId;
use serde::{Deserialize, Serialize};

/// Composite key of one association.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MaterialRawMaterialId {
    pub materialid: MaterialId,
    pub rawmaterialid: RawMaterialId,
}

/// "This material consumes this raw material."
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MaterialRawMaterial {
    pub id: MaterialRawMaterialId,
}

impl MaterialRawMaterial {
    pub fn new(
        materialid: impl Into<MaterialId>,
        rawmaterialid: impl Into<RawMaterialId>,
    ) -> Self {
        Self {
            id: MaterialRawMaterialId {
                materialid: materialid.into(),
                rawmaterialid: rawmaterialid.into(),
            },
        }
    }

    pub fn materialid(&self) -> &str {
        &self.id.materialid
    }

    pub fn rawmaterialid(&self) -> &str {
        &self.id.rawmaterialid
    }
}
