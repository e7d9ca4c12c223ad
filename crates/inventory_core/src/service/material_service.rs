//! Material use-case service.
//!
//! # Responsibility
//! - Provide CRUD entry points for materials.
//! - Resolve a material's raw materials through join rows.
//! - Write one `Material` audit entry per successful operation.
//!
//! # Invariants
//! - Update and delete fail with `InvalidId` before any mutation or audit
//!   write when the id is unknown.
//! - Update forces the stored id to the caller's `id`, ignoring the payload id.
//! - Lookups distinguish "absent" (`Ok(None)`) from storage failures (`Err`).
//! - The service never writes join rows. Deleting a material in the SQLite
//!   store still removes its join rows through `ON DELETE CASCADE`.

use crate::model::audit::LogType;
use crate::model::material::{Material, MaterialId, MaterialRequest};
use crate::model::raw_material::RawMaterial;
use crate::repo::material_raw_material_repo::MaterialRawMaterialRepository;
use crate::repo::material_repo::MaterialRepository;
use crate::repo::RepoError;
use crate::service::log_service::AuditLog;
use crate::service::raw_material_service::RawMaterialResolver;
use log::{info, warn};
use thiserror::Error;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error for material use-cases.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// No material exists for the requested id.
    #[error("invalid id: {0}")]
    InvalidId(MaterialId),
    /// A join row points at a raw material the resolver does not know.
    #[error("material `{materialid}` links unresolvable raw material `{rawmaterialid}`")]
    UnresolvedRawMaterial {
        materialid: MaterialId,
        rawmaterialid: String,
    },
    /// Persistence-layer failure, passed through unchanged.
    #[error(transparent)]
    Repo(#[from] RepoError),
}

/// Material service composed from injected collaborators.
pub struct MaterialService<M, J, R, L>
where
    M: MaterialRepository,
    J: MaterialRawMaterialRepository,
    R: RawMaterialResolver,
    L: AuditLog,
{
    materials: M,
    links: J,
    raw_materials: R,
    log: L,
}

impl<M, J, R, L> MaterialService<M, J, R, L>
where
    M: MaterialRepository,
    J: MaterialRawMaterialRepository,
    R: RawMaterialResolver,
    L: AuditLog,
{
    pub fn new(materials: M, links: J, raw_materials: R, log: L) -> Self {
        Self {
            materials,
            links,
            raw_materials,
            log,
        }
    }

    /// Persists the material carried by `request` and returns the stored row.
    ///
    /// Duplicate ids are not checked here: saving an existing id replaces it.
    pub fn create_material(&self, request: MaterialRequest) -> ServiceResult<Material> {
        let material = request.into_material();
        let stored = self.materials.save(&material)?;
        info!(
            "event=material_create module=service status=ok materialid={}",
            stored.materialid
        );
        self.log.write_log(LogType::Material, "Creating Material");
        Ok(stored)
    }

    /// Returns every material in storage order.
    pub fn get_all_material(&self) -> ServiceResult<Vec<Material>> {
        self.list_materials("Returning all materials")
    }

    /// Gets one material by id.
    ///
    /// Returns `Ok(None)` when absent; storage failures are returned as errors.
    pub fn get_material_by_id(&self, id: &str) -> ServiceResult<Option<Material>> {
        let found = self.materials.find_by_id(id)?;
        self.log.write_log(LogType::Material, "Getting material using ID");
        Ok(found)
    }

    /// Deletes an existing material.
    pub fn delete_material(&self, id: &str) -> ServiceResult<()> {
        self.require_existing(id, "material_delete")?;
        self.materials.delete_by_id(id)?;
        info!("event=material_delete module=service status=ok materialid={id}");
        self.log.write_log(LogType::Material, "Material Deleted successfully");
        Ok(())
    }

    /// Fully replaces an existing material, keeping `id` as its key.
    pub fn update_material(&self, id: &str, request: MaterialRequest) -> ServiceResult<Material> {
        self.require_existing(id, "material_update")?;
        let material = request.into_material_with_id(id);
        let stored = self.materials.save(&material)?;
        info!("event=material_update module=service status=ok materialid={id}");
        self.log.write_log(LogType::Material, "Updating Material ID");
        Ok(stored)
    }

    /// Returns the full material inventory.
    ///
    /// Same result as [`Self::get_all_material`]; only the audit message differs.
    pub fn get_all_materials_in_inventory(&self) -> ServiceResult<Vec<Material>> {
        self.list_materials("Returning full material inventory")
    }

    /// Resolves every raw material linked to `materialid`, in join-row order.
    ///
    /// Fails with `UnresolvedRawMaterial` on the first link the resolver
    /// cannot satisfy, so a successful result always has one entry per link.
    pub fn get_all_material_raw_material(
        &self,
        materialid: &str,
    ) -> ServiceResult<Vec<RawMaterial>> {
        let links = self.links.find_by_materialid(materialid)?;
        let mut raw_materials = Vec::with_capacity(links.len());

        for link in &links {
            match self.raw_materials.get_raw_material_by_id(link.rawmaterialid())? {
                Some(raw_material) => raw_materials.push(raw_material),
                None => {
                    warn!(
                        "event=material_raw_materials module=service status=error materialid={materialid} rawmaterialid={} error_code=unresolved_raw_material",
                        link.rawmaterialid()
                    );
                    return Err(ServiceError::UnresolvedRawMaterial {
                        materialid: materialid.to_string(),
                        rawmaterialid: link.rawmaterialid().to_string(),
                    });
                }
            }
        }

        self.log.write_log(LogType::Material, "Returning all raw material in inventory");
        Ok(raw_materials)
    }

    fn list_materials(&self, audit_message: &str) -> ServiceResult<Vec<Material>> {
        let materials = self.materials.find_all()?;
        self.log.write_log(LogType::Material, audit_message);
        Ok(materials)
    }

    fn require_existing(&self, id: &str, event: &str) -> ServiceResult<()> {
        if self.materials.find_by_id(id)?.is_none() {
            warn!(
                "event={event} module=service status=error materialid={id} error_code=invalid_id"
            );
            return Err(ServiceError::InvalidId(id.to_string()));
        }
        Ok(())
    }
}
