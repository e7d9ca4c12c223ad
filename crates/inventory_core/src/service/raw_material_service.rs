//! Raw material use-case service and lookup contract.

use crate::model::audit::LogType;
use crate::model::raw_material::RawMaterial;
use crate::repo::raw_material_repo::RawMaterialRepository;
use crate::repo::RepoResult;
use crate::service::log_service::AuditLog;
use log::debug;

/// Resolves a raw-material id to its record.
pub trait RawMaterialResolver {
    fn get_raw_material_by_id(&self, rawmaterialid: &str) -> RepoResult<Option<RawMaterial>>;
}

impl<T: RawMaterialResolver + ?Sized> RawMaterialResolver for &T {
    fn get_raw_material_by_id(&self, rawmaterialid: &str) -> RepoResult<Option<RawMaterial>> {
        (**self).get_raw_material_by_id(rawmaterialid)
    }
}

pub struct RawMaterialService<R: RawMaterialRepository, L: AuditLog> {
    repo: R,
    log: L,
}

impl<R: RawMaterialRepository, L: AuditLog> RawMaterialService<R, L> {
    pub fn new(repo: R, log: L) -> Self {
        Self { repo, log }
    }

    /// Upserts a raw material and returns the stored record.
    pub fn create_raw_material(&self, raw_material: &RawMaterial) -> RepoResult<RawMaterial> {
        let stored = self.repo.save(raw_material)?;
        self.log.write_log(LogType::RawMaterial, "Creating Raw Material");
        Ok(stored)
    }

    pub fn get_all_raw_materials(&self) -> RepoResult<Vec<RawMaterial>> {
        let raw_materials = self.repo.find_all()?;
        self.log.write_log(LogType::RawMaterial, "Returning all raw materials");
        Ok(raw_materials)
    }
}

impl<R: RawMaterialRepository, L: AuditLog> RawMaterialResolver for RawMaterialService<R, L> {
    // Resolution is an internal lookup for other services, so it is not audited.
    fn get_raw_material_by_id(&self, rawmaterialid: &str) -> RepoResult<Option<RawMaterial>> {
        let found = self.repo.find_by_id(rawmaterialid)?;
        debug!(
            "event=raw_material_resolve module=service status=ok rawmaterialid={rawmaterialid} found={}",
            found.is_some()
        );
        Ok(found)
    }
}
