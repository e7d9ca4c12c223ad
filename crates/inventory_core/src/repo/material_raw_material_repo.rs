//! Join-row repository linking materials to raw materials.
//!
//! # Invariants
//! - Lookups return rows in insertion order.
//! - `link` is idempotent for an existing composite key.

use crate::model::material::require_non_blank;
use crate::model::material_raw_material::MaterialRawMaterial;
use crate::repo::RepoResult;
use rusqlite::{params, Connection};

pub trait MaterialRawMaterialRepository {
    fn find_by_materialid(&self, materialid: &str) -> RepoResult<Vec<MaterialRawMaterial>>;
    fn link(&self, row: &MaterialRawMaterial) -> RepoResult<()>;
}

pub struct SqliteMaterialRawMaterialRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteMaterialRawMaterialRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl MaterialRawMaterialRepository for SqliteMaterialRawMaterialRepository<'_> {
    fn find_by_materialid(&self, materialid: &str) -> RepoResult<Vec<MaterialRawMaterial>> {
        let mut stmt = self.conn.prepare(
            "SELECT materialid, rawmaterialid
             FROM material_raw_materials
             WHERE materialid = ?1
             ORDER BY rowid ASC;",
        )?;
        let mut rows = stmt.query([materialid])?;
        let mut links = Vec::new();
        while let Some(row) = rows.next()? {
            links.push(MaterialRawMaterial::new(
                row.get::<_, String>("materialid")?,
                row.get::<_, String>("rawmaterialid")?,
            ));
        }
        Ok(links)
    }

    fn link(&self, row: &MaterialRawMaterial) -> RepoResult<()> {
        require_non_blank("materialid", row.materialid())?;
        require_non_blank("rawmaterialid", row.rawmaterialid())?;

        self.conn.execute(
            "INSERT OR IGNORE INTO material_raw_materials (materialid, rawmaterialid)
             VALUES (?1, ?2);",
            params![row.materialid(), row.rawmaterialid()],
        )?;
        Ok(())
    }
}
