//! Material repository contract and SQLite implementation.
//!
//! # Invariants
//! - `save` is an upsert keyed by `materialid` and returns the stored row.
//! - `find_all` returns rows in insertion order; upserts keep their slot.

use crate::model::material::{Material, MaterialValidationError};
use crate::repo::{RepoError, RepoResult};
use rusqlite::{params, Connection, OptionalExtension, Row};

const MATERIAL_SELECT_SQL: &str = "SELECT
    materialid,
    name,
    description,
    price,
    density
FROM materials";

/// Key-indexed persistence for materials.
pub trait MaterialRepository {
    /// Inserts or fully replaces the material with the same id.
    fn save(&self, material: &Material) -> RepoResult<Material>;
    fn find_by_id(&self, materialid: &str) -> RepoResult<Option<Material>>;
    fn find_all(&self) -> RepoResult<Vec<Material>>;
    /// Deletes the material if present. Absent ids are a no-op.
    fn delete_by_id(&self, materialid: &str) -> RepoResult<()>;
}

impl<T: MaterialRepository + ?Sized> MaterialRepository for &T {
    fn save(&self, material: &Material) -> RepoResult<Material> {
        (**self).save(material)
    }

    fn find_by_id(&self, materialid: &str) -> RepoResult<Option<Material>> {
        (**self).find_by_id(materialid)
    }

    fn find_all(&self) -> RepoResult<Vec<Material>> {
        (**self).find_all()
    }

    fn delete_by_id(&self, materialid: &str) -> RepoResult<()> {
        (**self).delete_by_id(materialid)
    }
}

/// SQLite-backed material repository.
pub struct SqliteMaterialRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteMaterialRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl MaterialRepository for SqliteMaterialRepository<'_> {
    fn save(&self, material: &Material) -> RepoResult<Material> {
        material.validate()?;

        self.conn.execute(
            "INSERT INTO materials (
                materialid,
                name,
                description,
                price,
                density
            ) VALUES (?1, ?2, ?3, ?4, ?5)
            ON CONFLICT(materialid) DO UPDATE SET
                name = excluded.name,
                description = excluded.description,
                price = excluded.price,
                density = excluded.density,
                updated_at = CAST((julianday('now') - 2440587.5) * 86400000 AS INTEGER);",
            params![
                material.materialid.as_str(),
                material.name.as_str(),
                material.description.as_deref(),
                material.price,
                material.density,
            ],
        )?;

        self.find_by_id(&material.materialid)?.ok_or_else(|| {
            RepoError::InvalidData(format!(
                "material `{}` missing in read-back after save",
                material.materialid
            ))
        })
    }

    fn find_by_id(&self, materialid: &str) -> RepoResult<Option<Material>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{MATERIAL_SELECT_SQL} WHERE materialid = ?1;"))?;

        let row = stmt
            .query_row([materialid], |row| Ok(parse_material_row(row)))
            .optional()?;
        row.transpose()
    }

    fn find_all(&self) -> RepoResult<Vec<Material>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{MATERIAL_SELECT_SQL} ORDER BY rowid ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut materials = Vec::new();

        while let Some(row) = rows.next()? {
            materials.push(parse_material_row(row)?);
        }

        Ok(materials)
    }

    fn delete_by_id(&self, materialid: &str) -> RepoResult<()> {
        self.conn.execute("DELETE FROM materials WHERE materialid = ?1;", [materialid])?;
        Ok(())
    }
}

fn parse_material_row(row: &Row<'_>) -> RepoResult<Material> {
    let material = Material {
        materialid: row.get("materialid")?,
        name: row.get("name")?,
        description: row.get("description")?,
        price: row.get("price")?,
        density: row.get("density")?,
    };
    material
        .validate()
        .map_err(|err| invalid_row(&material.materialid, err))?;
    Ok(material)
}

fn invalid_row(materialid: &str, err: MaterialValidationError) -> RepoError {
    RepoError::InvalidData(format!("materials row `{materialid}`: {err}"))
}
