//! Raw material store backing the raw-material lookup.

use crate::model::raw_material::RawMaterial;
use crate::repo::{RepoError, RepoResult};
use rusqlite::{params, Connection, OptionalExtension, Row};

const RAW_MATERIAL_SELECT_SQL: &str = "SELECT
    rawmaterialid,
    name,
    vendor,
    price
FROM raw_materials";

/// Key-indexed persistence for raw materials.
pub trait RawMaterialRepository {
    fn save(&self, raw_material: &RawMaterial) -> RepoResult<RawMaterial>;
    fn find_by_id(&self, rawmaterialid: &str) -> RepoResult<Option<RawMaterial>>;
    fn find_all(&self) -> RepoResult<Vec<RawMaterial>>;
}

pub struct SqliteRawMaterialRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteRawMaterialRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl RawMaterialRepository for SqliteRawMaterialRepository<'_> {
    fn save(&self, raw_material: &RawMaterial) -> RepoResult<RawMaterial> {
        raw_material.validate()?;

        self.conn.execute(
            "INSERT INTO raw_materials (rawmaterialid, name, vendor, price)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(rawmaterialid) DO UPDATE SET
                name = excluded.name,
                vendor = excluded.vendor,
                price = excluded.price;",
            params![
                raw_material.rawmaterialid.as_str(),
                raw_material.name.as_str(),
                raw_material.vendor.as_deref(),
                raw_material.price,
            ],
        )?;

        self.find_by_id(&raw_material.rawmaterialid)?.ok_or_else(|| {
            RepoError::InvalidData(format!(
                "raw material `{}` missing in read-back after save",
                raw_material.rawmaterialid
            ))
        })
    }

    fn find_by_id(&self, rawmaterialid: &str) -> RepoResult<Option<RawMaterial>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{RAW_MATERIAL_SELECT_SQL} WHERE rawmaterialid = ?1;"))?;
        stmt.query_row([rawmaterialid], |row| Ok(parse_raw_material_row(row)))
            .optional()?
            .transpose()
    }

    fn find_all(&self) -> RepoResult<Vec<RawMaterial>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{RAW_MATERIAL_SELECT_SQL} ORDER BY rowid ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut raw_materials = Vec::new();
        while let Some(row) = rows.next()? {
            raw_materials.push(parse_raw_material_row(row)?);
        }
        Ok(raw_materials)
    }
}

fn parse_raw_material_row(row: &Row<'_>) -> RepoResult<RawMaterial> {
    let raw_material = RawMaterial {
        rawmaterialid: row.get("rawmaterialid")?,
        name: row.get("name")?,
        vendor: row.get("vendor")?,
        price: row.get("price")?,
    };
    raw_material.validate().map_err(|err| {
        RepoError::InvalidData(format!(
            "raw_materials row `{}`: {err}",
            raw_material.rawmaterialid
        ))
    })?;
    Ok(raw_material)
}
