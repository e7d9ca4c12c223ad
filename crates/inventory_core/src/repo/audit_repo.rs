//! Append-only audit log storage.

use crate::model::audit::{AuditLogEntry, LogType};
use crate::repo::{RepoError, RepoResult};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};

pub trait AuditLogRepository {
    fn append(&self, category: LogType, message: &str) -> RepoResult<()>;
    /// Lists entries in append order, optionally restricted to one category.
    fn list(&self, category: Option<LogType>) -> RepoResult<Vec<AuditLogEntry>>;
}

pub struct SqliteAuditLogRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteAuditLogRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl AuditLogRepository for SqliteAuditLogRepository<'_> {
    fn append(&self, category: LogType, message: &str) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO audit_logs (category, message) VALUES (?1, ?2);",
            params![category.as_str(), message],
        )?;
        Ok(())
    }

    fn list(&self, category: Option<LogType>) -> RepoResult<Vec<AuditLogEntry>> {
        let mut sql = String::from("SELECT id, category, message, created_at FROM audit_logs");
        let mut bind_values: Vec<Value> = Vec::new();
        if let Some(category) = category {
            sql.push_str(" WHERE category = ?");
            bind_values.push(Value::Text(category.as_str().to_string()));
        }
        sql.push_str(" ORDER BY id ASC");

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut entries = Vec::new();
        while let Some(row) = rows.next()? {
            entries.push(parse_audit_row(row)?);
        }
        Ok(entries)
    }
}

fn parse_audit_row(row: &Row<'_>) -> RepoResult<AuditLogEntry> {
    let category_text: String = row.get("category")?;
    let category = LogType::parse(&category_text).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid category `{category_text}` in audit_logs.category"
        ))
    })?;

    Ok(AuditLogEntry {
        id: row.get("id")?,
        category,
        message: row.get("message")?,
        created_at: row.get("created_at")?,
    })
}
