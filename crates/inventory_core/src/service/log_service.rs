//! Audit log sink.
//!
//! # Responsibility
//! - Append categorized audit entries on behalf of business services.
//! - Keep audit failures out of the caller's success/failure path.
//!
//! # Invariants
//! - `write_log` never returns an error and never panics.

use crate::model::audit::{AuditLogEntry, LogType};
use crate::repo::audit_repo::AuditLogRepository;
use crate::repo::RepoResult;
use log::warn;

/// Fire-and-forget audit capability injected into services.
pub trait AuditLog {
    fn write_log(&self, category: LogType, message: &str);
}

impl<T: AuditLog + ?Sized> AuditLog for &T {
    fn write_log(&self, category: LogType, message: &str) {
        (**self).write_log(category, message);
    }
}

/// Audit log service backed by an append-only repository.
pub struct LogService<R: AuditLogRepository> {
    repo: R,
}

impl<R: AuditLogRepository> LogService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists audit entries in append order.
    pub fn list_logs(&self, category: Option<LogType>) -> RepoResult<Vec<AuditLogEntry>> {
        self.repo.list(category)
    }
}

impl<R: AuditLogRepository> AuditLog for LogService<R> {
    fn write_log(&self, category: LogType, message: &str) {
        if let Err(err) = self.repo.append(category, message) {
            warn!(
                "event=audit_write module=service status=error category={category} error={err}"
            );
        }
    }
}
