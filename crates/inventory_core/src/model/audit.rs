//! Audit log records.
//!
//! Audit entries are business history written by services; they are
//! unrelated to the diagnostic log produced through the `log` facade.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Fixed category tag attached to every audit entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogType {
    Material,
    RawMaterial,
}

impl LogType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Material => "material",
            Self::RawMaterial => "raw_material",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "material" => Some(Self::Material),
            "raw_material" | "rawmaterial" => Some(Self::RawMaterial),
            _ => None,
        }
    }
}

impl Display for LogType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One appended audit row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditLogEntry {
    pub id: i64,
    pub category: LogType,
    pub message: String,
    /// Epoch milliseconds.
    pub created_at: i64,
}

#[cfg(test)]
mod tests {
    use super::LogType;

    #[test]
    fn log_type_parse_accepts_stored_names() {
        for kind in [LogType::Material, LogType::RawMaterial] {
            assert_eq!(LogType::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(LogType::parse(" RawMaterial "), Some(LogType::RawMaterial));
        assert_eq!(LogType::parse("unknown"), None);
    }
}
