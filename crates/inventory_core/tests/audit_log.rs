use inventory_core::db::open_db_in_memory;
use inventory_core::{AuditLog, LogService, LogType, SqliteAuditLogRepository};
use std::time::{SystemTime, UNIX_EPOCH};

fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_millis() as i64
}

#[test]
fn write_log_appends_entries_in_order() {
    let conn = open_db_in_memory().unwrap();
    let logs = LogService::new(SqliteAuditLogRepository::new(&conn));

    logs.write_log(LogType::Material, "first");
    logs.write_log(LogType::RawMaterial, "second");
    logs.write_log(LogType::Material, "third");

    let all = logs.list_logs(None).unwrap();
    let messages: Vec<&str> = all.iter().map(|entry| entry.message.as_str()).collect();
    assert_eq!(messages, ["first", "second", "third"]);
    assert!(all.windows(2).all(|pair| pair[0].id < pair[1].id));
    assert!(all.iter().all(|entry| entry.created_at > 0));
}

#[test]
fn created_at_is_epoch_millis_at_write_time() {
    let conn = open_db_in_memory().unwrap();
    let logs = LogService::new(SqliteAuditLogRepository::new(&conn));

    let before = now_millis();
    logs.write_log(LogType::Material, "stamped");
    let after = now_millis();

    let entry = &logs.list_logs(None).unwrap()[0];
    assert!(
        (before - 1..=after).contains(&entry.created_at),
        "created_at {} outside [{before}, {after}]",
        entry.created_at
    );
}

#[test]
fn list_logs_filters_by_category() {
    let conn = open_db_in_memory().unwrap();
    let logs = LogService::new(SqliteAuditLogRepository::new(&conn));

    logs.write_log(LogType::Material, "material entry");
    logs.write_log(LogType::RawMaterial, "raw entry");

    let raw = logs.list_logs(Some(LogType::RawMaterial)).unwrap();
    assert_eq!(raw.len(), 1);
    assert_eq!(raw[0].category, LogType::RawMaterial);
    assert_eq!(raw[0].message, "raw entry");
}

#[test]
fn write_log_swallows_storage_failures() {
    let conn = open_db_in_memory().unwrap();
    conn.execute_batch("DROP TABLE audit_logs;").unwrap();
    let logs = LogService::new(SqliteAuditLogRepository::new(&conn));

    logs.write_log(LogType::Material, "lost");

    assert!(logs.list_logs(None).is_err());
}
