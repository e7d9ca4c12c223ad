use inventory_core::db::open_db_in_memory;
use inventory_core::{
    Material, MaterialRepository, MaterialValidationError, RepoError, SqliteMaterialRepository,
};

fn steel() -> Material {
    let mut material = Material::new("M1", "Steel", 12.5);
    material.description = Some("cold rolled".to_string());
    material.density = Some(7.85);
    material
}

#[test]
fn save_and_find_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteMaterialRepository::new(&conn);

    let stored = repo.save(&steel()).unwrap();
    assert_eq!(stored, steel());

    let loaded = repo.find_by_id("M1").unwrap().unwrap();
    assert_eq!(loaded, steel());
}

#[test]
fn find_by_id_returns_none_for_unknown_id() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteMaterialRepository::new(&conn);

    assert!(repo.find_by_id("missing").unwrap().is_none());
}

#[test]
fn save_existing_id_replaces_all_fields() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteMaterialRepository::new(&conn);
    repo.save(&steel()).unwrap();

    let replacement = Material::new("M1", "Aluminium", 3.0);
    let stored = repo.save(&replacement).unwrap();

    assert_eq!(stored, replacement);
    assert_eq!(stored.description, None);
    assert_eq!(stored.density, None);
    assert_eq!(repo.find_all().unwrap().len(), 1);
}

#[test]
fn find_all_keeps_insertion_order_across_upserts() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteMaterialRepository::new(&conn);

    for (id, name) in [("M3", "Copper"), ("M1", "Steel"), ("M2", "Brass")] {
        repo.save(&Material::new(id, name, 1.0)).unwrap();
    }
    repo.save(&Material::new("M3", "Copper wire", 2.0)).unwrap();

    let ids: Vec<String> = repo
        .find_all()
        .unwrap()
        .into_iter()
        .map(|material| material.materialid)
        .collect();
    assert_eq!(ids, ["M3", "M1", "M2"]);
}

#[test]
fn delete_by_id_removes_row_and_is_noop_when_absent() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteMaterialRepository::new(&conn);
    repo.save(&steel()).unwrap();

    repo.delete_by_id("M1").unwrap();
    assert!(repo.find_by_id("M1").unwrap().is_none());

    repo.delete_by_id("M1").unwrap();
}

#[test]
fn save_rejects_invalid_material() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteMaterialRepository::new(&conn);

    let err = repo.save(&Material::new("", "Steel", 1.0)).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(MaterialValidationError::BlankField {
            field: "materialid"
        })
    ));
    assert!(repo.find_all().unwrap().is_empty());
}

#[test]
fn find_rejects_corrupt_persisted_row() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO materials (materialid, name, price) VALUES ('M9', '', -1.0);",
        [],
    )
    .unwrap();
    let repo = SqliteMaterialRepository::new(&conn);

    let err = repo.find_by_id("M9").unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(message) if message.contains("M9")));
}
