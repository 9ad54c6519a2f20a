use super::*;
use crate::schema::FieldType;

#[test]
fn cemetery_registers_all_five_tables() {
    let registry = TableRegistry::cemetery();
    let mut keys: Vec<&str> = registry.keys().collect();
    keys.sort_unstable();
    assert_eq!(keys, ["burials", "constructions", "maintenance", "ownerships", "payments"]);
}

#[test]
fn table_urls_match_backend_endpoints() {
    let registry = TableRegistry::cemetery();
    assert_eq!(registry.lookup("payments").unwrap().url, "/payments/api/");
    assert_eq!(registry.lookup("burials").unwrap().url, "/burials/api/");
    assert_eq!(registry.lookup("maintenance").unwrap().url, "/maintenance_jsgrid/api/");
    assert_eq!(registry.lookup("ownerships").unwrap().url, "/ownerships_jsgrid/api/");
    assert_eq!(registry.lookup("constructions").unwrap().url, "/constructions_jsgrid/api/");
}

#[test]
fn lookup_unknown_key_is_an_error() {
    let registry = TableRegistry::cemetery();
    let err = registry.lookup("graves").unwrap_err();
    assert!(matches!(err, GridError::UnknownTable(key) if key == "graves"));
}

#[test]
fn merged_fields_keep_spot_own_control_order() {
    let registry = TableRegistry::cemetery();
    for key in ["payments", "burials", "maintenance", "ownerships", "constructions"] {
        let merged = registry.merged_fields(key).unwrap();
        let own = &registry.lookup(key).unwrap().fields;
        assert_eq!(merged.len(), 3 + own.len() + 1, "table {key}");

        let names: Vec<&str> = merged[..3].iter().map(|f| f.name.as_deref().unwrap()).collect();
        assert_eq!(names, ["parcel", "row", "column"], "table {key}");

        assert_eq!(&merged[3..3 + own.len()], own.as_slice(), "table {key}");

        let last = merged.last().unwrap();
        assert_eq!(last.field_type, FieldType::Control, "table {key}");
    }
}

#[test]
fn burial_type_options_are_exact() {
    let registry = TableRegistry::cemetery();
    let burials = registry.lookup("burials").unwrap();
    let type_field = burials.fields.iter().find(|f| f.name.as_deref() == Some("type")).unwrap();
    assert_eq!(
        type_field.items,
        vec![
            SelectItem::new("", ""),
            SelectItem::new("Burial", "bral"),
            SelectItem::new("Exhumation", "exhm"),
        ]
    );
}

#[test]
fn construction_type_options_are_exact() {
    let registry = TableRegistry::cemetery();
    let constructions = registry.lookup("constructions").unwrap();
    let type_field = constructions
        .fields
        .iter()
        .find(|f| f.name.as_deref() == Some("constructionType"))
        .unwrap();
    assert_eq!(
        type_field.items,
        vec![
            SelectItem::new("", ""),
            SelectItem::new("Border", "brdr"),
            SelectItem::new("Tomb", "tomb"),
        ]
    );
}

#[test]
fn derived_columns_are_read_only() {
    let registry = TableRegistry::cemetery();
    for (table, column) in [
        ("maintenance", "firstName"),
        ("maintenance", "lastName"),
        ("ownerships", "sharingSpots"),
        ("constructions", "sharingAuthorization"),
    ] {
        let config = registry.lookup(table).unwrap();
        let field = config.fields.iter().find(|f| f.name.as_deref() == Some(column)).unwrap();
        assert!(!field.inserting, "{table}.{column}");
        assert!(!field.editing, "{table}.{column}");
    }
}
