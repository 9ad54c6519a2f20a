use super::*;

#[test]
fn parse_rows_substitutes_id_for_pk() {
    let rows = parse_rows(r#"[{"pk":1,"fields":{"year":2020}}]"#).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(serde_json::Value::Object(rows[0].clone()), serde_json::json!({"id": 1, "year": 2020}));
}

#[test]
fn parse_rows_preserves_item_order() {
    let body = r#"[
        {"pk": 3, "fields": {"parcel": "A"}},
        {"pk": 1, "fields": {"parcel": "B"}},
        {"pk": 2, "fields": {"parcel": "C"}}
    ]"#;
    let rows = parse_rows(body).unwrap();
    let ids: Vec<i64> = rows.iter().map(|r| r.get("id").unwrap().as_i64().unwrap()).collect();
    assert_eq!(ids, [3, 1, 2]);
}

#[test]
fn parse_rows_keeps_all_field_values() {
    let body = r#"[{"pk": 7, "fields": {"firstName": "Ion", "isKept": true, "note": null}}]"#;
    let rows = parse_rows(body).unwrap();
    let row = &rows[0];
    assert_eq!(row.get("firstName"), Some(&serde_json::json!("Ion")));
    assert_eq!(row.get("isKept"), Some(&serde_json::json!(true)));
    assert_eq!(row.get("note"), Some(&serde_json::Value::Null));
    assert_eq!(row.get("id"), Some(&serde_json::json!(7)));
}

#[test]
fn parse_rows_pk_wins_over_field_named_id() {
    let rows = parse_rows(r#"[{"pk": 9, "fields": {"id": 1, "year": 2020}}]"#).unwrap();
    assert_eq!(rows[0].get("id"), Some(&serde_json::json!(9)));
}

#[test]
fn parse_rows_accepts_string_pk() {
    let rows = parse_rows(r#"[{"pk": "a-1-2", "fields": {}}]"#).unwrap();
    assert_eq!(rows[0].get("id"), Some(&serde_json::json!("a-1-2")));
}

#[test]
fn parse_rows_empty_array() {
    assert!(parse_rows("[]").unwrap().is_empty());
}

#[test]
fn parse_rows_rejects_non_json() {
    let err = parse_rows("<html>login page</html>").unwrap_err();
    assert!(matches!(err, crate::error::GridError::Decode(_)));
}

#[test]
fn parse_rows_rejects_non_array() {
    let err = parse_rows(r#"{"pk": 1, "fields": {}}"#).unwrap_err();
    assert!(matches!(err, crate::error::GridError::Decode(_)));
}
