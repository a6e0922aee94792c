//! End-to-end tests: schema JSON in, both tier scripts out.

use pretty_assertions::assert_eq;

use layercast_core::prelude::*;

const PICNIC_SHELTERS: &str = r#"{
    "name": "PicnicShelters",
    "fields": [
        { "name": "OBJECTID", "type": "esriFieldTypeOID", "alias": "OBJECTID" },
        { "name": "PICNIC_NAME", "type": "esriFieldTypeString", "length": 100 },
        { "name": "X", "type": "esriFieldTypeDouble" },
        { "name": "Y", "type": "esriFieldTypeDouble" },
        { "name": "SIZE_", "type": "esriFieldTypeString", "length": 50 },
        { "name": "CAPACITY", "type": "esriFieldTypeSmallInteger" },
        { "name": "GISOBJID", "type": "esriFieldTypeBigInteger" },
        { "name": "DESCRIPTION", "type": "esriFieldTypeString", "length": 8000 },
        { "name": "CREATED_DATE", "type": "esriFieldTypeDate", "length": 8 },
        { "name": "CREATED_USER", "type": "esriFieldTypeString", "length": 255 },
        { "name": "GLOBALID", "type": "esriFieldTypeGlobalID", "length": 38 },
        { "name": "SHAPE", "type": "esriFieldTypeGeometry" }
    ]
}"#;

fn scripter() -> LayerScripter {
    LayerScripter::new(LayerProfile::parks()).unwrap()
}

#[test]
fn schema_document_drives_both_tiers() {
    let schema = LayerSchema::from_json(PICNIC_SHELTERS).unwrap();
    let scripts = scripter()
        .scripts_from(&schema, schema.name.as_deref().unwrap())
        .unwrap();

    assert!(scripts.bronze_ddl.contains("[bronze].[B_GIS_PICNICSHELTERS]"));
    assert!(scripts.bronze_ddl.contains("    DESCRIPTION VARCHAR(8000)"));
    assert!(
        scripts
            .silver_procedure
            .contains("CAST([DESCRIPTION] AS VARCHAR(MAX)) AS [DESCRIPTION]")
    );
    assert!(
        scripts
            .silver_procedure
            .contains("CAST([CREATED_USER] AS VARCHAR(255)) AS [CREATOR]")
    );
}

#[test]
fn every_projected_source_column_exists_in_the_bronze_table() {
    let schema = LayerSchema::from_json(PICNIC_SHELTERS).unwrap();
    let scripter = scripter();
    let bronze = scripter.bronze_ddl("PicnicShelters", &schema.fields);
    let silver = scripter
        .silver_procedure("PicnicShelters", &schema.fields)
        .unwrap();

    // Every `CAST([NAME]` or `ROUND([NAME]` source in the projection must be
    // a column of the landing table (suffix columns included).
    for token in silver.split("([").skip(1) {
        let Some(name) = token.split(']').next() else {
            continue;
        };
        if name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') && !name.is_empty() {
            assert!(
                bronze.contains(&format!("    {name} ")),
                "projected column {name} missing from bronze DDL"
            );
        }
    }
}

#[test]
fn ignored_fields_appear_in_neither_tier() {
    let schema = LayerSchema::from_json(PICNIC_SHELTERS).unwrap();
    let scripter = scripter();
    let names = scripter.field_names(&schema.fields);
    assert!(!names.contains("X,"));
    assert_eq!(
        names,
        "OBJECTID, PICNIC_NAME, SIZE_, CAPACITY, GISOBJID, DESCRIPTION, \
         CREATED_DATE, CREATED_USER, GLOBALID, SHAPE"
    );

    let bronze = scripter.bronze_ddl("PicnicShelters", &schema.fields);
    assert!(!bronze.contains("    X VARCHAR"));
    assert!(!bronze.contains("    Y VARCHAR"));
}

#[test]
fn generation_is_byte_identical_across_calls() {
    let schema = LayerSchema::from_json(PICNIC_SHELTERS).unwrap();
    let scripter = scripter();
    let a = scripter.scripts("PicnicShelters", &schema.fields).unwrap();
    let b = scripter.scripts("PicnicShelters", &schema.fields).unwrap();
    assert_eq!(a.bronze_ddl, b.bronze_ddl);
    assert_eq!(a.silver_procedure, b.silver_procedure);
}

#[test]
fn missing_string_length_fails_before_any_output() {
    let schema = LayerSchema::from_json(
        r#"[{ "name": "NOTES", "type": "esriFieldTypeString" }]"#,
    )
    .unwrap();
    let err = scripter()
        .silver_procedure("Broken", &schema.fields)
        .unwrap_err();
    assert!(matches!(err, LayercastError::MissingLength { .. }));
}
