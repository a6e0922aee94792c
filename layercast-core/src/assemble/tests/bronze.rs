//! Bronze DDL assembly tests.

use pretty_assertions::assert_eq;

use super::sample_fields;
use crate::assemble::bronze_ddl;
use crate::config::LayerProfile;

#[test]
fn bronze_table_is_named_from_the_layer() {
    let sql = bronze_ddl("PicnicShelters", &sample_fields(), &LayerProfile::parks());
    assert!(sql.contains("IF OBJECT_ID('bronze.B_GIS_PICNICSHELTERS') IS NOT NULL"));
    assert!(sql.contains("DROP EXTERNAL TABLE [bronze].[B_GIS_PICNICSHELTERS]"));
    assert!(sql.contains("CREATE EXTERNAL TABLE [bronze].[B_GIS_PICNICSHELTERS] ("));
    assert!(sql.contains("LOCATION = 'bronze/gis-picnicshelters'"));
}

#[test]
fn every_kept_field_lands_as_wide_text() {
    let sql = bronze_ddl("Benches", &sample_fields(), &LayerProfile::parks());
    assert!(sql.contains("    OBJECTID VARCHAR(8000)"));
    assert!(sql.contains("    PARK_NAME VARCHAR(8000)"));
    assert!(sql.contains("    SIZE_ VARCHAR(8000)"));
    // Ignored and geometry fields never land.
    assert!(!sql.contains("    X VARCHAR"));
    assert!(!sql.contains("SHAPE"));
}

#[test]
fn suffix_block_follows_the_source_fields() {
    let sql = bronze_ddl("Benches", &sample_fields(), &LayerProfile::parks());
    let geomwkb = sql.find("GEOMWKB VARBINARY(MAX)").unwrap();
    let objectid = sql.find("OBJECTID VARCHAR(8000)").unwrap();
    assert!(objectid < geomwkb);
    assert!(sql.contains("    GEOMWKT VARCHAR(MAX)"));
    assert!(sql.contains("    LONGITUDE FLOAT"));
    assert!(sql.contains("    INGEST_TS VARCHAR(8000)"));
    assert!(sql.contains("    INGEST_FILE VARCHAR(8000)"));
}

#[test]
fn empty_field_list_yields_suffix_only_ddl() {
    let profile = LayerProfile::parks();
    let sql = bronze_ddl("Empty", &[], &profile);
    assert!(sql.contains("CREATE EXTERNAL TABLE [bronze].[B_GIS_EMPTY] ("));
    // First column is the head of the suffix block.
    assert!(sql.contains("(\n    GEOMWKB VARBINARY(MAX),"));
}

#[test]
fn output_is_deterministic() {
    let fields = sample_fields();
    let profile = LayerProfile::parks();
    let first = bronze_ddl("Kiosks", &fields, &profile);
    let second = bronze_ddl("Kiosks", &fields, &profile);
    assert_eq!(first, second);
}
