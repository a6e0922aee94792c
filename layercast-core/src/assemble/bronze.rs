//! Bronze-tier external table DDL.

use crate::config::LayerProfile;
use crate::fields::{FieldDescriptor, FieldType};
use crate::normalize::normalize;

/// Landing width for every source field; typed promotion happens in silver.
const BRONZE_TEXT_TYPE: &str = "VARCHAR(8000)";

/// Emit the DROP-then-CREATE pair for the external landing table
/// `[bronze].[B_GIS_<NAME>]`.
///
/// Every normalized field lands as wide text regardless of its source type;
/// the profile's suffix columns follow with their declared bronze types.
/// Geometry fields are skipped, their content arrives via the WKB/WKT
/// suffix columns.
pub fn bronze_ddl(layer_name: &str, fields: &[FieldDescriptor], profile: &LayerProfile) -> String {
    let name_upper = layer_name.to_uppercase();
    let name_lower = layer_name.to_lowercase();
    let table = format!("B_GIS_{name_upper}");

    let mut columns: Vec<String> = Vec::new();
    for field in normalize(fields, &profile.ignore) {
        if field.field_type == FieldType::Geometry {
            continue;
        }
        columns.push(format!("    {} {}", field.name, BRONZE_TEXT_TYPE));
    }
    for col in &profile.suffix {
        columns.push(format!("    {} {}", col.name, col.bronze_type));
    }

    format!(
        r"USE {database};
GO
IF OBJECT_ID('bronze.{table}') IS NOT NULL
    DROP EXTERNAL TABLE [bronze].[{table}]
GO

CREATE EXTERNAL TABLE [bronze].[{table}] (
{columns}
)
WITH (
    LOCATION = 'bronze/gis-{name_lower}',
    DATA_SOURCE = {data_source},
    FILE_FORMAT = {file_format}
);
GO
",
        database = profile.database,
        table = table,
        columns = columns.join(",\n"),
        name_lower = name_lower,
        data_source = profile.data_source,
        file_format = profile.file_format,
    )
}
