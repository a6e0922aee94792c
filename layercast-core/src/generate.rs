//! Column-clause generation: one field descriptor to one SQL fragment.

use crate::config::RenameRule;
use crate::error::{LayercastError, LayercastResult};
use crate::fields::{FieldDescriptor, FieldType};
use crate::normalize::clean_name;

/// Width at which a string column is promoted to VARCHAR(MAX).
const VARCHAR_MAX_THRESHOLD: u32 = 8000;

/// Which flavor of clause to produce for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClauseMode {
    /// Raw column definition: `NAME TYPE`.
    Definition,
    /// Typed selection for the silver tier: `CAST([NAME] AS TYPE) AS [ALIAS]`.
    Projection,
}

/// Generate the clause for one field.
///
/// Returns `Ok(None)` for geometry fields, which have no scalar column in
/// either tier; geometry reaches the warehouse through the static WKB/WKT
/// suffix columns instead. Date fields store as epoch-millisecond INT and
/// project as a `DATEADD` conversion into `time_zone`.
pub fn column_clause(
    field: &FieldDescriptor,
    mode: ClauseMode,
    rules: &[RenameRule],
    time_zone: &str,
) -> LayercastResult<Option<String>> {
    let sql_type = match field.field_type {
        FieldType::String => varchar(field)?,
        FieldType::SmallInteger | FieldType::Integer | FieldType::ObjectId => "INT".to_string(),
        FieldType::BigInteger => "BIGINT".to_string(),
        FieldType::GlobalId | FieldType::Guid => "CHAR(36)".to_string(),
        FieldType::Date => "INT".to_string(),
        FieldType::Double => "NUMERIC(38, 8)".to_string(),
        FieldType::Float | FieldType::Single => "NUMERIC(12, 6)".to_string(),
        FieldType::Blob => "BINARY".to_string(),
        FieldType::Geometry => return Ok(None),
    };

    let clause = match mode {
        ClauseMode::Definition => format!("{} {}", field.name, sql_type),
        ClauseMode::Projection => {
            let alias = clean_name(&field.name, rules);
            if field.field_type == FieldType::Date {
                format!(
                    "DATEADD(S, CAST([{}] AS FLOAT)/1000, '1970-01-01') \
                     AT TIME ZONE 'UTC' AT TIME ZONE '{}' AS [{}]",
                    field.name, time_zone, alias
                )
            } else {
                format!("CAST([{}] AS {}) AS [{}]", field.name, sql_type, alias)
            }
        }
    };
    Ok(Some(clause))
}

fn varchar(field: &FieldDescriptor) -> LayercastResult<String> {
    let length = field.length.ok_or_else(|| LayercastError::MissingLength {
        field: field.name.clone(),
    })?;
    if length >= VARCHAR_MAX_THRESHOLD {
        Ok("VARCHAR(MAX)".to_string())
    } else {
        Ok(format!("VARCHAR({length})"))
    }
}
