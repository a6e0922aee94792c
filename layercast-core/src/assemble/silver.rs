//! Silver-tier rebuild procedure.

use crate::config::LayerProfile;
use crate::error::LayercastResult;
use crate::fields::FieldDescriptor;
use crate::generate::{ClauseMode, column_clause};
use crate::normalize::normalize;

/// Emit the `USP_S_GIS_<NAME>` stored procedure.
///
/// The procedure drops any pre-existing external table at the target
/// location, then re-creates it as a CTAS over the bronze table: typed
/// projections of every normalized field plus the suffix block,
/// deduplicated per `dedup_key` and restricted to the newest ingest batch.
/// Re-running it always yields exactly the latest complete snapshot.
pub fn silver_procedure(
    layer_name: &str,
    fields: &[FieldDescriptor],
    profile: &LayerProfile,
) -> LayercastResult<String> {
    let name_upper = layer_name.to_uppercase();
    let name_lower = layer_name.to_lowercase();

    let mut selections: Vec<String> = Vec::new();
    for field in normalize(fields, &profile.ignore) {
        if let Some(clause) = column_clause(
            field,
            ClauseMode::Projection,
            &profile.rename,
            &profile.time_zone,
        )? {
            selections.push(format!("    {clause}"));
        }
    }
    for col in &profile.suffix {
        selections.push(format!("    {}", col.projection_clause()));
    }

    // The selection block lives inside the procedure's dynamic-SQL string,
    // so embedded literals need their quotes doubled.
    let field_selection = escape_dynamic_sql(&selections.join(",\n"));

    Ok(format!(
        r"USE {database};
GO
IF OBJECT_ID('dbo.USP_S_GIS_{name_upper}') IS NOT NULL
    DROP PROCEDURE [dbo].[USP_S_GIS_{name_upper}]
GO

CREATE PROCEDURE [dbo].[USP_S_GIS_{name_upper}]
    @external_tbl_schema NVARCHAR(128),
    @external_location VARCHAR(128),
    @external_tbl_name NVARCHAR(128)
AS
BEGIN
    DECLARE @drop_existing_sql NVARCHAR(500)='IF OBJECT_ID('''+@external_tbl_schema+'.'+@external_tbl_name+''') IS NOT NULL DROP EXTERNAL TABLE ['+@external_tbl_schema+'].['+@external_tbl_name+']'
    DECLARE @external_data_source sysname='{data_source}';
    DECLARE @external_file_format sysname='{file_format}';
    DECLARE @sql NVARCHAR(MAX)='CREATE EXTERNAL TABLE '+@external_tbl_schema+'.'+@external_tbl_name+'
    WITH (LOCATION ='''+@external_location+''',
    DATA_SOURCE ='+@external_data_source+',
    FILE_FORMAT ='+@external_file_format+') AS
select
{field_selection}
from (
    select *,
        row_number() over (partition by [{dedup_key}] order by [{batch_column}] desc) as row_num,
        dense_rank() over (order by [{batch_column}] desc) as batch_rank
    from [bronze].[B_GIS_{name_upper}]
) t1
where row_num = 1 and batch_rank = 1'

   PRINT @sql

   PRINT @drop_existing_sql

   EXECUTE sp_executesql @drop_existing_sql
   PRINT 'DROPPED EXTERNAL TABLE: '+@external_tbl_name
   EXECUTE sp_executesql @sql
   PRINT 'CREATED EXTERNAL TABLE: '+@external_tbl_name
END;

/*
EXECUTE dbo.USP_S_GIS_{name_upper}
    @external_tbl_schema='silver',
    @external_location='silver/gis-{name_lower}',
    @external_tbl_name='S_GIS_{name_upper}';
*/
",
        database = profile.database,
        name_upper = name_upper,
        name_lower = name_lower,
        data_source = profile.data_source,
        file_format = profile.file_format,
        field_selection = field_selection,
        dedup_key = profile.dedup_key,
        batch_column = profile.batch_column,
    ))
}

/// Double single quotes for embedding in a T-SQL string literal.
fn escape_dynamic_sql(sql: &str) -> String {
    sql.replace('\'', "''")
}
