//! Layer profiles: everything that varied between the per-layer scripts.
//!
//! A [`LayerProfile`] bundles the ignore set, rename rules, suffix columns,
//! and warehouse names for one family of layers. Profiles are plain serde
//! types and load from JSON; validation happens at load time so generation
//! itself never fails on configuration.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{LayercastError, LayercastResult};

/// One ordered rename rule: plain substring replacement, all occurrences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameRule {
    pub from: String,
    pub to: String,
}

impl RenameRule {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// How a suffix column is selected into the silver tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuffixProjection {
    /// Selected as-is: `[NAME]`.
    Passthrough,
    /// `ROUND([NAME], digits) AS [NAME]`.
    Round { digits: u8 },
    /// `CAST([NAME] AS type) AS [NAME]`.
    Cast { sql_type: String },
}

/// A statically-defined enrichment column appended after the source fields
/// in both tiers. Names and types are fixed by the ingest pipeline, not
/// derived from the layer schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuffixColumn {
    pub name: String,
    /// Column type in the bronze landing table.
    pub bronze_type: String,
    #[serde(default = "SuffixProjection::passthrough")]
    pub projection: SuffixProjection,
}

impl SuffixProjection {
    fn passthrough() -> Self {
        Self::Passthrough
    }
}

impl SuffixColumn {
    pub fn new(name: impl Into<String>, bronze_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bronze_type: bronze_type.into(),
            projection: SuffixProjection::Passthrough,
        }
    }

    pub fn round(name: impl Into<String>, bronze_type: impl Into<String>, digits: u8) -> Self {
        Self {
            projection: SuffixProjection::Round { digits },
            ..Self::new(name, bronze_type)
        }
    }

    pub fn cast(
        name: impl Into<String>,
        bronze_type: impl Into<String>,
        sql_type: impl Into<String>,
    ) -> Self {
        Self {
            projection: SuffixProjection::Cast {
                sql_type: sql_type.into(),
            },
            ..Self::new(name, bronze_type)
        }
    }

    /// Code / dominant-value / area-breakdown trio for an overlay lookup
    /// (e.g. zoning or management-area polygons intersected during ingest).
    pub fn lookup_trio(base: &str) -> [Self; 3] {
        [
            Self::new(format!("{base}_CODE"), "VARCHAR(8000)"),
            Self::new(format!("{base}_DOMINANT"), "VARCHAR(8000)"),
            Self::new(format!("{base}_AREAS"), "VARCHAR(8000)"),
        ]
    }

    /// The silver-tier selection for this column.
    pub fn projection_clause(&self) -> String {
        match &self.projection {
            SuffixProjection::Passthrough => format!("[{}]", self.name),
            SuffixProjection::Round { digits } => {
                format!("ROUND([{0}], {1}) AS [{0}]", self.name, digits)
            }
            SuffixProjection::Cast { sql_type } => {
                format!("CAST([{0}] AS {1}) AS [{0}]", self.name, sql_type)
            }
        }
    }
}

/// Per-layer-family generation profile.
///
/// The defaults reproduce the warehouse conventions shared by every script
/// variant; [`LayerProfile::parks`] adds the parks-asset ignore list and
/// rename map.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayerProfile {
    /// Field names excluded from generated output.
    pub ignore: HashSet<String>,
    /// Applied in order when cleaning a field name for the silver alias.
    pub rename: Vec<RenameRule>,
    /// Enrichment columns appended after the source fields.
    pub suffix: Vec<SuffixColumn>,
    /// Unique row identifier the silver dedup partitions by.
    pub dedup_key: String,
    /// Ingestion-timestamp column; orders the dedup and marks the batch.
    pub batch_column: String,
    /// Target time zone for epoch-date conversion.
    pub time_zone: String,
    /// Warehouse database holding both tiers.
    pub database: String,
    /// External data source name for CTAS output.
    pub data_source: String,
    /// External file format name for CTAS output.
    pub file_format: String,
}

impl Default for LayerProfile {
    fn default() -> Self {
        Self {
            ignore: HashSet::new(),
            rename: Vec::new(),
            suffix: standard_suffix(),
            dedup_key: "OBJECTID".to_string(),
            batch_column: "INGEST_TS".to_string(),
            time_zone: "Eastern Standard Time".to_string(),
            database: "mds_ldw".to_string(),
            data_source: "mds_ldw_source".to_string(),
            file_format: "raw_ion_parquet".to_string(),
        }
    }
}

/// The enrichment block shared by every layer: ingest metadata, geometry
/// WKB/WKT, and rounded coordinate/measure columns.
fn standard_suffix() -> Vec<SuffixColumn> {
    vec![
        SuffixColumn::new("GEOMWKB", "VARBINARY(MAX)"),
        SuffixColumn::new("GEOMWKT", "VARCHAR(MAX)"),
        SuffixColumn::round("X", "FLOAT", 4),
        SuffixColumn::round("Y", "FLOAT", 4),
        SuffixColumn::round("LONGITUDE", "FLOAT", 4),
        SuffixColumn::round("LATITUDE", "FLOAT", 4),
        SuffixColumn::round("LENGTH", "VARCHAR(8000)", 4),
        SuffixColumn::round("AREA", "VARCHAR(8000)", 4),
        SuffixColumn::cast("GEOMTYPE", "VARCHAR(8000)", "VARCHAR(30)"),
        SuffixColumn::new("INGEST_TS", "VARCHAR(8000)"),
        SuffixColumn::new("INGEST_FILE", "VARCHAR(8000)"),
    ]
}

impl LayerProfile {
    /// Profile for the parks asset layers (benches, shelters, kiosks, ...):
    /// raw coordinates are recomputed downstream and the editor-tracking
    /// fields take the hosted-layer names.
    pub fn parks() -> Self {
        Self {
            ignore: ["X", "Y", "ASSET_TYPE"]
                .into_iter()
                .map(String::from)
                .collect(),
            rename: vec![
                RenameRule::new("SIZE_", "SIZE"),
                RenameRule::new("CREATED_DATE", "CreationDate"),
                RenameRule::new("UPDATED_DATE", "EditDate"),
                RenameRule::new("CREATED_USER", "Creator"),
                RenameRule::new("UPDATED_USER", "Editor"),
            ],
            ..Self::default()
        }
    }

    /// Load and validate a profile from JSON.
    pub fn from_json(json: &str) -> LayercastResult<Self> {
        let profile: Self = serde_json::from_str(json)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Reject malformed configuration before any generation runs.
    pub fn validate(&self) -> LayercastResult<()> {
        if let Some(blank) = self.ignore.iter().find(|n| n.trim().is_empty()) {
            return Err(LayercastError::config(format!(
                "ignore list contains a blank entry: {blank:?}"
            )));
        }
        for rule in &self.rename {
            if rule.from.is_empty() {
                return Err(LayercastError::config(format!(
                    "rename rule with empty pattern (to: {:?})",
                    rule.to
                )));
            }
        }
        for col in &self.suffix {
            if col.name.trim().is_empty() {
                return Err(LayercastError::config("suffix column with blank name"));
            }
            if col.bronze_type.trim().is_empty() {
                return Err(LayercastError::config(format!(
                    "suffix column '{}' has no bronze type",
                    col.name
                )));
            }
        }
        if self.dedup_key.trim().is_empty() {
            return Err(LayercastError::config("dedup_key must not be blank"));
        }
        if self.batch_column.trim().is_empty() {
            return Err(LayercastError::config("batch_column must not be blank"));
        }
        Ok(())
    }
}
