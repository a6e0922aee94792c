//! The parameterized script engine.
//!
//! One [`LayerScripter`] replaces the family of copy-pasted per-layer
//! helper scripts: everything that differed between them lives in the
//! [`LayerProfile`], everything that was shared lives here.

use crate::assemble::{bronze_ddl, prefixed_aliases, silver_procedure};
use crate::config::LayerProfile;
use crate::error::LayercastResult;
use crate::fields::{FieldDescriptor, FieldSource};
use crate::generate::{ClauseMode, column_clause};
use crate::normalize::normalize;

/// Generates the full set of warehouse scripts for feature layers under
/// one profile.
#[derive(Debug, Clone)]
pub struct LayerScripter {
    profile: LayerProfile,
}

/// Both tier scripts for one layer.
#[derive(Debug, Clone)]
pub struct LayerScripts {
    pub bronze_ddl: String,
    pub silver_procedure: String,
}

impl LayerScripter {
    /// Build a scripter, validating the profile up front so generation
    /// itself cannot fail on configuration.
    pub fn new(profile: LayerProfile) -> LayercastResult<Self> {
        profile.validate()?;
        Ok(Self { profile })
    }

    pub fn profile(&self) -> &LayerProfile {
        &self.profile
    }

    /// Comma-separated list of the layer's field names after ignore
    /// filtering, in provider order.
    pub fn field_names(&self, fields: &[FieldDescriptor]) -> String {
        normalize(fields, &self.profile.ignore)
            .iter()
            .map(|f| f.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Typed column definitions (`NAME TYPE`) for one layer, one per line.
    ///
    /// Used when promoting a layer's bronze table to a fully typed one;
    /// the bronze DDL itself lands everything as wide text.
    pub fn typed_definitions(&self, fields: &[FieldDescriptor]) -> LayercastResult<String> {
        let mut lines: Vec<String> = Vec::new();
        for field in normalize(fields, &self.profile.ignore) {
            if let Some(clause) = column_clause(
                field,
                ClauseMode::Definition,
                &self.profile.rename,
                &self.profile.time_zone,
            )? {
                lines.push(clause);
            }
        }
        Ok(lines.join(",\n"))
    }

    /// Bronze landing-table DDL for one layer.
    pub fn bronze_ddl(&self, layer_name: &str, fields: &[FieldDescriptor]) -> String {
        bronze_ddl(layer_name, fields, &self.profile)
    }

    /// Silver rebuild procedure for one layer.
    pub fn silver_procedure(
        &self,
        layer_name: &str,
        fields: &[FieldDescriptor],
    ) -> LayercastResult<String> {
        silver_procedure(layer_name, fields, &self.profile)
    }

    /// Both tier scripts for one layer.
    pub fn scripts(
        &self,
        layer_name: &str,
        fields: &[FieldDescriptor],
    ) -> LayercastResult<LayerScripts> {
        Ok(LayerScripts {
            bronze_ddl: self.bronze_ddl(layer_name, fields),
            silver_procedure: self.silver_procedure(layer_name, fields)?,
        })
    }

    /// Fetch a layer's fields from `source` and generate both scripts.
    pub fn scripts_from<S: FieldSource>(
        &self,
        source: &S,
        layer_name: &str,
    ) -> LayercastResult<LayerScripts> {
        let fields = source.fetch_fields(layer_name)?;
        self.scripts(layer_name, &fields)
    }

    /// Prefixed-alias projection over a bracketed column block.
    pub fn prefixed_aliases(&self, block: &str, prefix: &str) -> LayercastResult<String> {
        prefixed_aliases(block, prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LayercastError;
    use crate::fields::{FieldDescriptor, FieldType};

    #[test]
    fn field_names_filters_and_preserves_order() {
        let scripter = LayerScripter::new(LayerProfile::parks()).unwrap();
        let fields = vec![
            FieldDescriptor::new("OBJECTID", FieldType::ObjectId),
            FieldDescriptor::new("X", FieldType::Double),
            FieldDescriptor::new("PARK_NAME", FieldType::String).with_length(100),
        ];
        assert_eq!(scripter.field_names(&fields), "OBJECTID, PARK_NAME");
    }

    #[test]
    fn typed_definitions_follow_the_type_table() {
        let scripter = LayerScripter::new(LayerProfile::parks()).unwrap();
        let fields = vec![
            FieldDescriptor::new("OBJECTID", FieldType::ObjectId),
            FieldDescriptor::new("X", FieldType::Double),
            FieldDescriptor::new("SIZE_", FieldType::String).with_length(50),
        ];
        assert_eq!(
            scripter.typed_definitions(&fields).unwrap(),
            "OBJECTID INT,\nSIZE_ VARCHAR(50)"
        );
    }

    #[test]
    fn invalid_profile_is_rejected_at_construction() {
        let profile = LayerProfile {
            dedup_key: String::new(),
            ..LayerProfile::default()
        };
        let err = LayerScripter::new(profile).unwrap_err();
        assert!(matches!(err, LayercastError::Config(_)));
    }
}
