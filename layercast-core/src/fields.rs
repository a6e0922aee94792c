//! Feature-layer schema types.
//!
//! Provides types for representing a remote layer's attribute schema and
//! loading them from the service's JSON document.
//!
//! # Example
//! ```
//! use layercast_core::fields::LayerSchema;
//!
//! let json = r#"{
//!     "name": "Benches",
//!     "fields": [
//!         { "name": "OBJECTID", "type": "esriFieldTypeOID" },
//!         { "name": "PARK_NAME", "type": "esriFieldTypeString", "length": 100 }
//!     ]
//! }"#;
//!
//! let schema = LayerSchema::from_json(json).unwrap();
//! assert_eq!(schema.field_names(), vec!["OBJECTID", "PARK_NAME"]);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::LayercastResult;

/// Field type tags reported by a feature service.
///
/// Deserialization accepts the `esriFieldType*` wire names; a tag outside
/// this set fails loading before any SQL is generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    #[serde(rename = "esriFieldTypeString", alias = "string")]
    String,
    #[serde(rename = "esriFieldTypeSmallInteger", alias = "small-integer")]
    SmallInteger,
    #[serde(rename = "esriFieldTypeInteger", alias = "integer")]
    Integer,
    #[serde(rename = "esriFieldTypeBigInteger", alias = "big-integer")]
    BigInteger,
    #[serde(rename = "esriFieldTypeOID", alias = "oid")]
    ObjectId,
    #[serde(rename = "esriFieldTypeGlobalID", alias = "global-id")]
    GlobalId,
    #[serde(rename = "esriFieldTypeGUID", alias = "guid")]
    Guid,
    #[serde(rename = "esriFieldTypeDate", alias = "date")]
    Date,
    #[serde(rename = "esriFieldTypeDouble", alias = "double")]
    Double,
    #[serde(rename = "esriFieldTypeFloat", alias = "float")]
    Float,
    #[serde(rename = "esriFieldTypeSingle", alias = "single")]
    Single,
    #[serde(rename = "esriFieldTypeBlob", alias = "blob")]
    Blob,
    #[serde(rename = "esriFieldTypeGeometry", alias = "geometry")]
    Geometry,
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::String => "string",
            Self::SmallInteger => "small-integer",
            Self::Integer => "integer",
            Self::BigInteger => "big-integer",
            Self::ObjectId => "oid",
            Self::GlobalId => "global-id",
            Self::Guid => "guid",
            Self::Date => "date",
            Self::Double => "double",
            Self::Float => "float",
            Self::Single => "single",
            Self::Blob => "blob",
            Self::Geometry => "geometry",
        };
        f.write_str(name)
    }
}

/// One attribute column of a feature layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// String width in characters; absent for non-string types.
    #[serde(default)]
    pub length: Option<u32>,
    #[serde(default)]
    pub precision: Option<u32>,
    #[serde(default)]
    pub scale: Option<u32>,
    /// Human-readable alias from the service, unused in generation.
    #[serde(default)]
    pub alias: Option<String>,
}

impl FieldDescriptor {
    /// Create a descriptor with no length or precision.
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            length: None,
            precision: None,
            scale: None,
            alias: None,
        }
    }

    /// Set the string width.
    pub fn with_length(mut self, length: u32) -> Self {
        self.length = Some(length);
        self
    }
}

/// A feature layer's schema document, as returned by the service's JSON
/// endpoint. Only the name and field list are retained.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayerSchema {
    #[serde(default)]
    pub name: Option<String>,
    pub fields: Vec<FieldDescriptor>,
}

impl LayerSchema {
    /// Load a schema from JSON: either a full layer document or a bare
    /// array of field descriptors.
    pub fn from_json(json: &str) -> LayercastResult<Self> {
        if json.trim_start().starts_with('[') {
            let fields: Vec<FieldDescriptor> = serde_json::from_str(json)?;
            Ok(Self { name: None, fields })
        } else {
            Ok(serde_json::from_str(json)?)
        }
    }

    /// Field names in provider order, before any filtering.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }
}

/// Source of field descriptors for a layer.
///
/// The generation engine never talks to the network; implementations wrap
/// whatever service, file, or fixture holds the schema.
pub trait FieldSource {
    fn fetch_fields(&self, layer: &str) -> LayercastResult<Vec<FieldDescriptor>>;
}

/// A parsed schema document answers for any layer identifier; callers pair
/// one document with one layer.
impl FieldSource for LayerSchema {
    fn fetch_fields(&self, _layer: &str) -> LayercastResult<Vec<FieldDescriptor>> {
        Ok(self.fields.clone())
    }
}
