//! layercast-core — feature-layer schemas in, warehouse T-SQL out.
//!
//! Given a layer's field descriptors and a [`config::LayerProfile`], the
//! engine emits the bronze landing-table DDL, the silver rebuild stored
//! procedure, and prefixed-alias projections for cross-source joins.
//! Everything is pure text generation; fetching schemas and executing SQL
//! belong to the caller.

pub mod assemble;
pub mod config;
pub mod engine;
pub mod error;
pub mod fields;
pub mod generate;
pub mod normalize;

pub use engine::{LayerScripter, LayerScripts};

pub mod prelude {
    pub use crate::config::{LayerProfile, RenameRule, SuffixColumn, SuffixProjection};
    pub use crate::engine::{LayerScripter, LayerScripts};
    pub use crate::error::{LayercastError, LayercastResult};
    pub use crate::fields::{FieldDescriptor, FieldSource, FieldType, LayerSchema};
    pub use crate::generate::ClauseMode;
}
