//! Assembler test modules, one per statement template.

mod bronze;

use crate::fields::{FieldDescriptor, FieldType};

/// A small parks-style layer used by the bronze and silver tests.
pub(crate) fn sample_fields() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::new("OBJECTID", FieldType::ObjectId),
        FieldDescriptor::new("PARK_NAME", FieldType::String).with_length(100),
        FieldDescriptor::new("X", FieldType::Double),
        FieldDescriptor::new("SIZE_", FieldType::String).with_length(50),
        FieldDescriptor::new("CREATED_DATE", FieldType::Date),
        FieldDescriptor::new("GLOBALID", FieldType::GlobalId),
        FieldDescriptor::new("SHAPE", FieldType::Geometry),
    ]
}
