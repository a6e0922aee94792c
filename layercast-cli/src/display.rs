//! Table rendering for schema inspection.

use comfy_table::{Cell, ContentArrangement, Table, presets::UTF8_FULL};
use layercast_core::fields::FieldDescriptor;

/// Render field descriptors as a terminal table.
pub fn fields_table(fields: &[FieldDescriptor]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Name", "Type", "Length", "Alias"]);

    for field in fields {
        table.add_row(vec![
            Cell::new(&field.name),
            Cell::new(field.field_type),
            Cell::new(
                field
                    .length
                    .map(|l| l.to_string())
                    .unwrap_or_default(),
            ),
            Cell::new(field.alias.as_deref().unwrap_or("")),
        ]);
    }
    table
}
