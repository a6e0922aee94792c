//! Field normalization: ignore filtering and alias cleaning.

use std::collections::HashSet;

use crate::config::RenameRule;
use crate::fields::FieldDescriptor;

/// Drop ignored fields, preserving provider order.
pub fn normalize<'a>(
    fields: &'a [FieldDescriptor],
    ignore: &HashSet<String>,
) -> Vec<&'a FieldDescriptor> {
    fields.iter().filter(|f| !ignore.contains(&f.name)).collect()
}

/// Apply each rename rule in sequence (all occurrences), then uppercase.
///
/// Unmatched names pass through unchanged aside from case.
pub fn clean_name(name: &str, rules: &[RenameRule]) -> String {
    rules
        .iter()
        .fold(name.to_string(), |acc, rule| {
            acc.replace(&rule.from, &rule.to)
        })
        .to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayerProfile;
    use crate::fields::FieldType;

    fn field(name: &str) -> FieldDescriptor {
        FieldDescriptor::new(name, FieldType::String)
    }

    #[test]
    fn normalize_preserves_order_and_drops_ignored() {
        let fields = vec![field("OBJECTID"), field("X"), field("PARK_NAME")];
        let ignore: HashSet<String> = ["X".to_string()].into_iter().collect();
        let kept: Vec<&str> = normalize(&fields, &ignore)
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(kept, vec!["OBJECTID", "PARK_NAME"]);
    }

    #[test]
    fn clean_name_applies_renames_then_uppercases() {
        let rules = LayerProfile::parks().rename;
        assert_eq!(clean_name("SIZE_", &rules), "SIZE");
        assert_eq!(clean_name("CREATED_DATE", &rules), "CREATIONDATE");
        assert_eq!(clean_name("UPDATED_USER", &rules), "EDITOR");
        assert_eq!(clean_name("park_name", &rules), "PARK_NAME");
    }

    #[test]
    fn clean_name_is_idempotent_for_the_default_rules() {
        let rules = LayerProfile::parks().rename;
        for name in ["SIZE_", "CREATED_DATE", "UPDATED_DATE", "CREATED_USER", "OBJECTID"] {
            let once = clean_name(name, &rules);
            assert_eq!(clean_name(&once, &rules), once);
        }
    }
}
