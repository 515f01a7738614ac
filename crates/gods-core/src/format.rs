//! Plain-text rendering of records and log entries.

use crate::record::{Field, GodRecord};
use crate::used::UsedNameEntry;

/// Printed when a lookup finds nothing.
pub const NOT_FOUND: &str = "No information available. :(";

/// Header printed before annotated used-name listings.
pub const USED_HEADER: &str = "Name\tAnnotation";

/// Info block for one record: a name line, a blank line, then one
/// `Label: value` line per non-empty field from the first alternative name on.
#[must_use]
pub fn info_lines(record: &GodRecord) -> Vec<String> {
    let mut lines = vec![
        format!(
            "Name: {} ({})",
            record.primary_name_romanized, record.primary_name
        ),
        String::new(),
    ];
    lines.extend(Field::ALL[2..].iter().filter_map(|&field| {
        let value = record.get(field).trim();
        (!value.is_empty()).then(|| format!("{}: {value}", field.label()))
    }));
    lines
}

/// One line of the available-names listing.
#[must_use]
pub fn available_line(record: &GodRecord) -> String {
    format!(
        "\"{}\", \"{}\": {}",
        record.primary_name_romanized.trim(),
        record.alt_name1.trim(),
        record.description.trim()
    )
}

/// One line of the used-names listing, optionally with its annotation.
#[must_use]
pub fn used_line(entry: &UsedNameEntry, with_annotation: bool) -> String {
    let name = entry.name.trim();
    if with_annotation {
        format!("{name}\t{}", entry.annotation())
    } else {
        name.to_string()
    }
}
