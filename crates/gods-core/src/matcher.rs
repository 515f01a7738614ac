//! Free-text lookup against the reference table.
//!
//! Matching is case-insensitive substring containment of the query inside a
//! name field. It is permissive on purpose: `zeu` finds `Zeus`, and a short
//! query may hit an unrelated record first.

use crate::record::{Field, GodRecord};
use crate::reference::ReferenceTable;

/// Unicode default case folding used by every comparison in this crate.
/// Unlike lowercasing it is context-free, so final sigma folds to `σ`.
pub(crate) fn fold(value: &str) -> String {
    caseless::default_case_fold_str(value)
}

/// `true` if `needle` occurs in `haystack`, ignoring case.
#[must_use]
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    fold(haystack).contains(&fold(needle))
}

/// First record, in table order, with any name field containing `query`.
#[must_use]
pub fn find_record<'a>(table: &'a ReferenceTable, query: &str) -> Option<&'a GodRecord> {
    let query = fold(query);
    table.iter().find(|record| {
        Field::NAMES
            .into_iter()
            .any(|field| fold(record.get(field)).contains(&query))
    })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{contains_folded, find_record};
    use crate::record::GodRecord;
    use crate::reference::ReferenceTable;

    fn table() -> ReferenceTable {
        [
            GodRecord::from_cells(["Ζεύς", "Zeus", "Iuppiter", "Jupiter", "Tinia", "Amun", "Sky"]),
            GodRecord::from_cells(["Ἥρα", "Hera", "Iuno", "Juno", "Uni", "Mut", "Marriage"]),
            GodRecord::from_cells(["Ἡρακλῆς", "Herakles", "Hercules", "", "Hercle", "", "Hero"]),
        ]
        .into_iter()
        .collect()
    }

    #[rstest]
    #[case("zeu", "Zeus")]
    #[case("JUPITER", "Zeus")]
    #[case("ζεύς", "Zeus")]
    #[case("σ", "Zeus")]
    #[case("ΖΕΎΣ", "Zeus")]
    #[case("Mut", "Hera")]
    #[case("hercle", "Herakles")]
    fn finds_by_any_name_field(#[case] query: &str, #[case] expected: &str) {
        let table = table();
        let found = find_record(&table, query).expect("query should match");
        assert_eq!(found.canonical_name(), expected);
    }

    #[test]
    fn first_match_in_table_order_wins() {
        let table = table();
        // "her" is inside both Hera and Herakles.
        let found = find_record(&table, "her").expect("query should match");
        assert_eq!(found.canonical_name(), "Hera");
    }

    #[test]
    fn description_is_not_searched() {
        let table = table();
        assert!(find_record(&table, "marriage").is_none());
    }

    #[test]
    fn miss_returns_none() {
        let table = table();
        assert!(find_record(&table, "Odin").is_none());
        assert!(find_record(&ReferenceTable::default(), "Zeus").is_none());
    }

    #[test]
    fn matched_record_contains_query_in_a_name_field() {
        let table = table();
        for query in ["e", "u", "ra", "ni", "cle"] {
            if let Some(record) = find_record(&table, query) {
                assert!(
                    crate::record::Field::NAMES
                        .into_iter()
                        .any(|field| contains_folded(record.get(field), query)),
                    "{query} matched a record without containing it"
                );
            }
        }
    }
}
