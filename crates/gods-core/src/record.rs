use std::fmt;

// ---------------------------------------------------------------------------
// Field
// ---------------------------------------------------------------------------

/// Column of the reference table, in file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    PrimaryName,
    PrimaryNameRomanized,
    AltName1,
    AltName1Anglicized,
    AltName2,
    AltName3,
    Description,
}

impl Field {
    /// All columns in file order.
    pub const ALL: [Self; 7] = [
        Self::PrimaryName,
        Self::PrimaryNameRomanized,
        Self::AltName1,
        Self::AltName1Anglicized,
        Self::AltName2,
        Self::AltName3,
        Self::Description,
    ];

    /// Columns that carry a name. Everything except the description.
    pub const NAMES: [Self; 6] = [
        Self::PrimaryName,
        Self::PrimaryNameRomanized,
        Self::AltName1,
        Self::AltName1Anglicized,
        Self::AltName2,
        Self::AltName3,
    ];

    /// Human-readable column label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PrimaryName => "Greek",
            Self::PrimaryNameRomanized => "Greek Romanized",
            Self::AltName1 => "Roman",
            Self::AltName1Anglicized => "Roman Anglicized",
            Self::AltName2 => "Etruscan",
            Self::AltName3 => "Egyptian",
            Self::Description => "Description",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// GodRecord
// ---------------------------------------------------------------------------

/// One row of the reference table.
///
/// Every field is a string. Cells missing from the source row are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GodRecord {
    pub primary_name: String,
    pub primary_name_romanized: String,
    pub alt_name1: String,
    pub alt_name1_anglicized: String,
    pub alt_name2: String,
    pub alt_name3: String,
    pub description: String,
}

impl GodRecord {
    /// Build a record from positional cells, padding absent trailing cells
    /// with empty strings and ignoring any extra cells.
    pub fn from_cells<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut record = Self::default();
        for (field, cell) in Field::ALL.into_iter().zip(cells) {
            *record.get_mut(field) = cell.into();
        }
        record
    }

    /// Value of one column.
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::PrimaryName => &self.primary_name,
            Field::PrimaryNameRomanized => &self.primary_name_romanized,
            Field::AltName1 => &self.alt_name1,
            Field::AltName1Anglicized => &self.alt_name1_anglicized,
            Field::AltName2 => &self.alt_name2,
            Field::AltName3 => &self.alt_name3,
            Field::Description => &self.description,
        }
    }

    fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::PrimaryName => &mut self.primary_name,
            Field::PrimaryNameRomanized => &mut self.primary_name_romanized,
            Field::AltName1 => &mut self.alt_name1,
            Field::AltName1Anglicized => &mut self.alt_name1_anglicized,
            Field::AltName2 => &mut self.alt_name2,
            Field::AltName3 => &mut self.alt_name3,
            Field::Description => &mut self.description,
        }
    }

    /// The canonical name used for availability checks.
    #[must_use]
    pub fn canonical_name(&self) -> &str {
        &self.primary_name_romanized
    }

    /// `(label, value)` pairs for every column, in file order.
    pub fn labelled(&self) -> impl Iterator<Item = (&'static str, &str)> {
        Field::ALL
            .into_iter()
            .map(move |field| (field.label(), self.get(field)))
    }
}
