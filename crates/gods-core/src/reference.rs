//! Reference table loading.
//!
//! The source is tab-separated with no header row and seven positional
//! columns (see [`Field::ALL`](crate::record::Field::ALL)). Short rows are
//! padded, malformed rows are skipped and reported, and loading never aborts.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use rand::Rng;

use crate::errors::DataLoadError;
use crate::record::GodRecord;

/// A value produced by a lossy loader together with everything that went
/// wrong while producing it.
#[derive(Debug)]
pub struct Loaded<T> {
    pub value: T,
    pub errors: Vec<DataLoadError>,
}

impl<T> Loaded<T> {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Split into the loaded value and the collected errors.
    pub fn into_parts(self) -> (T, Vec<DataLoadError>) {
        (self.value, self.errors)
    }
}

/// Build a reader for the tab-separated, header-less, variable-width files
/// both tables are stored in.
pub(crate) fn tsv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .from_reader(reader)
}

/// Convert a csv row failure into a load error.
pub(crate) fn row_error(source: csv::Error) -> DataLoadError {
    DataLoadError::Row {
        line: source.position().map(csv::Position::line),
        source,
    }
}

/// Read rows, pushing per-row failures into `errors`. An I/O failure ends the
/// scan.
pub(crate) fn read_rows<R, F>(reader: R, errors: &mut Vec<DataLoadError>, mut on_row: F)
where
    R: Read,
    F: FnMut(&csv::StringRecord),
{
    for result in tsv_reader(reader).records() {
        match result {
            Ok(row) => on_row(&row),
            Err(error) => {
                let fatal = error.is_io_error();
                errors.push(row_error(error));
                if fatal {
                    break;
                }
            }
        }
    }
}

/// Row cells with ASCII spaces directly after each delimiter removed. The
/// first cell and any other leading whitespace are left alone.
fn skip_initial_spaces(row: &csv::StringRecord) -> impl Iterator<Item = &str> {
    row.iter()
        .enumerate()
        .map(|(index, cell)| {
            if index == 0 {
                cell
            } else {
                cell.trim_start_matches(' ')
            }
        })
}

/// Immutable catalog of candidate names, in load order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceTable {
    records: Vec<GodRecord>,
}

impl ReferenceTable {
    #[must_use]
    pub const fn new(records: Vec<GodRecord>) -> Self {
        Self { records }
    }

    /// Load the table from a file. A missing or unreadable file yields an
    /// empty table and one [`DataLoadError::Io`].
    pub fn load(path: &Path) -> Loaded<Self> {
        match File::open(path) {
            Ok(file) => Self::from_reader(file),
            Err(source) => Loaded {
                value: Self::default(),
                errors: vec![DataLoadError::Io {
                    path: path.to_path_buf(),
                    source,
                }],
            },
        }
    }

    /// Parse the table from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Loaded<Self> {
        let mut records = Vec::new();
        let mut errors = Vec::new();
        read_rows(reader, &mut errors, |row| {
            records.push(GodRecord::from_cells(skip_initial_spaces(row)));
        });
        tracing::debug!(
            records = records.len(),
            errors = errors.len(),
            "loaded reference table"
        );
        Loaded {
            value: Self { records },
            errors,
        }
    }

    #[must_use]
    pub fn records(&self) -> &[GodRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GodRecord> {
        self.records.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Pick any record uniformly at random, returning its 1-based position.
    pub fn pick_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<(usize, &GodRecord)> {
        if self.records.is_empty() {
            return None;
        }
        let index = rng.gen_range(0..self.records.len());
        Some((index + 1, &self.records[index]))
    }
}

impl<'a> IntoIterator for &'a ReferenceTable {
    type Item = &'a GodRecord;
    type IntoIter = std::slice::Iter<'a, GodRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<GodRecord> for ReferenceTable {
    fn from_iter<I: IntoIterator<Item = GodRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
