//! The used-name log: names already handed out, with free-form annotations.

use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::Path;

use crate::errors::DataLoadError;
use crate::reference::{Loaded, read_rows};

/// One row of the log: the name taken plus annotation tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsedNameEntry {
    pub name: String,
    pub annotations: Vec<String>,
}

impl UsedNameEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            annotations: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_annotations<I, S>(mut self, annotations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.annotations = annotations.into_iter().map(Into::into).collect();
        self
    }

    /// Build an entry from a raw row. Rows whose first cell is blank carry no
    /// name and are rejected.
    pub fn from_cells<I, S>(cells: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut cells = cells.into_iter().map(Into::into);
        let name: String = cells.next()?;
        if name.trim().is_empty() {
            return None;
        }
        Some(Self {
            name,
            annotations: cells.collect(),
        })
    }

    /// Annotation tokens joined by single spaces.
    #[must_use]
    pub fn annotation(&self) -> String {
        self.annotations.join(" ")
    }
}

/// In-memory used-name log, in load order followed by session appends.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsedNameLog {
    entries: Vec<UsedNameEntry>,
}

impl UsedNameLog {
    #[must_use]
    pub const fn new(entries: Vec<UsedNameEntry>) -> Self {
        Self { entries }
    }

    /// Load the log from a file. A missing file yields an empty log and one
    /// [`DataLoadError::Io`].
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

    pub fn from_reader<R: Read>(reader: R) -> Loaded<Self> {
        let mut entries = Vec::new();
        let mut errors = Vec::new();
        read_rows(reader, &mut errors, |row| {
            if let Some(entry) = UsedNameEntry::from_cells(row.iter()) {
                entries.push(entry);
            }
        });
        tracing::debug!(
            entries = entries.len(),
            errors = errors.len(),
            "loaded used-name log"
        );
        Loaded {
            value: Self { entries },
            errors,
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[UsedNameEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, UsedNameEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record a name in memory only.
    pub fn push(&mut self, entry: UsedNameEntry) {
        self.entries.push(entry);
    }

    /// Record a name in memory and append it to the log file at `path`.
    ///
    /// The in-memory entry is kept even when the file append fails.
    pub fn record(&mut self, entry: UsedNameEntry, path: &Path) -> Result<(), DataLoadError> {
        let appended = append_entry(path, &entry);
        self.entries.push(entry);
        appended
    }
}

impl<'a> IntoIterator for &'a UsedNameLog {
    type Item = &'a UsedNameEntry;
    type IntoIter = std::slice::Iter<'a, UsedNameEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

fn append_entry(path: &Path, entry: &UsedNameEntry) -> Result<(), DataLoadError> {
    let io_error = |source| DataLoadError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut file = OpenOptions::new()
        .create(true)
        .read(true)
        .append(true)
        .open(path)
        .map_err(io_error)?;
    terminate_last_row(&mut file).map_err(io_error)?;

    let append_error = |source| DataLoadError::Append {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .flexible(true)
        .from_writer(file);
    let row = std::iter::once(entry.name.as_str())
        .chain(entry.annotations.iter().map(String::as_str));
    writer.write_record(row).map_err(append_error)?;
    writer
        .flush()
        .map_err(|source| append_error(csv::Error::from(source)))?;
    Ok(())
}

/// Make sure the next append starts on a fresh line, even when the file was
/// last edited by hand and lacks a trailing newline.
fn terminate_last_row(file: &mut File) -> io::Result<()> {
    let len = file.metadata()?.len();
    if len == 0 {
        return Ok(());
    }
    let mut last = [0_u8; 1];
    file.seek(SeekFrom::Start(len - 1))?;
    file.read_exact(&mut last)?;
    if last[0] != b'\n' {
        file.write_all(b"\n")?;
    }
    Ok(())
}
