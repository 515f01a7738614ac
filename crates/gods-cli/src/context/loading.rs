use std::io::Write;
use std::path::Path;

use gods_core::{DataLoadError, Loaded, ReferenceTable, UsedNameLog};

/// Load the reference table, reporting problems to `out` and the log.
pub fn load_reference(path: &Path, out: &mut impl Write) -> std::io::Result<ReferenceTable> {
    report(path, ReferenceTable::load(path), out)
}

/// Load the used-name log, reporting problems to `out` and the log.
pub fn load_used_log(path: &Path, out: &mut impl Write) -> std::io::Result<UsedNameLog> {
    report(path, UsedNameLog::load(path), out)
}

fn report<T>(path: &Path, loaded: Loaded<T>, out: &mut impl Write) -> std::io::Result<T> {
    let (value, errors) = loaded.into_parts();
    for error in &errors {
        tracing::warn!(path = %path.display(), %error, "data load error");
        writeln!(out, "{}", describe(path, error))?;
    }
    Ok(value)
}

fn describe(path: &Path, error: &DataLoadError) -> String {
    format!("Error reading {}: {error}", path.display())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::{load_reference, load_used_log};

    #[test]
    fn missing_files_are_reported_not_fatal() {
        let temp = TempDir::new().expect("tempdir should create");
        let mut out = Vec::new();

        let table = load_reference(&temp.path().join("godinfos.csv"), &mut out)
            .expect("report should write");
        let used = load_used_log(&temp.path().join("used_names.csv"), &mut out)
            .expect("report should write");

        assert!(table.is_empty());
        assert!(used.is_empty());
        let out = String::from_utf8(out).expect("utf8");
        assert_eq!(out.lines().count(), 2);
        assert!(out.lines().all(|line| line.starts_with("Error reading ")));
        for name in ["godinfos.csv", "used_names.csv"] {
            assert_eq!(out.matches(name).count(), 1, "path repeated in:\n{out}");
        }
    }

    #[test]
    fn clean_load_prints_nothing() {
        let temp = TempDir::new().expect("tempdir should create");
        let path = temp.path().join("godinfos.csv");
        std::fs::write(&path, "Ζεύς\tZeus\n").expect("fixture should write");

        let mut out = Vec::new();
        let table = load_reference(&path, &mut out).expect("report should write");

        assert_eq!(table.len(), 1);
        assert!(out.is_empty());
    }
}
