use std::io::Write;
use std::path::Path;

use anyhow::Context;
use gods_core::format::{NOT_FOUND, info_lines};
use gods_core::{ReferenceTable, find_record};

/// Look up each query in order. Blank queries are skipped and misses are
/// reported inline.
pub fn run<I, Q>(table: &ReferenceTable, queries: I, out: &mut impl Write) -> anyhow::Result<()>
where
    I: IntoIterator<Item = Q>,
    Q: AsRef<str>,
{
    for query in queries {
        let query = query.as_ref().trim();
        if query.is_empty() {
            continue;
        }
        writeln!(out, "Input: {query}")?;
        match find_record(table, query) {
            Some(record) => {
                for line in info_lines(record) {
                    writeln!(out, "{line}")?;
                }
            }
            None => {
                tracing::debug!(query, "no record matched");
                writeln!(out, "{NOT_FOUND}")?;
            }
        }
    }
    Ok(())
}

/// Read newline-delimited queries from a batch file.
pub fn read_batch(path: &Path) -> anyhow::Result<Vec<String>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read batch file {}", path.display()))?;
    Ok(contents.lines().map(str::to_string).collect())
}

/// Print the usage hint for a malformed invocation.
pub fn usage(out: &mut impl Write, batch_suffix: &str) -> anyhow::Result<()> {
    writeln!(
        out,
        "no proper argument given. either input nothing, a single name or the path to a \
         text file (name ending with {batch_suffix}!) with names"
    )?;
    Ok(())
}
