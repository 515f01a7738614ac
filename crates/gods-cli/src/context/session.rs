use std::path::PathBuf;

use gods_core::{Availability, ReferenceTable, UsedNameLog};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// State shared by every action of an interactive session.
#[derive(Debug)]
pub struct Session {
    pub table: ReferenceTable,
    pub used: UsedNameLog,
    /// Where accepted names are appended.
    pub used_log_path: PathBuf,
    pub rng: StdRng,
}

impl Session {
    #[must_use]
    pub fn new(table: ReferenceTable, used: UsedNameLog, used_log_path: PathBuf) -> Self {
        Self::with_rng(table, used, used_log_path, StdRng::from_entropy())
    }

    #[must_use]
    pub const fn with_rng(
        table: ReferenceTable,
        used: UsedNameLog,
        used_log_path: PathBuf,
        rng: StdRng,
    ) -> Self {
        Self {
            table,
            used,
            used_log_path,
            rng,
        }
    }

    #[must_use]
    pub const fn availability(&self) -> Availability<'_> {
        Availability::new(&self.table, &self.used)
    }
}
