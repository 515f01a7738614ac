//! Which reference records are still free to hand out.
//!
//! A record is taken when any used name, case-folded, is a substring of the
//! record's canonical (romanized) name. The direction is deliberate and kept
//! as is: a short used name such as `Hera` also takes `Herakles`.

use rand::Rng;

use crate::errors::EmptyPoolError;
use crate::matcher::fold;
use crate::record::GodRecord;
use crate::reference::ReferenceTable;
use crate::used::UsedNameLog;

/// A randomly drawn available record with its position in the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suggestion<'a> {
    pub record: &'a GodRecord,
    /// 1-based position of `record` in the available pool.
    pub position: usize,
    pub pool_size: usize,
}

/// Availability view over a reference table and a used-name log.
#[derive(Debug, Clone, Copy)]
pub struct Availability<'a> {
    table: &'a ReferenceTable,
    used: &'a UsedNameLog,
}

impl<'a> Availability<'a> {
    #[must_use]
    pub const fn new(table: &'a ReferenceTable, used: &'a UsedNameLog) -> Self {
        Self { table, used }
    }

    /// `true` if some used name occurs inside the record's canonical name.
    #[must_use]
    pub fn is_taken(&self, record: &GodRecord) -> bool {
        let canonical = fold(record.canonical_name());
        self.used
            .iter()
            .any(|entry| canonical.contains(&fold(&entry.name)))
    }

    /// Lazily yield available records in table order. Each call starts a
    /// fresh scan.
    pub fn records(&self) -> impl Iterator<Item = &'a GodRecord> + use<'a> {
        let this = *self;
        self.table
            .iter()
            .filter(move |record| !this.is_taken(record))
    }

    /// Pick one available record uniformly at random.
    pub fn pick_random<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<Suggestion<'a>, EmptyPoolError> {
        let pool: Vec<&'a GodRecord> = self.records().collect();
        if pool.is_empty() {
            return Err(EmptyPoolError);
        }
        let index = rng.gen_range(0..pool.len());
        tracing::debug!(
            position = index + 1,
            pool_size = pool.len(),
            "random suggestion drawn"
        );
        Ok(Suggestion {
            record: pool[index],
            position: index + 1,
            pool_size: pool.len(),
        })
    }
}
