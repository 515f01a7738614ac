//! # gods-core
//!
//! Data model and lookup engine for the `gods` name picker.
//!
//! This crate owns everything that is not interactive:
//! - `GodRecord` and the field layout of the reference table
//! - Loading the tab-separated reference table and used-name log
//! - Substring matching of free-text queries against name fields
//! - Availability of names that do not appear in the used-name log
//! - Plain-text rendering of records and log entries
//!
//! State is explicit: callers build a [`ReferenceTable`] and a [`UsedNameLog`]
//! once and hand references to the functions that need them.

pub mod availability;
pub mod errors;
pub mod format;
pub mod matcher;
pub mod record;
pub mod reference;
pub mod used;

pub use availability::{Availability, Suggestion};
pub use errors::{DataLoadError, EmptyPoolError};
pub use matcher::find_record;
pub use record::{Field, GodRecord};
pub use reference::{Loaded, ReferenceTable};
pub use used::{UsedNameEntry, UsedNameLog};
