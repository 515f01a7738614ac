//! # gods-dialog
//!
//! A small, synchronous menu engine for line-oriented terminals.
//!
//! A menu is an [`ActionTable`] of single-key actions. [`run_menu`] reads one
//! line at a time, dispatches the matching handler and keeps looping until a
//! handler returns [`Flow::Exit`]. Handlers receive the [`Console`] and the
//! caller's state, so an action can open a nested menu; the parent loop
//! resumes when the nested one exits.
//!
//! Every invocation works on its own clone of the table. The `?` help action
//! and the optional `b` back action are added to that clone only.
//!
//! [`confirm_values`] builds on the menu loop to show a refreshed value set
//! and ask for confirmation until the user accepts or backs out.

mod action;
mod confirm;
mod console;
mod error;
mod menu;
mod values;

pub use action::{ActionTable, Flow, Handler, MenuAction};
pub use confirm::{Confirmation, confirm_values};
pub use console::Console;
pub use error::DialogError;
pub use menu::{BACK_KEY, HELP_KEY, MenuOptions, run_menu};
pub use values::{ConfirmableValues, prompt_values};
