//! Interactive menus: browsing the used-name log and picking new names.

use gods_core::format::{USED_HEADER, available_line, info_lines, used_line};
use gods_core::{Availability, EmptyPoolError, Field, UsedNameEntry};
use gods_dialog::{
    ActionTable, Confirmation, ConfirmableValues, Console, DialogError, Flow, MenuOptions,
    confirm_values, prompt_values, run_menu,
};
use thiserror::Error;

use crate::context::Session;

pub const MAIN_MENU: &str = "Main";
pub const PICK_NAME_MENU: &str = "Pick Name";
pub const EDIT_USED_MENU: &str = "Edit Used";
const SUGGESTION_DIALOG: &str = "random suggestion";
const ANNOTATION_FIELD: &str = "Annotation";

type Actions = ActionTable<Session, ()>;

/// Run the top-level menu until the user quits.
pub fn run(console: &mut Console<'_>, session: &mut Session) -> Result<(), DialogError> {
    run_menu(
        console,
        session,
        MAIN_MENU,
        &main_actions(),
        MenuOptions::without_back(),
    )
}

fn main_actions() -> Actions {
    let pick_name = pick_name_actions();
    let edit_used = edit_used_actions();

    ActionTable::new()
        .action("u", "Print used names", |console, session: &mut Session| {
            print_used_names(console, session, false)
        })
        .action(
            "p",
            "get used names + associated system info",
            |console, session: &mut Session| print_used_names(console, session, true),
        )
        .action("a", "print available names", print_available_names)
        .action("x", "print a random entry of the reference table", print_random_entry)
        .action(
            "n",
            "pick a new name and add it to the use list",
            move |console, session: &mut Session| {
                run_menu(
                    console,
                    session,
                    PICK_NAME_MENU,
                    &pick_name,
                    MenuOptions::with_back(()),
                )?;
                Ok(Flow::Continue)
            },
        )
        .action(
            "e",
            "DUMMY edit or delete an entry in the used name list",
            move |console, session: &mut Session| {
                run_menu(
                    console,
                    session,
                    EDIT_USED_MENU,
                    &edit_used,
                    MenuOptions::with_back(()),
                )?;
                Ok(Flow::Continue)
            },
        )
        .action("q", "quit", |_, _| Ok(Flow::Exit(())))
}

fn pick_name_actions() -> Actions {
    ActionTable::new().action(
        "r",
        "get a random suggestion for a name",
        suggest_random_name,
    )
}

/// Editing the log is not supported yet; the menu only offers help and back.
fn edit_used_actions() -> Actions {
    ActionTable::new()
}

fn print_used_names(
    console: &mut Console<'_>,
    session: &mut Session,
    with_annotation: bool,
) -> Result<Flow<()>, DialogError> {
    if with_annotation {
        console.line("")?;
        console.line(USED_HEADER)?;
    }
    console.lines(session.used.iter().map(|entry| used_line(entry, with_annotation)))?;
    Ok(Flow::Continue)
}

fn print_available_names(
    console: &mut Console<'_>,
    session: &mut Session,
) -> Result<Flow<()>, DialogError> {
    console.lines(session.availability().records().map(available_line))?;
    Ok(Flow::Continue)
}

fn print_random_entry(
    console: &mut Console<'_>,
    session: &mut Session,
) -> Result<Flow<()>, DialogError> {
    match session.table.pick_random(&mut session.rng) {
        Some((position, record)) => {
            console.line(format_args!("Selecting random god #{position}:"))?;
            console.lines(info_lines(record))?;
        }
        None => console.line("The reference table is empty.")?,
    }
    Ok(Flow::Continue)
}

#[derive(Debug, Error)]
enum SuggestionError {
    #[error(transparent)]
    EmptyPool(#[from] EmptyPoolError),
    #[error(transparent)]
    Dialog(#[from] DialogError),
}

fn suggest_random_name(
    console: &mut Console<'_>,
    session: &mut Session,
) -> Result<Flow<()>, DialogError> {
    let mut values = ConfirmableValues::new();
    match confirm_values(
        console,
        session,
        SUGGESTION_DIALOG,
        &mut values,
        fill_random_suggestion,
    ) {
        Ok(Confirmation::Accepted) => record_accepted(console, session, &values)?,
        Ok(Confirmation::Abandoned) => {}
        Err(SuggestionError::EmptyPool(error)) => {
            tracing::info!("suggestion pool is empty");
            console.line(error)?;
        }
        Err(SuggestionError::Dialog(error)) => return Err(error),
    }
    Ok(Flow::Continue)
}

fn fill_random_suggestion(
    session: &mut Session,
    values: &mut ConfirmableValues,
) -> Result<(), SuggestionError> {
    values.clear();
    let suggestion =
        Availability::new(&session.table, &session.used).pick_random(&mut session.rng)?;
    tracing::debug!(
        "Random suggestion: #{} out of {} available",
        suggestion.position,
        suggestion.pool_size
    );
    for (label, value) in suggestion.record.labelled() {
        values.insert(label, value);
    }
    Ok(())
}

/// Ask for an annotation and append the accepted name to the log.
fn record_accepted(
    console: &mut Console<'_>,
    session: &mut Session,
    values: &ConfirmableValues,
) -> Result<(), DialogError> {
    let name = values
        .get(Field::PrimaryNameRomanized.label())
        .unwrap_or_default()
        .trim()
        .to_string();
    if name.is_empty() {
        console.line("The suggestion has no romanized name; nothing recorded.")?;
        return Ok(());
    }

    let mut details = ConfirmableValues::with_fields([ANNOTATION_FIELD]);
    prompt_values(console, PICK_NAME_MENU, &mut details)?;
    let annotations = details
        .get(ANNOTATION_FIELD)
        .unwrap_or_default()
        .split_whitespace()
        .map(str::to_string)
        .collect::<Vec<_>>();

    let entry = UsedNameEntry::new(name.clone()).with_annotations(annotations);
    match session.used.record(entry, &session.used_log_path) {
        Ok(()) => {
            tracing::info!(
                name = %name,
                path = %session.used_log_path.display(),
                "recorded used name"
            );
            console.line(format_args!("Recorded {name}."))?;
        }
        Err(error) => {
            tracing::warn!(%error, "failed to append used name");
            console.line(format_args!(
                "Recorded {name} for this session only. Error writing {}: {error}",
                session.used_log_path.display()
            ))?;
        }
    }
    Ok(())
}
