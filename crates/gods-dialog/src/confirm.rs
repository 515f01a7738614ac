use crate::action::{ActionTable, Flow};
use crate::console::Console;
use crate::error::DialogError;
use crate::menu::{MenuOptions, run_menu};
use crate::values::ConfirmableValues;

/// How a confirmation dialog ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    /// The user accepted the values shown last.
    Accepted,
    /// The user left the dialog with the back key.
    Abandoned,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Answer {
    Yes,
    Retry,
    Back,
}

/// Refresh `values`, show them, and ask whether they are correct.
///
/// Answering `n` refreshes and asks again with no retry limit, so the loop
/// only ends on `y`, on `b`, or when `refresh` fails. A refresh error is
/// returned as is and never retried.
pub fn confirm_values<S, E, F>(
    console: &mut Console<'_>,
    state: &mut S,
    name: &str,
    values: &mut ConfirmableValues,
    mut refresh: F,
) -> Result<Confirmation, E>
where
    S: 'static,
    E: From<DialogError>,
    F: FnMut(&mut S, &mut ConfirmableValues) -> Result<(), E>,
{
    let answers = ActionTable::<S, Answer>::new()
        .action("y", "yes", |_, _| Ok(Flow::Exit(Answer::Yes)))
        .action("n", "no, try again", |_, _| Ok(Flow::Exit(Answer::Retry)));
    let menu_name = format!("{name}/Confirm");

    let mut attempt = 0_u32;
    loop {
        attempt += 1;
        refresh(state, values)?;

        console.line(format_args!(
            "({name}) Please confirm the following values:"
        ))?;
        for (field, value) in values.iter() {
            console.line(format_args!("{field}: {value}"))?;
        }
        console.line("Are these values correct?")?;

        match run_menu(
            console,
            state,
            &menu_name,
            &answers,
            MenuOptions::with_back(Answer::Back),
        )? {
            Answer::Yes => return Ok(Confirmation::Accepted),
            Answer::Back => return Ok(Confirmation::Abandoned),
            Answer::Retry => {
                tracing::debug!(menu = name, attempt, "values rejected, refreshing");
            }
        }
    }
}
