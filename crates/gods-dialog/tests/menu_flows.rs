//! Menu and confirmation flows driven through an in-memory console.

use std::io::Cursor;

use gods_dialog::{
    ActionTable, Confirmation, ConfirmableValues, Console, DialogError, Flow, MenuOptions,
    confirm_values, run_menu,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[derive(Debug, Default)]
struct Counters {
    main: usize,
    sub: usize,
    shadowed_help: usize,
    refreshes: usize,
}

fn drive<T>(
    input: &str,
    state: &mut Counters,
    body: impl FnOnce(&mut Console<'_>, &mut Counters) -> T,
) -> (T, String) {
    let mut out = Vec::new();
    let result = {
        let mut console = Console::new(Cursor::new(input.to_string()), &mut out);
        body(&mut console, state)
    };
    (result, String::from_utf8(out).expect("utf8 output"))
}

fn sub_table() -> ActionTable<Counters, bool> {
    ActionTable::new()
        .action("?", "caller help that must never run", |_, s: &mut Counters| {
            s.shadowed_help += 1;
            Ok(Flow::Continue)
        })
        .action("x", "count", |_, s: &mut Counters| {
            s.sub += 1;
            Ok(Flow::Continue)
        })
}

fn main_table() -> ActionTable<Counters, ()> {
    let sub = sub_table();
    ActionTable::new()
        .action("c", "count", |_, s: &mut Counters| {
            s.main += 1;
            Ok(Flow::Continue)
        })
        .action("s", "submenu", move |console, s: &mut Counters| {
            run_menu(console, s, "Sub", &sub, MenuOptions::with_back(false))?;
            Ok(Flow::Continue)
        })
        .action("q", "quit", |_, _| Ok(Flow::Exit(())))
}

#[test]
fn help_then_back_exits_submenu_without_running_caller_help() {
    let mut state = Counters::default();
    let (result, out) = drive("?\nb\nleftover\n", &mut state, |console, s| {
        run_menu(console, s, "Sub", &sub_table(), MenuOptions::with_back(true))
    });

    assert!(result.expect("submenu should exit"));
    assert_eq!(state.shadowed_help, 0);
    assert!(out.contains("Menu \"Sub\""));
    assert!(out.contains("?\tshow this help"));
    assert!(!out.contains("caller help"));
}

#[rstest]
#[case("\nq\n")]
#[case("   \n\t\nq\n")]
#[case("\n\n\n\nq\n")]
fn empty_lines_are_ignored_silently(#[case] input: &str) {
    let mut state = Counters::default();
    let (result, out) = drive(input, &mut state, |console, s| {
        run_menu(console, s, "Main", &main_table(), MenuOptions::without_back())
    });

    result.expect("menu should exit");
    assert!(!out.contains("unrecognised"));
}

#[test]
fn unknown_key_reprompts() {
    let mut state = Counters::default();
    let (result, out) = drive("Q\nzz\nc\nq\n", &mut state, |console, s| {
        run_menu(console, s, "Main", &main_table(), MenuOptions::without_back())
    });

    result.expect("menu should exit");
    assert_eq!(state.main, 1);
    assert_eq!(
        out.matches("(Main) unrecognised action, try again. Type ? for help")
            .count(),
        2
    );
}

#[test]
fn nested_menu_resumes_parent() {
    let mut state = Counters::default();
    let (result, out) = drive("c\ns\nx\nx\nb\nc\ns\nb\nq\n", &mut state, |console, s| {
        run_menu(console, s, "Main", &main_table(), MenuOptions::without_back())
    });

    result.expect("menu should exit");
    assert_eq!(state.main, 2);
    assert_eq!(state.sub, 2);
    assert_eq!(out.matches("(Sub) What would you like to do?").count(), 2);
    assert_eq!(out.matches("(Main) What would you like to do?").count(), 1);
}

#[test]
fn closed_input_inside_submenu_propagates() {
    let mut state = Counters::default();
    let (result, _) = drive("s\nx\n", &mut state, |console, s| {
        run_menu(console, s, "Main", &main_table(), MenuOptions::without_back())
    });

    assert!(matches!(result, Err(DialogError::InputClosed)));
    assert_eq!(state.sub, 1);
}

fn counting_refresh(
    state: &mut Counters,
    values: &mut ConfirmableValues,
) -> Result<(), DialogError> {
    state.refreshes += 1;
    values.clear();
    values.insert("Attempt", state.refreshes.to_string());
    Ok(())
}

#[test]
fn confirm_retries_until_accepted() {
    let mut state = Counters::default();
    let mut values = ConfirmableValues::new();
    let (result, out) = drive("n\nn\ny\n", &mut state, |console, s| {
        confirm_values(console, s, "random suggestion", &mut values, counting_refresh)
    });

    assert_eq!(result.expect("confirm should end"), Confirmation::Accepted);
    assert_eq!(state.refreshes, 3);
    assert_eq!(values.get("Attempt"), Some("3"));
    assert!(out.contains("(random suggestion/Confirm) > "));
    assert_eq!(out.matches("Are these values correct?").count(), 3);
}

#[test]
fn confirm_back_abandons() {
    let mut state = Counters::default();
    let mut values = ConfirmableValues::new();
    let (result, _) = drive("?\nb\n", &mut state, |console, s| {
        confirm_values(console, s, "random suggestion", &mut values, counting_refresh)
    });

    assert_eq!(result.expect("confirm should end"), Confirmation::Abandoned);
    assert_eq!(state.refreshes, 1);
}

#[derive(Debug)]
enum RefreshError {
    Exhausted,
    Dialog(DialogError),
}

impl From<DialogError> for RefreshError {
    fn from(error: DialogError) -> Self {
        Self::Dialog(error)
    }
}

#[test]
fn confirm_surfaces_refresh_failure_without_reading_input() {
    let mut state = Counters::default();
    let mut values = ConfirmableValues::new();
    let (result, out) = drive("y\n", &mut state, |console, s| {
        confirm_values(console, s, "random suggestion", &mut values, |_, _| {
            Err(RefreshError::Exhausted)
        })
    });

    assert!(matches!(result, Err(RefreshError::Exhausted)));
    assert!(out.is_empty());
}

#[test]
fn confirm_reports_closed_input_as_dialog_error() {
    let mut state = Counters::default();
    let mut values = ConfirmableValues::new();
    let (result, _) = drive("n\n", &mut state, |console, s| {
        confirm_values(console, s, "random suggestion", &mut values, |s, v| {
            counting_refresh(s, v).map_err(RefreshError::from)
        })
    });

    assert!(matches!(
        result,
        Err(RefreshError::Dialog(DialogError::InputClosed))
    ));
    assert_eq!(state.refreshes, 2);
}
