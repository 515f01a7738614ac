use crate::action::{ActionTable, Flow};
use crate::console::Console;
use crate::error::DialogError;

/// Key that prints the help listing in every menu.
pub const HELP_KEY: &str = "?";
/// Key that leaves the current menu when the back option is enabled.
pub const BACK_KEY: &str = "b";

/// Per-invocation menu settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuOptions<T> {
    back: Option<T>,
}

impl<T> MenuOptions<T> {
    /// Add a `b` action that leaves the menu returning `value`.
    pub const fn with_back(value: T) -> Self {
        Self { back: Some(value) }
    }

    /// Top-level menus: no `b` action, only a handler can exit.
    pub const fn without_back() -> Self {
        Self { back: None }
    }
}

/// Run a menu until one of its actions exits, returning the exit value.
///
/// `template` is cloned and the clone gets the `?` help action plus, when
/// enabled, the `b` back action. Those replace any caller actions bound to
/// the same keys. Unknown input is reported and the loop continues; empty
/// input is ignored. Only console failures end the loop with an error.
pub fn run_menu<S, T>(
    console: &mut Console<'_>,
    state: &mut S,
    name: &str,
    template: &ActionTable<S, T>,
    options: MenuOptions<T>,
) -> Result<T, DialogError>
where
    S: 'static,
    T: Clone + 'static,
{
    let actions = augment(name, template, options);
    tracing::debug!(menu = name, actions = actions.len(), "entering menu");

    console.line(format_args!(
        "({name}) What would you like to do? Press \"{HELP_KEY}\" to show available actions"
    ))?;

    loop {
        console.prompt(format_args!("({name}) > "))?;
        let input = console.read_line()?;

        let Some(action) = actions.get(&input) else {
            if !input.is_empty() {
                console.line(format_args!(
                    "({name}) unrecognised action, try again. Type {HELP_KEY} for help"
                ))?;
            }
            continue;
        };

        tracing::trace!(menu = name, key = %input, "dispatching action");
        match (action.handler)(console, state)? {
            Flow::Continue => console.flush()?,
            Flow::Exit(value) => {
                tracing::debug!(menu = name, "leaving menu");
                return Ok(value);
            }
        }
    }
}

/// Clone `template` and add the help and back actions to the clone.
fn augment<S, T>(
    name: &str,
    template: &ActionTable<S, T>,
    options: MenuOptions<T>,
) -> ActionTable<S, T>
where
    S: 'static,
    T: Clone + 'static,
{
    let mut actions = template.clone();
    actions.insert(HELP_KEY, "show this help", |_, _| Ok(Flow::Continue));
    if let Some(value) = options.back {
        actions.insert(BACK_KEY, "exit this menu", move |_, _| {
            Ok(Flow::Exit(value.clone()))
        });
    }

    // The listing is taken after both insertions so help describes itself.
    let listing: Vec<(String, String)> = actions
        .listing()
        .map(|(key, description)| (key.to_string(), description.to_string()))
        .collect();
    let menu_name = name.to_string();
    actions.insert(HELP_KEY, "show this help", move |console, _| {
        print_help(console, &menu_name, &listing)?;
        Ok(Flow::Continue)
    });

    actions
}

fn print_help(
    console: &mut Console<'_>,
    name: &str,
    listing: &[(String, String)],
) -> Result<(), DialogError> {
    console.line(format_args!("Menu \"{name}\"\nAvailable actions:"))?;
    console.line("Key\tDescription")?;
    console.line("---\t-----------")?;
    for (key, description) in listing {
        console.line(format_args!("{key}\t{description}"))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use pretty_assertions::assert_eq;

    use super::{MenuOptions, augment, run_menu};
    use crate::action::{ActionTable, Flow};
    use crate::console::Console;
    use crate::error::DialogError;

    fn quit_table() -> ActionTable<Vec<String>, &'static str> {
        ActionTable::new()
            .action("p", "push", |_, log: &mut Vec<String>| {
                log.push("p".into());
                Ok(Flow::Continue)
            })
            .action("q", "quit", |_, _| Ok(Flow::Exit("quit")))
    }

    type Outcome = (Result<&'static str, DialogError>, Vec<String>, String);

    fn run(input: &str, options: MenuOptions<&'static str>) -> Outcome {
        let mut out = Vec::new();
        let mut log = Vec::new();
        let result = {
            let mut console = Console::new(Cursor::new(input.to_string()), &mut out);
            run_menu(&mut console, &mut log, "Test", &quit_table(), options)
        };
        (result, log, String::from_utf8(out).expect("utf8 output"))
    }

    #[test]
    fn dispatches_until_exit() {
        let (result, log, _) = run("p\np\nq\np\n", MenuOptions::without_back());
        assert_eq!(result.expect("menu should exit"), "quit");
        assert_eq!(log, ["p", "p"]);
    }

    #[test]
    fn back_returns_the_configured_value() {
        let (result, log, _) = run("b\n", MenuOptions::with_back("back"));
        assert_eq!(result.expect("menu should exit"), "back");
        assert!(log.is_empty());
    }

    #[test]
    fn back_key_is_unknown_without_back_option() {
        let (result, _, out) = run("b\nq\n", MenuOptions::without_back());
        assert_eq!(result.expect("menu should exit"), "quit");
        assert!(out.contains("(Test) unrecognised action, try again. Type ? for help"));
    }

    #[test]
    fn eof_is_fatal() {
        let (result, log, _) = run("p\n", MenuOptions::without_back());
        assert!(matches!(result, Err(DialogError::InputClosed)));
        assert_eq!(log, ["p"]);
    }

    #[test]
    fn help_lists_actions_in_order() {
        let (_, _, out) = run("?\nq\n", MenuOptions::with_back("back"));
        let expected = "Menu \"Test\"\nAvailable actions:\nKey\tDescription\n---\t-----------\n\
                        p\tpush\nq\tquit\n?\tshow this help\nb\texit this menu\n";
        assert!(out.contains(expected), "unexpected help output:\n{out}");
    }

    #[test]
    fn augment_leaves_template_untouched() {
        let template = quit_table();
        let augmented = augment("Test", &template, MenuOptions::with_back("back"));

        assert_eq!(template.len(), 2);
        assert!(!template.contains_key("?"));
        assert!(!template.contains_key("b"));
        assert_eq!(augmented.len(), 4);
    }
}
