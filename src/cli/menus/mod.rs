pub mod food_menu;
pub mod main_menu;
pub mod subscription_menu;
pub mod tuition_menu;

use crate::cli::input::LineSource;
use crate::cli::io::Prompter;
use crate::cli::output;
use crate::errors::CliError;

const CHOICE_PROMPT: &str = "> ";

/// A closed set of numbered options.
pub trait MenuAction: Copy + 'static {
    const ALL: &'static [Self];

    fn label(self) -> &'static str;
}

/// Lines shown for a menu: the numbered items under its title.
pub fn menu_lines<A: MenuAction>() -> Vec<String> {
    A::ALL
        .iter()
        .enumerate()
        .map(|(index, action)| format!("{}. {}", index + 1, action.label()))
        .collect()
}

/// Renders the menu and reads a selection until it is in range.
pub fn choose<A: MenuAction, S: LineSource>(
    title: &str,
    prompter: &mut Prompter<S>,
) -> Result<A, CliError> {
    output::section(title);
    for line in menu_lines::<A>() {
        output::write_line(line);
    }

    let max = i64::try_from(A::ALL.len()).unwrap_or(i64::MAX);
    loop {
        let choice = prompter.integer(CHOICE_PROMPT, Some(1), Some(max))?;
        let picked = usize::try_from(choice - 1)
            .ok()
            .and_then(|index| A::ALL.get(index));
        match picked {
            Some(action) => return Ok(*action),
            None => tracing::debug!(choice, "menu choice outside item list"),
        }
    }
}
