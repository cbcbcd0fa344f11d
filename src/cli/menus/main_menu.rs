use crate::cli::input::LineSource;
use crate::cli::io::{print_info, Prompter};
use crate::cli::menus::{choose, food_menu, subscription_menu, tuition_menu, MenuAction};
use crate::cli::output;
use crate::cli::session::Session;
use crate::cli::LoopControl;
use crate::errors::CliError;
use crate::expense::Displayable;

pub const MAIN_MENU_TITLE: &str = "Budget Management System";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainAction {
    AddTuition,
    AddSubscription,
    AddFood,
    ViewAll,
    Exit,
}

impl MenuAction for MainAction {
    const ALL: &'static [Self] = &[
        MainAction::AddTuition,
        MainAction::AddSubscription,
        MainAction::AddFood,
        MainAction::ViewAll,
        MainAction::Exit,
    ];

    fn label(self) -> &'static str {
        match self {
            MainAction::AddTuition => "Add Tuition Expense",
            MainAction::AddSubscription => "Add Subscription Expense",
            MainAction::AddFood => "Add Food Expense",
            MainAction::ViewAll => "View All Expenses",
            MainAction::Exit => "Exit",
        }
    }
}

/// Shows the main menu once and carries out the selected action.
pub fn run<S: LineSource>(
    session: &mut Session,
    prompter: &mut Prompter<S>,
) -> Result<LoopControl, CliError> {
    match choose::<MainAction, _>(MAIN_MENU_TITLE, prompter)? {
        MainAction::AddTuition => session.record(tuition_menu::run(prompter)?),
        MainAction::AddSubscription => session.record(subscription_menu::run(prompter)?),
        MainAction::AddFood => session.record(food_menu::run(prompter)?),
        MainAction::ViewAll => view_all(session),
        MainAction::Exit => {
            print_info("Quitting program. Goodbye!");
            return Ok(LoopControl::Exit);
        }
    }
    Ok(LoopControl::Continue)
}

fn view_all(session: &Session) {
    if session.expenses().is_empty() {
        print_info("No expenses recorded yet.");
        return;
    }

    output::section("Expense Overview");
    for expense in session.expenses() {
        expense.display();
        output::separator();
    }
}
