use crate::cli::input::LineSource;
use crate::cli::io::{print_success, Prompter};
use crate::cli::menus::{choose, MenuAction};
use crate::errors::CliError;
use crate::expense::{Displayable, Tuition};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuitionAction {
    AddFee,
    ApplyScholarship,
    View,
    Done,
}

impl MenuAction for TuitionAction {
    const ALL: &'static [Self] = &[
        TuitionAction::AddFee,
        TuitionAction::ApplyScholarship,
        TuitionAction::View,
        TuitionAction::Done,
    ];

    fn label(self) -> &'static str {
        match self {
            TuitionAction::AddFee => "Add Fee",
            TuitionAction::ApplyScholarship => "Apply Scholarship",
            TuitionAction::View => "View Tuition",
            TuitionAction::Done => "Done",
        }
    }
}

/// Builds a tuition record and lets the user adjust it until `Done`.
pub fn run<S: LineSource>(prompter: &mut Prompter<S>) -> Result<Tuition, CliError> {
    let amount = prompter.amount("Enter tuition amount: ")?;
    let mut tuition = Tuition::new(amount);

    loop {
        match choose::<TuitionAction, _>("Tuition Options", prompter)? {
            TuitionAction::AddFee => {
                let name = prompter.text("Enter fee name: ")?;
                let amount = prompter.amount("Enter fee amount: ")?;
                tuition.add_fee(name, amount);
                print_success("Fee added.");
            }
            TuitionAction::ApplyScholarship => {
                let name = prompter.text("Enter scholarship name: ")?;
                let amount = prompter.amount("Enter scholarship amount: ")?;
                tuition.apply_scholarship(name, amount);
                print_success("Scholarship applied.");
            }
            TuitionAction::View => tuition.display(),
            TuitionAction::Done => break,
        }
    }

    Ok(tuition)
}
