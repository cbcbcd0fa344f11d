use crate::cli::input::LineSource;
use crate::cli::io::{print_success, Prompter};
use crate::cli::menus::{choose, MenuAction};
use crate::errors::CliError;
use crate::expense::{Displayable, Subscription};

const FIRST_BILLING_DAY: u32 = 1;
const LAST_BILLING_DAY: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionAction {
    ChangePlan,
    Cancel,
    View,
    Done,
}

impl MenuAction for SubscriptionAction {
    const ALL: &'static [Self] = &[
        SubscriptionAction::ChangePlan,
        SubscriptionAction::Cancel,
        SubscriptionAction::View,
        SubscriptionAction::Done,
    ];

    fn label(self) -> &'static str {
        match self {
            SubscriptionAction::ChangePlan => "Change Plan",
            SubscriptionAction::Cancel => "Cancel Subscription",
            SubscriptionAction::View => "View Subscription",
            SubscriptionAction::Done => "Done",
        }
    }
}

pub fn run<S: LineSource>(prompter: &mut Prompter<S>) -> Result<Subscription, CliError> {
    let billing_day = prompter.count(
        "Enter billing date (1-30): ",
        FIRST_BILLING_DAY,
        LAST_BILLING_DAY,
    )?;
    let name = prompter.text("Enter subscription name: ")?;
    let amount = prompter.amount("Enter monthly cost: ")?;
    let mut subscription = Subscription::new(billing_day, name, amount);

    loop {
        match choose::<SubscriptionAction, _>("Subscription Options", prompter)? {
            SubscriptionAction::ChangePlan => {
                let new_amount = prompter.amount("Enter new plan amount: ")?;
                subscription.change_plan(new_amount);
                print_success("Plan updated.");
            }
            SubscriptionAction::Cancel => {
                subscription.cancel();
                print_success("Subscription canceled.");
            }
            SubscriptionAction::View => subscription.display(),
            SubscriptionAction::Done => break,
        }
    }

    Ok(subscription)
}
