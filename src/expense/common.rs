use std::cmp::Ordering;
use std::io::{self, Write};

use chrono::{DateTime, Local};

use super::{Expense, ExpenseEntry, Food, Subscription, Tuition};

/// Shared capabilities of every expense-family value.
pub trait ExpenseRecord {
    /// The underlying category/amount pair.
    fn expense(&self) -> &Expense;

    fn amount(&self) -> f64 {
        self.expense().amount
    }

    fn category(&self) -> &str {
        &self.expense().category
    }

    /// `"{category}: ${amount:.2}"`
    fn details(&self) -> String {
        format!("{}: {}", self.category(), format_amount(self.amount()))
    }
}

/// Renders a record as the lines a user sees in the console.
pub trait Displayable {
    /// Builds the display lines, evaluating time-dependent state against `now`.
    fn render_at(&self, now: DateTime<Local>) -> Vec<String>;

    /// Prints the record to stdout using the current wall-clock time.
    fn display(&self) {
        let mut stdout = io::stdout().lock();
        for line in self.render_at(Local::now()) {
            if let Err(err) = writeln!(stdout, "{line}") {
                tracing::debug!(%err, "stdout write failed");
                return;
            }
        }
    }
}

/// Formats a monetary amount as `$X.YY`.
pub fn format_amount(amount: f64) -> String {
    format!("${amount:.2}")
}

// Expenses compare by amount only, across categories. Values outside the
// expense family do not implement `ExpenseRecord` and therefore cannot be
// compared at all.
macro_rules! compare_by_amount {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl<T: ExpenseRecord + ?Sized> PartialEq<T> for $ty {
                fn eq(&self, other: &T) -> bool {
                    ExpenseRecord::amount(self) == other.amount()
                }
            }

            impl<T: ExpenseRecord + ?Sized> PartialOrd<T> for $ty {
                fn partial_cmp(&self, other: &T) -> Option<Ordering> {
                    ExpenseRecord::amount(self).partial_cmp(&other.amount())
                }
            }
        )+
    };
}

compare_by_amount!(Expense, Tuition, Subscription, Food, ExpenseEntry);
