use crate::cli::io::print_error;
use crate::errors::CliError;
use crate::expense::{ExpenseEntry, ExpenseRecord};

/// In-memory state of one run. Nothing outlives the process.
#[derive(Debug, Default)]
pub struct Session {
    expenses: Vec<ExpenseEntry>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expenses(&self) -> &[ExpenseEntry] {
        &self.expenses
    }

    pub fn record(&mut self, entry: impl Into<ExpenseEntry>) {
        let entry = entry.into();
        tracing::info!(
            category = entry.category(),
            amount = entry.amount(),
            "expense recorded"
        );
        self.expenses.push(entry);
    }

    pub fn report_error(&self, err: &CliError) {
        tracing::error!(%err, "menu action failed");
        print_error(format!("Unexpected error: {err}. Please try again."));
    }
}
