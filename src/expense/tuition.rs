use std::fmt;

use chrono::{DateTime, Local};

use super::{format_amount, Displayable, Expense, ExpenseRecord};

pub const TUITION_CATEGORY: &str = "Tuition";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdjustmentKind {
    Fee,
    Scholarship,
}

impl AdjustmentKind {
    pub fn label(self) -> &'static str {
        match self {
            AdjustmentKind::Fee => "Fee",
            AdjustmentKind::Scholarship => "Scholarship",
        }
    }
}

/// One audit line in a tuition ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerEntry {
    pub kind: AdjustmentKind,
    pub name: String,
    pub amount: f64,
}

impl fmt::Display for LedgerEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}, Amount: {}",
            self.kind.label(),
            self.name,
            format_amount(self.amount)
        )
    }
}

/// Tuition with append-only fee and scholarship ledgers.
///
/// Adjustments are not validated: a scholarship larger than the remaining
/// balance drives the amount negative.
#[derive(Debug, Clone)]
pub struct Tuition {
    base: Expense,
    fees: Vec<LedgerEntry>,
    scholarships: Vec<LedgerEntry>,
}

impl Tuition {
    pub fn new(amount: f64) -> Self {
        Self {
            base: Expense::new(TUITION_CATEGORY, amount),
            fees: Vec::new(),
            scholarships: Vec::new(),
        }
    }

    pub fn add_fee(&mut self, name: impl Into<String>, amount: f64) {
        self.base.amount += amount;
        let entry = LedgerEntry {
            kind: AdjustmentKind::Fee,
            name: name.into(),
            amount,
        };
        tracing::debug!(fee = %entry.name, amount, total = self.base.amount, "fee added");
        self.fees.push(entry);
    }

    pub fn apply_scholarship(&mut self, name: impl Into<String>, amount: f64) {
        self.base.amount -= amount;
        let entry = LedgerEntry {
            kind: AdjustmentKind::Scholarship,
            name: name.into(),
            amount,
        };
        tracing::debug!(
            scholarship = %entry.name,
            amount,
            total = self.base.amount,
            "scholarship applied"
        );
        self.scholarships.push(entry);
    }

    pub fn fees(&self) -> &[LedgerEntry] {
        &self.fees
    }

    pub fn scholarships(&self) -> &[LedgerEntry] {
        &self.scholarships
    }
}

impl ExpenseRecord for Tuition {
    fn expense(&self) -> &Expense {
        &self.base
    }
}

impl Displayable for Tuition {
    fn render_at(&self, _now: DateTime<Local>) -> Vec<String> {
        std::iter::once(self.details())
            .chain(self.fees.iter().map(ToString::to_string))
            .chain(self.scholarships.iter().map(ToString::to_string))
            .collect()
    }
}
