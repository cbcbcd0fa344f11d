use chrono::{DateTime, Local};

use super::{Displayable, Expense, ExpenseRecord, Food, Subscription, Tuition};

/// A record held in the session's expense list.
#[derive(Debug, Clone)]
pub enum ExpenseEntry {
    Tuition(Tuition),
    Subscription(Subscription),
    Food(Food),
}

impl ExpenseRecord for ExpenseEntry {
    fn expense(&self) -> &Expense {
        match self {
            ExpenseEntry::Tuition(tuition) => tuition.expense(),
            ExpenseEntry::Subscription(subscription) => subscription.expense(),
            ExpenseEntry::Food(food) => food.expense(),
        }
    }
}

impl Displayable for ExpenseEntry {
    fn render_at(&self, now: DateTime<Local>) -> Vec<String> {
        match self {
            ExpenseEntry::Tuition(tuition) => tuition.render_at(now),
            ExpenseEntry::Subscription(subscription) => subscription.render_at(now),
            ExpenseEntry::Food(food) => food.render_at(now),
        }
    }
}

impl From<Tuition> for ExpenseEntry {
    fn from(value: Tuition) -> Self {
        ExpenseEntry::Tuition(value)
    }
}

impl From<Subscription> for ExpenseEntry {
    fn from(value: Subscription) -> Self {
        ExpenseEntry::Subscription(value)
    }
}

impl From<Food> for ExpenseEntry {
    fn from(value: Food) -> Self {
        ExpenseEntry::Food(value)
    }
}
