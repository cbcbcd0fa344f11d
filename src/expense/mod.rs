//! Expense domain model: the base record, its three specialisations, and the
//! sum type the session stores them in.
//!
//! All expense-family values compare with one another by amount alone,
//! whatever their category.

pub mod base;
pub mod common;
pub mod entry;
pub mod food;
pub mod subscription;
pub mod tuition;

pub use base::Expense;
pub use common::{format_amount, Displayable, ExpenseRecord};
pub use entry::ExpenseEntry;
pub use food::{Food, FoodType, Freshness, ParseFoodTypeError};
pub use subscription::{Subscription, SubscriptionStatus};
pub use tuition::{AdjustmentKind, LedgerEntry, Tuition};
