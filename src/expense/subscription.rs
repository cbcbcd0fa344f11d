use std::fmt;

use chrono::{DateTime, Local};

use super::{format_amount, Displayable, Expense, ExpenseRecord};

pub const SUBSCRIPTION_CATEGORY: &str = "Subscription";

/// Every billing cycle is treated as 30 days long.
pub const DAYS_PER_CYCLE: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionStatus {
    Active,
    Canceled,
}

impl fmt::Display for SubscriptionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubscriptionStatus::Active => write!(f, "Active"),
            SubscriptionStatus::Canceled => write!(f, "Canceled"),
        }
    }
}

/// A recurring monthly charge. A zero amount means canceled.
#[derive(Debug, Clone)]
pub struct Subscription {
    base: Expense,
    billing_day: u32,
    name: String,
}

impl Subscription {
    pub fn new(billing_day: u32, name: impl Into<String>, amount: f64) -> Self {
        Self {
            base: Expense::new(SUBSCRIPTION_CATEGORY, amount),
            billing_day,
            name: name.into(),
        }
    }

    pub fn billing_day(&self) -> u32 {
        self.billing_day
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn change_plan(&mut self, new_amount: f64) {
        tracing::debug!(
            subscription = %self.name,
            from = self.base.amount,
            to = new_amount,
            "plan changed"
        );
        self.base.amount = new_amount;
    }

    pub fn cancel(&mut self) {
        tracing::debug!(subscription = %self.name, "subscription canceled");
        self.base.amount = 0.0;
    }

    pub fn status(&self) -> SubscriptionStatus {
        if self.base.amount > 0.0 {
            SubscriptionStatus::Active
        } else {
            SubscriptionStatus::Canceled
        }
    }

    /// Days between `day_of_month` and the billing day under a 30-day month.
    ///
    /// Past the billing day the count runs to the next cycle; on the billing
    /// day itself it is zero.
    pub fn get_billing_date(&self, day_of_month: u32) -> i64 {
        let today = i64::from(day_of_month);
        let billing = i64::from(self.billing_day);
        if today > billing {
            (DAYS_PER_CYCLE - today) + billing
        } else {
            billing - today
        }
    }
}

impl ExpenseRecord for Subscription {
    fn expense(&self) -> &Expense {
        &self.base
    }
}

impl Displayable for Subscription {
    fn render_at(&self, _now: DateTime<Local>) -> Vec<String> {
        vec![
            format!("Subscription: {}", self.name),
            format!("Billing Date: {}", self.billing_day),
            format!("Amount: {}", format_amount(self.base.amount)),
            format!("Status: {}", self.status()),
        ]
    }
}
