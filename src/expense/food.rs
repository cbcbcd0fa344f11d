use std::{fmt, str::FromStr};

use chrono::{DateTime, Duration, Local};
use thiserror::Error;

use super::{format_amount, Displayable, Expense, ExpenseRecord};

pub const FOOD_CATEGORY: &str = "Food";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Shelf lives are clamped to roughly 270 years either way so date arithmetic
/// stays inside chrono's range.
pub const MAX_SHELF_LIFE_DAYS: i64 = 100_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoodType {
    Groceries,
    Takeout,
    Restaurant,
}

impl FoodType {
    pub const ALL: [FoodType; 3] = [FoodType::Groceries, FoodType::Takeout, FoodType::Restaurant];

    pub fn label(self) -> &'static str {
        match self {
            FoodType::Groceries => "Groceries",
            FoodType::Takeout => "Takeout",
            FoodType::Restaurant => "Restaurant",
        }
    }

    /// Only groceries carry a meaningful expiration date.
    pub fn tracks_expiration(self) -> bool {
        matches!(self, FoodType::Groceries)
    }

    /// Shared meals may be split between diners.
    pub fn is_splittable(self) -> bool {
        matches!(self, FoodType::Takeout | FoodType::Restaurant)
    }
}

impl fmt::Display for FoodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown food type `{0}`")]
pub struct ParseFoodTypeError(pub String);

impl FromStr for FoodType {
    type Err = ParseFoodTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        FoodType::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseFoodTypeError(trimmed.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    Fresh,
    Expired,
}

impl fmt::Display for Freshness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Freshness::Fresh => write!(f, "Fresh"),
            Freshness::Expired => write!(f, "Expired"),
        }
    }
}

/// A food purchase with an expiration date and optional bill split.
///
/// Splitting divides the stored amount in place; the original total is not kept.
#[derive(Debug, Clone)]
pub struct Food {
    base: Expense,
    purchase_date: DateTime<Local>,
    expiration_date: DateTime<Local>,
    food_type: FoodType,
    num_people: u32,
}

impl Food {
    /// Records a purchase made now that expires after `expiration_days`
    /// (zero or negative means it is already expired).
    pub fn new(expiration_days: i64, food_type: FoodType, amount: f64) -> Self {
        Self::purchased_at(Local::now(), expiration_days, food_type, amount)
    }

    pub fn purchased_at(
        purchase_date: DateTime<Local>,
        expiration_days: i64,
        food_type: FoodType,
        amount: f64,
    ) -> Self {
        let shelf_life = expiration_days.clamp(-MAX_SHELF_LIFE_DAYS, MAX_SHELF_LIFE_DAYS);
        Self {
            base: Expense::new(FOOD_CATEGORY, amount),
            purchase_date,
            expiration_date: purchase_date + Duration::days(shelf_life),
            food_type,
            num_people: 0,
        }
    }

    pub fn purchase_date(&self) -> DateTime<Local> {
        self.purchase_date
    }

    pub fn expiration_date(&self) -> DateTime<Local> {
        self.expiration_date
    }

    pub fn food_type(&self) -> FoodType {
        self.food_type
    }

    pub fn num_people(&self) -> u32 {
        self.num_people
    }

    /// Checks expiration against the wall clock at call time.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Local::now())
    }

    pub fn is_expired_at(&self, now: DateTime<Local>) -> bool {
        now > self.expiration_date
    }

    pub fn freshness_at(&self, now: DateTime<Local>) -> Freshness {
        if self.is_expired_at(now) {
            Freshness::Expired
        } else {
            Freshness::Fresh
        }
    }

    /// Divides the amount between `num_people`. Zero leaves everything untouched.
    pub fn split_bill(&mut self, num_people: u32) {
        if num_people == 0 {
            return;
        }
        self.num_people = num_people;
        self.base.amount /= f64::from(num_people);
        tracing::debug!(
            food_type = %self.food_type,
            num_people,
            share = self.base.amount,
            "bill split"
        );
    }
}

impl ExpenseRecord for Food {
    fn expense(&self) -> &Expense {
        &self.base
    }
}

impl Displayable for Food {
    fn render_at(&self, now: DateTime<Local>) -> Vec<String> {
        let mut lines = vec![
            format!("Food Type: {}", self.food_type),
            format!("Total Cost: {}", format_amount(self.base.amount)),
            format!("Purchase Date: {}", self.purchase_date.format(DATE_FORMAT)),
        ];

        if self.food_type.tracks_expiration() {
            lines.push(format!(
                "Expiration Date: {} ({})",
                self.expiration_date.format(DATE_FORMAT),
                self.freshness_at(now)
            ));
        }
        if self.food_type.is_splittable() && self.num_people > 0 {
            lines.push(format!(
                "Split Among: {} person(s) → Each pays: {}",
                self.num_people,
                format_amount(self.base.amount)
            ));
        }

        lines
    }
}
