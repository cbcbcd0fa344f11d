use super::ExpenseRecord;

/// A monetary record with a category label.
#[derive(Debug, Clone)]
pub struct Expense {
    pub(super) category: String,
    pub(super) amount: f64,
}

impl Expense {
    pub fn new(category: impl Into<String>, amount: f64) -> Self {
        Self {
            category: category.into(),
            amount,
        }
    }
}

impl ExpenseRecord for Expense {
    fn expense(&self) -> &Expense {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn details_include_category_and_amount() {
        let expense = Expense::new("Miscellaneous", 100.0);
        assert_eq!(expense.category(), "Miscellaneous");
        assert_eq!(expense.amount(), 100.0);
        assert_eq!(expense.details(), "Miscellaneous: $100.00");
    }
}
