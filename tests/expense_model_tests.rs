use budget_tracker::expense::{
    AdjustmentKind, Displayable, Expense, ExpenseRecord, Food, FoodType, Subscription,
    SubscriptionStatus, Tuition,
};
use chrono::{Duration, Local, TimeZone};

fn sample_tuition() -> Tuition {
    Tuition::new(5000.0)
}

fn sample_subscription() -> Subscription {
    Subscription::new(15, "Netflix", 15.99)
}

fn sample_food() -> Food {
    Food::new(5, FoodType::Takeout, 30.0)
}

#[test]
fn expense_details_format() {
    let expense = Expense::new("Miscellaneous", 100.0);
    assert_eq!(expense.category(), "Miscellaneous");
    assert_eq!(expense.details(), "Miscellaneous: $100.00");
}

#[test]
fn apply_scholarship_lowers_amount_and_logs_entry() {
    let mut tuition = sample_tuition();
    tuition.apply_scholarship("Merit", 1000.0);
    assert_eq!(tuition.amount(), 4000.0);
    assert_eq!(
        tuition.scholarships()[0].to_string(),
        "Scholarship: Merit, Amount: $1000.00"
    );
    assert_eq!(tuition.scholarships()[0].kind, AdjustmentKind::Scholarship);
}

#[test]
fn add_fee_raises_amount_and_logs_entry() {
    let mut tuition = sample_tuition();
    tuition.add_fee("Lab Fee", 300.0);
    assert_eq!(tuition.amount(), 5300.0);
    assert_eq!(tuition.fees()[0].to_string(), "Fee: Lab Fee, Amount: $300.00");
}

#[test]
fn tuition_render_contains_adjusted_total_and_ledgers() {
    let mut tuition = sample_tuition();
    tuition.apply_scholarship("Need-Based", 1500.0);
    tuition.add_fee("Library Fee", 200.0);

    let lines = tuition.render_at(Local::now());
    assert!(lines.contains(&"Tuition: $3700.00".to_string()));
    assert!(lines.contains(&"Fee: Library Fee, Amount: $200.00".to_string()));
    assert!(lines.contains(&"Scholarship: Need-Based, Amount: $1500.00".to_string()));
}

#[test]
fn subscription_fields_and_plan_changes() {
    let mut subscription = sample_subscription();
    assert_eq!(subscription.category(), "Subscription");
    assert_eq!(subscription.amount(), 15.99);
    assert_eq!(subscription.name(), "Netflix");
    assert_eq!(subscription.billing_day(), 15);

    subscription.change_plan(19.99);
    assert_eq!(subscription.amount(), 19.99);
}

#[test]
fn subscription_billing_date() {
    let subscription = sample_subscription();
    assert_eq!(subscription.get_billing_date(10), 5);
    assert_eq!(subscription.get_billing_date(20), 25);
    assert_eq!(subscription.get_billing_date(15), 0);
}

#[test]
fn subscription_status_tracks_cancellation() {
    let mut subscription = sample_subscription();
    let lines = subscription.render_at(Local::now());
    assert!(lines.contains(&"Subscription: Netflix".to_string()));
    assert!(lines.contains(&"Billing Date: 15".to_string()));
    assert!(lines.contains(&"Amount: $15.99".to_string()));
    assert!(lines.contains(&"Status: Active".to_string()));

    subscription.cancel();
    assert_eq!(subscription.amount(), 0.0);
    assert_eq!(subscription.status(), SubscriptionStatus::Canceled);
    assert!(subscription
        .render_at(Local::now())
        .contains(&"Status: Canceled".to_string()));
}

#[test]
fn food_starts_unsplit() {
    let food = sample_food();
    assert_eq!(food.category(), "Food");
    assert_eq!(food.amount(), 30.0);
    assert_eq!(food.food_type(), FoodType::Takeout);
    assert_eq!(food.num_people(), 0);
    assert_eq!(food.expiration_date() - food.purchase_date(), Duration::days(5));
}

#[test]
fn food_expiration_uses_wall_clock() {
    assert!(Food::new(-1, FoodType::Groceries, 50.0).is_expired());
    assert!(!Food::new(5, FoodType::Groceries, 50.0).is_expired());
}

#[test]
fn food_split_bill() {
    let mut food = sample_food();
    food.split_bill(3);
    assert_eq!(food.num_people(), 3);
    assert_eq!(food.amount(), 10.0);
}

#[test]
fn food_split_by_zero_is_ignored() {
    let mut food = sample_food();
    food.split_bill(0);
    assert_eq!(food.num_people(), 0);
    assert_eq!(food.amount(), 30.0);
}

#[test]
fn food_render_after_split() {
    let mut food = sample_food();
    food.split_bill(2);
    let lines = food.render_at(Local::now());
    assert!(lines.contains(&"Food Type: Takeout".to_string()));
    assert!(lines.contains(&"Total Cost: $15.00".to_string()));
    assert!(lines.iter().any(|line| line.starts_with("Split Among: 2 person(s)")));
}

#[test]
fn food_render_without_split() {
    let food = Food::new(3, FoodType::Takeout, 20.0);
    let lines = food.render_at(Local::now());
    assert!(lines.iter().all(|line| !line.contains("Split Among")));
}

#[test]
fn expiration_lines_only_for_groceries() {
    let purchased = Local.with_ymd_and_hms(2025, 1, 31, 9, 30, 0).unwrap();
    let groceries = Food::purchased_at(purchased, 1, FoodType::Groceries, 12.0);
    let restaurant = Food::purchased_at(purchased, 1, FoodType::Restaurant, 12.0);

    let grocery_lines = groceries.render_at(purchased);
    assert!(grocery_lines.contains(&"Purchase Date: 2025-01-31".to_string()));
    assert!(grocery_lines.contains(&"Expiration Date: 2025-02-01 (Fresh)".to_string()));

    let restaurant_lines = restaurant.render_at(purchased);
    assert!(restaurant_lines
        .iter()
        .all(|line| !line.starts_with("Expiration Date")));
}
