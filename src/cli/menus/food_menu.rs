use crate::cli::input::LineSource;
use crate::cli::io::Prompter;
use crate::errors::CliError;
use crate::expense::{Food, FoodType};

/// Collects a food purchase, offering a bill split for shared meals.
pub fn run<S: LineSource>(prompter: &mut Prompter<S>) -> Result<Food, CliError> {
    let expiration_days = prompter.integer("Enter days until expiration: ", Some(0), None)?;
    let food_type = prompter.choice(
        "Enter food type (Groceries/Takeout/Restaurant): ",
        &FoodType::ALL,
        FoodType::label,
    )?;
    let amount = prompter.amount("Enter food expense amount: ")?;
    let mut food = Food::new(expiration_days, food_type, amount);

    if food_type.is_splittable() && prompter.confirm("Do you want to split the bill? (Yes/No): ")? {
        let num_people = prompter.count("Enter number of people (at least 1): ", 1, u32::MAX)?;
        food.split_bill(num_people);
    }

    Ok(food)
}
