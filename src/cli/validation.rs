//! Parsers for the values the session asks for. Each returns an
//! [`InputError`] whose message is shown before re-prompting.

use strsim::levenshtein;

use crate::errors::InputError;

const SUGGESTION_DISTANCE: usize = 3;

/// A finite, non-negative decimal amount.
pub fn parse_amount(raw: &str) -> Result<f64, InputError> {
    let value: f64 = raw.trim().parse().map_err(|_| InputError::NotANumber)?;
    if !value.is_finite() {
        return Err(InputError::NotANumber);
    }
    if value < 0.0 {
        return Err(InputError::Negative);
    }
    Ok(value)
}

pub fn parse_integer(raw: &str, min: Option<i64>, max: Option<i64>) -> Result<i64, InputError> {
    let value: i64 = raw.trim().parse().map_err(|_| InputError::NotAnInteger)?;
    match (min, max) {
        (Some(min), _) if value < min => Err(InputError::BelowMinimum(min)),
        (_, Some(max)) if value > max => Err(InputError::AboveMaximum(max)),
        _ => Ok(value),
    }
}

/// Matches `raw` against the option labels after capitalising its first letter
/// and lower-casing the rest.
pub fn parse_choice<T: Copy>(
    raw: &str,
    options: &[T],
    label: impl Fn(T) -> &'static str,
) -> Result<T, InputError> {
    let candidate = capitalize(raw.trim());
    if let Some(option) = options.iter().copied().find(|option| label(*option) == candidate) {
        return Ok(option);
    }

    let labels: Vec<&'static str> = options.iter().map(|option| label(*option)).collect();
    Err(InputError::UnknownChoice {
        choices: labels.iter().map(|label| label.to_string()).collect(),
        suggestion: closest_label(&candidate, &labels),
    })
}

/// Non-empty text with surrounding whitespace removed.
pub fn parse_text(raw: &str) -> Result<String, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }
    Ok(trimmed.to_string())
}

pub fn capitalize(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn closest_label(input: &str, labels: &[&str]) -> Option<String> {
    if input.is_empty() {
        return None;
    }
    let needle = input.to_lowercase();
    labels
        .iter()
        .map(|label| (levenshtein(&label.to_lowercase(), &needle), *label))
        .filter(|(distance, _)| *distance <= SUGGESTION_DISTANCE)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, label)| label.to_string())
}
