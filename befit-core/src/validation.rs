//! Input rules for profiles, records and goals.
//!
//! The session records whatever it is given; callers check input here first.

use crate::models::{GoalTargets, NewCalorieIntake, NewExercise, NewUser};

/// Largest single water entry, in milliliters.
pub const MAX_WATER_AMOUNT: i64 = 5_000;
/// Longest single exercise session, in minutes (one day).
pub const MAX_EXERCISE_DURATION: u32 = 1_440;
/// Upper bound for calories burned in one session or eaten in one entry.
pub const MAX_ENTRY_CALORIES: u32 = 10_000;
/// Upper bounds for weekly goal targets.
pub const MAX_WATER_GOAL: u32 = 20_000;
pub const MAX_EXERCISE_GOAL: u32 = 10_080;
pub const MAX_CALORIE_GOAL: u32 = 20_000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("{0} must be a positive number")]
    NotPositive(&'static str),

    #[error("{0} must be at most {1}")]
    TooLarge(&'static str, i64),

    #[error("Age must be between 1 and 119")]
    AgeOutOfRange,

    #[error("Please enter a valid 10-digit mobile number")]
    InvalidMobile,
}

/// Checks a mobile number is exactly ten ASCII digits, ignoring surrounding
/// whitespace.
pub fn validate_mobile(mobile: &str) -> Result<(), ValidationError> {
    let mobile = mobile.trim();
    if mobile.len() == 10 && mobile.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::InvalidMobile)
    }
}

pub fn validate_new_user(user: &NewUser) -> Result<(), ValidationError> {
    if user.name.trim().is_empty() {
        return Err(ValidationError::Required("Name"));
    }
    if !is_positive(user.weight) {
        return Err(ValidationError::NotPositive("Weight"));
    }
    if !is_positive(user.height) {
        return Err(ValidationError::NotPositive("Height"));
    }
    if user.age == 0 || user.age >= 120 {
        return Err(ValidationError::AgeOutOfRange);
    }
    validate_mobile(&user.mobile)
}

fn is_positive(value: f64) -> bool {
    value > 0.0
}

pub fn validate_water_amount(amount: i64) -> Result<(), ValidationError> {
    if amount <= 0 {
        return Err(ValidationError::NotPositive("Water amount"));
    }
    if amount > MAX_WATER_AMOUNT {
        return Err(ValidationError::TooLarge("Water amount", MAX_WATER_AMOUNT));
    }
    Ok(())
}

/// Calories burned may be zero; duration may not.
pub fn validate_exercise(entry: &NewExercise) -> Result<(), ValidationError> {
    if entry.name.trim().is_empty() {
        return Err(ValidationError::Required("Exercise name"));
    }
    if entry.duration == 0 {
        return Err(ValidationError::NotPositive("Duration"));
    }
    at_most("Duration", entry.duration, MAX_EXERCISE_DURATION)?;
    at_most("Calories burned", entry.calories_burned, MAX_ENTRY_CALORIES)
}

pub fn validate_calorie_intake(entry: &NewCalorieIntake) -> Result<(), ValidationError> {
    if entry.food_name.trim().is_empty() {
        return Err(ValidationError::Required("Food name"));
    }
    if entry.calories == 0 {
        return Err(ValidationError::NotPositive("Calories"));
    }
    at_most("Calories", entry.calories, MAX_ENTRY_CALORIES)
}

pub fn validate_goal(targets: &GoalTargets) -> Result<(), ValidationError> {
    if targets.water_goal == 0 {
        return Err(ValidationError::NotPositive("Water goal"));
    }
    if targets.exercise_goal == 0 {
        return Err(ValidationError::NotPositive("Exercise goal"));
    }
    if targets.calorie_goal == 0 {
        return Err(ValidationError::NotPositive("Calorie goal"));
    }
    at_most("Water goal", targets.water_goal, MAX_WATER_GOAL)?;
    at_most("Exercise goal", targets.exercise_goal, MAX_EXERCISE_GOAL)?;
    at_most("Calorie goal", targets.calorie_goal, MAX_CALORIE_GOAL)
}

fn at_most(field: &'static str, value: u32, max: u32) -> Result<(), ValidationError> {
    if value > max {
        return Err(ValidationError::TooLarge(field, i64::from(max)));
    }
    Ok(())
}
