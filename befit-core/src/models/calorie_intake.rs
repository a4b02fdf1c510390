use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    /// All meal types in the order a day is reported.
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for MealType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        MealType::ALL
            .into_iter()
            .find(|meal| meal.as_str() == wanted)
            .ok_or_else(|| {
                format!(
                    "Invalid meal type '{}'. Valid options: breakfast, lunch, dinner, snack",
                    s
                )
            })
    }
}

/// A single food entry counted toward the day's calories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalorieIntake {
    pub id: Uuid,
    pub date: NaiveDate,
    pub meal_type: MealType,
    pub food_name: String,
    pub calories: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCalorieIntake {
    pub meal_type: MealType,
    pub food_name: String,
    pub calories: u32,
}

impl NewCalorieIntake {
    pub fn new(meal_type: MealType, food_name: impl Into<String>, calories: u32) -> Self {
        Self {
            meal_type,
            food_name: food_name.into(),
            calories,
        }
    }

    pub fn into_calorie_intake(self, date: NaiveDate) -> CalorieIntake {
        CalorieIntake {
            id: Uuid::new_v4(),
            date,
            meal_type: self.meal_type,
            food_name: self.food_name,
            calories: self.calories,
        }
    }
}

impl fmt::Display for CalorieIntake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:10} {:24} {:>5} kcal",
            self.meal_type, self.food_name, self.calories
        )
    }
}
