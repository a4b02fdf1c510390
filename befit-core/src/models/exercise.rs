use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A logged exercise session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: Uuid,
    pub date: NaiveDate,
    pub name: String,
    /// Duration in minutes
    pub duration: u32,
    pub calories_burned: u32,
}

/// Exercise details supplied by the caller; id and date are assigned on add.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExercise {
    pub name: String,
    pub duration: u32,
    pub calories_burned: u32,
}

impl NewExercise {
    pub fn new(name: impl Into<String>, duration: u32, calories_burned: u32) -> Self {
        Self {
            name: name.into(),
            duration,
            calories_burned,
        }
    }

    pub fn into_exercise(self, date: NaiveDate) -> Exercise {
        Exercise {
            id: Uuid::new_v4(),
            date,
            name: self.name,
            duration: self.duration,
            calories_burned: self.calories_burned,
        }
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:20} {:>4} min {:>5} kcal",
            self.date, self.name, self.duration, self.calories_burned
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_exercise_assigns_fresh_ids() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
        let a = NewExercise::new("Running", 30, 300).into_exercise(date);
        let b = NewExercise::new("Running", 30, 300).into_exercise(date);

        assert_ne!(a.id, b.id);
        assert_eq!(a.date, date);
        assert_eq!(a.duration, 30);
    }

    #[test]
    fn test_exercise_uses_camel_case_fields() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
        let exercise = NewExercise::new("Yoga", 45, 120).into_exercise(date);
        let value = serde_json::to_value(&exercise).unwrap();

        assert_eq!(value["caloriesBurned"], 120);
        assert_eq!(value["date"], "2025-03-09");
    }
}
