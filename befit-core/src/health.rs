//! Body mass index.

use serde::Serialize;
use std::fmt;

use crate::models::User;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Classifies a BMI value: <18.5, <25, <30, and everything above.
    pub fn from_value(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obesity",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// A BMI reading rounded to one decimal place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bmi {
    pub value: f64,
    pub category: BmiCategory,
}

impl Bmi {
    /// Computes BMI from weight in kilograms and height in centimeters.
    ///
    /// Returns `None` unless both inputs are positive.
    pub fn calculate(weight_kg: f64, height_cm: f64) -> Option<Self> {
        if weight_kg <= 0.0 || height_cm <= 0.0 {
            return None;
        }
        let height_m = height_cm / 100.0;
        let value = (weight_kg / (height_m * height_m) * 10.0).round() / 10.0;
        Some(Self {
            value,
            category: BmiCategory::from_value(value),
        })
    }

    pub fn for_user(user: &User) -> Option<Self> {
        Self::calculate(user.weight, user.height)
    }
}

impl fmt::Display for Bmi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} ({})", self.value, self.category)
    }
}
