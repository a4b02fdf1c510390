use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calendar::WeekWindow;

/// Targets used when no goal covers the current day.
pub const DEFAULT_WATER_GOAL: u32 = 2000;
pub const DEFAULT_EXERCISE_GOAL: u32 = 150;
pub const DEFAULT_CALORIE_GOAL: u32 = 2000;

/// The target triple a user sets for one week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalTargets {
    /// Milliliters per day
    pub water_goal: u32,
    /// Minutes per week
    pub exercise_goal: u32,
    /// Kilocalories per day
    pub calorie_goal: u32,
}

impl Default for GoalTargets {
    fn default() -> Self {
        Self {
            water_goal: DEFAULT_WATER_GOAL,
            exercise_goal: DEFAULT_EXERCISE_GOAL,
            calorie_goal: DEFAULT_CALORIE_GOAL,
        }
    }
}

/// Targets bound to a Sunday..Saturday window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyGoal {
    pub id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub water_goal: u32,
    pub exercise_goal: u32,
    pub calorie_goal: u32,
}

impl WeeklyGoal {
    pub fn new(window: WeekWindow, targets: GoalTargets) -> Self {
        Self {
            id: Uuid::new_v4(),
            start_date: window.start,
            end_date: window.end,
            water_goal: targets.water_goal,
            exercise_goal: targets.exercise_goal,
            calorie_goal: targets.calorie_goal,
        }
    }

    pub fn window(&self) -> WeekWindow {
        WeekWindow {
            start: self.start_date,
            end: self.end_date,
        }
    }

    /// True if `date` lies within the goal's window, both ends inclusive.
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.window().contains(date)
    }

    pub fn targets(&self) -> GoalTargets {
        GoalTargets {
            water_goal: self.water_goal,
            exercise_goal: self.exercise_goal,
            calorie_goal: self.calorie_goal,
        }
    }
}
