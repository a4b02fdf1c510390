mod calorie_intake;
mod exercise;
mod user;
mod water_intake;
mod weekly_goal;

pub use calorie_intake::{CalorieIntake, MealType, NewCalorieIntake};
pub use exercise::{Exercise, NewExercise};
pub use user::{Gender, NewUser, User};
pub use water_intake::WaterIntake;
pub use weekly_goal::{
    GoalTargets, WeeklyGoal, DEFAULT_CALORIE_GOAL, DEFAULT_EXERCISE_GOAL, DEFAULT_WATER_GOAL,
};
