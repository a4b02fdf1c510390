//! BeFit Core Library
//!
//! Models, the signed-in session and its key-value persistence, and the
//! summaries built on top of them.

pub mod calendar;
pub mod clock;
pub mod health;
pub mod models;
pub mod session;
pub mod storage;
pub mod summary;
pub mod validation;

pub use calendar::{day_key, WeekWindow};
pub use clock::{Clock, FixedClock, SystemClock};
pub use health::{Bmi, BmiCategory};
pub use models::{
    CalorieIntake, Exercise, Gender, GoalTargets, MealType, NewCalorieIntake, NewExercise,
    NewUser, User, WaterIntake, WeeklyGoal,
};
pub use session::{Session, SessionError};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError, StorageKey};
pub use summary::{Dashboard, Progress};
pub use validation::ValidationError;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
