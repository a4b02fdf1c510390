//! Read-side aggregates over a user's records.
//!
//! Nothing here is persisted; every figure is recomputed from the record
//! collections and a reference date.

use chrono::NaiveDate;
use serde::Serialize;

use crate::calendar::WeekWindow;
use crate::clock::Clock;
use crate::models::{CalorieIntake, Exercise, GoalTargets, MealType, WaterIntake, WeeklyGoal};
use crate::session::Session;
use crate::storage::KeyValueStore;

/// Water logged on `date`, in milliliters.
pub fn water_total_on(records: &[WaterIntake], date: NaiveDate) -> i64 {
    records
        .iter()
        .filter(|w| w.date == date)
        .fold(0, |total: i64, w| total.saturating_add(w.amount))
}

/// Sums `u32` quantities without overflowing, saturating at `i64::MAX`.
fn saturating_total(values: impl Iterator<Item = u32>) -> i64 {
    values.fold(0, |total: i64, v| total.saturating_add(i64::from(v)))
}

/// Calories eaten on `date`.
pub fn calories_total_on(records: &[CalorieIntake], date: NaiveDate) -> i64 {
    saturating_total(
        records
            .iter()
            .filter(|c| c.date == date)
            .map(|c| c.calories),
    )
}

/// Calories eaten on `date`, split by meal type in breakfast..snack order.
pub fn calories_by_meal_on(records: &[CalorieIntake], date: NaiveDate) -> Vec<(MealType, i64)> {
    MealType::ALL
        .into_iter()
        .map(|meal| {
            let total = saturating_total(
                records
                    .iter()
                    .filter(|c| c.date == date && c.meal_type == meal)
                    .map(|c| c.calories),
            );
            (meal, total)
        })
        .collect()
}

/// Exercises dated within `week`, in the order they were logged.
pub fn exercises_in(records: &[Exercise], week: WeekWindow) -> Vec<&Exercise> {
    records.iter().filter(|e| week.contains(e.date)).collect()
}

/// Total exercise minutes within `week`.
pub fn exercise_minutes_in(records: &[Exercise], week: WeekWindow) -> i64 {
    saturating_total(
        records
            .iter()
            .filter(|e| week.contains(e.date))
            .map(|e| e.duration),
    )
}

/// The goal whose window contains `date`.
pub fn goal_for(goals: &[WeeklyGoal], date: NaiveDate) -> Option<&WeeklyGoal> {
    goals.iter().find(|g| g.covers(date))
}

/// Targets in effect on `date`, falling back to the defaults.
pub fn targets_for(goals: &[WeeklyGoal], date: NaiveDate) -> GoalTargets {
    goal_for(goals, date)
        .map(WeeklyGoal::targets)
        .unwrap_or_default()
}

/// Percentage of `goal` reached, capped at 100.
///
/// A non-positive goal counts as already reached.
pub fn progress_percent(accumulated: f64, goal: f64) -> f64 {
    if goal <= 0.0 {
        return 100.0;
    }
    (accumulated / goal * 100.0).min(100.0)
}

/// The last `n` items, newest first.
pub fn most_recent<T>(items: &[T], n: usize) -> Vec<&T> {
    items.iter().rev().take(n).collect()
}

/// Progress toward one target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Progress {
    pub current: i64,
    pub goal: u32,
    pub percent: f64,
}

impl Progress {
    pub fn new(current: i64, goal: u32) -> Self {
        Self {
            current,
            goal,
            percent: progress_percent(current as f64, goal as f64),
        }
    }

    /// Percentage rounded for display.
    pub fn rounded_percent(&self) -> i64 {
        self.percent.round() as i64
    }
}

/// Today's picture across water, exercise and calories.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub date: NaiveDate,
    pub week: WeekWindow,
    /// Whether the targets come from a goal the user set
    pub goal_set: bool,
    pub targets: GoalTargets,
    pub water: Progress,
    pub exercise: Progress,
    pub calories: Progress,
    pub calories_by_meal: Vec<(MealType, i64)>,
}

impl Dashboard {
    /// Builds the dashboard for `date` from raw record collections.
    pub fn compute(
        date: NaiveDate,
        water: &[WaterIntake],
        exercises: &[Exercise],
        calories: &[CalorieIntake],
        goals: &[WeeklyGoal],
    ) -> Self {
        let week = WeekWindow::containing(date);
        let goal = goal_for(goals, date);
        let targets = goal.map(WeeklyGoal::targets).unwrap_or_default();

        Self {
            date,
            week,
            goal_set: goal.is_some(),
            targets,
            water: Progress::new(water_total_on(water, date), targets.water_goal),
            exercise: Progress::new(exercise_minutes_in(exercises, week), targets.exercise_goal),
            calories: Progress::new(calories_total_on(calories, date), targets.calorie_goal),
            calories_by_meal: calories_by_meal_on(calories, date),
        }
    }

    /// Builds the dashboard for the session's current user and day.
    pub fn for_session<S: KeyValueStore, C: Clock>(session: &Session<S, C>) -> Self {
        Self::compute(
            session.today(),
            session.water_intakes(),
            session.exercises(),
            session.calorie_intakes(),
            session.weekly_goals(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::models::{Gender, NewCalorieIntake, NewExercise, NewUser};
    use crate::storage::MemoryStore;
    use chrono::{Duration, TimeZone, Utc};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn signed_in() -> (Session<MemoryStore, FixedClock>, FixedClock) {
        // Wednesday
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2025, 3, 12, 7, 0, 0).unwrap());
        let mut session = Session::with_clock(MemoryStore::new(), clock.clone());
        session
            .register(NewUser {
                name: "Meera".to_string(),
                gender: Gender::Female,
                weight: 58.0,
                height: 162.0,
                age: 27,
                mobile: "9998887776".to_string(),
            })
            .unwrap();
        (session, clock)
    }

    #[test]
    fn test_progress_is_capped() {
        assert_eq!(progress_percent(5000.0, 2000.0), 100.0);
        assert_eq!(progress_percent(500.0, 2000.0), 25.0);
        assert_eq!(progress_percent(0.0, 2000.0), 0.0);
    }

    #[test]
    fn test_progress_zero_goal() {
        assert_eq!(progress_percent(10.0, 0.0), 100.0);
    }

    #[test]
    fn test_targets_default_without_goal() {
        let targets = targets_for(&[], date(2025, 3, 12));
        assert_eq!(targets, GoalTargets::default());
    }

    #[test]
    fn test_goal_lookup_matches_covering_week_only() {
        let targets = GoalTargets {
            water_goal: 3000,
            exercise_goal: 200,
            calorie_goal: 1800,
        };
        let goals = vec![WeeklyGoal::new(
            WeekWindow::containing(date(2025, 3, 12)),
            targets,
        )];

        assert_eq!(targets_for(&goals, date(2025, 3, 15)), targets);
        assert_eq!(targets_for(&goals, date(2025, 3, 16)), GoalTargets::default());
    }

    #[test]
    fn test_water_three_glasses_example() {
        let (mut session, _clock) = signed_in();
        for _ in 0..3 {
            session.add_water_intake(250).unwrap();
        }

        let dashboard = Dashboard::for_session(&session);

        assert_eq!(dashboard.water.current, 750);
        assert_eq!(dashboard.water.goal, 2000);
        assert_eq!(dashboard.water.percent, 37.5);
        assert_eq!(dashboard.water.rounded_percent(), 38);
        assert!(!dashboard.goal_set);
    }

    #[test]
    fn test_weekly_exercise_total_excludes_other_weeks() {
        let (mut session, clock) = signed_in();
        session
            .add_exercise(NewExercise::new("Swim", 40, 350))
            .unwrap();
        // Saturday, same week
        clock.advance(Duration::days(3));
        session
            .add_exercise(NewExercise::new("Walk", 30, 120))
            .unwrap();
        // Sunday, next week
        clock.advance(Duration::days(1));
        session
            .add_exercise(NewExercise::new("Run", 25, 280))
            .unwrap();

        let previous = WeekWindow::containing(date(2025, 3, 12));
        assert_eq!(exercise_minutes_in(session.exercises(), previous), 70);
        assert_eq!(exercises_in(session.exercises(), previous).len(), 2);

        let dashboard = Dashboard::for_session(&session);
        assert_eq!(dashboard.exercise.current, 25);
    }

    #[test]
    fn test_calories_today_and_by_meal() {
        let (mut session, clock) = signed_in();
        session
            .add_calorie_intake(NewCalorieIntake::new(MealType::Breakfast, "Oats", 300))
            .unwrap();
        session
            .add_calorie_intake(NewCalorieIntake::new(MealType::Snack, "Banana", 105))
            .unwrap();
        session
            .add_calorie_intake(NewCalorieIntake::new(MealType::Snack, "Nuts", 170))
            .unwrap();
        clock.advance(Duration::days(1));
        session
            .add_calorie_intake(NewCalorieIntake::new(MealType::Dinner, "Curry", 650))
            .unwrap();

        let yesterday = date(2025, 3, 12);
        assert_eq!(calories_total_on(session.calorie_intakes(), yesterday), 575);

        let by_meal = calories_by_meal_on(session.calorie_intakes(), yesterday);
        assert_eq!(
            by_meal,
            vec![
                (MealType::Breakfast, 300),
                (MealType::Lunch, 0),
                (MealType::Dinner, 0),
                (MealType::Snack, 275),
            ]
        );

        let dashboard = Dashboard::for_session(&session);
        assert_eq!(dashboard.calories.current, 650);
    }

    #[test]
    fn test_dashboard_uses_goal_set_this_week() {
        let (mut session, _clock) = signed_in();
        session
            .set_weekly_goal(GoalTargets {
                water_goal: 1000,
                exercise_goal: 60,
                calorie_goal: 2500,
            })
            .unwrap();
        session.add_water_intake(1500).unwrap();

        let dashboard = Dashboard::for_session(&session);
        assert!(dashboard.goal_set);
        assert_eq!(dashboard.water.percent, 100.0);
        assert_eq!(dashboard.exercise.goal, 60);
    }

    #[test]
    fn test_huge_entries_saturate_instead_of_overflowing() {
        let (mut session, _clock) = signed_in();
        for _ in 0..2 {
            session
                .add_calorie_intake(NewCalorieIntake::new(MealType::Lunch, "Feast", 3_000_000_000))
                .unwrap();
            session
                .add_exercise(NewExercise::new("Ultra", 3_000_000_000, 0))
                .unwrap();
        }
        session.add_water_intake(i64::MAX).unwrap();
        session.add_water_intake(i64::MAX).unwrap();

        let dashboard = Dashboard::for_session(&session);

        assert_eq!(dashboard.calories.current, 6_000_000_000);
        assert_eq!(dashboard.exercise.current, 6_000_000_000);
        assert_eq!(dashboard.water.current, i64::MAX);
        assert_eq!(dashboard.calories.percent, 100.0);
        assert_eq!(dashboard.calories_by_meal[1], (MealType::Lunch, 6_000_000_000));
    }

    #[test]
    fn test_water_total_saturates_across_records() {
        let day = date(2025, 3, 12);
        let records = [WaterIntake::new(day, i64::MAX), WaterIntake::new(day, 10)];
        assert_eq!(water_total_on(&records, day), i64::MAX);
    }

    #[test]
    fn test_most_recent_newest_first() {
        let items = [1, 2, 3, 4, 5];
        assert_eq!(most_recent(&items, 3), vec![&5, &4, &3]);
        assert_eq!(most_recent(&items[..1], 3), vec![&1]);
    }
}
