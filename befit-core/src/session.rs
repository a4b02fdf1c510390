//! The signed-in user's session and working set.
//!
//! A [`Session`] holds the current user and their four record collections,
//! and mirrors every change to a [`KeyValueStore`] keyed by user id.
//!
//! # Lifecycle
//!
//! 1. `register` or `login` selects a user and loads their records
//! 2. `add_*` / `set_weekly_goal` mutate the working set and call `save`
//! 3. `logout` drops the working set; persisted records stay in the store
//!
//! `restore` resumes whichever user last logged in, so a process can pick up
//! where the previous one left off.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::calendar::{day_key, WeekWindow};
use crate::clock::{Clock, SystemClock};
use crate::models::{
    CalorieIntake, Exercise, GoalTargets, NewCalorieIntake, NewExercise, NewUser, User,
    WaterIntake, WeeklyGoal,
};
use crate::storage::{load_json, load_list, save_json, KeyValueStore, StorageError, StorageKey};

/// Errors from session mutations.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// A record operation was attempted with nobody logged in.
    #[error("Not logged in")]
    NotSignedIn,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// The single active user session.
pub struct Session<S, C = SystemClock> {
    store: S,
    clock: C,
    user: Option<User>,
    water_intakes: Vec<WaterIntake>,
    exercises: Vec<Exercise>,
    calorie_intakes: Vec<CalorieIntake>,
    weekly_goals: Vec<WeeklyGoal>,
}

impl<S: KeyValueStore> Session<S, SystemClock> {
    /// Creates a signed-out session over `store` using the system clock.
    pub fn new(store: S) -> Self {
        Self::with_clock(store, SystemClock)
    }
}

impl<S: KeyValueStore, C: Clock> Session<S, C> {
    /// Creates a signed-out session with an explicit clock.
    pub fn with_clock(store: S, clock: C) -> Self {
        Self {
            store,
            clock,
            user: None,
            water_intakes: Vec::new(),
            exercises: Vec::new(),
            calorie_intakes: Vec::new(),
            weekly_goals: Vec::new(),
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn water_intakes(&self) -> &[WaterIntake] {
        &self.water_intakes
    }

    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    pub fn calorie_intakes(&self) -> &[CalorieIntake] {
        &self.calorie_intakes
    }

    pub fn weekly_goals(&self) -> &[WeeklyGoal] {
        &self.weekly_goals
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Today's calendar-day key according to the session clock.
    pub fn today(&self) -> NaiveDate {
        day_key(self.clock.now())
    }

    /// The Sunday..Saturday window containing today.
    pub fn current_week(&self) -> WeekWindow {
        WeekWindow::containing(self.today())
    }

    /// All registered users, as persisted.
    pub fn registered_users(&self) -> Result<Vec<User>, StorageError> {
        load_list(&self.store, &StorageKey::Users)
    }

    /// Registers a new user and signs them in.
    ///
    /// Returns `Ok(false)` without touching any state if the mobile number is
    /// already registered.
    pub fn register(&mut self, new_user: NewUser) -> Result<bool, StorageError> {
        let mut users = self.registered_users()?;
        if users.iter().any(|u| u.mobile == new_user.mobile) {
            tracing::info!(mobile = %new_user.mobile, "Registration rejected: mobile already registered");
            return Ok(false);
        }

        let user = new_user.into_user(Uuid::new_v4());
        users.push(user.clone());
        save_json(&mut self.store, &StorageKey::Users, &users)?;

        tracing::info!(user_id = %user.id, "Registered user");
        self.sign_in(user)?;
        Ok(true)
    }

    /// Signs in the registered user with an exactly matching mobile number.
    ///
    /// Returns `Ok(false)` and leaves the current session untouched if no
    /// user matches.
    pub fn login(&mut self, mobile: &str) -> Result<bool, StorageError> {
        let found = self
            .registered_users()?
            .into_iter()
            .find(|u| u.mobile == mobile);

        match found {
            Some(user) => {
                tracing::info!(user_id = %user.id, "Logged in");
                self.sign_in(user)?;
                Ok(true)
            }
            None => {
                tracing::info!(mobile = %mobile, "Login rejected: unknown mobile");
                Ok(false)
            }
        }
    }

    /// Resumes the last logged in user, if any.
    pub fn restore(&mut self) -> Result<bool, StorageError> {
        let Some(user) = load_json::<_, User>(&self.store, &StorageKey::CurrentUser)? else {
            return Ok(false);
        };

        tracing::debug!(user_id = %user.id, "Restoring session");
        let records = Records::load(&self.store, user.id)?;
        self.install(user, records);
        Ok(true)
    }

    /// Clears the in-memory session. Persisted records are kept.
    pub fn logout(&mut self) -> Result<(), StorageError> {
        if let Some(user) = self.user.take() {
            tracing::info!(user_id = %user.id, "Logged out");
        }
        self.water_intakes.clear();
        self.exercises.clear();
        self.calorie_intakes.clear();
        self.weekly_goals.clear();
        self.store.remove(&StorageKey::CurrentUser.name())
    }

    /// Adds `amount` milliliters to today's water record, creating it if
    /// needed.
    ///
    /// The amount is recorded as given, including zero or negative values.
    /// The day's total saturates rather than overflowing.
    pub fn add_water_intake(&mut self, amount: i64) -> Result<(), SessionError> {
        self.require_user()?;
        let today = self.today();
        let previous = self.water_intakes.clone();

        match self.water_intakes.iter_mut().find(|w| w.date == today) {
            Some(record) => record.amount = record.amount.saturating_add(amount),
            None => self.water_intakes.push(WaterIntake::new(today, amount)),
        }

        if let Err(e) = self.save() {
            self.water_intakes = previous;
            return Err(e);
        }
        Ok(())
    }

    /// Logs an exercise session for today.
    pub fn add_exercise(&mut self, entry: NewExercise) -> Result<Exercise, SessionError> {
        self.require_user()?;
        let exercise = entry.into_exercise(self.today());
        self.exercises.push(exercise.clone());
        if let Err(e) = self.save() {
            self.exercises.pop();
            return Err(e);
        }
        Ok(exercise)
    }

    /// Logs a food entry for today.
    pub fn add_calorie_intake(
        &mut self,
        entry: NewCalorieIntake,
    ) -> Result<CalorieIntake, SessionError> {
        self.require_user()?;
        let intake = entry.into_calorie_intake(self.today());
        self.calorie_intakes.push(intake.clone());
        if let Err(e) = self.save() {
            self.calorie_intakes.pop();
            return Err(e);
        }
        Ok(intake)
    }

    /// Sets the targets for the current week, replacing any goal already set
    /// for exactly this week. Goals for other weeks are kept.
    pub fn set_weekly_goal(&mut self, targets: GoalTargets) -> Result<WeeklyGoal, SessionError> {
        self.require_user()?;
        let goal = WeeklyGoal::new(self.current_week(), targets);
        let previous = self.weekly_goals.clone();

        self.weekly_goals
            .retain(|g| g.start_date != goal.start_date || g.end_date != goal.end_date);
        self.weekly_goals.push(goal.clone());

        if let Err(e) = self.save() {
            self.weekly_goals = previous;
            return Err(e);
        }
        Ok(goal)
    }

    /// Writes the four record collections under the current user's keys.
    pub fn save(&mut self) -> Result<(), SessionError> {
        let user_id = self.require_user()?;

        save_json(&mut self.store, &StorageKey::Water(user_id), &self.water_intakes)?;
        save_json(&mut self.store, &StorageKey::Exercises(user_id), &self.exercises)?;
        save_json(
            &mut self.store,
            &StorageKey::Calories(user_id),
            &self.calorie_intakes,
        )?;
        save_json(&mut self.store, &StorageKey::Goals(user_id), &self.weekly_goals)?;

        tracing::debug!(%user_id, "Saved session records");
        Ok(())
    }

    fn require_user(&self) -> Result<Uuid, SessionError> {
        self.user
            .as_ref()
            .map(|u| u.id)
            .ok_or(SessionError::NotSignedIn)
    }

    /// Switches to `user`. The current session is left as it was if reading
    /// their records or writing the marker fails.
    fn sign_in(&mut self, user: User) -> Result<(), StorageError> {
        let records = Records::load(&self.store, user.id)?;
        save_json(&mut self.store, &StorageKey::CurrentUser, &user)?;
        self.install(user, records);
        Ok(())
    }

    fn install(&mut self, user: User, records: Records) {
        self.user = Some(user);
        self.water_intakes = records.water_intakes;
        self.exercises = records.exercises;
        self.calorie_intakes = records.calorie_intakes;
        self.weekly_goals = records.weekly_goals;
    }
}

/// A user's stored record collections, read before the session switches.
struct Records {
    water_intakes: Vec<WaterIntake>,
    exercises: Vec<Exercise>,
    calorie_intakes: Vec<CalorieIntake>,
    weekly_goals: Vec<WeeklyGoal>,
}

impl Records {
    fn load<S: KeyValueStore>(store: &S, user_id: Uuid) -> Result<Self, StorageError> {
        Ok(Self {
            water_intakes: load_list(store, &StorageKey::Water(user_id))?,
            exercises: load_list(store, &StorageKey::Exercises(user_id))?,
            calorie_intakes: load_list(store, &StorageKey::Calories(user_id))?,
            weekly_goals: load_list(store, &StorageKey::Goals(user_id))?,
        })
    }
}
