use std::fmt;
use uuid::Uuid;

/// Keys under which session data is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKey {
    /// The last logged in user
    CurrentUser,
    /// All registered users
    Users,
    Water(Uuid),
    Exercises(Uuid),
    Calories(Uuid),
    Goals(Uuid),
}

impl StorageKey {
    /// Returns the key string used in the backing store.
    pub fn name(&self) -> String {
        match self {
            StorageKey::CurrentUser => "befit_user".to_string(),
            StorageKey::Users => "befit_users".to_string(),
            StorageKey::Water(id) => format!("befit_water_{}", id),
            StorageKey::Exercises(id) => format!("befit_exercises_{}", id),
            StorageKey::Calories(id) => format!("befit_calories_{}", id),
            StorageKey::Goals(id) => format!("befit_goals_{}", id),
        }
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names() {
        let id = Uuid::nil();
        assert_eq!(StorageKey::CurrentUser.name(), "befit_user");
        assert_eq!(StorageKey::Users.name(), "befit_users");
        assert_eq!(
            StorageKey::Water(id).name(),
            "befit_water_00000000-0000-0000-0000-000000000000"
        );
        assert!(StorageKey::Exercises(id).name().starts_with("befit_exercises_"));
        assert!(StorageKey::Calories(id).name().starts_with("befit_calories_"));
        assert!(StorageKey::Goals(id).name().starts_with("befit_goals_"));
    }

    #[test]
    fn test_record_keys_are_scoped_per_user() {
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());

        assert_ne!(StorageKey::Water(a).name(), StorageKey::Water(b).name());
        assert_ne!(StorageKey::Goals(a).name(), StorageKey::Goals(b).name());
        assert_ne!(StorageKey::Water(a).name(), StorageKey::Exercises(a).name());
    }
}
