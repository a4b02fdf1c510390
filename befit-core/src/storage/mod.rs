//! Key-value persistence for users and their records.
//!
//! Everything is stored as a JSON document under a string key, the same
//! layout the web client kept in local storage:
//!
//! ```text
//! befit_user                 # last logged in user
//! befit_users                # registry of every registered user
//! befit_water_<user-id>      # [WaterIntake]
//! befit_exercises_<user-id>  # [Exercise]
//! befit_calories_<user-id>   # [CalorieIntake]
//! befit_goals_<user-id>      # [WeeklyGoal]
//! ```

mod error;
mod file_store;
mod key;
mod memory_store;

pub use error::StorageError;
pub use file_store::FileStore;
pub use key::StorageKey;
pub use memory_store::MemoryStore;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// A string-keyed store of serialized values.
pub trait KeyValueStore {
    /// Returns the raw value for `key`, or `None` if nothing is stored.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes `key`. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Loads and decodes the value stored under `key`.
///
/// A value that fails to decode is logged and treated as absent.
pub fn load_json<S, T>(store: &S, key: &StorageKey) -> Result<Option<T>, StorageError>
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned,
{
    let name = key.name();
    let Some(raw) = store.get(&name)? else {
        return Ok(None);
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            tracing::warn!(key = %name, "Ignoring malformed stored value: {}", e);
            Ok(None)
        }
    }
}

/// Loads a stored list, treating a missing or malformed value as empty.
pub fn load_list<S, T>(store: &S, key: &StorageKey) -> Result<Vec<T>, StorageError>
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned,
{
    Ok(load_json(store, key)?.unwrap_or_default())
}

/// Encodes `value` as JSON and stores it under `key`.
pub fn save_json<S, T>(store: &mut S, key: &StorageKey, value: &T) -> Result<(), StorageError>
where
    S: KeyValueStore + ?Sized,
    T: Serialize + ?Sized,
{
    let name = key.name();
    let raw = serde_json::to_string(value).map_err(|e| StorageError::Encode(name.clone(), e))?;
    store.set(&name, &raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_load_json_missing_is_none() {
        let store = MemoryStore::new();
        let value: Option<Vec<u32>> = load_json(&store, &StorageKey::Users).unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_load_json_malformed_is_none() {
        let mut store = MemoryStore::new();
        store.set("befit_users", "{not json").unwrap();

        let value: Option<Vec<u32>> = load_json(&store, &StorageKey::Users).unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_load_list_wrong_shape_is_empty() {
        let mut store = MemoryStore::new();
        let key = StorageKey::Water(Uuid::new_v4());
        store.set(&key.name(), r#"{"date":"2025-03-09"}"#).unwrap();

        let list: Vec<crate::models::WaterIntake> = load_list(&store, &key).unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn test_save_then_load_list() {
        let mut store = MemoryStore::new();
        let key = StorageKey::Goals(Uuid::new_v4());

        save_json(&mut store, &key, &vec![1u32, 2, 3]).unwrap();

        let list: Vec<u32> = load_list(&store, &key).unwrap();
        assert_eq!(list, vec![1, 2, 3]);
    }
}
