use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Water consumed on one calendar day, in milliliters.
///
/// A user has at most one record per date; further intake on the same day
/// is added to `amount`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaterIntake {
    pub date: NaiveDate,
    pub amount: i64,
}

impl WaterIntake {
    pub fn new(date: NaiveDate, amount: i64) -> Self {
        Self { date, amount }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_water_intake_json_shape() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
        let json = serde_json::to_string(&WaterIntake::new(date, 250)).unwrap();
        assert_eq!(json, r#"{"date":"2025-03-09","amount":250}"#);
    }
}
