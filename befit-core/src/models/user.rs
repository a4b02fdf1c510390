use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        };
        f.pad(name)
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            _ => Err(format!(
                "Invalid gender '{}'. Valid options: male, female, other",
                s
            )),
        }
    }
}

/// A registered user profile.
///
/// `mobile` is the login key and is unique across the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub gender: Gender,
    /// Body weight in kilograms
    pub weight: f64,
    /// Height in centimeters
    pub height: f64,
    pub age: u8,
    pub mobile: String,
}

/// Profile data supplied at registration; the id is assigned by the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub gender: Gender,
    pub weight: f64,
    pub height: f64,
    pub age: u8,
    pub mobile: String,
}

impl NewUser {
    pub fn into_user(self, id: Uuid) -> User {
        User {
            id,
            name: self.name,
            gender: self.gender,
            weight: self.weight,
            height: self.height,
            age: self.age,
            mobile: self.mobile,
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "{}", "=".repeat(self.name.len().max(10)))?;
        writeln!(f, "Mobile: {}", self.mobile)?;
        writeln!(f, "Gender: {}", self.gender)?;
        writeln!(f, "Age:    {}", self.age)?;
        writeln!(f, "Weight: {} kg", self.weight)?;
        write!(f, "Height: {} cm", self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NewUser {
        NewUser {
            name: "Asha".to_string(),
            gender: Gender::Female,
            weight: 62.5,
            height: 168.0,
            age: 31,
            mobile: "9998887776".to_string(),
        }
    }

    #[test]
    fn test_gender_from_str() {
        assert_eq!("male".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("F".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!(" Other ".parse::<Gender>().unwrap(), Gender::Other);
        assert!("unknown".parse::<Gender>().is_err());
    }

    #[test]
    fn test_into_user_keeps_profile() {
        let id = Uuid::new_v4();
        let user = sample().into_user(id);

        assert_eq!(user.id, id);
        assert_eq!(user.name, "Asha");
        assert_eq!(user.mobile, "9998887776");
        assert_eq!(user.gender, Gender::Female);
    }

    #[test]
    fn test_user_json_shape() {
        let user = sample().into_user(Uuid::nil());
        let value = serde_json::to_value(&user).unwrap();

        assert_eq!(value["gender"], "female");
        assert_eq!(value["mobile"], "9998887776");
        assert_eq!(value["id"], "00000000-0000-0000-0000-000000000000");
    }

    #[test]
    fn test_user_display() {
        let output = format!("{}", sample().into_user(Uuid::new_v4()));
        assert!(output.contains("Asha"));
        assert!(output.contains("Mobile: 9998887776"));
        assert!(output.contains("168 cm"));
    }
}
