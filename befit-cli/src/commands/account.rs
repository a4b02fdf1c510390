//! Registration, login and profile commands.

use befit_core::validation::{validate_mobile, validate_new_user};
use befit_core::{Bmi, Gender, NewUser};
use clap::Args;
use serde::Serialize;

use super::{require_user, AppSession, OutputFormat};

/// Create an account and sign in
#[derive(Args)]
pub struct RegisterCommand {
    /// Full name
    #[arg(long)]
    name: String,

    /// Gender (male, female, other)
    #[arg(long)]
    gender: Gender,

    /// Weight in kilograms
    #[arg(long)]
    weight: f64,

    /// Height in centimeters
    #[arg(long)]
    height: f64,

    /// Age in years
    #[arg(long)]
    age: u8,

    /// 10-digit mobile number, used to log in
    #[arg(long)]
    mobile: String,
}

impl RegisterCommand {
    pub fn run(&self, session: &mut AppSession) -> Result<(), Box<dyn std::error::Error>> {
        let new_user = NewUser {
            name: self.name.trim().to_string(),
            gender: self.gender,
            weight: self.weight,
            height: self.height,
            age: self.age,
            mobile: self.mobile.trim().to_string(),
        };
        validate_new_user(&new_user)?;

        if !session.register(new_user)? {
            return Err(format!(
                "Mobile number {} is already registered. Use 'befit login {}' instead.",
                self.mobile.trim(),
                self.mobile.trim()
            )
            .into());
        }

        let user = require_user(session)?;
        println!("Welcome to BeFit, {}!", user.name);
        println!("You are now logged in with mobile {}.", user.mobile);
        Ok(())
    }
}

/// Sign in with a registered mobile number
#[derive(Args)]
pub struct LoginCommand {
    /// 10-digit mobile number
    mobile: String,
}

impl LoginCommand {
    pub fn run(&self, session: &mut AppSession) -> Result<(), Box<dyn std::error::Error>> {
        let mobile = self.mobile.trim();
        validate_mobile(mobile)?;

        if !session.login(mobile)? {
            return Err(format!(
                "No account found for mobile {}. Use 'befit register' to create one.",
                mobile
            )
            .into());
        }

        let user = require_user(session)?;
        println!("Welcome back, {}!", user.name);
        Ok(())
    }
}

/// Show who is logged in
#[derive(Args)]
pub struct WhoamiCommand {
    /// Output format
    #[arg(long, short, value_enum, default_value = "text")]
    format: OutputFormat,
}

impl WhoamiCommand {
    pub fn run(&self, session: &AppSession) -> Result<(), Box<dyn std::error::Error>> {
        match (session.user(), &self.format) {
            (Some(user), OutputFormat::Json) => {
                println!("{}", serde_json::to_string_pretty(user)?);
            }
            (Some(user), OutputFormat::Text) => {
                println!("{} ({})", user.name, user.mobile);
            }
            (None, OutputFormat::Json) => println!("null"),
            (None, OutputFormat::Text) => println!("Not logged in"),
        }
        Ok(())
    }
}

/// Show the profile and BMI of the logged in user
#[derive(Args)]
pub struct ProfileCommand {
    /// Output format
    #[arg(long, short, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Serialize)]
struct ProfileView<'a> {
    #[serde(flatten)]
    user: &'a befit_core::User,
    bmi: Option<Bmi>,
}

impl ProfileCommand {
    pub fn run(&self, session: &AppSession) -> Result<(), Box<dyn std::error::Error>> {
        let user = require_user(session)?;
        let bmi = Bmi::for_user(user);

        match self.format {
            OutputFormat::Json => {
                let view = ProfileView { user, bmi };
                println!("{}", serde_json::to_string_pretty(&view)?);
            }
            OutputFormat::Text => {
                println!("{}", user);
                println!();
                match bmi {
                    Some(bmi) => println!("BMI:    {}", bmi),
                    None => println!("BMI:    unavailable"),
                }
            }
        }
        Ok(())
    }
}
