use befit_core::summary::{
    calories_by_meal_on, calories_total_on, most_recent, targets_for, Progress,
};
use befit_core::validation::validate_calorie_intake;
use befit_core::{CalorieIntake, MealType, NewCalorieIntake};
use clap::{Args, Subcommand};
use serde_json::json;

use super::{progress_bar, require_user, AppSession, OutputFormat, RECENT_LIMIT};

#[derive(Args)]
pub struct CaloriesCommand {
    #[command(subcommand)]
    pub command: CaloriesSubcommand,
}

#[derive(Subcommand)]
pub enum CaloriesSubcommand {
    /// Log food eaten today
    Add {
        /// Food name
        food: String,

        /// Meal type (breakfast, lunch, dinner, snack)
        #[arg(long = "meal", short = 'm', value_name = "TYPE")]
        meal_type: MealType,

        /// Calories in the portion
        #[arg(long, short)]
        calories: u32,
    },

    /// Show today's calories by meal against the goal
    Today {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

impl CaloriesCommand {
    pub fn run(&self, session: &mut AppSession) -> Result<(), Box<dyn std::error::Error>> {
        require_user(session)?;

        match &self.command {
            CaloriesSubcommand::Add {
                food,
                meal_type,
                calories,
            } => {
                let entry = NewCalorieIntake::new(*meal_type, food.trim(), *calories);
                validate_calorie_intake(&entry)?;

                let intake = session.add_calorie_intake(entry)?;
                println!(
                    "Logged {} ({} kcal) for {}.",
                    intake.food_name, intake.calories, intake.meal_type
                );
                println!();
                print_today(session);
                Ok(())
            }
            CaloriesSubcommand::Today { format } => {
                match format {
                    OutputFormat::Json => {
                        let today = session.today();
                        let by_meal: serde_json::Map<String, serde_json::Value> =
                            calories_by_meal_on(session.calorie_intakes(), today)
                                .into_iter()
                                .map(|(meal, total)| (meal.to_string(), json!(total)))
                                .collect();
                        let entries = todays_entries(session);
                        let body = json!({
                            "date": today,
                            "calories": today_progress(session),
                            "by_meal": by_meal,
                            "entries": entries,
                        });
                        println!("{}", serde_json::to_string_pretty(&body)?);
                    }
                    OutputFormat::Text => print_today(session),
                }
                Ok(())
            }
        }
    }
}

fn todays_entries(session: &AppSession) -> Vec<&CalorieIntake> {
    let today = session.today();
    session
        .calorie_intakes()
        .iter()
        .filter(|c| c.date == today)
        .collect()
}

fn today_progress(session: &AppSession) -> Progress {
    let today = session.today();
    let goal = targets_for(session.weekly_goals(), today).calorie_goal;
    Progress::new(calories_total_on(session.calorie_intakes(), today), goal)
}

fn print_today(session: &AppSession) {
    let progress = today_progress(session);
    println!(
        "Today's calories: {} kcal / {} kcal",
        progress.current, progress.goal
    );
    println!("{}", progress_bar(progress.percent, 30));

    println!();
    for (meal, total) in calories_by_meal_on(session.calorie_intakes(), session.today()) {
        println!("  {:10} {:>5} kcal", meal, total);
    }

    let entries = todays_entries(session);
    if entries.is_empty() {
        println!("\nNo food logged today.");
        return;
    }

    println!("\nRecent:");
    for intake in most_recent(&entries, RECENT_LIMIT) {
        println!("  {}", intake);
    }
}
