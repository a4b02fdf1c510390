use befit_core::summary::goal_for;
use befit_core::validation::validate_goal;
use befit_core::GoalTargets;
use clap::{Args, Subcommand};
use serde_json::json;

use super::{require_user, AppSession, OutputFormat};

#[derive(Args)]
pub struct GoalCommand {
    #[command(subcommand)]
    pub command: GoalSubcommand,
}

#[derive(Subcommand)]
pub enum GoalSubcommand {
    /// Set this week's targets (replaces any goal already set this week)
    Set {
        /// Water per day in milliliters (defaults to the current target)
        #[arg(long)]
        water: Option<u32>,

        /// Exercise per week in minutes (defaults to the current target)
        #[arg(long)]
        exercise: Option<u32>,

        /// Calories per day (defaults to the current target)
        #[arg(long)]
        calories: Option<u32>,
    },

    /// Show the targets in effect this week
    Show {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

impl GoalCommand {
    pub fn run(&self, session: &mut AppSession) -> Result<(), Box<dyn std::error::Error>> {
        require_user(session)?;

        match &self.command {
            GoalSubcommand::Set {
                water,
                exercise,
                calories,
            } => {
                // Unspecified targets keep whatever is in effect this week
                let current = current_targets(session);
                let targets = GoalTargets {
                    water_goal: water.unwrap_or(current.water_goal),
                    exercise_goal: exercise.unwrap_or(current.exercise_goal),
                    calorie_goal: calories.unwrap_or(current.calorie_goal),
                };
                validate_goal(&targets)?;

                let goal = session.set_weekly_goal(targets)?;
                println!(
                    "Goals set for {} to {}:",
                    goal.start_date, goal.end_date
                );
                print_targets(&goal.targets());
                Ok(())
            }
            GoalSubcommand::Show { format } => {
                let week = session.current_week();
                let goal = goal_for(session.weekly_goals(), session.today());
                let targets = current_targets(session);

                match format {
                    OutputFormat::Json => {
                        let body = json!({
                            "week": week,
                            "goal_set": goal.is_some(),
                            "targets": targets,
                        });
                        println!("{}", serde_json::to_string_pretty(&body)?);
                    }
                    OutputFormat::Text => {
                        println!("Week of {}", week);
                        if goal.is_none() {
                            println!("No goal set this week; using defaults.");
                        }
                        print_targets(&targets);
                    }
                }
                Ok(())
            }
        }
    }
}

fn current_targets(session: &AppSession) -> GoalTargets {
    befit_core::summary::targets_for(session.weekly_goals(), session.today())
}

fn print_targets(targets: &GoalTargets) {
    println!("  Water:    {} ml/day", targets.water_goal);
    println!("  Exercise: {} min/week", targets.exercise_goal);
    println!("  Calories: {} kcal/day", targets.calorie_goal);
}
