use befit_core::summary::{exercise_minutes_in, exercises_in, most_recent, targets_for, Progress};
use befit_core::validation::validate_exercise;
use befit_core::{Exercise, NewExercise};
use clap::{Args, Subcommand};
use serde_json::json;

use super::{progress_bar, require_user, AppSession, OutputFormat, RECENT_LIMIT};

#[derive(Args)]
pub struct ExerciseCommand {
    #[command(subcommand)]
    pub command: ExerciseSubcommand,
}

#[derive(Subcommand)]
pub enum ExerciseSubcommand {
    /// Log an exercise session for today
    Add {
        /// Exercise name (e.g. "Running")
        name: String,

        /// Duration in minutes
        #[arg(long, short)]
        duration: u32,

        /// Calories burned
        #[arg(long = "calories-burned", short = 'c', default_value = "0")]
        calories_burned: u32,
    },

    /// Show this week's exercise against the weekly goal
    Week {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,

        /// List every session this week, not just the most recent
        #[arg(long)]
        all: bool,
    },
}

impl ExerciseCommand {
    pub fn run(&self, session: &mut AppSession) -> Result<(), Box<dyn std::error::Error>> {
        require_user(session)?;

        match &self.command {
            ExerciseSubcommand::Add {
                name,
                duration,
                calories_burned,
            } => {
                let entry = NewExercise::new(name.trim(), *duration, *calories_burned);
                validate_exercise(&entry)?;

                let exercise = session.add_exercise(entry)?;
                println!(
                    "Logged {} for {} minutes ({} kcal burned).",
                    exercise.name, exercise.duration, exercise.calories_burned
                );
                println!();
                print_week(session, false);
                Ok(())
            }
            ExerciseSubcommand::Week { format, all } => {
                match format {
                    OutputFormat::Json => {
                        let week = session.current_week();
                        let sessions = exercises_in(session.exercises(), week);
                        let body = json!({
                            "week": week,
                            "exercise": week_progress(session),
                            "exercises": sessions,
                        });
                        println!("{}", serde_json::to_string_pretty(&body)?);
                    }
                    OutputFormat::Text => print_week(session, *all),
                }
                Ok(())
            }
        }
    }
}

fn week_progress(session: &AppSession) -> Progress {
    let week = session.current_week();
    let goal = targets_for(session.weekly_goals(), session.today()).exercise_goal;
    Progress::new(exercise_minutes_in(session.exercises(), week), goal)
}

fn print_week(session: &AppSession, all: bool) {
    let week = session.current_week();
    let progress = week_progress(session);

    println!("Week of {}", week);
    println!(
        "This week: {} min / {} min",
        progress.current, progress.goal
    );
    println!("{}", progress_bar(progress.percent, 30));

    let this_week: Vec<Exercise> = exercises_in(session.exercises(), week)
        .into_iter()
        .cloned()
        .collect();
    if this_week.is_empty() {
        println!("\nNo exercises logged this week.");
        return;
    }

    let shown: Vec<&Exercise> = if all {
        this_week.iter().rev().collect()
    } else {
        most_recent(&this_week, RECENT_LIMIT)
    };

    println!("\n{}", if all { "Sessions:" } else { "Recent:" });
    for exercise in shown {
        println!("  {}", exercise);
    }
    if !all && this_week.len() > RECENT_LIMIT {
        println!("  ... {} more (use --all)", this_week.len() - RECENT_LIMIT);
    }
}
