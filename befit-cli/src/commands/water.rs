use befit_core::summary::{targets_for, water_total_on, Progress};
use befit_core::validation::validate_water_amount;
use clap::{Args, Subcommand};
use serde_json::json;

use super::{progress_bar, require_user, AppSession, OutputFormat};
use crate::config::Config;

#[derive(Args)]
pub struct WaterCommand {
    #[command(subcommand)]
    pub command: WaterSubcommand,
}

#[derive(Subcommand)]
pub enum WaterSubcommand {
    /// Log water you drank today
    Add {
        /// Amount in milliliters (defaults to the configured glass size)
        amount: Option<i64>,
    },

    /// Show today's intake against the goal
    Today {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

impl WaterCommand {
    pub fn run(
        &self,
        session: &mut AppSession,
        config: &Config,
    ) -> Result<(), Box<dyn std::error::Error>> {
        require_user(session)?;

        match &self.command {
            WaterSubcommand::Add { amount } => {
                let amount = amount.unwrap_or(config.default_water_amount.value);
                validate_water_amount(amount)?;

                session.add_water_intake(amount)?;
                println!("Added {}ml of water.", amount);
                print_today(session);
                Ok(())
            }
            WaterSubcommand::Today { format } => {
                match format {
                    OutputFormat::Json => {
                        let progress = today_progress(session);
                        let body = json!({ "date": session.today(), "water": progress });
                        println!("{}", serde_json::to_string_pretty(&body)?);
                    }
                    OutputFormat::Text => print_today(session),
                }
                Ok(())
            }
        }
    }
}

fn today_progress(session: &AppSession) -> Progress {
    let today = session.today();
    let goal = targets_for(session.weekly_goals(), today).water_goal;
    Progress::new(water_total_on(session.water_intakes(), today), goal)
}

fn print_today(session: &AppSession) {
    let progress = today_progress(session);
    println!(
        "Today's intake: {}ml / {}ml",
        progress.current, progress.goal
    );
    println!("{}", progress_bar(progress.percent, 30));
}
