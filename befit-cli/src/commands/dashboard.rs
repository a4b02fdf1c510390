use befit_core::{Bmi, Dashboard};
use clap::Args;

use super::{progress_bar, require_user, AppSession, OutputFormat};

/// Show today's progress across water, exercise and calories
#[derive(Args)]
pub struct DashboardCommand {
    /// Output format
    #[arg(long, short, value_enum, default_value = "text")]
    format: OutputFormat,
}

impl DashboardCommand {
    pub fn run(&self, session: &AppSession) -> Result<(), Box<dyn std::error::Error>> {
        let user = require_user(session)?;
        let dashboard = Dashboard::for_session(session);

        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&dashboard)?);
            }
            OutputFormat::Text => {
                println!("Hello, {}!", user.name);
                println!("{}", dashboard.date);
                println!("{}", "=".repeat(60));

                let rows = [
                    ("Water", &dashboard.water, "ml"),
                    ("Exercise", &dashboard.exercise, "min this week"),
                    ("Calories", &dashboard.calories, "kcal"),
                ];
                for (label, progress, unit) in rows {
                    println!(
                        "{:9} {} {} / {} {}",
                        label,
                        progress_bar(progress.percent, 20),
                        progress.current,
                        progress.goal,
                        unit
                    );
                }

                if !dashboard.goal_set {
                    println!("\nNo goal set for {}; showing defaults.", dashboard.week);
                }
                if let Some(bmi) = Bmi::for_user(user) {
                    println!("\nBMI: {}", bmi);
                }
            }
        }
        Ok(())
    }
}
