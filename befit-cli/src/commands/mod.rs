mod account;
mod calories;
mod config_cmd;
mod dashboard;
mod exercise;
mod goal;
mod water;

pub use account::{LoginCommand, ProfileCommand, RegisterCommand, WhoamiCommand};
pub use calories::CaloriesCommand;
pub use config_cmd::ConfigCommand;
pub use dashboard::DashboardCommand;
pub use exercise::ExerciseCommand;
pub use goal::GoalCommand;
pub use water::WaterCommand;

use befit_core::{FileStore, Session, User};
use clap::ValueEnum;

/// The session every command runs against.
pub type AppSession = Session<FileStore>;

/// How many entries the "recent" listings show
pub const RECENT_LIMIT: usize = 3;

#[derive(Clone, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Returns the signed-in user or a hint on how to sign in.
pub fn require_user(session: &AppSession) -> Result<&User, Box<dyn std::error::Error>> {
    session
        .user()
        .ok_or_else(|| "Not logged in. Run 'befit login <MOBILE>' or 'befit register' first.".into())
}

/// Renders a percentage as a fixed-width text bar: `[#####-----]  50%`
pub fn progress_bar(percent: f64, width: usize) -> String {
    let clamped = percent.clamp(0.0, 100.0);
    let filled = ((clamped / 100.0) * width as f64).round() as usize;
    format!(
        "[{}{}] {:>3}%",
        "#".repeat(filled),
        "-".repeat(width - filled),
        percent.round() as i64
    )
}
