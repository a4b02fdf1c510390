use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;

use befit_core::FileStore;
use commands::{
    AppSession, CaloriesCommand, ConfigCommand, DashboardCommand, ExerciseCommand, GoalCommand,
    LoginCommand, ProfileCommand, RegisterCommand, WaterCommand, WhoamiCommand,
};
use config::Config;

#[derive(Parser)]
#[command(name = "befit")]
#[command(version)]
#[command(about = "Track water, exercise and calories against weekly goals", long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an account and log in
    Register(RegisterCommand),

    /// Log in with your mobile number
    Login(LoginCommand),

    /// Log out (your records are kept)
    Logout,

    /// Show who is logged in
    Whoami(WhoamiCommand),

    /// Log and review water intake
    Water(WaterCommand),

    /// Log and review exercise
    Exercise(ExerciseCommand),

    /// Log and review calorie intake
    Calories(CaloriesCommand),

    /// Set and review weekly goals
    Goal(GoalCommand),

    /// Show your profile and BMI
    Profile(ProfileCommand),

    /// Show today's progress
    Dashboard(DashboardCommand),

    /// Manage configuration
    Config(ConfigCommand),
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Save config path for config commands
    let cli_config_path = cli.config.clone();

    let config = Config::load(cli.config)?;
    init_tracing(&config);

    // Config commands never touch stored data
    if let Some(Commands::Config(cmd)) = &cli.command {
        return cmd.run(&config, cli_config_path);
    }

    let store = FileStore::new(config.data_dir.value.clone());
    let mut session = AppSession::new(store);
    session.restore()?;

    execute_command(&cli.command, &mut session, &config)
}

fn execute_command(
    command: &Option<Commands>,
    session: &mut AppSession,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Some(Commands::Register(cmd)) => cmd.run(session)?,
        Some(Commands::Login(cmd)) => cmd.run(session)?,
        Some(Commands::Logout) => {
            let name = session.user().map(|u| u.name.clone());
            session.logout()?;
            match name {
                Some(name) => println!("Goodbye, {}. Your records are saved.", name),
                None => println!("Not logged in"),
            }
        }
        Some(Commands::Whoami(cmd)) => cmd.run(session)?,
        Some(Commands::Water(cmd)) => cmd.run(session, config)?,
        Some(Commands::Exercise(cmd)) => cmd.run(session)?,
        Some(Commands::Calories(cmd)) => cmd.run(session)?,
        Some(Commands::Goal(cmd)) => cmd.run(session)?,
        Some(Commands::Profile(cmd)) => cmd.run(session)?,
        Some(Commands::Dashboard(cmd)) => cmd.run(session)?,
        Some(Commands::Config(_)) => {}
        None => {
            println!("Use --help to see available commands");
        }
    }

    Ok(())
}

/// Logs go to stderr so command output stays pipeable.
///
/// `RUST_LOG` wins over the configured `log_level`.
fn init_tracing(config: &Config) {
    let level = &config.log_level.value;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("befit={level},befit_core={level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
