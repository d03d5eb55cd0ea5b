pub mod init;
pub mod login;
pub mod logout;
pub mod rm;
pub mod timer;
pub mod workout;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Run a rest-interval countdown")]
    Timer(timer::TimerArgs),
    #[command(about = "Log workouts and review history")]
    Workout(workout::WorkoutArgs),
    #[command(about = "Estimate a one-rep max")]
    Rm(rm::RmArgs),
    #[command(about = "Sign in to your account")]
    Login(login::LoginArgs),
    #[command(about = "Sign out of your account")]
    Logout(logout::LogoutArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Timer(args) => timer::cmd(args).await,
            Commands::Workout(args) => workout::cmd(args).await,
            Commands::Rm(args) => rm::cmd(args),
            Commands::Login(args) => login::cmd(args).await,
            Commands::Logout(args) => logout::cmd(args),
        }
    }
}
