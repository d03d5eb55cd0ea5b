//! # Liftlog - Lifting Log and Rest Timer
//!
//! A command-line fitness companion for timing rest intervals, logging
//! workouts, and estimating one-rep maxes.
//!
//! ## Features
//!
//! - **Rest Timer**: Drift-free interactive countdown with pause/resume,
//!   desktop reminder on expiry, and recent-duration history
//! - **Workout Log**: Stage exercises into a session, complete it, review
//!   and clear history
//! - **One-Rep Max**: Estimate a 1RM with the standard published formulas
//! - **Account Sync**: Sign in to the hosted account service and keep a
//!   profile
//!
//! ## Usage
//!
//! ```rust,no_run
//! use liftlog::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod db;
pub mod libs;
