//! Human-readable text for every application message.
//!
//! All user-facing wording lives here, so the rest of the code never embeds
//! display strings and the tone stays consistent across commands.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // Timer
            Message::TimerStarted(duration) => format!("Rest timer started: {}", duration),
            Message::TimerExpired(duration) => format!("Rest over! ({} elapsed)", duration),
            Message::TimerZeroDuration => "Nothing to count down: the selected duration is zero".to_string(),
            Message::TimerCancelled => "Timer cancelled".to_string(),
            Message::TimerControlsHint => "[space] pause/resume  [r] restart  [q] quit".to_string(),
            Message::NoRecentDurations => "No recent durations yet. Finish a countdown to record one.".to_string(),
            Message::RecentDurationsTitle => "Recent rest durations".to_string(),

            // Workout
            Message::ExerciseAdded(name) => format!("Added '{}' to the current workout", name),
            Message::ExerciseInvalidName => "Exercise name must not be empty".to_string(),
            Message::WorkoutCompleted(count) => format!("Workout completed with {} exercise(s)", count),
            Message::WorkoutNothingToComplete => "The current workout has no exercises yet".to_string(),
            Message::NoOpenWorkout => "No workout in progress. Add an exercise to start one.".to_string(),
            Message::CurrentWorkoutTitle => "Current workout".to_string(),
            Message::WorkoutHistoryTitle => "Previous workouts".to_string(),
            Message::NoWorkoutsLogged => "No workouts logged yet".to_string(),
            Message::WorkoutsCleared(count) => format!("Deleted {} workout(s)", count),
            Message::ConfirmClearWorkouts => "Delete ALL logged workouts?".to_string(),
            Message::WorkoutClearCancelled => "Workout history left untouched".to_string(),

            // One-rep max
            Message::OneRmTitle => "Estimated one-rep max".to_string(),
            Message::OneRmEstimate(formula, estimate) => format!("{}: {} lbs", formula, estimate),
            Message::OneRmBodyweightAdjusted(estimate) => format!("Bodyweight adjusted: {} lbs", estimate),
            Message::OneRmOutOfDomain(formula) => format!("The {} formula is not defined for these inputs", formula),

            // Configuration
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleRemote => "Remote account service configuration".to_string(),
            Message::ConfigModuleTimer => "Rest timer defaults".to_string(),

            // Account
            Message::SignedIn(email) => format!("Signed in as {}", email),
            Message::SignedUp(email) => format!("Account created for {}. Check your inbox to verify it.", email),
            Message::SignedOut => "Signed out".to_string(),
            Message::NotLoggedIn => "Not logged in".to_string(),
            Message::AuthFailed(reason) => format!("Authentication failed: {}", reason),
            Message::RemoteNotConfigured => "Remote account service is not configured. Run 'liftlog init' first.".to_string(),
            Message::ProfileSaved => "Profile saved to your account".to_string(),

            // Prompts
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptRemoteApiUrl => "Account service API URL".to_string(),
            Message::PromptRemoteApiKey => "Account service API key".to_string(),
            Message::PromptDefaultHours => "Default rest hours".to_string(),
            Message::PromptDefaultMinutes => "Default rest minutes".to_string(),
            Message::PromptDefaultSeconds => "Default rest seconds".to_string(),
            Message::PromptTickIntervalMs => "Countdown refresh interval (ms)".to_string(),
            Message::PromptEmail => "Email".to_string(),
            Message::PromptUsername => "Username".to_string(),
            Message::PromptAccountPassword => "Enter your account password".to_string(),
            Message::PromptPickRecent => "Pick a recent duration".to_string(),
        };
        write!(f, "{}", text)
    }
}
