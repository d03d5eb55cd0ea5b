#[derive(Debug, Clone)]
pub enum Message {
    // === TIMER MESSAGES ===
    TimerStarted(String),  // formatted duration
    TimerExpired(String),  // formatted duration
    TimerZeroDuration,
    TimerCancelled,
    TimerControlsHint,
    NoRecentDurations,
    RecentDurationsTitle,

    // === WORKOUT MESSAGES ===
    ExerciseAdded(String),   // exercise name
    ExerciseInvalidName,
    WorkoutCompleted(usize), // exercise count
    WorkoutNothingToComplete,
    NoOpenWorkout,
    CurrentWorkoutTitle,
    WorkoutHistoryTitle,
    NoWorkoutsLogged,
    WorkoutsCleared(usize), // deleted count
    ConfirmClearWorkouts,
    WorkoutClearCancelled,

    // === ONE-REP-MAX MESSAGES ===
    OneRmTitle,
    OneRmEstimate(String, String), // formula name, estimate
    OneRmBodyweightAdjusted(String),
    OneRmOutOfDomain(String), // formula name

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleRemote,
    ConfigModuleTimer,

    // === ACCOUNT MESSAGES ===
    SignedIn(String),  // email
    SignedUp(String),  // email
    SignedOut,
    NotLoggedIn,
    AuthFailed(String),      // reason
    RemoteNotConfigured,
    ProfileSaved,

    // === PROMPTS ===
    PromptSelectModules,
    PromptRemoteApiUrl,
    PromptRemoteApiKey,
    PromptDefaultHours,
    PromptDefaultMinutes,
    PromptDefaultSeconds,
    PromptTickIntervalMs,
    PromptEmail,
    PromptUsername,
    PromptAccountPassword,
    PromptPickRecent,
}
