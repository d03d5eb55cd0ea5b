//! Interactive rest-interval countdown command.
//!
//! Runs the countdown in the foreground with a single-line progress display.
//! The timer core is driven by a fixed-cadence tokio tick; keys are polled
//! between ticks without blocking, so pause/resume/reset stay responsive at
//! any refresh interval.

use crate::libs::config::{Config, TimerDefaults};
use crate::libs::messages::Message;
use crate::libs::notifier::DesktopNotifier;
use crate::libs::recents::Recents;
use crate::libs::timer::{RestTimer, TimerEvent, TimerState};
use crate::libs::view::View;
use crate::{msg_error, msg_print, msg_success};
use anyhow::Result;
use chrono::Utc;
use clap::Args;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use dialoguer::{theme::ColorfulTheme, Select};
use std::io::{self, Write};
use std::time::Duration;

const PROGRESS_BAR_WIDTH: usize = 30;

/// Command-line arguments for the timer command.
#[derive(Debug, Args)]
pub struct TimerArgs {
    /// Rest hours
    #[arg(long, default_value_t = 0)]
    hours: u32,

    /// Rest minutes
    #[arg(short, long, default_value_t = 0)]
    minutes: u32,

    /// Rest seconds
    #[arg(short, long, default_value_t = 0)]
    seconds: u32,

    /// Pick the duration from the recent-durations history
    #[arg(short, long)]
    recent: bool,

    /// Show the recent-durations history and exit
    #[arg(short, long)]
    list: bool,
}

/// Executes the timer command: resolves the requested duration, arms the
/// countdown, and drives it until expiry or cancellation.
pub async fn cmd(args: TimerArgs) -> Result<()> {
    let recents = Recents::load();

    if args.list {
        if recents.is_empty() {
            msg_print!(Message::NoRecentDurations);
            return Ok(());
        }
        msg_print!(Message::RecentDurationsTitle, true);
        View::recents(recents.items())?;
        return Ok(());
    }

    let defaults = Config::read()?.timer.unwrap_or_default();
    let (hours, minutes, seconds) = resolve_duration(&args, &defaults, &recents)?;

    let mut timer = RestTimer::new(DesktopNotifier::new(), recents);
    timer.configure(hours, minutes, seconds);
    if timer.total_seconds() == 0 {
        msg_error!(Message::TimerZeroDuration);
        return Ok(());
    }

    msg_print!(Message::TimerStarted(crate::libs::formatter::format_clock(timer.total_seconds())));
    msg_print!(Message::TimerControlsHint);

    timer.start(Utc::now());

    enable_raw_mode()?;
    let outcome = run_countdown(&mut timer, defaults.tick_interval_ms).await;
    disable_raw_mode()?;
    println!();

    match outcome? {
        CountdownOutcome::Expired => {
            msg_success!(Message::TimerExpired(crate::libs::formatter::format_clock(timer.total_seconds())));
        }
        CountdownOutcome::Cancelled => {
            msg_print!(Message::TimerCancelled);
        }
    }

    Ok(())
}

enum CountdownOutcome {
    Expired,
    Cancelled,
}

/// Duration precedence: explicit components, then the recents picker, then
/// the configured default.
fn resolve_duration(args: &TimerArgs, defaults: &TimerDefaults, recents: &Recents) -> Result<(u32, u32, u32)> {
    if args.hours > 0 || args.minutes > 0 || args.seconds > 0 {
        return Ok((args.hours, args.minutes, args.seconds));
    }

    if args.recent && !recents.is_empty() {
        let labels: Vec<String> = recents.items().iter().map(|&s| crate::libs::formatter::format_clock(s)).collect();
        let picked = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptPickRecent.to_string())
            .items(&labels)
            .default(0)
            .interact()?;
        let secs = recents.items()[picked];
        return Ok((0, 0, u32::try_from(secs).unwrap_or(u32::MAX)));
    }

    Ok((defaults.hours, defaults.minutes, defaults.seconds))
}

/// Drives `tick()` at the configured cadence and polls keys in between.
/// Space pauses and resumes, `r` restarts the countdown from the full
/// duration, `q`/Esc/Ctrl-C cancels.
async fn run_countdown(timer: &mut RestTimer<DesktopNotifier>, tick_interval_ms: u64) -> Result<CountdownOutcome> {
    let mut ticker = tokio::time::interval(Duration::from_millis(tick_interval_ms.max(50)));

    loop {
        ticker.tick().await;
        let now = Utc::now();

        if let Some(TimerEvent::Expired) = timer.tick(now) {
            render_line(timer)?;
            return Ok(CountdownOutcome::Expired);
        }
        render_line(timer)?;

        // Drain every key pressed since the last tick.
        while event::poll(Duration::ZERO)? {
            let Event::Key(key) = event::read()? else { continue };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            let now = Utc::now();
            match key.code {
                KeyCode::Char(' ') => match timer.state() {
                    TimerState::Running { .. } => timer.pause(now),
                    TimerState::Paused { .. } => timer.resume(now),
                    _ => {}
                },
                KeyCode::Char('r') => {
                    timer.reset();
                    timer.start(now);
                }
                KeyCode::Char('q') | KeyCode::Esc => {
                    timer.reset();
                    return Ok(CountdownOutcome::Cancelled);
                }
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    timer.reset();
                    return Ok(CountdownOutcome::Cancelled);
                }
                _ => {}
            }
        }
    }
}

// One carriage-returned status line: progress bar, clock, pause marker.
fn render_line(timer: &RestTimer<DesktopNotifier>) -> Result<()> {
    let now = Utc::now();
    let progress = timer.progress(now);
    let filled = ((progress * PROGRESS_BAR_WIDTH as f64).round() as usize).min(PROGRESS_BAR_WIDTH);
    let bar: String = "#".repeat(filled) + &"-".repeat(PROGRESS_BAR_WIDTH - filled);
    let marker = match timer.state() {
        TimerState::Paused { .. } => " [paused]",
        _ => "",
    };

    let mut stdout = io::stdout();
    // Trailing padding clears leftovers from a longer previous line.
    write!(stdout, "\r[{}] {}{}          ", bar, timer.display(now), marker)?;
    stdout.flush()?;
    Ok(())
}
