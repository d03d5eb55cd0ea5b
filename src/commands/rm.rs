//! One-rep-max estimation command.

use crate::libs::messages::Message;
use crate::libs::onerm::{bodyweight_adjusted, Formula};
use crate::libs::view::View;
use crate::{msg_error, msg_print};
use anyhow::Result;
use clap::Args;

/// Command-line arguments for the one-rep-max command.
#[derive(Debug, Args)]
pub struct RmArgs {
    /// Weight lifted
    weight: f64,

    /// Repetitions performed
    reps: u32,

    /// Bodyweight, for the adjusted estimate
    #[arg(short, long)]
    bodyweight: Option<f64>,

    /// Formula: epley, brzycki, lombardi, or oconner
    #[arg(short, long, default_value = "epley")]
    formula: String,
}

pub fn cmd(args: RmArgs) -> Result<()> {
    let formula: Formula = match args.formula.parse() {
        Ok(f) => f,
        Err(e) => {
            anyhow::bail!(e);
        }
    };

    let Some(estimate) = formula.estimate(args.weight, args.reps) else {
        msg_error!(Message::OneRmOutOfDomain(formula.name().to_string()));
        return Ok(());
    };

    msg_print!(Message::OneRmTitle, true);
    View::estimates(args.weight, args.reps, formula, args.bodyweight)?;

    msg_print!(Message::OneRmEstimate(formula.name().to_string(), format!("{:.2}", estimate)));
    if let Some(bw) = args.bodyweight {
        msg_print!(Message::OneRmBodyweightAdjusted(format!("{:.2}", bodyweight_adjusted(estimate, bw))));
    }

    Ok(())
}
