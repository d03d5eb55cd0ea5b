//! One-rep-max estimation formulas.
//!
//! Pure arithmetic over a submaximal set: given the weight lifted and the
//! number of reps performed, each formula projects the load the lifter could
//! move exactly once. All of these are the standard published estimators;
//! none of them is meaningful past roughly 10-12 reps, but that is the
//! lifter's judgement call, not ours.

use std::fmt;
use std::str::FromStr;

/// A published one-rep-max estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Formula {
    /// `w * (1 + r/30)`, the default; matches most coaching tables.
    Epley,
    /// `w * 36 / (37 - r)`; undefined at 37+ reps.
    Brzycki,
    /// `w * r^0.10`
    Lombardi,
    /// `w * (1 + r/40)`, the most conservative of the set.
    OConner,
}

pub const ALL_FORMULAS: [Formula; 4] = [Formula::Epley, Formula::Brzycki, Formula::Lombardi, Formula::OConner];

impl Formula {
    /// Estimated one-rep max for `weight` lifted `reps` times.
    ///
    /// Returns `None` when the formula is undefined for the inputs: zero or
    /// negative weight, zero reps, or a rep count outside the formula's
    /// domain. A single rep is returned as the weight itself for every
    /// formula.
    pub fn estimate(&self, weight: f64, reps: u32) -> Option<f64> {
        if weight <= 0.0 || reps == 0 {
            return None;
        }
        if reps == 1 {
            return Some(weight);
        }
        let r = reps as f64;
        match self {
            Formula::Epley => Some(weight * (1.0 + r / 30.0)),
            Formula::Brzycki => {
                if reps >= 37 {
                    return None;
                }
                Some(weight * 36.0 / (37.0 - r))
            }
            Formula::Lombardi => Some(weight * r.powf(0.10)),
            Formula::OConner => Some(weight * (1.0 + r / 40.0)),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Formula::Epley => "Epley",
            Formula::Brzycki => "Brzycki",
            Formula::Lombardi => "Lombardi",
            Formula::OConner => "O'Conner",
        }
    }
}

impl Default for Formula {
    fn default() -> Self {
        Formula::Epley
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Formula {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "epley" => Ok(Formula::Epley),
            "brzycki" => Ok(Formula::Brzycki),
            "lombardi" => Ok(Formula::Lombardi),
            "oconner" | "o'conner" => Ok(Formula::OConner),
            other => Err(format!("unknown formula '{}', expected one of: epley, brzycki, lombardi, oconner", other)),
        }
    }
}

/// Scales an estimate for the lifter's bodyweight: heavier lifters get a
/// small bonus of `3.33%` of the estimate per 100 units of bodyweight.
pub fn bodyweight_adjusted(one_rm: f64, bodyweight: f64) -> f64 {
    one_rm + 0.0333 * one_rm * (bodyweight / 100.0)
}
