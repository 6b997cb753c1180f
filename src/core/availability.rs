//! Player availability estimation.
//!
//! A player's actual draft slot is modelled as normally distributed around
//! their ADP. The chance the player is still on the board at the caller's
//! next pick is the upper tail of that distribution past the target pick:
//!
//! ```text
//! z = (target_pick - adp) / sigma
//! availability = 1 - Φ(z)
//! ```
//!
//! A target pick well past ADP gives a large positive `z` and an
//! availability near zero. A target pick ahead of ADP gives a negative `z`
//! and an availability above one half.

use serde::{Deserialize, Serialize};

use crate::error::{DraftError, Result};

#[cfg(test)]
mod tests;

/// Standard deviation of actual pick position around ADP, in picks.
pub const DEFAULT_SIGMA: f64 = 18.0;

/// Base and per-pick slope for [`SigmaModel::Variable`].
pub const DEFAULT_VARIABLE_SIGMA_BASE: f64 = 10.0;
pub const DEFAULT_VARIABLE_SIGMA_SLOPE: f64 = 0.1;

/// Fraction of a player's value removed when they are certain to come back.
pub const DEFAULT_AVAILABILITY_DISCOUNT: f64 = 0.19;

/// Beyond this magnitude `exp(-x²/2)` is below f64 resolution of the result.
const CDF_SATURATION: f64 = 8.0;

// Abramowitz & Stegun 7.1.26
const A1: f64 = 0.254829592;
const A2: f64 = -0.284496736;
const A3: f64 = 1.421413741;
const A4: f64 = -1.453152027;
const A5: f64 = 1.061405429;
const P: f64 = 0.3275911;

/// Standard normal cumulative distribution function.
///
/// Evaluates `erf(|x| / √2)` with the five-term rational approximation and
/// mirrors the result by the sign of `x`. Absolute error is below `1e-7`.
/// Inputs outside `[-8, 8]` saturate to exactly `0.0` or `1.0`, and `NaN`
/// maps to `0.5`.
pub fn normal_cdf(x: f64) -> f64 {
    if x.is_nan() {
        return 0.5;
    }
    if x < -CDF_SATURATION {
        return 0.0;
    }
    if x > CDF_SATURATION {
        return 1.0;
    }

    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let u = x.abs() / std::f64::consts::SQRT_2;
    let t = 1.0 / (1.0 + P * u);
    let poly = ((((A5 * t + A4) * t + A3) * t + A2) * t + A1) * t;
    let erf = 1.0 - poly * (-u * u).exp();

    0.5 * (1.0 + sign * erf)
}

/// Probability that a player with the given ADP is still undrafted after
/// `picks_until_turn` more picks.
///
/// `sigma` must be positive; that is a caller precondition and is not
/// checked here. The result is always within `[0, 1]`.
///
/// # Examples
///
/// ```rust
/// use draft_assist::core::availability::{estimate_availability, DEFAULT_SIGMA};
///
/// // Pick 40 comes before an ADP of 50, so the player is likely still there.
/// let p = estimate_availability(50.0, 40, 0, DEFAULT_SIGMA);
/// assert!(p > 0.5);
/// ```
pub fn estimate_availability(
    adp: f64,
    current_pick: u32,
    picks_until_turn: u32,
    sigma: f64,
) -> f64 {
    let target_pick = f64::from(current_pick) + f64::from(picks_until_turn);
    let z = z_score(adp, target_pick, sigma);
    clamp_probability(1.0 - normal_cdf(z))
}

fn z_score(adp: f64, target_pick: f64, sigma: f64) -> f64 {
    (target_pick - adp) / sigma
}

fn clamp_probability(p: f64) -> f64 {
    if p.is_nan() {
        return 0.5;
    }
    p.clamp(0.0, 1.0)
}

/// Scale a draft score down by how likely the player is to come back.
///
/// Players who will almost surely survive to the next turn can wait, so
/// their score is reduced by up to `discount`.
pub fn apply_availability_discount(score: f64, availability: f64, discount: f64) -> f64 {
    score * (1.0 - clamp_probability(availability) * discount)
}

/// How the dispersion around ADP is chosen for a player.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SigmaModel {
    /// Same sigma for every player.
    Fixed { sigma: f64 },
    /// `base + slope * adp`: early picks are tighter, deep picks noisier.
    Variable { base: f64, slope: f64 },
}

impl Default for SigmaModel {
    fn default() -> Self {
        SigmaModel::Fixed {
            sigma: DEFAULT_SIGMA,
        }
    }
}

impl SigmaModel {
    pub fn fixed(sigma: f64) -> Self {
        SigmaModel::Fixed { sigma }
    }

    pub fn variable() -> Self {
        SigmaModel::Variable {
            base: DEFAULT_VARIABLE_SIGMA_BASE,
            slope: DEFAULT_VARIABLE_SIGMA_SLOPE,
        }
    }

    pub fn sigma_for(&self, adp: f64) -> f64 {
        match *self {
            SigmaModel::Fixed { sigma } => sigma,
            SigmaModel::Variable { base, slope } => base + slope * adp.max(0.0),
        }
    }

    /// Reject parameters that would violate the estimator's `sigma > 0`
    /// precondition for some non-negative ADP.
    pub fn validate(&self) -> Result<()> {
        match *self {
            SigmaModel::Fixed { sigma } => check_sigma(sigma),
            SigmaModel::Variable { base, slope } => {
                check_sigma(base)?;
                if !slope.is_finite() || slope < 0.0 {
                    return Err(DraftError::InvalidSigma { value: slope });
                }
                Ok(())
            }
        }
    }
}

fn check_sigma(value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(DraftError::InvalidSigma { value })
    }
}

/// The caller's position in a live draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DraftWindow {
    /// Most recently completed (or current) overall pick, 0-based.
    pub current_pick: u32,
    /// Picks still to be made before the caller selects again.
    pub picks_until_turn: u32,
}

impl DraftWindow {
    pub fn new(current_pick: u32, picks_until_turn: u32) -> Self {
        Self {
            current_pick,
            picks_until_turn,
        }
    }

    pub fn target_pick(&self) -> u64 {
        u64::from(self.current_pick) + u64::from(self.picks_until_turn)
    }
}

/// Full breakdown of one availability estimate, for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AvailabilityEstimate {
    pub adp: f64,
    pub sigma: f64,
    pub target_pick: u64,
    pub z_score: f64,
    pub probability: f64,
}

/// Estimate availability with the sigma picked by `model`.
pub fn estimate(adp: f64, window: DraftWindow, model: &SigmaModel) -> AvailabilityEstimate {
    let sigma = model.sigma_for(adp);
    let target_pick = window.target_pick();
    AvailabilityEstimate {
        adp,
        sigma,
        target_pick,
        z_score: z_score(adp, target_pick as f64, sigma),
        probability: estimate_availability(
            adp,
            window.current_pick,
            window.picks_until_turn,
            sigma,
        ),
    }
}
