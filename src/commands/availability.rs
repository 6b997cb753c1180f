//! Availability command implementation

use crate::{
    core::availability::{estimate, AvailabilityEstimate, DraftWindow, SigmaModel},
    Result,
};

/// Parameters for the availability command
#[derive(Debug, Clone)]
pub struct AvailabilityParams {
    pub adp: f64,
    pub window: DraftWindow,
    pub sigma: SigmaModel,
    pub as_json: bool,
}

/// Handle the availability command
pub fn handle_availability(params: AvailabilityParams) -> Result<AvailabilityEstimate> {
    params.sigma.validate()?;

    let result = estimate(params.adp, params.window, &params.sigma);

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&result)?); // tarpaulin::skip
    } else {
        // tarpaulin::skip - console output
        println!(
            "ADP {:.1} at pick {} (sigma {:.1}, z {:+.3}): {:.1}% available",
            result.adp,
            result.target_pick,
            result.sigma,
            result.z_score,
            result.probability * 100.0,
        );
    }

    Ok(result)
}
