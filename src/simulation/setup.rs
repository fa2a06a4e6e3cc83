//! Setup module for configuring fixed-step simulations.
//!
//! This module provides the [`SimulationSetup`] struct and its builder. A setup holds
//! everything a run needs besides the pathway itself:
//!
//! - Number of steps to apply
//! - Time increment per step
//! - The [`DeltaPolicy`] that limits a reaction's extent within one step
//!
//! Setups are validated before a run touches any state, so an invalid configuration
//! never leaks a partially applied trajectory.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::reaction::DeltaPolicy;

use super::error::SimulationError;

/// Configuration of a fixed-step simulation run
///
/// # Fields
///
/// * `steps` - Number of steps to apply (default: 100). Signed so that negative counts
///   coming from external configuration can be rejected instead of wrapping.
/// * `dt` - Time increment per step in seconds (default: 1.0)
/// * `policy` - Extent limiting policy (default: [`DeltaPolicy::Unclamped`])
///
/// # Examples
///
/// ```
/// use glycosim::prelude::{DeltaPolicy, SimulationSetupBuilder};
///
/// let setup = SimulationSetupBuilder::default()
///     .steps(200)
///     .dt(0.1)
///     .policy(DeltaPolicy::ClampToSubstrate)
///     .build()
///     .unwrap();
///
/// assert!(setup.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Builder, Serialize, Deserialize)]
pub struct SimulationSetup {
    #[builder(default = "100")]
    pub steps: i64,
    #[builder(default = "1.0")]
    pub dt: f64,
    #[builder(default)]
    #[serde(default)]
    pub policy: DeltaPolicy,
}

impl Default for SimulationSetup {
    fn default() -> Self {
        Self {
            steps: 100,
            dt: 1.0,
            policy: DeltaPolicy::default(),
        }
    }
}

impl SimulationSetup {
    /// Creates a setup with the default (unclamped) policy.
    pub fn new(steps: i64, dt: f64) -> Self {
        Self {
            steps,
            dt,
            policy: DeltaPolicy::default(),
        }
    }

    /// Checks the setup and returns the step count as `usize`.
    ///
    /// # Errors
    ///
    /// * [`SimulationError::NegativeSteps`] if `steps < 0`
    /// * [`SimulationError::InvalidTimeStep`] if `dt` is not finite or not strictly positive
    pub fn validate(&self) -> Result<usize, SimulationError> {
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(SimulationError::InvalidTimeStep(self.dt));
        }

        usize::try_from(self.steps).map_err(|_| SimulationError::NegativeSteps(self.steps))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let setup = SimulationSetupBuilder::default().build().unwrap();
        assert_eq!(setup, SimulationSetup::default());
        assert_eq!(setup.validate(), Ok(100));
    }

    #[test]
    fn test_zero_steps_are_valid() {
        assert_eq!(SimulationSetup::new(0, 1.0).validate(), Ok(0));
    }

    #[test]
    fn test_negative_steps_are_rejected() {
        assert_eq!(
            SimulationSetup::new(-1, 1.0).validate(),
            Err(SimulationError::NegativeSteps(-1))
        );
    }

    #[test]
    fn test_invalid_dt_is_rejected() {
        for dt in [0.0, -0.5, f64::INFINITY] {
            assert_eq!(
                SimulationSetup::new(5, dt).validate(),
                Err(SimulationError::InvalidTimeStep(dt))
            );
        }
        assert!(SimulationSetup::new(5, f64::NAN).validate().is_err());
    }

    #[test]
    fn test_policy_deserialises_from_snake_case() {
        let setup: SimulationSetup =
            serde_json::from_str(r#"{"steps": 10, "dt": 0.5, "policy": "clamp_to_substrate"}"#)
                .unwrap();
        assert_eq!(setup.policy, DeltaPolicy::ClampToSubstrate);

        let setup: SimulationSetup = serde_json::from_str(r#"{"steps": 10, "dt": 0.5}"#).unwrap();
        assert_eq!(setup.policy, DeltaPolicy::Unclamped);
    }
}
