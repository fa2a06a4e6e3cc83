//! Enzyme Module
//!
//! This module provides the [`Enzyme`] type, a Michaelis-Menten rate law parameterised by
//! turnover number, enzyme concentration and Michaelis constant.
//!
//! # Key Components
//!
//! - [`Enzyme`]: Validated kinetic parameters with an eagerly derived maximum rate
//! - [`EnzymeDefinition`]: Serialisable parameter set used in pathway definitions
//!
//! The maximum rate `vmax = kcat * [E]` is never computed lazily. Every mutator
//! validates its input and re-derives `vmax` before returning, so a rate evaluation can
//! never observe a stale value.

use std::fmt;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::simulation::error::SimulationError;

/// Index of an enzyme inside the pathway that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EnzymeId(pub(crate) usize);

impl EnzymeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A catalyst following Michaelis-Menten kinetics.
///
/// # Fields
///
/// * `kcat` - Turnover number in 1/s
/// * `enzyme_concentration` - Enzyme concentration in mM
/// * `km` - Michaelis constant in mM, strictly positive
/// * `max_rate` - Derived `kcat * enzyme_concentration` in mM/s
#[derive(Debug, Clone, PartialEq)]
pub struct Enzyme {
    name: String,
    kcat: f64,
    enzyme_concentration: f64,
    km: f64,
    max_rate: f64,
}

impl Enzyme {
    /// Creates a new enzyme after validating its parameters.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidParameter`] if `kcat` or `enzyme_concentration`
    /// is negative or not finite, or if `km` is not strictly positive.
    pub fn new(
        name: impl Into<String>,
        kcat: f64,
        enzyme_concentration: f64,
        km: f64,
    ) -> Result<Self, SimulationError> {
        let name = name.into();
        let kcat = non_negative(&name, "kcat", kcat)?;
        let enzyme_concentration = non_negative(&name, "enzyme_concentration", enzyme_concentration)?;
        let km = positive(&name, "km", km)?;

        Ok(Self {
            max_rate: kcat * enzyme_concentration,
            name,
            kcat,
            enzyme_concentration,
            km,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kcat(&self) -> f64 {
        self.kcat
    }

    pub fn enzyme_concentration(&self) -> f64 {
        self.enzyme_concentration
    }

    pub fn km(&self) -> f64 {
        self.km
    }

    /// Maximum rate `vmax` in mM/s.
    pub fn max_rate(&self) -> f64 {
        self.max_rate
    }

    /// Sets the turnover number and re-derives the maximum rate.
    pub fn set_kcat(&mut self, kcat: f64) -> Result<(), SimulationError> {
        self.kcat = non_negative(&self.name, "kcat", kcat)?;
        self.refresh_max_rate();
        Ok(())
    }

    /// Sets the enzyme concentration and re-derives the maximum rate.
    pub fn set_enzyme_concentration(&mut self, concentration: f64) -> Result<(), SimulationError> {
        self.enzyme_concentration = non_negative(&self.name, "enzyme_concentration", concentration)?;
        self.refresh_max_rate();
        Ok(())
    }

    /// Sets the Michaelis constant. Must be strictly positive.
    pub fn set_km(&mut self, km: f64) -> Result<(), SimulationError> {
        self.km = positive(&self.name, "km", km)?;
        Ok(())
    }

    /// Evaluates the Michaelis-Menten rate law `vmax * s / (km + s)` in mM/s.
    ///
    /// Returns `0.0` for zero, negative or NaN substrate concentrations.
    pub fn rate(&self, substrate_concentration: f64) -> f64 {
        let s = substrate_concentration;
        if s > 0.0 {
            // saturation first: keeps rate(km) == vmax / 2 exact
            self.max_rate * (s / (self.km + s))
        } else {
            0.0
        }
    }

    fn refresh_max_rate(&mut self) {
        self.max_rate = self.kcat * self.enzyme_concentration;
    }
}

impl fmt::Display for Enzyme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Enzyme({}, kcat={}, [E]={}, vmax={:.3}, km={})",
            self.name, self.kcat, self.enzyme_concentration, self.max_rate, self.km
        )
    }
}

fn non_negative(enzyme: &str, parameter: &str, value: f64) -> Result<f64, SimulationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(SimulationError::InvalidParameter {
            enzyme: enzyme.to_string(),
            parameter: parameter.to_string(),
            value,
        })
    }
}

fn positive(enzyme: &str, parameter: &str, value: f64) -> Result<f64, SimulationError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(SimulationError::InvalidParameter {
            enzyme: enzyme.to_string(),
            parameter: parameter.to_string(),
            value,
        })
    }
}

/// Serialisable parameter set of an enzyme.
///
/// # Examples
///
/// ```
/// use glycosim::prelude::EnzymeDefinitionBuilder;
///
/// let hexokinase = EnzymeDefinitionBuilder::default()
///     .name("Hexokinase")
///     .kcat(200.0)
///     .enzyme_concentration(0.0025)
///     .km(0.05)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Builder, Serialize, Deserialize)]
pub struct EnzymeDefinition {
    #[builder(setter(into))]
    pub name: String,
    /// Turnover number in 1/s
    pub kcat: f64,
    /// Enzyme concentration in mM
    pub enzyme_concentration: f64,
    /// Michaelis constant in mM
    #[builder(default = "1.0")]
    #[serde(default = "default_km")]
    pub km: f64,
}

fn default_km() -> f64 {
    1.0
}

impl TryFrom<&EnzymeDefinition> for Enzyme {
    type Error = SimulationError;

    fn try_from(definition: &EnzymeDefinition) -> Result<Self, Self::Error> {
        Enzyme::new(
            definition.name.clone(),
            definition.kcat,
            definition.enzyme_concentration,
            definition.km,
        )
    }
}

impl From<&Enzyme> for EnzymeDefinition {
    fn from(enzyme: &Enzyme) -> Self {
        Self {
            name: enzyme.name.clone(),
            kcat: enzyme.kcat,
            enzyme_concentration: enzyme.enzyme_concentration,
            km: enzyme.km,
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn enzyme(vmax: f64, km: f64) -> Enzyme {
        Enzyme::new("E", vmax, 1.0, km).unwrap()
    }

    #[test]
    fn test_max_rate_is_derived() {
        let hexokinase = Enzyme::new("Hexokinase", 200.0, 0.0025, 0.05).unwrap();
        assert_relative_eq!(hexokinase.max_rate(), 0.5);
    }

    #[test]
    fn test_rate_is_zero_without_substrate() {
        let e = enzyme(0.5, 1.0);
        assert_eq!(e.rate(0.0), 0.0);
        assert_eq!(e.rate(-3.0), 0.0);
        assert_eq!(e.rate(f64::NAN), 0.0);
    }

    #[test]
    fn test_rate_at_km_is_half_max_rate() {
        for (vmax, km) in [(0.5, 1.0), (0.1, 0.3), (7.0, 0.07), (350.0 * 0.002, 0.07)] {
            let e = enzyme(vmax, km);
            assert_eq!(e.rate(km), e.max_rate() / 2.0);
        }
    }

    #[test]
    fn test_rate_is_monotonic_and_saturates() {
        let e = enzyme(0.5, 1.0);
        let mut previous = 0.0;
        for i in 0..400 {
            let rate = e.rate(i as f64 * 0.25);
            assert!(rate >= previous);
            assert!(rate <= e.max_rate());
            previous = rate;
        }

        assert_relative_eq!(e.rate(1e12), e.max_rate(), epsilon = 1e-9);
    }

    #[test]
    fn test_michaelis_menten_value() {
        let e = enzyme(0.5, 1.0);
        assert_relative_eq!(e.rate(10.0), 0.5 * 10.0 / 11.0, epsilon = 1e-12);
    }

    #[test]
    fn test_setters_recompute_max_rate() {
        let mut e = Enzyme::new("PFK", 300.0, 0.002, 0.08).unwrap();

        e.set_enzyme_concentration(0.004).unwrap();
        assert_relative_eq!(e.max_rate(), 1.2);

        e.set_kcat(100.0).unwrap();
        assert_relative_eq!(e.max_rate(), 0.4);

        e.set_enzyme_concentration(0.0).unwrap();
        assert_eq!(e.max_rate(), 0.0);
        assert_eq!(e.rate(100.0), 0.0);
    }

    #[test]
    fn test_invalid_parameters_are_rejected() {
        assert!(Enzyme::new("E", -1.0, 0.1, 1.0).is_err());
        assert!(Enzyme::new("E", 1.0, f64::INFINITY, 1.0).is_err());
        assert!(Enzyme::new("E", 1.0, 0.1, 0.0).is_err());

        let mut e = enzyme(1.0, 1.0);
        let err = e.set_km(-2.0).unwrap_err();
        assert!(matches!(err, SimulationError::InvalidParameter { .. }));
        assert!(e.set_kcat(f64::NAN).is_err());

        // Rejected values leave the enzyme untouched
        assert_eq!(e.km(), 1.0);
        assert_eq!(e.kcat(), 1.0);
        assert_eq!(e.max_rate(), 1.0);
    }

    #[test]
    fn test_definition_conversion() {
        let definition = EnzymeDefinitionBuilder::default()
            .name("Enolase")
            .kcat(200.0)
            .enzyme_concentration(0.002)
            .km(0.07)
            .build()
            .unwrap();

        let enzyme = Enzyme::try_from(&definition).unwrap();
        assert_relative_eq!(enzyme.max_rate(), 0.4);
        assert_eq!(EnzymeDefinition::from(&enzyme), definition);
    }

    #[test]
    fn test_definition_default_km() {
        let definition: EnzymeDefinition =
            serde_json::from_str(r#"{"name": "E", "kcat": 1.0, "enzyme_concentration": 0.5}"#)
                .unwrap();
        assert_eq!(definition.km, 1.0);
    }
}
