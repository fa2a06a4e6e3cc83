//! Pathway Module
//!
//! The [`Pathway`] owns every metabolite, enzyme and reaction of a metabolic pathway and
//! advances them in fixed time steps.
//!
//! # Stepping
//!
//! One step applies every reaction once, strictly in declaration order. Each reaction
//! reads the concentrations left behind by the reactions before it in the same step,
//! then every metabolite records its concentration exactly once. Histories therefore
//! always hold `steps + 1` values, also for cofactors that several reactions share.
//!
//! # Construction
//!
//! Pathways are built from a [`PathwayDefinition`], which is checked for consistency
//! first, or from a [`GlycolysisConfig`](crate::glycolysis::GlycolysisConfig).

use std::collections::HashMap;

use log::{debug, warn};

use crate::definition::{
    MetaboliteDefinition, PathwayDefinition, ReactionDefinition, ReactionElement,
};
use crate::enzyme::{Enzyme, EnzymeDefinition, EnzymeId};
use crate::metabolite::{Metabolite, MetaboliteId};
use crate::reaction::{DeltaPolicy, Participant, Reaction};
use crate::validation::consistency::{check_consistency, Severity};

use super::error::SimulationError;
use super::result::SimulationResult;
use super::setup::SimulationSetup;

/// A metabolic pathway that can be simulated step by step.
#[derive(Debug, Clone)]
pub struct Pathway {
    name: String,
    metabolites: Vec<Metabolite>,
    enzymes: Vec<Enzyme>,
    reactions: Vec<Reaction>,
    metabolite_index: HashMap<String, MetaboliteId>,
    enzyme_index: HashMap<String, EnzymeId>,
    time: Vec<f64>,
    policy: DeltaPolicy,
}

impl Pathway {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Metabolites in declaration order.
    pub fn metabolites(&self) -> &[Metabolite] {
        &self.metabolites
    }

    pub fn enzymes(&self) -> &[Enzyme] {
        &self.enzymes
    }

    /// Reactions in evaluation order.
    pub fn reactions(&self) -> &[Reaction] {
        &self.reactions
    }

    pub fn metabolite(&self, name: &str) -> Option<&Metabolite> {
        self.metabolite_index
            .get(name)
            .map(|id| &self.metabolites[id.0])
    }

    pub fn metabolite_id(&self, name: &str) -> Option<MetaboliteId> {
        self.metabolite_index.get(name).copied()
    }

    pub fn enzyme(&self, name: &str) -> Option<&Enzyme> {
        self.enzyme_index.get(name).map(|id| &self.enzymes[id.0])
    }

    /// Mutable access to an enzyme. Its setters keep `max_rate` consistent.
    pub fn enzyme_mut(&mut self, name: &str) -> Option<&mut Enzyme> {
        self.enzyme_index
            .get(name)
            .map(|id| &mut self.enzymes[id.0])
    }

    /// Sets the concentration of the named enzyme.
    ///
    /// # Errors
    ///
    /// * [`SimulationError::UnknownEnzyme`] if no enzyme has this name
    /// * [`SimulationError::InvalidParameter`] if the value is negative or not finite
    pub fn set_enzyme_concentration(
        &mut self,
        name: &str,
        concentration: f64,
    ) -> Result<(), SimulationError> {
        self.enzyme_mut(name)
            .ok_or_else(|| SimulationError::UnknownEnzyme(name.to_string()))?
            .set_enzyme_concentration(concentration)
    }

    /// Policy used by [`Pathway::simulate`].
    pub fn policy(&self) -> DeltaPolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: DeltaPolicy) {
        self.policy = policy;
    }

    /// Simulated time of every recorded sample, starting at `0.0`.
    pub fn time(&self) -> &[f64] {
        &self.time
    }

    /// Current rate of every reaction in mM/s, in evaluation order.
    pub fn rates(&self) -> Vec<f64> {
        self.reactions
            .iter()
            .map(|r| r.rate(&self.metabolites, &self.enzymes))
            .collect()
    }

    /// Advances the pathway by `steps` steps of `dt` seconds using the pathway's policy.
    ///
    /// Calls continue from the current state. The returned result holds the full
    /// trajectory since construction (or the last [`Pathway::reset`]).
    ///
    /// # Errors
    ///
    /// * [`SimulationError::InvalidTimeStep`] if `dt` is not finite or not strictly positive
    /// * [`SimulationError::NegativeSteps`] if `steps < 0`
    ///
    /// Nothing is modified when an error is returned.
    pub fn simulate(&mut self, steps: i64, dt: f64) -> Result<SimulationResult, SimulationError> {
        let setup = SimulationSetup {
            steps,
            dt,
            policy: self.policy,
        };
        self.run(&setup)
    }

    /// Advances the pathway according to a [`SimulationSetup`].
    ///
    /// The setup's policy is used for this run only.
    pub fn run(&mut self, setup: &SimulationSetup) -> Result<SimulationResult, SimulationError> {
        let steps = setup.validate()?;

        debug!(
            "Simulating '{}': {} steps of dt = {} ({:?})",
            self.name, steps, setup.dt, setup.policy
        );

        let start = self.time.last().copied().unwrap_or(0.0);
        for k in 1..=steps {
            self.step(setup.dt, setup.policy);
            self.time.push(start + k as f64 * setup.dt);
        }

        Ok(self.result())
    }

    fn step(&mut self, dt: f64, policy: DeltaPolicy) {
        for reaction in &self.reactions {
            reaction.step(&mut self.metabolites, &self.enzymes, dt, policy);
        }

        for metabolite in self.metabolites.iter_mut() {
            metabolite.record();
        }
    }

    /// Trajectory recorded so far.
    pub fn result(&self) -> SimulationResult {
        let mut result = SimulationResult::new(self.time.clone());
        for metabolite in &self.metabolites {
            result.add_species(metabolite.name().to_string(), metabolite.history().to_vec());
        }
        result
    }

    /// Restores all initial concentrations and discards the recorded trajectory.
    ///
    /// Enzyme parameters are left as they are.
    pub fn reset(&mut self) {
        for metabolite in self.metabolites.iter_mut() {
            metabolite.reset();
        }
        self.time = vec![0.0];
    }

    /// Converts the pathway back into a name-based definition using initial concentrations
    /// and current enzyme parameters.
    pub fn to_definition(&self) -> PathwayDefinition {
        let element = |p: &Participant| {
            ReactionElement::new(self.metabolites[p.metabolite.0].name(), p.stoichiometry)
        };

        PathwayDefinition {
            name: self.name.clone(),
            metabolites: self
                .metabolites
                .iter()
                .map(|m| MetaboliteDefinition::new(m.name(), m.initial_concentration()))
                .collect(),
            enzymes: self.enzymes.iter().map(EnzymeDefinition::from).collect(),
            reactions: self
                .reactions
                .iter()
                .map(|r| ReactionDefinition {
                    name: r.name().to_string(),
                    enzyme: self.enzymes[r.enzyme().0].name().to_string(),
                    substrates: r.substrates().iter().map(element).collect(),
                    products: r.products().iter().map(element).collect(),
                })
                .collect(),
        }
    }

    fn resolve(
        &self,
        elements: &[ReactionElement],
    ) -> Result<Vec<Participant>, SimulationError> {
        elements
            .iter()
            .map(|e| {
                let id = self
                    .metabolite_id(&e.metabolite)
                    .ok_or_else(|| SimulationError::UnknownMetabolite(e.metabolite.clone()))?;
                Ok(Participant::new(id, e.stoichiometry))
            })
            .collect()
    }
}

impl TryFrom<&PathwayDefinition> for Pathway {
    type Error = SimulationError;

    fn try_from(definition: &PathwayDefinition) -> Result<Self, Self::Error> {
        let report = check_consistency(definition);
        if !report.is_valid {
            return Err(SimulationError::InvalidDefinition(report.error_messages()));
        }

        for warning in report.with_severity(Severity::Warning) {
            warn!(
                "{}: {} ({})",
                definition.name,
                warning.message(),
                warning.location()
            );
        }

        let metabolites: Vec<Metabolite> = definition
            .metabolites
            .iter()
            .map(|m| Metabolite::new(m.name.clone(), m.initial_concentration))
            .collect();

        let enzymes = definition
            .enzymes
            .iter()
            .map(Enzyme::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let metabolite_index = metabolites
            .iter()
            .enumerate()
            .map(|(i, m)| (m.name().to_string(), MetaboliteId(i)))
            .collect();

        let enzyme_index = enzymes
            .iter()
            .enumerate()
            .map(|(i, e)| (e.name().to_string(), EnzymeId(i)))
            .collect();

        let mut pathway = Pathway {
            name: definition.name.clone(),
            metabolites,
            enzymes,
            reactions: Vec::with_capacity(definition.reactions.len()),
            metabolite_index,
            enzyme_index,
            time: vec![0.0],
            policy: DeltaPolicy::default(),
        };

        for reaction in &definition.reactions {
            let enzyme = pathway
                .enzyme_index
                .get(&reaction.enzyme)
                .copied()
                .ok_or_else(|| SimulationError::UnknownEnzyme(reaction.enzyme.clone()))?;

            let substrates = pathway.resolve(&reaction.substrates)?;
            let products = pathway.resolve(&reaction.products)?;

            pathway.reactions.push(Reaction::new(
                reaction.name.clone(),
                enzyme,
                substrates,
                products,
            )?);
        }

        debug!(
            "Constructed pathway '{}' with {} metabolites, {} enzymes and {} reactions",
            pathway.name,
            pathway.metabolites.len(),
            pathway.enzymes.len(),
            pathway.reactions.len()
        );

        Ok(pathway)
    }
}

impl TryFrom<PathwayDefinition> for Pathway {
    type Error = SimulationError;

    fn try_from(definition: PathwayDefinition) -> Result<Self, Self::Error> {
        Pathway::try_from(&definition)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::definition::PathwayDefinitionBuilder;
    use crate::enzyme::EnzymeDefinitionBuilder;

    fn chain(vmax: f64, km: f64, substrate: f64) -> Pathway {
        PathwayDefinitionBuilder::default()
            .name("A → B")
            .to_metabolites(MetaboliteDefinition::new("A", substrate))
            .to_metabolites(MetaboliteDefinition::new("B", 0.0))
            .to_enzymes(
                EnzymeDefinitionBuilder::default()
                    .name("E")
                    .kcat(vmax)
                    .enzyme_concentration(1.0)
                    .km(km)
                    .build()
                    .unwrap(),
            )
            .to_reactions(ReactionDefinition {
                name: "A → B".to_string(),
                enzyme: "E".to_string(),
                substrates: vec![ReactionElement::new("A", 1.0)],
                products: vec![ReactionElement::new("B", 1.0)],
            })
            .build()
            .unwrap()
            .try_into()
            .unwrap()
    }

    #[test]
    fn test_single_step() {
        let mut pathway = chain(0.5, 1.0, 10.0);
        let result = pathway.simulate(1, 1.0).unwrap();

        let a = result.get("A").unwrap();
        let b = result.get("B").unwrap();
        assert_eq!(a.len(), 2);
        assert_relative_eq!(a[1], 9.545454545, epsilon = 1e-6);
        assert_relative_eq!(b[1], 0.454545454, epsilon = 1e-6);
        assert_eq!(result.time, vec![0.0, 1.0]);
    }

    #[test]
    fn test_zero_steps_return_initial_state() {
        let mut pathway = chain(0.5, 1.0, 10.0);
        let result = pathway.simulate(0, 1.0).unwrap();

        assert_eq!(result.get("A").unwrap(), &vec![10.0]);
        assert_eq!(result.get("B").unwrap(), &vec![0.0]);
        assert_eq!(result.time, vec![0.0]);
    }

    #[test]
    fn test_invalid_input_leaves_state_untouched() {
        let mut pathway = chain(0.5, 1.0, 10.0);

        assert_eq!(
            pathway.simulate(-1, 1.0).unwrap_err(),
            SimulationError::NegativeSteps(-1)
        );
        assert_eq!(
            pathway.simulate(5, 0.0).unwrap_err(),
            SimulationError::InvalidTimeStep(0.0)
        );
        assert_eq!(pathway.metabolite("A").unwrap().history(), &[10.0]);
        assert_eq!(pathway.time(), &[0.0]);
    }

    #[test]
    fn test_repeated_calls_continue_and_reset() {
        let mut once = chain(0.5, 1.0, 10.0);
        let mut twice = chain(0.5, 1.0, 10.0);

        let full = once.simulate(4, 0.5).unwrap();
        twice.simulate(2, 0.5).unwrap();
        let continued = twice.simulate(2, 0.5).unwrap();

        assert_eq!(full, continued);
        assert_eq!(continued.time, vec![0.0, 0.5, 1.0, 1.5, 2.0]);

        twice.reset();
        assert_eq!(twice.metabolite("A").unwrap().concentration(), 10.0);
        assert_eq!(twice.result().len(), 1);
    }

    #[test]
    fn test_time_axis_is_multiple_of_dt() {
        let mut pathway = chain(0.5, 1.0, 10.0);

        let result = pathway.simulate(100, 0.1).unwrap();

        assert_eq!(result.time[100], 10.0);
        for (k, t) in result.time.iter().enumerate() {
            assert_eq!(*t, k as f64 * 0.1);
        }

        let continued = pathway.simulate(10, 0.1).unwrap();
        assert_eq!(continued.time.len(), 111);
        assert_eq!(continued.time[110], 10.0 + 10.0 * 0.1);
    }

    #[test]
    fn test_enzyme_mutation() {
        let mut pathway = chain(0.5, 1.0, 10.0);

        pathway.set_enzyme_concentration("E", 2.0).unwrap();
        assert_relative_eq!(pathway.enzyme("E").unwrap().max_rate(), 1.0);
        assert_relative_eq!(pathway.rates()[0], 10.0 / 11.0);

        assert_eq!(
            pathway.set_enzyme_concentration("X", 1.0).unwrap_err(),
            SimulationError::UnknownEnzyme("X".to_string())
        );

        pathway.enzyme_mut("E").unwrap().set_km(10.0).unwrap();
        assert_relative_eq!(pathway.rates()[0], 0.5);
    }

    #[test]
    fn test_clamp_policy_on_pathway() {
        let mut pathway = chain(100.0, 0.01, 1.0);
        pathway.set_policy(DeltaPolicy::ClampToSubstrate);

        let result = pathway.simulate(3, 1.0).unwrap();

        assert_eq!(result.final_concentrations()["A"], 0.0);
        assert_relative_eq!(result.final_concentrations()["B"], 1.0);
    }

    #[test]
    fn test_invalid_definition_is_rejected() {
        let mut definition = chain(0.5, 1.0, 10.0).to_definition();
        definition.reactions[0].enzyme = "missing".to_string();

        let err = Pathway::try_from(&definition).unwrap_err();
        match err {
            SimulationError::InvalidDefinition(messages) => {
                assert!(messages.iter().any(|m| m.contains("missing")));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_definition_round_trip() {
        let pathway = chain(0.5, 1.0, 10.0);
        let definition = pathway.to_definition();
        let rebuilt = Pathway::try_from(&definition).unwrap();

        assert_eq!(rebuilt.to_definition(), definition);
        assert_eq!(rebuilt.metabolite_id("B").unwrap().index(), 1);
    }
}
