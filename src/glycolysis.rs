//! Glycolysis pathway
//!
//! The ten glycolytic reactions from glucose to pyruvate, with optional ATP/ADP and
//! NAD+/NADH bookkeeping and an optional eleventh step, lactate dehydrogenase, which
//! regenerates NAD+ from NADH.
//!
//! Kinetic constants are literature approximations for human erythrocyte enzymes:
//! - Hexokinase: Gerber G et al. Eur J Biochem. 1974 (hexokinase of human erythrocytes)
//! - Glucose-6-phosphate isomerase: Rozacky EE et al. Arch Biochem Biophys. 1971
//! - Phosphofructokinase: Katyare SS et al. (erythrocyte HK and PFK in type 2 diabetes)
//! - Aldolase: Esposito G et al. (human aldolase A natural mutants)
//! - Triosephosphate isomerase, phosphoglycerate mutase: Voet D, Voet JG. Biochemistry
//! - GAPDH: Mountassif D et al. (GAPDH from human erythrocytes)
//! - Phosphoglycerate kinase: Ali M, Brownstone YS. Biochim Biophys Acta. 1976
//! - Enolase: Huppertz I et al. Mol Cell. 2022
//! - Pyruvate kinase: Valentini G et al. J Biol Chem. 2002
//! - Lactate dehydrogenase: Joshi A, Palsson BO. J Theor Biol. 1989

use std::collections::BTreeMap;

use derive_builder::Builder;
use log::info;
use serde::{Deserialize, Serialize};

use crate::definition::{
    MetaboliteDefinition, PathwayDefinition, ReactionDefinition, ReactionElement,
};
use crate::enzyme::EnzymeDefinition;
use crate::simulation::error::SimulationError;
use crate::simulation::pathway::Pathway;

pub const GLUCOSE: &str = "Glukose";
pub const GLUCOSE_6_PHOSPHATE: &str = "G6P";
pub const FRUCTOSE_6_PHOSPHATE: &str = "F6P";
pub const FRUCTOSE_1_6_BISPHOSPHATE: &str = "F1,6BP";
pub const DIHYDROXYACETONE_PHOSPHATE: &str = "DHAP";
pub const GLYCERALDEHYDE_3_PHOSPHATE: &str = "G3P";
pub const BISPHOSPHOGLYCERATE_1_3: &str = "1,3-BPG";
pub const PHOSPHOGLYCERATE_3: &str = "3-PG";
pub const PHOSPHOGLYCERATE_2: &str = "2-PG";
pub const PHOSPHOENOLPYRUVATE: &str = "PEP";
pub const PYRUVATE: &str = "Pyruvat";
pub const LACTATE: &str = "Laktat";

pub const ATP: &str = "ATP";
pub const ADP: &str = "ADP";
pub const NAD: &str = "NAD+";
pub const NADH: &str = "NADH";

pub const HEXOKINASE: &str = "Hexokinase";
pub const ISOMERASE: &str = "Isomerase";
pub const PHOSPHOFRUCTOKINASE: &str = "PFK";
pub const ALDOLASE: &str = "Aldolase";
pub const TRIOSEPHOSPHATE_ISOMERASE: &str = "TIM";
pub const GAPDH: &str = "GAPDH";
pub const PHOSPHOGLYCERATE_KINASE: &str = "PGK";
pub const PHOSPHOGLYCERATE_MUTASE: &str = "PGM";
pub const ENOLASE: &str = "Enolase";
pub const PYRUVATE_KINASE: &str = "Pyruvat-Kinase";
pub const LACTATE_DEHYDROGENASE: &str = "LDH";

/// Default initial glucose concentration in mM
pub const DEFAULT_GLUCOSE: f64 = 10.0;

/// Carbon intermediates in pathway order
const INTERMEDIATES: [&str; 10] = [
    GLUCOSE_6_PHOSPHATE,
    FRUCTOSE_6_PHOSPHATE,
    FRUCTOSE_1_6_BISPHOSPHATE,
    DIHYDROXYACETONE_PHOSPHATE,
    GLYCERALDEHYDE_3_PHOSPHATE,
    BISPHOSPHOGLYCERATE_1_3,
    PHOSPHOGLYCERATE_3,
    PHOSPHOGLYCERATE_2,
    PHOSPHOENOLPYRUVATE,
    PYRUVATE,
];

/// Initial cofactor pools in mM
const COFACTORS: [(&str, f64); 4] = [(ATP, 5.0), (ADP, 0.5), (NAD, 2.0), (NADH, 0.1)];

/// One glycolytic step: enzyme constants plus carbon and cofactor participants.
struct Step {
    enzyme: &'static str,
    /// 1/s
    kcat: f64,
    /// mM
    concentration: f64,
    /// mM
    km: f64,
    substrates: &'static [&'static str],
    products: &'static [&'static str],
    cofactor_substrates: &'static [&'static str],
    cofactor_products: &'static [&'static str],
}

static STEPS: [Step; 10] = [
    Step {
        enzyme: HEXOKINASE,
        kcat: 200.0,
        concentration: 0.0025,
        km: 0.05,
        substrates: &[GLUCOSE],
        products: &[GLUCOSE_6_PHOSPHATE],
        cofactor_substrates: &[ATP],
        cofactor_products: &[ADP],
    },
    Step {
        enzyme: ISOMERASE,
        kcat: 150.0,
        concentration: 0.002,
        km: 0.1,
        substrates: &[GLUCOSE_6_PHOSPHATE],
        products: &[FRUCTOSE_6_PHOSPHATE],
        cofactor_substrates: &[],
        cofactor_products: &[],
    },
    Step {
        enzyme: PHOSPHOFRUCTOKINASE,
        kcat: 300.0,
        concentration: 0.002,
        km: 0.08,
        substrates: &[FRUCTOSE_6_PHOSPHATE],
        products: &[FRUCTOSE_1_6_BISPHOSPHATE],
        cofactor_substrates: &[ATP],
        cofactor_products: &[ADP],
    },
    Step {
        enzyme: ALDOLASE,
        kcat: 100.0,
        concentration: 0.0015,
        km: 0.03,
        substrates: &[FRUCTOSE_1_6_BISPHOSPHATE],
        products: &[DIHYDROXYACETONE_PHOSPHATE, GLYCERALDEHYDE_3_PHOSPHATE],
        cofactor_substrates: &[],
        cofactor_products: &[],
    },
    Step {
        enzyme: TRIOSEPHOSPHATE_ISOMERASE,
        kcat: 4300.0,
        concentration: 0.002,
        km: 0.6,
        substrates: &[DIHYDROXYACETONE_PHOSPHATE],
        products: &[GLYCERALDEHYDE_3_PHOSPHATE],
        cofactor_substrates: &[],
        cofactor_products: &[],
    },
    Step {
        enzyme: GAPDH,
        kcat: 250.0,
        concentration: 0.002,
        km: 0.02,
        substrates: &[GLYCERALDEHYDE_3_PHOSPHATE],
        products: &[BISPHOSPHOGLYCERATE_1_3],
        cofactor_substrates: &[NAD],
        cofactor_products: &[NADH],
    },
    Step {
        enzyme: PHOSPHOGLYCERATE_KINASE,
        kcat: 300.0,
        concentration: 0.002,
        km: 0.2,
        substrates: &[BISPHOSPHOGLYCERATE_1_3],
        products: &[PHOSPHOGLYCERATE_3],
        cofactor_substrates: &[ADP],
        cofactor_products: &[ATP],
    },
    Step {
        enzyme: PHOSPHOGLYCERATE_MUTASE,
        kcat: 100.0,
        concentration: 0.002,
        km: 0.15,
        substrates: &[PHOSPHOGLYCERATE_3],
        products: &[PHOSPHOGLYCERATE_2],
        cofactor_substrates: &[],
        cofactor_products: &[],
    },
    Step {
        enzyme: ENOLASE,
        kcat: 200.0,
        concentration: 0.002,
        km: 0.07,
        substrates: &[PHOSPHOGLYCERATE_2],
        products: &[PHOSPHOENOLPYRUVATE],
        cofactor_substrates: &[],
        cofactor_products: &[],
    },
    Step {
        enzyme: PYRUVATE_KINASE,
        kcat: 350.0,
        concentration: 0.002,
        km: 0.07,
        substrates: &[PHOSPHOENOLPYRUVATE],
        products: &[PYRUVATE],
        cofactor_substrates: &[ADP],
        cofactor_products: &[ATP],
    },
];

static FERMENTATION: Step = Step {
    enzyme: LACTATE_DEHYDROGENASE,
    kcat: 250.0,
    concentration: 0.002,
    km: 0.2,
    substrates: &[PYRUVATE],
    products: &[LACTATE],
    cofactor_substrates: &[NADH],
    cofactor_products: &[NAD],
};

impl Step {
    fn enzyme_definition(&self) -> EnzymeDefinition {
        EnzymeDefinition {
            name: self.enzyme.to_string(),
            kcat: self.kcat,
            enzyme_concentration: self.concentration,
            km: self.km,
        }
    }

    fn reaction_definition(&self, cofactors: bool) -> ReactionDefinition {
        let elements = |carbon: &[&str], cofactor: &[&str]| -> Vec<ReactionElement> {
            let cofactor = if cofactors { cofactor } else { &[] };
            carbon
                .iter()
                .chain(cofactor.iter())
                .map(|name| ReactionElement::new(*name, 1.0))
                .collect()
        };

        ReactionDefinition {
            name: self.enzyme.to_string(),
            enzyme: self.enzyme.to_string(),
            substrates: elements(self.substrates, self.cofactor_substrates),
            products: elements(self.products, self.cofactor_products),
        }
    }
}

/// Default enzyme concentration (mM) of a glycolytic enzyme, if it is part of the pathway.
pub fn default_enzyme_concentration(enzyme: &str) -> Option<f64> {
    STEPS
        .iter()
        .chain(std::iter::once(&FERMENTATION))
        .find(|step| step.enzyme == enzyme)
        .map(|step| step.concentration)
}

/// Builds the definition of the glycolytic pathway.
///
/// # Arguments
///
/// * `initial_glucose` - Glucose concentration at construction (mM)
/// * `cofactors` - Whether ATP/ADP and NAD+/NADH are tracked
/// * `lactate_fermentation` - Whether lactate dehydrogenase is appended as 11th step
pub fn glycolysis_definition(
    initial_glucose: f64,
    cofactors: bool,
    lactate_fermentation: bool,
) -> PathwayDefinition {
    let steps: Vec<&Step> = if lactate_fermentation {
        STEPS.iter().chain(std::iter::once(&FERMENTATION)).collect()
    } else {
        STEPS.iter().collect()
    };

    let mut metabolites = vec![MetaboliteDefinition::new(GLUCOSE, initial_glucose)];
    metabolites.extend(
        INTERMEDIATES
            .iter()
            .map(|name| MetaboliteDefinition::new(*name, 0.0)),
    );
    if lactate_fermentation {
        metabolites.push(MetaboliteDefinition::new(LACTATE, 0.0));
    }
    if cofactors {
        metabolites.extend(
            COFACTORS
                .iter()
                .map(|(name, initial)| MetaboliteDefinition::new(*name, *initial)),
        );
    }

    PathwayDefinition {
        name: "Glykolyse".to_string(),
        metabolites,
        enzymes: steps.iter().map(|step| step.enzyme_definition()).collect(),
        reactions: steps
            .iter()
            .map(|step| step.reaction_definition(cofactors))
            .collect(),
    }
}

/// Configuration of a glycolysis simulation
///
/// # Fields
///
/// * `initial_glucose` - Glucose at construction in mM (default: 10.0)
/// * `enzyme_overrides` - Enzyme concentrations (mM) replacing the defaults, by enzyme name
/// * `cofactors` - Track ATP/ADP and NAD+/NADH (default: true)
/// * `lactate_fermentation` - Append lactate dehydrogenase (default: false)
///
/// # Examples
///
/// ```
/// use glycosim::prelude::{GlycolysisConfigBuilder, Pathway};
///
/// let config = GlycolysisConfigBuilder::default()
///     .initial_glucose(5.0)
///     .enzyme_overrides([("PFK".to_string(), 0.001)])
///     .build()
///     .unwrap();
///
/// let pathway = Pathway::try_from(&config).unwrap();
/// assert_eq!(pathway.enzyme("PFK").unwrap().enzyme_concentration(), 0.001);
/// ```
#[derive(Debug, Clone, PartialEq, Builder, Serialize, Deserialize)]
#[serde(default)]
pub struct GlycolysisConfig {
    #[builder(default = "DEFAULT_GLUCOSE")]
    pub initial_glucose: f64,
    #[builder(default, setter(into))]
    pub enzyme_overrides: BTreeMap<String, f64>,
    #[builder(default = "true")]
    pub cofactors: bool,
    #[builder(default)]
    pub lactate_fermentation: bool,
}

impl Default for GlycolysisConfig {
    fn default() -> Self {
        Self {
            initial_glucose: DEFAULT_GLUCOSE,
            enzyme_overrides: BTreeMap::new(),
            cofactors: true,
            lactate_fermentation: false,
        }
    }
}

impl TryFrom<&GlycolysisConfig> for Pathway {
    type Error = SimulationError;

    fn try_from(config: &GlycolysisConfig) -> Result<Self, Self::Error> {
        let glucose = config.initial_glucose;
        if !(glucose.is_finite() && glucose >= 0.0) {
            return Err(SimulationError::InvalidConcentration {
                metabolite: GLUCOSE.to_string(),
                value: glucose,
            });
        }

        let definition =
            glycolysis_definition(glucose, config.cofactors, config.lactate_fermentation);
        let mut pathway = Pathway::try_from(definition)?;

        for (enzyme, concentration) in config.enzyme_overrides.iter() {
            pathway.set_enzyme_concentration(enzyme, *concentration)?;
            info!("Enzyme concentration of {enzyme} set to {concentration} mM");
        }

        Ok(pathway)
    }
}

impl TryFrom<GlycolysisConfig> for Pathway {
    type Error = SimulationError;

    fn try_from(config: GlycolysisConfig) -> Result<Self, Self::Error> {
        Pathway::try_from(&config)
    }
}

impl Pathway {
    /// Constructs the glycolytic pathway with cofactor bookkeeping.
    ///
    /// # Arguments
    ///
    /// * `initial_glucose` - Glucose concentration at construction (mM)
    /// * `enzyme_overrides` - Enzyme concentrations (mM) keyed by enzyme name; enzymes
    ///   not listed keep their default concentration
    ///
    /// # Errors
    ///
    /// * [`SimulationError::InvalidConcentration`] for negative or non-finite glucose
    /// * [`SimulationError::UnknownEnzyme`] if an override names an enzyme not in the pathway
    /// * [`SimulationError::InvalidParameter`] for negative or non-finite overrides
    pub fn glycolysis(
        initial_glucose: f64,
        enzyme_overrides: &BTreeMap<String, f64>,
    ) -> Result<Self, SimulationError> {
        let config = GlycolysisConfig {
            initial_glucose,
            enzyme_overrides: enzyme_overrides.clone(),
            ..GlycolysisConfig::default()
        };

        Pathway::try_from(&config)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_reaction_order() {
        let definition = glycolysis_definition(DEFAULT_GLUCOSE, true, false);
        let enzymes: Vec<&str> = definition
            .reactions
            .iter()
            .map(|r| r.enzyme.as_str())
            .collect();

        assert_eq!(
            enzymes,
            vec![
                "Hexokinase",
                "Isomerase",
                "PFK",
                "Aldolase",
                "TIM",
                "GAPDH",
                "PGK",
                "PGM",
                "Enolase",
                "Pyruvat-Kinase"
            ]
        );
    }

    #[test]
    fn test_metabolites_with_and_without_cofactors() {
        let with = glycolysis_definition(DEFAULT_GLUCOSE, true, false);
        let without = glycolysis_definition(DEFAULT_GLUCOSE, false, false);
        let fermenting = glycolysis_definition(DEFAULT_GLUCOSE, true, true);

        assert_eq!(with.metabolites.len(), 15);
        assert_eq!(without.metabolites.len(), 11);
        assert_eq!(fermenting.metabolites.len(), 16);
        assert_eq!(fermenting.reactions.len(), 11);
        assert_eq!(with.metabolites[0], MetaboliteDefinition::new(GLUCOSE, 10.0));
    }

    #[test]
    fn test_cofactor_participation() {
        let definition = glycolysis_definition(DEFAULT_GLUCOSE, true, false);
        let hexokinase = &definition.reactions[0];

        assert_eq!(hexokinase.substrates[0].metabolite, GLUCOSE);
        assert_eq!(hexokinase.substrates[1].metabolite, ATP);
        assert_eq!(hexokinase.products[1].metabolite, ADP);

        let gapdh = &definition.reactions[5];
        assert_eq!(gapdh.substrates[1].metabolite, NAD);
        assert_eq!(gapdh.products[1].metabolite, NADH);

        let aldolase = &definition.reactions[3];
        assert_eq!(aldolase.products.len(), 2);
    }

    #[test]
    fn test_default_enzyme_concentration() {
        assert_eq!(default_enzyme_concentration(HEXOKINASE), Some(0.0025));
        assert_eq!(default_enzyme_concentration(LACTATE_DEHYDROGENASE), Some(0.002));
        assert_eq!(default_enzyme_concentration("Catalase"), None);
    }

    #[test]
    fn test_overrides_are_applied() {
        let overrides = BTreeMap::from([
            (HEXOKINASE.to_string(), 0.005),
            (PYRUVATE_KINASE.to_string(), 0.0005),
        ]);
        let pathway = Pathway::glycolysis(DEFAULT_GLUCOSE, &overrides).unwrap();

        let hexokinase = pathway.enzyme(HEXOKINASE).unwrap();
        assert_eq!(hexokinase.enzyme_concentration(), 0.005);
        assert_relative_eq!(hexokinase.max_rate(), 1.0);
        assert_eq!(
            pathway.enzyme(PYRUVATE_KINASE).unwrap().enzyme_concentration(),
            0.0005
        );
        assert_eq!(pathway.enzyme(PHOSPHOFRUCTOKINASE).unwrap().enzyme_concentration(), 0.002);
    }

    #[test]
    fn test_invalid_configuration() {
        let unknown = BTreeMap::from([("Catalase".to_string(), 0.1)]);
        assert_eq!(
            Pathway::glycolysis(DEFAULT_GLUCOSE, &unknown).unwrap_err(),
            SimulationError::UnknownEnzyme("Catalase".to_string())
        );

        // LDH only exists when fermentation is enabled
        let ldh = BTreeMap::from([(LACTATE_DEHYDROGENASE.to_string(), 0.1)]);
        assert!(Pathway::glycolysis(DEFAULT_GLUCOSE, &ldh).is_err());

        let negative = BTreeMap::from([(PHOSPHOFRUCTOKINASE.to_string(), -0.1)]);
        assert!(matches!(
            Pathway::glycolysis(DEFAULT_GLUCOSE, &negative).unwrap_err(),
            SimulationError::InvalidParameter { .. }
        ));

        assert!(matches!(
            Pathway::glycolysis(-1.0, &BTreeMap::new()).unwrap_err(),
            SimulationError::InvalidConcentration { .. }
        ));
    }

    #[test]
    fn test_config_from_partial_json() {
        let config: GlycolysisConfig =
            serde_json::from_str(r#"{"initial_glucose": 4.0, "lactate_fermentation": true}"#)
                .unwrap();

        assert_eq!(config.initial_glucose, 4.0);
        assert!(config.cofactors);
        assert!(config.lactate_fermentation);

        let pathway = Pathway::try_from(config).unwrap();
        assert_eq!(pathway.reactions().len(), 11);
    }
}
