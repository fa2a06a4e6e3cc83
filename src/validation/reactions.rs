use std::collections::HashSet;

use crate::definition::{PathwayDefinition, ReactionDefinition, ReactionElement};
use crate::validation::consistency::{
    check_duplicates, get_enzyme_names, get_metabolite_names, Report, Severity, ValidationResult,
};

/// Validates the reactions of a pathway definition
///
/// # Arguments
/// * `definition` - The pathway definition containing reactions to validate
/// * `report` - Validation report to add any errors to
///
/// # Details
/// Every reaction needs at least one substrate, must refer to a declared enzyme and to
/// declared metabolites only, and all coefficients must be finite and positive. A
/// metabolite may appear at most once per side.
pub(super) fn check_reactions(definition: &PathwayDefinition, report: &mut Report) {
    check_duplicates(
        definition.reactions.iter().map(|r| r.name.as_str()),
        "Reaction",
        "reactions",
        report,
    );

    let metabolites = get_metabolite_names(definition);
    let enzymes = get_enzyme_names(definition);

    for (reaction_idx, reaction) in definition.reactions.iter().enumerate() {
        if !enzymes.contains(reaction.enzyme.as_str()) {
            report.add_result(ValidationResult::new(
                format!("/reactions/{reaction_idx}/enzyme"),
                format!(
                    "Enzyme '{}' of reaction '{}' is not defined in the pathway.",
                    reaction.enzyme, reaction.name
                ),
                Severity::Error,
                Some(reaction.name.clone()),
            ));
        }

        if reaction.substrates.is_empty() {
            report.add_result(ValidationResult::new(
                format!("/reactions/{reaction_idx}/substrates"),
                format!("Reaction '{}' has no substrates.", reaction.name),
                Severity::Error,
                Some(reaction.name.clone()),
            ));
        }

        let sides = [
            ("substrates", &reaction.substrates),
            ("products", &reaction.products),
        ];
        for (side, elements) in sides {
            let mut seen = HashSet::new();
            for (elem_idx, element) in elements.iter().enumerate() {
                let location = format!("/reactions/{reaction_idx}/{side}/{elem_idx}");
                if !seen.insert(element.metabolite.as_str()) {
                    report.add_result(ValidationResult::new(
                        format!("{location}/metabolite"),
                        format!(
                            "Metabolite '{}' is listed more than once in the {side} of reaction '{}'.",
                            element.metabolite, reaction.name
                        ),
                        Severity::Error,
                        Some(reaction.name.clone()),
                    ));
                }
                check_reaction_element(report, reaction, element, &metabolites, location);
            }
        }
    }
}

fn check_reaction_element(
    report: &mut Report,
    reaction: &ReactionDefinition,
    element: &ReactionElement,
    metabolites: &HashSet<&str>,
    location: String,
) {
    if !metabolites.contains(element.metabolite.as_str()) {
        report.add_result(ValidationResult::new(
            location.clone(),
            format!(
                "Metabolite '{}' in reaction '{}' is not defined in the pathway.",
                element.metabolite, reaction.name
            ),
            Severity::Error,
            Some(reaction.name.clone()),
        ));
    }

    let coefficient = element.stoichiometry;
    if !(coefficient.is_finite() && coefficient > 0.0) {
        report.add_result(ValidationResult::new(
            format!("{location}/stoichiometry"),
            format!(
                "Stoichiometric coefficient {coefficient} of '{}' in reaction '{}' must be positive.",
                element.metabolite, reaction.name
            ),
            Severity::Error,
            Some(reaction.name.clone()),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;

    fn base() -> PathwayDefinitionBuilder {
        let mut builder = PathwayDefinitionBuilder::default();
        builder
            .name("test")
            .to_metabolites(MetaboliteDefinition::new("A", 1.0))
            .to_metabolites(MetaboliteDefinition::new("B", 0.0))
            .to_enzymes(
                EnzymeDefinitionBuilder::default()
                    .name("E")
                    .kcat(1.0)
                    .enzyme_concentration(1.0)
                    .build()
                    .expect("Failed to build enzyme"),
            );
        builder
    }

    #[test]
    fn test_valid_reaction() {
        let mut report = Report::new();
        let definition = base()
            .to_reactions(
                ReactionDefinitionBuilder::default()
                    .name("A → B")
                    .enzyme("E")
                    .to_substrates(ReactionElement::new("A", 1.0))
                    .to_products(ReactionElement::new("B", 1.0))
                    .build()
                    .expect("Failed to build reaction"),
            )
            .build()
            .expect("Failed to build definition");

        check_reactions(&definition, &mut report);
        assert!(report.is_valid);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_reaction_without_substrates() {
        let mut report = Report::new();
        let definition = base()
            .to_reactions(
                ReactionDefinitionBuilder::default()
                    .name("→ B")
                    .enzyme("E")
                    .to_products(ReactionElement::new("B", 1.0))
                    .build()
                    .expect("Failed to build reaction"),
            )
            .build()
            .expect("Failed to build definition");

        check_reactions(&definition, &mut report);
        assert!(!report.is_valid);
        assert_eq!(report.errors[0].location(), "/reactions/0/substrates");
    }

    #[test]
    fn test_invalid_coefficient() {
        let mut report = Report::new();
        let definition = base()
            .to_reactions(
                ReactionDefinitionBuilder::default()
                    .name("A → B")
                    .enzyme("E")
                    .to_substrates(ReactionElement::new("A", 1.0))
                    .to_products(ReactionElement::new("B", -2.0))
                    .build()
                    .expect("Failed to build reaction"),
            )
            .build()
            .expect("Failed to build definition");

        check_reactions(&definition, &mut report);
        assert!(!report.is_valid);
        assert_eq!(
            report.errors[0].location(),
            "/reactions/0/products/0/stoichiometry"
        );
    }

    #[test]
    fn test_repeated_participant() {
        let mut report = Report::new();
        let definition = base()
            .to_reactions(
                ReactionDefinitionBuilder::default()
                    .name("A + A → B")
                    .enzyme("E")
                    .to_substrates(ReactionElement::new("A", 1.0))
                    .to_substrates(ReactionElement::new("A", 1.0))
                    .to_products(ReactionElement::new("B", 2.0))
                    .build()
                    .expect("Failed to build reaction"),
            )
            .build()
            .expect("Failed to build definition");

        check_reactions(&definition, &mut report);
        assert!(!report.is_valid);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(
            report.errors[0].location(),
            "/reactions/0/substrates/1/metabolite"
        );
    }

    #[test]
    fn test_undefined_references() {
        let mut report = Report::new();
        let definition = base()
            .to_reactions(
                ReactionDefinitionBuilder::default()
                    .name("A → C")
                    .enzyme("X")
                    .to_substrates(ReactionElement::new("A", 1.0))
                    .to_products(ReactionElement::new("C", 1.0))
                    .build()
                    .expect("Failed to build reaction"),
            )
            .build()
            .expect("Failed to build definition");

        check_reactions(&definition, &mut report);
        assert_eq!(report.errors.len(), 2);
        assert_eq!(report.filter_results("A → C").len(), 2);
    }
}
