use std::collections::HashSet;

use crate::definition::{MetaboliteDefinition, PathwayDefinition};
use crate::validation::consistency::{check_duplicates, Report, Severity, ValidationResult};

/// Validates the metabolites of a pathway definition
///
/// # Arguments
/// * `definition` - The pathway definition containing metabolites to validate
/// * `report` - Validation report to add any findings to
///
/// # Details
/// Reports duplicate names and invalid initial concentrations as errors and
/// metabolites that no reaction refers to as warnings.
pub(super) fn check_metabolites(definition: &PathwayDefinition, report: &mut Report) {
    check_duplicates(
        definition.metabolites.iter().map(|m| m.name.as_str()),
        "Metabolite",
        "metabolites",
        report,
    );

    let referenced: HashSet<&str> = definition
        .reactions
        .iter()
        .flat_map(|r| r.substrates.iter().chain(r.products.iter()))
        .map(|e| e.metabolite.as_str())
        .collect();

    for (idx, metabolite) in definition.metabolites.iter().enumerate() {
        check_initial_concentration(report, metabolite, idx);

        if !referenced.contains(metabolite.name.as_str()) {
            report.add_result(ValidationResult::new(
                format!("/metabolites/{idx}"),
                format!(
                    "Metabolite '{}' does not take part in any reaction.",
                    metabolite.name
                ),
                Severity::Warning,
                Some(metabolite.name.clone()),
            ));
        }
    }
}

/// Initial concentrations must be finite and non-negative
fn check_initial_concentration(report: &mut Report, metabolite: &MetaboliteDefinition, idx: usize) {
    let value = metabolite.initial_concentration;
    if !(value.is_finite() && value >= 0.0) {
        report.add_result(ValidationResult::new(
            format!("/metabolites/{idx}/initial_concentration"),
            format!(
                "Metabolite '{}' has invalid initial concentration {value}.",
                metabolite.name
            ),
            Severity::Error,
            Some(metabolite.name.clone()),
        ));
    }
}
