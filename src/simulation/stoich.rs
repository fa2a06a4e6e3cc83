use ndarray::Array2;

use super::pathway::Pathway;

impl Pathway {
    /// Derives the stoichiometry matrix of the pathway.
    ///
    /// Each row corresponds to a metabolite and each column to a reaction, both in
    /// declaration order. Negative values represent substrates (consumed in the reaction)
    /// and positive values represent products. A metabolite appearing on both sides of a
    /// reaction receives its net coefficient.
    ///
    /// # Returns
    ///
    /// The matrix together with the metabolite names labelling its rows.
    pub fn stoichiometry_matrix(&self) -> (Array2<f64>, Vec<String>) {
        let metabolites = self.metabolites();
        let reactions = self.reactions();

        let mut matrix = Array2::zeros((metabolites.len(), reactions.len()));

        for (j, reaction) in reactions.iter().enumerate() {
            for substrate in reaction.substrates() {
                matrix[(substrate.metabolite.index(), j)] -= substrate.stoichiometry;
            }

            for product in reaction.products() {
                matrix[(product.metabolite.index(), j)] += product.stoichiometry;
            }
        }

        let names = metabolites.iter().map(|m| m.name().to_string()).collect();

        (matrix, names)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::glycolysis::{ADP, ATP, GLUCOSE, GLUCOSE_6_PHOSPHATE};

    #[test]
    fn test_glycolysis_stoichiometry() {
        let pathway = Pathway::glycolysis(10.0, &BTreeMap::new()).unwrap();
        let (matrix, names) = pathway.stoichiometry_matrix();

        assert_eq!(matrix.shape(), &[15, 10]);
        assert_eq!(names[0], GLUCOSE);

        let row = |name: &str| names.iter().position(|n| n == name).unwrap();

        // Hexokinase
        assert_eq!(matrix[(row(GLUCOSE), 0)], -1.0);
        assert_eq!(matrix[(row(ATP), 0)], -1.0);
        assert_eq!(matrix[(row(GLUCOSE_6_PHOSPHATE), 0)], 1.0);
        assert_eq!(matrix[(row(ADP), 0)], 1.0);

        // Aldolase splits into two trioses
        assert_eq!(matrix.column(3).sum(), 1.0);

        // ATP balance over the whole pathway: -1 (HK) -1 (PFK) +1 (PGK) +1 (PK)
        assert_eq!(matrix.row(row(ATP)).sum(), 0.0);
    }
}
