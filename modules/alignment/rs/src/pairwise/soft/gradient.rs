use derive_getters::Getters;

use crate::pairwise::scoring::{equiv, Score, SubstitutionMatrix};
use crate::pairwise::table::Table;

/// Partial derivatives of the final soft alignment score.
#[derive(Clone, PartialEq, Debug, Getters)]
pub struct Gradient<S: Score> {
    /// `d score / d M[i][j]` for every entry of the substitution matrix.
    ///
    /// Each value lies in `[0, 1]`: it is the probability that the two symbols are aligned under
    /// the Gibbs distribution over alignments induced by the temperature.
    substitutions: Table<S>,
    gap_penalty: S,
    temperature: S,
}

impl<S: Score> Gradient<S> {
    pub(super) fn new(substitutions: Table<S>, gap_penalty: S, temperature: S) -> Self {
        Self {
            substitutions,
            gap_penalty,
            temperature,
        }
    }

    /// Derivative with respect to the score shared by all matrix entries of the given class.
    pub fn class(&self, matrix: &SubstitutionMatrix<S>, class: equiv::Type) -> S {
        matrix.class_sum(&self.substitutions, class)
    }
}
