use diffalign_core_rs::alignment::Alignable;

use super::{equiv, symbols, Score};
use crate::pairwise::table::Table;

/// Pairwise substitution scores for every `(seq1[i], seq2[j])` pair.
///
/// Each entry also remembers its equivalence class, which lets gradients with respect to the
/// individual entries be folded back into the scalar parameters that produced them.
#[derive(Clone, PartialEq, Debug)]
pub struct SubstitutionMatrix<S: Score> {
    scores: Table<S>,
    classes: Table<equiv::Type>,
}

impl<S: Score> SubstitutionMatrix<S> {
    pub fn build<Symbol, Scorer, S1, S2>(seq1: &S1, seq2: &S2, scorer: &Scorer) -> Self
    where
        Scorer: symbols::Scorer<Score = S, Symbol = Symbol> + equiv::Classifier<Symbol = Symbol>,
        S1: Alignable<Symbol = Symbol>,
        S2: Alignable<Symbol = Symbol>,
    {
        let (rows, cols) = (seq1.len(), seq2.len());
        Self {
            scores: Table::from_fn(rows, cols, |i, j| scorer.score(i, seq1.at(i), j, seq2.at(j))),
            classes: Table::from_fn(rows, cols, |i, j| scorer.classify(seq1.at(i), seq2.at(j))),
        }
    }

    pub fn rows(&self) -> usize {
        self.scores.rows()
    }

    pub fn cols(&self) -> usize {
        self.scores.cols()
    }

    pub fn scores(&self) -> &Table<S> {
        &self.scores
    }

    pub fn classes(&self) -> &Table<equiv::Type> {
        &self.classes
    }

    #[inline(always)]
    pub fn score(&self, row: usize, col: usize) -> S {
        self.scores[(row, col)]
    }

    /// Sum `values` over all entries of the given class.
    pub fn class_sum(&self, values: &Table<S>, class: equiv::Type) -> S {
        debug_assert_eq!((values.rows(), values.cols()), (self.rows(), self.cols()));
        self.classes
            .data()
            .iter()
            .zip(values.data())
            .filter(|(cls, _)| **cls == class)
            .fold(S::zero(), |acc, (_, value)| acc + *value)
    }
}
