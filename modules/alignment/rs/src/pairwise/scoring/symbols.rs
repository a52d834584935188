use std::marker::PhantomData;

use super::{equiv, Score};

pub trait Scorer {
    type Score: Score;
    type Symbol;

    fn score(
        &self,
        seq1pos: usize,
        s1: &Self::Symbol,
        seq2pos: usize,
        s2: &Self::Symbol,
    ) -> Self::Score;
}

pub trait PosInvariantScorer {
    type SymScore: Score;
    type Symbol;

    fn score(&self, s1: &Self::Symbol, s2: &Self::Symbol) -> Self::SymScore;
}

impl<T: PosInvariantScorer> Scorer for T {
    type Score = <Self as PosInvariantScorer>::SymScore;
    type Symbol = <Self as PosInvariantScorer>::Symbol;

    #[inline(always)]
    fn score(&self, _: usize, s1: &Self::Symbol, _: usize, s2: &Self::Symbol) -> Self::Score {
        PosInvariantScorer::score(self, s1, s2)
    }
}

/// Scores identical symbols with `equal` and all other pairs with `different`.
#[derive(Debug)]
pub struct Equality<S: Score, Symbol> {
    pub equal: S,
    pub different: S,
    _phantom: PhantomData<Symbol>,
}

impl<S: Score, Symbol: PartialEq> Equality<S, Symbol> {
    pub fn new(equal: S, different: S) -> Self {
        Self {
            equal,
            different,
            _phantom: Default::default(),
        }
    }

    /// Score assigned to every pair of the given class.
    pub fn class_score(&self, class: equiv::Type) -> S {
        match class {
            equiv::Type::Match => self.equal,
            equiv::Type::Mismatch => self.different,
        }
    }
}

impl<S: Score, Symbol> Clone for Equality<S, Symbol> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: Score, Symbol> Copy for Equality<S, Symbol> {}

impl<S: Score, Symbol: PartialEq> equiv::Classifier for Equality<S, Symbol> {
    type Symbol = Symbol;

    #[inline(always)]
    fn classify(&self, s1: &Self::Symbol, s2: &Self::Symbol) -> equiv::Type {
        if s1 == s2 {
            equiv::Type::Match
        } else {
            equiv::Type::Mismatch
        }
    }
}

impl<S: Score, Symbol: PartialEq> PosInvariantScorer for Equality<S, Symbol> {
    type SymScore = S;
    type Symbol = Symbol;

    #[inline(always)]
    fn score(&self, a: &Self::Symbol, b: &Self::Symbol) -> Self::SymScore {
        self.class_score(equiv::Classifier::classify(self, a, b))
    }
}
