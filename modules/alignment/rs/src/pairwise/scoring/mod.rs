use eyre::{ensure, Result};

use diffalign_core_rs::num::SyncFloat;

pub use matrix::SubstitutionMatrix;

pub mod equiv;
pub mod gaps;
mod matrix;
pub mod symbols;

/// Real-valued alignment score.
pub trait Score: SyncFloat {}

impl<T: SyncFloat> Score for T {}

/// Match/mismatch substitution scores together with the linear gap penalty.
#[derive(Debug, Clone, Copy)]
pub struct Scheme<S: Score, Symbol> {
    pub symbols: symbols::Equality<S, Symbol>,
    pub gaps: gaps::Linear<S>,
}

impl<S: Score, Symbol: PartialEq> Scheme<S, Symbol> {
    pub fn new(match_score: S, mismatch_score: S, gap_penalty: S) -> Result<Self> {
        for (name, value) in [
            ("Match score", match_score),
            ("Mismatch score", mismatch_score),
            ("Gap penalty", gap_penalty),
        ] {
            ensure!(value.is_finite(), "{name} must be a finite number, got {value:?}");
        }

        Ok(Self {
            symbols: symbols::Equality::new(match_score, mismatch_score),
            gaps: gaps::Linear::new(gap_penalty),
        })
    }

    pub fn match_score(&self) -> S {
        self.symbols.equal
    }

    pub fn mismatch_score(&self) -> S {
        self.symbols.different
    }

    pub fn gap_penalty(&self) -> S {
        gaps::Scorer::gap(&self.gaps)
    }
}

impl<S: Score, Symbol: PartialEq> Default for Scheme<S, Symbol> {
    fn default() -> Self {
        Self {
            symbols: symbols::Equality::new(S::one(), -S::one()),
            gaps: gaps::Linear::new(-S::one()),
        }
    }
}
