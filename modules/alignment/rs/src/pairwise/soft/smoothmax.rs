use derive_getters::Getters;
use eyre::{ensure, Result};

use crate::pairwise::scoring::Score;

/// Temperature-scaled log-sum-exp: `T * ln(sum(exp(x_i / T)))`.
///
/// A smooth surrogate for `max(x_1, ..., x_k)`. It converges to the maximum as `T -> 0+` and its
/// partial derivatives are the softmax weights of the candidates.
#[derive(Clone, Copy, PartialEq, Debug, Getters)]
pub struct SmoothMax<S: Score> {
    temperature: S,
}

/// Result of a single smooth-max evaluation.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Smoothed<S: Score, const N: usize> {
    value: S,
    weights: [S; N],
}

impl<S: Score, const N: usize> Smoothed<S, N> {
    pub fn new(value: S, weights: [S; N]) -> Self {
        Self { value, weights }
    }

    pub fn value(&self) -> S {
        self.value
    }

    /// Partial derivatives of the value with respect to each candidate.
    pub fn weights(&self) -> &[S; N] {
        &self.weights
    }
}

impl<S: Score> SmoothMax<S> {
    pub fn new(temperature: S) -> Result<Self> {
        ensure!(
            temperature.is_finite() && temperature > S::zero(),
            "Temperature must be a positive finite number, got {temperature:?}"
        );
        Ok(Self { temperature })
    }

    /// Evaluate the operator and the softmax weights of all candidates.
    ///
    /// Candidates equal to `-inf` are unreachable: they get a zero weight. If all candidates are
    /// unreachable, the result is `-inf` with all weights set to zero.
    ///
    /// Candidates that overflowed to `+inf` dominate the rest: the result is `+inf` and the weight
    /// is split evenly between them.
    pub fn apply<const N: usize>(&self, candidates: [S; N]) -> Smoothed<S, N> {
        let max = candidates
            .iter()
            .fold(S::neg_infinity(), |acc, &x| acc.max(x));
        if max == S::neg_infinity() {
            return Smoothed {
                value: max,
                weights: [S::zero(); N],
            };
        }
        if max == S::infinity() {
            let total = candidates
                .iter()
                .filter(|&&x| x == max)
                .fold(S::zero(), |acc, _| acc + S::one());
            return Smoothed {
                value: max,
                weights: candidates.map(|x| if x == max { S::one() / total } else { S::zero() }),
            };
        }

        // Shift by the maximum so that the largest exponent is exactly zero
        let mut weights = candidates.map(|x| ((x - max) / self.temperature).exp());
        let total = weights.iter().fold(S::zero(), |acc, &w| acc + w);
        for w in weights.iter_mut() {
            *w = *w / total;
        }

        Smoothed {
            value: max + self.temperature * total.ln(),
            weights,
        }
    }

    /// Local partial derivative of an already evaluated smooth-max with respect to the temperature.
    ///
    /// `d/dT [T * ln(sum(exp(x_i / T)))] = (value - sum(w_i * x_i)) / T`, where unreachable
    /// candidates (zero weight) are skipped.
    pub fn temperature_partial<const N: usize>(
        &self,
        candidates: &[S; N],
        smoothed: &Smoothed<S, N>,
    ) -> S {
        if !smoothed.value.is_finite() {
            return S::zero();
        }

        let expected = candidates
            .iter()
            .zip(smoothed.weights.iter())
            .filter(|(_, w)| **w > S::zero())
            .fold(S::zero(), |acc, (&x, &w)| acc + w * x);
        (smoothed.value - expected) / self.temperature
    }
}
