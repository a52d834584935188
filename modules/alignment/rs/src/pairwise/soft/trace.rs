use super::engine::candidates;
use super::{Gradient, SmoothMax, Smoothed};
use crate::pairwise::scoring::{Score, SubstitutionMatrix};
use crate::pairwise::table::Table;

/// Recorded forward pass of the soft alignment.
///
/// Every cell keeps its score and the softmax weights of its three predecessors
/// (`(i-1, j-1)`, `(i-1, j)` and `(i, j-1)`), which are exactly the local partial derivatives
/// needed by [`Trace::backward`].
#[derive(Clone, Debug)]
pub struct Trace<'a, S: Score> {
    matrix: &'a SubstitutionMatrix<S>,
    gap: S,
    smoothmax: SmoothMax<S>,
    cells: Table<Smoothed<S, 3>>,
}

impl<'a, S: Score> Trace<'a, S> {
    pub(super) fn new(
        matrix: &'a SubstitutionMatrix<S>,
        gap: S,
        smoothmax: SmoothMax<S>,
        cells: Table<Smoothed<S, 3>>,
    ) -> Self {
        debug_assert_eq!(cells.rows(), matrix.rows() + 1);
        debug_assert_eq!(cells.cols(), matrix.cols() + 1);
        Self {
            matrix,
            gap,
            smoothmax,
            cells,
        }
    }

    /// Final alignment score `S[len1][len2]`.
    pub fn score(&self) -> S {
        self.cells[(self.cells.rows() - 1, self.cells.cols() - 1)].value()
    }

    /// The complete `(len1 + 1) x (len2 + 1)` score table.
    pub fn scores(&self) -> Table<S> {
        Table::from_fn(self.cells.rows(), self.cells.cols(), |i, j| {
            self.cells[(i, j)].value()
        })
    }

    /// Reverse-mode differentiation of the final score.
    ///
    /// Adjoints are pushed from `(len1, len2)` back to the origin in reverse row-major order, which
    /// visits every cell after all of its successors.
    pub fn backward(&self) -> Gradient<S> {
        let (rows, cols) = (self.cells.rows(), self.cells.cols());
        let mut adjoints = Table::new(rows, cols, S::zero());
        let mut substitutions = Table::new(rows - 1, cols - 1, S::zero());
        let (mut gap, mut temperature) = (S::zero(), S::zero());

        adjoints[(rows - 1, cols - 1)] = S::one();
        for i in (0..rows).rev() {
            for j in (0..cols).rev() {
                let adjoint = adjoints[(i, j)];
                if adjoint == S::zero() {
                    continue;
                }

                let cell = &self.cells[(i, j)];
                let [diagonal, deletion, insertion] = *cell.weights();
                if i > 0 && j > 0 {
                    let flow = adjoint * diagonal;
                    adjoints[(i - 1, j - 1)] = adjoints[(i - 1, j - 1)] + flow;
                    substitutions[(i - 1, j - 1)] = substitutions[(i - 1, j - 1)] + flow;

                    let candidates = candidates(&self.cells, self.matrix, self.gap, i, j);
                    temperature = temperature
                        + adjoint * self.smoothmax.temperature_partial(&candidates, cell);
                }
                if i > 0 {
                    let flow = adjoint * deletion;
                    adjoints[(i - 1, j)] = adjoints[(i - 1, j)] + flow;
                    gap = gap + flow;
                }
                if j > 0 {
                    let flow = adjoint * insertion;
                    adjoints[(i, j - 1)] = adjoints[(i, j - 1)] + flow;
                    gap = gap + flow;
                }
            }
        }

        Gradient::new(substitutions, gap, temperature)
    }
}
