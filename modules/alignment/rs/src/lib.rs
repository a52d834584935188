use derive_getters::{Dissolve, Getters};
use eyre::Result;

use diffalign_core_rs::alignment::Alignable;

use pairwise::scoring::{equiv, Scheme, Score, SubstitutionMatrix};
use pairwise::soft::{Config, Engine};
use pairwise::Table;

pub mod pairwise;

/// Soft global alignment score of two sequences.
///
/// Uses the cumulative-gap boundary: leading and trailing gaps are scored like any other gap.
/// Fails if the temperature isn't a positive finite number or if any score isn't finite.
pub fn compute_alignment_score<S, Symbol, S1, S2>(
    seq1: &S1,
    seq2: &S2,
    match_score: S,
    mismatch_score: S,
    gap_penalty: S,
    temperature: S,
) -> Result<S>
where
    S: Score,
    Symbol: PartialEq,
    S1: Alignable<Symbol = Symbol>,
    S2: Alignable<Symbol = Symbol>,
{
    let engine = Engine::new(Config::new(temperature)?)?;
    let scheme = Scheme::new(match_score, mismatch_score, gap_penalty)?;

    let matrix = SubstitutionMatrix::build(seq1, seq2, &scheme.symbols);
    Ok(engine.score(&matrix, scheme.gap_penalty()))
}

/// Soft alignment score together with its partial derivatives.
#[derive(Clone, PartialEq, Debug, Getters, Dissolve)]
pub struct ScoreGradient<S: Score> {
    score: S,
    match_score: S,
    mismatch_score: S,
    gap_penalty: S,
    temperature: S,
    substitutions: Table<S>,
}

/// Same as [`compute_alignment_score`], but also runs the backward pass.
pub fn gradient_of_score<S, Symbol, S1, S2>(
    seq1: &S1,
    seq2: &S2,
    match_score: S,
    mismatch_score: S,
    gap_penalty: S,
    temperature: S,
) -> Result<ScoreGradient<S>>
where
    S: Score,
    Symbol: PartialEq,
    S1: Alignable<Symbol = Symbol>,
    S2: Alignable<Symbol = Symbol>,
{
    let engine = Engine::new(Config::new(temperature)?)?;
    let scheme = Scheme::new(match_score, mismatch_score, gap_penalty)?;

    let matrix = SubstitutionMatrix::build(seq1, seq2, &scheme.symbols);
    let trace = engine.forward(&matrix, scheme.gap_penalty());
    let gradient = trace.backward();

    Ok(ScoreGradient {
        score: trace.score(),
        match_score: gradient.class(&matrix, equiv::Type::Match),
        mismatch_score: gradient.class(&matrix, equiv::Type::Mismatch),
        gap_penalty: *gradient.gap_penalty(),
        temperature: *gradient.temperature(),
        substitutions: gradient.substitutions().clone(),
    })
}
