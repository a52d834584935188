use assert_approx_eq::assert_approx_eq;

use diffalign_alignment_rs::pairwise::scoring::{symbols, SubstitutionMatrix};
use diffalign_alignment_rs::pairwise::soft::{Config, Engine};
use diffalign_alignment_rs::pairwise::{hard, Boundary};
use diffalign_alignment_rs::{compute_alignment_score, gradient_of_score};

/// Plain log-sum-exp recurrence over `f64` with an explicit boundary row and column.
fn reference(
    seq1: &[u8],
    seq2: &[u8],
    scores: (f64, f64, f64),
    temperature: f64,
    gapped: bool,
) -> f64 {
    let (matches, mismatches, gap) = scores;
    let (n, m) = (seq1.len(), seq2.len());
    let mut table = vec![vec![f64::NEG_INFINITY; m + 1]; n + 1];
    table[0][0] = 0.0;
    if gapped {
        for i in 1..=n {
            table[i][0] = i as f64 * gap;
        }
        for j in 1..=m {
            table[0][j] = j as f64 * gap;
        }
    }

    for i in 1..=n {
        for j in 1..=m {
            let substitution = if seq1[i - 1] == seq2[j - 1] { matches } else { mismatches };
            let candidates = [
                table[i - 1][j - 1] + substitution,
                table[i - 1][j] + gap,
                table[i][j - 1] + gap,
            ];
            let max = candidates.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            table[i][j] = if max == f64::NEG_INFINITY {
                max
            } else {
                let total: f64 = candidates.iter().map(|x| ((x - max) / temperature).exp()).sum();
                max + temperature * total.ln()
            };
        }
    }
    table[n][m]
}

#[test]
fn test_gattaca() {
    let score = compute_alignment_score(&"GATTACA", &"GCTTGCA", 1.0f64, -1.0, -1.0, 0.1).unwrap();
    let expected = reference(b"GATTACA", b"GCTTGCA", (1.0, -1.0, -1.0), 0.1, true);
    assert_approx_eq!(score, expected, 1e-3);
    assert_approx_eq!(score, 3.0000181591477, 1e-9);
}

#[test]
fn test_gattaca_without_leading_gaps() {
    let scorer = symbols::Equality::new(1.0, -1.0);
    let matrix = SubstitutionMatrix::build(&"GATTACA", &"GCTTGCA", &scorer);
    let mut config = Config::new(0.1).unwrap();
    config.set_boundary(Boundary::Unreachable);
    let score = Engine::new(config).unwrap().score(&matrix, -1.0);

    let expected = reference(b"GATTACA", b"GCTTGCA", (1.0, -1.0, -1.0), 0.1, false);
    assert_approx_eq!(score, expected, 1e-9);
    assert!(score >= hard::score(&matrix, -1.0, Boundary::Unreachable));
}

#[test]
fn test_references_for_various_parameters() {
    let workload: [(&[u8], &[u8], (f64, f64, f64), f64); 5] = [
        (b"ACGTACGT", b"ACGACGT", (1.0, -1.0, -1.0), 0.5),
        (b"AAAA", b"TTTTTT", (2.0, -3.0, -0.5), 0.2),
        (b"GGCATTC", b"GCATC", (1.5, -0.5, -2.0), 1.0),
        (b"A", b"AAAAAAAA", (1.0, -1.0, -0.1), 0.05),
        (b"CAGT", b"CAGT", (1.0, -1.0, -1.0), 3.0),
    ];
    for (seq1, seq2, (matches, mismatches, gap), temperature) in workload {
        for gapped in [true, false] {
            let mut config = Config::new(temperature).unwrap();
            if !gapped {
                config.set_boundary(Boundary::Unreachable);
            }
            let scorer = symbols::Equality::new(matches, mismatches);
            let matrix = SubstitutionMatrix::build(&seq1, &seq2, &scorer);
            let score = Engine::new(config).unwrap().score(&matrix, gap);
            let expected = reference(seq1, seq2, (matches, mismatches, gap), temperature, gapped);
            assert_approx_eq!(score, expected, 1e-9);
        }
    }
}

#[test]
fn test_gattaca_gradient() {
    let gradient = gradient_of_score(&"GATTACA", &"GCTTGCA", 1.0f64, -1.0, -1.0, 0.1).unwrap();
    assert_approx_eq!(*gradient.score(), 3.0000181591477, 1e-9);

    // The optimal alignment has no gaps: five matches and two mismatches
    assert_approx_eq!(*gradient.match_score(), 5.0, 1e-3);
    assert_approx_eq!(*gradient.mismatch_score(), 2.0, 1e-3);
    assert_approx_eq!(*gradient.gap_penalty(), 0.0, 1e-3);
    assert_eq!(gradient.substitutions().rows(), 7);
    assert_eq!(gradient.substitutions().cols(), 7);
}

#[test]
fn test_invalid_temperature() {
    for temperature in [0.0, -0.1, -10.0, f64::NAN, f64::INFINITY] {
        let result = compute_alignment_score(&"ACGT", &"ACGT", 1.0, -1.0, -1.0, temperature);
        let error = result.unwrap_err().to_string();
        assert!(error.contains("Temperature"), "{error}");

        assert!(gradient_of_score(&"ACGT", &"ACGT", 1.0, -1.0, -1.0, temperature).is_err());
    }
}

#[test]
fn test_non_finite_scores() {
    assert!(compute_alignment_score(&"AC", &"AC", f64::NAN, -1.0, -1.0, 1.0).is_err());
    assert!(compute_alignment_score(&"AC", &"AC", 1.0, -1.0, f64::NEG_INFINITY, 1.0).is_err());
}
