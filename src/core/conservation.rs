// conservation.rs - Column-wise consensus and conservation scoring

use crate::core::error::ConservationError;
use crate::data::sequence::{AMBIGUOUS, GAP};
use crate::data::SequenceSet;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a column with several equally frequent residues is resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TieStrategy {
    /// Emit the ambiguity marker `X`
    #[default]
    #[serde(rename = "mark-as-x")]
    MarkAsAmbiguous,
    /// Emit the tied residue that appears first in sequence order
    #[serde(rename = "first-winner")]
    FirstWinner,
}

impl FromStr for TieStrategy {
    type Err = ConservationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mark-as-x" | "mark_as_x" | "ambiguous" => Ok(TieStrategy::MarkAsAmbiguous),
            "first-winner" | "first_winner" | "first" => Ok(TieStrategy::FirstWinner),
            _ => Err(ConservationError::UnknownTieStrategy(s.to_string())),
        }
    }
}

impl TieStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            TieStrategy::MarkAsAmbiguous => "mark-as-x",
            TieStrategy::FirstWinner => "first-winner",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            TieStrategy::MarkAsAmbiguous => "ties reported as ambiguous (X)",
            TieStrategy::FirstWinner => "ties resolved to the first-appearing residue",
        }
    }
}

impl fmt::Display for TieStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-column consensus string and conservation scores
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConservationProfile {
    /// One character per column: a residue, `-` or `X`
    pub consensus: String,
    /// One score in [0, 1] per column
    pub scores: Vec<f64>,
}

/// Summary statistics of a conservation profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileStats {
    pub width: usize,
    pub mean_score: f64,
    pub min_score: f64,
    pub max_score: f64,
    pub gap_only_columns: usize,
    pub ambiguous_columns: usize,
    pub conserved_columns: usize,
}

impl ConservationProfile {
    /// Alignment width the profile was computed for
    pub fn width(&self) -> usize {
        self.scores.len()
    }

    /// Iterate over `(position, consensus, score)` with 0-based positions
    pub fn columns(&self) -> impl Iterator<Item = (usize, char, f64)> + '_ {
        self.consensus
            .chars()
            .zip(self.scores.iter().copied())
            .enumerate()
            .map(|(i, (c, s))| (i, c, s))
    }

    /// Summary statistics. Ambiguous columns are counted by the `X` marker,
    /// so a column whose single winner is the residue `X` is counted too.
    pub fn stats(&self) -> ProfileStats {
        let width = self.width();
        let (min_score, max_score, mean_score) = if width == 0 {
            (0.0, 0.0, 0.0)
        } else {
            let min = self.scores.iter().copied().fold(f64::INFINITY, f64::min);
            let max = self.scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let mean = self.scores.iter().sum::<f64>() / width as f64;
            (min, max, mean)
        };

        ProfileStats {
            width,
            mean_score,
            min_score,
            max_score,
            gap_only_columns: self.consensus.chars().filter(|&c| c == GAP as char).count(),
            ambiguous_columns: self.consensus.chars().filter(|&c| c == AMBIGUOUS as char).count(),
            conserved_columns: self.scores.iter().filter(|&&s| s == 1.0).count(),
        }
    }
}

/// Width of a non-empty set whose sequences all share one length
fn check_alignment(aligned: &SequenceSet) -> Result<usize, ConservationError> {
    let first = aligned.sequences().first().ok_or_else(|| {
        ConservationError::MisalignedInput("no sequences to analyze".to_string())
    })?;
    let width = first.len();

    if let Some(offender) = aligned.iter().find(|s| s.len() != width) {
        return Err(ConservationError::MisalignedInput(format!(
            "sequence '{}' has length {}, expected {} (from '{}')",
            offender.id(),
            offender.len(),
            width,
            first.id()
        )));
    }
    Ok(width)
}

/// Consensus residue and score for a single column
fn column_consensus(column: impl Iterator<Item = u8>, tie: TieStrategy) -> (u8, f64) {
    // Residue counts in order of first appearance
    let mut counts: Vec<(u8, usize)> = Vec::new();
    let mut non_gap = 0usize;

    for residue in column.filter(|&r| r != GAP) {
        non_gap += 1;
        match counts.iter_mut().find(|(r, _)| *r == residue) {
            Some((_, count)) => *count += 1,
            None => counts.push((residue, 1)),
        }
    }

    let max_count = counts.iter().map(|&(_, n)| n).max().unwrap_or(0);
    let mut winners = counts
        .iter()
        .filter(|&&(_, n)| n == max_count)
        .map(|&(r, _)| r);

    let Some(first_winner) = winners.next() else {
        return (GAP, 0.0);
    };
    let tied = winners.next().is_some();

    let consensus = match (tied, tie) {
        (true, TieStrategy::MarkAsAmbiguous) => AMBIGUOUS,
        _ => first_winner,
    };
    (consensus, max_count as f64 / non_gap as f64)
}

/// Compute the consensus residue and conservation score of every column.
///
/// Gaps are excluded from the score denominator. Columns made only of gaps
/// score 0 and get `-` as consensus. Columns are processed in parallel.
pub fn analyze(
    aligned: &SequenceSet,
    tie: TieStrategy,
) -> Result<ConservationProfile, ConservationError> {
    let width = check_alignment(aligned)?;

    let (consensus, scores): (Vec<u8>, Vec<f64>) = (0..width)
        .into_par_iter()
        .map(|position| column_consensus(aligned.column(position), tie))
        .unzip();

    Ok(ConservationProfile {
        consensus: consensus.into_iter().map(char::from).collect(),
        scores,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::padding::pad;
    use crate::data::Sequence;

    fn set(seqs: &[&str]) -> SequenceSet {
        seqs.iter()
            .enumerate()
            .map(|(i, s)| Sequence::new(format!("seq{}", i + 1), s.as_bytes()))
            .collect()
    }

    #[test]
    fn test_tie_strategy_from_str() {
        assert_eq!("mark_as_X".parse::<TieStrategy>(), Ok(TieStrategy::MarkAsAmbiguous));
        assert_eq!("mark-as-x".parse::<TieStrategy>(), Ok(TieStrategy::MarkAsAmbiguous));
        assert_eq!("first-winner".parse::<TieStrategy>(), Ok(TieStrategy::FirstWinner));
        assert_eq!("First_Winner".parse::<TieStrategy>(), Ok(TieStrategy::FirstWinner));
        assert_eq!(
            "majority".parse::<TieStrategy>(),
            Err(ConservationError::UnknownTieStrategy("majority".to_string()))
        );
        assert_eq!(TieStrategy::default(), TieStrategy::MarkAsAmbiguous);
    }

    #[test]
    fn test_tie_in_single_column() {
        let column = set(&["A", "A", "C", "C"]);

        let marked = analyze(&column, TieStrategy::MarkAsAmbiguous).unwrap();
        assert_eq!(marked.consensus, "X");
        assert_eq!(marked.scores, vec![0.5]);

        let first = analyze(&column, TieStrategy::FirstWinner).unwrap();
        assert_eq!(first.consensus, "A");
        assert_eq!(first.scores, vec![0.5]);
    }

    #[test]
    fn test_first_winner_uses_column_order() {
        let column = set(&["-", "C", "A", "A", "C", "G"]);
        let profile = analyze(&column, TieStrategy::FirstWinner).unwrap();
        assert_eq!(profile.consensus, "C");
        assert_eq!(profile.scores, vec![0.4]);
    }

    #[test]
    fn test_all_gap_column() {
        let aligned = set(&["A-", "C-", "A-"]);
        let profile = analyze(&aligned, TieStrategy::MarkAsAmbiguous).unwrap();
        assert_eq!(profile.consensus, "A-");
        assert_eq!(profile.scores[1], 0.0);
    }

    #[test]
    fn test_unique_plurality_score() {
        let aligned = set(&["ATGC", "ATGA", "TTGA", "A-GA"]);
        let profile = analyze(&aligned, TieStrategy::MarkAsAmbiguous).unwrap();
        assert_eq!(profile.consensus, "ATGA");
        assert_eq!(profile.scores, vec![0.75, 1.0, 1.0, 0.75]);
    }

    #[test]
    fn test_strategies_agree_without_ties() {
        let aligned = set(&["ATGCA", "ATGAA", "TTGAA", "ACG-C"]);
        let marked = analyze(&aligned, TieStrategy::MarkAsAmbiguous).unwrap();
        let first = analyze(&aligned, TieStrategy::FirstWinner).unwrap();
        assert_eq!(marked, first);
        assert!(!marked.consensus.contains('X'));
    }

    #[test]
    fn test_residues_are_case_sensitive() {
        let profile = analyze(&set(&["a", "A", "A"]), TieStrategy::MarkAsAmbiguous).unwrap();
        assert_eq!(profile.consensus, "A");
        assert!((profile.scores[0] - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_padded_end_to_end() {
        let padded = pad(set(&["ATGC", "ATG", "ATGCG"])).unwrap();
        let profile = analyze(&padded, TieStrategy::MarkAsAmbiguous).unwrap();

        // Gaps are excluded from the denominator, so the last column is G alone
        assert_eq!(profile.consensus, "ATGCG");
        assert_eq!(profile.scores, vec![1.0, 1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_output_shape_and_range() {
        let aligned = set(&[
            "MKV-LAAG-",
            "MRVQLA-G-",
            "-KIQLSAGW",
            "MKVELAAC-",
            "LKV-IAAG-",
        ]);
        let profile = analyze(&aligned, TieStrategy::FirstWinner).unwrap();
        assert_eq!(profile.width(), 9);
        assert_eq!(profile.consensus.chars().count(), 9);
        assert!(profile.scores.iter().all(|&s| (0.0..=1.0).contains(&s)));
    }

    #[test]
    fn test_wide_alignment_keeps_column_order() {
        let alphabet = b"ACDEFGHIKLMNPQRSTVWY";
        let row: Vec<u8> = (0..500).map(|i| alphabet[i % alphabet.len()]).collect();
        let aligned = SequenceSet::new(vec![
            Sequence::new("seq1", row.clone()),
            Sequence::new("seq2", row.clone()),
        ]);
        let profile = analyze(&aligned, TieStrategy::MarkAsAmbiguous).unwrap();
        assert_eq!(profile.consensus.as_bytes(), row.as_slice());
        assert!(profile.scores.iter().all(|&s| s == 1.0));
    }

    #[test]
    fn test_misaligned_input() {
        let err = analyze(&set(&["ATGC", "ATG"]), TieStrategy::FirstWinner).unwrap_err();
        match err {
            ConservationError::MisalignedInput(detail) => {
                assert!(detail.contains("seq2"));
                assert!(detail.contains("expected 4"));
            }
            other => panic!("Expected MisalignedInput, got {:?}", other),
        }

        let empty = analyze(&SequenceSet::default(), TieStrategy::FirstWinner);
        assert!(matches!(empty, Err(ConservationError::MisalignedInput(_))));
    }

    #[test]
    fn test_zero_width_alignment() {
        let profile = analyze(&set(&["", ""]), TieStrategy::MarkAsAmbiguous).unwrap();
        assert_eq!(profile.width(), 0);
        assert_eq!(profile.stats().mean_score, 0.0);
    }

    #[test]
    fn test_profile_stats() {
        let aligned = set(&["AAC-", "ACC-", "GGC-", "GTC-"]);
        let profile = analyze(&aligned, TieStrategy::MarkAsAmbiguous).unwrap();
        assert_eq!(profile.consensus, "XXC-");

        let stats = profile.stats();
        assert_eq!(stats.width, 4);
        assert_eq!(stats.gap_only_columns, 1);
        assert_eq!(stats.ambiguous_columns, 2);
        assert_eq!(stats.conserved_columns, 1);
        assert_eq!(stats.max_score, 1.0);
        assert_eq!(stats.min_score, 0.0);
        assert!((stats.mean_score - 0.4375).abs() < 1e-12);

        let columns: Vec<_> = profile.columns().collect();
        assert_eq!(columns[2], (2, 'C', 1.0));
    }
}
