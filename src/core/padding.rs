// padding.rs - Naive right-padding alignment fallback

use crate::core::error::ConservationError;
use crate::data::SequenceSet;

/// Right-pad every sequence with gaps to the length of the longest one.
///
/// This is not a real alignment: no internal gaps are inserted and no homology
/// is detected. It is only a reasonable placeholder for sequences that are
/// already nearly co-linear from their first residue. Residues are never removed,
/// reordered or substituted, and input order and ids are preserved.
pub fn pad(sequences: SequenceSet) -> Result<SequenceSet, ConservationError> {
    let max_len = sequences.max_len().ok_or(ConservationError::EmptyInput)?;

    if sequences.is_aligned() {
        return Ok(sequences);
    }

    Ok(sequences
        .iter()
        .map(|sequence| sequence.padded_to(max_len))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Sequence;

    fn set(seqs: &[&str]) -> SequenceSet {
        seqs.iter()
            .enumerate()
            .map(|(i, s)| Sequence::new(format!("seq{}", i + 1), s.as_bytes()))
            .collect()
    }

    #[test]
    fn test_pad_to_longest() {
        let padded = pad(set(&["ATGC", "ATG", "ATGCG"])).unwrap();
        let rows: Vec<String> = padded.iter().map(|s| s.as_string()).collect();
        assert_eq!(rows, vec!["ATGC-", "ATG--", "ATGCG"]);
        assert_eq!(padded.ids(), vec!["seq1", "seq2", "seq3"]);
        assert_eq!(padded.width(), Some(5));
    }

    #[test]
    fn test_pad_preserves_prefix() {
        let original = set(&["MKV", "", "MKVLAAG", "M-K"]);
        let padded = pad(original.clone()).unwrap();
        for (before, after) in original.iter().zip(padded.iter()) {
            assert_eq!(after.len(), 7);
            assert_eq!(&after.residues()[..before.len()], before.residues());
            assert!(after.residues()[before.len()..].iter().all(|&b| b == b'-'));
        }
    }

    #[test]
    fn test_pad_equal_lengths_is_noop() {
        let original = set(&["ATGC", "A-GC", "acgt"]);
        assert_eq!(pad(original.clone()).unwrap(), original);
    }

    #[test]
    fn test_pad_empty_input() {
        assert_eq!(pad(SequenceSet::default()), Err(ConservationError::EmptyInput));
    }
}
