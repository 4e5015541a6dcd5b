// sequence.rs - Sequence and SequenceSet data structures

use regex::Regex;

/// Gap character used for padding and in aligned FASTA
pub const GAP: u8 = b'-';

/// Consensus marker for columns with a tied plurality
pub const AMBIGUOUS: u8 = b'X';

/// A single named sequence of residues
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    id: String,
    residues: Vec<u8>,
}

impl Sequence {
    /// Create a sequence from residues that are already clean
    pub fn new(id: impl Into<String>, residues: impl Into<Vec<u8>>) -> Self {
        Self {
            id: id.into(),
            residues: residues.into(),
        }
    }

    /// Create a sequence from raw residue text, dropping whitespace and '.'
    pub fn from_raw(id: impl Into<String>, raw: &[u8]) -> Self {
        let residues: Vec<u8> = raw
            .iter()
            .copied()
            .filter(|b| !b.is_ascii_whitespace() && *b != b'.')
            .collect();
        Self::new(id, residues)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn residues(&self) -> &[u8] {
        &self.residues
    }

    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    /// Residues rendered as text
    pub fn as_string(&self) -> String {
        String::from_utf8_lossy(&self.residues).into_owned()
    }

    /// Copy of this sequence with gaps appended up to `width`.
    /// Sequences already at least `width` long are returned unchanged.
    pub fn padded_to(&self, width: usize) -> Sequence {
        let mut residues = Vec::with_capacity(width.max(self.residues.len()));
        residues.extend_from_slice(&self.residues);
        residues.resize(width.max(self.residues.len()), GAP);
        Sequence::new(self.id.clone(), residues)
    }
}

/// Ordered collection of sequences; order decides tie-break priority
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequenceSet {
    sequences: Vec<Sequence>,
}

impl SequenceSet {
    pub fn new(sequences: Vec<Sequence>) -> Self {
        Self { sequences }
    }

    pub fn push(&mut self, sequence: Sequence) {
        self.sequences.push(sequence);
    }

    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sequence> {
        self.sequences.iter()
    }

    pub fn sequences(&self) -> &[Sequence] {
        &self.sequences
    }

    pub fn into_inner(self) -> Vec<Sequence> {
        self.sequences
    }

    /// Identifiers in set order
    pub fn ids(&self) -> Vec<&str> {
        self.sequences.iter().map(|s| s.id()).collect()
    }

    /// Length of the longest sequence, `None` for an empty set
    pub fn max_len(&self) -> Option<usize> {
        self.sequences.iter().map(|s| s.len()).max()
    }

    /// Alignment width if the set is non-empty and all lengths agree
    pub fn width(&self) -> Option<usize> {
        let first = self.sequences.first()?.len();
        self.sequences
            .iter()
            .all(|s| s.len() == first)
            .then_some(first)
    }

    pub fn is_aligned(&self) -> bool {
        self.width().is_some()
    }

    /// Residues at `position` across all sequences, in set order.
    /// Sequences shorter than `position` contribute nothing.
    pub fn column(&self, position: usize) -> impl Iterator<Item = u8> + '_ {
        self.sequences
            .iter()
            .filter_map(move |s| s.residues.get(position).copied())
    }

    /// Keep sequences whose id matches `include` (if given) and does not match `exclude`
    pub fn filter_ids(self, include: Option<&Regex>, exclude: Option<&Regex>) -> SequenceSet {
        let sequences = self
            .sequences
            .into_iter()
            .filter(|s| include.map(|re| re.is_match(s.id())).unwrap_or(true))
            .filter(|s| !exclude.map(|re| re.is_match(s.id())).unwrap_or(false))
            .collect();
        SequenceSet { sequences }
    }
}

impl FromIterator<Sequence> for SequenceSet {
    fn from_iter<I: IntoIterator<Item = Sequence>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for SequenceSet {
    type Item = Sequence;
    type IntoIter = std::vec::IntoIter<Sequence>;

    fn into_iter(self) -> Self::IntoIter {
        self.sequences.into_iter()
    }
}

impl<'a> IntoIterator for &'a SequenceSet {
    type Item = &'a Sequence;
    type IntoIter = std::slice::Iter<'a, Sequence>;

    fn into_iter(self) -> Self::IntoIter {
        self.sequences.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(seqs: &[(&str, &str)]) -> SequenceSet {
        seqs.iter()
            .map(|(id, s)| Sequence::new(*id, s.as_bytes()))
            .collect()
    }

    #[test]
    fn test_from_raw_strips_whitespace_and_dots() {
        let seq = Sequence::from_raw("seq1", b" AT.G C\t");
        assert_eq!(seq.residues(), b"ATGC");
        assert_eq!(seq.id(), "seq1");
    }

    #[test]
    fn test_padded_to() {
        let seq = Sequence::new("s", "ATG");
        assert_eq!(seq.padded_to(5).as_string(), "ATG--");
        assert_eq!(seq.padded_to(3), seq);
        assert_eq!(seq.padded_to(1), seq);
    }

    #[test]
    fn test_width_and_alignment() {
        let unaligned = set(&[("a", "ATGC"), ("b", "ATG")]);
        assert_eq!(unaligned.width(), None);
        assert_eq!(unaligned.max_len(), Some(4));
        assert!(!unaligned.is_aligned());

        let aligned = set(&[("a", "AT-C"), ("b", "ATG-")]);
        assert_eq!(aligned.width(), Some(4));

        assert_eq!(SequenceSet::default().width(), None);
        assert_eq!(SequenceSet::default().max_len(), None);
    }

    #[test]
    fn test_column_view() {
        let aligned = set(&[("a", "ATGC"), ("b", "A-GC"), ("c", "ACGT")]);
        assert_eq!(aligned.column(1).collect::<Vec<_>>(), b"T-C".to_vec());
        assert_eq!(aligned.column(3).collect::<Vec<_>>(), b"CCT".to_vec());
    }

    #[test]
    fn test_filter_ids() {
        let seqs = set(&[("human_1", "A"), ("mouse_1", "C"), ("human_2", "G")]);
        let include = Regex::new("^human").unwrap();
        let exclude = Regex::new("_2$").unwrap();

        let filtered = seqs.clone().filter_ids(Some(&include), None);
        assert_eq!(filtered.ids(), vec!["human_1", "human_2"]);

        let filtered = seqs.clone().filter_ids(Some(&include), Some(&exclude));
        assert_eq!(filtered.ids(), vec!["human_1"]);

        let untouched = seqs.clone().filter_ids(None, None);
        assert_eq!(untouched, seqs);
    }
}
