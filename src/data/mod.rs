// mod.rs - Data structures module

pub mod fasta;
pub mod sequence;

// Re-export main types for convenience
pub use fasta::{fasta_string, parse_fasta_str, read_fasta, write_fasta};
pub use sequence::{Sequence, SequenceSet, AMBIGUOUS, GAP};
