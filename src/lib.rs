// lib.rs - seqcons library root

//! # seqcons - Per-column consensus and conservation profiles
//!
//! This library computes, for a set of aligned biological sequences, the consensus
//! residue and a conservation score of every alignment column. Sequences that are not
//! aligned can either be right-padded to a common length or handed to an external
//! aligner (MAFFT, Clustal Omega, MUSCLE).
//!
//! ## Features
//!
//! - **Consensus with tie policy**: ties reported as `X` or resolved to the first residue
//! - **Gap-aware scoring**: gaps never count towards the score denominator
//! - **Parallel columns**: columns are scored independently with rayon
//! - **External tools**: aligners and MEME motif discovery behind one runner
//! - **Multiple formats**: TSV, CSV and JSON profile reports
//!
//! ## Basic Usage
//!
//! ```rust
//! use seqcons::prelude::*;
//!
//! let sequences = parse_fasta_str(">seq1\nATGC\n>seq2\nATG\n>seq3\nATGCG\n")?;
//! let aligned = pad(sequences)?;
//! let profile = analyze(&aligned, TieStrategy::MarkAsAmbiguous)?;
//!
//! assert_eq!(profile.consensus, "ATGCG");
//! assert_eq!(profile.scores, vec![1.0; 5]);
//! # Ok::<(), String>(())
//! ```

// Re-export all main modules
pub mod cli;
pub mod core;
pub mod data;
pub mod external;
pub mod output;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::cli::{validate_args, AlignmentMode, Args, ValidationResult};
    pub use crate::core::{analyze, pad, ConservationError, ConservationProfile, TieStrategy};
    pub use crate::data::{parse_fasta_str, read_fasta, write_fasta, Sequence, SequenceSet};
    pub use crate::external::{run_aligner, run_meme, Aligner, AlignerRegistry, AlignerRun, MemeConfig};
    pub use crate::output::{print_summary, write_aligned_fasta, write_profile};
}

// Re-export main types at the root level for convenience
pub use core::{analyze, pad, ConservationError, ConservationProfile, ProfileStats, TieStrategy};
pub use data::{Sequence, SequenceSet};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library information
pub fn get_info() -> String {
    format!(
        "seqcons v{} - Per-column consensus and conservation profiler",
        VERSION
    )
}
