// mafft.rs - MAFFT aligner

use super::traits::Aligner;
use std::path::Path;

/// MAFFT with automatic strategy selection; writes the alignment to stdout.
/// Residue case is preserved since consensus compares bytes exactly.
#[derive(Debug, Clone)]
pub struct MafftAligner;

impl Aligner for MafftAligner {
    fn name(&self) -> &'static str {
        "mafft"
    }

    fn description(&self) -> &'static str {
        "MAFFT (--auto strategy selection)"
    }

    fn program(&self) -> &'static str {
        "mafft"
    }

    fn arguments(&self, input: &Path, _output: &Path) -> Vec<String> {
        vec![
            "--auto".to_string(),
            "--quiet".to_string(),
            "--preservecase".to_string(),
            input.display().to_string(),
        ]
    }

    fn writes_stdout(&self) -> bool {
        true
    }
}
