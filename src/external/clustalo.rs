// clustalo.rs - Clustal Omega aligner

use super::traits::Aligner;
use std::path::Path;

/// Clustal Omega writing FASTA output in input order
#[derive(Debug, Clone)]
pub struct ClustalOmegaAligner;

impl Aligner for ClustalOmegaAligner {
    fn name(&self) -> &'static str {
        "clustalo"
    }

    fn description(&self) -> &'static str {
        "Clustal Omega (FASTA output, input order)"
    }

    fn program(&self) -> &'static str {
        "clustalo"
    }

    fn arguments(&self, input: &Path, output: &Path) -> Vec<String> {
        vec![
            "-i".to_string(),
            input.display().to_string(),
            "-o".to_string(),
            output.display().to_string(),
            "--outfmt=fasta".to_string(),
            "--output-order=input-order".to_string(),
            "--force".to_string(),
        ]
    }
}
