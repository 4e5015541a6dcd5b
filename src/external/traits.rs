// traits.rs - Core trait for external multiple-sequence aligners

use std::fmt::Debug;
use std::path::Path;

/// An external alignment tool driven through its command line.
/// The tool is treated as a black box that turns FASTA into aligned FASTA.
pub trait Aligner: Send + Sync + Debug {
    /// Registry name of this aligner
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Default executable, looked up on PATH
    fn program(&self) -> &'static str;

    /// Command line arguments for aligning `input` into `output`
    fn arguments(&self, input: &Path, output: &Path) -> Vec<String>;

    /// Whether the aligned FASTA is written to stdout instead of `output`
    fn writes_stdout(&self) -> bool {
        false
    }
}
