// muscle.rs - MUSCLE v5 aligner

use super::traits::Aligner;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct MuscleAligner;

impl Aligner for MuscleAligner {
    fn name(&self) -> &'static str {
        "muscle"
    }

    fn description(&self) -> &'static str {
        "MUSCLE v5 (-align/-output)"
    }

    fn program(&self) -> &'static str {
        "muscle"
    }

    fn arguments(&self, input: &Path, output: &Path) -> Vec<String> {
        vec![
            "-align".to_string(),
            input.display().to_string(),
            "-output".to_string(),
            output.display().to_string(),
        ]
    }
}
