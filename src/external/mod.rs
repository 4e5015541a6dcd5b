// mod.rs - External tool collaborators (aligners and MEME)

pub mod clustalo;
pub mod mafft;
pub mod meme;
pub mod muscle;
pub mod registry;
pub mod runner;
pub mod traits;

// Re-export main types for convenience
pub use clustalo::ClustalOmegaAligner;
pub use mafft::MafftAligner;
pub use meme::{run_meme, MemeConfig};
pub use muscle::MuscleAligner;
pub use registry::AlignerRegistry;
pub use runner::{run_aligner, run_tool, AlignerRun};
pub use traits::Aligner;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_registry() {
        let registry = AlignerRegistry::new();

        assert!(registry.has_aligner("mafft"));
        assert!(registry.has_aligner("clustalo"));
        assert!(registry.has_aligner("muscle"));
        assert!(!registry.has_aligner("pad"));

        assert_eq!(registry.get_aligner_names(), vec!["clustalo", "mafft", "muscle"]);
        assert_eq!(registry.list_aligners().len(), 3);
    }

    #[test]
    fn test_aligner_arguments() {
        let registry = AlignerRegistry::new();
        let input = Path::new("in.fasta");
        let output = Path::new("out.fasta");

        let mafft = registry.get_aligner("mafft").unwrap();
        assert!(mafft.writes_stdout());
        let args = mafft.arguments(input, output);
        assert!(args.contains(&"--preservecase".to_string()));
        assert_eq!(args.last().unwrap(), "in.fasta");

        let clustalo = registry.get_aligner("clustalo").unwrap();
        assert!(!clustalo.writes_stdout());
        let args = clustalo.arguments(input, output);
        assert!(args.contains(&"--outfmt=fasta".to_string()));
        assert!(args.contains(&"out.fasta".to_string()));

        let muscle = registry.get_aligner("muscle").unwrap();
        assert_eq!(
            muscle.arguments(input, output),
            vec!["-align", "in.fasta", "-output", "out.fasta"]
        );
    }
}
