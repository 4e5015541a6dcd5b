// meme.rs - MEME motif discovery runner

use super::runner::run_tool;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Site distribution models accepted by MEME's `-mod` option
pub const MEME_MODELS: [&str; 3] = ["oops", "zoops", "anr"];

/// Name of the HTML report MEME writes into its output directory
pub const MEME_REPORT: &str = "meme.html";

/// Parameters for a MEME run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemeConfig {
    pub min_width: usize,
    pub max_width: usize,
    pub model: String,
    pub n_motifs: usize,
    pub output_dir: PathBuf,
}

impl Default for MemeConfig {
    fn default() -> Self {
        Self {
            min_width: 6,
            max_width: 20,
            model: "zoops".to_string(),
            n_motifs: 3,
            output_dir: PathBuf::from("meme_output"),
        }
    }
}

impl MemeConfig {
    /// Check width bounds, motif count and model
    pub fn validate(&self) -> Result<(), String> {
        if self.min_width == 0 || self.max_width == 0 {
            return Err("Motif widths must be positive".to_string());
        }
        if self.min_width > self.max_width {
            return Err(format!(
                "Minimum motif width ({}) cannot exceed maximum width ({})",
                self.min_width, self.max_width
            ));
        }
        if self.n_motifs == 0 {
            return Err("Number of motifs must be at least 1".to_string());
        }
        if !MEME_MODELS.contains(&self.model.as_str()) {
            return Err(format!(
                "Unknown MEME model: {}. Use: {}",
                self.model,
                MEME_MODELS.join(", ")
            ));
        }
        Ok(())
    }

    /// MEME command line for `input`
    pub fn arguments(&self, input: &Path) -> Vec<String> {
        vec![
            input.display().to_string(),
            "-oc".to_string(),
            self.output_dir.display().to_string(),
            "-minw".to_string(),
            self.min_width.to_string(),
            "-maxw".to_string(),
            self.max_width.to_string(),
            "-mod".to_string(),
            self.model.clone(),
            "-nmotifs".to_string(),
            self.n_motifs.to_string(),
        ]
    }

    pub fn report_path(&self) -> PathBuf {
        self.output_dir.join(MEME_REPORT)
    }
}

/// Run MEME on a FASTA file and return the path of its HTML report
pub fn run_meme(input: &Path, config: &MemeConfig, program: Option<&str>) -> Result<PathBuf, String> {
    config.validate()?;
    if !input.is_file() {
        return Err(format!("Input FASTA not found: {}", input.display()));
    }

    let program = program.unwrap_or("meme");
    println!(
        "🔍 Running MEME: widths {}-{}, model {}, {} motifs",
        config.min_width, config.max_width, config.model, config.n_motifs
    );

    run_tool(program, &config.arguments(input), "Discovering motifs...")
        .map_err(|e| format!("MEME analysis failed: {}", e))?;

    let report = config.report_path();
    if !report.is_file() {
        return Err(format!(
            "MEME analysis failed: report not found at {}",
            report.display()
        ));
    }
    Ok(report)
}
