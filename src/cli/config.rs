// config.rs - Configuration file support

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    // Input/Output
    pub input: Option<String>,
    pub output: Option<String>,
    pub format: Option<String>,
    pub aligned_output: Option<String>,

    // Alignment
    pub alignment: Option<String>,
    pub aligner_path: Option<String>,
    pub work_dir: Option<String>,

    // Consensus
    pub tie_strategy: Option<String>,

    // Sequence filtering
    pub include_ids: Option<String>,
    pub exclude_ids: Option<String>,

    // Performance
    pub threads: Option<usize>,

    // Flags
    pub dry_run: Option<bool>,
}

impl Config {
    /// Create a new empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file '{}': {}", path.display(), e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| format!("Failed to parse config file '{}': {}", path.display(), e))?;

        println!("📄 Loaded configuration from: {}", path.display());
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), String> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        fs::write(path, content)
            .map_err(|e| format!("Failed to write config file '{}': {}", path.display(), e))?;

        println!("📄 Saved configuration to: {}", path.display());
        Ok(())
    }

    /// Generate a sample configuration file with comments
    pub fn generate_sample() -> String {
        r#"# seqcons.toml - Configuration file for seqcons
# Command line arguments will override these settings

# =============================================================================
# INPUT/OUTPUT
# =============================================================================

# Input FASTA file
input = "/path/to/sequences.fasta"

# Output profile file (omit to print a summary only)
output = "conservation.tsv"

# Output format: tsv, csv, json
format = "tsv"

# Save the aligned (or padded) sequences as FASTA
# aligned_output = "aligned.fasta"

# =============================================================================
# ALIGNMENT
# =============================================================================

# pad      - right-pad with '-' to the longest sequence (approximation only)
# none     - input is already aligned
# mafft, clustalo, muscle - run an external aligner
alignment = "pad"

# Executable of the external aligner (default: its name on PATH)
# aligner_path = "/usr/local/bin/mafft"

# Directory for temporary files of external tools
# work_dir = "/tmp"

# =============================================================================
# CONSENSUS
# =============================================================================

# Tie strategy: mark-as-x, first-winner
tie_strategy = "mark-as-x"

# =============================================================================
# SEQUENCE FILTERING
# =============================================================================

# Include only sequences whose id matches regex pattern
# include_ids = "^human_.*"

# Exclude sequences whose id matches regex pattern
# exclude_ids = "partial"

# =============================================================================
# PERFORMANCE
# =============================================================================

# Number of threads (omit for auto-detection)
# threads = 8

# =============================================================================
# FLAGS
# =============================================================================

# Validate inputs without computation (dry run)
dry_run = false
"#
        .to_string()
    }
}
