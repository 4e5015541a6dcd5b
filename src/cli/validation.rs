// validation.rs - Input validation utilities

use crate::cli::args::Args;
use crate::core::TieStrategy;
use crate::external::AlignerRegistry;
use crate::output::OUTPUT_FORMATS;
use regex::Regex;
use std::path::PathBuf;
use std::str::FromStr;

/// How input sequences become an alignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlignmentMode {
    /// Right-pad to the longest sequence
    Pad,
    /// Input is already aligned
    Precomputed,
    /// Run the named external aligner
    External(String),
}

impl AlignmentMode {
    /// Resolve a mode name against the aligner registry
    pub fn parse(name: &str, registry: &AlignerRegistry) -> Result<Self, String> {
        match name.to_lowercase().as_str() {
            "pad" => Ok(AlignmentMode::Pad),
            "none" | "aligned" => Ok(AlignmentMode::Precomputed),
            other if registry.has_aligner(other) => Ok(AlignmentMode::External(other.to_string())),
            _ => Err(format!(
                "Invalid alignment mode: {}. Use: pad, none, {}",
                name,
                registry.get_aligner_names().join(", ")
            )),
        }
    }

    pub fn description(&self) -> String {
        match self {
            AlignmentMode::Pad => "right-padding to the longest sequence".to_string(),
            AlignmentMode::Precomputed => "input already aligned".to_string(),
            AlignmentMode::External(name) => format!("external aligner '{}'", name),
        }
    }
}

#[derive(Debug)]
pub struct ValidationResult {
    pub input_path: PathBuf,
    pub alignment_mode: AlignmentMode,
    pub tie_strategy: TieStrategy,
    pub include_regex: Option<Regex>,
    pub exclude_regex: Option<Regex>,
}

/// Validate all command line arguments
pub fn validate_args(args: &Args) -> Result<ValidationResult, String> {
    // Validate input
    let input = args.input.as_ref().ok_or("--input is required")?;
    let input_path = PathBuf::from(input);
    if !input_path.is_file() {
        return Err(format!("Input FASTA file not found: {}", input));
    }

    // Validate output format
    if !OUTPUT_FORMATS.contains(&args.format.to_lowercase().as_str()) {
        return Err(format!(
            "Invalid output format '{}'. Use: {}",
            args.format,
            OUTPUT_FORMATS.join(", ")
        ));
    }

    // Validate tie strategy
    let tie_strategy = TieStrategy::from_str(&args.tie_strategy).map_err(|e| e.to_string())?;

    // Validate alignment mode
    let registry = AlignerRegistry::new();
    let alignment_mode = AlignmentMode::parse(&args.alignment, &registry)?;
    if args.aligner_path.is_some() && !matches!(alignment_mode, AlignmentMode::External(_)) {
        return Err(format!(
            "--aligner-path is not compatible with --alignment {} (no external aligner is run)",
            args.alignment
        ));
    }

    if args.threads == Some(0) {
        return Err("Number of threads must be at least 1".to_string());
    }

    // Compile regex patterns
    let include_regex = if let Some(pattern) = &args.include_ids {
        Some(Regex::new(pattern).map_err(|e| format!("Invalid include_ids regex: {}", e))?)
    } else {
        None
    };

    let exclude_regex = if let Some(pattern) = &args.exclude_ids {
        Some(Regex::new(pattern).map_err(|e| format!("Invalid exclude_ids regex: {}", e))?)
    } else {
        None
    };

    Ok(ValidationResult {
        input_path,
        alignment_mode,
        tie_strategy,
        include_regex,
        exclude_regex,
    })
}
