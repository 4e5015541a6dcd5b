// mod.rs - Output formatters module

use crate::core::{ConservationProfile, ProfileStats, TieStrategy};
use crate::data::{write_fasta, SequenceSet};
use serde::Serialize;
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Output formats accepted by `write_profile`
pub const OUTPUT_FORMATS: [&str; 3] = ["tsv", "csv", "json"];

/// Ensure parent directory exists before creating file
fn ensure_parent_dir(file_path: &str) -> Result<(), String> {
    if let Some(parent) = Path::new(file_path).parent().filter(|p| !p.as_os_str().is_empty()) {
        create_dir_all(parent)
            .map_err(|e| format!("Failed to create parent directory '{}': {}", parent.display(), e))?;
    }
    Ok(())
}

fn create_writer(file_path: &str) -> Result<BufWriter<File>, String> {
    ensure_parent_dir(file_path)?;
    let file = File::create(file_path)
        .map_err(|e| format!("Failed to create output file '{}': {}", file_path, e))?;
    Ok(BufWriter::new(file))
}

fn generated_timestamp() -> String {
    chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Full profile report, serialized as JSON
#[derive(Debug, Serialize)]
pub struct ProfileReport<'a> {
    pub version: &'static str,
    pub generated: String,
    pub command: &'a str,
    pub tie_strategy: TieStrategy,
    pub sequences: Vec<&'a str>,
    pub width: usize,
    pub consensus: &'a str,
    pub scores: &'a [f64],
    pub stats: ProfileStats,
}

impl<'a> ProfileReport<'a> {
    pub fn new(
        aligned: &'a SequenceSet,
        profile: &'a ConservationProfile,
        tie: TieStrategy,
        command_line: &'a str,
    ) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            generated: generated_timestamp(),
            command: command_line,
            tie_strategy: tie,
            sequences: aligned.ids(),
            width: profile.width(),
            consensus: &profile.consensus,
            scores: &profile.scores,
            stats: profile.stats(),
        }
    }
}

/// Write the profile as TSV with a commented header
pub fn write_tsv(
    file_path: &str,
    profile: &ConservationProfile,
    tie: TieStrategy,
    command_line: &str,
) -> Result<(), String> {
    let mut writer = create_writer(file_path)?;

    // Write command header
    writeln!(writer, "# Command: {}", command_line).map_err(|e| format!("Write error: {}", e))?;
    writeln!(writer, "# Generated: {}", generated_timestamp()).map_err(|e| format!("Write error: {}", e))?;
    writeln!(writer, "# seqcons v{}", env!("CARGO_PKG_VERSION")).map_err(|e| format!("Write error: {}", e))?;
    writeln!(writer, "# Tie strategy: {}", tie).map_err(|e| format!("Write error: {}", e))?;

    writeln!(writer, "position\tconsensus\tscore").map_err(|e| format!("Write error: {}", e))?;
    for (position, consensus, score) in profile.columns() {
        writeln!(writer, "{}\t{}\t{:.4}", position + 1, consensus, score)
            .map_err(|e| format!("Write error: {}", e))?;
    }

    writer.flush().map_err(|e| format!("Flush error: {}", e))?;
    println!("✅ Conservation profile written to: {}", file_path);
    Ok(())
}

/// Write the profile as CSV
pub fn write_csv(file_path: &str, profile: &ConservationProfile) -> Result<(), String> {
    let writer = create_writer(file_path)?;
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["position", "consensus", "score"])
        .map_err(|e| format!("Write error: {}", e))?;
    for (position, consensus, score) in profile.columns() {
        csv_writer
            .write_record([
                (position + 1).to_string(),
                consensus.to_string(),
                format!("{:.4}", score),
            ])
            .map_err(|e| format!("Write error: {}", e))?;
    }

    csv_writer.flush().map_err(|e| format!("Flush error: {}", e))?;
    println!("✅ Conservation profile written to: {} (CSV format)", file_path);
    Ok(())
}

/// Write the full report as pretty-printed JSON
pub fn write_json(
    file_path: &str,
    aligned: &SequenceSet,
    profile: &ConservationProfile,
    tie: TieStrategy,
    command_line: &str,
) -> Result<(), String> {
    let mut writer = create_writer(file_path)?;
    let report = ProfileReport::new(aligned, profile, tie, command_line);

    serde_json::to_writer_pretty(&mut writer, &report)
        .map_err(|e| format!("Failed to serialize report: {}", e))?;
    writeln!(writer).map_err(|e| format!("Write error: {}", e))?;

    writer.flush().map_err(|e| format!("Flush error: {}", e))?;
    println!("✅ Conservation profile written to: {} (JSON format)", file_path);
    Ok(())
}

/// Write the profile in the specified format
pub fn write_profile(
    file_path: &str,
    format: &str,
    aligned: &SequenceSet,
    profile: &ConservationProfile,
    tie: TieStrategy,
    command_line: &str,
) -> Result<(), String> {
    match format.to_lowercase().as_str() {
        "tsv" => write_tsv(file_path, profile, tie, command_line),
        "csv" => write_csv(file_path, profile),
        "json" => write_json(file_path, aligned, profile, tie, command_line),
        _ => Err(format!("Unsupported output format: {}. Use: {}", format, OUTPUT_FORMATS.join(", "))),
    }
}

/// Save aligned sequences as FASTA
pub fn write_aligned_fasta(file_path: &str, aligned: &SequenceSet) -> Result<(), String> {
    write_fasta(Path::new(file_path), aligned)?;
    println!("💾 Aligned sequences written to: {}", file_path);
    Ok(())
}

/// Print the profile summary to the console
pub fn print_summary(profile: &ConservationProfile) {
    let stats = profile.stats();
    println!("\n📊 Conservation profile");
    println!("   Width:              {}", stats.width);
    println!("   Consensus:          {}", profile.consensus);
    println!("   Mean score:         {:.4}", stats.mean_score);
    println!("   Score range:        {:.4} - {:.4}", stats.min_score, stats.max_score);
    println!("   Fully conserved:    {}", stats.conserved_columns);
    println!("   Ambiguous (X):      {}", stats.ambiguous_columns);
    println!("   Gap-only columns:   {}", stats.gap_only_columns);
}
