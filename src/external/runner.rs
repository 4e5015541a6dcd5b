// runner.rs - Running external tools as child processes

use super::traits::Aligner;
use crate::data::{parse_fasta_str, read_fasta, write_fasta, SequenceSet};
use crate::data::Sequence;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::{HashMap, VecDeque};
use std::path::PathBuf;
use std::process::{Command, Output};
use std::time::Duration;

/// Settings for a single external aligner invocation
#[derive(Debug, Clone)]
pub struct AlignerRun {
    /// Executable overriding the aligner's default program
    pub program: Option<String>,
    /// Directory for the temporary input and output files
    pub work_dir: PathBuf,
}

impl Default for AlignerRun {
    fn default() -> Self {
        Self {
            program: None,
            work_dir: std::env::temp_dir(),
        }
    }
}

/// Run `program` with `args` behind a spinner and fail on non-zero exit
pub fn run_tool(program: &str, args: &[String], message: &str) -> Result<Output, String> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(120));

    let result = Command::new(program).args(args).output();
    spinner.finish_and_clear();

    let output = result.map_err(|e| {
        format!("Failed to execute '{}': {}. Is it installed and on PATH?", program, e)
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(format!(
            "'{}' exited with {}: {}",
            program,
            output.status,
            stderr.trim()
        ));
    }
    Ok(output)
}

/// Align `sequences` with an external tool.
///
/// Failures are returned as errors; no padding fallback is attempted here.
/// The result is in input record order, whatever order the tool writes.
pub fn run_aligner(
    aligner: &dyn Aligner,
    sequences: &SequenceSet,
    run: &AlignerRun,
) -> Result<SequenceSet, String> {
    if sequences.is_empty() {
        return Err("No sequences to align".to_string());
    }

    std::fs::create_dir_all(&run.work_dir).map_err(|e| {
        format!("Failed to create work directory '{}': {}", run.work_dir.display(), e)
    })?;

    // Removed with everything in it when dropped
    let scratch = tempfile::Builder::new()
        .prefix(&format!("seqcons_{}_", aligner.name()))
        .tempdir_in(&run.work_dir)
        .map_err(|e| {
            format!("Failed to create scratch directory in '{}': {}", run.work_dir.display(), e)
        })?;
    let input = scratch.path().join("input.fasta");
    let output = scratch.path().join("aligned.fasta");

    write_fasta(&input, sequences)?;

    let program = run.program.as_deref().unwrap_or(aligner.program());
    println!("🧬 Aligning {} sequences with {} ({})", sequences.len(), aligner.name(), program);

    let result = run_tool(
        program,
        &aligner.arguments(&input, &output),
        &format!("Running {}...", aligner.name()),
    )
    .map_err(|e| format!("Alignment failed: {}", e))?;

    let aligned = if aligner.writes_stdout() {
        parse_fasta_str(&String::from_utf8_lossy(&result.stdout))
    } else {
        read_fasta(&output)
    }
    .map_err(|e| format!("Alignment failed: unreadable {} output: {}", aligner.name(), e))?;

    let aligned = validate_alignment(sequences, aligned)?;
    println!("✅ Alignment complete: width {}", aligned.width().unwrap_or(0));
    Ok(aligned)
}

/// Check the aligner output against its input and put records back in input order.
///
/// Every input id must come back exactly once (repeated ids as often as they were
/// given) and no other id may appear.
fn validate_alignment(input: &SequenceSet, aligned: SequenceSet) -> Result<SequenceSet, String> {
    if aligned.len() != input.len() {
        return Err(format!(
            "Alignment failed: expected {} records, aligner returned {}",
            input.len(),
            aligned.len()
        ));
    }
    if !aligned.is_aligned() {
        return Err("Alignment failed: aligner returned sequences of unequal length".to_string());
    }

    let mut by_id: HashMap<String, VecDeque<Sequence>> = HashMap::new();
    for sequence in aligned {
        by_id
            .entry(sequence.id().to_string())
            .or_default()
            .push_back(sequence);
    }

    let mut ordered = SequenceSet::default();
    for id in input.ids() {
        let sequence = by_id
            .get_mut(id)
            .and_then(VecDeque::pop_front)
            .ok_or_else(|| format!("Alignment failed: record '{}' missing from aligner output", id))?;
        ordered.push(sequence);
    }

    // Equal counts mean nothing is left over once every input id has been matched
    Ok(ordered)
}
