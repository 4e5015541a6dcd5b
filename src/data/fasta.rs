// fasta.rs - FASTA parsing and serialization for sequence sets

use crate::data::sequence::{Sequence, SequenceSet};
use bio::io::fasta;
use std::fs::{create_dir_all, File};
use std::path::Path;

/// Trim every line and drop blank ones so indented FASTA parses cleanly
fn normalize_lines(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        normalized.push_str(line);
        normalized.push('\n');
    }
    normalized
}

/// Parse FASTA text into a sequence set, preserving record order.
///
/// Residues must be ASCII: each byte is one residue and one consensus character.
pub fn parse_fasta_str(text: &str) -> Result<SequenceSet, String> {
    let normalized = normalize_lines(text);
    let reader = fasta::Reader::new(normalized.as_bytes());

    let mut set = SequenceSet::default();
    for (index, record_result) in reader.records().enumerate() {
        let record = record_result
            .map_err(|e| format!("Invalid FASTA record #{}: {}", index + 1, e))?;
        if !record.seq().is_ascii() {
            return Err(format!(
                "Invalid FASTA record #{} ({}): residues must be ASCII",
                index + 1,
                record.id()
            ));
        }
        set.push(Sequence::from_raw(record.id(), record.seq()));
    }

    if set.is_empty() {
        return Err("No FASTA records found".to_string());
    }
    Ok(set)
}

/// Read a FASTA file into a sequence set
pub fn read_fasta(path: &Path) -> Result<SequenceSet, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read FASTA file {}: {}", path.display(), e))?;
    parse_fasta_str(&content).map_err(|e| format!("{} ({})", e, path.display()))
}

fn write_records<W: std::io::Write>(writer: W, set: &SequenceSet) -> std::io::Result<()> {
    let mut writer = fasta::Writer::new(writer);
    for sequence in set {
        writer.write(sequence.id(), None, sequence.residues())?;
    }
    writer.flush()
}

/// Render a sequence set as FASTA text, one residue line per record
pub fn fasta_string(set: &SequenceSet) -> Result<String, String> {
    let mut buffer = Vec::new();
    write_records(&mut buffer, set).map_err(|e| format!("Failed to render FASTA: {}", e))?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Write a sequence set to a FASTA file, creating parent directories
pub fn write_fasta(path: &Path, set: &SequenceSet) -> Result<(), String> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        create_dir_all(parent).map_err(|e| {
            format!("Failed to create parent directory '{}': {}", parent.display(), e)
        })?;
    }
    let file = File::create(path)
        .map_err(|e| format!("Failed to create FASTA file '{}': {}", path.display(), e))?;
    write_records(file, set)
        .map_err(|e| format!("Failed to write FASTA file '{}': {}", path.display(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_wrapped_records() {
        let set = parse_fasta_str(">seq1 first record\nATG\nCA\n>seq2\nGG\n").unwrap();
        assert_eq!(set.ids(), vec!["seq1", "seq2"]);
        assert_eq!(set.sequences()[0].residues(), b"ATGCA");
        assert_eq!(set.sequences()[1].residues(), b"GG");
    }

    #[test]
    fn test_parse_indented_text() {
        let text = ">seq1\n    ATGC\n    >seq2\n    ATG\n    >seq3\n    ATGCG";
        let set = parse_fasta_str(text).unwrap();
        assert_eq!(set.ids(), vec!["seq1", "seq2", "seq3"]);
        assert_eq!(set.sequences()[1].as_string(), "ATG");
        assert_eq!(set.sequences()[2].as_string(), "ATGCG");
    }

    #[test]
    fn test_parse_strips_dots_and_spaces() {
        let set = parse_fasta_str("\n\n>s\nAT.G C\n").unwrap();
        assert_eq!(set.sequences()[0].as_string(), "ATGC");
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_fasta_str("").is_err());
        assert!(parse_fasta_str("   \n\n").is_err());
        assert!(parse_fasta_str("ATGC\n>seq\nATGC").is_err());
    }

    #[test]
    fn test_parse_rejects_non_ascii_residues() {
        let err = parse_fasta_str(">seq1\nATGC\n>seq2\nATGÇ\n").unwrap_err();
        assert!(err.contains("#2"));
        assert!(err.contains("ASCII"));
    }

    #[test]
    fn test_fasta_string() {
        let set = SequenceSet::new(vec![
            Sequence::new("seq1", "ATGC-"),
            Sequence::new("seq2", "ATG--"),
        ]);
        assert_eq!(fasta_string(&set).unwrap(), ">seq1\nATGC-\n>seq2\nATG--\n");
    }

    #[test]
    fn test_write_and_read_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("aligned.fasta");
        let set = SequenceSet::new(vec![
            Sequence::new("seq1", "ATGC-"),
            Sequence::new("seq2", "ATG--"),
            Sequence::new("seq3", "ATGCG"),
        ]);

        write_fasta(&path, &set).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[1], "ATGC-");
        assert_eq!(lines[3], "ATG--");
        assert_eq!(lines[5], "ATGCG");

        assert_eq!(read_fasta(&path).unwrap(), set);
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_fasta(Path::new("/nonexistent/seqcons/input.fasta")).unwrap_err();
        assert!(err.contains("Failed to read FASTA file"));
    }
}
