// motif_finder.rs - Standalone utility for de novo motif discovery with MEME

use std::path::{Path, PathBuf};

use clap::{value_parser, Arg, Command};

use seqcons::data::{read_fasta, write_fasta};
use seqcons::external::meme::MEME_MODELS;
use seqcons::external::{run_meme, MemeConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let defaults = MemeConfig::default();

    let matches = Command::new("Motif Finder")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Finds candidate transcription factor binding motifs with MEME")
        .arg(Arg::new("input")
            .long("input")
            .value_name("FILE")
            .help("Path to input FASTA file (.fasta, .fa, .fna)")
            .required(true))
        .arg(Arg::new("output-dir")
            .long("output-dir")
            .value_name("DIR")
            .help("MEME output directory (default: meme_output)")
            .default_value("meme_output"))
        .arg(Arg::new("min-width")
            .long("min-width")
            .value_name("N")
            .help("Minimum motif width (default: 6)")
            .value_parser(value_parser!(usize))
            .default_value("6"))
        .arg(Arg::new("max-width")
            .long("max-width")
            .value_name("N")
            .help("Maximum motif width (default: 20)")
            .value_parser(value_parser!(usize))
            .default_value("20"))
        .arg(Arg::new("model")
            .long("model")
            .value_name("MODEL")
            .help("Site distribution model: oops, zoops, anr (default: zoops)")
            .value_parser(MEME_MODELS)
            .default_value("zoops"))
        .arg(Arg::new("nmotifs")
            .long("nmotifs")
            .value_name("N")
            .help("Number of motifs to find (default: 3)")
            .value_parser(value_parser!(usize))
            .default_value("3"))
        .arg(Arg::new("meme-path")
            .long("meme-path")
            .value_name("FILE")
            .help("Path to the meme executable (default: meme on PATH)"))
        .get_matches();

    let input_path = matches
        .get_one::<String>("input")
        .ok_or("--input is required")?;
    let config = MemeConfig {
        min_width: matches.get_one::<usize>("min-width").copied().unwrap_or(defaults.min_width),
        max_width: matches.get_one::<usize>("max-width").copied().unwrap_or(defaults.max_width),
        model: matches.get_one::<String>("model").cloned().unwrap_or(defaults.model),
        n_motifs: matches.get_one::<usize>("nmotifs").copied().unwrap_or(defaults.n_motifs),
        output_dir: matches
            .get_one::<String>("output-dir")
            .map(PathBuf::from)
            .unwrap_or(defaults.output_dir),
    };
    let meme_path = matches.get_one::<String>("meme-path").map(String::as_str);

    config.validate()?;

    println!("🔬 seqcons Motif Finder");
    println!("================================");
    println!("📂 Input: {}", input_path);
    println!("📏 Motif widths: {}-{}", config.min_width, config.max_width);
    println!("📁 Output directory: {}", config.output_dir.display());
    println!();

    let sequences = read_fasta(Path::new(input_path))?;
    println!("✅ Loaded {} sequences", sequences.len());

    // MEME reads the cleaned copy so stray dots and spaces never reach it
    let cleaned = tempfile::Builder::new()
        .prefix("seqcons_meme_")
        .suffix(".fasta")
        .tempfile()?;
    write_fasta(cleaned.path(), &sequences)?;

    let report = run_meme(cleaned.path(), &config, meme_path)?;

    println!();
    println!("🎉 Motif discovery complete!");
    println!("📄 MEME report: {}", report.display());

    Ok(())
}
