// main.rs - CLI entry point

use std::path::PathBuf;
use std::time::Instant;

use seqcons::cli::Config;
use seqcons::prelude::*;

fn main() {
    if let Err(e) = run_main() {
        eprintln!("❌ ERROR: {}", e);
        std::process::exit(1);
    }
}

fn run_main() -> Result<(), String> {
    let mut args: Args = argh::from_env();
    let command_line = std::env::args().collect::<Vec<String>>().join(" ");

    // Handle generate config first
    if args.generate_config {
        let sample_config = Config::generate_sample();
        println!("{}", sample_config);
        println!("\n💡 Save this content to a .toml file and use --config /path/to/config.toml");
        return Ok(());
    }

    // Load configuration file if specified
    if let Some(config_path) = args.config.clone() {
        args = args.with_config_file(&config_path)?;
    }

    let validation_result = validate_args(&args)?;

    println!("🚀 seqcons v{}", env!("CARGO_PKG_VERSION"));
    println!("🧭 Alignment: {}", validation_result.alignment_mode.description());
    println!(
        "⚖️  Tie strategy: {} ({})",
        validation_result.tie_strategy,
        validation_result.tie_strategy.description()
    );

    // Configure thread pool
    if let Some(n) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build_global()
            .map_err(|e| format!("Failed to configure thread pool: {}", e))?;
        println!("🧵 Threads: {}", n);
    } else {
        println!("🧵 Threads: {} (auto-detected)", rayon::current_num_threads());
    }

    let total_start = Instant::now();

    // Load sequences
    println!("🧬 Loading sequences from: {}", validation_result.input_path.display());
    let loaded = read_fasta(&validation_result.input_path)?;
    let loaded_count = loaded.len();
    let sequences = loaded.filter_ids(
        validation_result.include_regex.as_ref(),
        validation_result.exclude_regex.as_ref(),
    );
    if sequences.len() != loaded_count {
        println!(
            "📋 Id filters kept {} of {} sequences",
            sequences.len(),
            loaded_count
        );
    }
    if sequences.is_empty() {
        return Err("No sequences left after id filtering".to_string());
    }
    println!(
        "✅ Loaded {} sequences (lengths {}-{})",
        sequences.len(),
        sequences.iter().map(|s| s.len()).min().unwrap_or(0),
        sequences.max_len().unwrap_or(0)
    );

    if args.dry_run {
        println!("\n✅ Dry run: inputs are valid, skipping analysis");
        return Ok(());
    }

    // Build the alignment
    let aligned = match &validation_result.alignment_mode {
        AlignmentMode::Pad => {
            let padded = pad(sequences)?;
            println!(
                "📏 Padded to width {} (naive right-padding, not a true alignment)",
                padded.width().unwrap_or(0)
            );
            padded
        }
        AlignmentMode::Precomputed => sequences,
        AlignmentMode::External(name) => {
            let registry = AlignerRegistry::new();
            let aligner = registry
                .get_aligner(name)
                .ok_or_else(|| format!("Unknown aligner: {}", name))?;
            let run = AlignerRun {
                program: args.aligner_path.clone(),
                work_dir: args
                    .work_dir
                    .as_ref()
                    .map(PathBuf::from)
                    .unwrap_or_else(std::env::temp_dir),
            };
            run_aligner(aligner, &sequences, &run)?
        }
    };

    if let Some(aligned_path) = &args.aligned_output {
        write_aligned_fasta(aligned_path, &aligned)?;
    }

    // Compute the conservation profile
    println!("\n🔄 Computing conservation profile...");
    let analysis_start = Instant::now();
    let profile = analyze(&aligned, validation_result.tie_strategy)?;
    println!(
        "✅ Scored {} columns in {:.2}s",
        profile.width(),
        analysis_start.elapsed().as_secs_f64()
    );

    print_summary(&profile);

    if let Some(output_path) = &args.output {
        write_profile(
            output_path,
            &args.format,
            &aligned,
            &profile,
            validation_result.tie_strategy,
            &command_line,
        )?;
    }

    println!(
        "\n⏱️  Total execution time: {:.2}s",
        total_start.elapsed().as_secs_f64()
    );
    Ok(())
}
