// args.rs - Command line arguments definition

use argh::FromArgs;

/// Default value of `--alignment`
pub const DEFAULT_ALIGNMENT: &str = "pad";
/// Default value of `--format`
pub const DEFAULT_FORMAT: &str = "tsv";
/// Default value of `--tie-strategy`
pub const DEFAULT_TIE_STRATEGY: &str = "mark-as-x";

#[derive(FromArgs)]
/// seqcons - Per-column consensus and conservation profiles
pub struct Args {
    /// input FASTA file (.fasta, .fa, .fna)
    #[argh(option)]
    pub input: Option<String>,

    /// output profile file (default: print summary only)
    #[argh(option)]
    pub output: Option<String>,

    /// output format: tsv, csv, json (default: tsv)
    #[argh(option, default = "String::from(DEFAULT_FORMAT)")]
    pub format: String,

    /// alignment: pad, none (input already aligned), mafft, clustalo, muscle (default: pad)
    #[argh(option, default = "String::from(DEFAULT_ALIGNMENT)")]
    pub alignment: String,

    /// path to the external aligner executable (default: the aligner's name on PATH)
    #[argh(option)]
    pub aligner_path: Option<String>,

    /// save the aligned sequences to a FASTA file
    #[argh(option)]
    pub aligned_output: Option<String>,

    /// tie strategy: mark-as-x, first-winner (default: mark-as-x)
    #[argh(option, default = "String::from(DEFAULT_TIE_STRATEGY)")]
    pub tie_strategy: String,

    /// include only sequences whose id matches regex pattern
    #[argh(option)]
    pub include_ids: Option<String>,

    /// exclude sequences whose id matches regex pattern
    #[argh(option)]
    pub exclude_ids: Option<String>,

    /// number of threads (default: auto-detect)
    #[argh(option)]
    pub threads: Option<usize>,

    /// directory for temporary files of external tools (default: system temp dir)
    #[argh(option)]
    pub work_dir: Option<String>,

    /// validate inputs without computation (dry run)
    #[argh(switch)]
    pub dry_run: bool,

    /// path to TOML configuration file
    #[argh(option)]
    pub config: Option<String>,

    /// generate sample configuration file and exit
    #[argh(switch)]
    pub generate_config: bool,
}
