// merge.rs - Merge configuration file with CLI arguments

use crate::cli::args::{DEFAULT_ALIGNMENT, DEFAULT_FORMAT, DEFAULT_TIE_STRATEGY};
use crate::cli::{Args, Config};

impl Args {
    /// Merge with configuration from file
    /// CLI arguments take precedence over config file values
    pub fn merge_with_config(mut self, config: Config) -> Self {
        // Input/Output
        if self.input.is_none() {
            self.input = config.input;
        }
        if self.output.is_none() {
            self.output = config.output;
        }
        if self.aligned_output.is_none() {
            self.aligned_output = config.aligned_output;
        }

        // Settings with defaults (only override defaults, not explicit CLI values)
        if let Some(format) = config.format.filter(|_| self.format == DEFAULT_FORMAT) {
            self.format = format;
        }
        if let Some(alignment) = config.alignment.filter(|_| self.alignment == DEFAULT_ALIGNMENT) {
            self.alignment = alignment;
        }
        if let Some(tie) = config.tie_strategy.filter(|_| self.tie_strategy == DEFAULT_TIE_STRATEGY) {
            self.tie_strategy = tie;
        }

        // Alignment
        if self.aligner_path.is_none() {
            self.aligner_path = config.aligner_path;
        }
        if self.work_dir.is_none() {
            self.work_dir = config.work_dir;
        }

        // Sequence filtering
        if self.include_ids.is_none() {
            self.include_ids = config.include_ids;
        }
        if self.exclude_ids.is_none() {
            self.exclude_ids = config.exclude_ids;
        }

        // Performance
        if self.threads.is_none() {
            self.threads = config.threads;
        }

        // Flags (CLI flags take precedence, config only sets if not explicitly set)
        if !self.dry_run && config.dry_run.unwrap_or(false) {
            self.dry_run = true;
        }

        self
    }

    /// Load configuration and merge with CLI args
    pub fn with_config_file(self, config_path: &str) -> Result<Self, String> {
        let config = Config::from_file(config_path)?;
        Ok(self.merge_with_config(config))
    }
}
