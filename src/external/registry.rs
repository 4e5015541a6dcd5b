// registry.rs - Aligner registry for managing available external aligners

use super::traits::Aligner;
use super::{ClustalOmegaAligner, MafftAligner, MuscleAligner};
use std::collections::HashMap;

/// Registry of external aligners, keyed by name
#[derive(Debug)]
pub struct AlignerRegistry {
    aligners: HashMap<String, Box<dyn Aligner>>,
}

impl AlignerRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            aligners: HashMap::new(),
        };

        // Register built-in aligners
        registry.register_aligner(Box::new(MafftAligner));
        registry.register_aligner(Box::new(ClustalOmegaAligner));
        registry.register_aligner(Box::new(MuscleAligner));

        registry
    }

    /// Register an aligner under its own name, replacing any previous entry
    pub fn register_aligner(&mut self, aligner: Box<dyn Aligner>) {
        self.aligners.insert(aligner.name().to_string(), aligner);
    }

    /// Get an aligner by name
    pub fn get_aligner(&self, name: &str) -> Option<&dyn Aligner> {
        self.aligners.get(name).map(|a| a.as_ref())
    }

    pub fn has_aligner(&self, name: &str) -> bool {
        self.aligners.contains_key(name)
    }

    /// List `(name, description)` pairs sorted by name
    pub fn list_aligners(&self) -> Vec<(&str, &str)> {
        let mut list: Vec<_> = self
            .aligners
            .values()
            .map(|a| (a.name(), a.description()))
            .collect();
        list.sort();
        list
    }

    /// All aligner names, sorted
    pub fn get_aligner_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.aligners.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }
}

impl Default for AlignerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
