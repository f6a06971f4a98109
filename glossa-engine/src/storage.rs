//! Lazy, process-wide storage for loaded language models
//!
//! Each (language, order) pair maps to one immutable probability table.
//! Tables are populated exactly once behind a per-key once-cell, so
//! concurrent misses for the same pair collapse into a single load while
//! loads for distinct pairs proceed in parallel. Entries are never evicted.

use glossa_core::{ngram_name_by_length, JsonLanguageModel, Language, Ngram, MAX_NGRAM_LENGTH};
use log::{debug, warn};
use rayon::prelude::*;
use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, LazyLock, OnceLock, RwLock};

/// A loaded probability table; a missing n-gram means probability zero
pub type ModelTable = HashMap<String, f64>;

type ModelCell = Arc<OnceLock<Arc<ModelTable>>>;

/// Default directory the detector resolves model files against
pub const DEFAULT_MODELS_ROOT: &str = "language-models";

/// Storage for the five per-order model caches
pub struct ModelStorage {
    root: PathBuf,
    caches: [RwLock<HashMap<Language, ModelCell>>; MAX_NGRAM_LENGTH],
}

impl ModelStorage {
    /// Creates an empty storage resolving model files under `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            caches: std::array::from_fn(|_| RwLock::new(HashMap::new())),
        }
    }

    /// The storage shared by all detectors in this process, rooted at
    /// [`DEFAULT_MODELS_ROOT`]
    pub fn shared() -> Arc<ModelStorage> {
        static SHARED: LazyLock<Arc<ModelStorage>> =
            LazyLock::new(|| Arc::new(ModelStorage::new(DEFAULT_MODELS_ROOT)));
        Arc::clone(&SHARED)
    }

    /// The directory model files are resolved against
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the probability table for one (language, order) pair,
    /// loading it on first use.
    ///
    /// # Panics
    ///
    /// Panics if `ngram_length` is outside `1..=5`.
    pub fn table(&self, language: Language, ngram_length: usize) -> Arc<ModelTable> {
        assert!(
            (1..=MAX_NGRAM_LENGTH).contains(&ngram_length),
            "ngram length {ngram_length} is not in range 1..={MAX_NGRAM_LENGTH}"
        );
        let cache = &self.caches[ngram_length - 1];
        let cell = {
            let entries = cache.read().expect("model cache poisoned");
            entries.get(&language).cloned()
        };
        let cell = match cell {
            Some(cell) => cell,
            None => {
                let mut entries = cache.write().expect("model cache poisoned");
                Arc::clone(
                    entries
                        .entry(language)
                        .or_insert_with(|| Arc::new(OnceLock::new())),
                )
            }
        };
        // Initialization runs outside the map lock; distinct keys load in
        // parallel, one key loads at most once.
        Arc::clone(cell.get_or_init(|| Arc::new(self.load(language, ngram_length))))
    }

    /// Looks up the probability of one n-gram in the table matching its
    /// own length. Missing evidence is probability zero.
    pub fn ngram_probability(&self, language: Language, ngram: &Ngram) -> f64 {
        self.table(language, ngram.char_count())
            .get(ngram.value())
            .copied()
            .unwrap_or(0.0)
    }

    /// Eagerly loads every (language, order) pair in parallel
    pub fn preload(&self, languages: &BTreeSet<Language>) {
        let pairs: Vec<(Language, usize)> = languages
            .iter()
            .flat_map(|&language| (1..=MAX_NGRAM_LENGTH).map(move |order| (language, order)))
            .collect();
        pairs.par_iter().for_each(|&(language, order)| {
            self.table(language, order);
        });
    }

    fn load(&self, language: Language, ngram_length: usize) -> ModelTable {
        let Some(iso_code) = language.iso_code_639_1() else {
            return ModelTable::new();
        };
        let file_name = format!("{}s.json", ngram_name_by_length(ngram_length));
        let path = self.root.join(iso_code).join(file_name);
        let json = match fs::read_to_string(&path) {
            Ok(json) => json,
            Err(error) => {
                debug!("no model file at {}: {error}", path.display());
                return ModelTable::new();
            }
        };
        let model: JsonLanguageModel = match serde_json::from_str(&json) {
            Ok(model) => model,
            Err(error) => {
                warn!("discarding malformed model file {}: {error}", path.display());
                return ModelTable::new();
            }
        };
        let mut table = ModelTable::new();
        for (fraction, ngrams) in &model.ngrams {
            let probability = fraction.to_f64();
            for ngram in ngrams.split(' ') {
                table.insert(ngram.to_string(), probability);
            }
        }
        table
    }
}
