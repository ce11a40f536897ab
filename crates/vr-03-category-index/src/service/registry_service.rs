//! Category Registry Service
//!
//! Maps category names to their [`CategoryIndex`], creating an index the
//! first time a category is seen. There is no capacity ceiling.
//!
//! Unlike the domain layer, the service logs what it does.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shared_types::Record;
use tracing::{debug, info, warn};
use vr_02_ordered_index::CoinFlipLevels;

use crate::domain::{CategoryIndex, LookupOutcome, RegistryConfig};
use crate::error::RegistryError;
use crate::metrics::{Metrics, MetricsRecorder, MetricsSnapshot};
use crate::ports::VaccinationRegistryApi;

/// What the registry did with a processed record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    /// Written to the filter and the ordered index of its category
    Indexed,
    /// Citizen not vaccinated; the category exists but nothing was indexed
    SkippedNotVaccinated,
    /// Id already indexed for this category; the first record is kept
    Duplicate { id: String },
}

/// Registry of category indexes
pub struct CategoryRegistry<M: MetricsRecorder = Metrics> {
    config: RegistryConfig,
    categories: HashMap<String, CategoryIndex>,
    /// Source of per-category level generator seeds
    seeder: StdRng,
    metrics: M,
}

impl CategoryRegistry<Metrics> {
    /// Create an empty registry that counts operations in [`Metrics`]
    pub fn new(config: RegistryConfig) -> Result<Self, RegistryError> {
        Self::with_metrics(config, Metrics::new())
    }
}

impl<M: MetricsRecorder> CategoryRegistry<M> {
    pub fn with_metrics(config: RegistryConfig, metrics: M) -> Result<Self, RegistryError> {
        config.validate()?;

        let seeder = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            config,
            categories: HashMap::new(),
            seeder,
            metrics,
        })
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    pub fn metrics(&self) -> &M {
        &self.metrics
    }

    /// The index of `name`, if that category has been seen
    pub fn category(&self, name: &str) -> Option<&CategoryIndex> {
        self.categories.get(name)
    }

    /// Number of known categories
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Vaccinated records of a category in ascending id order
    pub fn vaccinated<'a>(
        &'a self,
        category: &str,
    ) -> Result<impl Iterator<Item = &'a Record> + 'a, RegistryError> {
        Ok(self.known(category)?.vaccinated())
    }

    fn known(&self, category: &str) -> Result<&CategoryIndex, RegistryError> {
        self.categories
            .get(category)
            .ok_or_else(|| RegistryError::UnknownCategory(category.to_string()))
    }

    fn get_or_create(&mut self, name: &str) -> Result<&mut CategoryIndex, RegistryError> {
        match self.categories.entry(name.to_string()) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let levels = CoinFlipLevels::seeded(self.seeder.gen());
                let index =
                    CategoryIndex::new(name, &self.config.filter, &self.config.index, levels)?;
                self.metrics.record_category_created();
                info!(
                    category = name,
                    size_bits = self.config.filter.size_bits,
                    hash_count = self.config.filter.hash_count,
                    max_level = self.config.index.max_level,
                    "Created category index"
                );
                Ok(entry.insert(index))
            }
        }
    }
}

impl<M: MetricsRecorder> VaccinationRegistryApi for CategoryRegistry<M> {
    fn process_record(&mut self, record: Record) -> Result<RecordOutcome, RegistryError> {
        let category_name = record.category().to_string();
        let id = record.id().to_string();
        let vaccinated = record.is_vaccinated();

        let category = self.get_or_create(&category_name)?;

        if !vaccinated {
            self.metrics.record_skipped();
            debug!(citizen_id = %id, category = %category_name, "Skipped non-vaccinated record");
            return Ok(RecordOutcome::SkippedNotVaccinated);
        }

        let indexed = category.record(record).map(|_| ());
        match indexed {
            Ok(()) => {
                self.metrics.record_indexed();
                debug!(citizen_id = %id, category = %category_name, "Indexed record");
                Ok(RecordOutcome::Indexed)
            }
            Err(err) if err.is_duplicate() => {
                self.metrics.record_duplicate();
                warn!(
                    citizen_id = %id,
                    category = %category_name,
                    "Duplicate citizen id, keeping first record"
                );
                Ok(RecordOutcome::Duplicate { id })
            }
            Err(err) => Err(err.into()),
        }
    }

    fn check_status(
        &self,
        citizen_id: &str,
        category: &str,
    ) -> Result<LookupOutcome<'_>, RegistryError> {
        let outcome = self.known(category)?.lookup(citizen_id);
        match outcome {
            LookupOutcome::NotFound => self.metrics.record_lookup_rejected(),
            LookupOutcome::Found(_) => self.metrics.record_lookup_found(),
            LookupOutcome::FalsePositive => {
                self.metrics.record_lookup_false_positive();
                debug!(citizen_id, category, "Membership filter false positive");
            }
        }
        Ok(outcome)
    }

    fn category_index(&self, category: &str) -> Result<&CategoryIndex, RegistryError> {
        self.known(category)
    }

    fn category_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.categories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    fn metrics_snapshot(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }
}
