//! Inbound Ports (Driving Ports)
//!
//! The API the record loader and the interactive shell use to talk to the
//! category registry.

use shared_types::Record;

use crate::domain::{CategoryIndex, LookupOutcome};
use crate::error::RegistryError;
use crate::metrics::MetricsSnapshot;
use crate::service::RecordOutcome;

/// Primary registry API (Driving Port)
pub trait VaccinationRegistryApi {
    /// Route a parsed record to its category, creating the category on first
    /// sight; only vaccinated records are indexed.
    fn process_record(&mut self, record: Record) -> Result<RecordOutcome, RegistryError>;

    /// Three-way lookup of a citizen in one category
    ///
    /// Fails with [`RegistryError::UnknownCategory`] for a category never seen.
    fn check_status(
        &self,
        citizen_id: &str,
        category: &str,
    ) -> Result<LookupOutcome<'_>, RegistryError>;

    /// The index of one category
    fn category_index(&self, category: &str) -> Result<&CategoryIndex, RegistryError>;

    /// Known category names in sorted order
    fn category_names(&self) -> Vec<&str>;

    /// Current operation counters
    fn metrics_snapshot(&self) -> MetricsSnapshot;

    /// Vaccinated records of one category in ascending citizen id order
    fn list_vaccinated(&self, category: &str) -> Result<Vec<&Record>, RegistryError> {
        Ok(self.category_index(category)?.vaccinated().collect())
    }
}
