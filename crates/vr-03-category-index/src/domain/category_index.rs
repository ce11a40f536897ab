//! Per-category composition of membership filter and ordered index
//!
//! `record` writes to both structures, filter first. `lookup` consults the
//! filter and only searches the index on a "possibly present" answer.

use shared_types::Record;
use vr_01_membership_filter::domain::calculate_fpr;
use vr_01_membership_filter::{FilterConfig, MembershipFilter};
use vr_02_ordered_index::{CoinFlipLevels, IndexConfig, LevelGenerator, OrderedIndex};

use crate::error::CategoryError;

/// Three-way result of a category lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupOutcome<'a> {
    /// Filter rejected the key; authoritative, no index search was made.
    NotFound,
    /// Filter and index agree: the record for this key.
    Found(&'a Record),
    /// Filter said "possibly present" but the index has no such key.
    FalsePositive,
}

impl<'a> LookupOutcome<'a> {
    pub fn is_found(&self) -> bool {
        matches!(self, LookupOutcome::Found(_))
    }

    pub fn record(&self) -> Option<&'a Record> {
        match *self {
            LookupOutcome::Found(record) => Some(record),
            _ => None,
        }
    }
}

/// Membership filter + ordered index for one category
pub struct CategoryIndex<L = CoinFlipLevels> {
    name: String,
    filter: MembershipFilter,
    index: OrderedIndex<Record, L>,
}

impl<L: LevelGenerator> CategoryIndex<L> {
    pub fn new(
        name: impl Into<String>,
        filter: &FilterConfig,
        index: &IndexConfig,
        levels: L,
    ) -> Result<Self, CategoryError> {
        Ok(Self {
            name: name.into(),
            filter: MembershipFilter::from_config(filter)?,
            index: OrderedIndex::from_config(index, levels)?,
        })
    }

    /// Index a vaccinated record of this category
    ///
    /// The filter is written before the index, so a duplicate still leaves
    /// its (already set) bits in place; the duplicate is reported as
    /// `CategoryError::Index(IndexError::DuplicateKey)`.
    pub fn record(&mut self, record: Record) -> Result<&Record, CategoryError> {
        if record.category() != self.name {
            return Err(CategoryError::CategoryMismatch {
                id: record.id().to_string(),
                expected: self.name.clone(),
                found: record.category().to_string(),
            });
        }
        if !record.is_vaccinated() {
            return Err(CategoryError::NotVaccinated {
                id: record.id().to_string(),
            });
        }

        let key = record.id().to_string();
        self.filter.insert(&key);
        let node = self.index.insert(key, record)?;
        Ok(node.payload())
    }
}

impl<L> CategoryIndex<L> {
    pub fn lookup(&self, key: &str) -> LookupOutcome<'_> {
        if !self.filter.check(key) {
            return LookupOutcome::NotFound;
        }
        match self.index.get(key) {
            Some(record) => LookupOutcome::Found(record),
            None => LookupOutcome::FalsePositive,
        }
    }

    /// Vaccinated records in ascending citizen id order
    pub fn vaccinated(&self) -> impl Iterator<Item = &Record> + '_ {
        self.index.values()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of indexed records
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Estimated filter false positive rate for the distinct ids indexed
    ///
    /// Duplicate inserts set no new bits, so the estimate uses `len()`
    /// rather than the filter's raw insert count.
    pub fn estimated_false_positive_rate(&self) -> f64 {
        calculate_fpr(
            self.filter.size_bits(),
            self.index.len(),
            self.filter.hash_count(),
        )
    }

    pub fn filter(&self) -> &MembershipFilter {
        &self.filter
    }

    pub fn index(&self) -> &OrderedIndex<Record, L> {
        &self.index
    }
}
