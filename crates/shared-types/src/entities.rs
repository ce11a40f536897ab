//! # Core Domain Entities
//!
//! Defines the vaccination record stored per category ("virus").
//!
//! The textual form produced by `Display` is the one-line record format used
//! by the loader and the shell:
//!
//! ```text
//! <id> <first_name> <last_name> <country> <age> <virus> <YES|NO> [date]
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::RecordError;

/// Whether a citizen has been vaccinated against a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VaccinationStatus {
    /// Serialized as `YES`.
    #[serde(rename = "YES")]
    Vaccinated,
    /// Serialized as `NO`.
    #[serde(rename = "NO")]
    NotVaccinated,
}

impl VaccinationStatus {
    /// The status flag as it appears in record files.
    pub fn as_flag(self) -> &'static str {
        match self {
            VaccinationStatus::Vaccinated => "YES",
            VaccinationStatus::NotVaccinated => "NO",
        }
    }

    pub fn is_vaccinated(self) -> bool {
        matches!(self, VaccinationStatus::Vaccinated)
    }
}

impl FromStr for VaccinationStatus {
    type Err = RecordError;

    /// Flags are matched exactly; `yes` is not accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "YES" => Ok(VaccinationStatus::Vaccinated),
            "NO" => Ok(VaccinationStatus::NotVaccinated),
            other => Err(RecordError::InvalidStatus(other.to_string())),
        }
    }
}

impl fmt::Display for VaccinationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_flag())
    }
}

/// A citizen's vaccination record for one category.
///
/// The `id` is the ordering key of the category index. It is set once by the
/// builder and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    id: String,
    first_name: String,
    last_name: String,
    country: String,
    age: u32,
    category: String,
    status: VaccinationStatus,
    date: Option<String>,
}

impl Record {
    /// Start building a record keyed by `id`.
    pub fn builder(id: impl Into<String>) -> RecordBuilder {
        RecordBuilder::new(id)
    }

    /// Citizen id (the index key).
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    /// Category (virus) name the record belongs to.
    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn status(&self) -> VaccinationStatus {
        self.status
    }

    /// Vaccination date, only ever present for vaccinated citizens.
    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    pub fn is_vaccinated(&self) -> bool {
        self.status.is_vaccinated()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} {}",
            self.id,
            self.first_name,
            self.last_name,
            self.country,
            self.age,
            self.category,
            self.status
        )?;
        if let Some(date) = &self.date {
            write!(f, " {}", date)?;
        }
        Ok(())
    }
}

/// Builder for [`Record`] that refuses to produce a partial record.
///
/// # Example
///
/// ```
/// use shared_types::{Record, VaccinationStatus};
///
/// let record = Record::builder("10002")
///     .first_name("Emma")
///     .last_name("Lee")
///     .country("UK")
///     .age(34)
///     .category("COVID-19")
///     .status(VaccinationStatus::Vaccinated)
///     .date("2023-04-11")
///     .build()
///     .unwrap();
///
/// assert_eq!(record.id(), "10002");
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordBuilder {
    id: String,
    first_name: Option<String>,
    last_name: Option<String>,
    country: Option<String>,
    age: Option<u32>,
    category: Option<String>,
    status: Option<VaccinationStatus>,
    date: Option<String>,
}

impl RecordBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn first_name(mut self, name: impl Into<String>) -> Self {
        self.first_name = Some(name.into());
        self
    }

    pub fn last_name(mut self, name: impl Into<String>) -> Self {
        self.last_name = Some(name.into());
        self
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn status(mut self, status: VaccinationStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Set or clear the date in one call (convenient for parsed input).
    pub fn maybe_date(mut self, date: Option<String>) -> Self {
        self.date = date;
        self
    }

    /// Validate and produce the record.
    ///
    /// A vaccinated record may omit its date; a non-vaccinated record must not
    /// carry one.
    pub fn build(self) -> Result<Record, RecordError> {
        if self.id.is_empty() {
            return Err(RecordError::EmptyId);
        }
        let id = self.id;
        let missing = |field: &'static str| RecordError::MissingField {
            id: id.clone(),
            field,
        };

        let first_name = self.first_name.ok_or_else(|| missing("first_name"))?;
        let last_name = self.last_name.ok_or_else(|| missing("last_name"))?;
        let country = self.country.ok_or_else(|| missing("country"))?;
        let age = self.age.ok_or_else(|| missing("age"))?;
        let category = self.category.ok_or_else(|| missing("category"))?;
        let status = self.status.ok_or_else(|| missing("status"))?;

        if !status.is_vaccinated() && self.date.is_some() {
            return Err(RecordError::DateWithoutVaccination { id });
        }

        Ok(Record {
            id,
            first_name,
            last_name,
            country,
            age,
            category,
            status,
            date: self.date,
        })
    }
}
