//! # Lookup Properties
//!
//! Registry-level guarantees checked with generated record sets:
//!
//! - a vaccinated citizen is always `Found` under their virus
//! - a citizen never indexed is never `Found`
//! - `list` yields every indexed id exactly once, ascending

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, BTreeSet};

    use proptest::prelude::*;
    use shared_types::{Record, VaccinationStatus};
    use vr_01_membership_filter::FilterConfig;
    use vr_03_category_index::{
        CategoryRegistry, RecordOutcome, RegistryConfig, VaccinationRegistryApi,
    };

    const VIRUSES: [&str; 3] = ["COVID-19", "H1N1", "Measles"];

    fn record(id: &str, virus: &str, vaccinated: bool) -> Record {
        let builder = Record::builder(id)
            .first_name("Test")
            .last_name("Citizen")
            .country("Nowhere")
            .age(40)
            .category(virus);
        let builder = if vaccinated {
            builder.status(VaccinationStatus::Vaccinated).date("2023-01-01")
        } else {
            builder.status(VaccinationStatus::NotVaccinated)
        };
        builder.build().unwrap()
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_registry_lookups_match_model(
            entries in proptest::collection::vec(("[0-9]{4}", 0usize..3, any::<bool>()), 0..200),
            probes in proptest::collection::vec(("[0-9]{4}", 0usize..3), 0..100),
            size_bits in 16usize..4096,
            seed in any::<u64>(),
        ) {
            let config = RegistryConfig::default()
                .with_filter(FilterConfig::new(size_bits, 3).unwrap())
                .with_seed(seed);
            let mut registry = CategoryRegistry::new(config).unwrap();

            // first vaccinated record per (virus, id) wins
            let mut model: BTreeMap<&str, BTreeSet<String>> = BTreeMap::new();
            for (id, virus, vaccinated) in &entries {
                let virus = VIRUSES[*virus];
                let outcome = registry.process_record(record(id, virus, *vaccinated)).unwrap();
                let ids = model.entry(virus).or_default();
                let expected = if !*vaccinated {
                    RecordOutcome::SkippedNotVaccinated
                } else if ids.insert(id.clone()) {
                    RecordOutcome::Indexed
                } else {
                    RecordOutcome::Duplicate { id: id.clone() }
                };
                prop_assert_eq!(outcome, expected);
            }

            for (virus, ids) in &model {
                for id in ids {
                    let found = registry.check_status(id, virus).unwrap();
                    prop_assert!(found.is_found(), "{} lost from {}", id, virus);
                }
                let listed: Vec<String> = registry
                    .list_vaccinated(virus)
                    .unwrap()
                    .into_iter()
                    .map(|r| r.id().to_string())
                    .collect();
                let expected: Vec<String> = ids.iter().cloned().collect();
                prop_assert_eq!(listed, expected);
            }

            for (id, virus) in &probes {
                let virus = VIRUSES[*virus];
                let indexed = model.get(virus).map_or(false, |ids| ids.contains(id));
                match registry.check_status(id, virus) {
                    Ok(outcome) => prop_assert_eq!(outcome.is_found(), indexed),
                    Err(_) => prop_assert!(!model.contains_key(virus)),
                }
            }
        }
    }
}
