//! # Integration Test Flows
//!
//! A record file goes through the loader into the category registry, then
//! the shell answers queries against it.
//!
//! ## Flows Tested:
//!
//! 1. **File → Registry**: every vaccinated line is indexed under its virus
//! 2. **Registry → Shell**: `check` / `list` / `levels` answers
//! 3. **Malformed input**: bad lines are reported and the load continues

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write};

    use registry_runtime::shell::{self, MAYBE, NOT_VACCINATED, PROMPT, VIRUS_NOT_FOUND};
    use registry_runtime::{load_file, load_records, Args, RuntimeConfig};
    use shared_types::VaccinationStatus;
    use vr_01_membership_filter::FilterConfig;
    use vr_03_category_index::{
        CategoryRegistry, LookupOutcome, RegistryConfig, RegistryError, VaccinationRegistryApi,
    };

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    const CITIZENS: &str = "\
30001 Liam Smith USA 45 COVID-19 YES 2023-01-15
10002 Emma Johnson Australia 37 COVID-19 YES 2023-09-21
20003 Noah Williams Canada 52 COVID-19 YES 2022-11-03
40004 Olivia Brown UK 29 COVID-19 NO
50005 Ava Jones Germany 61 H1N1 YES 2021-02-27
60006 Lucas Garcia Spain 19 Measles NO
10002 Emma Johnson Australia 37 H1N1 NO
";

    fn registry(config: RegistryConfig) -> CategoryRegistry {
        CategoryRegistry::new(config.with_seed(2024)).unwrap()
    }

    fn loaded() -> CategoryRegistry {
        let mut registry = registry(RegistryConfig::default());
        load_records(Cursor::new(CITIZENS), &mut registry).unwrap();
        registry
    }

    /// Shell output for `commands`, minus banner and prompts
    fn answers(registry: &CategoryRegistry, commands: &str) -> Vec<String> {
        let mut out = Vec::new();
        shell::run(Cursor::new(commands), &mut out, registry).unwrap();
        let text = String::from_utf8(out).unwrap();
        let (_, after_banner) = text.split_once(PROMPT).unwrap();
        after_banner
            .split(PROMPT)
            .flat_map(|chunk| chunk.lines())
            .map(str::to_string)
            .collect()
    }

    // =============================================================================
    // FILE → REGISTRY
    // =============================================================================

    #[test]
    fn test_file_load_builds_one_index_per_virus() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CITIZENS.as_bytes()).unwrap();

        let mut registry = registry(RegistryConfig::default());
        let report = load_file(file.path(), &mut registry).unwrap();

        assert_eq!(report.indexed, 4);
        assert_eq!(report.skipped, 3);
        assert!(report.is_clean());
        assert_eq!(registry.category_names(), ["COVID-19", "H1N1", "Measles"]);
        assert_eq!(registry.category("COVID-19").unwrap().len(), 3);
        assert_eq!(registry.category("H1N1").unwrap().len(), 1);
        assert!(registry.category("Measles").unwrap().is_empty());
    }

    #[test]
    fn test_runtime_config_drives_registry() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CITIZENS.as_bytes()).unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let args = <Args as clap::Parser>::parse_from([
            "vaccine-registry",
            path.as_str(),
            "--bloom-size",
            "512",
            "--seed",
            "5",
        ]);
        let config = RuntimeConfig::from_args(args);
        config.validate().unwrap();

        let mut registry = CategoryRegistry::new(config.registry.clone()).unwrap();
        load_file(&config.input, &mut registry).unwrap();

        let covid = registry.category("COVID-19").unwrap();
        assert_eq!(covid.filter().size_bits(), 512);
        assert_eq!(covid.filter().elements_inserted(), 3);
    }

    #[test]
    fn test_status_per_virus_is_independent() {
        let registry = loaded();

        let covid = registry.check_status("10002", "COVID-19").unwrap();
        assert_eq!(covid.record().map(|r| r.status()), Some(VaccinationStatus::Vaccinated));

        // same citizen, NO for H1N1: never indexed there
        assert!(!registry.check_status("10002", "H1N1").unwrap().is_found());
        assert!(registry.check_status("50005", "H1N1").unwrap().is_found());
    }

    #[test]
    fn test_unknown_virus_is_an_error_not_a_status() {
        let registry = loaded();
        assert_eq!(
            registry.check_status("10002", "Ebola"),
            Err(RegistryError::UnknownCategory("Ebola".to_string()))
        );
    }

    // =============================================================================
    // REGISTRY → SHELL
    // =============================================================================

    #[test]
    fn test_shell_session() {
        let registry = loaded();
        let output = answers(
            &registry,
            "check 10002 COVID-19\n\
             check 40004 COVID-19\n\
             check 10002 Ebola\n\
             list COVID-19\n\
             dance\n\
             exit\n",
        );

        assert_eq!(
            output,
            [
                "10002 Emma Johnson Australia 37 COVID-19 YES 2023-09-21",
                NOT_VACCINATED,
                VIRUS_NOT_FOUND,
                "10002 Emma Johnson Australia 37 COVID-19 YES 2023-09-21",
                "20003 Noah Williams Canada 52 COVID-19 YES 2022-11-03",
                "30001 Liam Smith USA 45 COVID-19 YES 2023-01-15",
                "Unknown command",
            ]
        );
    }

    #[test]
    fn test_shell_reports_false_positive() {
        let config = RegistryConfig::default().with_filter(FilterConfig::new(1, 1).unwrap());
        let mut registry = registry(config);
        load_records(Cursor::new(CITIZENS), &mut registry).unwrap();

        let output = answers(&registry, "check 77777 COVID-19\ncheck 30001 COVID-19\n");
        assert_eq!(output[0], MAYBE);
        assert!(output[1].starts_with("30001 Liam Smith"));

        let snapshot = registry.metrics_snapshot();
        assert_eq!(snapshot.false_positives, 1);
        assert_eq!(snapshot.lookups_found, 1);
        assert!((snapshot.observed_false_positive_rate - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_shell_levels_show_every_record_on_level_zero() {
        let registry = loaded();
        let output = answers(&registry, "levels COVID-19\n");
        let bottom = output.iter().find(|line| line.starts_with("Level 0:")).unwrap();
        assert_eq!(bottom, "Level 0: 10002 -> 20003 -> 30001 -> NULL");
    }

    // =============================================================================
    // MALFORMED INPUT
    // =============================================================================

    #[test]
    fn test_bad_lines_reported_with_line_numbers() {
        let input = format!("{}not a record\n70007 Mia Davis Italy old COVID-19 YES\n", CITIZENS);
        let mut registry = registry(RegistryConfig::default());
        let report = load_records(Cursor::new(input), &mut registry).unwrap();

        let bad: Vec<usize> = report.errors.iter().map(|e| e.line_number).collect();
        assert_eq!(bad, [8, 9]);
        assert_eq!(report.indexed, 4, "good lines still load");
    }

    #[test]
    fn test_duplicate_lines_keep_first_record() {
        let input = "\
10002 Emma Johnson Australia 37 COVID-19 YES 2023-09-21
10002 Emma Someone Else 38 COVID-19 YES 2024-01-01
";
        let mut registry = registry(RegistryConfig::default());
        let report = load_records(Cursor::new(input), &mut registry).unwrap();

        assert_eq!(report.duplicates, 1);
        match registry.check_status("10002", "COVID-19").unwrap() {
            LookupOutcome::Found(record) => assert_eq!(record.last_name(), "Johnson"),
            other => panic!("expected Found, got {:?}", other),
        }
    }
}
