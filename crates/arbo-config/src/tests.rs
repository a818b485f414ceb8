//! Unit tests for arbo-config.

#[cfg(test)]
mod scenario {
    use crate::{ConfigError, Ranged, Scenario, load_scenario, load_scenario_str};

    /// A scenario with every field scalar; `extra` is spliced in verbatim.
    fn doc(extra: &str) -> String {
        format!(
            r#"{{
                {extra}
                "cycles": 100,
                "human_infection_rate": 0.3,
                "human_initial_susceptible": 90,
                "human_initial_exposed": 0,
                "human_initial_infected": 10,
                "human_initial_recovered": 0,
                "human_transition_period_exposed": 5,
                "human_transition_period_infected": 7,
                "human_transition_period_recovered": 90,
                "mosquito_infection_rate": 0.4,
                "mosquito_initial_susceptible": 300,
                "mosquito_initial_infected": 3,
                "mosquito_initial_recovered": 0,
                "mosquito_transition_period_infected": 10,
                "mosquito_transition_period_recovered": 3
            }}"#
        )
    }

    #[test]
    fn scalars_pass_through() {
        let s = load_scenario_str(&doc("")).unwrap();
        assert_eq!(s.runs, 1);
        let p = &s.params;
        assert_eq!(p.seed, 0);
        assert_eq!(p.cycles, 100);
        assert_eq!(p.human_infection_rate, 0.3);
        assert_eq!(p.humans.infected, 10);
        assert_eq!(p.human_population(), 100);
        assert_eq!(p.mosquito_population(), 303);
        assert_eq!(p.human_thresholds.recovered, 90);
        assert_eq!(p.mosquito_thresholds.infected, 10);
    }

    #[test]
    fn runs_and_seed() {
        let s = load_scenario_str(&doc(r#""runs": 8, "seed": 42,"#)).unwrap();
        assert_eq!(s.runs, 8);
        assert_eq!(s.params.seed, 42);
    }

    #[test]
    fn ranges_resolve_inside_bounds() {
        let text = doc(r#""seed": 7,"#)
            .replace(r#""cycles": 100"#, r#""cycles": [50, 60]"#)
            .replace(r#""human_infection_rate": 0.3"#, r#""human_infection_rate": [0.1, 0.2]"#);
        let s = load_scenario_str(&text).unwrap();
        assert!((50..=60).contains(&s.params.cycles));
        assert!((0.1..=0.2).contains(&s.params.human_infection_rate));
    }

    #[test]
    fn same_seed_same_draws() {
        let text = doc(r#""seed": 99,"#)
            .replace(r#""human_initial_infected": 10"#, r#""human_initial_infected": [0, 1000000]"#);
        let a = load_scenario_str(&text).unwrap();
        let b = load_scenario_str(&text).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn degenerate_range_is_scalar() {
        let text = doc("").replace(r#""cycles": 100"#, r#""cycles": [12, 12]"#);
        assert_eq!(load_scenario_str(&text).unwrap().params.cycles, 12);
    }

    #[test]
    fn reversed_range_rejected() {
        let text = doc("").replace(r#""cycles": 100"#, r#""cycles": [60, 50]"#);
        match load_scenario_str(&text) {
            Err(ConfigError::InvalidRange { key, lo, hi }) => {
                assert_eq!(key, "cycles");
                assert_eq!((lo, hi), (60.0, 50.0));
            }
            other => panic!("expected InvalidRange, got {other:?}"),
        }
    }

    #[test]
    fn rate_outside_unit_interval_rejected() {
        let text = doc("").replace(r#""mosquito_infection_rate": 0.4"#, r#""mosquito_infection_rate": 1.5"#);
        assert!(matches!(
            load_scenario_str(&text),
            Err(ConfigError::InvalidRate { key: "mosquito_infection_rate", .. })
        ));
    }

    #[test]
    fn period_beyond_u32_rejected() {
        let text = doc("").replace(
            r#""human_transition_period_exposed": 5"#,
            r#""human_transition_period_exposed": 5000000000"#,
        );
        assert!(matches!(load_scenario_str(&text), Err(ConfigError::TooLarge { .. })));
    }

    #[test]
    fn unknown_and_missing_keys_rejected() {
        assert!(matches!(load_scenario_str(&doc(r#""cycels": 3,"#)), Err(ConfigError::Json(_))));
        let missing = doc("").replace(r#""cycles": 100,"#, "");
        assert!(matches!(load_scenario_str(&missing), Err(ConfigError::Json(_))));
    }

    #[test]
    fn ranged_shapes() {
        let s: Scenario = Scenario::from_json(&doc(r#""runs": [2, 4],"#)).unwrap();
        assert_eq!(s.runs, Some(Ranged::Range([2, 4])));
        assert_eq!(s.cycles, Ranged::Scalar(100));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("parameters.json");
        std::fs::write(&path, doc(r#""seed": 3,"#)).unwrap();
        let s = load_scenario(&path).unwrap();
        assert_eq!(s.params.seed, 3);

        let missing = dir.path().join("nope.json");
        assert!(matches!(load_scenario(&missing), Err(ConfigError::Io { .. })));
    }
}
