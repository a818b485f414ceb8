//! Tests for the arbosim driver.

#[cfg(test)]
mod args {
    use clap::Parser;

    use arbo_index::IndexStrategy;
    use arbo_sched::Backend;

    use crate::args::Cli;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["arbosim", "--environment", "g.csv", "--parameters", "p.json"]).unwrap();
        assert_eq!(cli.backend, Backend::Cpu);
        assert_eq!(cli.index, IndexStrategy::Compacted);
        assert_eq!(cli.output_dir, std::path::PathBuf::from("output"));
        assert!(!cli.full_trajectory);
        assert_eq!(cli.progress_every, 0);

        let config = cli.sim_config();
        assert_eq!(config.num_threads, None);
        assert_eq!(config.plan.contact, Backend::Cpu);
    }

    #[test]
    fn backend_and_index() {
        let cli = Cli::try_parse_from([
            "arbosim", "--environment", "g.csv", "--parameters", "p.json",
            "--backend", "gpu", "--index", "dense", "--threads", "2",
        ])
        .unwrap();
        let config = cli.sim_config();
        assert_eq!(config.plan.movement, Backend::Accelerator);
        assert_eq!(config.plan.output, Backend::Accelerator);
        assert_eq!(config.index, IndexStrategy::Dense);
        assert_eq!(config.num_threads, Some(2));
    }

    #[test]
    fn inputs_required() {
        assert!(Cli::try_parse_from(["arbosim"]).is_err());
        assert!(Cli::try_parse_from(["arbosim", "--environment", "g.csv"]).is_err());
        assert!(Cli::try_parse_from(["arbosim", "--input-dir", "in"]).is_ok());
        assert!(Cli::try_parse_from(["arbosim", "--input-dir", "in", "--environment", "g.csv"]).is_err());
    }

    #[test]
    fn unknown_backend_rejected() {
        let result = Cli::try_parse_from([
            "arbosim", "--environment", "g.csv", "--parameters", "p.json", "--backend", "quantum",
        ]);
        assert!(result.is_err());
    }
}

#[cfg(test)]
mod driver {
    use std::path::Path;

    use clap::Parser;

    use crate::args::Cli;
    use arbo_core::Cycle;
    use arbo_sim::{SimBuilder, SimObserver, StateSnapshot};

    use crate::driver::{drive, find_environment, load_environment, run_batch, run_scenario};

    const RING: &str = "from,to\n0,1\n1,2\n2,3\n3,0\n1,0\n2,1\n3,2\n0,3\n";

    const SCENARIO: &str = r#"{
        "runs": 2,
        "cycles": 6,
        "seed": 11,
        "human_infection_rate": [0.4, 0.6],
        "human_initial_susceptible": 30,
        "human_initial_exposed": 0,
        "human_initial_infected": 5,
        "human_initial_recovered": 0,
        "human_transition_period_exposed": 2,
        "human_transition_period_infected": 3,
        "human_transition_period_recovered": 10,
        "mosquito_infection_rate": 0.5,
        "mosquito_initial_susceptible": 60,
        "mosquito_initial_infected": 6,
        "mosquito_initial_recovered": 0,
        "mosquito_transition_period_infected": 4,
        "mosquito_transition_period_recovered": 2
    }"#;

    fn cli(extra: &[&str]) -> Cli {
        let mut argv = vec!["arbosim", "--input-dir", "unused"];
        argv.extend_from_slice(extra);
        Cli::try_parse_from(argv).unwrap()
    }

    fn scenario_dir(root: &Path, name: &str) -> std::path::PathBuf {
        let dir = root.join(name);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("environment.csv"), RING).unwrap();
        std::fs::write(dir.join("parameters.json"), SCENARIO).unwrap();
        dir
    }

    fn trajectory_rows(dir: &Path) -> Vec<csv::StringRecord> {
        let mut rdr = csv::Reader::from_path(dir.join("trajectory.csv")).unwrap();
        rdr.records().map(|r| r.unwrap()).collect()
    }

    #[test]
    fn environment_format_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let csv = dir.path().join("graph.CSV");
        std::fs::write(&csv, RING).unwrap();
        assert_eq!(load_environment(&csv).unwrap().size(), 4);

        let txt = dir.path().join("graph.txt");
        std::fs::write(&txt, RING).unwrap();
        assert!(load_environment(&txt).is_err());
    }

    #[test]
    fn environment_lookup_order() {
        let dir = tempfile::tempdir().unwrap();
        assert!(find_environment(dir.path()).is_none());
        std::fs::write(dir.path().join("environment.csv"), RING).unwrap();
        std::fs::write(dir.path().join("environment.geojson"), "{}").unwrap();
        assert_eq!(find_environment(dir.path()).unwrap(), dir.path().join("environment.geojson"));
    }

    #[test]
    fn first_and_last_cycle_by_default() {
        let root = tempfile::tempdir().unwrap();
        let input = scenario_dir(root.path(), "a");
        let out = root.path().join("out");
        run_scenario(&input.join("environment.csv"), &input.join("parameters.json"), &out, &cli(&["--backend", "serial"])).unwrap();

        let rows = trajectory_rows(&out);
        assert_eq!(rows.len(), 4);
        let cycles: Vec<&str> = rows.iter().map(|r| &r[1]).collect();
        assert_eq!(cycles, ["0", "6", "0", "6"]);

        let mut runs = csv::Reader::from_path(out.join("runs.csv")).unwrap();
        assert_eq!(runs.records().count(), 2);
    }

    #[test]
    fn full_trajectory_and_json() {
        let root = tempfile::tempdir().unwrap();
        let input = scenario_dir(root.path(), "a");
        let out = root.path().join("out");
        let args = cli(&["--full-trajectory", "--json", "--runs", "1", "--progress-every", "2"]);
        run_scenario(&input.join("environment.csv"), &input.join("parameters.json"), &out, &args).unwrap();

        let rows = trajectory_rows(&out);
        assert_eq!(rows.len(), 7);
        for row in &rows {
            let humans: u64 = (3..7).map(|i| row[i].parse::<u64>().unwrap()).sum();
            let mosquitos: u64 = (7..10).map(|i| row[i].parse::<u64>().unwrap()).sum();
            assert_eq!((humans, mosquitos), (35, 66));
        }

        let json = std::fs::read_to_string(out.join("results.json")).unwrap();
        let states: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(states.as_array().unwrap().len(), 7);
    }

    #[test]
    fn same_seed_same_results() {
        let root = tempfile::tempdir().unwrap();
        let input = scenario_dir(root.path(), "a");
        let (env, params) = (input.join("environment.csv"), input.join("parameters.json"));
        let (a, b) = (root.path().join("a_out"), root.path().join("b_out"));
        run_scenario(&env, &params, &a, &cli(&["--full-trajectory", "--backend", "serial"])).unwrap();
        run_scenario(&env, &params, &b, &cli(&["--full-trajectory", "--backend", "cpu", "--threads", "3"])).unwrap();
        assert_eq!(trajectory_rows(&a), trajectory_rows(&b));
    }

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl SimObserver for Recorder {
        fn on_prepared(&mut self, snapshot: &StateSnapshot) {
            self.events.push(format!("prepared {}", snapshot.cycle()));
        }
        fn on_cycle_start(&mut self, cycle: Cycle) {
            self.events.push(format!("start {}", cycle.0));
        }
        fn on_snapshot(&mut self, snapshot: &StateSnapshot) {
            self.events.push(format!("snapshot {}", snapshot.cycle()));
        }
        fn on_sim_end(&mut self, snapshot: &StateSnapshot) {
            self.events.push(format!("end {}", snapshot.cycle()));
        }
    }

    #[test]
    fn drive_reports_every_cycle_start() {
        let root = tempfile::tempdir().unwrap();
        let input = scenario_dir(root.path(), "a");
        let env = load_environment(&input.join("environment.csv")).unwrap();
        let scenario = arbo_config::load_scenario_str(SCENARIO).unwrap();
        let mut params = scenario.params.clone();
        params.cycles = 3;
        let args = cli(&["--backend", "serial", "--full-trajectory"]);

        let mut sim = SimBuilder::new(&env, params.clone(), args.sim_config()).build().unwrap();
        let mut recorder = Recorder::default();
        drive(&mut sim, &mut recorder, &args);

        let expected = [
            "prepared 0", "start 0", "snapshot 1", "start 1", "snapshot 2", "start 2", "snapshot 3", "end 3",
        ];
        assert_eq!(recorder.events, expected);

        // Same callback sequence as `Simulation::run`.
        let mut sim = SimBuilder::new(&env, params, args.sim_config()).build().unwrap();
        let mut reference = Recorder::default();
        sim.run(&mut reference);
        assert_eq!(reference.events, recorder.events);
    }

    #[test]
    fn batch_continues_past_failures() {
        let root = tempfile::tempdir().unwrap();
        let input = root.path().join("in");
        scenario_dir(&input, "good");
        let bad = scenario_dir(&input, "bad");
        std::fs::write(bad.join("parameters.json"), "{\"cycles\": 3}").unwrap();
        std::fs::create_dir_all(input.join("empty")).unwrap();

        let out = root.path().join("out");
        let args = cli(&["--output-dir", out.to_str().unwrap()]);
        let result = run_batch(&input, &args);
        assert!(result.is_err());
        assert_eq!(trajectory_rows(&out.join("good")).len(), 4);
        assert!(!out.join("empty").exists());
    }
}
