//! Unit tests for arbo-agent.

#[cfg(test)]
mod states {
    use crate::{DiseaseState, HumanState, MosquitoState};

    #[test]
    fn indices_follow_all() {
        for (i, s) in HumanState::ALL.iter().enumerate() {
            assert_eq!(s.index(), i);
        }
        for (i, s) in MosquitoState::ALL.iter().enumerate() {
            assert_eq!(s.index(), i);
        }
        assert_eq!(HumanState::ALL.len(), HumanState::COUNT);
        assert_eq!(MosquitoState::ALL.len(), MosquitoState::COUNT);
    }

    #[test]
    fn contact_targets() {
        assert_eq!(HumanState::ON_CONTACT, HumanState::Exposed);
        assert_eq!(MosquitoState::ON_CONTACT, MosquitoState::Infected);
        assert!(HumanState::Infected.is_infectious());
        assert!(!HumanState::Exposed.is_infectious());
        assert!(MosquitoState::Susceptible.is_susceptible());
    }
}

#[cfg(test)]
mod builder {
    use arbo_core::{AgentId, HumanCounts, MosquitoCounts, NodeId, Species};
    use arbo_env::{Environment, EnvironmentBuilder};

    use crate::{AgentError, HumanState, MosquitoState, PopulationBuilder, insertion_position};

    #[test]
    fn groups_get_contiguous_ids() {
        let counts = HumanCounts { susceptible: 2, exposed: 1, infected: 0, recovered: 3 };
        let humans = PopulationBuilder::humans(&counts)
            .build(&Environment::isolated(3), 1)
            .unwrap();
        let states: Vec<_> = humans.agents().iter().map(|a| a.state()).collect();
        assert_eq!(
            states,
            [
                HumanState::Susceptible,
                HumanState::Susceptible,
                HumanState::Exposed,
                HumanState::Recovered,
                HumanState::Recovered,
                HumanState::Recovered,
            ]
        );
        assert!(humans.agents().iter().all(|a| a.counter() == 0));
    }

    #[test]
    fn positions_are_seeded() {
        let env = Environment::isolated(50);
        let counts = MosquitoCounts { susceptible: 200, ..Default::default() };
        let a = PopulationBuilder::mosquitos(&counts).build(&env, 7).unwrap();
        let b = PopulationBuilder::mosquitos(&counts).build(&env, 7).unwrap();
        let c = PopulationBuilder::mosquitos(&counts).build(&env, 8).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.positions().all(|n| env.contains(n)));
        // 200 draws over 50 nodes should not all land on the same node.
        let first = a.get(AgentId(0)).position();
        assert!(a.positions().any(|n| n != first));
    }

    #[test]
    fn insertion_position_matches_build() {
        let env = Environment::isolated(9);
        let counts = HumanCounts { susceptible: 20, ..Default::default() };
        let humans = PopulationBuilder::humans(&counts).build(&env, 3).unwrap();
        for id in humans.ids() {
            assert_eq!(
                humans.get(id).position(),
                insertion_position(3, Species::Human, id, env.size())
            );
        }
    }

    #[test]
    fn placement_overrides_draw() {
        let mut b = EnvironmentBuilder::with_size(2);
        b.add_link(NodeId(0), NodeId(1));
        let env = b.build().unwrap();
        let mosquitos = PopulationBuilder::new()
            .group(MosquitoState::Infected, 1)
            .place(AgentId(0), NodeId(1))
            .place(AgentId(5), NodeId(0))
            .build(&env, 0)
            .unwrap();
        assert_eq!(mosquitos.get(AgentId(0)).position(), NodeId(1));
    }

    #[test]
    fn placement_outside_environment_rejected() {
        let result = PopulationBuilder::new()
            .group(HumanState::Susceptible, 2)
            .place(AgentId(1), NodeId(4))
            .build(&Environment::isolated(2), 0);
        match result {
            Err(AgentError::PositionOutOfRange { agent, node, size, .. }) => {
                assert_eq!(agent, AgentId(1));
                assert_eq!(node, NodeId(4));
                assert_eq!(size, 2);
            }
            other => panic!("expected PositionOutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn empty_environment() {
        let empty = Environment::isolated(0);
        let result = PopulationBuilder::new().group(HumanState::Susceptible, 1).build(&empty, 0);
        assert!(matches!(result, Err(AgentError::EmptyEnvironment { count: 1, .. })));

        // No agents: nothing to place.
        let none = PopulationBuilder::<HumanState>::new().build(&empty, 0).unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn unplaced_positions_are_invalid() {
        let p = PopulationBuilder::new().group(MosquitoState::Recovered, 3).build_unplaced().unwrap();
        assert_eq!(p.len(), 3);
        assert!(p.positions().all(|n| !n.is_valid()));
    }
}

#[cfg(test)]
mod population {
    use arbo_core::{HumanCounts, NodeId};
    use arbo_env::Environment;

    use crate::{HumanState, PopulationBuilder};

    fn sample() -> crate::Humans {
        let counts = HumanCounts { susceptible: 3, exposed: 2, infected: 4, recovered: 1 };
        PopulationBuilder::humans(&counts).build(&Environment::isolated(4), 11).unwrap()
    }

    #[test]
    fn count_by_state() {
        let counts = sample().count_by_state();
        assert_eq!(counts, [3, 2, 4, 1]);
    }

    #[test]
    fn range_is_clamped() {
        let p = sample();
        assert_eq!(p.range(2..5).len(), 3);
        assert_eq!(p.range(8..20).len(), 2);
        assert!(p.range(30..40).is_empty());
        // Ids 0..3 are Susceptible, 3..5 Exposed.
        assert_eq!(p.range(2..5)[0].state(), HumanState::Susceptible);
        assert_eq!(p.range(2..5)[1].state(), HumanState::Exposed);
    }

    #[test]
    fn check_positions_after_move() {
        let env = Environment::isolated(4);
        let mut p = sample();
        assert!(p.check_positions(&env).is_ok());
        p.agents_mut()[0].move_to(NodeId(9));
        assert!(p.check_positions(&env).is_err());
    }
}

#[cfg(test)]
mod transition {
    use arbo_core::{HumanThresholds, MosquitoThresholds, NodeId};

    use crate::{Agent, HumanState, MosquitoState, step};

    const HUMAN: HumanThresholds = HumanThresholds { exposed: 3, infected: 2, recovered: 4 };
    const MOSQUITO: MosquitoThresholds = MosquitoThresholds { infected: 1, recovered: 2 };

    #[test]
    fn exposed_becomes_infected_after_threshold() {
        let mut a = Agent::new(HumanState::Susceptible, NodeId(0));
        a.reset_to(HumanState::Exposed);
        assert!(!step(&HUMAN, &mut a));
        assert!(!step(&HUMAN, &mut a));
        assert_eq!(a.counter(), 2);
        assert!(step(&HUMAN, &mut a));
        assert_eq!(a.state(), HumanState::Infected);
        assert_eq!(a.counter(), 0);
    }

    #[test]
    fn susceptible_only_counts() {
        let mut a = Agent::new(HumanState::Susceptible, NodeId(0));
        for i in 1..=10 {
            assert!(!step(&HUMAN, &mut a));
            assert_eq!(a.counter(), i);
        }
    }

    #[test]
    fn contact_change_skips_one_tick() {
        let mut a = Agent::new(HumanState::Susceptible, NodeId(0));
        step(&HUMAN, &mut a);
        a.transmit_to(HumanState::Exposed);
        assert!(a.changed_this_cycle());
        assert_eq!(a.counter(), 0);

        // Same cycle's Transition: flag consumed, counter stays 0.
        assert!(!step(&HUMAN, &mut a));
        assert!(!a.changed_this_cycle());
        assert_eq!(a.counter(), 0);

        assert!(!step(&HUMAN, &mut a));
        assert_eq!(a.counter(), 1);
    }

    #[test]
    fn full_human_cycle_wanes_back_to_susceptible() {
        let mut a = Agent::new(HumanState::Exposed, NodeId(0));
        let mut seen = vec![a.state()];
        for _ in 0..(3 + 2 + 4) {
            if step(&HUMAN, &mut a) {
                seen.push(a.state());
            }
        }
        assert_eq!(
            seen,
            [HumanState::Exposed, HumanState::Infected, HumanState::Recovered, HumanState::Susceptible]
        );
    }

    #[test]
    fn mosquito_chain() {
        let mut m = Agent::new(MosquitoState::Infected, NodeId(0));
        assert!(step(&MOSQUITO, &mut m));
        assert_eq!(m.state(), MosquitoState::Recovered);
        assert!(!step(&MOSQUITO, &mut m));
        assert!(step(&MOSQUITO, &mut m));
        assert_eq!(m.state(), MosquitoState::Susceptible);
        assert!(!step(&MOSQUITO, &mut m));
        assert_eq!(m.state(), MosquitoState::Susceptible);
    }
}
