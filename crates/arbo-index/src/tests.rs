//! Unit tests for arbo-index.

#[cfg(test)]
mod buckets {
    use arbo_core::{AgentId, NodeId};

    use crate::{Buckets, CompactIndex};

    fn nodes(ids: &[u32]) -> Vec<NodeId> {
        ids.iter().copied().map(NodeId).collect()
    }

    #[test]
    fn counting_sort_layout() {
        let positions = nodes(&[2, 0, 2, 1, 2, 0]);
        let index = CompactIndex::new(4, positions.iter().copied());
        let b = index.buckets();
        assert_eq!(b.nodes(), 4);
        assert_eq!(b.at(NodeId(0)), &[AgentId(1), AgentId(5)]);
        assert_eq!(b.at(NodeId(1)), &[AgentId(3)]);
        assert_eq!(b.at(NodeId(2)), &[AgentId(0), AgentId(2), AgentId(4)]);
        assert!(b.at(NodeId(3)).is_empty());
        assert!(b.at(NodeId(9)).is_empty());
        assert_eq!(b.len(), 6);
        assert_eq!(b.occupied(), 3);
    }

    #[test]
    fn rebuild_replaces_layout() {
        let mut index = CompactIndex::new(3, nodes(&[0, 0, 0]));
        index.rebuild(3, nodes(&[1, 2, 1]));
        let b = index.buckets();
        assert!(b.at(NodeId(0)).is_empty());
        assert_eq!(b.at(NodeId(1)), &[AgentId(0), AgentId(2)]);
        assert!(b.contains(NodeId(2), AgentId(1)));
        assert!(!b.contains(NodeId(2), AgentId(0)));
    }

    #[test]
    fn out_of_range_positions_dropped() {
        let index = CompactIndex::new(2, nodes(&[0, 7, 1]));
        assert_eq!(index.buckets().len(), 2);
    }

    #[test]
    fn from_lists() {
        let b = Buckets::from_lists(vec![vec![], vec![AgentId(4)], vec![AgentId(1), AgentId(2)]]);
        assert_eq!(b.nodes(), 3);
        assert_eq!(b.at(NodeId(2)), &[AgentId(1), AgentId(2)]);
        assert_eq!(Buckets::empty(5).nodes(), 5);
    }
}

#[cfg(test)]
mod dense {
    use arbo_core::{AgentId, NodeId};
    use arbo_sched::{CpuScheduler, Scheduler, SerialScheduler};

    use crate::{DenseSlots, IndexError};

    #[test]
    fn relocate_moves_one_slot() {
        let mut slots = DenseSlots::new(3, 4, usize::MAX).unwrap();
        slots.fill([0, 1, 2, 0].map(NodeId));
        slots.relocate(AgentId(0), NodeId(0), NodeId(2));
        assert!(!slots.contains(NodeId(0), AgentId(0)));
        assert!(slots.contains(NodeId(2), AgentId(0)));

        let b = slots.compact(&SerialScheduler);
        assert_eq!(b.at(NodeId(0)), &[AgentId(3)]);
        assert_eq!(b.at(NodeId(2)), &[AgentId(0), AgentId(2)]);
    }

    #[test]
    fn relocate_to_same_node_keeps_slot() {
        let mut slots = DenseSlots::new(2, 1, usize::MAX).unwrap();
        slots.fill([NodeId(1)]);
        slots.relocate(AgentId(0), NodeId(1), NodeId(1));
        assert!(slots.contains(NodeId(1), AgentId(0)));
    }

    #[test]
    fn parallel_relocation() {
        let n = 500usize;
        let mut slots = DenseSlots::new(10, n, usize::MAX).unwrap();
        slots.fill((0..n).map(|i| NodeId((i % 10) as u32)));

        let sched = CpuScheduler::new(Some(4)).unwrap();
        let mut ids: Vec<u32> = (0..n as u32).collect();
        sched.for_each_mut(&mut ids, |i, _| {
            let from = NodeId((i % 10) as u32);
            let to = NodeId(((i + 3) % 10) as u32);
            slots.relocate(AgentId(i as u32), from, to);
        });

        let b = slots.compact(&sched);
        assert_eq!(b.len(), n);
        for i in 0..n {
            assert!(b.contains(NodeId(((i + 3) % 10) as u32), AgentId(i as u32)));
        }
    }

    #[test]
    fn slot_limit() {
        match DenseSlots::new(1000, 1000, 999_999) {
            Err(IndexError::TooLarge { nodes, population, limit }) => {
                assert_eq!((nodes, population, limit), (1000, 1000, 999_999));
            }
            Ok(_) => panic!("expected TooLarge"),
            Err(e) => panic!("unexpected error {e}"),
        }
        assert!(DenseSlots::new(usize::MAX, 2, usize::MAX).is_err());
    }
}

#[cfg(test)]
mod strategies {
    use arbo_core::NodeId;
    use arbo_sched::SerialScheduler;

    use crate::{IndexStrategy, PopulationIndex, SpatialIndex};

    fn nodes(ids: &[u32]) -> Vec<NodeId> {
        ids.iter().copied().map(NodeId).collect()
    }

    #[test]
    fn both_strategies_agree() {
        let sched = SerialScheduler;
        let before = nodes(&[3, 1, 4, 1, 0, 2]);
        let after = nodes(&[0, 0, 4, 2, 2, 3]);

        let mut dense =
            PopulationIndex::new(IndexStrategy::Dense, 5, before.iter().copied(), usize::MAX, &sched).unwrap();
        let mut compact =
            PopulationIndex::new(IndexStrategy::Compacted, 5, before.iter().copied(), 0, &sched).unwrap();
        assert_eq!(dense.buckets(), compact.buckets());

        if let Some(slots) = dense.slots() {
            for (i, (&from, &to)) in before.iter().zip(&after).enumerate() {
                slots.relocate(arbo_core::AgentId(i as u32), from, to);
            }
        }
        dense.refresh(&sched, after.iter().copied());
        compact.refresh(&sched, after.iter().copied());
        assert_eq!(dense.buckets(), compact.buckets());
        assert!(dense.verify(after.iter().copied()).is_ok());
        assert!(compact.verify(after.iter().copied()).is_ok());
    }

    #[test]
    fn verify_catches_stale_buckets() {
        let sched = SerialScheduler;
        let index = PopulationIndex::new(IndexStrategy::Compacted, 3, nodes(&[0, 1]).into_iter(), 0, &sched).unwrap();
        assert!(index.verify(nodes(&[0, 1])).is_ok());
        assert!(index.verify(nodes(&[0, 2])).is_err());
        // Fewer positions than members: a surplus entry.
        assert!(index.verify(nodes(&[0])).is_err());
    }

    #[test]
    fn dense_verify_catches_unrelocated_slot() {
        let sched = SerialScheduler;
        let mut index =
            PopulationIndex::new(IndexStrategy::Dense, 3, nodes(&[0, 1]).into_iter(), usize::MAX, &sched).unwrap();
        // Positions changed but slots were never relocated.
        index.refresh(&sched, nodes(&[2, 1]));
        assert!(index.verify(nodes(&[2, 1])).is_err());
    }

    #[test]
    fn spatial_index_both_populations() {
        let sched = SerialScheduler;
        let mut index = SpatialIndex::new(
            IndexStrategy::Compacted,
            4,
            nodes(&[0, 1]).into_iter(),
            nodes(&[1, 1, 3]).into_iter(),
            0,
            &sched,
        )
        .unwrap();
        assert_eq!(index.strategy(), IndexStrategy::Compacted);
        assert_eq!(index.mosquitos.buckets().at(NodeId(1)).len(), 2);

        index.refresh(&sched, nodes(&[3, 3]), nodes(&[0, 0, 0]));
        assert!(index.verify(nodes(&[3, 3]), nodes(&[0, 0, 0])).is_ok());
        assert_eq!(index.humans.buckets().at(NodeId(3)).len(), 2);
    }

    #[test]
    fn strategy_from_str() {
        assert_eq!("dense".parse::<IndexStrategy>().unwrap(), IndexStrategy::Dense);
        assert_eq!("Compacted".parse::<IndexStrategy>().unwrap(), IndexStrategy::Compacted);
        assert!("sparse".parse::<IndexStrategy>().is_err());
        assert_eq!(IndexStrategy::default(), IndexStrategy::Compacted);
    }
}
