//! Unit tests for arbo-sched.
//!
//! Every backend must give the same answer as the serial loop.

#[cfg(test)]
mod backends {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::{AcceleratorScheduler, CpuScheduler, Scheduler, SerialScheduler};

    fn check<S: Scheduler>(s: &S) {
        // for_each_mut sees each index once, with the right element.
        let mut items: Vec<usize> = (0..1000).collect();
        let calls = AtomicUsize::new(0);
        s.for_each_mut(&mut items, |i, x| {
            assert_eq!(*x, i);
            *x = i * 2;
            calls.fetch_add(1, Ordering::Relaxed);
        });
        assert_eq!(calls.into_inner(), 1000);
        assert!(items.iter().enumerate().all(|(i, &x)| x == i * 2));

        // map keeps index order.
        let squares = s.map(517, |i| i * i);
        assert_eq!(squares.len(), 517);
        assert!(squares.iter().enumerate().all(|(i, &x)| x == i * i));

        // fold with a per-index contribution.
        let sum = s.fold(&items, || 0usize, |acc, i, &x| acc + x + i, |a, b| a + b);
        assert_eq!(sum, (0..1000).map(|i| 3 * i).sum::<usize>());

        // Empty inputs.
        let mut none: Vec<u8> = Vec::new();
        s.for_each_mut(&mut none, |_, _| panic!("called on empty slice"));
        assert!(s.map(0, |i| i).is_empty());
        assert_eq!(s.fold(&none, || 7u32, |a, _, _| a + 1, |a, b| a + b), 7);

        let (a, b) = s.join(|| 1, || "two");
        assert_eq!((a, b), (1, "two"));
    }

    #[test]
    fn serial() {
        check(&SerialScheduler);
    }

    #[test]
    fn cpu() {
        let s = CpuScheduler::new(Some(3)).unwrap();
        assert_eq!(s.workers(), 3);
        check(&s);
    }

    #[test]
    fn accelerator() {
        let s = AcceleratorScheduler::new(Some(2), 64).unwrap();
        assert_eq!(s.grid(1000), 16);
        check(&s);
    }

    #[test]
    fn accelerator_rejects_zero_block() {
        assert!(matches!(
            AcceleratorScheduler::new(Some(1), 0),
            Err(crate::SchedError::ZeroBlock)
        ));
    }
}

#[cfg(test)]
mod dispatch {
    use arbo_core::Phase;

    use crate::{Backend, BackendPlan, Dispatcher, PoolOptions, Scheduler};

    #[test]
    fn plan_routes_phases() {
        let plan = BackendPlan {
            contact: Backend::Accelerator,
            output: Backend::Serial,
            ..BackendPlan::uniform(Backend::Cpu)
        };
        let options = PoolOptions { num_threads: Some(2), accelerator_block: 32 };
        let d = Dispatcher::new(plan, options).unwrap();
        assert_eq!(d.for_phase(Phase::Movement).backend(), Backend::Cpu);
        assert_eq!(d.for_phase(Phase::Contact).backend(), Backend::Accelerator);
        assert_eq!(d.for_phase(Phase::Output).backend(), Backend::Serial);
        assert_eq!(d.for_phase(Phase::Contact).map(5, |i| i + 1), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn serial_dispatcher() {
        let d = Dispatcher::serial();
        for phase in Phase::CYCLE {
            assert_eq!(d.for_phase(phase).backend(), Backend::Serial);
            assert_eq!(d.for_phase(phase).workers(), 1);
        }
    }

    #[test]
    fn backend_from_str() {
        assert_eq!("CPU".parse::<Backend>().unwrap(), Backend::Cpu);
        assert_eq!("accelerator".parse::<Backend>().unwrap(), Backend::Accelerator);
        assert_eq!(" serial ".parse::<Backend>().unwrap(), Backend::Serial);
        assert!("opencl".parse::<Backend>().is_err());
        assert_eq!(Backend::Accelerator.to_string(), "accelerator");
    }
}
