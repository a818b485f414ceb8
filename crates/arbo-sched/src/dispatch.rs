//! Per-phase backend selection.

use arbo_core::Phase;

use crate::{
    AcceleratorScheduler, Backend, CpuScheduler, DEFAULT_BLOCK, SchedResult, Scheduler,
    SerialScheduler,
};

/// Backend used by each phase.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct BackendPlan {
    pub insertion:  Backend,
    pub movement:   Backend,
    pub contact:    Backend,
    pub transition: Backend,
    pub output:     Backend,
}

impl BackendPlan {
    /// Every phase on `backend`.
    pub const fn uniform(backend: Backend) -> Self {
        Self {
            insertion:  backend,
            movement:   backend,
            contact:    backend,
            transition: backend,
            output:     backend,
        }
    }

    pub fn backend_for(&self, phase: Phase) -> Backend {
        match phase {
            Phase::Insertion  => self.insertion,
            Phase::Movement   => self.movement,
            Phase::Contact    => self.contact,
            Phase::Transition => self.transition,
            Phase::Output     => self.output,
        }
    }

    fn uses(&self, backend: Backend) -> bool {
        [self.insertion, self.movement, self.contact, self.transition, self.output].contains(&backend)
    }
}

impl Default for BackendPlan {
    fn default() -> Self {
        Self::uniform(Backend::Cpu)
    }
}

/// Pool sizing shared by the pooled backends.
#[derive(Copy, Clone, Debug)]
pub struct PoolOptions {
    /// Worker threads per pool; `None` = one per logical core.
    pub num_threads: Option<usize>,
    /// Elements per accelerator block.
    pub accelerator_block: usize,
}

impl Default for PoolOptions {
    fn default() -> Self {
        Self { num_threads: None, accelerator_block: DEFAULT_BLOCK }
    }
}

// ── Dispatcher ────────────────────────────────────────────────────────────────

/// Owns one instance of every backend the plan uses.
pub struct Dispatcher {
    plan:        BackendPlan,
    serial:      SerialScheduler,
    cpu:         Option<CpuScheduler>,
    accelerator: Option<AcceleratorScheduler>,
}

impl Dispatcher {
    /// Build only the pools the plan needs.
    pub fn new(plan: BackendPlan, options: PoolOptions) -> SchedResult<Self> {
        let cpu = plan
            .uses(Backend::Cpu)
            .then(|| CpuScheduler::new(options.num_threads))
            .transpose()?;
        let accelerator = plan
            .uses(Backend::Accelerator)
            .then(|| AcceleratorScheduler::new(options.num_threads, options.accelerator_block))
            .transpose()?;
        Ok(Self { plan, serial: SerialScheduler, cpu, accelerator })
    }

    /// All phases on the calling thread; never fails.
    pub fn serial() -> Self {
        Self {
            plan:        BackendPlan::uniform(Backend::Serial),
            serial:      SerialScheduler,
            cpu:         None,
            accelerator: None,
        }
    }

    pub fn plan(&self) -> BackendPlan {
        self.plan
    }

    /// Scheduler for `phase`.
    pub fn for_phase(&self, phase: Phase) -> Dispatch<'_> {
        match self.plan.backend_for(phase) {
            Backend::Cpu => match &self.cpu {
                Some(cpu) => Dispatch::Cpu(cpu),
                None => Dispatch::Serial(&self.serial),
            },
            Backend::Accelerator => match &self.accelerator {
                Some(acc) => Dispatch::Accelerator(acc),
                None => Dispatch::Serial(&self.serial),
            },
            Backend::Serial => Dispatch::Serial(&self.serial),
        }
    }
}

// ── Dispatch ──────────────────────────────────────────────────────────────────

/// Borrowed backend chosen for one phase.
#[derive(Copy, Clone)]
pub enum Dispatch<'a> {
    Serial(&'a SerialScheduler),
    Cpu(&'a CpuScheduler),
    Accelerator(&'a AcceleratorScheduler),
}

macro_rules! delegate {
    ($self:ident, $s:ident => $call:expr) => {
        match $self {
            Dispatch::Serial($s)      => $call,
            Dispatch::Cpu($s)         => $call,
            Dispatch::Accelerator($s) => $call,
        }
    };
}

impl Scheduler for Dispatch<'_> {
    fn backend(&self) -> Backend {
        delegate!(self, s => s.backend())
    }

    fn workers(&self) -> usize {
        delegate!(self, s => s.workers())
    }

    fn for_each_mut<T, F>(&self, items: &mut [T], f: F)
    where
        T: Send,
        F: Fn(usize, &mut T) + Sync,
    {
        delegate!(self, s => s.for_each_mut(items, f))
    }

    fn map<T, F>(&self, count: usize, f: F) -> Vec<T>
    where
        T: Send,
        F: Fn(usize) -> T + Sync,
    {
        delegate!(self, s => s.map(count, f))
    }

    fn fold<T, A, I, F, R>(&self, items: &[T], identity: I, fold: F, reduce: R) -> A
    where
        T: Sync,
        A: Send,
        I: Fn() -> A + Sync,
        F: Fn(A, usize, &T) -> A + Sync,
        R: Fn(A, A) -> A + Sync,
    {
        delegate!(self, s => s.fold(items, identity, fold, reduce))
    }

    fn join<A, B, RA, RB>(&self, a: A, b: B) -> (RA, RB)
    where
        A: FnOnce() -> RA + Send,
        B: FnOnce() -> RB + Send,
        RA: Send,
        RB: Send,
    {
        delegate!(self, s => s.join(a, b))
    }
}
