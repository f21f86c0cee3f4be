use std::sync::{Arc, Mutex, MutexGuard};

/// Lifecycle phase of the supervised gateway process.
///
/// Transitions: `NotStarted → Starting → Ready → Exited/Failed → Starting …`.
/// Only [`GatewayPhase::Ready`] answers health probes positively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GatewayPhase {
    #[default]
    NotStarted,
    Starting,
    Ready,
    Exited,
    Failed,
}

/// Shared gateway state: written by the supervisor, read by the HTTP
/// handlers and the shutdown coordinator.
///
/// Each spawn gets a generation number so that a readiness timer armed for a
/// dead incarnation can never validate a newer child.
#[derive(Clone, Default)]
pub struct GatewayState {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    phase: GatewayPhase,
    generation: u64,
    pid: Option<u32>,
}

impl GatewayState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a fresh spawn and returns its generation number.
    pub fn begin_spawn(&self, pid: Option<u32>) -> u64 {
        let mut inner = self.lock();
        inner.generation += 1;
        inner.phase = GatewayPhase::Starting;
        inner.pid = pid;
        inner.generation
    }

    /// Promotes `Starting` to `Ready` for the given generation. Returns
    /// false (and changes nothing) if the generation has been superseded or
    /// the child already exited.
    pub fn mark_ready(&self, generation: u64) -> bool {
        let mut inner = self.lock();
        if inner.generation == generation && inner.phase == GatewayPhase::Starting {
            inner.phase = GatewayPhase::Ready;
            true
        } else {
            false
        }
    }

    /// Clears readiness after the child of the given generation exited.
    pub fn mark_exited(&self, generation: u64) {
        let mut inner = self.lock();
        if inner.generation == generation {
            inner.phase = GatewayPhase::Exited;
            inner.pid = None;
        }
    }

    /// Clears readiness after a spawn failure.
    pub fn mark_failed(&self) {
        let mut inner = self.lock();
        inner.phase = GatewayPhase::Failed;
        inner.pid = None;
    }

    pub fn is_ready(&self) -> bool {
        self.lock().phase == GatewayPhase::Ready
    }

    pub fn phase(&self) -> GatewayPhase {
        self.lock().phase
    }

    pub fn generation(&self) -> u64 {
        self.lock().generation
    }

    /// Pid of the live child, if any.
    pub fn pid(&self) -> Option<u32> {
        self.lock().pid
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // A poisoned lock only means a panicking reader; the state itself
        // stays coherent.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
