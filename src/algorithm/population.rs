//! Walker population driver
//!
//! Owns the registry, the walkers and one path recorder per walker. Stepping
//! is synchronous and in creation order with no snapshot isolation: a walker
//! processed later in a round already sees the points accepted earlier in the
//! same round. That ordering is part of the reproducible output.

use crate::algorithm::path::PathRecorder;
use crate::algorithm::walker::{StepOutcome, Walker};
use crate::io::configuration::SimulationConfig;
use crate::io::error::Result;
use crate::spatial::SpatialRegistry;

/// Counts of what happened during one population step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepSummary {
    /// Walkers that accepted a candidate
    pub moved: usize,
    /// Walkers that switched to their reverse stroke
    pub reversed: usize,
    /// Walkers that became inactive
    pub finished: usize,
}

/// Scene of walkers sharing one spatial registry
#[derive(Debug, Clone)]
pub struct WalkerPopulation {
    registry: SpatialRegistry,
    walkers: Vec<Walker>,
    paths: Vec<PathRecorder>,
    repulsion: f64,
    steps_taken: usize,
}

impl WalkerPopulation {
    /// Create an empty population for `config`
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the configuration fails validation
    pub fn new(config: &SimulationConfig) -> Result<Self> {
        config.validate()?;
        let registry = SpatialRegistry::new(config.domain(), config.bin_size, config.repulsion)?;
        Ok(Self::with_registry(registry, config.repulsion))
    }

    /// Create an empty population around an existing registry
    pub const fn with_registry(registry: SpatialRegistry, repulsion: f64) -> Self {
        Self {
            registry,
            walkers: Vec::new(),
            paths: Vec::new(),
            repulsion,
            steps_taken: 0,
        }
    }

    /// Append a walker, register its spawn point and give it an empty path
    ///
    /// Returns the walker's index.
    pub fn add_walker(&mut self, mut walker: Walker) -> usize {
        let id = self.registry.register_point(walker.position());
        walker.anchor(id);
        self.walkers.push(walker);
        self.paths.push(PathRecorder::new());
        self.walkers.len() - 1
    }

    /// Advance every walker once, in creation order
    ///
    /// Does nothing once no walker is active.
    pub fn step(&mut self) -> StepSummary {
        let mut summary = StepSummary::default();
        if !self.has_active() {
            return summary;
        }

        for (walker, path) in self.walkers.iter_mut().zip(self.paths.iter_mut()) {
            match walker.step(&mut self.registry, path, self.repulsion) {
                StepOutcome::Moved => summary.moved += 1,
                StepOutcome::Reversed => summary.reversed += 1,
                StepOutcome::Finished => summary.finished += 1,
                StepOutcome::Idle => {}
            }
        }
        self.steps_taken += 1;
        summary
    }

    /// Run up to `count` steps, stopping early once nothing is active
    ///
    /// Returns the number of steps actually run.
    pub fn step_batch(&mut self, count: usize) -> usize {
        for executed in 0..count {
            if !self.has_active() {
                return executed;
            }
            self.step();
        }
        count
    }

    /// Step until no walker is active or `limit` steps have run
    ///
    /// Returns the number of steps run by this call.
    pub fn run_to_completion(&mut self, limit: Option<usize>) -> usize {
        let mut executed = 0;
        while self.has_active() && limit.is_none_or(|limit| executed < limit) {
            self.step();
            executed += 1;
        }
        executed
    }

    /// Whether any walker can still move
    pub fn has_active(&self) -> bool {
        self.walkers.iter().any(Walker::is_active)
    }

    /// Number of walkers that can still move
    pub fn active_count(&self) -> usize {
        self.walkers.iter().filter(|walker| walker.is_active()).count()
    }

    /// Number of walkers
    pub const fn len(&self) -> usize {
        self.walkers.len()
    }

    /// Whether the population has no walkers
    pub const fn is_empty(&self) -> bool {
        self.walkers.is_empty()
    }

    /// Walkers in creation order
    pub const fn walkers(&self) -> &[Walker] {
        self.walkers.as_slice()
    }

    /// Path recorders, indexed like [`Self::walkers`]
    pub const fn paths(&self) -> &[PathRecorder] {
        self.paths.as_slice()
    }

    /// Walkers paired with their paths
    pub fn trails(&self) -> impl Iterator<Item = (&Walker, &PathRecorder)> {
        self.walkers.iter().zip(self.paths.iter())
    }

    /// The shared spatial registry
    pub const fn registry(&self) -> &SpatialRegistry {
        &self.registry
    }

    /// Repulsion threshold used for every query
    pub const fn repulsion(&self) -> f64 {
        self.repulsion
    }

    /// Number of population steps that advanced at least one walker
    pub const fn steps_taken(&self) -> usize {
        self.steps_taken
    }
}
