use crate::{step, Config, Error, Grid, Result};
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info};

/// Lifecycle of the step loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SchedulerState {
    /// Nothing scheduled since creation, reset, load or an edit of a stable field.
    Idle,
    /// A step is pending.
    Running,
    /// The last step changed nothing; stays here until reset or an edit.
    StoppedStable,
    /// Paused by the user; the pending step was dropped.
    Cancelled,
}

/// What a single generation did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepOutcome {
    pub changed: bool,
    /// Generation counter after the step.
    pub generation: u64,
    pub population: usize,
}

/// Read-only view handed to renderers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub current: Grid,
    pub previous: Grid,
    pub generation: u64,
    pub state: SchedulerState,
}

/// Drives generations at a fixed delay.
///
/// The scheduler does not own a clock: every time-dependent call takes `now`,
/// and the owner is expected to call [`Scheduler::poll`] once
/// [`Scheduler::next_deadline`] has passed. There is at most one pending step,
/// and it exists exactly while the state is [`SchedulerState::Running`].
pub struct Scheduler {
    config: Config,
    current: Grid,
    previous: Grid,
    generation: u64,
    state: SchedulerState,
    pending_due: Option<Instant>,
}

impl Scheduler {
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let blank = Grid::blank(config.size)?;
        Ok(Self {
            config,
            current: blank.clone(),
            previous: blank,
            generation: 0,
            state: SchedulerState::Idle,
            pending_due: None,
        })
    }

    pub fn config(&self) -> Config {
        self.config
    }

    pub fn current_grid(&self) -> &Grid {
        &self.current
    }

    /// Field as it was right before the most recent step.
    pub fn previous_grid(&self) -> &Grid {
        &self.previous
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SchedulerState::Running
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            current: self.current.clone(),
            previous: self.previous.clone(),
            generation: self.generation,
            state: self.state,
        }
    }

    /// When the pending step is due, if there is one.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending_due
    }

    /// Time left until the pending step, zero if it is overdue.
    pub fn time_until_next_step(&self, now: Instant) -> Option<Duration> {
        self.pending_due.map(|due| due.saturating_duration_since(now))
    }

    /// Starts the loop with an immediate step.
    ///
    /// Returns `None` without doing anything if the loop is already running.
    pub fn run(&mut self, now: Instant) -> Option<StepOutcome> {
        if self.is_running() {
            return None;
        }
        Some(self.step_and_schedule(now))
    }

    /// Performs the pending step if it is due.
    pub fn poll(&mut self, now: Instant) -> Option<StepOutcome> {
        match self.pending_due {
            Some(due) if now >= due => {
                self.pending_due = None;
                Some(self.step_and_schedule(now))
            }
            _ => None,
        }
    }

    /// Drops the pending step. Does nothing unless running.
    pub fn pause(&mut self) {
        if !self.is_running() {
            return;
        }
        self.pending_due = None;
        self.state = SchedulerState::Cancelled;
        info!(generation = self.generation, "simulation paused");
    }

    /// Back to a blank field at generation 0.
    pub fn reset(&mut self) {
        self.pending_due = None;
        self.state = SchedulerState::Idle;
        self.generation = 0;
        // size was validated by `new`
        let size = self.config.size;
        self.current = Grid::from_buffer(size, vec![false; size * size]);
        self.previous = self.current.clone();
        info!(size, "simulation reset");
    }

    /// One generation without scheduling another; refused while running.
    pub fn step_once(&mut self) -> Option<StepOutcome> {
        if self.is_running() {
            return None;
        }
        let outcome = self.advance();
        self.state = if outcome.changed {
            SchedulerState::Idle
        } else {
            SchedulerState::StoppedStable
        };
        Some(outcome)
    }

    /// Flips one cell of the current field.
    ///
    /// Allowed in every state; a pending step keeps its deadline and will see
    /// the edit. The previous field and the generation counter are untouched.
    pub fn toggle_cell(&mut self, x: i64, y: i64) -> Result<()> {
        self.current = self.current.toggled(x, y)?;
        if self.state == SchedulerState::StoppedStable {
            self.state = SchedulerState::Idle;
        }
        Ok(())
    }

    /// Replaces the field with a new seed and starts over from generation 0.
    pub fn load(&mut self, grid: Grid) -> Result<()> {
        if grid.size() != self.config.size {
            return Err(Error::SizeMismatch {
                expected: self.config.size,
                actual: grid.size(),
            });
        }
        self.reset();
        info!(population = grid.population(), "seed loaded");
        self.current = grid;
        Ok(())
    }

    fn advance(&mut self) -> StepOutcome {
        let transition = step(&self.current);
        self.previous = self.current.clone();
        if transition.changed {
            self.current = transition.grid;
            self.generation += 1;
        }
        let outcome = StepOutcome {
            changed: transition.changed,
            generation: self.generation,
            population: self.current.population(),
        };
        debug!(
            generation = outcome.generation,
            population = outcome.population,
            changed = outcome.changed,
            "step"
        );
        outcome
    }

    fn step_and_schedule(&mut self, now: Instant) -> StepOutcome {
        let outcome = self.advance();
        if outcome.changed {
            self.state = SchedulerState::Running;
            self.pending_due = Some(now + self.config.step_delay);
        } else {
            self.state = SchedulerState::StoppedStable;
            self.pending_due = None;
            info!(
                generation = self.generation,
                population = outcome.population,
                "reached a stable configuration"
            );
        }
        outcome
    }
}
