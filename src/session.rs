use crate::{Config, Error, Grid, Result, Scheduler, SchedulerState, Snapshot};
use tokio::{
    sync::{mpsc, oneshot, watch},
    time::{sleep_until, Instant},
};
use tracing::{debug, warn};

enum Command {
    Run,
    Pause,
    Reset,
    StepOnce,
    Toggle { x: i64, y: i64 },
    Load(Grid),
    Shutdown,
}

struct Request {
    command: Command,
    reply: oneshot::Sender<Result<Snapshot>>,
}

/// Handle to a board simulated on its own tokio task.
///
/// The task owns the [`Scheduler`] and handles one event at a time: either a
/// command from this handle or the wake-up of the pending step. The wake-up is
/// rebuilt from [`Scheduler::next_deadline`] after every event, so a step
/// dropped by `pause` or `reset` never fires.
///
/// Every command resolves to the snapshot taken right after it was applied.
pub struct Session {
    commands: mpsc::Sender<Request>,
    snapshots: watch::Receiver<Snapshot>,
}

impl Session {
    const COMMAND_BUFFER: usize = 16;

    /// Starts the simulation task; must be called from within a tokio runtime.
    pub fn spawn(config: Config, seed: Option<Grid>) -> Result<Self> {
        let mut scheduler = Scheduler::new(config)?;
        if let Some(grid) = seed {
            scheduler.load(grid)?;
        }
        let (commands, requests) = mpsc::channel(Self::COMMAND_BUFFER);
        let (publisher, snapshots) = watch::channel(scheduler.snapshot());
        tokio::spawn(drive(scheduler, requests, publisher));
        Ok(Self {
            commands,
            snapshots,
        })
    }

    async fn request(&self, command: Command) -> Result<Snapshot> {
        let (reply, response) = oneshot::channel();
        self.commands
            .send(Request { command, reply })
            .await
            .map_err(|_| Error::SessionClosed)?;
        response.await.map_err(|_| Error::SessionClosed)?
    }

    pub async fn run(&self) -> Result<Snapshot> {
        self.request(Command::Run).await
    }

    pub async fn pause(&self) -> Result<Snapshot> {
        self.request(Command::Pause).await
    }

    pub async fn reset(&self) -> Result<Snapshot> {
        self.request(Command::Reset).await
    }

    pub async fn step_once(&self) -> Result<Snapshot> {
        self.request(Command::StepOnce).await
    }

    pub async fn toggle_cell(&self, x: i64, y: i64) -> Result<Snapshot> {
        self.request(Command::Toggle { x, y }).await
    }

    pub async fn load(&self, grid: Grid) -> Result<Snapshot> {
        self.request(Command::Load(grid)).await
    }

    /// Stops the task; later commands fail with [`Error::SessionClosed`].
    pub async fn shutdown(&self) -> Result<Snapshot> {
        self.request(Command::Shutdown).await
    }

    /// Latest published snapshot.
    pub fn snapshot(&self) -> Snapshot {
        self.snapshots.borrow().clone()
    }

    pub fn current_grid(&self) -> Grid {
        self.snapshots.borrow().current.clone()
    }

    pub fn previous_grid(&self) -> Grid {
        self.snapshots.borrow().previous.clone()
    }

    pub fn generation(&self) -> u64 {
        self.snapshots.borrow().generation
    }

    pub fn state(&self) -> SchedulerState {
        self.snapshots.borrow().state
    }

    /// Receiver notified after every event handled by the task.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.snapshots.clone()
    }

    /// Waits until a published snapshot satisfies `predicate`.
    pub async fn wait_until(&self, predicate: impl FnMut(&Snapshot) -> bool) -> Result<Snapshot> {
        let mut snapshots = self.snapshots.clone();
        let snapshot = snapshots
            .wait_for(predicate)
            .await
            .map_err(|_| Error::SessionClosed)?;
        Ok((*snapshot).clone())
    }

    pub async fn wait_for_state(&self, state: SchedulerState) -> Result<Snapshot> {
        self.wait_until(|snapshot| snapshot.state == state).await
    }
}

async fn drive(
    mut scheduler: Scheduler,
    mut requests: mpsc::Receiver<Request>,
    publisher: watch::Sender<Snapshot>,
) {
    loop {
        let deadline = scheduler.next_deadline();
        let wake = async move {
            match deadline {
                Some(due) => sleep_until(due).await,
                None => std::future::pending().await,
            }
        };

        tokio::select! {
            biased;

            request = requests.recv() => {
                let Some(Request { command, reply }) = request else {
                    break;
                };
                let shutdown = matches!(command, Command::Shutdown);
                let result = apply(&mut scheduler, command);
                let snapshot = scheduler.snapshot();
                publisher.send_replace(snapshot.clone());
                let _ = reply.send(result.map(|()| snapshot));
                if shutdown {
                    break;
                }
            }
            () = wake => {
                if scheduler.poll(Instant::now()).is_some() {
                    publisher.send_replace(scheduler.snapshot());
                }
            }
        }
    }
    debug!(generation = scheduler.generation(), "session closed");
}

fn apply(scheduler: &mut Scheduler, command: Command) -> Result<()> {
    match command {
        Command::Run => {
            scheduler.run(Instant::now());
        }
        Command::Pause => scheduler.pause(),
        Command::Reset => scheduler.reset(),
        Command::StepOnce => {
            scheduler.step_once();
        }
        Command::Toggle { x, y } => {
            if let Err(err) = scheduler.toggle_cell(x, y) {
                warn!(%err, "rejected toggle");
                return Err(err);
            }
        }
        Command::Load(grid) => scheduler.load(grid)?,
        Command::Shutdown => {}
    }
    Ok(())
}
