//! Runs a board in the terminal, printing every generation until it settles.

use anyhow::{bail, Context as _};
use clap::Parser;
use life_board::{Config, Grid, Pattern, SchedulerState, Session};
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Side length of the board
    #[arg(long, default_value_t = Config::DEFAULT_SIZE)]
    size: usize,

    /// Delay between generations in milliseconds
    #[arg(long, default_value_t = 1000)]
    delay_ms: u64,

    /// Preset to start from (block, beehive, blinker, toad, beacon, glider, r-pentomino)
    #[arg(long, conflicts_with = "random")]
    pattern: Option<String>,

    /// Start from a random board
    #[arg(long)]
    random: bool,

    /// Seed for `--random`
    #[arg(long, requires = "random")]
    seed: Option<u64>,

    /// Probability of a cell being alive for `--random`
    #[arg(long, default_value_t = 0.3)]
    fill_rate: f64,

    /// Pause after this many generations; oscillators never settle otherwise
    #[arg(long)]
    max_generations: Option<u64>,
}

fn seed(cli: &Cli) -> anyhow::Result<Grid> {
    if cli.random {
        return Grid::random(cli.size, cli.seed, cli.fill_rate).context("invalid random board");
    }
    let name = cli.pattern.as_deref().unwrap_or("glider");
    let pattern = Pattern::by_name(name)?;
    pattern.centered(cli.size).with_context(|| {
        format!(
            "{} does not fit a {}x{} board",
            pattern.name, cli.size, cli.size
        )
    })
}

fn print_board(generation: u64, state: SchedulerState, grid: &Grid) {
    println!(
        "generation {} ({:?}, population {})\n{}\n",
        generation,
        state,
        grid.population(),
        grid
    );
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    life_board::logging::init("info");

    let cli = Cli::parse();
    let config = Config::new(cli.size, Duration::from_millis(cli.delay_ms))
        .context("invalid board configuration")?;
    let session = Session::spawn(config, Some(seed(&cli)?))?;
    let mut snapshots = session.subscribe();

    let first = session.run().await?;
    print_board(first.generation, first.state, &first.current);
    let mut last_generation = first.generation;

    loop {
        let snapshot = snapshots.borrow_and_update().clone();
        if snapshot.generation != last_generation {
            print_board(snapshot.generation, snapshot.state, &snapshot.current);
            last_generation = snapshot.generation;
        }
        match snapshot.state {
            SchedulerState::Running => {}
            SchedulerState::StoppedStable => {
                println!("stable after {} generations", snapshot.generation);
                break;
            }
            state => bail!("simulation left the running state unexpectedly: {:?}", state),
        }
        if cli
            .max_generations
            .is_some_and(|max| snapshot.generation >= max)
        {
            session.pause().await?;
            println!("stopped at generation {}", snapshot.generation);
            break;
        }
        snapshots.changed().await.context("simulation task ended")?;
    }

    session.shutdown().await?;
    Ok(())
}
