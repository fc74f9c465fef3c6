use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use turtle::{
    run, FileSource, Game, JsonReporter, Reporter, Source, Step, TextReporter, TurtleError,
};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// The game settings file: board size, start, exit and mines
    #[clap(value_name = "GAME_SETTINGS_FILE")]
    settings: PathBuf,

    /// The moves file: one sequence of 'm' and 'r' per line
    #[clap(value_name = "MOVES_FILE")]
    moves: PathBuf,

    /// Print outcomes as JSON lines
    #[clap(long)]
    json: bool,

    /// Print each step of the execution
    #[clap(short = 'd', long)]
    debug: bool,
}

fn main() {
    // A wrong argument count prints the usage and stops without failing.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return;
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let source = FileSource::new(&cli.settings, &cli.moves);
    let mut reporter: Box<dyn Reporter> = if cli.json {
        Box::new(JsonReporter::new(io::stdout()))
    } else {
        Box::new(TextReporter::new(io::stdout()))
    };

    let result = if cli.debug {
        run_debug(&source, reporter.as_mut())
    } else {
        run(&source, reporter.as_mut())
    };

    if let Err(e) = result {
        println!("An error occurred: {}", e);
    }
}

/// Plays every sequence one character at a time, printing the turtle after each step.
fn run_debug(source: &impl Source, reporter: &mut dyn Reporter) -> Result<(), TurtleError> {
    let settings = source.settings()?;
    let sequences = source.sequences()?;

    for (i, sequence) in sequences.iter().enumerate() {
        let mut game = Game::new(&settings, sequence);
        print_state(&game);

        let outcome = loop {
            let before = game.step_count();
            let step = game.step();
            if game.step_count() > before {
                print_state(&game);
            }
            if let Step::Done(outcome) = step {
                break outcome;
            }
        };

        reporter.report(i + 1, outcome)?;
    }

    Ok(())
}

fn print_state(game: &Game<'_>) {
    let turtle = game.turtle();
    println!(
        "Step: {}, Command: {}, Position: {}, Heading: {}",
        game.step_count(),
        game.last_command().map_or_else(|| "-".to_string(), |c| c.to_string()),
        turtle.position(),
        turtle.heading()
    );
}
