use std::{
    fs::File,
    io::{stdout, BufReader, Write},
    path::PathBuf,
};

use clap::Parser;
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};

use clue_sat::{
    clue::{
        notepad::Notepad,
        script::{Command, Script},
        Game,
    },
    config::{AccusationPolicy, Config},
    reports::Entailment,
    types::err::ErrorKind,
};

/// Replays a game of Clue from a script, and prints what is known.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The script of the game.
    script: PathBuf,

    /// Assume only the rules of the game on an incorrect accusation.
    #[arg(long)]
    rules_only: bool,

    /// Decide false, rather than true, when choosing a value for an atom.
    #[arg(long)]
    decide_false: bool,

    /// Print the knowledge base in DIMACS form at the end of the script.
    #[arg(long)]
    dimacs: bool,

    /// Print the notepad without colour.
    #[arg(long)]
    no_colour: bool,
}

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let args = Args::parse();
    let config = config_from_args(&args);

    let script = match File::open(&args.script) {
        Ok(file) => match Script::read(BufReader::new(file)) {
            Ok(script) => script,
            Err(e) => {
                println!("c Error reading script: {e}");
                std::process::exit(1);
            }
        },
        Err(e) => {
            println!("c Error opening {}: {e}", args.script.display());
            std::process::exit(1);
        }
    };

    let mut game = match script.game(config) {
        Ok(game) => game,
        Err(e) => {
            println!("c Error building game: {e}");
            std::process::exit(1);
        }
    };

    for line in &script.lines {
        let result = match line.command {
            Command::Notepad => print_notepad(&mut game, !args.no_colour),
            _ => game.apply(&line.command).map_err(CliError::from),
        };

        if let Err(e) = result {
            println!("c Error at line {}: {e}", line.number);
            std::process::exit(1);
        }
    }

    if let Err(e) = print_notepad(&mut game, !args.no_colour) {
        println!("c Error: {e}");
        std::process::exit(1);
    }

    if args.dimacs {
        print!("{}", game.context.clause_db.as_dimacs());
    }

    let counters = &game.context.counters;
    println!(
        "c {} solves, {} decisions, {} conflicts, {} propagations in {:.2?}",
        counters.total_solves,
        counters.total_decisions,
        counters.total_conflicts,
        counters.total_propagations,
        counters.time
    );

    match game.is_consistent() {
        Ok(true) => std::process::exit(0),
        Ok(false) => {
            println!("c The events of the game are inconsistent");
            std::process::exit(20);
        }
        Err(e) => {
            println!("c Error: {e}");
            std::process::exit(1);
        }
    }
}

fn config_from_args(args: &Args) -> Config {
    let mut config = Config::default();
    if args.rules_only {
        config.accusation_policy.set(AccusationPolicy::RulesOnly);
    }
    if args.decide_false {
        config.decision_polarity.set(false);
    }
    config
}

/// Errors from replaying a script.
#[derive(Debug)]
enum CliError {
    Game(ErrorKind),
    Io(std::io::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Game(e) => write!(f, "{e}"),
            Self::Io(e) => write!(f, "Writing the notepad: {e}"),
        }
    }
}

impl From<ErrorKind> for CliError {
    fn from(e: ErrorKind) -> Self {
        CliError::Game(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

/// Prints the notepad of the game, with known cells in colour if `colour` is true.
fn print_notepad(game: &mut Game, colour: bool) -> Result<(), CliError> {
    let notepad = Notepad::from_game(game)?;
    let mut stdout = stdout();

    match colour {
        true => write_coloured(&mut stdout, &notepad)?,
        false => {
            write!(stdout, "{notepad}")?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn write_coloured(out: &mut impl Write, notepad: &Notepad) -> std::io::Result<()> {
    for owner in notepad.owners() {
        out.queue(Print(format!("\t{owner}")))?;
    }
    out.queue(Print("\n"))?;

    for (item, row) in notepad.rows() {
        out.queue(Print(item))?;
        for entailment in row {
            out.queue(Print("\t"))?;
            match entailment {
                Entailment::True => out.queue(SetForegroundColor(Color::Green))?,
                Entailment::False => out.queue(SetForegroundColor(Color::Red))?,
                Entailment::Unknown => out.queue(ResetColor)?,
            };
            out.queue(Print(entailment.symbol()))?;
            out.queue(ResetColor)?;
        }
        out.queue(Print("\n"))?;
    }

    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clue_sat::{
        clue::roster::{Category, Roster},
        config::Config,
    };

    /// Accepts a fixed number of bytes, and then fails as a closed pipe.
    struct ClosedPipe {
        capacity: usize,
    }

    impl Write for ClosedPipe {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            match self.capacity {
                0 => Err(std::io::ErrorKind::BrokenPipe.into()),
                capacity => {
                    let written = buf.len().min(capacity);
                    self.capacity -= written;
                    Ok(written)
                }
            }
        }

        fn flush(&mut self) -> std::io::Result<()> {
            match self.capacity {
                0 => Err(std::io::ErrorKind::BrokenPipe.into()),
                _ => Ok(()),
            }
        }
    }

    fn small_notepad() -> Notepad {
        let roster = Roster::new(
            &["a", "b"],
            [
                Category::new("suspects", &["s"]),
                Category::new("weapons", &["w"]),
                Category::new("rooms", &["r1", "r2"]),
            ],
        )
        .unwrap();
        let mut game = Game::new(roster, Config::default()).unwrap();
        game.hand("a", &["r1"]).unwrap();
        Notepad::from_game(&mut game).unwrap()
    }

    #[test]
    fn closed_output_is_an_error() {
        let notepad = small_notepad();
        let mut out = ClosedPipe { capacity: 8 };
        let result = write_coloured(&mut out, &notepad);
        assert!(result.is_err());
    }

    #[test]
    fn coloured_output_has_every_cell() {
        let notepad = small_notepad();
        let mut out = Vec::default();
        assert!(write_coloured(&mut out, &notepad).is_ok());

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("\ta\tb\tcf\n"));
        assert_eq!(text.matches('Y').count(), 4);
        assert_eq!(text.lines().count(), 5);
    }
}
