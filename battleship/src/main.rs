use std::{
    fmt,
    io::{self, BufRead, Write},
    process,
};

use clap::{App, Arg, ArgMatches};
use log::{debug, error};
use once_cell::sync::Lazy;
use rand::{rngs::StdRng, SeedableRng};
use regex::Regex;

use solobattleship::{
    board::{BoardSize, BoardSizeError},
    game::{GameState, Session, Termination},
    turn::TurnOutcome,
};

mod logging;

const ENTER_BOARD_SIZE_MSG: &str = "enter board size:";
const WRONG_BOARD_SIZE_MSG: &str = "You've entered a wrong size for the board.";
const ENTER_COORDINATES_MSG: &str = "enter coordinates:";
const GAME_OVER_MSG: &str = "Game over";

fn main() {
    logging::init_logging();
    let matches = app().get_matches();

    let stdin = io::stdin();
    let mut input = InputReader::new(stdin.lock());
    let termination = match run(&matches, &mut input) {
        Ok(termination) => termination,
        Err(err) => {
            error!("lost the console: {}", err);
            Termination::Quit
        }
    };
    debug!("exiting with {:?}", termination);
    process::exit(termination.code());
}

/// Command line definition.
fn app() -> App<'static, 'static> {
    App::new("Battleship")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Sink a randomly placed fleet from the command line.")
        .arg(
            Arg::with_name("size")
                .short("s")
                .long("size")
                .value_name("SIZE")
                .help("board size between 5 and 26; asked for interactively if omitted")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .value_name("SEED")
                .help("seed for fleet placement, for reproducible games")
                .takes_value(true)
                .validator(|seed| {
                    seed.parse::<u64>()
                        .map(|_| ())
                        .map_err(|err| format!("invalid seed {:?}: {}", seed, err))
                }),
        )
}

/// Set up a session from the arguments and the console and play it to the end.
fn run<B: BufRead>(matches: &ArgMatches, input: &mut InputReader<B>) -> io::Result<Termination> {
    let size = match choose_board_size(matches, input)? {
        Some(Ok(size)) => size,
        Some(Err(err)) => {
            eprintln!("{}", WRONG_BOARD_SIZE_MSG);
            debug!("{}", err);
            return Ok(Termination::InvalidConfiguration);
        }
        None => return Ok(Termination::Quit),
    };

    let session = match matches.value_of("seed").and_then(|seed| seed.parse().ok()) {
        Some(seed) => Session::new(&mut StdRng::seed_from_u64(seed), size),
        None => Session::new(&mut rand::thread_rng(), size),
    };
    let mut session = match session {
        Ok(session) => session,
        Err(err) => {
            error!("{}", err);
            return Ok(Termination::from(err));
        }
    };

    play(&mut session, input)?;
    Ok(session.finish())
}

/// Get the board size from the arguments, or ask for it once. Returns `None` if the
/// input ended before a size was given.
fn choose_board_size<B: BufRead>(
    matches: &ArgMatches,
    input: &mut InputReader<B>,
) -> io::Result<Option<Result<BoardSize, BoardSizeError>>> {
    match matches.value_of("size") {
        Some(size) => Ok(Some(size.parse())),
        None => input.read_input(ENTER_BOARD_SIZE_MSG, |size| Some(size.parse())),
    }
}

/// Player input during a game.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Command {
    Quit,
    /// Zero-based target. The column is negative if the player typed a column of 0.
    Fire { row: i64, col: i64 },
    Unrecognized,
}

/// Parse a lowercased line typed during the game.
fn parse_command(input: &str) -> Command {
    /// A row letter followed by a 1-based column, e.g. `c7` or `c 7`.
    static TARGET: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^(?P<row>[a-z])\s*(?P<col>[0-9]+)$").unwrap());

    match input {
        "exit" | "quit" => Command::Quit,
        other => match TARGET.captures(other) {
            Some(captures) => {
                let row = i64::from(captures["row"].as_bytes()[0] - b'a');
                match captures["col"].parse::<i64>() {
                    Ok(col) => Command::Fire { row, col: col - 1 },
                    Err(_) => Command::Unrecognized,
                }
            }
            None => Command::Unrecognized,
        },
    }
}

/// Run turns until the game is won, the player quits, or input runs out.
fn play<B: BufRead>(session: &mut Session, input: &mut InputReader<B>) -> io::Result<()> {
    print!("{}", session.visible());
    while session.state() == GameState::AwaitingMove {
        let command = input
            .read_input_lower(ENTER_COORDINATES_MSG, |line| Some(parse_command(line)))?
            .unwrap_or(Command::Quit);
        let outcome = match command {
            Command::Quit => {
                if let Err(err) = session.quit() {
                    debug!("{}", err);
                }
                break;
            }
            Command::Fire { row, col } => session.fire_signed(row, col),
            Command::Unrecognized => Ok(TurnOutcome::InvalidMove),
        };
        match outcome {
            Ok(outcome) => {
                println!("{}", OutcomeMessage(outcome));
                print!("{}", session.visible());
            }
            Err(err) => {
                debug!("{}", err);
                break;
            }
        }
    }
    if session.state() == GameState::Won {
        println!("{}", GAME_OVER_MSG);
    }
    io::stdout().flush()
}

/// Display helper that prints the message for a turn outcome.
struct OutcomeMessage(TurnOutcome);

impl OutcomeMessage {
    fn message(&self) -> &'static str {
        match self.0 {
            TurnOutcome::InvalidMove => "invalid Move, try again",
            TurnOutcome::AlreadyHit => "Already been Hit.",
            TurnOutcome::Miss => "Miss",
            TurnOutcome::Hit(_) => "Hit!",
            TurnOutcome::Sunk(_) => "Hit and sunk.",
        }
    }
}

impl fmt::Display for OutcomeMessage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.message())
    }
}

/// Helper to read input from the player.
struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Repeatedly tries to read input until the input checker returns `Some`. Converts
    /// to ascii lower before running the checker. Returns `None` at end of input.
    fn read_input_lower<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<Option<T>>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            if !self.read_input_inner(prompt)? {
                return Ok(None);
            }
            self.buf.make_ascii_lowercase();
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(Some(val));
            }
        }
    }

    /// Repeatedly tries to read input until the input checker returns `Some`. Returns
    /// `None` at end of input.
    fn read_input<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<Option<T>>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            if !self.read_input_inner(prompt)? {
                return Ok(None);
            }
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(Some(val));
            }
        }
    }

    /// Helper to print the prompt, clear the string buffer and read a line. Returns
    /// `false` if the input has ended. A line that is not UTF-8 is read as blank.
    fn read_input_inner(&mut self, prompt: &str) -> io::Result<bool> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        self.buf.clear();
        match self.read.read_line(&mut self.buf) {
            Ok(0) => {
                println!();
                Ok(false)
            }
            Ok(_) => Ok(true),
            Err(err) if err.kind() == io::ErrorKind::InvalidData => {
                debug!("unreadable input line: {}", err);
                self.buf.clear();
                Ok(true)
            }
            Err(err) => Err(err),
        }
    }
}
