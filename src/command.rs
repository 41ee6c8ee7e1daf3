use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::canvas::Canvas;
use crate::config::ExplorerConfig;
use crate::error::{ExplorerError, Result};
use crate::explain::{Mode, explanation_page};
use crate::fractal::{Segment, TREE_ANGLE, TREE_ORIGIN, draw_tree};
use crate::games::{Proximity, recursive_puzzle};
use crate::input::{parse_elements, parse_integers};
use crate::math::{factorial, factorial_growth, is_prime, power};
use crate::ordering::{merge_sorted, permutations};
use crate::session::Session;
use crate::spiral::{GoldenSpiral, generate_golden_spiral};

pub const HELP: &str = "\
/factorial <n>        n! and its growth chart
/power <base> <exp>   base^exp
/prime <n>            primality by recursive trial division
/guess <n>            guess the hidden number
/newgame              draw a new hidden number
/tree <depth>         recursive tree fractal
/puzzle <level>       one step of the recursion challenge
/spiral <terms>       Fibonacci golden spiral
/sort <a, b, ...>     merge sort integers
/perms <a, b, ...>    all permutations
/explain [mode]       how each mode works
/export <file.png>    save the last plot as an image
/json                 print the last plot as JSON
/save                 save the session
/help  /quit";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Factorial(i64),
    Power(i64, i64),
    Prime(i64),
    Guess(u32),
    NewGame,
    Tree(u32),
    Puzzle(u32),
    Spiral(u32),
    Sort(String),
    Permutations(String),
    Explain(Option<Mode>),
    Export(String),
    Json,
    Save,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Command> {
        let line = line.trim();
        if line.is_empty() {
            return Err(ExplorerError::EmptyInput);
        }
        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };
        let args: Vec<&str> = rest.split_whitespace().collect();

        let command = match name {
            "/factorial" => Command::Factorial(arg(&args, 0)?),
            "/power" => Command::Power(arg(&args, 0)?, arg(&args, 1)?),
            "/prime" => Command::Prime(arg(&args, 0)?),
            "/guess" => Command::Guess(arg(&args, 0)?),
            "/newgame" => Command::NewGame,
            "/tree" => Command::Tree(arg(&args, 0)?),
            "/puzzle" => Command::Puzzle(arg(&args, 0)?),
            "/spiral" => Command::Spiral(arg(&args, 0)?),
            "/sort" => Command::Sort(rest.to_string()),
            "/perms" => Command::Permutations(rest.to_string()),
            "/explain" if rest.is_empty() => Command::Explain(None),
            "/explain" => Command::Explain(Some(
                Mode::from_name(rest).ok_or_else(|| ExplorerError::UnknownCommand(rest.to_string()))?,
            )),
            "/export" if rest.is_empty() => return Err(ExplorerError::EmptyInput),
            "/export" => Command::Export(rest.to_string()),
            "/json" => Command::Json,
            "/save" => Command::Save,
            "/help" => Command::Help,
            "/quit" => Command::Quit,
            other => return Err(ExplorerError::UnknownCommand(other.to_string())),
        };
        Ok(command)
    }
}

fn arg<T: std::str::FromStr>(args: &[&str], position: usize) -> Result<T> {
    let token = args.get(position).ok_or(ExplorerError::EmptyInput)?;
    token.parse().map_err(|_| ExplorerError::Parse {
        token: token.to_string(),
        position,
    })
}

/// Something the front end can draw.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Plot {
    Tree { depth: u32, segments: Vec<Segment> },
    Spiral(GoldenSpiral),
    /// Factorial growth: values[i] = (i + 1)!
    Bars { title: String, values: Vec<u128> },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Reply {
    pub text: String,
    pub plot: Option<Plot>,
}

impl Reply {
    fn text(text: impl Into<String>) -> Self {
        Reply { text: text.into(), plot: None }
    }

    fn with_plot(text: impl Into<String>, plot: Plot) -> Self {
        Reply { text: text.into(), plot: Some(plot) }
    }
}

/// Validates command input, calls one algorithm and remembers the last plot.
pub struct Explorer<R: Rng> {
    pub config: ExplorerConfig,
    pub session: Session,
    pub last_plot: Option<Plot>,
    rng: R,
}

impl<R: Rng> Explorer<R> {
    pub fn new(config: ExplorerConfig, session: Session, rng: R) -> Self {
        Explorer { config, session, last_plot: None, rng }
    }

    /// Rejects a guess outside the configured range, before any countdown runs.
    pub fn check_guess(&self, guess: u32) -> Result<()> {
        let range = self.config.guess_range();
        within("guess", guess, *range.start(), *range.end())
    }

    pub fn execute(&mut self, command: Command) -> Result<Reply> {
        debug!(?command, "executing");
        let reply = match command {
            Command::Factorial(n) => {
                within("n", n, 0, self.config.max_factorial)?;
                let result = factorial(n)?;
                let values = factorial_growth(n)?;
                Reply::with_plot(
                    format!("Factorial of {} is {}", n, result),
                    Plot::Bars { title: format!("Factorial Growth for {}", n), values },
                )
            }
            Command::Power(base, exp) => {
                within("exp", exp, 0, self.config.max_exponent)?;
                Reply::text(format!("{}^{} = {}", base, exp, power(base, exp)?))
            }
            Command::Prime(n) => {
                within("n", n, 0, self.config.max_prime)?;
                if is_prime(n) {
                    Reply::text(format!("{} is a prime number.", n))
                } else {
                    Reply::text(format!("{} is not a prime number.", n))
                }
            }
            Command::Guess(guess) => {
                self.check_guess(guess)?;
                let range = self.config.guess_range();
                let secret = self.session.secret_or_draw(&mut self.rng, range)?;
                let outcome = secret.check(guess);
                self.session.record_guess(outcome);
                let proximity = Proximity::of(secret.value(), guess);
                if proximity == Proximity::Correct {
                    Reply::text(format!(
                        "{} ({} games won)",
                        outcome.message(),
                        self.session.games_won
                    ))
                } else {
                    Reply::text(format!("{} {}", proximity.message(), outcome.message()))
                }
            }
            Command::NewGame => {
                self.session.new_game();
                let range = self.config.guess_range();
                Reply::text(format!(
                    "new number drawn between {} and {}",
                    range.start(),
                    range.end()
                ))
            }
            Command::Tree(depth) => {
                within("depth", depth, 1, self.config.max_tree_depth)?;
                let segments = draw_tree(TREE_ORIGIN, TREE_ANGLE, depth);
                Reply::with_plot(
                    format!("Recursion depth {}: {} branches", depth, segments.len()),
                    Plot::Tree { depth, segments },
                )
            }
            Command::Puzzle(level) => {
                within("level", level, 1, self.config.max_puzzle_level)?;
                Reply::text(recursive_puzzle(level)?.to_string())
            }
            Command::Spiral(terms) => {
                within("terms", terms, 1, self.config.max_spiral_terms)?;
                let spiral = generate_golden_spiral(terms)?;
                Reply::with_plot(
                    format!("Fibonacci Sequence: {:?}", spiral.terms),
                    Plot::Spiral(spiral),
                )
            }
            Command::Sort(text) => {
                let items = parse_integers(&text)?;
                within("length", items.len(), 1, self.config.max_sort_len)?;
                let sorted = merge_sorted(&items);
                Reply::text(format!("Original Array: {:?}\nSorted Array: {:?}", items, sorted))
            }
            Command::Permutations(text) => {
                let items = parse_elements(&text)?;
                within("length", items.len(), 1, self.config.max_permutation_len)?;
                let perms = permutations(&items);
                let mut lines = vec![format!("All Permutations ({}):", perms.len())];
                lines.extend(perms.iter().map(|p| format!("{:?}", p)));
                Reply::text(lines.join("\n"))
            }
            Command::Explain(None) => Reply::text(explanation_page()),
            Command::Explain(Some(mode)) => Reply::text(mode.explanation()),
            Command::Export(path) => {
                let plot = self.last_plot.as_ref().ok_or(ExplorerError::NothingToExport)?;
                let canvas = Canvas::render(plot, self.config.window_width, self.config.window_height);
                canvas.save_png(&path)?;
                Reply::text(format!("saved plot to {}", path))
            }
            Command::Json => {
                let plot = self.last_plot.as_ref().ok_or(ExplorerError::NothingToExport)?;
                Reply::text(serde_json::to_string_pretty(plot)?)
            }
            Command::Save => {
                self.session.save(&self.config.session_path)?;
                Reply::text(format!("session saved to {}", self.config.session_path))
            }
            Command::Help => Reply::text(HELP),
            Command::Quit => Reply::text("bye"),
        };

        if let Some(plot) = &reply.plot {
            self.last_plot = Some(plot.clone());
        }
        Ok(reply)
    }
}

fn within<T>(name: &'static str, value: T, min: T, max: T) -> Result<()>
where
    T: PartialOrd + std::fmt::Display,
{
    if value < min || value > max {
        return Err(ExplorerError::invalid(
            name,
            format!("{} is outside {}..={}", value, min, max),
        ));
    }
    Ok(())
}
