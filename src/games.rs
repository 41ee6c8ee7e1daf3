use std::fmt;
use std::ops::RangeInclusive;

use bincode::{Decode, Encode};
use rand::Rng;

use crate::error::{ExplorerError, Result};

/// Guesses within this distance of the target count as hot.
pub const HOT_DISTANCE: u32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuessOutcome {
    Correct,
    TooHigh,
    TooLow,
}

impl GuessOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            GuessOutcome::Correct => "correct",
            GuessOutcome::TooHigh => "too high",
            GuessOutcome::TooLow => "too low",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            GuessOutcome::Correct => "🎉 Correct! You found the number!",
            GuessOutcome::TooHigh => "📉 Too high! Try again.",
            GuessOutcome::TooLow => "📈 Too low! Try again.",
        }
    }
}

impl fmt::Display for GuessOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Pure three-way comparison; the caller keeps `target` between guesses.
pub fn guessing_game(target: u32, guess: u32) -> GuessOutcome {
    if guess == target {
        GuessOutcome::Correct
    } else if guess > target {
        GuessOutcome::TooHigh
    } else {
        GuessOutcome::TooLow
    }
}

/// Hot/cold reveal shown after the countdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Proximity {
    Correct,
    Hot,
    Cold,
}

impl Proximity {
    pub fn of(target: u32, guess: u32) -> Self {
        match target.abs_diff(guess) {
            0 => Proximity::Correct,
            d if d <= HOT_DISTANCE => Proximity::Hot,
            _ => Proximity::Cold,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Proximity::Correct => "🎉 Correct! You found the number!",
            Proximity::Hot => "🔥 Hot! You're really close!",
            Proximity::Cold => "❄️ Cold! Try again.",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Encode, Decode)]
pub struct SecretNumber {
    value: u32,
    low: u32,
    high: u32,
}

impl SecretNumber {
    pub fn draw<R: Rng + ?Sized>(rng: &mut R, range: RangeInclusive<u32>) -> Result<Self> {
        if range.is_empty() {
            return Err(ExplorerError::invalid(
                "range",
                format!("{}..={} holds no numbers", range.start(), range.end()),
            ));
        }
        let (low, high) = (*range.start(), *range.end());
        Ok(SecretNumber { value: rng.gen_range(low..=high), low, high })
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn range(&self) -> RangeInclusive<u32> {
        self.low..=self.high
    }

    pub fn check(&self, guess: u32) -> GuessOutcome {
        guessing_game(self.value, guess)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PuzzleStep {
    Solved,
    /// Solve this level next.
    Next(u32),
}

impl fmt::Display for PuzzleStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PuzzleStep::Solved => {
                write!(f, "🎉 Congratulations! You've solved the recursion challenge!")
            }
            PuzzleStep::Next(level) => write!(f, "🔄 Solve this recursive step first: {}", level),
        }
    }
}

/// One step of the countdown puzzle. The player re-invokes with the returned level.
pub fn recursive_puzzle(n: u32) -> Result<PuzzleStep> {
    match n {
        0 => Err(ExplorerError::invalid("n", "challenge levels start at 1")),
        1 => Ok(PuzzleStep::Solved),
        _ => Ok(PuzzleStep::Next(n - 1)),
    }
}
