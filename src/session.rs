use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;

use bincode::{Decode, Encode};
use rand::Rng;
use tracing::{debug, info};

use crate::error::Result;
use crate::games::{GuessOutcome, SecretNumber};

/// State the front end keeps across commands. The algorithms themselves hold none.
#[derive(Clone, Debug, Default, PartialEq, Eq, Encode, Decode)]
pub struct Session {
    /// Drawn on the first guess of a game, kept until it is found.
    pub secret: Option<SecretNumber>,
    pub guesses: u32,
    pub games_won: u32,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current secret, drawing one if no game is running or the running
    /// game was drawn from a different range (e.g. a session saved under other settings).
    pub fn secret_or_draw<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        range: RangeInclusive<u32>,
    ) -> Result<SecretNumber> {
        if let Some(secret) = self.secret {
            if secret.range() == range {
                return Ok(secret);
            }
            debug!(value = secret.value(), "discarding secret drawn from another range");
        }
        let secret = SecretNumber::draw(rng, range)?;
        let (low, high) = secret.range().into_inner();
        debug!(low, high, "drew secret number");
        self.secret = Some(secret);
        self.guesses = 0;
        Ok(secret)
    }

    pub fn record_guess(&mut self, outcome: GuessOutcome) {
        self.guesses += 1;
        if outcome == GuessOutcome::Correct {
            self.games_won += 1;
            self.secret = None;
        }
    }

    /// Forget the current secret; the next guess starts a fresh game.
    pub fn new_game(&mut self) {
        self.secret = None;
        self.guesses = 0;
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let cfg = bincode::config::standard();
        let encoded = bincode::encode_to_vec(self, cfg)?;
        fs::write(path.as_ref(), encoded)?;
        info!(path = %path.as_ref().display(), games_won = self.games_won, "session saved");
        Ok(())
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = fs::read(path.as_ref())?;
        let cfg = bincode::config::standard();
        let (session, _len): (Session, usize) = bincode::decode_from_slice(&data, cfg)?;
        info!(path = %path.as_ref().display(), games_won = session.games_won, "session loaded");
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn secret_survives_wrong_guesses_and_clears_on_correct() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut session = Session::new();

        let secret = session.secret_or_draw(&mut rng, 1..=100).unwrap();
        let wrong = if secret.value() == 1 { 2 } else { 1 };
        session.record_guess(secret.check(wrong));
        assert_eq!(session.secret_or_draw(&mut rng, 1..=100).unwrap(), secret);
        assert_eq!(session.guesses, 1);

        session.record_guess(secret.check(secret.value()));
        assert_eq!(session.secret, None);
        assert_eq!(session.games_won, 1);
    }

    #[test]
    fn secret_from_another_range_is_redrawn() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut session = Session::new();
        session.secret_or_draw(&mut rng, 1..=100).unwrap();
        session.guesses = 4;

        let secret = session.secret_or_draw(&mut rng, 1..=10).unwrap();
        assert_eq!(secret.range(), 1..=10);
        assert!((1..=10).contains(&secret.value()));
        assert_eq!(session.secret, Some(secret));
        assert_eq!(session.guesses, 0);
    }

    #[test]
    fn save_then_load_keeps_the_secret() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut session = Session::new();
        session.secret_or_draw(&mut rng, 1..=100).unwrap();
        session.guesses = 3;

        let path = std::env::temp_dir()
            .join(format!("recursion_explorer_session_{}.bin", std::process::id()));
        session.save(&path).unwrap();
        let loaded = Session::load(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(loaded, session);
    }
}
