use std::ops::RangeInclusive;

/// Limits and settings for the interactive front end.
#[derive(Debug, Clone)]
pub struct ExplorerConfig {
    /// `EnvFilter` directive for tracing output.
    pub log_level: String,
    /// Where the session (secret number, score) is kept between runs.
    pub session_path: String,
    /// Show plots in a window; when false plots are only available through /export.
    pub open_window: bool,
    pub window_width: usize,
    pub window_height: usize,
    /// Seconds counted down before a guess is revealed. 0 reveals immediately.
    pub countdown_secs: u64,
    pub guess_min: u32,
    pub guess_max: u32,
    pub max_factorial: i64,
    pub max_exponent: i64,
    /// Primality recursion is one stack frame per divisor.
    pub max_prime: i64,
    pub max_tree_depth: u32,
    pub max_puzzle_level: u32,
    pub max_spiral_terms: u32,
    pub max_sort_len: usize,
    /// n! results are listed, so keep this small.
    pub max_permutation_len: usize,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            log_level:           "warn".to_string(),
            session_path:        "session.bin".to_string(),
            open_window:         true,
            window_width:        600,
            window_height:       600,
            countdown_secs:      5,
            guess_min:           1,
            guess_max:           100,
            max_factorial:       34,
            max_exponent:        64,
            max_prime:           10_000,
            max_tree_depth:      10,
            max_puzzle_level:    10,
            max_spiral_terms:    15,
            max_sort_len:        10_000,
            max_permutation_len: 7,
        }
    }
}

impl ExplorerConfig {
    /// Build config from `EXPLORER_*` environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`.
    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let mut cfg = Self::default();
        if let Some(v) = lookup("EXPLORER_LOG") { cfg.log_level = v; }
        if let Some(v) = lookup("EXPLORER_SESSION") { cfg.session_path = v; }
        override_parsed(&lookup, "EXPLORER_OPEN_WINDOW", &mut cfg.open_window);
        override_parsed(&lookup, "EXPLORER_WINDOW_WIDTH", &mut cfg.window_width);
        override_parsed(&lookup, "EXPLORER_WINDOW_HEIGHT", &mut cfg.window_height);
        override_parsed(&lookup, "EXPLORER_COUNTDOWN_SECS", &mut cfg.countdown_secs);
        override_parsed(&lookup, "EXPLORER_GUESS_MIN", &mut cfg.guess_min);
        override_parsed(&lookup, "EXPLORER_GUESS_MAX", &mut cfg.guess_max);
        override_parsed(&lookup, "EXPLORER_MAX_FACTORIAL", &mut cfg.max_factorial);
        override_parsed(&lookup, "EXPLORER_MAX_EXPONENT", &mut cfg.max_exponent);
        override_parsed(&lookup, "EXPLORER_MAX_PRIME", &mut cfg.max_prime);
        override_parsed(&lookup, "EXPLORER_MAX_TREE_DEPTH", &mut cfg.max_tree_depth);
        override_parsed(&lookup, "EXPLORER_MAX_PUZZLE_LEVEL", &mut cfg.max_puzzle_level);
        override_parsed(&lookup, "EXPLORER_MAX_SPIRAL_TERMS", &mut cfg.max_spiral_terms);
        override_parsed(&lookup, "EXPLORER_MAX_SORT_LEN", &mut cfg.max_sort_len);
        override_parsed(&lookup, "EXPLORER_MAX_PERMUTATION_LEN", &mut cfg.max_permutation_len);
        cfg
    }

    pub fn guess_range(&self) -> RangeInclusive<u32> {
        self.guess_min..=self.guess_max
    }
}

fn override_parsed<F, T>(lookup: &F, key: &str, slot: &mut T)
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    if let Some(v) = lookup(key) {
        if let Ok(parsed) = v.trim().parse() {
            *slot = parsed;
        }
    }
}
